pub mod dispatch;
pub mod guard;
pub mod notify;
pub mod state;
pub mod views;
pub mod wizard;
