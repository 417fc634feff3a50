use std::path::PathBuf;

use tracing::{debug, trace};

/// Looks for `file_name` in the current directory first, then at the
/// workspace root (two levels up, where the binary runs as a workspace
/// member during development).
fn find_env_file(file_name: &str) -> Option<PathBuf> {
    let local = PathBuf::from(file_name);
    if local.exists() {
        return Some(local);
    }

    let at_workspace_root = PathBuf::from("./../../").join(file_name);
    if at_workspace_root.exists() {
        return Some(at_workspace_root);
    }

    trace!("no {file_name} found in current directory or workspace root");
    None
}

fn load_env_file(file_name: &str) {
    if let Some(path) = find_env_file(file_name) {
        match dotenv::from_filename(&path) {
            Ok(_) => debug!("loaded environment variables from {}", path.display()),
            Err(e) => debug!("could not load {}: {e}", path.display()),
        }
    }
}

/// Loads `.env` and `.env.secrets` if present. Both files are optional;
/// production deployments provide real environment variables instead.
pub fn load_optional_env_files() {
    load_env_file(".env");
    load_env_file(".env.secrets");
}

pub fn configure_env() -> Result<(), anyhow::Error> {
    load_optional_env_files();
    Ok(())
}
