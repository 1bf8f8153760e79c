//! File System Utilities
//!
//! Configuration and data directory management.

use crate::error::{Error, Result};
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("org", "idm", "idm-console").ok_or_else(|| Error::Invalid {
        message: "Could not determine project directories".to_string(),
    })
}

/// Get or create the console's configuration directory
///
/// Platform-specific locations:
/// - **Linux**: `~/.config/idm-console/` or `$XDG_CONFIG_HOME/idm-console/`
/// - **macOS**: `~/Library/Application Support/org.idm.idm-console/`
/// - **Windows**: `C:\Users\<User>\AppData\Roaming\idm\idm-console\config\`
pub fn get_or_create_config_dir() -> Result<PathBuf> {
    ensure_dir(project_dirs()?.config_dir())
}

/// Get the data directory, used for log files
///
/// Platform-specific locations:
/// - **Linux**: `~/.local/share/idm-console/`
/// - **macOS**: `~/Library/Application Support/org.idm.idm-console/`
/// - **Windows**: `C:\Users\<User>\AppData\Roaming\idm\idm-console\data\`
pub fn get_or_create_data_dir() -> Result<PathBuf> {
    ensure_dir(project_dirs()?.data_dir())
}

/// Create `dir` if missing. Existing contents are never touched.
fn ensure_dir(dir: &Path) -> Result<PathBuf> {
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(dir.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir() -> PathBuf {
        std::env::temp_dir().join(format!("idm-console-fs-{}", uuid::Uuid::new_v4()))
    }

    #[test]
    fn ensure_dir_creates_missing_directory() {
        let base = scratch_dir();
        let dir = base.join("config");

        assert_eq!(ensure_dir(&dir).expect("create"), dir);
        assert!(dir.is_dir());
        let _ = fs::remove_dir_all(&base);
    }

    #[test]
    fn ensure_dir_keeps_existing_files_and_subdirectories() {
        let base = scratch_dir();
        fs::create_dir_all(base.join("profiles")).expect("create nested");
        fs::write(base.join("idm-console.toml"), "server_url = \"x\"").expect("write file");
        fs::write(base.join("profiles").join("prod.toml"), "log.level = \"debug\"")
            .expect("write nested file");

        ensure_dir(&base).expect("existing dir");

        assert_eq!(
            fs::read_to_string(base.join("idm-console.toml")).expect("top-level file"),
            "server_url = \"x\""
        );
        assert!(base.join("profiles").join("prod.toml").is_file());
        let _ = fs::remove_dir_all(&base);
    }
}
