use crate::error::AppError;
use std::path::{Path, PathBuf};

const TASKS_FILE_NAME: &str = "tasks.json";
const THEME_FILE_NAME: &str = "theme.txt";

const STORE_ENV_VAR: &str = "TASKBOARD_STORE_PATH";
const THEME_ENV_VAR: &str = "TASKBOARD_THEME_PATH";

/// A named durable key-value slot.
///
/// `read` distinguishes "slot absent" (`Ok(None)`) from a failed read;
/// callers that want the degrade-to-fallback behavior go through
/// [`gateway`](crate::storage::gateway) instead of this trait directly.
pub trait Slot {
    fn read(&self) -> Result<Option<String>, AppError>;
    fn write(&self, raw: &str) -> Result<(), AppError>;
}

/// File-backed slot. One slot per file; the board uses two, one for the
/// task collection and one for the theme preference.
#[derive(Debug, Clone)]
pub struct FileSlot {
    path: PathBuf,
}

impl FileSlot {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Slot for FileSlot {
    fn read(&self) -> Result<Option<String>, AppError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(&self.path)
            .map_err(|err| AppError::io(format!("{}: {}", self.path.display(), err)))?;
        Ok(Some(content))
    }

    fn write(&self, raw: &str) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, raw)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let permissions = std::fs::Permissions::from_mode(0o600);
            std::fs::set_permissions(&self.path, permissions)?;
        }

        Ok(())
    }
}

/// The well-known slot holding the task collection.
pub fn tasks_slot() -> Result<FileSlot, AppError> {
    slot_path(STORE_ENV_VAR, TASKS_FILE_NAME).map(FileSlot::new)
}

/// The well-known slot holding the theme preference, deliberately
/// separate from the task slot.
pub fn theme_slot() -> Result<FileSlot, AppError> {
    slot_path(THEME_ENV_VAR, THEME_FILE_NAME).map(FileSlot::new)
}

fn slot_path(env_var: &str, file_name: &str) -> Result<PathBuf, AppError> {
    if let Ok(path) = std::env::var(env_var)
        && !path.trim().is_empty()
    {
        return Ok(PathBuf::from(path));
    }

    if cfg!(windows) {
        let appdata =
            std::env::var("APPDATA").map_err(|_| AppError::invalid_data("APPDATA is not set"))?;
        Ok(PathBuf::from(appdata).join("taskboard").join(file_name))
    } else {
        let home = std::env::var("HOME").map_err(|_| AppError::invalid_data("HOME is not set"))?;
        Ok(PathBuf::from(home)
            .join(".config")
            .join("taskboard")
            .join(file_name))
    }
}
