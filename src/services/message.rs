use crate::error::AppError;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Welcome message stored as a plain-text file, resolved against the process
/// working directory. Read in full on every request so edits to the file show
/// up without a restart.
#[derive(Clone)]
pub struct MessageFile {
    path: PathBuf,
}

impl MessageFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn load(&self) -> Result<String, AppError> {
        if !self.path.exists() {
            return Err(AppError::NotFound(anyhow::anyhow!(
                "welcome message file not found at {}",
                self.path.display()
            )));
        }
        let message = fs::read_to_string(&self.path).await?;
        Ok(message)
    }
}
