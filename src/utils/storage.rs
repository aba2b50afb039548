use chrono::Utc;
use log::{debug, warn};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::errors::AppError;

const MAX_NAME_ATTEMPTS: usize = 5;
/// Leaves room for the timestamp prefix within the usual 255 byte name limit.
pub const MAX_FILENAME_LEN: usize = 200;

/// Local directory holding employee images.
#[derive(Debug, Clone)]
pub struct UploadStore {
    dir: PathBuf,
    max_size: usize,
}

impl UploadStore {
    pub fn new(dir: impl Into<PathBuf>, max_size: usize) -> Self {
        UploadStore {
            dir: dir.into(),
            max_size,
        }
    }

    /// Create the upload directory if it is missing.
    pub async fn init(&self) -> std::io::Result<()> {
        fs::create_dir_all(&self.dir).await
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn max_size(&self) -> usize {
        self.max_size
    }

    pub fn path_of(&self, filename: &str) -> PathBuf {
        self.dir.join(filename)
    }

    /// Write `contents` under a `<unix-nanos>_<original name>` filename and
    /// return that filename. Existing files are never overwritten.
    pub async fn save(&self, original_name: &str, contents: &[u8]) -> Result<String, AppError> {
        let original = sanitize_filename(original_name)
            .ok_or_else(|| AppError::BadRequest("Invalid file name".to_string()))?;
        if original.len() > MAX_FILENAME_LEN {
            return Err(AppError::BadRequest(format!(
                "File name exceeds {} bytes",
                MAX_FILENAME_LEN
            )));
        }
        if contents.len() > self.max_size {
            return Err(AppError::PayloadTooLarge(format!(
                "File size exceeds {} bytes limit",
                self.max_size
            )));
        }

        for _ in 0..MAX_NAME_ATTEMPTS {
            let nanos = Utc::now().timestamp_nanos_opt().ok_or_else(|| {
                AppError::InternalServerError("System clock out of range".to_string())
            })?;
            let filename = stored_filename(nanos, &original);
            let path = self.path_of(&filename);

            let mut file = match fs::OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(&path)
                .await
            {
                Ok(file) => file,
                Err(err) if err.kind() == ErrorKind::AlreadyExists => continue,
                Err(err) => return Err(err.into()),
            };

            let written = async {
                file.write_all(contents).await?;
                file.flush().await
            }
            .await;
            if let Err(err) = written {
                let _ = fs::remove_file(&path).await;
                return Err(err.into());
            }

            debug!("Stored upload {} ({} bytes)", path.display(), contents.len());
            return Ok(filename);
        }

        Err(AppError::StorageError(format!(
            "Could not find a free file name for {}",
            original
        )))
    }

    /// Delete a stored file. A file that is already gone is not an error;
    /// `Ok(false)` is returned instead.
    pub async fn remove(&self, filename: &str) -> Result<bool, AppError> {
        if sanitize_filename(filename).as_deref() != Some(filename) {
            return Err(AppError::StorageError(format!(
                "Refusing to remove {:?} outside the upload directory",
                filename
            )));
        }

        let path = self.path_of(filename);
        match fs::remove_file(&path).await {
            Ok(()) => Ok(true),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                warn!("Upload {} was already missing", path.display());
                Ok(false)
            }
            Err(err) => Err(err.into()),
        }
    }
}

/// Keep only the last path component of a client supplied filename.
pub fn sanitize_filename(name: &str) -> Option<String> {
    let base = name.rsplit(['/', '\\']).next()?.trim();
    if base.is_empty() || base == "." || base == ".." {
        return None;
    }
    Some(base.to_string())
}

pub fn stored_filename(nanos: i64, original: &str) -> String {
    format!("{}_{}", nanos, original)
}
