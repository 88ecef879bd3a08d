use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::types::RawFile;

/// 50 MB, the per-file limit advertised on the upload screen.
pub const DEFAULT_MAX_FILE_BYTES: u64 = 50 * 1024 * 1024;

/// MIME types the upload screen advertises: PDF, DOC, JPG, PNG, MP4.
pub const DEFAULT_ACCEPTED_TYPES: [&str; 6] = [
    "application/pdf",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    "image/jpeg",
    "image/png",
    "video/mp4",
];

#[derive(Debug, Clone, Error)]
pub enum UploadError {
    #[error("file is {size_bytes} bytes, above the {limit_bytes} byte per-file limit")]
    FileTooLarge { size_bytes: u64, limit_bytes: u64 },
    #[error("unsupported file type: {0}")]
    UnsupportedType(String),
}

/// A file turned away at accept time. No record is created for it.
#[derive(Debug, Clone)]
pub struct Rejection {
    pub name: String,
    pub reason: UploadError,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadPolicy {
    pub max_file_bytes: u64,
    pub accepted_types: Vec<String>,
}

impl Default for UploadPolicy {
    fn default() -> Self {
        Self {
            max_file_bytes: DEFAULT_MAX_FILE_BYTES,
            accepted_types: DEFAULT_ACCEPTED_TYPES
                .iter()
                .map(|t| t.to_string())
                .collect(),
        }
    }
}

impl UploadPolicy {
    pub fn check(&self, file: &RawFile) -> Result<(), UploadError> {
        if !self.accepted_types.iter().any(|t| t == &file.mime_type) {
            return Err(UploadError::UnsupportedType(file.mime_type.clone()));
        }
        if file.size_bytes > self.max_file_bytes {
            return Err(UploadError::FileTooLarge {
                size_bytes: file.size_bytes,
                limit_bytes: self.max_file_bytes,
            });
        }
        Ok(())
    }
}
