//! Upload limits and accepted file types.

use serde::{Deserialize, Serialize};

/// Upload configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadConfig {
    /// Maximum upload size in bytes (default 10 MB).
    #[serde(default = "default_max_upload")]
    pub max_upload_size_bytes: u64,
    /// File extensions (lowercase, without dot) accepted for upload.
    #[serde(default = "default_allowed_extensions")]
    pub allowed_extensions: Vec<String>,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            max_upload_size_bytes: default_max_upload(),
            allowed_extensions: default_allowed_extensions(),
        }
    }
}

impl UploadConfig {
    /// Whether a file name carries an accepted extension.
    pub fn is_extension_allowed(&self, file_name: &str) -> bool {
        let ext = file_name
            .rsplit('.')
            .next()
            .filter(|ext| *ext != file_name)
            .map(str::to_lowercase);
        match ext {
            Some(ext) => self.allowed_extensions.iter().any(|a| *a == ext),
            None => false,
        }
    }
}

fn default_max_upload() -> u64 {
    10_485_760 // 10 MB
}

fn default_allowed_extensions() -> Vec<String> {
    ["pdf", "doc", "docx", "xls", "xlsx", "png", "jpg", "jpeg", "txt"]
        .into_iter()
        .map(String::from)
        .collect()
}
