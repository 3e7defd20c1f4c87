//! External collaborators of the transfer actions: picking a file to upload
//! and persisting a downloaded one.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use bytes::Bytes;

/// A file picked for upload, already read into memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub content_type: String,
    pub bytes: Bytes,
}

/// Raw content of a downloaded file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileContent {
    pub bytes: Bytes,
    pub content_type: String,
}

/// Source of files to upload. The browser original opened a file-picker
/// dialog; selection failures have no recovery contract and propagate.
#[async_trait]
pub trait SelectFileService: Send + Sync {
    async fn select_file(&self) -> anyhow::Result<SelectedFile>;
}

/// Sink for downloaded files. The browser original handed the blob to the
/// browser's own download mechanism; a desktop client writes to disk.
#[async_trait]
pub trait FileDownloader: Send + Sync {
    async fn save_file(&self, name: &str, content: &FileContent) -> std::io::Result<()>;
}

/// Selects a fixed path from the local file system, guessing the MIME type
/// from the file name.
pub struct PathFileSelector {
    path: PathBuf,
}

impl PathFileSelector {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl SelectFileService for PathFileSelector {
    async fn select_file(&self) -> anyhow::Result<SelectedFile> {
        let name = self
            .path
            .file_name()
            .ok_or_else(|| anyhow::anyhow!("path has no file name: {}", self.path.display()))?
            .to_string_lossy()
            .to_string();
        let content_type = mime_guess::from_path(&self.path)
            .first_or_octet_stream()
            .to_string();
        let bytes = tokio::fs::read(&self.path).await?;

        Ok(SelectedFile {
            name,
            content_type,
            bytes: Bytes::from(bytes),
        })
    }
}

/// Writes downloaded files into a download directory.
pub struct DiskFileDownloader {
    directory: PathBuf,
}

impl DiskFileDownloader {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }
}

#[async_trait]
impl FileDownloader for DiskFileDownloader {
    async fn save_file(&self, name: &str, content: &FileContent) -> std::io::Result<()> {
        tokio::fs::create_dir_all(&self.directory).await?;
        let target = self.directory.join(name);
        tokio::fs::write(&target, &content.bytes).await?;
        tracing::debug!(path = %target.display(), content_type = %content.content_type, "saved file");
        Ok(())
    }
}
