use std::sync::Arc;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use super::{Action, RefreshListAction};
use crate::api::ApiError;
use crate::models::{FileModel, FolderModel};
use crate::mutators::Mutator;
use crate::services::{FileDownloader, SelectFileService};
use crate::state::StateManager;

/// Uploads a user-selected file into a parent folder.
pub struct UploadFileAction {
    parent_folder: FolderModel,
    selector: Arc<dyn SelectFileService>,
}

impl UploadFileAction {
    pub fn new(parent_folder: FolderModel, selector: Arc<dyn SelectFileService>) -> Self {
        Self {
            parent_folder,
            selector,
        }
    }
}

#[async_trait]
impl Action for UploadFileAction {
    async fn apply(
        &self,
        manager: &StateManager,
        cancel: &CancellationToken,
    ) -> anyhow::Result<()> {
        let parent = &self.parent_folder;
        // Selection happens before anything is marked in flight; a cancelled
        // or failed pick has no recovery contract and propagates as-is.
        let file = self.selector.select_file().await?;

        manager.mutate(Mutator::AddParentFolderToUploadingList(parent.clone()));
        match manager.api().upload_file(parent, &file).await {
            Ok(item) => {
                tracing::debug!(item_id = %item.id(), parent_id = %parent.id, "file uploaded");
                let displayed = manager.snapshot().folder.map(|folder| folder.id);
                if !cancel.is_cancelled() && displayed.as_deref() == Some(parent.id.as_str()) {
                    let _ = manager.dispatch_action(RefreshListAction).await;
                }
            }
            Err(error) => manager.mutate(Mutator::UploadingFileIssue {
                error,
                file_name: file.name.clone(),
                parent_folder: parent.clone(),
            }),
        }
        manager.mutate(Mutator::RemoveParentFolderFromUploadingList(parent.clone()));
        Ok(())
    }
}

/// Downloads a file's content and hands it to the [`FileDownloader`].
pub struct GetFileContentAction {
    file: FileModel,
    downloader: Arc<dyn FileDownloader>,
}

impl GetFileContentAction {
    pub fn new(file: FileModel, downloader: Arc<dyn FileDownloader>) -> Self {
        Self { file, downloader }
    }
}

#[async_trait]
impl Action for GetFileContentAction {
    async fn apply(
        &self,
        manager: &StateManager,
        _cancel: &CancellationToken,
    ) -> anyhow::Result<()> {
        let file = &self.file;
        manager.mutate(Mutator::AddFileToDownloadingInProgress(file.clone()));

        match manager.api().get_file_content(&file.id).await {
            Ok(content) => {
                if let Err(error) = self.downloader.save_file(&file.name, &content).await {
                    // A failed local save and a failed transfer look the same
                    // to the user: the file did not arrive.
                    manager.mutate(Mutator::DownloadingFileIssue {
                        error: ApiError::Network {
                            message: format!("could not save '{}': {error}", file.name),
                        },
                        file: file.clone(),
                    });
                }
            }
            Err(error) => manager.mutate(Mutator::DownloadingFileIssue {
                error,
                file: file.clone(),
            }),
        }

        manager.mutate(Mutator::RemoveFileFromDownloadingInProgress(file.clone()));
        Ok(())
    }
}
