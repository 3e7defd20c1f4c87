use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use super::Action;
use crate::models::FolderModel;
use crate::mutators::Mutator;
use crate::state::StateManager;

/// Loads the folder entity shown in the breadcrumbs.
pub struct GetFolderAction {
    folder_id: String,
}

impl GetFolderAction {
    pub fn new(folder_id: impl Into<String>) -> Self {
        Self {
            folder_id: folder_id.into(),
        }
    }
}

#[async_trait]
impl Action for GetFolderAction {
    async fn apply(
        &self,
        manager: &StateManager,
        _cancel: &CancellationToken,
    ) -> anyhow::Result<()> {
        manager.mutate(Mutator::FolderLoading(true));
        match manager.api().get_folder(&self.folder_id).await {
            Ok(folder) => manager.mutate(Mutator::Folder(folder)),
            Err(error) => manager.mutate(Mutator::FolderLoadingError(error)),
        }
        manager.mutate(Mutator::FolderLoading(false));
        Ok(())
    }
}

/// Loads the root folder, the landing target when no folder id is routed.
pub struct GetRootFolderAction;

#[async_trait]
impl Action for GetRootFolderAction {
    async fn apply(
        &self,
        manager: &StateManager,
        _cancel: &CancellationToken,
    ) -> anyhow::Result<()> {
        manager.mutate(Mutator::FolderLoading(true));
        match manager.api().get_root_folder().await {
            Ok(folder) => manager.mutate(Mutator::RootFolder(folder)),
            Err(error) => manager.mutate(Mutator::RootFolderLoadingError(error)),
        }
        manager.mutate(Mutator::FolderLoading(false));
        Ok(())
    }
}

/// Loads the listing of one folder.
pub struct GetFolderContentAction {
    folder_id: String,
}

impl GetFolderContentAction {
    pub fn new(folder_id: impl Into<String>) -> Self {
        Self {
            folder_id: folder_id.into(),
        }
    }
}

#[async_trait]
impl Action for GetFolderContentAction {
    async fn apply(
        &self,
        manager: &StateManager,
        _cancel: &CancellationToken,
    ) -> anyhow::Result<()> {
        manager.mutate(Mutator::ListItemsLoading(true));
        match manager.api().get_folder_content(&self.folder_id).await {
            Ok(items) => manager.mutate(Mutator::ListItems(items)),
            Err(error) => manager.mutate(Mutator::ListItemsLoadingError(error)),
        }
        manager.mutate(Mutator::ListItemsLoading(false));
        Ok(())
    }
}

/// Re-fetches the listing of the folder named by the current route.
///
/// Dispatched by the mutating actions after a successful delete, rename,
/// create or upload.
pub struct RefreshListAction;

#[async_trait]
impl Action for RefreshListAction {
    async fn apply(
        &self,
        manager: &StateManager,
        _cancel: &CancellationToken,
    ) -> anyhow::Result<()> {
        let folder_id = manager.snapshot().location_params.get("folderId").cloned();
        match folder_id {
            Some(folder_id) => {
                manager
                    .dispatch_action(GetFolderContentAction::new(folder_id))
                    .await
            }
            None => {
                tracing::debug!("no folder in the current route, skipping refresh");
                Ok(())
            }
        }
    }
}

/// Creates a child folder under the given parent.
pub struct CreateFolderAction {
    parent_folder: FolderModel,
}

impl CreateFolderAction {
    pub fn new(parent_folder: FolderModel) -> Self {
        Self { parent_folder }
    }
}

#[async_trait]
impl Action for CreateFolderAction {
    async fn apply(
        &self,
        manager: &StateManager,
        cancel: &CancellationToken,
    ) -> anyhow::Result<()> {
        let parent = &self.parent_folder;
        manager.mutate(Mutator::AddParentFolderToCreatingInProgress(parent.clone()));

        match manager.api().create_folder(&parent.id).await {
            Ok(folder) => {
                tracing::debug!(folder_id = %folder.id, parent_id = %parent.id, "folder created");
                let displayed = manager.snapshot().folder.map(|folder| folder.id);
                if !cancel.is_cancelled() && displayed.as_deref() == Some(parent.id.as_str()) {
                    let _ = manager.dispatch_action(RefreshListAction).await;
                }
            }
            Err(error) => manager.mutate(Mutator::FolderCreatingError(error)),
        }

        manager.mutate(Mutator::RemoveParentFolderFromCreatingInProgress(
            parent.clone(),
        ));
        Ok(())
    }
}
