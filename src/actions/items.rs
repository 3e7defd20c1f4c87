use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use super::{Action, RefreshListAction};
use crate::models::ListItem;
use crate::mutators::Mutator;
use crate::state::StateManager;

/// Deletes one list item (file or folder).
pub struct RemoveListItemAction {
    item: ListItem,
}

impl RemoveListItemAction {
    pub fn new(item: ListItem) -> Self {
        Self { item }
    }
}

#[async_trait]
impl Action for RemoveListItemAction {
    async fn apply(
        &self,
        manager: &StateManager,
        cancel: &CancellationToken,
    ) -> anyhow::Result<()> {
        let item = &self.item;
        if manager.snapshot().is_item_busy(item.id()) {
            tracing::debug!(item_id = %item.id(), "delete rejected, item already has an operation in flight");
            return Ok(());
        }

        manager.mutate(Mutator::AddToDeletionInProgress(item.clone()));
        match manager.api().delete_list_item(item).await {
            Ok(()) => {
                if !cancel.is_cancelled() {
                    let _ = manager.dispatch_action(RefreshListAction).await;
                }
            }
            Err(error) => manager.mutate(Mutator::DeletionIssue {
                error,
                item: item.clone(),
            }),
        }
        manager.mutate(Mutator::RemoveFromDeletionInProgress(item.clone()));
        Ok(())
    }
}

/// Renames one list item. The item carries its new name already; the server
/// receives the whole updated entity.
pub struct RenameListItemAction {
    item: ListItem,
}

impl RenameListItemAction {
    pub fn new(item: ListItem) -> Self {
        Self { item }
    }
}

#[async_trait]
impl Action for RenameListItemAction {
    async fn apply(
        &self,
        manager: &StateManager,
        cancel: &CancellationToken,
    ) -> anyhow::Result<()> {
        let item = &self.item;
        if manager.snapshot().is_item_busy(item.id()) {
            tracing::debug!(item_id = %item.id(), "rename rejected, item already has an operation in flight");
            return Ok(());
        }

        manager.mutate(Mutator::AddToRenamingInProgress(item.clone()));
        match manager.api().update_list_item(item).await {
            Ok(()) => {
                if !cancel.is_cancelled() {
                    let _ = manager.dispatch_action(RefreshListAction).await;
                }
            }
            Err(error) => manager.mutate(Mutator::RenamingIssue {
                error,
                item: item.clone(),
            }),
        }
        manager.mutate(Mutator::RemoveFromRenamingInProgress(item.clone()));
        Ok(())
    }
}
