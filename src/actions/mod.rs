//! Asynchronous use cases.
//!
//! Every action that wraps an API call follows the same shape: mark the
//! operation started, await the call, record the result or the classified
//! failure, and unconditionally mark the operation ended. Wrapped errors
//! never escape the action; exactly one attempt is made per dispatch, and a
//! retry is a fresh user-initiated dispatch.

mod folders;
mod items;
mod navigation;
mod transfer;
mod user;

pub use folders::{
    CreateFolderAction, GetFolderAction, GetFolderContentAction, GetRootFolderAction,
    RefreshListAction,
};
pub use items::{RemoveListItemAction, RenameListItemAction};
pub use navigation::RouteChangedAction;
pub use transfer::{GetFileContentAction, UploadFileAction};
pub use user::{GetUserAction, LogOutAction};

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::state::StateManager;

/// One async use case, run by [`StateManager::dispatch_action`].
///
/// `cancel` is the navigation scope the action was dispatched under; actions
/// that chain into a listing refresh check it so a refresh for a folder the
/// user already left is dropped. The primary request itself always runs to
/// completion.
#[async_trait]
pub trait Action: Send + Sync {
    async fn apply(
        &self,
        manager: &StateManager,
        cancel: &CancellationToken,
    ) -> anyhow::Result<()>;
}
