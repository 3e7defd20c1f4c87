use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use super::Action;
use crate::mutators::Mutator;
use crate::state::StateManager;

/// Loads the logged-in user's details.
pub struct GetUserAction;

#[async_trait]
impl Action for GetUserAction {
    async fn apply(
        &self,
        manager: &StateManager,
        _cancel: &CancellationToken,
    ) -> anyhow::Result<()> {
        manager.mutate(Mutator::UserLoading(true));
        match manager.api().get_user().await {
            Ok(user) => manager.mutate(Mutator::SetUser(user)),
            Err(error) => manager.mutate(Mutator::UserLoadingError(error)),
        }
        manager.mutate(Mutator::UserLoading(false));
        Ok(())
    }
}

/// Ends the session. The stored token is deleted by the API layer whether or
/// not the server call succeeds; the error, if any, propagates to the
/// dispatcher since there is nothing to record in state.
pub struct LogOutAction;

#[async_trait]
impl Action for LogOutAction {
    async fn apply(
        &self,
        manager: &StateManager,
        _cancel: &CancellationToken,
    ) -> anyhow::Result<()> {
        manager.api().log_out().await?;
        Ok(())
    }
}
