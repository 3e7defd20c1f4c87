use std::collections::HashMap;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use super::Action;
use crate::mutators::Mutator;
use crate::state::StateManager;

/// Applies a route change produced by the router.
///
/// The router itself is a black box; this action only records the new
/// location in state. A real change also rotates the navigation scope, so
/// chained refreshes belonging to the previous route are abandoned.
pub struct RouteChangedAction {
    location: String,
    params: HashMap<String, String>,
}

impl RouteChangedAction {
    pub fn new(location: impl Into<String>, params: HashMap<String, String>) -> Self {
        Self {
            location: location.into(),
            params,
        }
    }
}

#[async_trait]
impl Action for RouteChangedAction {
    async fn apply(
        &self,
        manager: &StateManager,
        _cancel: &CancellationToken,
    ) -> anyhow::Result<()> {
        let current = manager.snapshot().location;

        if current.as_deref() != Some(self.location.as_str()) {
            manager.begin_navigation();
            manager.mutate(Mutator::Location(self.location.clone()));
            manager.mutate(Mutator::LocationParams(self.params.clone()));
        } else if !self.params.is_empty() {
            // Same page, different parameters (e.g. another folder id).
            manager.begin_navigation();
            manager.mutate(Mutator::LocationParams(self.params.clone()));
        }
        Ok(())
    }
}
