use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use tokio_util::sync::CancellationToken;

use super::{State, StateField};
use crate::actions::Action;
use crate::api::FileStoreApi;
use crate::mutators::Mutator;

/// Handle returned by [`StateManager::subscribe`], used for teardown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Handler = Arc<dyn Fn(&State) + Send + Sync>;

struct Subscriber {
    id: SubscriptionId,
    field: StateField,
    handler: Handler,
}

/// The central coordinator of the unidirectional data flow.
///
/// Owns the one [`State`] of the session, applies [`Mutator`]s to it, runs
/// [`Action`]s against the API collaborator, and notifies field-scoped
/// subscribers after every mutation.
///
/// There is no dispatch queue: concurrently dispatched actions interleave at
/// their await points and field writes are last-write-wins. Between awaits,
/// a `mutate` call (apply plus notification) completes atomically with
/// respect to other actions.
pub struct StateManager {
    state: Mutex<State>,
    api: Arc<dyn FileStoreApi>,
    subscribers: Mutex<Vec<Subscriber>>,
    next_subscription: AtomicU64,
    navigation: Mutex<CancellationToken>,
}

impl StateManager {
    /// Takes ownership of the session's state. Create one per session and
    /// drop it when the session ends; nothing here is process-global.
    pub fn new(initial_state: State, api: Arc<dyn FileStoreApi>) -> Self {
        Self {
            state: Mutex::new(initial_state),
            api,
            subscribers: Mutex::new(Vec::new()),
            next_subscription: AtomicU64::new(0),
            navigation: Mutex::new(CancellationToken::new()),
        }
    }

    pub fn api(&self) -> &dyn FileStoreApi {
        self.api.as_ref()
    }

    /// Cloned read of the current state.
    pub fn snapshot(&self) -> State {
        self.state.lock().expect("state lock poisoned").clone()
    }

    /// Apply one mutator, then synchronously invoke every handler subscribed
    /// to the mutated field, in registration order, with the fresh state.
    /// All notifications complete before this returns.
    pub fn mutate(&self, mutator: Mutator) {
        let field = mutator.target_field();
        let snapshot = {
            let mut state = self.state.lock().expect("state lock poisoned");
            mutator.apply(&mut state);
            state.clone()
        };
        tracing::trace!(?field, "state mutated");

        // Handlers may mutate or dispatch again; both locks are released
        // before any handler runs.
        let handlers: Vec<Handler> = {
            let subscribers = self.subscribers.lock().expect("subscriber lock poisoned");
            subscribers
                .iter()
                .filter(|subscriber| subscriber.field == field)
                .map(|subscriber| Arc::clone(&subscriber.handler))
                .collect()
        };
        for handler in handlers {
            handler(&snapshot);
        }
    }

    /// Run an action against this manager. The future resolves when the
    /// action settles; callers may await it or fire-and-forget.
    pub async fn dispatch_action<A: Action>(&self, action: A) -> anyhow::Result<()> {
        tracing::debug!(action = std::any::type_name::<A>(), "dispatching action");
        let cancel = self.navigation_token();
        action.apply(self, &cancel).await
    }

    /// Register a handler for one state field. Handlers for the same field
    /// run in registration order.
    pub fn subscribe<F>(&self, field: StateField, handler: F) -> SubscriptionId
    where
        F: Fn(&State) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_subscription.fetch_add(1, Ordering::Relaxed));
        let mut subscribers = self.subscribers.lock().expect("subscriber lock poisoned");
        subscribers.push(Subscriber {
            id,
            field,
            handler: Arc::new(handler),
        });
        id
    }

    /// Deregister a handler. Call during component teardown so destroyed
    /// views stop receiving notifications. Unknown ids are ignored.
    pub fn unsubscribe(&self, id: SubscriptionId) {
        let mut subscribers = self.subscribers.lock().expect("subscriber lock poisoned");
        subscribers.retain(|subscriber| subscriber.id != id);
    }

    /// The cancellation token covering actions dispatched since the last
    /// navigation.
    pub fn navigation_token(&self) -> CancellationToken {
        self.navigation
            .lock()
            .expect("navigation lock poisoned")
            .clone()
    }

    /// Cancel the previous navigation scope and open a fresh one.
    ///
    /// In-flight requests still run to completion, but their chained
    /// refresh steps observe the cancelled token and are dropped.
    pub fn begin_navigation(&self) -> CancellationToken {
        let mut navigation = self.navigation.lock().expect("navigation lock poisoned");
        navigation.cancel();
        *navigation = CancellationToken::new();
        navigation.clone()
    }
}
