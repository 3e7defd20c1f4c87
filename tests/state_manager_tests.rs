use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use filestore_client::actions::GetUserAction;
use filestore_client::api::{ApiError, FileStoreApi};
use filestore_client::models::{FolderModel, ListItem, UserCredentials, UserModel};
use filestore_client::mutators::Mutator;
use filestore_client::services::{FileContent, SelectedFile};
use filestore_client::state::{State, StateField, StateManager};

/// An API that answers every call with a server error. The manager tests
/// exercise subscription plumbing, not request outcomes.
struct NullApi;

fn server_error() -> ApiError {
    ApiError::Server { status: 500 }
}

#[async_trait]
impl FileStoreApi for NullApi {
    async fn log_in(&self, _credentials: &UserCredentials) -> Result<(), ApiError> {
        Err(server_error())
    }

    async fn register(&self, _credentials: &UserCredentials) -> Result<(), ApiError> {
        Err(server_error())
    }

    async fn get_folder(&self, _folder_id: &str) -> Result<FolderModel, ApiError> {
        Err(server_error())
    }

    async fn get_folder_content(&self, _folder_id: &str) -> Result<Vec<ListItem>, ApiError> {
        Err(server_error())
    }

    async fn get_root_folder(&self) -> Result<FolderModel, ApiError> {
        Err(server_error())
    }

    async fn delete_list_item(&self, _item: &ListItem) -> Result<(), ApiError> {
        Err(server_error())
    }

    async fn update_list_item(&self, _item: &ListItem) -> Result<(), ApiError> {
        Err(server_error())
    }

    async fn create_folder(&self, _parent_id: &str) -> Result<FolderModel, ApiError> {
        Err(server_error())
    }

    async fn get_user(&self) -> Result<UserModel, ApiError> {
        Err(server_error())
    }

    async fn upload_file(
        &self,
        _parent: &FolderModel,
        _file: &SelectedFile,
    ) -> Result<ListItem, ApiError> {
        Err(server_error())
    }

    async fn get_file_content(&self, _file_id: &str) -> Result<FileContent, ApiError> {
        Err(server_error())
    }

    async fn log_out(&self) -> Result<(), ApiError> {
        Err(server_error())
    }
}

fn manager() -> StateManager {
    StateManager::new(State::new(), Arc::new(NullApi))
}

#[test]
fn test_mutate_applies_before_notifying() {
    let manager = manager();
    let seen = Arc::new(Mutex::new(Vec::new()));

    let log = Arc::clone(&seen);
    manager.subscribe(StateField::Location, move |state| {
        log.lock().unwrap().push(state.location.clone());
    });

    manager.mutate(Mutator::Location("/folder".to_string()));

    // The handler ran synchronously and observed the already-mutated state.
    assert_eq!(
        *seen.lock().unwrap(),
        vec![Some("/folder".to_string())]
    );
    assert_eq!(manager.snapshot().location.as_deref(), Some("/folder"));
}

#[test]
fn test_only_subscribers_of_the_mutated_field_are_notified() {
    let manager = manager();
    let seen = Arc::new(Mutex::new(Vec::new()));

    let log = Arc::clone(&seen);
    manager.subscribe(StateField::Location, move |_| {
        log.lock().unwrap().push("location");
    });
    let log = Arc::clone(&seen);
    manager.subscribe(StateField::IsFolderLoading, move |_| {
        log.lock().unwrap().push("loading");
    });

    manager.mutate(Mutator::FolderLoading(true));

    assert_eq!(*seen.lock().unwrap(), vec!["loading"]);
}

#[test]
fn test_handlers_run_in_registration_order() {
    let manager = manager();
    let seen = Arc::new(Mutex::new(Vec::new()));

    for label in ["first", "second", "third"] {
        let log = Arc::clone(&seen);
        manager.subscribe(StateField::IsUserLoading, move |_| {
            log.lock().unwrap().push(label);
        });
    }

    manager.mutate(Mutator::UserLoading(true));

    assert_eq!(*seen.lock().unwrap(), vec!["first", "second", "third"]);
}

#[test]
fn test_unsubscribed_handler_stops_receiving_notifications() {
    let manager = manager();
    let seen = Arc::new(Mutex::new(0u32));

    let count = Arc::clone(&seen);
    let id = manager.subscribe(StateField::IsUserLoading, move |_| {
        *count.lock().unwrap() += 1;
    });

    manager.mutate(Mutator::UserLoading(true));
    manager.unsubscribe(id);
    manager.mutate(Mutator::UserLoading(false));

    assert_eq!(*seen.lock().unwrap(), 1);
}

#[test]
fn test_unsubscribing_an_unknown_id_is_ignored() {
    let manager = manager();
    let id = manager.subscribe(StateField::Location, |_| {});
    manager.unsubscribe(id);
    // A second teardown of the same component must not panic.
    manager.unsubscribe(id);
}

#[test]
fn test_snapshot_is_detached_from_live_state() {
    let manager = manager();
    let before = manager.snapshot();

    manager.mutate(Mutator::Location("/folder".to_string()));

    assert_eq!(before.location, None);
    assert_eq!(manager.snapshot().location.as_deref(), Some("/folder"));
}

#[tokio::test]
async fn test_dispatch_runs_the_action_against_the_manager_api() {
    let manager = manager();

    manager.dispatch_action(GetUserAction).await.unwrap();

    let state = manager.snapshot();
    assert_eq!(state.user_loading_error, Some(server_error()));
    assert!(!state.is_user_loading);
}

#[test]
fn test_begin_navigation_cancels_the_previous_scope() {
    let manager = manager();
    let before = manager.navigation_token();
    assert!(!before.is_cancelled());

    let after = manager.begin_navigation();

    assert!(before.is_cancelled());
    assert!(!after.is_cancelled());
    assert!(!manager.navigation_token().is_cancelled());
}
