use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use filestore_client::{
    actions::{
        GetFolderAction, GetRootFolderAction, GetUserAction, LogOutAction, RefreshListAction,
        RouteChangedAction,
    },
    api::{FileStoreApi, HttpApiService, InMemoryTokenStore, TokenStore},
    config::Config,
    models::UserCredentials,
    notices,
    state::{State, StateField, StateManager},
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    let env_filter =
        tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into());

    let log_format = std::env::var("LOG_FORMAT").unwrap_or_default();
    match log_format.to_lowercase().as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_target(true)
                        .with_span_list(false),
                )
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer())
                .init();
        }
    }

    info!(
        version = env!("CARGO_PKG_VERSION"),
        "filestore-client starting"
    );

    // Load configuration
    let config = Config::load()?;
    info!("Connecting to: {}", config.base_url);

    // Wire the collaborators: token store, HTTP client, API service, and the
    // session's state/manager pair. The state lives exactly as long as main.
    let tokens: Arc<dyn TokenStore> = Arc::new(InMemoryTokenStore::new());
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.request_timeout_secs))
        .build()?;
    let api = Arc::new(HttpApiService::new(
        &config.base_url,
        client,
        Arc::clone(&tokens),
    ));
    let manager = StateManager::new(State::new(), api.clone());

    // Field-scoped subscriptions standing in for UI components.
    manager.subscribe(StateField::ListItems, |state| {
        info!(count = state.list_items.len(), "listing updated");
        for item in &state.list_items {
            info!(kind = item.kind(), id = item.id(), name = item.name(), "item");
        }
    });
    manager.subscribe(StateField::CurrentUser, |state| {
        if let Some(user) = &state.current_user {
            info!(user = %user.name, "logged in as");
        }
    });
    manager.subscribe(StateField::ListItemsLoadingError, |state| {
        if let Some(error) = &state.list_items_loading_error {
            let notice = notices::list_loading_notice(error);
            tracing::warn!(message = %notice.message, follow_up = ?notice.follow_up, "listing failed");
        }
    });
    manager.subscribe(StateField::FolderLoadingError, |state| {
        if let Some(error) = &state.folder_loading_error {
            let notice = notices::folder_loading_notice(error);
            tracing::warn!(message = %notice.message, follow_up = ?notice.follow_up, "folder load failed");
        }
    });
    manager.subscribe(StateField::RootFolderLoadingError, |state| {
        if let Some(error) = &state.root_folder_loading_error {
            let notice = notices::folder_loading_notice(error);
            tracing::warn!(message = %notice.message, follow_up = ?notice.follow_up, "root folder load failed");
        }
    });

    let (Some(login), Some(password)) = (config.login.clone(), config.password.clone()) else {
        info!("Set FILESTORE_LOGIN and FILESTORE_PASSWORD to run a session");
        return Ok(());
    };

    api.log_in(&UserCredentials::new(login, password)).await?;
    info!("Session established");

    // Land on the explorer page and walk into the root folder, the same
    // sequence the router drives in a UI session.
    manager
        .dispatch_action(RouteChangedAction::new("/folder", HashMap::new()))
        .await?;
    manager.dispatch_action(GetUserAction).await?;
    manager.dispatch_action(GetRootFolderAction).await?;

    if let Some(root) = manager.snapshot().root_folder {
        let params = HashMap::from([("folderId".to_string(), root.id.clone())]);
        manager
            .dispatch_action(RouteChangedAction::new("/folder", params))
            .await?;
        manager.dispatch_action(GetFolderAction::new(&root.id)).await?;
        manager.dispatch_action(RefreshListAction).await?;
    }

    if let Err(error) = manager.dispatch_action(LogOutAction).await {
        tracing::warn!(%error, "log out failed; local session cleared anyway");
    }

    info!("Session complete");
    Ok(())
}
