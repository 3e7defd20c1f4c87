mod error;
mod http;
mod token;

pub use error::{ApiError, ValidationCase};
pub use http::HttpApiService;
pub use token::{InMemoryTokenStore, TokenStore};

use async_trait::async_trait;

use crate::models::{FolderModel, ListItem, UserCredentials, UserModel};
use crate::services::{FileContent, SelectedFile};

/// One async method per REST operation of the FileStore backend.
///
/// Implementations perform exactly one HTTP call per invocation and classify
/// every failure into an [`ApiError`]. Actions depend on this trait, never on
/// the concrete HTTP client, so tests can script outcomes.
#[async_trait]
pub trait FileStoreApi: Send + Sync {
    /// `POST /api/login`. Stores the returned session token on success.
    async fn log_in(&self, credentials: &UserCredentials) -> Result<(), ApiError>;

    /// `POST /api/registration`.
    async fn register(&self, credentials: &UserCredentials) -> Result<(), ApiError>;

    /// `GET /api/folder/:id`.
    async fn get_folder(&self, folder_id: &str) -> Result<FolderModel, ApiError>;

    /// `GET /api/folder/:id/content`.
    async fn get_folder_content(&self, folder_id: &str) -> Result<Vec<ListItem>, ApiError>;

    /// `GET /api/folder/root`.
    async fn get_root_folder(&self) -> Result<FolderModel, ApiError>;

    /// `DELETE /api/{file|folder}/:id`.
    async fn delete_list_item(&self, item: &ListItem) -> Result<(), ApiError>;

    /// `PUT /api/{file|folder}/:id` with the item as JSON body.
    async fn update_list_item(&self, item: &ListItem) -> Result<(), ApiError>;

    /// `POST /api/folder/:parentId/folder`.
    async fn create_folder(&self, parent_id: &str) -> Result<FolderModel, ApiError>;

    /// `GET /api/user`.
    async fn get_user(&self) -> Result<UserModel, ApiError>;

    /// `POST /api/folder/:parentId/file` as multipart form data.
    async fn upload_file(
        &self,
        parent: &FolderModel,
        file: &SelectedFile,
    ) -> Result<ListItem, ApiError>;

    /// `GET /api/file/:id`, returning the raw blob and its content type.
    async fn get_file_content(&self, file_id: &str) -> Result<FileContent, ApiError>;

    /// `POST /api/logout`. Deletes the stored token regardless of outcome.
    async fn log_out(&self) -> Result<(), ApiError>;
}
