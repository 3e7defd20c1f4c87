use std::sync::Arc;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder, Response};
use serde::Deserialize;

use super::error::{ApiError, ValidationErrorsBody};
use super::token::TokenStore;
use super::FileStoreApi;
use crate::models::{FolderModel, ListItem, UserCredentials, UserModel};
use crate::services::{FileContent, SelectedFile};

#[derive(Debug, Deserialize)]
struct TokenBody {
    token: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FolderContentBody {
    list_items: Vec<ListItem>,
}

/// reqwest-backed implementation of [`FileStoreApi`].
///
/// Holds the backend base URL, a shared HTTP client, and the session token
/// store. Each method issues one request and funnels every non-200 response
/// through [`HttpApiService::classify`].
pub struct HttpApiService {
    base_url: String,
    client: Client,
    tokens: Arc<dyn TokenStore>,
}

impl HttpApiService {
    pub fn new(base_url: impl Into<String>, client: Client, tokens: Arc<dyn TokenStore>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            client,
            tokens,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Attach the `Authorization: Bearer <token>` header, if a session exists.
    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        match self.tokens.token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Resolve a response into itself (200) or a classified error.
    async fn validate(&self, response: Response) -> Result<Response, ApiError> {
        let status = response.status().as_u16();
        if status == 200 {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(self.classify(status, &body))
    }

    /// Classify a non-200 status and its body into an [`ApiError`].
    ///
    /// A 401 also deletes the stored session token: the token is known dead,
    /// and keeping it would make every later call fail the same way.
    pub fn classify(&self, status: u16, body: &str) -> ApiError {
        match status {
            401 => {
                self.tokens.delete_token();
                ApiError::Authentication {
                    message: body.to_string(),
                }
            }
            404 => ApiError::ResourceNotFound {
                message: body.to_string(),
            },
            422 => match serde_json::from_str::<ValidationErrorsBody>(body) {
                Ok(parsed) => ApiError::Validation {
                    cases: parsed.validation_errors,
                },
                Err(error) => {
                    tracing::warn!(%error, "unparseable 422 body");
                    ApiError::Server { status }
                }
            },
            _ => ApiError::Server { status },
        }
    }
}

#[async_trait]
impl FileStoreApi for HttpApiService {
    async fn log_in(&self, credentials: &UserCredentials) -> Result<(), ApiError> {
        let response = self
            .client
            .post(self.url("/api/login"))
            .json(credentials)
            .send()
            .await?;
        let body: TokenBody = self.validate(response).await?.json().await?;
        self.tokens.set_token(body.token);
        Ok(())
    }

    async fn register(&self, credentials: &UserCredentials) -> Result<(), ApiError> {
        let response = self
            .client
            .post(self.url("/api/registration"))
            .json(credentials)
            .send()
            .await?;
        self.validate(response).await?;
        Ok(())
    }

    async fn get_folder(&self, folder_id: &str) -> Result<FolderModel, ApiError> {
        let request = self.client.get(self.url(&format!("/api/folder/{folder_id}")));
        let response = self.authorized(request).send().await?;
        Ok(self.validate(response).await?.json().await?)
    }

    async fn get_folder_content(&self, folder_id: &str) -> Result<Vec<ListItem>, ApiError> {
        let request = self
            .client
            .get(self.url(&format!("/api/folder/{folder_id}/content")));
        let response = self.authorized(request).send().await?;
        let body: FolderContentBody = self.validate(response).await?.json().await?;
        Ok(body.list_items)
    }

    async fn get_root_folder(&self) -> Result<FolderModel, ApiError> {
        let request = self.client.get(self.url("/api/folder/root"));
        let response = self.authorized(request).send().await?;
        Ok(self.validate(response).await?.json().await?)
    }

    async fn delete_list_item(&self, item: &ListItem) -> Result<(), ApiError> {
        let request = self
            .client
            .delete(self.url(&format!("/api/{}/{}", item.kind(), item.id())));
        let response = self.authorized(request).send().await?;
        self.validate(response).await?;
        Ok(())
    }

    async fn update_list_item(&self, item: &ListItem) -> Result<(), ApiError> {
        let request = self
            .client
            .put(self.url(&format!("/api/{}/{}", item.kind(), item.id())))
            .json(item);
        let response = self.authorized(request).send().await?;
        self.validate(response).await?;
        Ok(())
    }

    async fn create_folder(&self, parent_id: &str) -> Result<FolderModel, ApiError> {
        let request = self
            .client
            .post(self.url(&format!("/api/folder/{parent_id}/folder")));
        let response = self.authorized(request).send().await?;
        Ok(self.validate(response).await?.json().await?)
    }

    async fn get_user(&self) -> Result<UserModel, ApiError> {
        let request = self.client.get(self.url("/api/user"));
        let response = self.authorized(request).send().await?;
        Ok(self.validate(response).await?.json().await?)
    }

    async fn upload_file(
        &self,
        parent: &FolderModel,
        file: &SelectedFile,
    ) -> Result<ListItem, ApiError> {
        let part = Part::bytes(file.bytes.to_vec())
            .file_name(file.name.clone())
            .mime_str(&file.content_type)?;
        let form = Form::new().part("file", part);

        let request = self
            .client
            .post(self.url(&format!("/api/folder/{}/file", parent.id)))
            .multipart(form);
        let response = self.authorized(request).send().await?;
        Ok(self.validate(response).await?.json().await?)
    }

    async fn get_file_content(&self, file_id: &str) -> Result<FileContent, ApiError> {
        let request = self.client.get(self.url(&format!("/api/file/{file_id}")));
        let response = self.authorized(request).send().await?;
        let response = self.validate(response).await?;

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or("application/octet-stream")
            .to_string();
        let bytes = response.bytes().await?;

        Ok(FileContent {
            bytes,
            content_type,
        })
    }

    async fn log_out(&self) -> Result<(), ApiError> {
        let request = self.client.post(self.url("/api/logout"));
        let result = match self.authorized(request).send().await {
            Ok(response) => self.validate(response).await.map(|_| ()),
            Err(error) => Err(error.into()),
        };
        // The session is over either way.
        self.tokens.delete_token();
        result
    }
}
