//! User-facing routing of failure records.
//!
//! The UI layer subscribes to the error and issue fields of the state and
//! turns each value into a toast plus an optional follow-up (redirect to
//! login, not-found page, listing refresh). The wording and the follow-up
//! rules live here so every front end surfaces failures identically.

use crate::api::ApiError;
use crate::state::{DeletionIssue, DownloadingFileIssue, RenamingIssue, UploadingFileIssue};

const NETWORK_MESSAGE: &str = "Cannot reach the server. Check your connection.";
const LOG_IN_MESSAGE: &str = "Please log in.";

/// What the UI should do after showing the toast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FollowUp {
    None,
    /// The session is dead; route to the login page.
    RedirectToLogin,
    /// The routed-to entity itself is gone; show the not-found page.
    ShowNotFound {
        resource: &'static str,
        link: &'static str,
    },
    /// The listing is stale (e.g. the item was deleted elsewhere).
    RefreshList,
}

/// A toast message with its follow-up routing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub follow_up: FollowUp,
}

impl Notice {
    fn new(message: impl Into<String>, follow_up: FollowUp) -> Self {
        Self {
            message: message.into(),
            follow_up,
        }
    }
}

/// Failure while loading the listing of the displayed folder.
pub fn list_loading_notice(error: &ApiError) -> Notice {
    match error {
        ApiError::Authentication { message } => Notice::new(message, FollowUp::RedirectToLogin),
        ApiError::ResourceNotFound { message } => Notice::new(
            message,
            FollowUp::ShowNotFound {
                resource: "Folder",
                link: "/folder",
            },
        ),
        ApiError::Network { .. } => Notice::new(NETWORK_MESSAGE, FollowUp::None),
        ApiError::Validation { .. } | ApiError::Server { .. } => {
            Notice::new("Cannot retrieve items list from server.", FollowUp::None)
        }
    }
}

/// Failure while loading the current or root folder entity.
pub fn folder_loading_notice(error: &ApiError) -> Notice {
    match error {
        ApiError::Authentication { message } => Notice::new(message, FollowUp::RedirectToLogin),
        ApiError::ResourceNotFound { message } => Notice::new(
            message,
            FollowUp::ShowNotFound {
                resource: "Folder",
                link: "/folder",
            },
        ),
        ApiError::Network { .. } => Notice::new(NETWORK_MESSAGE, FollowUp::None),
        ApiError::Validation { .. } | ApiError::Server { .. } => {
            Notice::new("Cannot retrieve folder from server.", FollowUp::None)
        }
    }
}

/// An item was not deleted. `displayed_folder_id` is the folder currently on
/// screen; a not-found item inside it means the listing is stale.
pub fn deletion_notice(issue: &DeletionIssue, displayed_folder_id: Option<&str>) -> Notice {
    let name = issue.item.name();
    match &issue.error {
        ApiError::Authentication { .. } => Notice::new(LOG_IN_MESSAGE, FollowUp::RedirectToLogin),
        ApiError::ResourceNotFound { .. } => {
            let follow_up = if issue.item.parent_id() == displayed_folder_id {
                FollowUp::RefreshList
            } else {
                FollowUp::None
            };
            Notice::new(format!("List item {name} was not found."), follow_up)
        }
        ApiError::Network { .. } => Notice::new(NETWORK_MESSAGE, FollowUp::None),
        ApiError::Validation { .. } | ApiError::Server { .. } => Notice::new(
            format!("List item with name {name} wasn't deleted."),
            FollowUp::None,
        ),
    }
}

/// An item was not renamed.
pub fn renaming_notice(issue: &RenamingIssue, displayed_folder_id: Option<&str>) -> Notice {
    let name = issue.item.name();
    match &issue.error {
        ApiError::Authentication { .. } => Notice::new(LOG_IN_MESSAGE, FollowUp::RedirectToLogin),
        ApiError::ResourceNotFound { .. } => {
            let follow_up = if issue.item.parent_id() == displayed_folder_id {
                FollowUp::RefreshList
            } else {
                FollowUp::None
            };
            Notice::new(format!("List item {name} was not found."), follow_up)
        }
        ApiError::Network { .. } => Notice::new(NETWORK_MESSAGE, FollowUp::None),
        ApiError::Validation { .. } | ApiError::Server { .. } => Notice::new(
            format!("List item with name {name} wasn't renamed."),
            FollowUp::None,
        ),
    }
}

/// A child folder was not created.
pub fn folder_creating_notice(error: &ApiError) -> Notice {
    match error {
        ApiError::Authentication { .. } => Notice::new(LOG_IN_MESSAGE, FollowUp::RedirectToLogin),
        ApiError::ResourceNotFound { message } => Notice::new(
            message,
            FollowUp::ShowNotFound {
                resource: "Parent folder",
                link: "/folder",
            },
        ),
        ApiError::Network { .. } => Notice::new(NETWORK_MESSAGE, FollowUp::None),
        ApiError::Validation { .. } | ApiError::Server { .. } => {
            Notice::new("Cannot create folder.", FollowUp::None)
        }
    }
}

/// A file was not uploaded.
pub fn uploading_notice(issue: &UploadingFileIssue, displayed_folder_id: Option<&str>) -> Notice {
    match &issue.error {
        ApiError::Authentication { .. } => Notice::new(LOG_IN_MESSAGE, FollowUp::RedirectToLogin),
        ApiError::ResourceNotFound { .. } => {
            let follow_up = if displayed_folder_id == Some(issue.parent_folder.id.as_str()) {
                FollowUp::RefreshList
            } else {
                FollowUp::None
            };
            Notice::new(
                format!("Parent folder {} was not found.", issue.parent_folder.name),
                follow_up,
            )
        }
        ApiError::Network { .. } => Notice::new(NETWORK_MESSAGE, FollowUp::None),
        ApiError::Validation { .. } | ApiError::Server { .. } => Notice::new(
            format!("File {} wasn't uploaded.", issue.file_name),
            FollowUp::None,
        ),
    }
}

/// A file was not downloaded.
pub fn downloading_notice(
    issue: &DownloadingFileIssue,
    displayed_folder_id: Option<&str>,
) -> Notice {
    let name = &issue.file.name;
    match &issue.error {
        ApiError::Authentication { .. } => Notice::new(LOG_IN_MESSAGE, FollowUp::RedirectToLogin),
        ApiError::ResourceNotFound { .. } => {
            let follow_up = if displayed_folder_id == issue.file.parent_id.as_deref() {
                FollowUp::RefreshList
            } else {
                FollowUp::None
            };
            Notice::new(format!("File {name} was not found."), follow_up)
        }
        ApiError::Network { .. } => Notice::new(NETWORK_MESSAGE, FollowUp::None),
        ApiError::Validation { .. } | ApiError::Server { .. } => {
            Notice::new(format!("File {name} wasn't downloaded."), FollowUp::None)
        }
    }
}
