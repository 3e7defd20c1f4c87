mod manager;

pub use manager::{StateManager, SubscriptionId};

use std::collections::HashMap;

use crate::api::ApiError;
use crate::models::{FileModel, FolderModel, ListItem, UserModel};

/// Identifier of one [`State`] field, used as the subscription key.
///
/// Subscribing and publishing go through this enum so a mismatched pair is a
/// compile error rather than a silently dead handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateField {
    Location,
    LocationParams,
    Folder,
    IsFolderLoading,
    FolderLoadingError,
    RootFolder,
    RootFolderLoadingError,
    ListItems,
    IsListItemsLoading,
    ListItemsLoadingError,
    ListItemsToDelete,
    DeletionIssue,
    RenamingListItems,
    RenamingIssue,
    ParentFoldersCreatingInProgress,
    FolderCreatingError,
    ParentFoldersOfUploadingFiles,
    UploadingFileIssue,
    DownloadingFiles,
    DownloadingFileIssue,
    CurrentUser,
    IsUserLoading,
    UserLoadingError,
}

/// Why an item was not deleted, and which one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletionIssue {
    pub error: ApiError,
    pub item: ListItem,
}

/// Why an item was not renamed, and which one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenamingIssue {
    pub error: ApiError,
    pub item: ListItem,
}

/// Why a file was not uploaded, into which folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadingFileIssue {
    pub error: ApiError,
    pub file_name: String,
    pub parent_folder: FolderModel,
}

/// Why a file was not downloaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadingFileIssue {
    pub error: ApiError,
    pub file: FileModel,
}

/// All observable application state of the explorer.
///
/// One instance exists per session. It is owned by the [`StateManager`] and
/// only ever changed through mutators; everything else holds read snapshots.
/// The in-progress vectors are id-keyed sets: membership is decided by item
/// id, never by position or object identity, and ids never repeat.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct State {
    /// Static part of the current route.
    pub location: Option<String>,
    /// Dynamic route parameters, e.g. `folderId`.
    pub location_params: HashMap<String, String>,

    pub folder: Option<FolderModel>,
    pub is_folder_loading: bool,
    pub folder_loading_error: Option<ApiError>,
    pub root_folder: Option<FolderModel>,
    pub root_folder_loading_error: Option<ApiError>,

    pub list_items: Vec<ListItem>,
    pub is_list_items_loading: bool,
    pub list_items_loading_error: Option<ApiError>,

    /// Items with a deletion request in flight.
    pub list_items_to_delete: Vec<ListItem>,
    pub deletion_issue: Option<DeletionIssue>,
    /// Items with a rename request in flight.
    pub renaming_list_items: Vec<ListItem>,
    pub renaming_issue: Option<RenamingIssue>,
    /// Folders with a child-folder creation in flight.
    pub parent_folders_creating_in_progress: Vec<FolderModel>,
    pub folder_creating_error: Option<ApiError>,
    /// Folders with a file upload in flight.
    pub parent_folders_of_uploading_files: Vec<FolderModel>,
    pub uploading_file_issue: Option<UploadingFileIssue>,
    /// Files with a download in flight.
    pub downloading_files: Vec<FileModel>,
    pub downloading_file_issue: Option<DownloadingFileIssue>,

    pub current_user: Option<UserModel>,
    pub is_user_loading: bool,
    pub user_loading_error: Option<ApiError>,
}

impl State {
    pub fn new() -> Self {
        Self::default()
    }

    /// True while a delete or rename is in flight for the given item id.
    ///
    /// A second delete/rename for a busy id is rejected at dispatch instead
    /// of racing the first one.
    pub fn is_item_busy(&self, id: &str) -> bool {
        self.list_items_to_delete.iter().any(|item| item.id() == id)
            || self.renaming_list_items.iter().any(|item| item.id() == id)
    }
}
