//! Single-purpose state transitions.
//!
//! A [`Mutator`] is an immutable value carrying already-resolved data for one
//! field update. Applying one cannot fail and touches exactly the field named
//! by [`Mutator::target_field`]; the [`StateManager`](crate::state::StateManager)
//! uses that name to notify subscribers.

use std::collections::HashMap;

use crate::api::ApiError;
use crate::models::{FileModel, FolderModel, ListItem, UserModel};
use crate::state::{
    DeletionIssue, DownloadingFileIssue, RenamingIssue, State, StateField, UploadingFileIssue,
};

/// Id-keyed membership for the in-progress sets.
trait Keyed {
    fn key(&self) -> &str;
}

impl Keyed for ListItem {
    fn key(&self) -> &str {
        self.id()
    }
}

impl Keyed for FolderModel {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Keyed for FileModel {
    fn key(&self) -> &str {
        &self.id
    }
}

/// Rebuilt copy of `items` with `item` appended, unless its id is already
/// present. Untouched elements are carried over as-is.
fn with_item<T: Keyed + Clone>(items: &[T], item: T) -> Vec<T> {
    if items.iter().any(|existing| existing.key() == item.key()) {
        return items.to_vec();
    }
    let mut next = items.to_vec();
    next.push(item);
    next
}

/// Rebuilt copy of `items` without the element of the given id. Removing an
/// absent id is a no-op.
fn without_item<T: Keyed + Clone>(items: &[T], id: &str) -> Vec<T> {
    items
        .iter()
        .filter(|existing| existing.key() != id)
        .cloned()
        .collect()
}

/// The full family of state transitions, one variant per field update.
#[derive(Debug, Clone, PartialEq)]
pub enum Mutator {
    Location(String),
    LocationParams(HashMap<String, String>),

    Folder(FolderModel),
    FolderLoading(bool),
    FolderLoadingError(ApiError),
    RootFolder(FolderModel),
    RootFolderLoadingError(ApiError),

    ListItems(Vec<ListItem>),
    ListItemsLoading(bool),
    ListItemsLoadingError(ApiError),

    AddToDeletionInProgress(ListItem),
    RemoveFromDeletionInProgress(ListItem),
    DeletionIssue {
        error: ApiError,
        item: ListItem,
    },

    AddToRenamingInProgress(ListItem),
    RemoveFromRenamingInProgress(ListItem),
    RenamingIssue {
        error: ApiError,
        item: ListItem,
    },

    AddParentFolderToCreatingInProgress(FolderModel),
    RemoveParentFolderFromCreatingInProgress(FolderModel),
    FolderCreatingError(ApiError),

    AddParentFolderToUploadingList(FolderModel),
    RemoveParentFolderFromUploadingList(FolderModel),
    UploadingFileIssue {
        error: ApiError,
        file_name: String,
        parent_folder: FolderModel,
    },

    AddFileToDownloadingInProgress(FileModel),
    RemoveFileFromDownloadingInProgress(FileModel),
    DownloadingFileIssue {
        error: ApiError,
        file: FileModel,
    },

    SetUser(UserModel),
    UserLoading(bool),
    UserLoadingError(ApiError),
}

impl Mutator {
    /// The single state field this mutator writes.
    pub fn target_field(&self) -> StateField {
        match self {
            Mutator::Location(_) => StateField::Location,
            Mutator::LocationParams(_) => StateField::LocationParams,
            Mutator::Folder(_) => StateField::Folder,
            Mutator::FolderLoading(_) => StateField::IsFolderLoading,
            Mutator::FolderLoadingError(_) => StateField::FolderLoadingError,
            Mutator::RootFolder(_) => StateField::RootFolder,
            Mutator::RootFolderLoadingError(_) => StateField::RootFolderLoadingError,
            Mutator::ListItems(_) => StateField::ListItems,
            Mutator::ListItemsLoading(_) => StateField::IsListItemsLoading,
            Mutator::ListItemsLoadingError(_) => StateField::ListItemsLoadingError,
            Mutator::AddToDeletionInProgress(_) | Mutator::RemoveFromDeletionInProgress(_) => {
                StateField::ListItemsToDelete
            }
            Mutator::DeletionIssue { .. } => StateField::DeletionIssue,
            Mutator::AddToRenamingInProgress(_) | Mutator::RemoveFromRenamingInProgress(_) => {
                StateField::RenamingListItems
            }
            Mutator::RenamingIssue { .. } => StateField::RenamingIssue,
            Mutator::AddParentFolderToCreatingInProgress(_)
            | Mutator::RemoveParentFolderFromCreatingInProgress(_) => {
                StateField::ParentFoldersCreatingInProgress
            }
            Mutator::FolderCreatingError(_) => StateField::FolderCreatingError,
            Mutator::AddParentFolderToUploadingList(_)
            | Mutator::RemoveParentFolderFromUploadingList(_) => {
                StateField::ParentFoldersOfUploadingFiles
            }
            Mutator::UploadingFileIssue { .. } => StateField::UploadingFileIssue,
            Mutator::AddFileToDownloadingInProgress(_)
            | Mutator::RemoveFileFromDownloadingInProgress(_) => StateField::DownloadingFiles,
            Mutator::DownloadingFileIssue { .. } => StateField::DownloadingFileIssue,
            Mutator::SetUser(_) => StateField::CurrentUser,
            Mutator::UserLoading(_) => StateField::IsUserLoading,
            Mutator::UserLoadingError(_) => StateField::UserLoadingError,
        }
    }

    /// Perform the in-place field update.
    pub fn apply(self, state: &mut State) {
        match self {
            Mutator::Location(location) => state.location = Some(location),
            Mutator::LocationParams(params) => state.location_params = params,
            Mutator::Folder(folder) => state.folder = Some(folder),
            Mutator::FolderLoading(is_loading) => state.is_folder_loading = is_loading,
            Mutator::FolderLoadingError(error) => state.folder_loading_error = Some(error),
            Mutator::RootFolder(folder) => state.root_folder = Some(folder),
            Mutator::RootFolderLoadingError(error) => {
                state.root_folder_loading_error = Some(error)
            }
            Mutator::ListItems(items) => state.list_items = items,
            Mutator::ListItemsLoading(is_loading) => state.is_list_items_loading = is_loading,
            Mutator::ListItemsLoadingError(error) => state.list_items_loading_error = Some(error),
            Mutator::AddToDeletionInProgress(item) => {
                state.list_items_to_delete = with_item(&state.list_items_to_delete, item);
            }
            Mutator::RemoveFromDeletionInProgress(item) => {
                state.list_items_to_delete = without_item(&state.list_items_to_delete, item.id());
            }
            Mutator::DeletionIssue { error, item } => {
                state.deletion_issue = Some(DeletionIssue { error, item });
            }
            Mutator::AddToRenamingInProgress(item) => {
                state.renaming_list_items = with_item(&state.renaming_list_items, item);
            }
            Mutator::RemoveFromRenamingInProgress(item) => {
                state.renaming_list_items = without_item(&state.renaming_list_items, item.id());
            }
            Mutator::RenamingIssue { error, item } => {
                state.renaming_issue = Some(RenamingIssue { error, item });
            }
            Mutator::AddParentFolderToCreatingInProgress(folder) => {
                state.parent_folders_creating_in_progress =
                    with_item(&state.parent_folders_creating_in_progress, folder);
            }
            Mutator::RemoveParentFolderFromCreatingInProgress(folder) => {
                state.parent_folders_creating_in_progress =
                    without_item(&state.parent_folders_creating_in_progress, &folder.id);
            }
            Mutator::FolderCreatingError(error) => state.folder_creating_error = Some(error),
            Mutator::AddParentFolderToUploadingList(folder) => {
                state.parent_folders_of_uploading_files =
                    with_item(&state.parent_folders_of_uploading_files, folder);
            }
            Mutator::RemoveParentFolderFromUploadingList(folder) => {
                state.parent_folders_of_uploading_files =
                    without_item(&state.parent_folders_of_uploading_files, &folder.id);
            }
            Mutator::UploadingFileIssue {
                error,
                file_name,
                parent_folder,
            } => {
                state.uploading_file_issue = Some(UploadingFileIssue {
                    error,
                    file_name,
                    parent_folder,
                });
            }
            Mutator::AddFileToDownloadingInProgress(file) => {
                state.downloading_files = with_item(&state.downloading_files, file);
            }
            Mutator::RemoveFileFromDownloadingInProgress(file) => {
                state.downloading_files = without_item(&state.downloading_files, &file.id);
            }
            Mutator::DownloadingFileIssue { error, file } => {
                state.downloading_file_issue = Some(DownloadingFileIssue { error, file });
            }
            Mutator::SetUser(user) => state.current_user = Some(user),
            Mutator::UserLoading(is_loading) => state.is_user_loading = is_loading,
            Mutator::UserLoadingError(error) => state.user_loading_error = Some(error),
        }
    }
}
