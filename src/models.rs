use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

/// Classification of a file derived from its MIME type.
///
/// Shorthand notation shown in the explorer listing, not the full MIME type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    Doc,
    Image,
    Video,
    Music,
    Spreadsheet,
    #[default]
    Undefined,
}

impl FileType {
    /// Derive a file type classification from a MIME type string.
    pub fn from_mime(mime_type: &str) -> Self {
        let primary = mime_type.split('/').next().unwrap_or("");
        match primary {
            "audio" => FileType::Music,
            "image" => FileType::Image,
            "video" => FileType::Video,
            "text" | "application" => {
                let sub = mime_type.split('/').nth(1).unwrap_or("");
                match sub {
                    "csv"
                    | "vnd.ms-excel"
                    | "vnd.oasis.opendocument.spreadsheet"
                    | "vnd.openxmlformats-officedocument.spreadsheetml.sheet" => {
                        FileType::Spreadsheet
                    }
                    "pdf"
                    | "msword"
                    | "rtf"
                    | "vnd.oasis.opendocument.text"
                    | "vnd.openxmlformats-officedocument.wordprocessingml.document" => {
                        FileType::Doc
                    }
                    _ if primary == "text" => FileType::Doc,
                    _ => FileType::Undefined,
                }
            }
            _ => FileType::Undefined,
        }
    }
}

/// Treats an explicit `null` the same as a missing field.
/// The server sends `null` for attributes that do not apply to an item kind.
fn or_default<'de, T, D>(deserializer: D) -> Result<T, D::Error>
where
    T: Default + DeserializeOwned,
    D: Deserializer<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A folder entity: the current/root folder of the view, or a folder row in
/// the listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FolderModel {
    pub id: String,
    pub name: String,
    /// The root folder has no parent.
    #[serde(default)]
    pub parent_id: Option<String>,
    #[serde(default, deserialize_with = "or_default")]
    pub items_amount: u64,
}

/// A file row in the explorer listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileModel {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub parent_id: Option<String>,
    #[serde(default, deserialize_with = "or_default")]
    pub file_type: FileType,
    /// Size in bytes.
    #[serde(default, deserialize_with = "or_default")]
    pub size: u64,
}

/// A single entry of the explorer listing.
///
/// Wire shape is flat with a `type` discriminant:
/// `{name, id, type: "file"|"folder", fileType, size, itemsAmount, parentId}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ListItem {
    File(FileModel),
    Folder(FolderModel),
}

impl ListItem {
    pub fn id(&self) -> &str {
        match self {
            ListItem::File(file) => &file.id,
            ListItem::Folder(folder) => &folder.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            ListItem::File(file) => &file.name,
            ListItem::Folder(folder) => &folder.name,
        }
    }

    pub fn parent_id(&self) -> Option<&str> {
        match self {
            ListItem::File(file) => file.parent_id.as_deref(),
            ListItem::Folder(folder) => folder.parent_id.as_deref(),
        }
    }

    /// The discriminant as it appears in REST paths (`/api/{kind}/{id}`).
    pub fn kind(&self) -> &'static str {
        match self {
            ListItem::File(_) => "file",
            ListItem::Folder(_) => "folder",
        }
    }

    /// Copy of this item carrying a new name, as sent by a rename request.
    pub fn with_name(&self, name: impl Into<String>) -> ListItem {
        let mut item = self.clone();
        match &mut item {
            ListItem::File(file) => file.name = name.into(),
            ListItem::Folder(folder) => folder.name = name.into(),
        }
        item
    }
}

/// The logged-in user, as returned by `GET /api/user`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserModel {
    pub id: String,
    pub name: String,
}

/// Login/registration request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserCredentials {
    pub login: String,
    pub password: String,
}

impl UserCredentials {
    pub fn new(login: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            login: login.into(),
            password: password.into(),
        }
    }
}
