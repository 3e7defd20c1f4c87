use filestore_client::models::{FileModel, FileType, FolderModel, ListItem};

#[test]
fn test_file_row_parses_with_null_attributes() {
    // The server sends null for attributes it has no value for.
    let json = r#"{
        "type": "file",
        "id": "I1",
        "name": "a.txt",
        "parentId": "F1",
        "fileType": null,
        "size": null
    }"#;

    let item: ListItem = serde_json::from_str(json).unwrap();

    assert_eq!(
        item,
        ListItem::File(FileModel {
            id: "I1".to_string(),
            name: "a.txt".to_string(),
            parent_id: Some("F1".to_string()),
            file_type: FileType::Undefined,
            size: 0,
        })
    );
}

#[test]
fn test_file_row_parses_with_full_attributes() {
    let json = r#"{
        "type": "file",
        "id": "I1",
        "name": "song.mp3",
        "parentId": "F1",
        "fileType": "music",
        "size": 4096
    }"#;

    let item: ListItem = serde_json::from_str(json).unwrap();

    assert_eq!(item.kind(), "file");
    assert_eq!(item.name(), "song.mp3");
    let ListItem::File(file) = item else {
        panic!("expected a file row");
    };
    assert_eq!(file.file_type, FileType::Music);
    assert_eq!(file.size, 4096);
}

#[test]
fn test_folder_row_parses_from_tagged_json() {
    let json = r#"{
        "type": "folder",
        "id": "F2",
        "name": "Documents",
        "parentId": "F1",
        "itemsAmount": 7
    }"#;

    let item: ListItem = serde_json::from_str(json).unwrap();

    assert_eq!(
        item,
        ListItem::Folder(FolderModel {
            id: "F2".to_string(),
            name: "Documents".to_string(),
            parent_id: Some("F1".to_string()),
            items_amount: 7,
        })
    );
    assert_eq!(item.kind(), "folder");
    assert_eq!(item.parent_id(), Some("F1"));
}

#[test]
fn test_root_folder_parses_without_a_parent() {
    let json = r#"{"id": "root", "name": "Root", "parentId": null, "itemsAmount": 2}"#;

    let folder: FolderModel = serde_json::from_str(json).unwrap();

    assert_eq!(folder.parent_id, None);
    assert_eq!(folder.items_amount, 2);
}

#[test]
fn test_rename_serializes_back_to_the_wire_shape() {
    let item = ListItem::File(FileModel {
        id: "I1".to_string(),
        name: "a.txt".to_string(),
        parent_id: Some("F1".to_string()),
        file_type: FileType::Doc,
        size: 10,
    });

    let renamed = item.with_name("b.txt");
    assert_eq!(renamed.name(), "b.txt");
    assert_eq!(renamed.id(), "I1");
    // The original is untouched.
    assert_eq!(item.name(), "a.txt");

    let json: serde_json::Value = serde_json::to_value(&renamed).unwrap();
    assert_eq!(json["type"], "file");
    assert_eq!(json["name"], "b.txt");
    assert_eq!(json["parentId"], "F1");
    assert_eq!(json["fileType"], "doc");
}

#[test]
fn test_file_type_from_mime() {
    assert_eq!(FileType::from_mime("audio/mpeg"), FileType::Music);
    assert_eq!(FileType::from_mime("image/png"), FileType::Image);
    assert_eq!(FileType::from_mime("video/mp4"), FileType::Video);
    assert_eq!(FileType::from_mime("text/plain"), FileType::Doc);
    assert_eq!(FileType::from_mime("application/pdf"), FileType::Doc);
    assert_eq!(
        FileType::from_mime("application/vnd.ms-excel"),
        FileType::Spreadsheet
    );
    assert_eq!(FileType::from_mime("text/csv"), FileType::Spreadsheet);
    assert_eq!(
        FileType::from_mime("application/octet-stream"),
        FileType::Undefined
    );
    assert_eq!(FileType::from_mime("garbage"), FileType::Undefined);
}
