//! Google Drive API response types
//!
//! Data structures for deserializing Google Drive API v3 responses, plus the
//! closed classification deciding between raw download and Workspace export.

use serde::Deserialize;

/// Google Drive API file resource
///
/// See: https://developers.google.com/drive/api/v3/reference/files#resource
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriveFile {
    /// File ID
    pub id: String,

    /// File name
    pub name: String,

    /// MIME type (absent on field-restricted responses such as trash updates)
    #[serde(default)]
    pub mime_type: String,

    /// File size in bytes as a decimal string (absent for Workspace files)
    #[serde(default)]
    pub size: Option<String>,

    /// Browser link to the file
    #[serde(default)]
    pub web_view_link: Option<String>,

    /// Modification time (RFC 3339)
    #[serde(default)]
    pub modified_time: Option<String>,

    /// Whether file is trashed
    #[serde(default)]
    pub trashed: bool,
}

impl DriveFile {
    /// Declared size in bytes, when the API reports one
    pub fn size_bytes(&self) -> Option<u64> {
        self.size.as_deref().and_then(|s| s.parse().ok())
    }
}

/// Google Drive API files.list response
///
/// See: https://developers.google.com/drive/api/v3/reference/files/list
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilesListResponse {
    /// List of files
    #[serde(default)]
    pub files: Vec<DriveFile>,

    /// Opaque continuation token for the next page
    #[serde(default)]
    pub next_page_token: Option<String>,
}

/// Drive API error envelope, used to extract a human-readable message
#[derive(Debug, Deserialize)]
pub struct DriveErrorBody {
    pub error: DriveErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct DriveErrorDetail {
    #[serde(default)]
    pub message: String,
}

/// How a file's content is retrieved: raw bytes or a Workspace export
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// Regular binary file, downloaded with `alt=media`
    Native,
    /// Workspace-native document, retrieved via the export endpoint
    Workspace(WorkspaceKind),
}

/// Workspace document families with distinct export defaults
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkspaceKind {
    Document,
    Spreadsheet,
    Presentation,
    /// Other `application/vnd.google-apps.*` types (forms, drawings, ...)
    Other,
}

impl FileKind {
    /// Classify a MIME type into its download route
    pub fn classify(mime_type: &str) -> Self {
        match mime_type {
            "application/vnd.google-apps.document" => FileKind::Workspace(WorkspaceKind::Document),
            "application/vnd.google-apps.spreadsheet" => {
                FileKind::Workspace(WorkspaceKind::Spreadsheet)
            }
            "application/vnd.google-apps.presentation" => {
                FileKind::Workspace(WorkspaceKind::Presentation)
            }
            other if other.starts_with("application/vnd.google-apps.") => {
                FileKind::Workspace(WorkspaceKind::Other)
            }
            _ => FileKind::Native,
        }
    }
}

impl WorkspaceKind {
    /// Export MIME type used when the caller does not request one
    pub fn default_export_mime(self) -> &'static str {
        match self {
            WorkspaceKind::Document => "text/plain",
            WorkspaceKind::Spreadsheet => "text/csv",
            WorkspaceKind::Presentation => "application/pdf",
            WorkspaceKind::Other => "text/plain",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_drive_file() {
        let json = r#"{
            "id": "abc123",
            "name": "report.pdf",
            "mimeType": "application/pdf",
            "size": "1024",
            "webViewLink": "https://drive.google.com/file/d/abc123/view",
            "modifiedTime": "2023-01-02T00:00:00.000Z",
            "trashed": false
        }"#;

        let file: DriveFile = serde_json::from_str(json).unwrap();
        assert_eq!(file.id, "abc123");
        assert_eq!(file.name, "report.pdf");
        assert_eq!(file.mime_type, "application/pdf");
        assert_eq!(file.size_bytes(), Some(1024));
        assert!(!file.trashed);
    }

    #[test]
    fn test_deserialize_field_restricted_file() {
        // Trash updates only request id,name,trashed
        let json = r#"{"id": "abc123", "name": "report.pdf", "trashed": true}"#;

        let file: DriveFile = serde_json::from_str(json).unwrap();
        assert!(file.trashed);
        assert!(file.mime_type.is_empty());
        assert_eq!(file.size_bytes(), None);
    }

    #[test]
    fn test_deserialize_files_list_response() {
        let json = r#"{
            "files": [
                {
                    "id": "file1",
                    "name": "notes.txt",
                    "mimeType": "text/plain",
                    "webViewLink": "https://drive.google.com/file/d/file1/view",
                    "modifiedTime": "2023-01-01T00:00:00.000Z"
                }
            ],
            "nextPageToken": "token123"
        }"#;

        let response: FilesListResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.files.len(), 1);
        assert_eq!(response.next_page_token, Some("token123".to_string()));
    }

    #[test]
    fn test_deserialize_empty_listing() {
        let response: FilesListResponse = serde_json::from_str("{}").unwrap();
        assert!(response.files.is_empty());
        assert_eq!(response.next_page_token, None);
    }

    #[test]
    fn test_deserialize_error_body() {
        let json = r#"{"error": {"code": 404, "message": "File not found: xyz"}}"#;

        let body: DriveErrorBody = serde_json::from_str(json).unwrap();
        assert_eq!(body.error.message, "File not found: xyz");
    }

    #[test]
    fn test_classify_workspace_types() {
        assert_eq!(
            FileKind::classify("application/vnd.google-apps.document"),
            FileKind::Workspace(WorkspaceKind::Document)
        );
        assert_eq!(
            FileKind::classify("application/vnd.google-apps.spreadsheet"),
            FileKind::Workspace(WorkspaceKind::Spreadsheet)
        );
        assert_eq!(
            FileKind::classify("application/vnd.google-apps.presentation"),
            FileKind::Workspace(WorkspaceKind::Presentation)
        );
        assert_eq!(
            FileKind::classify("application/vnd.google-apps.drawing"),
            FileKind::Workspace(WorkspaceKind::Other)
        );
    }

    #[test]
    fn test_classify_native_types() {
        assert_eq!(FileKind::classify("application/pdf"), FileKind::Native);
        assert_eq!(FileKind::classify("image/png"), FileKind::Native);
        assert_eq!(FileKind::classify(""), FileKind::Native);
    }

    #[test]
    fn test_default_export_mimes() {
        assert_eq!(WorkspaceKind::Document.default_export_mime(), "text/plain");
        assert_eq!(WorkspaceKind::Spreadsheet.default_export_mime(), "text/csv");
        assert_eq!(
            WorkspaceKind::Presentation.default_export_mime(),
            "application/pdf"
        );
    }
}
