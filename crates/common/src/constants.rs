/// Upload endpoint path, appended to the configured base URL
pub const UPLOAD_ENDPOINT: &str = "/api/files";

/// Multipart part carrying the file content
pub const FIELD_FILE: &str = "file";

/// Multipart part carrying the uploader's user identifier
pub const FIELD_USER_ID: &str = "userId";

/// Multipart part carrying the free-text comment
pub const FIELD_COMMENT: &str = "comment";

/// Multipart part carrying the primary flag
pub const FIELD_IS_PRIMARY: &str = "isPrimary";

/// Media type declared on the file part
pub const FILE_MEDIA_TYPE: &str = "application/octet-stream";

/// Default download target, relative to the working directory
pub const DEFAULT_DOWNLOAD_FILE: &str = "TempFile.png";

/// Suffix of the temporary file a download is streamed into before the rename
pub const PARTIAL_FILE_SUFFIX: &str = ".part";

pub const DEFAULT_USER_ID: &str = "enrico";
pub const DEFAULT_COMMENT: &str = "this is a comments";
pub const DEFAULT_IS_PRIMARY: bool = true;
