use std::path::{Path, PathBuf};

/// Error type for caller-supplied path and URL inputs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputValidationError {
    Blank,
    ContainsNullByte,
    MissingFileName,
}

impl InputValidationError {
    pub fn message(&self) -> &'static str {
        match self {
            InputValidationError::Blank => "Value cannot be empty or whitespace",
            InputValidationError::ContainsNullByte => "Value cannot contain null bytes",
            InputValidationError::MissingFileName => "Path does not name a file",
        }
    }
}

impl std::fmt::Display for InputValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for InputValidationError {}

/// Validate a path or URL argument before any I/O happens
/// Rejects empty, whitespace-only and NUL-containing input
pub fn validate_input(value: &str) -> Result<(), InputValidationError> {
    if value.trim().is_empty() {
        return Err(InputValidationError::Blank);
    }

    if value.contains('\0') {
        return Err(InputValidationError::ContainsNullByte);
    }

    Ok(())
}

/// Filename sent in the `file` part: the basename of the local path
pub fn upload_file_name(path: &Path) -> Result<String, InputValidationError> {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or(InputValidationError::MissingFileName)
}

/// Join an endpoint path onto a base URL, tolerating a trailing slash on the base
pub fn join_endpoint(base_url: &str, endpoint: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim().trim_end_matches('/'),
        endpoint.trim_start_matches('/')
    )
}

/// Resolve a path against the current working directory
pub fn absolute_path(path: &Path) -> std::io::Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    Ok(std::env::current_dir()?.join(path))
}

/// Prefix of the hidden sibling a download into `target` is streamed through
/// The random part and `PARTIAL_FILE_SUFFIX` follow it
pub fn partial_file_prefix(target: &Path) -> String {
    let name = target
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    format!(".{}.", name)
}
