use super::error::ValidationError;
use super::model::SelectedFile;

/// Upload limit enforced before any request is made: 200 MiB.
pub const MAX_SIZE_BYTES: u64 = 200 * 1024 * 1024;

/// Accepted file name suffixes, compared against the lowercased name.
pub const ALLOWED_EXTENSIONS: [&str; 2] = [".html", ".htm"];

/// Check a selected file against the extension and size rules.
pub fn validate_file(file: &SelectedFile) -> Result<(), ValidationError> {
    let lower_name = file.name.to_lowercase();
    if !ALLOWED_EXTENSIONS
        .iter()
        .any(|ext| lower_name.ends_with(ext))
    {
        return Err(ValidationError::UnsupportedExtension);
    }

    if file.size > MAX_SIZE_BYTES {
        return Err(ValidationError::TooLarge);
    }

    Ok(())
}
