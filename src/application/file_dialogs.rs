use std::path::{Path, PathBuf};

use crate::domain::{AppError, SelectedFile};

/// Ask for an HTML document. `Ok(None)` means the dialog was dismissed.
pub async fn pick_html_file() -> Result<Option<SelectedFile>, AppError> {
    let Some(handle) = rfd::AsyncFileDialog::new()
        .set_title("Choose an HTML file")
        .add_filter("HTML document", &["html", "htm"])
        .pick_file()
        .await
    else {
        return Ok(None);
    };

    let file = SelectedFile::from_path(handle.path()).await?;
    Ok(Some(file))
}

/// Ask where to keep the converted PDF and copy it there.
pub async fn save_download(
    source: PathBuf,
    suggested_filename: String,
) -> Result<Option<PathBuf>, AppError> {
    let Some(handle) = rfd::AsyncFileDialog::new()
        .set_file_name(&suggested_filename)
        .add_filter("PDF document", &["pdf"])
        .save_file()
        .await
    else {
        return Ok(None);
    };

    let destination = handle.path().to_path_buf();
    export_pdf(&source, &destination).await?;
    Ok(Some(destination))
}

/// Copy a converted document out of its temporary location.
pub async fn export_pdf(source: &Path, destination: &Path) -> Result<u64, AppError> {
    let copied = tokio::fs::copy(source, destination).await?;
    Ok(copied)
}
