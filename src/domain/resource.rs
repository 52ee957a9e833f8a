use std::io::{self, Write};
use std::path::Path;

use tempfile::TempPath;
use url::Url;

/// Owned handle over a converted document.
///
/// The bytes are kept in a temporary file that is exposed through a
/// `file://` URL. Dropping the handle deletes the file, so a released
/// resource can never outlive its owner.
#[derive(Debug)]
pub struct DownloadableResource {
    path: TempPath,
    url: Url,
    len: u64,
}

impl DownloadableResource {
    pub fn create(bytes: &[u8]) -> io::Result<Self> {
        let mut file = tempfile::Builder::new()
            .prefix("converted-")
            .suffix(".pdf")
            .tempfile()?;
        file.write_all(bytes)?;
        file.flush()?;

        let path = file.into_temp_path();
        let url = Url::from_file_path(&path).map_err(|_| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("cannot build a URL for {}", path.display()),
            )
        })?;

        Ok(Self {
            path,
            url,
            len: bytes.len() as u64,
        })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> u64 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Delete the backing file now and report any failure.
    pub fn release(self) -> io::Result<()> {
        self.path.close()
    }
}
