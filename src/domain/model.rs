use std::io;
use std::path::{Path, PathBuf};

use bytes::Bytes;
use serde_json::Value;

use super::error::ValidationError;
use super::validation::validate_file;

/// Where the bytes of a selected file live.
#[derive(Debug, Clone)]
pub enum FileContent {
    Disk(PathBuf),
    Memory(Bytes),
}

/// A file chosen by the user. Replaced on every selection, never mutated.
#[derive(Debug, Clone)]
pub struct SelectedFile {
    pub name: String,
    pub size: u64,
    pub content: FileContent,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, size: u64, content: FileContent) -> Self {
        Self {
            name: name.into(),
            size,
            content,
        }
    }

    pub fn in_memory(name: impl Into<String>, bytes: impl Into<Bytes>) -> Self {
        let bytes = bytes.into();
        Self::new(name, bytes.len() as u64, FileContent::Memory(bytes))
    }

    /// Describe a file on disk. Only metadata is read here.
    pub async fn from_path(path: &Path) -> io::Result<Self> {
        let metadata = tokio::fs::metadata(path).await?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        Ok(Self::new(
            name,
            metadata.len(),
            FileContent::Disk(path.to_path_buf()),
        ))
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_file(self)
    }

    pub async fn read(&self) -> io::Result<Bytes> {
        match &self.content {
            FileContent::Disk(path) => tokio::fs::read(path).await.map(Bytes::from),
            FileContent::Memory(bytes) => Ok(bytes.clone()),
        }
    }

    /// Suggested name for the converted document: the input stem plus `.pdf`.
    pub fn pdf_file_name(&self) -> String {
        let stem = Path::new(&self.name)
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| "output".to_string());
        format!("{}.pdf", stem)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HealthState {
    #[default]
    Unknown,
    Checking,
    Online,
    Offline,
    UnexpectedResponse,
}

impl HealthState {
    /// Classify a successfully decoded `/health` body.
    pub fn from_body(body: &Value) -> Self {
        match body.get("status").and_then(Value::as_str) {
            Some("ok") => Self::Online,
            _ => Self::UnexpectedResponse,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Unknown => "-",
            Self::Checking => "checking...",
            Self::Online => "online",
            Self::Offline => "offline",
            Self::UnexpectedResponse => "unexpected response",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusKind {
    #[default]
    Neutral,
    Success,
    Error,
}

/// Status line shown under the form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Status {
    pub message: String,
    pub kind: StatusKind,
}

impl Status {
    pub fn neutral(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: StatusKind::Neutral,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: StatusKind::Success,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: StatusKind::Error,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.message.is_empty()
    }
}
