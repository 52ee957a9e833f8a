use bytes::Bytes;
use tracing::{debug, info, warn};

use crate::{
    api::{ApiClient, ApiError},
    domain::{
        AppError, DownloadableResource, HealthState, SelectedFile, Status, ValidationError,
    },
    utils::format_bytes,
};

pub const CONVERSION_IN_PROGRESS: &str = "conversion in progress";
pub const CONVERSION_COMPLETE: &str = "conversion complete";
pub const NO_FILE_LABEL: &str = "No file";

/// Owns every piece of state behind the converter window.
///
/// Network operations are split in three steps so the UI loop never holds
/// `&mut self` across an await: `begin_*` hands out a request object, its
/// `run` future does the I/O, and `finish_*` applies the result. Each request
/// carries a token; results whose token is no longer current are discarded.
#[derive(Debug)]
pub struct ConversionClient {
    api_client: ApiClient,
    selected: Option<SelectedFile>,
    validation: Option<Result<(), ValidationError>>,
    status: Status,
    health: HealthState,
    download: Option<DownloadableResource>,
    conversion_seq: u64,
    active_conversion: Option<u64>,
    health_seq: u64,
}

/// A pending `/health` probe.
#[derive(Debug, Clone)]
pub struct HealthProbe {
    token: u64,
    api_client: ApiClient,
}

#[derive(Debug, Clone)]
pub struct HealthReport {
    token: u64,
    pub state: HealthState,
}

/// A pending `/convert` exchange for one file.
#[derive(Debug, Clone)]
pub struct ConversionJob {
    token: u64,
    api_client: ApiClient,
    file: SelectedFile,
}

#[derive(Debug, Clone)]
pub struct ConversionOutcome {
    token: u64,
    pub result: Result<Bytes, AppError>,
}

impl HealthProbe {
    pub async fn run(self) -> HealthReport {
        let state = match self.api_client.health().await {
            Ok(body) => HealthState::from_body(&body),
            Err(e) => {
                debug!(error = %e, "health probe failed");
                HealthState::Offline
            }
        };

        HealthReport {
            token: self.token,
            state,
        }
    }
}

impl ConversionJob {
    pub async fn run(self) -> ConversionOutcome {
        let result = self.upload().await;
        ConversionOutcome {
            token: self.token,
            result,
        }
    }

    async fn upload(&self) -> Result<Bytes, AppError> {
        let content = self.file.read().await?;
        self.api_client
            .convert(&self.file.name, content)
            .await
            .map_err(|e| match e {
                ApiError::Rejected { status, message } => AppError::Rejected { status, message },
                other => AppError::network(other.to_string()),
            })
    }
}

impl ConversionClient {
    pub fn new(api_client: ApiClient) -> Self {
        Self {
            api_client,
            selected: None,
            validation: None,
            status: Status::default(),
            health: HealthState::Unknown,
            download: None,
            conversion_seq: 0,
            active_conversion: None,
            health_seq: 0,
        }
    }

    pub fn base_url(&self) -> &str {
        self.api_client.base_url()
    }

    pub fn selected(&self) -> Option<&SelectedFile> {
        self.selected.as_ref()
    }

    pub fn validation(&self) -> Option<&Result<(), ValidationError>> {
        self.validation.as_ref()
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    pub fn health(&self) -> HealthState {
        self.health
    }

    pub fn download(&self) -> Option<&DownloadableResource> {
        self.download.as_ref()
    }

    pub fn is_submitting(&self) -> bool {
        self.active_conversion.is_some()
    }

    /// The convert button is enabled only for a valid file with nothing in flight.
    pub fn can_submit(&self) -> bool {
        matches!(self.validation, Some(Ok(()))) && !self.is_submitting()
    }

    pub fn file_label(&self) -> &str {
        self.selected
            .as_ref()
            .map(|f| f.name.as_str())
            .unwrap_or(NO_FILE_LABEL)
    }

    pub fn size_label(&self) -> String {
        self.selected
            .as_ref()
            .map(|f| format_bytes(f.size))
            .unwrap_or_else(|| "-".to_string())
    }

    pub fn suggested_pdf_name(&self) -> String {
        self.selected
            .as_ref()
            .map(SelectedFile::pdf_file_name)
            .unwrap_or_else(|| "output.pdf".to_string())
    }

    /// Replace the current selection. Any download or in-flight conversion
    /// belonging to the previous file is dropped.
    pub fn select_file(&mut self, file: Option<SelectedFile>) {
        self.clear_download();
        self.active_conversion = None;

        let Some(file) = file else {
            self.selected = None;
            self.validation = None;
            self.status = Status::default();
            return;
        };

        let validation = file.validate();
        match &validation {
            Ok(()) => {
                info!(name = %file.name, size = file.size, "file selected");
                self.status = Status::default();
            }
            Err(e) => {
                info!(name = %file.name, size = file.size, reason = %e, "file rejected");
                self.status = Status::error(e.to_string());
            }
        }

        self.selected = Some(file);
        self.validation = Some(validation);
    }

    pub fn reset(&mut self) {
        self.selected = None;
        self.validation = None;
        self.status = Status::default();
        self.active_conversion = None;
        self.clear_download();
    }

    pub fn begin_health_check(&mut self) -> HealthProbe {
        self.health_seq += 1;
        self.health = HealthState::Checking;
        debug!(token = self.health_seq, base_url = %self.base_url(), "checking service health");

        HealthProbe {
            token: self.health_seq,
            api_client: self.api_client.clone(),
        }
    }

    /// Apply a probe result unless a newer probe has been issued since.
    pub fn finish_health_check(&mut self, report: HealthReport) -> bool {
        if report.token != self.health_seq {
            debug!(token = report.token, latest = self.health_seq, "discarding stale health report");
            return false;
        }

        info!(state = ?report.state, "service health updated");
        self.health = report.state;
        true
    }

    pub async fn check_health(&mut self) -> HealthState {
        let report = self.begin_health_check().run().await;
        self.finish_health_check(report);
        self.health
    }

    /// Validate the selection and hand out the upload for it.
    ///
    /// On a validation failure the error becomes the status line and no
    /// request object is created.
    pub fn begin_conversion(&mut self) -> Result<ConversionJob, ValidationError> {
        self.clear_download();

        let Some(file) = self.selected.clone() else {
            return Err(self.reject(ValidationError::NoFile));
        };
        if let Err(e) = file.validate() {
            return Err(self.reject(e));
        }

        self.conversion_seq += 1;
        self.active_conversion = Some(self.conversion_seq);
        self.status = Status::neutral(CONVERSION_IN_PROGRESS);
        info!(token = self.conversion_seq, name = %file.name, "conversion started");

        Ok(ConversionJob {
            token: self.conversion_seq,
            api_client: self.api_client.clone(),
            file,
        })
    }

    /// Apply a conversion result. Returns true when a new download is ready.
    pub fn finish_conversion(&mut self, outcome: ConversionOutcome) -> bool {
        if self.active_conversion != Some(outcome.token) {
            debug!(token = outcome.token, "discarding stale conversion result");
            return false;
        }
        self.active_conversion = None;

        let pdf = match outcome.result {
            Ok(pdf) => pdf,
            Err(e) => {
                warn!(error = %e, "conversion failed");
                self.status = Status::error(e.to_string());
                return false;
            }
        };

        self.clear_download();
        match DownloadableResource::create(&pdf) {
            Ok(resource) => {
                info!(url = %resource.url(), bytes = resource.len(), "conversion complete");
                self.download = Some(resource);
                self.status = Status::success(CONVERSION_COMPLETE);
                true
            }
            Err(e) => {
                warn!(error = %e, "failed to store converted document");
                self.status = Status::error(AppError::from(e).to_string());
                false
            }
        }
    }

    /// Run a full conversion exchange. Returns true when a download is ready.
    pub async fn submit_conversion(&mut self) -> bool {
        let Ok(job) = self.begin_conversion() else {
            return false;
        };
        let outcome = job.run().await;
        self.finish_conversion(outcome)
    }

    /// Surface a failure that happened outside a conversion, e.g. in a dialog.
    pub fn report_error(&mut self, error: &AppError) {
        warn!(error = %error, "operation failed");
        self.status = Status::error(error.to_string());
    }

    pub fn record_saved(&mut self, path: &std::path::Path) {
        info!(path = %path.display(), "converted document saved");
        self.status = Status::success(format!("saved to {}", path.display()));
    }

    fn reject(&mut self, error: ValidationError) -> ValidationError {
        self.status = Status::error(error.to_string());
        error
    }

    fn clear_download(&mut self) {
        if let Some(resource) = self.download.take() {
            let url = resource.url().clone();
            match resource.release() {
                Ok(()) => debug!(%url, "released download"),
                Err(e) => warn!(%url, error = %e, "failed to release download"),
            }
        }
    }
}
