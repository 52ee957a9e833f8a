pub mod conversion_client;
pub mod file_dialogs;

pub use conversion_client::{
    ConversionClient, ConversionJob, ConversionOutcome, HealthProbe, HealthReport,
};
