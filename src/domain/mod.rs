pub mod error;
pub mod model;
pub mod resource;
pub mod validation;

pub use error::{AppError, ValidationError, CONVERSION_FAILED};
pub use model::{FileContent, HealthState, SelectedFile, Status, StatusKind};
pub use resource::DownloadableResource;
pub use validation::{validate_file, ALLOWED_EXTENSIONS, MAX_SIZE_BYTES};
