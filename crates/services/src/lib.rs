#![forbid(unsafe_code)]

pub mod error;
pub mod progress_service;
pub mod settings_service;

pub use tracker_core::Clock;

pub use error::{ProgressServiceError, SettingsServiceError};
pub use progress_service::{ProgressService, TopicToggle};
pub use settings_service::SettingsService;
