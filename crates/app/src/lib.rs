#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod log;
mod service;
mod settings;
mod timer;

pub use service::Service;
pub use settings::{Settings, SettingsError, SettingsRepository, SettingsService};
pub use timer::{ElapsedTimer, format_elapsed};
