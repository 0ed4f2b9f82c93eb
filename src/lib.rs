pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::{
    console::ConsoleNotifier,
    http::HttpJsonSource,
    surface::{ConfiguredSurface, FileSurface, StdoutSurface},
};
pub use config::Settings;
pub use core::display::FetchAndDisplay;
pub use domain::model::{DisplayOutcome, FetchOutcome, FetchResult};
pub use domain::ports::{ConfigProvider, JsonSource, Notifier, OutputSurface};
pub use utils::error::{FetchError, Result};
