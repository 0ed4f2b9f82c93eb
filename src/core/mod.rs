pub mod display;

pub use crate::domain::model::{DisplayOutcome, FetchOutcome, FetchResult};
pub use crate::domain::ports::{ConfigProvider, JsonSource, Notifier, OutputSurface};
pub use crate::utils::error::Result;
