mod actor;
mod handle;
pub mod models;
pub mod render;
pub mod source;
pub mod state;

pub use handle::DayPreparationHandle;
pub use models::{DayPreparation, Meeting, Task, FALLBACK_SUMMARY};
pub use source::{DayPreparationSource, HttpDayPreparationSource};
pub use state::{RequestToken, ViewState};
