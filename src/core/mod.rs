pub mod convert;
pub mod detect;
pub mod paper;
pub mod parser;
pub mod presentation;
pub mod urls;

#[cfg(test)]
pub(crate) mod testing;

pub use crate::domain::model::{PaperCategory, PresentationStyle, Record, RecordKind};
pub use crate::domain::ports::{Renderer, Reporter, TracingReporter};
pub use crate::utils::error::Result;
