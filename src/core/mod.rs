pub mod engine;
pub mod pipeline;

pub use crate::domain::model::{ExportBatch, ExportRow, Question, QuestionsPage};
pub use crate::domain::ports::{ExportConfig, Pipeline, Storage};
pub use crate::utils::error::Result;
