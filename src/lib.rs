pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::input::InputConfig;
pub use config::{cli::LocalStorage, CliArgs, ExportJob};
pub use core::{engine::ExportEngine, pipeline::QuestionsPipeline};
pub use utils::error::{ExportError, Result};
