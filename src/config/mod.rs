pub mod cli;
pub mod input;

use crate::domain::ports::ExportConfig;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use input::InputConfig;

pub const DEFAULT_API_BASE: &str = "https://api.stackexchange.com/2.2";

#[derive(Debug, Clone, Parser)]
#[command(name = "so-export")]
#[command(about = "Export Stack Overflow questions to a CSV file")]
pub struct CliArgs {
    /// JSON file describing the export (output path, date range, question ids)
    #[arg(long, default_value = "input.json")]
    pub input: String,

    #[arg(long, default_value = DEFAULT_API_BASE)]
    pub api_base: String,

    #[arg(long, default_value = "stackoverflow")]
    pub site: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

/// Fully resolved run configuration: CLI arguments merged with the input
/// file, dates already converted to Unix timestamps.
#[derive(Debug, Clone)]
pub struct ExportJob {
    pub api_base: String,
    pub site: String,
    pub question_ids: Vec<String>,
    pub from: Option<i64>,
    pub to: Option<i64>,
    pub output: String,
}

impl ExportJob {
    pub fn assemble(args: &CliArgs, input: &InputConfig) -> Result<Self> {
        input.validate()?;

        Ok(Self {
            api_base: args.api_base.clone(),
            site: args.site.clone(),
            question_ids: input.questions.clone(),
            from: input.from_timestamp()?,
            to: input.to_timestamp()?,
            output: input.output.clone(),
        })
    }
}

impl ExportConfig for ExportJob {
    fn api_base(&self) -> &str {
        &self.api_base
    }

    fn site(&self) -> &str {
        &self.site
    }

    fn question_ids(&self) -> &[String] {
        &self.question_ids
    }

    fn from_timestamp(&self) -> Option<i64> {
        self.from
    }

    fn to_timestamp(&self) -> Option<i64> {
        self.to
    }

    fn output_file(&self) -> &str {
        &self.output
    }
}

impl Validate for ExportJob {
    fn validate(&self) -> Result<()> {
        validation::validate_url("api_base", &self.api_base)?;
        validation::validate_non_empty_string("site", &self.site)?;
        validation::validate_question_ids("questions", &self.question_ids)?;
        validation::validate_date_range("from/to", self.from, self.to)?;
        validation::validate_path("output", &self.output)?;
        Ok(())
    }
}
