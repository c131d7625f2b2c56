use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "gauntlet",
    version,
    about = "Reasoning stress tests for LLMs — synthetic adversarial prompts, concurrent evaluation, pass/fail reporting"
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Evaluate a prompt set against the configured model
    Run(RunArgs),
    /// Generate the synthetic reasoning dataset
    Generate(GenerateArgs),
    /// Check that every JSON document in a prompt directory parses
    Verify(VerifyArgs),
    /// Validate a dataset document against the test-case schema
    Validate(ValidateArgs),
}

#[derive(Parser, Debug, Clone)]
pub struct RunArgs {
    /// Limit the number of tests to run
    #[arg(long)]
    pub limit: Option<usize>,

    /// Single dataset file (takes precedence over --prompts)
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Directory of prompt documents to merge
    #[arg(long, default_value = "prompts")]
    pub prompts: PathBuf,

    /// Target model identifier
    #[arg(long, default_value = "gemini-2.0-flash")]
    pub model: String,

    /// API credential; absent or "mock"-prefixed selects the offline adapter
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Maximum simultaneous in-flight model calls
    #[arg(long, default_value_t = 5)]
    pub concurrency: usize,

    /// Force the deterministic offline adapter
    #[arg(long)]
    pub mock: bool,

    /// Structured report output path
    #[arg(long, default_value = "reports/latest_evaluation_run.json")]
    pub out: PathBuf,

    /// Also write a Markdown summary next to the JSON report
    #[arg(long)]
    pub markdown: bool,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 30)]
    pub request_timeout_seconds: u64,

    /// Overall wall-clock ceiling for the batch, in seconds (unbounded
    /// when absent); tests still in flight at the deadline are failed
    #[arg(long)]
    pub deadline_seconds: Option<u64>,
}

#[derive(Parser, Debug, Clone)]
pub struct GenerateArgs {
    /// Output path for the generated dataset
    #[arg(long, default_value = "prompts/reasoning_breakdown.json")]
    pub out: PathBuf,

    /// Tests generated per category
    #[arg(long, default_value_t = gauntlet_core::dataset::generator::DEFAULT_PER_CATEGORY)]
    pub per_category: usize,

    /// Seed for reproducible prompt content
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Parser, Debug, Clone)]
pub struct VerifyArgs {
    /// Directory of JSON documents to check
    #[arg(long, default_value = "prompts")]
    pub dir: PathBuf,
}

#[derive(Parser, Debug, Clone)]
pub struct ValidateArgs {
    /// Dataset document to validate
    #[arg(long, default_value = "prompts/reasoning_breakdown.json")]
    pub file: PathBuf,
}
