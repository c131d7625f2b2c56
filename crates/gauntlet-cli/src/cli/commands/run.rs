use super::super::args::RunArgs;
use gauntlet_core::config::HarnessConfig;
use gauntlet_core::dataset::loader;
use gauntlet_core::engine::runner::Runner;
use gauntlet_core::providers::llm::client_for;
use gauntlet_core::report;
use std::time::Duration;

pub(crate) async fn run(args: RunArgs) -> anyhow::Result<i32> {
    let tests = match &args.file {
        Some(file) => loader::load_file(file)?,
        None => loader::load_dir(&args.prompts)?,
    };
    if tests.is_empty() {
        eprintln!("No tests loaded.");
        return Ok(0);
    }

    let cfg = HarnessConfig {
        api_key: args.api_key.clone(),
        model: args.model.clone(),
        concurrency: args.concurrency,
        limit: args.limit,
        request_timeout: Duration::from_secs(args.request_timeout_seconds),
        deadline: args.deadline_seconds.map(Duration::from_secs),
        mock: args.mock,
    };

    let selected = args.limit.unwrap_or(tests.len()).min(tests.len());
    eprintln!("Starting evaluation for {} tests...", selected);
    eprintln!(
        "Mode: {}",
        if cfg.use_mock() { "MOCK" } else { "LIVE" }
    );

    let client = client_for(&cfg);
    let runner = Runner::new(client, cfg);
    let progress = report::console::default_progress_sink(selected);
    let run_report = runner.run(&tests, progress).await?;

    report::json::write_report(&run_report, &args.out)?;
    if args.markdown {
        let md_out = args.out.with_extension("md");
        report::markdown::write_markdown(&run_report, &md_out)?;
        eprintln!("Saved Markdown summary to {}", md_out.display());
    }

    report::console::print_summary(&run_report);
    eprintln!("Saved structured results to {}", args.out.display());
    Ok(0)
}
