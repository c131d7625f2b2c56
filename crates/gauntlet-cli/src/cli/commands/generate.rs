use super::super::args::GenerateArgs;
use gauntlet_core::dataset::generator::generate_dataset;
use gauntlet_core::dataset::ReasoningDataset;

pub(crate) fn run(args: GenerateArgs) -> anyhow::Result<i32> {
    let tests = generate_dataset(args.per_category, args.seed);
    let dataset = ReasoningDataset { tests };

    if let Some(parent) = args.out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(&args.out, serde_json::to_string_pretty(&dataset)?)?;

    println!(
        "Generated {} tests and saved to {}",
        dataset.tests.len(),
        args.out.display()
    );
    Ok(0)
}
