use super::super::args::ValidateArgs;
use gauntlet_core::dataset::loader;
use std::collections::BTreeMap;

/// Typed validation of a dataset document. Exits non-zero when the
/// document does not parse into the test-case schema.
pub(crate) fn run(args: &ValidateArgs) -> anyhow::Result<i32> {
    let tests = match loader::load_file(&args.file) {
        Ok(tests) => tests,
        Err(e) => {
            println!("Schema validation: FAILED");
            println!("{}", e);
            return Ok(1);
        }
    };

    println!("Schema validation: SUCCESS");
    println!("Total entries parsed: {}", tests.len());

    let mut categories: BTreeMap<&str, usize> = BTreeMap::new();
    for tc in &tests {
        *categories.entry(tc.category.as_str()).or_default() += 1;
    }
    for (category, count) in categories {
        println!(" - {}: {} tests", category, count);
    }
    Ok(0)
}
