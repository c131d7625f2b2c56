use super::super::args::VerifyArgs;

fn item_count(value: &serde_json::Value) -> usize {
    match value {
        serde_json::Value::Array(items) => items.len(),
        serde_json::Value::Object(map) => map
            .get("tests")
            .and_then(|t| t.as_array())
            .map_or(map.len(), |t| t.len()),
        _ => 1,
    }
}

/// Structural check of every JSON document in a directory. Exits non-zero
/// when any document fails to parse.
pub(crate) fn run(args: &VerifyArgs) -> anyhow::Result<i32> {
    let entries = std::fs::read_dir(&args.dir)?;
    let mut paths: Vec<_> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.extension().is_some_and(|ext| ext == "json"))
        .collect();
    paths.sort();

    println!("Found {} JSON files in {}...", paths.len(), args.dir.display());

    let mut all_valid = true;
    for path in &paths {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());
        match std::fs::read_to_string(path)
            .map_err(anyhow::Error::from)
            .and_then(|raw| serde_json::from_str::<serde_json::Value>(&raw).map_err(Into::into))
        {
            Ok(value) => {
                println!("[PASS] {} - Valid JSON. Contains {} items.", name, item_count(&value));
            }
            Err(e) => {
                println!("[FAIL] {} - Invalid JSON: {}", name, e);
                all_valid = false;
            }
        }
    }

    if all_valid {
        println!("\nAll JSON files verified successfully.");
        Ok(0)
    } else {
        println!("\nSome files failed verification.");
        Ok(1)
    }
}
