//! The `marksheet validate` command.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use marksheet_stores::local::{load_bundle, validate_bundle};

pub fn execute(data: PathBuf) -> Result<()> {
    let paths = collect_bundle_paths(&data)?;
    anyhow::ensure!(!paths.is_empty(), "no bundle files found at {}", data.display());

    let mut total_problems = 0usize;
    for path in &paths {
        let bundle = load_bundle(path)?;
        let problems = validate_bundle(&bundle);
        println!(
            "{}: {} courses, {} attempts, {} submissions",
            path.display(),
            bundle.courses.len(),
            bundle.attempts.len(),
            bundle.submissions.len()
        );
        for problem in &problems {
            println!("  problem: {problem}");
        }
        total_problems += problems.len();
    }

    if total_problems > 0 {
        anyhow::bail!("{total_problems} problem(s) across {} bundle(s)", paths.len());
    }

    println!("All bundles valid ({} checked)", paths.len());
    Ok(())
}

fn collect_bundle_paths(data: &Path) -> Result<Vec<PathBuf>> {
    if data.is_dir() {
        let mut paths: Vec<PathBuf> = std::fs::read_dir(data)
            .with_context(|| format!("failed to read directory {}", data.display()))?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|p| p.extension().is_some_and(|ext| ext == "json"))
            .collect();
        paths.sort();
        Ok(paths)
    } else if data.exists() {
        Ok(vec![data.to_path_buf()])
    } else {
        anyhow::bail!("path not found: {}", data.display());
    }
}
