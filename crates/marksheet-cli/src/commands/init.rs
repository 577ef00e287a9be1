//! The `marksheet init` command.

use std::path::Path;

use anyhow::{Context, Result};

const STARTER_CONFIG: &str = r#"# marksheet configuration
default_store = "local"
verification_base_url = "https://marksheet.dev"
# issue_year = 2026

[stores.local]
type = "local"
data_dir = "./data"

# [stores.remote]
# type = "remote"
# base_url = "https://api.example.org"
# api_token = "${MARKSHEET_API_TOKEN}"
"#;

const SAMPLE_BUNDLE: &str = r#"{
  "courses": [
    {
      "id": "rust-101",
      "title": "Intro to Rust",
      "program": "Systems Track",
      "credit_cost": 4,
      "is_free": false,
      "project_required": true
    },
    {
      "id": "rust-201",
      "title": "Async Rust",
      "program": "Systems Track",
      "credit_cost": 3,
      "is_free": false,
      "project_required": false
    }
  ],
  "attempts": {
    "rust-101": { "score_percentage": 92, "passed": true }
  },
  "submissions": [
    { "course_id": "rust-101", "submitted_at": "2026-03-01T12:00:00Z" }
  ],
  "lesson_progress": {
    "rust-101": 12,
    "rust-201": 3
  }
}
"#;

pub fn execute() -> Result<()> {
    write_if_absent(Path::new("marksheet.toml"), STARTER_CONFIG)?;
    write_if_absent(Path::new("data/sample-learner.json"), SAMPLE_BUNDLE)?;
    Ok(())
}

fn write_if_absent(path: &Path, content: &str) -> Result<()> {
    if path.exists() {
        println!("{} already exists, skipping", path.display());
        return Ok(());
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
    }
    std::fs::write(path, content)
        .with_context(|| format!("failed to write {}", path.display()))?;
    println!("Created {}", path.display());
    Ok(())
}
