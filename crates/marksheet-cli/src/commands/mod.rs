pub mod init;
pub mod issue;
pub mod transcript;
pub mod validate;
pub mod verify;

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;

use marksheet_core::engine::{TranscriptEngine, TranscriptEngineConfig};
use marksheet_stores::{create_sink, create_source, load_config_from, MarksheetConfig};

/// Build an engine from the loaded config, wiring the named (or default)
/// store as both source and sink.
pub(crate) fn build_engine(
    config: &MarksheetConfig,
    store: Option<&str>,
    with_sink: bool,
) -> Result<TranscriptEngine> {
    let store_name = store.unwrap_or(&config.default_store);
    let store_config = config.stores.get(store_name).ok_or_else(|| {
        anyhow::anyhow!(
            "store '{}' not found in config. Available: {:?}",
            store_name,
            config.stores.keys().collect::<Vec<_>>()
        )
    })?;

    let source = Arc::from(create_source(store_config)?);
    let sink = if with_sink {
        Some(Arc::from(create_sink(store_config)?))
    } else {
        None
    };

    Ok(TranscriptEngine::new(
        source,
        sink,
        TranscriptEngineConfig {
            verification_base_url: config.verification_base_url.clone(),
            issue_year: config.issue_year,
        },
    ))
}

pub(crate) fn load_config(path: Option<&Path>) -> Result<MarksheetConfig> {
    load_config_from(path)
}
