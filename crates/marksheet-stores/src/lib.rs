//! marksheet-stores — achievement record store implementations.
//!
//! Implements the `AchievementSource` and `CredentialSink` traits over a
//! local JSON directory and a server-backed REST API, so the grading core
//! stays agnostic to where the facts come from.

pub mod config;
pub mod local;
pub mod mock;
pub mod remote;

pub use config::{
    create_sink, create_source, load_config, load_config_from, MarksheetConfig, StoreConfig,
};
pub use local::{LocalSink, LocalStore};
pub use mock::{MockSink, MockSource};
pub use remote::{RemoteSink, RemoteStore};
