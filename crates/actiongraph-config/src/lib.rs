//! Configuration for actiongraph.
//!
//! Settings come from three layers, later ones winning:
//!
//! 1. built-in defaults
//! 2. `actiongraph.toml` in the project directory (or an explicit file)
//! 3. `ACTIONGRAPH_` environment variables, nested keys split on `__`
//!    (`ACTIONGRAPH_ANALYSIS__MAX_FILE_SIZE=1048576`)

pub mod config;
pub mod discovery;
pub mod error;

pub use config::{ActionGraphConfig, AnalysisSettings, OutputSettings};
pub use discovery::{CONFIG_FILE, ConfigDiscovery, ENV_PREFIX};
pub use error::{ConfigError, Result};
