//! File-based config discovery.

use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format as _, Serialized, Toml},
};

use crate::config::ActionGraphConfig;
use crate::error::{ConfigError, Result};

pub const CONFIG_FILE: &str = "actiongraph.toml";

pub const ENV_PREFIX: &str = "ACTIONGRAPH_";

/// Finds and loads the configuration of one project.
///
/// # Example
///
/// ```no_run
/// use actiongraph_config::ConfigDiscovery;
///
/// let config = ConfigDiscovery::new("./my-app").load().unwrap();
/// println!("{}", config.analysis.tsconfig);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigDiscovery {
    root: PathBuf,
    file: Option<PathBuf>,
}

impl ConfigDiscovery {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            file: None,
        }
    }

    /// Use `path` instead of looking for `actiongraph.toml`. The file must exist.
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.file = Some(path.into());
        self
    }

    /// The config file that [`load`](Self::load) would read.
    pub fn find(&self) -> Option<PathBuf> {
        if let Some(file) = &self.file {
            return file.is_file().then(|| file.clone());
        }
        let path = self.root.join(CONFIG_FILE);
        path.is_file().then_some(path)
    }

    /// The provider stack: defaults, then the file, then the environment.
    pub fn figment(&self) -> Result<Figment> {
        let mut figment = Figment::new().merge(Serialized::defaults(ActionGraphConfig::default()));

        match (self.find(), &self.file) {
            (Some(path), _) => {
                tracing::debug!(path = %path.display(), "loading config file");
                figment = figment.merge(Toml::file(path));
            }
            (None, Some(explicit)) => return Err(ConfigError::NotFound(explicit.clone())),
            (None, None) => tracing::debug!(root = %self.root.display(), "no config file, using defaults"),
        }

        Ok(figment.merge(
            Env::prefixed(ENV_PREFIX)
                .split("__")
                .map(|key| key.as_str().replace('_', "-").into()),
        ))
    }

    /// Load and validate the configuration.
    ///
    /// # Errors
    ///
    /// `ConfigError::NotFound` if an explicit file does not exist and
    /// `ConfigError::InvalidValue` for malformed or out-of-range values.
    pub fn load(&self) -> Result<ActionGraphConfig> {
        let config: ActionGraphConfig = self.figment()?.extract()?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn find_returns_none_without_config() {
        let dir = tempfile::TempDir::new().unwrap();
        assert!(ConfigDiscovery::new(dir.path()).find().is_none());
    }

    #[test]
    fn find_discovers_toml_config() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "").unwrap();
        assert_eq!(ConfigDiscovery::new(dir.path()).find(), Some(path));
    }

    #[test]
    fn load_without_file_uses_defaults() {
        Jail::expect_with(|_jail| {
            let config = ConfigDiscovery::new(".").load().unwrap();
            assert_eq!(config, ActionGraphConfig::default());
            Ok(())
        });
    }

    #[test]
    fn load_reads_toml() {
        Jail::expect_with(|jail| {
            jail.create_file(
                CONFIG_FILE,
                r#"
                [analysis]
                tsconfig = "tsconfig.app.json"
                ignore = ["**/*.spec.ts"]

                [rules]
                catch-error = ["catchError", "recover"]

                [output]
                file-name = "graph.dot"
                "#,
            )?;

            let config = ConfigDiscovery::new(".").load().unwrap();
            assert_eq!(config.analysis.tsconfig, "tsconfig.app.json");
            assert_eq!(config.analysis.ignore, vec!["**/*.spec.ts".to_string()]);
            assert!(config.rules.is_catch_error("recover"));
            assert_eq!(config.output.file_name.as_deref(), Some("graph.dot"));
            Ok(())
        });
    }

    #[test]
    fn environment_overrides_file() {
        Jail::expect_with(|jail| {
            jail.create_file(CONFIG_FILE, "[analysis]\nmax-depth = 8\n")?;
            jail.set_env("ACTIONGRAPH_ANALYSIS__MAX_DEPTH", "16");
            jail.set_env("ACTIONGRAPH_ANALYSIS__TSCONFIG", "tsconfig.lib.json");

            let config = ConfigDiscovery::new(".").load().unwrap();
            assert_eq!(config.analysis.max_depth, 16);
            assert_eq!(config.analysis.tsconfig, "tsconfig.lib.json");
            Ok(())
        });
    }

    #[test]
    fn explicit_file_must_exist() {
        Jail::expect_with(|_jail| {
            let err = ConfigDiscovery::new(".")
                .with_file("missing.toml")
                .load()
                .unwrap_err();
            assert!(matches!(err, ConfigError::NotFound(path) if path == Path::new("missing.toml")));
            Ok(())
        });
    }

    #[test]
    fn type_errors_name_the_field() {
        Jail::expect_with(|jail| {
            jail.create_file(CONFIG_FILE, "[analysis]\nmax-depth = \"deep\"\n")?;

            let err = ConfigDiscovery::new(".").load().unwrap_err();
            match err {
                ConfigError::InvalidValue { field, .. } => assert_eq!(field, "analysis.max-depth"),
                other => panic!("unexpected error: {other}"),
            }
            Ok(())
        });
    }
}
