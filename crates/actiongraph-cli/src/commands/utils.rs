use std::path::Path;

use actiongraph_analysis::RelationalModel;
use actiongraph_config::{ActionGraphConfig, ConfigDiscovery};
use serde::Serialize;

use crate::error::Result;
use crate::project::Project;

/// Configuration of the project in `dir`, or of `file` when given.
pub(crate) fn load_config(dir: &Path, file: Option<&Path>) -> Result<ActionGraphConfig> {
    let mut discovery = ConfigDiscovery::new(dir);
    if let Some(file) = file {
        discovery = discovery.with_file(file);
    }
    Ok(discovery.load()?)
}

/// Read and analyze the project in `dir`.
pub(crate) async fn analyze_project(
    dir: &Path,
    tsconfig: Option<&str>,
    config: &ActionGraphConfig,
) -> Result<(Project, RelationalModel)> {
    let project = Project::load(dir, &config.analysis).await?;
    let tsconfig = tsconfig.unwrap_or(&config.analysis.tsconfig);

    let mut analyzer = project.analyzer(config.rules.clone(), config.analysis.analyzer_config());
    let model = analyzer.parse(&project.store_path(tsconfig))?;
    Ok((project, model))
}

/// Pretty-printed JSON on stdout.
pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
