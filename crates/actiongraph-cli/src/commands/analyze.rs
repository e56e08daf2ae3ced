use std::path::Path;

use actiongraph_dot::create_dot_src;
use tokio::fs;

use crate::cli::AnalyzeArgs;
use crate::commands::utils::{analyze_project, load_config, print_json};
use crate::error::Result;
use crate::ui;

/// Analyze a project and write its graph.
pub async fn execute(args: AnalyzeArgs, config_file: Option<&Path>) -> Result<()> {
    let config = load_config(&args.dir, config_file)?;
    let (project, model) = analyze_project(&args.dir, args.tsconfig.as_deref(), &config).await?;

    let dot = create_dot_src(&model.actions, &model.effects, &model.reducers);
    let out = args
        .out
        .unwrap_or_else(|| config.output.dot_path(&project.name));
    if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).await?;
    }
    fs::write(&out, dot).await?;

    if model.is_empty() {
        ui::warning("No actions, effects or reducers found");
    }
    ui::success(&format!(
        "Wrote {} ({} actions, {} effects, {} reducers)",
        console::style(out.display()).bold(),
        model.actions.len(),
        model.effects.len(),
        model.reducers.len()
    ));

    if args.json {
        print_json(&model)?;
    }
    Ok(())
}
