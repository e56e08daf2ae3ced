use std::path::Path;

use actiongraph_dot::{filter_nav_items, nav_items_from_actions};

use crate::cli::ActionsArgs;
use crate::commands::utils::{analyze_project, load_config, print_json};
use crate::error::Result;
use crate::ui;

/// Print a project's actions as navigation items.
pub async fn execute(args: ActionsArgs, config_file: Option<&Path>) -> Result<()> {
    let config = load_config(&args.dir, config_file)?;
    let (project, model) = analyze_project(&args.dir, args.tsconfig.as_deref(), &config).await?;

    let items = nav_items_from_actions(&model.actions);
    let items = match args.filter.as_deref() {
        Some(query) => filter_nav_items(&items, query),
        None => items,
    };
    ui::info(&format!("{} actions in {}", items.len(), project.name));
    print_json(&items)
}
