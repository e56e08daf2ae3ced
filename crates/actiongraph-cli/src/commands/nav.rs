use actiongraph_dot::{filter_nav_items, nav_items_from_dot_src};
use tokio::fs;

use crate::cli::NavArgs;
use crate::commands::utils::print_json;
use crate::error::{CliError, Result, ResultExt};

/// Print the navigation list of a graph file.
pub async fn execute(args: NavArgs) -> Result<()> {
    let text = fs::read_to_string(&args.file).await.with_path(&args.file)?;
    let items = match nav_items_from_dot_src(&text) {
        Ok(items) => items,
        Err(source) => {
            return Err(CliError::Dot {
                path: args.file,
                text,
                source,
            });
        }
    };

    let items = match args.filter.as_deref() {
        Some(query) => filter_nav_items(&items, query),
        None => items,
    };
    tracing::debug!(items = items.len(), "navigation list ready");
    print_json(&items)
}
