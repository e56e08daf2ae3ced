//! Miette rendering of CLI errors.

use miette::{LabeledSpan, NamedSource, Report};

use crate::error::CliError;

/// Convert a [`CliError`] into a miette report. Graph syntax errors point
/// at the offending position in the file.
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Dot { path, text, source } => {
            let offset = source.offset;
            miette::miette!(
                labels = vec![LabeledSpan::at_offset(offset, source.message.clone())],
                help = "The file must be a Graphviz DOT graph, e.g. `digraph { a -> b }`",
                "Invalid graph file {}: line {}, column {}",
                path.display(),
                source.line,
                source.column
            )
            .with_source_code(NamedSource::new(path.display().to_string(), text))
        }
        other => miette::miette!("{}", other),
    }
}
