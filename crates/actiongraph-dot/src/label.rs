//! Node label and identifier text.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

/// `[Scope] rest`: a bracketed scope followed by the action description.
static SCOPED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\[.+]) (.+)").expect("Invalid scoped label regex"));

/// Graph label: the first space after the scope becomes a line break, written
/// as `\n` once rendered.
pub fn graph_label(action: &str) -> Cow<'_, str> {
    SCOPED.replace(action, "${1}\n${2}")
}

/// Navigation list label: the same break as an HTML `<br/>`.
pub fn list_label(action: &str) -> Cow<'_, str> {
    SCOPED.replace(action, "${1}<br/>${2}")
}

/// Escape a value for a double-quoted DOT string: quotes and backslashes are
/// escaped, line breaks become `\n`.
pub fn escape(value: &str) -> Cow<'_, str> {
    if !value.contains(['"', '\\', '\n']) {
        return Cow::Borrowed(value);
    }
    let mut escaped = String::with_capacity(value.len() + 2);
    for c in value.chars() {
        match c {
            '"' => escaped.push_str(r#"\""#),
            '\\' => escaped.push_str(r"\\"),
            '\n' => escaped.push_str(r"\n"),
            c => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breaks_after_the_scope() {
        assert_eq!(graph_label("[Books] Load all"), "[Books]\nLoad all");
        assert_eq!(list_label("[Books] Load all"), "[Books]<br/>Load all");
    }

    #[test]
    fn unscoped_actions_are_unchanged() {
        assert_eq!(graph_label("load"), "load");
        assert_eq!(list_label("Load all"), "Load all");
        assert_eq!(graph_label("[Books]"), "[Books]");
    }

    #[test]
    fn escapes_quotes_backslashes_and_line_breaks() {
        assert_eq!(escape(r#"say "hi""#), r#"say \"hi\""#);
        assert_eq!(escape(r"C:\"), r"C:\\");
        assert_eq!(escape("[Books]\nLoad"), r"[Books]\nLoad");
        assert_eq!(escape("plain"), "plain");
    }
}
