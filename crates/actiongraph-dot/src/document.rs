//! Structured graph text.
//!
//! The generator builds a [`DotDocument`] of sections and statements first and
//! renders it in one pass, so the text layout lives in one place.

use std::fmt::{self, Write};

use indexmap::IndexSet;

use crate::label::escape;

/// Statement indentation inside the top-level graph.
const INDENT: &str = "    ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DotStatement {
    Node {
        id: String,
        attributes: Vec<(&'static str, String)>,
    },
    Edge {
        from: String,
        to: String,
        attributes: Vec<(&'static str, String)>,
    },
}

impl DotStatement {
    pub fn node(id: impl Into<String>) -> Self {
        DotStatement::Node {
            id: id.into(),
            attributes: Vec::new(),
        }
    }

    pub fn edge(from: impl Into<String>, to: impl Into<String>) -> Self {
        DotStatement::Edge {
            from: from.into(),
            to: to.into(),
            attributes: Vec::new(),
        }
    }

    /// Append an attribute; attributes render in insertion order.
    pub fn attr(mut self, key: &'static str, value: impl Into<String>) -> Self {
        match &mut self {
            DotStatement::Node { attributes, .. } | DotStatement::Edge { attributes, .. } => {
                attributes.push((key, value.into()));
            }
        }
        self
    }
}

impl fmt::Display for DotStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let attributes = match self {
            DotStatement::Node { id, attributes } => {
                write!(f, "\"{}\"", escape(id))?;
                attributes
            }
            DotStatement::Edge { from, to, attributes } => {
                write!(f, "\"{}\" -> \"{}\"", escape(from), escape(to))?;
                attributes
            }
        };
        if attributes.is_empty() {
            return Ok(());
        }
        f.write_str(" [")?;
        for (i, (key, value)) in attributes.iter().enumerate() {
            if i > 0 {
                f.write_char(' ')?;
            }
            write!(f, "{key}=\"{}\"", escape(value))?;
        }
        f.write_char(']')
    }
}

/// A run of statements introduced by a `comment="..."` marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub comment: &'static str,
    /// Drop repeated rendered lines, keeping the first.
    pub dedup: bool,
    pub statements: Vec<DotStatement>,
}

impl Section {
    pub fn new(comment: &'static str) -> Self {
        Self {
            comment,
            dedup: false,
            statements: Vec::new(),
        }
    }

    pub fn dedup(mut self) -> Self {
        self.dedup = true;
        self
    }

    pub fn push(&mut self, statement: DotStatement) {
        self.statements.push(statement);
    }

    fn lines(&self) -> Vec<String> {
        let lines = self.statements.iter().map(ToString::to_string);
        if self.dedup {
            lines.collect::<IndexSet<_>>().into_iter().collect()
        } else {
            lines.collect()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DotDocument {
    /// Graph-wide defaults, one raw line each.
    pub header: Vec<String>,
    pub sections: Vec<Section>,
}

impl DotDocument {
    pub fn new(header: Vec<String>) -> Self {
        Self {
            header,
            sections: Vec::new(),
        }
    }

    pub fn section(&mut self, section: Section) {
        self.sections.push(section);
    }

    pub fn render(&self) -> String {
        let mut out = String::from("digraph {\n");
        for line in &self.header {
            out.push_str(INDENT);
            out.push_str(line);
            out.push('\n');
        }
        out.push_str(INDENT);

        let separator = format!("\n\n{INDENT}");
        let line_separator = format!("\n{INDENT}");
        let body = self
            .sections
            .iter()
            .map(|section| {
                format!(
                    "comment=\"{}\"\n{INDENT}{}",
                    section.comment,
                    section.lines().join(&line_separator)
                )
            })
            .collect::<Vec<_>>()
            .join(&separator);
        out.push_str(&body);
        out.push_str("\n}");
        out
    }
}
