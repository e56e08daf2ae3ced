//! Winnow parser for the DOT language.
//!
//! Covers the full statement grammar: `strict`, `graph`/`digraph`, node, edge
//! and attribute statements, `ID = ID` assignments, named and anonymous
//! subgraphs, ports, and every ID form (identifiers, numerals, quoted strings
//! with `+` concatenation, HTML strings). Keywords are case-insensitive.
//! `//`, `/* */` and `#` line comments are skipped.

use winnow::{
    ModalResult, Parser,
    ascii::{Caseless, digit0, digit1, multispace1, till_line_ending},
    combinator::{alt, cut_err, fail, not, opt, preceded, repeat, terminated},
    error::{ContextError, ErrMode, StrContext, StrContextValue},
    token::{any, literal, one_of, take_until, take_while},
};

use crate::ast::{
    AttrStatement, AttrTarget, Attribute, EdgeOp, EdgeOperand, EdgeStatement, Graph, GraphKind,
    NodeId, NodeStatement, Statement, Subgraph,
};
use crate::error::DotParseError;

/// Parse one or more graphs.
pub fn parse_dot(text: &str) -> Result<Vec<Graph>, DotParseError> {
    graphs.parse(text).map_err(|error| {
        let message = error.inner().to_string();
        DotParseError::new(text, error.offset(), message)
    })
}

fn graphs(input: &mut &str) -> ModalResult<Vec<Graph>> {
    terminated(repeat(1.., graph), ws).parse_next(input)
}

fn graph(input: &mut &str) -> ModalResult<Graph> {
    ws(input)?;
    let strict = opt(terminated(keyword("strict"), ws))
        .parse_next(input)?
        .is_some();
    let kind = alt((
        keyword("digraph").value(GraphKind::Digraph),
        keyword("graph").value(GraphKind::Graph),
    ))
    .context(StrContext::Expected(StrContextValue::Description("graph or digraph")))
    .parse_next(input)?;
    ws(input)?;
    let id = opt(terminated(id, ws)).parse_next(input)?;
    let statements = block(input)?;

    Ok(Graph {
        strict,
        kind,
        id,
        statements,
    })
}

/// `{ stmt_list }`
fn block(input: &mut &str) -> ModalResult<Vec<Statement>> {
    cut_err('{')
        .context(StrContext::Expected(StrContextValue::CharLiteral('{')))
        .parse_next(input)?;
    let mut statements = Vec::new();
    loop {
        ws(input)?;
        if opt('}').parse_next(input)?.is_some() {
            return Ok(statements);
        }
        statements.push(cut_err(statement).context(StrContext::Label("statement")).parse_next(input)?);
        ws(input)?;
        opt(one_of([';', ','])).parse_next(input)?;
    }
}

fn statement(input: &mut &str) -> ModalResult<Statement> {
    alt((
        attr_statement.map(Statement::Attr),
        subgraph_statement,
        id_statement,
    ))
    .parse_next(input)
}

fn attr_statement(input: &mut &str) -> ModalResult<AttrStatement> {
    let target = alt((
        keyword("graph").value(AttrTarget::Graph),
        keyword("node").value(AttrTarget::Node),
        keyword("edge").value(AttrTarget::Edge),
    ))
    .parse_next(input)?;
    ws(input)?;
    let attributes = attr_lists(input)?;
    Ok(AttrStatement { target, attributes })
}

/// A subgraph on its own or as the first operand of an edge.
fn subgraph_statement(input: &mut &str) -> ModalResult<Statement> {
    let first = subgraph(input)?;
    let tail = edge_tail(input)?;
    if tail.is_empty() {
        return Ok(Statement::Subgraph(first));
    }
    let attributes = opt(preceded(ws, attr_lists)).parse_next(input)?;
    Ok(Statement::Edge(edge(
        EdgeOperand::Subgraph(first),
        tail,
        attributes.unwrap_or_default(),
    )))
}

/// Assignment, edge or node statement, all starting with an ID.
fn id_statement(input: &mut &str) -> ModalResult<Statement> {
    let first = id(input)?;
    if let Some(value) = opt(preceded((ws, '=', ws), cut_err(id))).parse_next(input)? {
        return Ok(Statement::Assignment { key: first, value });
    }

    let node = NodeId {
        id: first,
        port: opt(port).parse_next(input)?,
    };
    let tail = edge_tail(input)?;
    let attributes = opt(preceded(ws, attr_lists))
        .parse_next(input)?
        .unwrap_or_default();

    if tail.is_empty() {
        Ok(Statement::Node(NodeStatement { node, attributes }))
    } else {
        Ok(Statement::Edge(edge(EdgeOperand::Node(node), tail, attributes)))
    }
}

fn edge(
    first: EdgeOperand,
    tail: Vec<(EdgeOp, EdgeOperand)>,
    attributes: Vec<Attribute>,
) -> EdgeStatement {
    let mut operands = vec![first];
    let mut ops = Vec::with_capacity(tail.len());
    for (op, operand) in tail {
        ops.push(op);
        operands.push(operand);
    }
    EdgeStatement {
        operands,
        ops,
        attributes,
    }
}

fn edge_tail(input: &mut &str) -> ModalResult<Vec<(EdgeOp, EdgeOperand)>> {
    repeat(
        0..,
        (
            preceded(ws, edge_op),
            preceded(
                ws,
                cut_err(edge_operand).context(StrContext::Label("edge operand")),
            ),
        ),
    )
    .parse_next(input)
}

fn edge_op(input: &mut &str) -> ModalResult<EdgeOp> {
    alt(("->".value(EdgeOp::Directed), "--".value(EdgeOp::Undirected))).parse_next(input)
}

fn edge_operand(input: &mut &str) -> ModalResult<EdgeOperand> {
    alt((
        subgraph.map(EdgeOperand::Subgraph),
        (id, opt(port)).map(|(id, port)| EdgeOperand::Node(NodeId { id, port })),
    ))
    .parse_next(input)
}

/// `subgraph [ID] { ... }` or an anonymous `{ ... }`.
fn subgraph(input: &mut &str) -> ModalResult<Subgraph> {
    let header = opt(preceded(
        (keyword("subgraph"), ws),
        opt(terminated(id, ws)),
    ))
    .parse_next(input)?;
    if header.is_none() && !input.starts_with('{') {
        return fail.parse_next(input);
    }
    let statements = block(input)?;
    Ok(Subgraph {
        id: header.flatten(),
        statements,
    })
}

/// `:port` or `:port:compass`, kept as written without the leading colon.
fn port(input: &mut &str) -> ModalResult<String> {
    preceded(
        (ws, ':', ws),
        cut_err((id, opt(preceded((ws, ':', ws), id)))),
    )
    .map(|(port, compass)| match compass {
        Some(compass) => format!("{port}:{compass}"),
        None => port,
    })
    .parse_next(input)
}

/// One or more `[ ... ]` lists, flattened.
fn attr_lists(input: &mut &str) -> ModalResult<Vec<Attribute>> {
    repeat(1.., terminated(attr_list, ws))
        .fold(Vec::new, |mut all: Vec<Attribute>, list| {
            all.extend(list);
            all
        })
        .parse_next(input)
}

fn attr_list(input: &mut &str) -> ModalResult<Vec<Attribute>> {
    '['.parse_next(input)?;
    let mut attributes = Vec::new();
    loop {
        ws(input)?;
        if opt(']').parse_next(input)?.is_some() {
            return Ok(attributes);
        }
        let key = cut_err(id).context(StrContext::Label("attribute")).parse_next(input)?;
        let value = opt(preceded((ws, '=', ws), cut_err(id))).parse_next(input)?;
        attributes.push(Attribute {
            key,
            value: value.unwrap_or_else(|| "true".to_string()),
        });
        ws(input)?;
        opt(one_of([';', ','])).parse_next(input)?;
    }
}

fn id(input: &mut &str) -> ModalResult<String> {
    alt((quoted, html, numeral, identifier))
        .context(StrContext::Expected(StrContextValue::Description("identifier")))
        .parse_next(input)
}

fn identifier(input: &mut &str) -> ModalResult<String> {
    (
        one_of(|c: char| c.is_alphabetic() || c == '_' || !c.is_ascii()),
        take_while(0.., is_id_char),
    )
        .take()
        .map(|s: &str| s.to_string())
        .parse_next(input)
}

fn numeral(input: &mut &str) -> ModalResult<String> {
    (
        opt('-'),
        alt((('.', digit1).void(), (digit1, opt(('.', digit0))).void())),
    )
        .take()
        .map(|s: &str| s.to_string())
        .parse_next(input)
}

/// `"..."` optionally joined with `+`. `\"` and `\\` are unescaped and an
/// escaped newline continues the line; other escapes are kept verbatim.
fn quoted(input: &mut &str) -> ModalResult<String> {
    let mut value = quoted_part(input)?;
    while let Some(next) = opt(preceded((ws, '+', ws), cut_err(quoted_part))).parse_next(input)? {
        value.push_str(&next);
    }
    Ok(value)
}

fn quoted_part(input: &mut &str) -> ModalResult<String> {
    '"'.parse_next(input)?;
    let mut value = String::new();
    loop {
        let c = cut_err(any)
            .context(StrContext::Expected(StrContextValue::CharLiteral('"')))
            .parse_next(input)?;
        match c {
            '"' => return Ok(value),
            '\\' => {
                if let Some(escaped) = opt(one_of(['"', '\\'])).parse_next(input)? {
                    value.push(escaped);
                } else if opt(alt(("\r\n", "\n"))).parse_next(input)?.is_none() {
                    value.push('\\');
                    if let Some(escaped) = opt(any).parse_next(input)? {
                        value.push(escaped);
                    }
                }
            }
            c => value.push(c),
        }
    }
}

/// `<...>` with balanced angle brackets, kept with its delimiters.
fn html(input: &mut &str) -> ModalResult<String> {
    let start = *input;
    '<'.parse_next(input)?;
    let mut depth = 1usize;
    while depth > 0 {
        let c = cut_err(any)
            .context(StrContext::Expected(StrContextValue::CharLiteral('>')))
            .parse_next(input)?;
        match c {
            '<' => depth += 1,
            '>' => depth -= 1,
            _ => {}
        }
    }
    Ok(start[..start.len() - input.len()].to_string())
}

fn is_id_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || !c.is_ascii()
}

/// A case-insensitive keyword not followed by an identifier character.
fn keyword<'i>(word: &'static str) -> impl Parser<&'i str, &'i str, ErrMode<ContextError>> {
    terminated(literal(Caseless(word)), not(one_of(is_id_char)))
}

/// Whitespace and comments.
fn ws(input: &mut &str) -> ModalResult<()> {
    repeat(
        0..,
        alt((
            multispace1.void(),
            ("//", till_line_ending).void(),
            ('#', till_line_ending).void(),
            ("/*", cut_err(take_until(0.., "*/")), "*/").void(),
        )),
    )
    .parse_next(input)
}
