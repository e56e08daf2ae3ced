//! Syntax tree of parsed DOT text.

/// `graph` or `digraph`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphKind {
    Graph,
    Digraph,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    pub strict: bool,
    pub kind: GraphKind,
    pub id: Option<String>,
    pub statements: Vec<Statement>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    Node(NodeStatement),
    Edge(EdgeStatement),
    Attr(AttrStatement),
    /// `ID = ID` at statement level.
    Assignment { key: String, value: String },
    Subgraph(Subgraph),
}

/// A node reference with an optional `:port[:compass]` suffix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeId {
    pub id: String,
    pub port: Option<String>,
}

impl NodeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            port: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub key: String,
    pub value: String,
}

impl Attribute {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeStatement {
    pub node: NodeId,
    pub attributes: Vec<Attribute>,
}

impl NodeStatement {
    /// Value of the first attribute named `key`.
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|attr| attr.key == key)
            .map(|attr| attr.value.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeOp {
    /// `->`
    Directed,
    /// `--`
    Undirected,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EdgeOperand {
    Node(NodeId),
    Subgraph(Subgraph),
}

/// `a -> b -> { c d }`: `operands` has one more entry than `ops`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeStatement {
    pub operands: Vec<EdgeOperand>,
    pub ops: Vec<EdgeOp>,
    pub attributes: Vec<Attribute>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttrTarget {
    Graph,
    Node,
    Edge,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttrStatement {
    pub target: AttrTarget,
    pub attributes: Vec<Attribute>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subgraph {
    pub id: Option<String>,
    pub statements: Vec<Statement>,
}
