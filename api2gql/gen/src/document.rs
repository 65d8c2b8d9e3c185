//! Intermediate text tree for generated artifacts.
//!
//! Generators never concatenate indentation or blank lines themselves. They
//! build a [`Document`] out of [`Node`]s, and [`Document::render`] is the only
//! place where indentation width and line breaks are decided.
//!
//! ## Examples
//!
//! ```
//! use api2gql_gen::document::{Document, Node};
//!
//! let mut doc = Document::new();
//! doc.push(Node::block("fragment tagsData on ResGetItemtagsItem", vec![
//!     Node::line("label"),
//! ]));
//!
//! assert_eq!(
//!     doc.render("  "),
//!     "fragment tagsData on ResGetItemtagsItem {\n  label\n}\n"
//! );
//! ```

/// One element of a generated document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A single line at the current indentation.
    Line(String),
    /// An empty line (never indented).
    Blank,
    /// Children rendered one level deeper, without delimiters.
    Indent(Vec<Node>),
    /// `header {`, the body one level deeper, then `}`.
    Block {
        /// Text before the opening brace.
        header: String,
        /// Block contents.
        body: Vec<Node>,
    },
}

impl Node {
    /// Creates a [`Node::Line`].
    pub fn line(text: impl Into<String>) -> Self {
        Self::Line(text.into())
    }

    /// Creates a [`Node::Block`].
    pub fn block(header: impl Into<String>, body: Vec<Node>) -> Self {
        Self::Block {
            header: header.into(),
            body,
        }
    }

    /// Creates a [`Node::Indent`].
    pub fn indent(body: Vec<Node>) -> Self {
        Self::Indent(body)
    }
}

/// Flattens groups of nodes, putting a [`Node::Blank`] between non-empty groups.
pub fn separated<I>(groups: I) -> Vec<Node>
where
    I: IntoIterator<Item = Vec<Node>>,
{
    let mut nodes = Vec::new();
    for group in groups.into_iter().filter(|group| !group.is_empty()) {
        if !nodes.is_empty() {
            nodes.push(Node::Blank);
        }
        nodes.extend(group);
    }
    nodes
}

/// Appends `,` to every line but the last, for argument-style lists.
pub fn comma_separated<I, S>(items: I) -> Vec<Node>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let items: Vec<String> = items.into_iter().map(Into::into).collect();
    let last = items.len().saturating_sub(1);
    items
        .into_iter()
        .enumerate()
        .map(|(idx, item)| {
            if idx < last {
                Node::Line(format!("{item},"))
            } else {
                Node::Line(item)
            }
        })
        .collect()
}

/// A generated artifact before rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    nodes: Vec<Node>,
}

impl Document {
    /// Creates an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a node.
    pub fn push(&mut self, node: Node) {
        self.nodes.push(node);
    }

    /// Appends a section, preceded by a blank line unless the document is empty.
    pub fn push_section(&mut self, nodes: Vec<Node>) {
        if nodes.is_empty() {
            return;
        }
        if !self.nodes.is_empty() {
            self.nodes.push(Node::Blank);
        }
        self.nodes.extend(nodes);
    }

    /// True if nothing has been pushed.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Renders the document. Every line, including the last, ends with `\n`.
    pub fn render(&self, indent: &str) -> String {
        let mut out = String::new();
        render_nodes(&self.nodes, indent, 0, &mut out);
        out
    }
}

impl From<Vec<Node>> for Document {
    fn from(nodes: Vec<Node>) -> Self {
        Self { nodes }
    }
}

fn render_nodes(nodes: &[Node], indent: &str, level: usize, out: &mut String) {
    for node in nodes {
        match node {
            Node::Line(text) => push_line(out, indent, level, text),
            Node::Blank => out.push('\n'),
            Node::Indent(body) => render_nodes(body, indent, level + 1, out),
            Node::Block { header, body } => {
                push_line(out, indent, level, &format!("{header} {{"));
                render_nodes(body, indent, level + 1, out);
                push_line(out, indent, level, "}");
            }
        }
    }
}

fn push_line(out: &mut String, indent: &str, level: usize, text: &str) {
    for _ in 0..level {
        out.push_str(indent);
    }
    out.push_str(text);
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_blocks_indent_per_level() {
        let doc = Document::from(vec![Node::block(
            "outer",
            vec![Node::line("a"), Node::block("inner", vec![Node::line("b")])],
        )]);
        assert_eq!(doc.render("  "), "outer {\n  a\n  inner {\n    b\n  }\n}\n");
    }

    #[test]
    fn indent_width_is_a_render_parameter() {
        let doc = Document::from(vec![Node::block("x", vec![Node::line("y")])]);
        assert_eq!(doc.render("    "), "x {\n    y\n}\n");
        assert_eq!(doc.render("\t"), "x {\n\ty\n}\n");
    }

    #[test]
    fn blank_lines_carry_no_indentation() {
        let doc = Document::from(vec![Node::block(
            "x",
            vec![Node::line("a"), Node::Blank, Node::line("b")],
        )]);
        assert_eq!(doc.render("  "), "x {\n  a\n\n  b\n}\n");
    }

    #[test]
    fn indent_node_has_no_delimiters() {
        let doc = Document::from(vec![
            Node::line("call("),
            Node::indent(vec![Node::line("a")]),
            Node::line(")"),
        ]);
        assert_eq!(doc.render("  "), "call(\n  a\n)\n");
    }

    #[test]
    fn empty_block_renders_braces() {
        let doc = Document::from(vec![Node::block("export class Empty", vec![])]);
        assert_eq!(doc.render("  "), "export class Empty {\n}\n");
    }

    #[test]
    fn sections_are_separated_by_one_blank_line() {
        let mut doc = Document::new();
        doc.push_section(vec![Node::line("first")]);
        doc.push_section(vec![]);
        doc.push_section(vec![Node::line("second")]);
        assert_eq!(doc.render("  "), "first\n\nsecond\n");
    }

    #[test]
    fn separated_skips_empty_groups() {
        let nodes = separated(vec![vec![Node::line("a")], vec![], vec![Node::line("b")]]);
        assert_eq!(nodes, vec![Node::line("a"), Node::Blank, Node::line("b")]);
    }

    #[test]
    fn comma_separated_leaves_last_item_bare() {
        assert_eq!(
            comma_separated(["$a: String!", "$b: Float"]),
            vec![Node::line("$a: String!,"), Node::line("$b: Float")]
        );
        assert!(comma_separated(Vec::<String>::new()).is_empty());
    }
}
