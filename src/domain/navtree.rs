//! Documentation navigation tree
//!
//! The docs sidebar is a tree of `(label, link, children)` triples. The viewer
//! loads it from a script of the form
//!
//! ```text
//! var NAVTREE =
//! [
//!   [ "Polynomial Calculator", "index.html", [
//!     [ "README", "md__r_e_a_d_m_e.html", null ]
//!   ] ]
//! ];
//! var NAVTREEINDEX = [ "annotated.html" ];
//! var SYNCONMSG = '...';
//! var SYNCOFFMSG = '...';
//! ```
//!
//! `children` is `null` for a leaf, a nested array of entries, or the name of
//! a separately-loaded index script.

use std::fmt::{self, Write as _};

use itertools::Itertools;
use regex::Regex;
use serde::{Deserialize, Serialize};
use termtree::Tree;
use tracing::{debug, instrument};

use crate::domain::error::{DomainError, DomainResult};

/// Tooltip of the sync toggle while panel synchronization is on.
pub const SYNC_ON_MSG: &str = "нажмите на выключить для синхронизации панелей";
/// Tooltip of the sync toggle while panel synchronization is off.
pub const SYNC_OFF_MSG: &str = "нажмите на включить для синхронизации панелей";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavChildren {
    /// The null marker.
    Leaf,
    Nodes(Vec<NavNode>),
    /// Children live in another script, named here.
    Deferred(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "NodeRepr", into = "NodeRepr")]
pub struct NavNode {
    pub label: String,
    pub link: String,
    pub children: NavChildren,
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum ChildrenRepr {
    Nodes(Vec<NavNode>),
    Deferred(String),
}

#[derive(Serialize, Deserialize)]
struct NodeRepr(String, String, Option<ChildrenRepr>);

impl From<NodeRepr> for NavNode {
    fn from(NodeRepr(label, link, children): NodeRepr) -> Self {
        let children = match children {
            None => NavChildren::Leaf,
            Some(ChildrenRepr::Nodes(nodes)) => NavChildren::Nodes(nodes),
            Some(ChildrenRepr::Deferred(name)) => NavChildren::Deferred(name),
        };
        Self {
            label,
            link,
            children,
        }
    }
}

impl From<NavNode> for NodeRepr {
    fn from(node: NavNode) -> Self {
        let children = match node.children {
            NavChildren::Leaf => None,
            NavChildren::Nodes(nodes) => Some(ChildrenRepr::Nodes(nodes)),
            NavChildren::Deferred(name) => Some(ChildrenRepr::Deferred(name)),
        };
        NodeRepr(node.label, node.link, children)
    }
}

impl NavNode {
    pub fn leaf(label: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            link: link.into(),
            children: NavChildren::Leaf,
        }
    }

    pub fn branch(label: impl Into<String>, link: impl Into<String>, nodes: Vec<NavNode>) -> Self {
        Self {
            label: label.into(),
            link: link.into(),
            children: NavChildren::Nodes(nodes),
        }
    }

    pub fn deferred(
        label: impl Into<String>,
        link: impl Into<String>,
        script: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            link: link.into(),
            children: NavChildren::Deferred(script.into()),
        }
    }

    pub fn child_nodes(&self) -> &[NavNode] {
        match &self.children {
            NavChildren::Nodes(nodes) => nodes,
            _ => &[],
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.children, NavChildren::Leaf)
    }

    fn validate_at(&self, parent: &str) -> DomainResult<()> {
        let path = if parent.is_empty() {
            self.label.clone()
        } else {
            format!("{parent} > {}", self.label)
        };
        let malformed = |message: &str| DomainError::MalformedNavEntry {
            path: path.clone(),
            message: message.to_string(),
        };

        if self.label.trim().is_empty() {
            return Err(malformed("empty label"));
        }
        match &self.children {
            NavChildren::Leaf => Ok(()),
            NavChildren::Deferred(name) if name.trim().is_empty() => {
                Err(malformed("empty deferred script name"))
            }
            NavChildren::Deferred(_) => Ok(()),
            NavChildren::Nodes(nodes) if nodes.is_empty() => {
                Err(malformed("empty children sequence, leaves use null"))
            }
            NavChildren::Nodes(nodes) => nodes.iter().try_for_each(|n| n.validate_at(&path)),
        }
    }

    fn to_termtree(&self) -> Tree<String> {
        let label = match &self.children {
            NavChildren::Deferred(script) => {
                format!("{} ({}) [{}]", self.label, self.link, script)
            }
            _ => format!("{} ({})", self.label, self.link),
        };
        Tree::new(label).with_leaves(self.child_nodes().iter().map(NavNode::to_termtree))
    }

    fn write_script(&self, out: &mut String, indent: usize) -> fmt::Result {
        let pad = " ".repeat(indent);
        write!(
            out,
            "{pad}[ {}, {}, ",
            quote_json(&self.label),
            quote_json(&self.link)
        )?;
        match &self.children {
            NavChildren::Leaf => write!(out, "null ]"),
            NavChildren::Deferred(name) => write!(out, "{} ]", quote_json(name)),
            NavChildren::Nodes(nodes) => {
                writeln!(out, "[")?;
                for (i, node) in nodes.iter().enumerate() {
                    if i > 0 {
                        writeln!(out, ",")?;
                    }
                    node.write_script(out, indent + 2)?;
                }
                write!(out, "\n{pad}] ]")
            }
        }
    }
}

/// The whole sidebar: entry points, the index script list and the two
/// sync-toggle messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavTree {
    pub roots: Vec<NavNode>,
    pub index: Vec<String>,
    pub sync_on_msg: String,
    pub sync_off_msg: String,
}

impl NavTree {
    pub fn new(roots: Vec<NavNode>, index: Vec<String>) -> Self {
        Self {
            roots,
            index,
            sync_on_msg: SYNC_ON_MSG.to_string(),
            sync_off_msg: SYNC_OFF_MSG.to_string(),
        }
    }

    /// Well-formedness: every children sequence is non-empty and made of
    /// well-formed entries, leaves carry the null marker, labels are set.
    #[instrument(level = "debug", skip(self))]
    pub fn validate(&self) -> DomainResult<()> {
        if self.roots.is_empty() {
            return Err(DomainError::MalformedNavEntry {
                path: "NAVTREE".to_string(),
                message: "no entries".to_string(),
            });
        }
        self.roots.iter().try_for_each(|n| n.validate_at(""))
    }

    /// Depth-first, pre-order walk yielding `(depth, node)`; roots are depth 0.
    pub fn iter(&self) -> NavIter<'_> {
        NavIter {
            stack: self.roots.iter().rev().map(|n| (0, n)).collect(),
        }
    }

    /// Number of levels; zero for an empty tree.
    pub fn depth(&self) -> usize {
        self.iter().map(|(d, _)| d + 1).max().unwrap_or(0)
    }

    pub fn leaf_links(&self) -> Vec<&str> {
        self.iter()
            .filter(|(_, n)| n.is_leaf())
            .map(|(_, n)| n.link.as_str())
            .collect()
    }

    pub fn find_by_link(&self, link: &str) -> Option<&NavNode> {
        self.iter().map(|(_, n)| n).find(|n| n.link == link)
    }

    pub fn to_termtree(&self) -> Vec<Tree<String>> {
        self.roots.iter().map(NavNode::to_termtree).collect()
    }

    /// Encode in the viewer's script format.
    pub fn to_script(&self) -> String {
        let mut out = String::from("var NAVTREE =\n[\n");
        for (i, node) in self.roots.iter().enumerate() {
            if i > 0 {
                out.push_str(",\n");
            }
            // writing into a String cannot fail
            let _ = node.write_script(&mut out, 2);
        }
        out.push_str("\n];\n\nvar NAVTREEINDEX =\n[\n");
        out.push_str(&self.index.iter().map(|s| quote_json(s)).join(",\n"));
        out.push_str("\n];\n\n");
        out.push_str(&format!(
            "var SYNCONMSG = {};\nvar SYNCOFFMSG = {};\n",
            quote_single(&self.sync_on_msg),
            quote_single(&self.sync_off_msg)
        ));
        out
    }

    /// Decode the viewer's script format.
    ///
    /// `NAVTREE` is required; a missing index defaults to empty and missing
    /// messages default to [`SYNC_ON_MSG`] / [`SYNC_OFF_MSG`].
    #[instrument(level = "debug", skip(script))]
    pub fn from_script(script: &str) -> DomainResult<Self> {
        let comments = regex(r"(?s)/\*.*?\*/")?;
        let heads = regex(r"\bvar\s+([A-Za-z_]\w*)\s*=")?;

        let script = comments.replace_all(script, "");
        // (head start, value start, name); a value runs up to the next head,
        // so string values must not contain `var NAME =` themselves
        let assignments: Vec<(usize, usize, &str)> = heads
            .captures_iter(&script)
            .filter_map(|caps| {
                let head = caps.get(0)?;
                Some((head.start(), head.end(), caps.get(1)?.as_str()))
            })
            .collect();

        let mut roots = None;
        let mut tree = NavTree::new(Vec::new(), Vec::new());

        for (i, &(_, value_start, name)) in assignments.iter().enumerate() {
            let value_end = assignments
                .get(i + 1)
                .map_or(script.len(), |&(next_head, _, _)| next_head);
            let value = script[value_start..value_end].trim();
            let value = value.strip_suffix(';').unwrap_or(value).trim_end();
            debug!(name, "navigation script assignment");
            match name {
                "NAVTREE" => roots = Some(parse_json::<Vec<NavNode>>(name, value)?),
                "NAVTREEINDEX" => tree.index = parse_json(name, value)?,
                "SYNCONMSG" => tree.sync_on_msg = unquote_single(name, value)?,
                "SYNCOFFMSG" => tree.sync_off_msg = unquote_single(name, value)?,
                _ => {}
            }
        }

        tree.roots = roots.ok_or_else(|| DomainError::MalformedNavScript {
            message: "NAVTREE is not defined".to_string(),
        })?;
        Ok(tree)
    }

    /// Sidebar of the Polynomial Calculator documentation.
    pub fn project() -> Self {
        let readme = "md__r_e_a_d_m_e.html";
        let section = |n: u32| format!("{readme}#autotoc_md{n}");
        let toc = |entries: &[(&str, u32)]| {
            entries
                .iter()
                .map(|&(label, n)| NavNode::leaf(label, section(n)))
                .collect::<Vec<_>>()
        };

        let readme_node = NavNode::branch(
            "README",
            readme,
            vec![
                NavNode::branch(
                    "Polynomial_calc",
                    section(0),
                    toc(&[
                        ("Getting started", 1),
                        ("Add your files", 2),
                        ("Integrate with your tools", 3),
                        ("Collaborate with your team", 4),
                        ("Test and Deploy", 5),
                    ]),
                ),
                NavNode::branch(
                    "Editing this README",
                    section(6),
                    toc(&[
                        ("Suggestions for a good README", 7),
                        ("Name", 8),
                        ("Description", 9),
                        ("Badges", 10),
                        ("Visuals", 11),
                        ("Installation", 12),
                        ("Usage", 13),
                        ("Support", 14),
                        ("Roadmap", 15),
                        ("Contributing", 16),
                        ("Authors and acknowledgment", 17),
                        ("License", 18),
                        ("Project status", 19),
                    ]),
                ),
                NavNode::leaf(
                    "If you have run out of energy or time for your project, put a note at the top of the README saying th...",
                    section(20),
                ),
                NavNode::leaf("Polynomial-calc-", section(21)),
            ],
        );

        let classes = NavNode::branch(
            "Классы",
            "annotated.html",
            vec![
                NavNode::deferred("Классы", "annotated.html", "annotated_dup"),
                NavNode::leaf("Алфавитный указатель классов", "classes.html"),
                NavNode::branch(
                    "Члены классов",
                    "functions.html",
                    vec![
                        NavNode::leaf("Указатель", "functions.html"),
                        NavNode::leaf("Функции", "functions_func.html"),
                        NavNode::leaf("Переменные", "functions_vars.html"),
                        NavNode::leaf("Относящиеся к классу:", "functions_rela.html"),
                    ],
                ),
            ],
        );

        let files = NavNode::branch(
            "Файлы",
            "files.html",
            vec![
                NavNode::deferred("Файлы", "files.html", "files_dup"),
                NavNode::branch(
                    "Список членов всех файлов",
                    "globals.html",
                    vec![
                        NavNode::leaf("Указатель", "globals.html"),
                        NavNode::leaf("Функции", "globals_func.html"),
                        NavNode::leaf("Определения типов", "globals_type.html"),
                    ],
                ),
            ],
        );

        NavTree::new(
            vec![NavNode::branch(
                "Polynomial Calculator",
                "index.html",
                vec![readme_node, classes, files],
            )],
            vec!["annotated.html".to_string()],
        )
    }
}

pub struct NavIter<'a> {
    stack: Vec<(usize, &'a NavNode)>,
}

impl<'a> Iterator for NavIter<'a> {
    type Item = (usize, &'a NavNode);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, node) = self.stack.pop()?;
        // reverse so the leftmost child is visited first
        for child in node.child_nodes().iter().rev() {
            self.stack.push((depth + 1, child));
        }
        Some((depth, node))
    }
}

fn regex(pattern: &str) -> DomainResult<Regex> {
    Regex::new(pattern).map_err(|e| DomainError::MalformedNavScript {
        message: format!("pattern {pattern}: {e}"),
    })
}

fn parse_json<T: for<'de> Deserialize<'de>>(name: &str, value: &str) -> DomainResult<T> {
    serde_json::from_str(value).map_err(|e| DomainError::MalformedNavScript {
        message: format!("{name}: {e}"),
    })
}

fn quote_json(s: &str) -> String {
    serde_json::Value::String(s.to_string()).to_string()
}

fn quote_single(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            c => out.push(c),
        }
    }
    out.push('\'');
    out
}

fn unquote_single(name: &str, value: &str) -> DomainResult<String> {
    let inner = value
        .strip_prefix('\'')
        .and_then(|v| v.strip_suffix('\''))
        .ok_or_else(|| DomainError::MalformedNavScript {
            message: format!("{name}: expected a single-quoted string"),
        })?;

    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some('n') => out.push('\n'),
                Some('r') => out.push('\r'),
                Some(escaped) => out.push(escaped),
                None => {}
            }
        } else {
            out.push(c);
        }
    }
    Ok(out)
}
