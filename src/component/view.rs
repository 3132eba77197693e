//! Framework-neutral view tree produced by component renders.
//!
//! The tree only describes *what* to show. The terminal front end maps it to
//! ratatui widgets, headless mode prints it as text or JSON.

use serde::Serialize;
use std::fmt;

/// What pressing a button asks the shell to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Increment,
    Exit,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Node {
    Container {
        class: Option<String>,
        children: Vec<Node>,
    },
    Heading {
        level: u8,
        text: String,
    },
    Button {
        label: String,
        action: Action,
    },
}

impl Node {
    pub fn container(class: Option<&str>, children: Vec<Node>) -> Self {
        Self::Container {
            class: class.map(str::to_string),
            children,
        }
    }

    pub fn heading(level: u8, text: impl Into<String>) -> Self {
        Self::Heading {
            level,
            text: text.into(),
        }
    }

    pub fn button(label: impl Into<String>, action: Action) -> Self {
        Self::Button {
            label: label.into(),
            action,
        }
    }

    fn collect<'a>(&'a self, out: &mut Vec<&'a Node>) {
        out.push(self);
        if let Node::Container { children, .. } = self {
            for child in children {
                child.collect(out);
            }
        }
    }
}

/// Borrowed view of one button in the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonView<'a> {
    pub label: &'a str,
    pub action: Action,
}

/// Result of a single render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct View {
    root: Node,
}

impl View {
    pub fn new(root: Node) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    /// All nodes in document order (depth first, parents before children).
    pub fn nodes(&self) -> Vec<&Node> {
        let mut out = Vec::new();
        self.root.collect(&mut out);
        out
    }

    /// `(level, text)` for every heading in document order.
    pub fn headings(&self) -> Vec<(u8, &str)> {
        self.nodes()
            .into_iter()
            .filter_map(|node| match node {
                Node::Heading { level, text } => Some((*level, text.as_str())),
                _ => None,
            })
            .collect()
    }

    /// Text of the first heading at `level`.
    pub fn heading_text(&self, level: u8) -> Option<&str> {
        self.headings()
            .into_iter()
            .find(|(l, _)| *l == level)
            .map(|(_, text)| text)
    }

    /// Buttons in document order. Focus indices in the shell refer to this order.
    pub fn buttons(&self) -> Vec<ButtonView<'_>> {
        self.nodes()
            .into_iter()
            .filter_map(|node| match node {
                Node::Button { label, action } => Some(ButtonView {
                    label: label.as_str(),
                    action: *action,
                }),
                _ => None,
            })
            .collect()
    }

    /// Plain text lines, one per leaf node.
    pub fn lines(&self) -> Vec<String> {
        self.nodes()
            .into_iter()
            .filter_map(|node| match node {
                Node::Container { .. } => None,
                Node::Heading { level, text } => {
                    let marker = "#".repeat(usize::from((*level).max(1)));
                    Some(format!("{marker} {text}"))
                }
                Node::Button { label, .. } => Some(format!("[ {label} ]")),
            })
            .collect()
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> View {
        View::new(Node::container(
            Some("greeting"),
            vec![
                Node::heading(1, "Title"),
                Node::container(
                    None,
                    vec![
                        Node::button("Go", Action::Exit),
                        Node::button("More", Action::Increment),
                    ],
                ),
                Node::heading(2, "Sub"),
            ],
        ))
    }

    #[test]
    fn nodes_are_depth_first() {
        let view = sample();
        let kinds: Vec<&str> = view
            .nodes()
            .into_iter()
            .map(|node| match node {
                Node::Container { .. } => "container",
                Node::Heading { .. } => "heading",
                Node::Button { .. } => "button",
            })
            .collect();
        assert_eq!(
            kinds,
            vec!["container", "heading", "container", "button", "button", "heading"]
        );
    }

    #[test]
    fn heading_text_finds_first_at_level() {
        let view = sample();
        assert_eq!(view.heading_text(1), Some("Title"));
        assert_eq!(view.heading_text(2), Some("Sub"));
        assert_eq!(view.heading_text(3), None);
    }

    #[test]
    fn display_prints_leaf_lines() {
        let text = sample().to_string();
        assert_eq!(text, "# Title\n[ Go ]\n[ More ]\n## Sub\n");
    }

    #[test]
    fn json_is_tagged_by_kind() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["kind"], "container");
        assert_eq!(json["class"], "greeting");
        assert_eq!(json["children"][0]["kind"], "heading");
        assert_eq!(json["children"][1]["children"][0]["action"], "exit");
        assert_eq!(json["children"][1]["children"][1]["action"], "increment");
    }
}
