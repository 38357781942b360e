//! Toolkit-neutral element tree produced by the renderers.
//!
//! A front end maps these onto real widgets; the CLI prints them as text.

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    /// Spinning cog inside a circle.
    Spinner,
    CheckCircle,
    AlertCircle,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextStyle {
    Normal,
    Muted,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Element {
    Heading(String),
    Text {
        content: String,
        style: TextStyle,
    },
    Icon(Icon),
    ProgressBar {
        value: u8,
        max: u8,
        label_top: String,
        label_bottom: String,
    },
    /// `content` is shown on hover or long-press over `trigger`.
    Tooltip {
        trigger: Box<Element>,
        content: String,
    },
    Button {
        id: &'static str,
        label: String,
        loading: bool,
        disabled: bool,
    },
    Link {
        href: String,
        new_tab: bool,
        child: Box<Element>,
    },
    Column(Vec<Element>),
    Row(Vec<Element>),
}

impl Element {
    pub fn text(content: impl Into<String>) -> Self {
        Element::Text {
            content: content.into(),
            style: TextStyle::Normal,
        }
    }

    pub fn muted(content: impl Into<String>) -> Self {
        Element::Text {
            content: content.into(),
            style: TextStyle::Muted,
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Element::Text {
            content: content.into(),
            style: TextStyle::Error,
        }
    }

    fn children(&self) -> Vec<&Element> {
        match self {
            Element::Column(children) | Element::Row(children) => children.iter().collect(),
            Element::Tooltip { trigger, .. } => vec![trigger.as_ref()],
            Element::Link { child, .. } => vec![child.as_ref()],
            _ => Vec::new(),
        }
    }

    /// Depth-first walk over this element and all descendants.
    pub fn walk(&self) -> Vec<&Element> {
        let mut out = vec![self];
        for child in self.children() {
            out.extend(child.walk());
        }
        out
    }

    pub fn contains_text(&self, needle: &str) -> bool {
        self.walk().into_iter().any(|e| match e {
            Element::Heading(s) => s.contains(needle),
            Element::Text { content, .. } => content.contains(needle),
            Element::Button { label, .. } => label.contains(needle),
            Element::ProgressBar {
                label_top,
                label_bottom,
                ..
            } => label_top.contains(needle) || label_bottom.contains(needle),
            Element::Tooltip { content, .. } => content.contains(needle),
            _ => false,
        })
    }

    pub fn find_button(&self, label: &str) -> Option<&Element> {
        self.walk()
            .into_iter()
            .find(|e| matches!(e, Element::Button { label: l, .. } if l == label))
    }

    pub fn links(&self) -> Vec<&str> {
        self.walk()
            .into_iter()
            .filter_map(|e| match e {
                Element::Link { href, .. } => Some(href.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn progress_bar(&self) -> Option<&Element> {
        self.walk()
            .into_iter()
            .find(|e| matches!(e, Element::ProgressBar { .. }))
    }

    fn write_indented(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        let pad = "  ".repeat(depth);
        match self {
            Element::Heading(s) => writeln!(f, "{pad}# {s}"),
            Element::Text { content, style } => match style {
                TextStyle::Normal => writeln!(f, "{pad}{content}"),
                TextStyle::Muted => writeln!(f, "{pad}  {content}"),
                TextStyle::Error => writeln!(f, "{pad}! {content}"),
            },
            Element::Icon(icon) => {
                let glyph = match icon {
                    Icon::Spinner => "[~]",
                    Icon::CheckCircle => "[ok]",
                    Icon::AlertCircle => "[!]",
                };
                writeln!(f, "{pad}{glyph}")
            }
            Element::ProgressBar {
                value,
                max,
                label_top,
                label_bottom,
            } => {
                const WIDTH: usize = 27;
                let filled = if *max == 0 {
                    0
                } else {
                    usize::from(*value.min(max)) * WIDTH / usize::from(*max)
                };
                writeln!(f, "{pad}{label_top}")?;
                writeln!(f, "{pad}[{}{}]", "#".repeat(filled), "-".repeat(WIDTH - filled))?;
                if !label_bottom.is_empty() {
                    writeln!(f, "{pad}{label_bottom}")?;
                }
                Ok(())
            }
            Element::Tooltip { trigger, content } => {
                trigger.write_indented(f, depth)?;
                writeln!(f, "{pad}  ({content})")
            }
            Element::Button {
                label,
                loading,
                disabled,
                ..
            } => {
                let suffix = if *loading {
                    " …"
                } else if *disabled {
                    " (disabled)"
                } else {
                    ""
                };
                writeln!(f, "{pad}[ {label} ]{suffix}")
            }
            Element::Link { href, child, .. } => {
                child.write_indented(f, depth)?;
                writeln!(f, "{pad}  -> {href}")
            }
            Element::Column(children) | Element::Row(children) => {
                for child in children {
                    child.write_indented(f, depth)?;
                }
                Ok(())
            }
        }
    }
}

/// Plain-text rendering, used by the CLI.
impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_indented(f, 0)
    }
}
