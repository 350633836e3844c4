use crate::error::MarkdownError;

/// Ordered `name="value"` pairs; serialized in insertion order.
pub type Attributes = Vec<(String, String)>;

/// A renderable HTML tree.
///
/// Values and attributes are emitted verbatim, without escaping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
    /// Text with an optional wrapping element. No tag means raw text.
    Leaf {
        tag: Option<String>,
        value: Option<String>,
        attributes: Attributes,
    },
    Parent {
        tag: String,
        children: Vec<HtmlNode>,
        attributes: Attributes,
    },
}

impl HtmlNode {
    /// Untagged text, emitted as-is.
    pub fn text(value: impl Into<String>) -> Self {
        HtmlNode::Leaf {
            tag: None,
            value: Some(value.into()),
            attributes: Vec::new(),
        }
    }

    pub fn leaf(tag: impl Into<String>, value: impl Into<String>) -> Self {
        HtmlNode::Leaf {
            tag: Some(tag.into()),
            value: Some(value.into()),
            attributes: Vec::new(),
        }
    }

    pub fn parent(tag: impl Into<String>, children: Vec<HtmlNode>) -> Self {
        HtmlNode::Parent {
            tag: tag.into(),
            children,
            attributes: Vec::new(),
        }
    }

    /// Append an attribute, keeping earlier ones first.
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        match &mut self {
            HtmlNode::Leaf { attributes, .. } | HtmlNode::Parent { attributes, .. } => {
                attributes.push((name.into(), value.into()));
            }
        }
        self
    }

    pub fn attributes(&self) -> &[(String, String)] {
        match self {
            HtmlNode::Leaf { attributes, .. } | HtmlNode::Parent { attributes, .. } => attributes,
        }
    }

    /// Render the attributes as ` name="value"` pairs, or `""` if there are none.
    pub fn attributes_to_string(&self) -> String {
        let mut out = String::new();
        push_attributes(self.attributes(), &mut out);
        out
    }

    /// Serialize this node and all of its descendants.
    pub fn render(&self) -> Result<String, MarkdownError> {
        let mut out = String::new();
        self.render_into(&mut out)?;
        Ok(out)
    }

    fn render_into(&self, out: &mut String) -> Result<(), MarkdownError> {
        match self {
            HtmlNode::Leaf {
                tag,
                value,
                attributes,
            } => {
                let value = value.as_deref().ok_or_else(|| {
                    MarkdownError::Structure("all leaf nodes require a value".to_string())
                })?;
                match tag.as_deref() {
                    None | Some("") => out.push_str(value),
                    Some(tag) => {
                        open_tag(tag, attributes, out);
                        out.push_str(value);
                        close_tag(tag, out);
                    }
                }
            }
            HtmlNode::Parent {
                tag,
                children,
                attributes,
            } => {
                if tag.is_empty() {
                    return Err(MarkdownError::Structure(
                        "parent node must have a tag".to_string(),
                    ));
                }
                if children.is_empty() {
                    return Err(MarkdownError::Structure(format!(
                        "<{tag}> parent node requires children"
                    )));
                }
                open_tag(tag, attributes, out);
                for child in children {
                    child.render_into(out)?;
                }
                close_tag(tag, out);
            }
        }
        Ok(())
    }
}

fn push_attributes(attributes: &[(String, String)], out: &mut String) {
    for (name, value) in attributes {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(value);
        out.push('"');
    }
}

fn open_tag(tag: &str, attributes: &[(String, String)], out: &mut String) {
    out.push('<');
    out.push_str(tag);
    push_attributes(attributes, out);
    out.push('>');
}

fn close_tag(tag: &str, out: &mut String) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}
