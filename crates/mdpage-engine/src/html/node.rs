use linked_hash_map::LinkedHashMap;

/// HTML attributes in insertion order.
pub type Attributes = LinkedHashMap<String, String>;

/// Elements rendered self-closing, without a value or closing tag.
pub const VOID_ELEMENTS: &[&str] = &["img", "br", "hr", "input", "meta", "link"];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    #[error("Malformed leaf: node requires a value")]
    MalformedLeaf,
    #[error("Malformed parent: node requires {missing}")]
    MalformedParent { missing: &'static str },
}

/// A node of the HTML tree built for one document.
///
/// Fields that are optional here are required for serialization. The
/// constructors always fill them in; a node assembled by hand with a missing
/// leaf value, parent tag or parent children fails in [`HtmlNode::to_html`].
/// `children: Some(vec![])` is valid and renders an empty element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
    /// A node with a value and no children.
    Leaf {
        /// `None` renders the value as raw text, without an element.
        tag: Option<String>,
        value: Option<String>,
        attrs: Attributes,
    },
    /// An element that owns its children.
    Parent {
        tag: Option<String>,
        children: Option<Vec<HtmlNode>>,
        attrs: Attributes,
    },
}

impl HtmlNode {
    /// Raw text, emitted verbatim.
    pub fn text(value: impl Into<String>) -> Self {
        HtmlNode::Leaf {
            tag: None,
            value: Some(value.into()),
            attrs: Attributes::new(),
        }
    }

    /// A leaf element such as `<b>value</b>`.
    pub fn leaf(tag: impl Into<String>, value: impl Into<String>) -> Self {
        HtmlNode::Leaf {
            tag: Some(tag.into()),
            value: Some(value.into()),
            attrs: Attributes::new(),
        }
    }

    pub fn parent(tag: impl Into<String>, children: Vec<HtmlNode>) -> Self {
        HtmlNode::Parent {
            tag: Some(tag.into()),
            children: Some(children),
            attrs: Attributes::new(),
        }
    }

    /// Appends an attribute, replacing any previous value for `name`.
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        match &mut self {
            HtmlNode::Leaf { attrs, .. } | HtmlNode::Parent { attrs, .. } => {
                attrs.insert(name.into(), value.into());
            }
        }
        self
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            HtmlNode::Leaf { tag, .. } | HtmlNode::Parent { tag, .. } => tag.as_deref(),
        }
    }

    /// The value of a leaf; always `None` for a parent.
    pub fn value(&self) -> Option<&str> {
        match self {
            HtmlNode::Leaf { value, .. } => value.as_deref(),
            HtmlNode::Parent { .. } => None,
        }
    }

    /// The children of a parent; always `None` for a leaf.
    pub fn children(&self) -> Option<&[HtmlNode]> {
        match self {
            HtmlNode::Leaf { .. } => None,
            HtmlNode::Parent { children, .. } => children.as_deref(),
        }
    }

    pub fn attrs(&self) -> &Attributes {
        match self {
            HtmlNode::Leaf { attrs, .. } | HtmlNode::Parent { attrs, .. } => attrs,
        }
    }

    /// Renders the attributes as ` name="value"` pairs in insertion order.
    ///
    /// Values are escaped for a double-quoted attribute context.
    pub fn attrs_to_html(&self) -> String {
        self.attrs()
            .iter()
            .map(|(name, value)| {
                format!(
                    " {name}=\"{}\"",
                    html_escape::encode_double_quoted_attribute(value)
                )
            })
            .collect()
    }

    /// Serializes the node and its descendants.
    ///
    /// # Errors
    /// [`RenderError::MalformedLeaf`] for a leaf without a value and
    /// [`RenderError::MalformedParent`] for a parent without a tag or
    /// children, anywhere in the tree.
    pub fn to_html(&self) -> Result<String, RenderError> {
        let mut out = String::new();
        self.write_html(&mut out)?;
        Ok(out)
    }

    fn write_html(&self, out: &mut String) -> Result<(), RenderError> {
        let attrs = self.attrs_to_html();
        match self {
            HtmlNode::Leaf { tag, value, .. } => {
                let value = value.as_deref().ok_or(RenderError::MalformedLeaf)?;
                match tag.as_deref() {
                    None => out.push_str(value),
                    Some(tag) if VOID_ELEMENTS.contains(&tag) => {
                        out.push_str(&format!("<{tag}{attrs} />"));
                    }
                    Some(tag) => out.push_str(&format!("<{tag}{attrs}>{value}</{tag}>")),
                }
            }
            HtmlNode::Parent { tag, children, .. } => {
                let tag = tag
                    .as_deref()
                    .ok_or(RenderError::MalformedParent { missing: "a tag" })?;
                let children = children
                    .as_deref()
                    .ok_or(RenderError::MalformedParent { missing: "children" })?;
                out.push_str(&format!("<{tag}{attrs}>"));
                for child in children {
                    child.write_html(out)?;
                }
                out.push_str(&format!("</{tag}>"));
            }
        }
        Ok(())
    }
}
