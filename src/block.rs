/// Kind of an inline text span. Links and images carry their URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpanKind {
    Plain,
    Bold,
    Italic,
    Code,
    Link { url: String },
    Image { url: String },
}

/// A typed run of inline text. For images `text` is the alt text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSpan {
    pub kind: SpanKind,
    pub text: String,
}

impl TextSpan {
    pub fn new(kind: SpanKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(SpanKind::Plain, text)
    }

    pub fn link(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self::new(SpanKind::Link { url: url.into() }, label)
    }

    pub fn image(alt: impl Into<String>, url: impl Into<String>) -> Self {
        Self::new(SpanKind::Image { url: url.into() }, alt)
    }

    /// Destination URL; `None` for everything but links and images.
    pub fn target(&self) -> Option<&str> {
        match &self.kind {
            SpanKind::Link { url } | SpanKind::Image { url } => Some(url.as_str()),
            _ => None,
        }
    }

    pub fn is_plain(&self) -> bool {
        self.kind == SpanKind::Plain
    }
}

/// Structural type of a markdown block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Paragraph,
    Heading(u8),
    Code,
    Quote,
    UnorderedList,
    OrderedList,
}

impl BlockKind {
    pub fn is_list(self) -> bool {
        matches!(self, BlockKind::UnorderedList | BlockKind::OrderedList)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spans_compare_all_fields() {
        assert_eq!(
            TextSpan::new(SpanKind::Bold, "text"),
            TextSpan::new(SpanKind::Bold, "text")
        );
        assert_ne!(
            TextSpan::new(SpanKind::Bold, "text"),
            TextSpan::new(SpanKind::Italic, "text")
        );
        assert_ne!(TextSpan::plain("a"), TextSpan::plain("b"));
    }

    #[test]
    fn target_only_on_links_and_images() {
        assert_eq!(TextSpan::link("Link text", "").target(), Some(""));
        assert_eq!(TextSpan::image("alt", "/a.png").target(), Some("/a.png"));
        assert_eq!(TextSpan::new(SpanKind::Bold, "x").target(), None);
        assert_eq!(TextSpan::plain("Link text").target(), None);
    }

    #[test]
    fn empty_target_differs_from_plain_text() {
        assert_ne!(TextSpan::link("Link text", ""), TextSpan::plain("Link text"));
        assert_ne!(
            TextSpan::link("Link text", "https://www.boot.dev"),
            TextSpan::link("Link text", "")
        );
        assert_ne!(TextSpan::link("x", "/u"), TextSpan::image("x", "/u"));
    }

    #[test]
    fn list_kinds() {
        assert!(BlockKind::OrderedList.is_list());
        assert!(BlockKind::UnorderedList.is_list());
        assert!(!BlockKind::Quote.is_list());
        assert!(!BlockKind::Heading(2).is_list());
    }
}
