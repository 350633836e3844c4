use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while turning markdown into HTML.
///
/// Any of these aborts the whole document; there is no partial output.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MarkdownError {
    /// Malformed node tree: missing value, tag or children.
    #[error("invalid HTML node: {0}")]
    Structure(String),

    /// Unbalanced inline delimiter or an impossible link/image split.
    #[error("invalid markdown: {0}")]
    Markup(String),

    #[error("invalid heading syntax: {0}")]
    HeadingSyntax(String),

    #[error("invalid heading structure: {0}")]
    HeadingFormat(String),

    #[error("invalid code block: {0}")]
    CodeBlock(String),

    #[error("invalid quote block: {0}")]
    QuoteBlock(String),

    #[error("invalid list block: {0}")]
    ListBlock(String),

    #[error("invalid paragraph block: {0}")]
    Paragraph(String),

    #[error("invalid markdown: missing h1 header")]
    MissingTitle,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Errors from the site glue around the markdown core.
#[derive(Debug, Error)]
pub enum SiteError {
    #[error("The {0} directory already exists. Remove it and try again.")]
    OutputExists(PathBuf),

    #[error("Missing file or directory: {0}")]
    MissingPath(PathBuf),

    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{path}: {source}")]
    Markdown {
        path: PathBuf,
        source: MarkdownError,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl SiteError {
    /// Adapter for `map_err` that tags an I/O error with the path involved.
    pub fn io(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| SiteError::Io { path, source }
    }
}
