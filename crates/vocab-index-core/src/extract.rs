//! Document text extraction.
//!
//! Orchestrates two pluggable collaborators: a [`ContainerParser`] that
//! opens a packaged document and lists its content items, and a
//! [`MarkupStripper`] that turns one markup item into plain text. The
//! extractor keeps only body-content items, strips each one, and
//! concatenates the results in the order the parser returned them.
//!
//! Extraction never panics. Parse and body failures come back as
//! [`ExtractError`] so the pipeline can skip the document and move on.
//! Metadata is best-effort and falls back to sentinel values.

use std::path::Path;

use crate::models::DocumentMetadata;

/// What a content item inside a container holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    /// Readable body content (XHTML/HTML chapters).
    Document,
    /// Table of contents or other navigation-only markup.
    Navigation,
    Style,
    Image,
    Font,
    Other,
}

/// One item of a parsed container.
#[derive(Debug, Clone)]
pub struct ContentItem {
    pub id: String,
    pub href: String,
    pub media_type: String,
    pub kind: ItemKind,
    pub data: Vec<u8>,
}

impl ContentItem {
    pub fn body_bytes(&self) -> &[u8] {
        &self.data
    }
}

/// Raw metadata fields as declared by the container, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawMetadata {
    pub title: Option<String>,
    pub author: Option<String>,
    pub date: Option<String>,
}

/// Output of a [`ContainerParser`].
#[derive(Debug, Clone, Default)]
pub struct ParsedContainer {
    pub items: Vec<ContentItem>,
    pub metadata: RawMetadata,
}

/// Extraction failure for a single document.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    /// The container could not be opened or is corrupt.
    #[error("failed to parse {path}: {reason}")]
    Parse { path: String, reason: String },
    /// A body item could not be decoded.
    #[error("failed to read item {item} of {path}: {reason}")]
    Body {
        path: String,
        item: String,
        reason: String,
    },
}

impl ExtractError {
    pub fn parse(path: &Path, reason: impl std::fmt::Display) -> Self {
        ExtractError::Parse {
            path: path.display().to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn path(&self) -> &str {
        match self {
            ExtractError::Parse { path, .. } | ExtractError::Body { path, .. } => path,
        }
    }
}

/// Opens a packaged document.
pub trait ContainerParser: Send + Sync {
    /// Parse `path`, returning its content items in container order.
    ///
    /// Metadata is filled best-effort; a missing or malformed metadata
    /// section must not cause an error.
    fn parse(&self, path: &Path) -> Result<ParsedContainer, ExtractError>;
}

/// Turns markup into the concatenation of its text nodes, in document order.
pub trait MarkupStripper: Send + Sync {
    fn strip(&self, markup: &str) -> String;
}

/// Plain text and metadata extracted from one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedDocument {
    pub text: String,
    pub metadata: DocumentMetadata,
    /// Number of body items that contributed text.
    pub items: usize,
}

/// Combines a container parser and a markup stripper.
pub struct DocumentExtractor {
    parser: Box<dyn ContainerParser>,
    stripper: Box<dyn MarkupStripper>,
}

impl DocumentExtractor {
    pub fn new(parser: Box<dyn ContainerParser>, stripper: Box<dyn MarkupStripper>) -> Self {
        Self { parser, stripper }
    }

    pub fn extract(&self, path: &Path) -> Result<ExtractedDocument, ExtractError> {
        let container = self.parser.parse(path)?;

        let mut text = String::new();
        let mut items = 0;
        for item in container
            .items
            .iter()
            .filter(|item| item.kind == ItemKind::Document)
        {
            let markup =
                std::str::from_utf8(item.body_bytes()).map_err(|e| ExtractError::Body {
                    path: path.display().to_string(),
                    item: item.href.clone(),
                    reason: e.to_string(),
                })?;
            text.push_str(&self.stripper.strip(markup));
            items += 1;
        }

        let RawMetadata {
            title,
            author,
            date,
        } = &container.metadata;
        let metadata =
            DocumentMetadata::from_raw(title.as_deref(), author.as_deref(), date.as_deref());

        Ok(ExtractedDocument {
            text,
            metadata,
            items,
        })
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! Fakes shared by the extractor and pipeline tests.

    use std::collections::HashMap;
    use std::path::{Path, PathBuf};

    use super::*;

    /// Serves canned containers by path; unknown paths fail to parse.
    #[derive(Default)]
    pub struct FakeParser {
        pub containers: HashMap<PathBuf, ParsedContainer>,
    }

    impl ContainerParser for FakeParser {
        fn parse(&self, path: &Path) -> Result<ParsedContainer, ExtractError> {
            self.containers
                .get(path)
                .cloned()
                .ok_or_else(|| ExtractError::parse(path, "not a container"))
        }
    }

    /// Treats markup as plain text.
    pub struct IdentityStripper;

    impl MarkupStripper for IdentityStripper {
        fn strip(&self, markup: &str) -> String {
            markup.to_string()
        }
    }

    pub fn item(href: &str, kind: ItemKind, body: &str) -> ContentItem {
        ContentItem {
            id: href.to_string(),
            href: href.to_string(),
            media_type: String::new(),
            kind,
            data: body.as_bytes().to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::testing::*;
    use super::*;
    use crate::models::{AUTHOR_NOT_FOUND, TITLE_NOT_FOUND};

    fn extractor_with(path: &str, container: ParsedContainer) -> DocumentExtractor {
        let mut parser = FakeParser::default();
        parser.containers.insert(PathBuf::from(path), container);
        DocumentExtractor::new(Box::new(parser), Box::new(IdentityStripper))
    }

    #[test]
    fn concatenates_document_items_in_order_without_separators() {
        let container = ParsedContainer {
            items: vec![
                item("nav.xhtml", ItemKind::Navigation, "Contents"),
                item("ch1.xhtml", ItemKind::Document, "The cat"),
                item("style.css", ItemKind::Style, "body {}"),
                item("ch2.xhtml", ItemKind::Document, " sat."),
                item("cover.jpg", ItemKind::Image, "\u{1}"),
            ],
            metadata: RawMetadata {
                title: Some("Cats".into()),
                author: Some("A. Writer".into()),
                date: Some("2001".into()),
            },
        };
        let doc = extractor_with("/books/a.epub", container)
            .extract(Path::new("/books/a.epub"))
            .unwrap();
        assert_eq!(doc.text, "The cat sat.");
        assert_eq!(doc.items, 2);
        assert_eq!(doc.metadata.title, "Cats");
        assert_eq!(doc.metadata.author, "A. Writer");
        assert_eq!(doc.metadata.date.as_deref(), Some("2001"));
    }

    #[test]
    fn missing_metadata_uses_sentinels() {
        let container = ParsedContainer {
            items: vec![item("ch1.xhtml", ItemKind::Document, "words")],
            metadata: RawMetadata::default(),
        };
        let doc = extractor_with("/b.epub", container)
            .extract(Path::new("/b.epub"))
            .unwrap();
        assert_eq!(doc.metadata.title, TITLE_NOT_FOUND);
        assert_eq!(doc.metadata.author, AUTHOR_NOT_FOUND);
        assert!(doc.metadata.date.is_none());
    }

    #[test]
    fn parse_failure_is_reported_with_path() {
        let extractor = extractor_with("/ok.epub", ParsedContainer::default());
        let err = extractor.extract(Path::new("/broken.epub")).unwrap_err();
        assert!(matches!(err, ExtractError::Parse { .. }));
        assert_eq!(err.path(), "/broken.epub");
    }

    #[test]
    fn invalid_utf8_body_is_a_failure() {
        let mut bad = item("ch1.xhtml", ItemKind::Document, "");
        bad.data = vec![0xff, 0xfe, 0x00];
        let container = ParsedContainer {
            items: vec![bad],
            metadata: RawMetadata::default(),
        };
        let err = extractor_with("/c.epub", container)
            .extract(Path::new("/c.epub"))
            .unwrap_err();
        assert!(matches!(err, ExtractError::Body { .. }));
    }
}
