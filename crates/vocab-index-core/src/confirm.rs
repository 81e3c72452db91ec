//! Metadata confirmation hook.
//!
//! Before a catalog row is written, each extracted metadata field passes
//! through a [`MetadataConfirmer`], which may accept or override it. The
//! default [`PassThrough`] accepts everything; interactive front ends
//! supply their own implementation.

/// Metadata field offered for confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetadataField {
    Title,
    Author,
}

impl MetadataField {
    pub fn as_str(&self) -> &'static str {
        match self {
            MetadataField::Title => "title",
            MetadataField::Author => "author",
        }
    }
}

impl std::fmt::Display for MetadataField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

pub trait MetadataConfirmer: Send + Sync {
    /// Return the value to store for `field` of the document at `path`.
    fn confirm(&self, path: &str, field: MetadataField, extracted: &str) -> String;
}

/// Accepts every extracted value unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassThrough;

impl MetadataConfirmer for PassThrough {
    fn confirm(&self, _path: &str, _field: MetadataField, extracted: &str) -> String {
        extracted.to_string()
    }
}
