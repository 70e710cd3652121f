//! Label handling for cross-referencing
//!
//! Figures, tables and headings emit `\label{...}` commands with the
//! conventional kind prefixes (`fig:`, `tab:`, ...). This module holds the
//! kind mapping and a sanitizer for building label identifiers out of free
//! text such as sample names.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Characters that do not belong in a label identifier
    static ref NON_LABEL: Regex = Regex::new(r"[^a-z0-9:_\-]+").unwrap();
}

/// Kind of labeled element, carrying its conventional prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LabelKind {
    Figure,
    Table,
    Section,
    Chapter,
}

impl LabelKind {
    /// The prefix conventionally used for this kind
    pub fn prefix(&self) -> &'static str {
        match self {
            LabelKind::Figure => "fig:",
            LabelKind::Table => "tab:",
            LabelKind::Section => "sec:",
            LabelKind::Chapter => "ch:",
        }
    }
}

/// A label for cross-referencing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    /// Label identifier (without prefix)
    pub id: String,
    /// Kind of labeled element
    pub kind: LabelKind,
}

impl Label {
    pub fn new(id: impl Into<String>, kind: LabelKind) -> Self {
        Self {
            id: id.into(),
            kind,
        }
    }

    /// Build a label from free text, sanitizing it into an identifier
    pub fn from_text(text: &str, kind: LabelKind) -> Self {
        Self {
            id: label_slug(text),
            kind,
        }
    }

    /// The prefixed identifier as it appears inside `\label{...}`
    pub fn latex(&self) -> String {
        format!("{}{}", self.kind.prefix(), self.id)
    }
}

/// Prefix a raw label identifier with the given kind
///
/// Identifiers are used as supplied; sanitize with [`label_slug`] first
/// when the text comes from display strings.
pub fn prefixed(kind: LabelKind, id: &str) -> String {
    format!("{}{}", kind.prefix(), id)
}

/// Sanitize free text into a label-safe identifier
///
/// Lowercases the text and collapses runs of disallowed characters into a
/// single underscore. Leading and trailing underscores are stripped.
pub fn label_slug(text: &str) -> String {
    let lowered = text.to_lowercase();
    let replaced = NON_LABEL.replace_all(&lowered, "_");
    replaced.trim_matches('_').to_string()
}
