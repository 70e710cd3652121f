//! Feature modules - fragment emitters
//!
//! This module contains the emitters for each fragment kind:
//! - Tables (tabular datasets with headers, index and formatters)
//! - Figures (`\includegraphics` blocks, sideways variants)
//! - Headings (sectioning commands, page breaks)
//! - Labels for cross-referencing
//! - Dataset loading from CSV/JSON (feature-gated)

pub mod figures;
pub mod headings;
pub mod refs;
pub mod tables;

#[cfg(feature = "data-loading")]
pub mod loading;

// Re-export commonly used types
pub use figures::{append_figure, render_figure, FigureOptions};
pub use headings::{
    append_chapter_title, append_heading, append_newpage, append_section_heading, render_heading,
    HeadingLevel, HeadingOptions,
};
pub use refs::{label_slug, prefixed, Label, LabelKind};
pub use tables::{append_table, render_table, render_tabular, Alignment, Cell, Table, TableOptions};
