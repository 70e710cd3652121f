//! # textools
//!
//! LaTeX report fragment writer: appends figures, tables and section
//! headings to `.tex` files from tabular data.
//!
//! ## Features
//!
//! - **Tables**: in-process tabular datasets rendered to `table`/`tabular`
//!   markup with header overrides, row index, captions, labels, booktabs
//!   rules, sideways rotation and per-column number formats
//! - **Figures**: `figure`/`sidewaysfigure` blocks around
//!   `\includegraphics` with caption/label plumbing
//! - **Headings**: `\chapter` through `\paragraph`, plus `\clearpage`
//! - **Numbers**: fixed and scientific notation with significant digits,
//!   siunitx `\num{...}` output for math-mode rendering
//! - **Escaping**: the baseline LaTeX special-character set, applied to
//!   text cells and headings
//! - **File plumbing**: scoped file acquisition and idempotent directory
//!   creation
//! - **Data loading** (feature `data-loading`): build tables from CSV
//!   files or JSON records
//!
//! ## Usage Examples
//!
//! ### Number formatting
//!
//! ```rust
//! use textools::{fixed, scientific};
//!
//! assert_eq!(fixed(3.14159, 3).unwrap(), "3.14");
//! assert_eq!(scientific(12345.0, 3, true).unwrap(), "\\num{1.23e+04}");
//! assert_eq!(scientific(12345.0, 3, false).unwrap(), "1.23e+04");
//! ```
//!
//! ### Table emission
//!
//! ```rust
//! use textools::{append_table, Table, TableOptions};
//!
//! let mut table = Table::new(vec!["Parameter".into(), "Value".into()]);
//! table.push_row(vec!["Depth".into(), 12.5.into()]).unwrap();
//! table.push_row(vec!["Diameter".into(), 50.0.into()]).unwrap();
//!
//! let mut out = Vec::new();
//! append_table(&mut out, &table, &TableOptions::default()).unwrap();
//! let tex = String::from_utf8(out).unwrap();
//! assert!(tex.contains("\\begin{tabular}{lr}"));
//! assert!(tex.contains("Depth & 12.5 \\\\"));
//! ```
//!
//! ### Report assembly
//!
//! ```rust
//! use textools::{append_figure, append_section_heading, FigureOptions, HeadingOptions};
//!
//! let mut out = Vec::new();
//! append_section_heading(&mut out, "Consolidation curve", &HeadingOptions::default()).unwrap();
//! append_figure(&mut out, "./figs/consolidation_curve.png", &FigureOptions::default()).unwrap();
//!
//! let tex = String::from_utf8(out).unwrap();
//! assert!(tex.starts_with("\\section{Consolidation curve}"));
//! assert!(tex.contains("\\includegraphics[width=\\linewidth]{./figs/consolidation_curve.png}"));
//! ```

/// Core formatting modules
pub mod core;

/// Data layer - static mappings and shared defaults
pub mod data;

/// Feature modules - fragment emitters
pub mod features;

/// Utility modules
pub mod utils;

// Re-export core formatting functions
pub use core::numfmt::{fixed, scientific, NumberFormat};

// Re-export feature modules
pub use features::figures::{append_figure, render_figure, FigureOptions};
pub use features::headings::{
    append_chapter_title, append_heading, append_newpage, append_section_heading, HeadingLevel,
    HeadingOptions,
};
pub use features::refs::{label_slug, Label, LabelKind};
pub use features::tables::{
    append_table, render_table, render_tabular, Alignment, Cell, Table, TableOptions,
};

// Re-export data helpers
pub use data::escape::escape_latex;

// Re-export utilities
pub use utils::error::{EmitError, EmitResult};
pub use utils::files::{create_dirs, with_file, FileMode};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fragments_accumulate_in_order() {
        let mut out = Vec::new();

        append_chapter_title(&mut out, "Sample \"Clay 3\"", &HeadingOptions::default()).unwrap();
        append_section_heading(&mut out, "Overview", &HeadingOptions::default()).unwrap();

        let mut table = Table::new(vec!["Parameter".into(), "Value".into()]);
        table.push_row(vec!["Depth".into(), 12.5.into()]).unwrap();
        append_table(&mut out, &table, &TableOptions::default()).unwrap();
        append_newpage(&mut out).unwrap();

        let tex = String::from_utf8(out).unwrap();
        let chapter = tex.find("\\chapter{Sample \"Clay 3\"}").unwrap();
        let section = tex.find("\\section{Overview}").unwrap();
        let tabular = tex.find("\\begin{tabular}").unwrap();
        let newpage = tex.find("\\clearpage").unwrap();
        assert!(chapter < section && section < tabular && tabular < newpage);
    }

    #[test]
    fn test_append_table_is_idempotent_formatting() {
        let mut table = Table::new(vec!["A".into(), "B".into()]);
        table.push_row(vec![1.into(), 2.into()]).unwrap();

        let mut first = Vec::new();
        let mut second = Vec::new();
        append_table(&mut first, &table, &TableOptions::default()).unwrap();
        append_table(&mut second, &table, &TableOptions::default()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_labels_compose_with_emitters() {
        let label = Label::from_text("Sample B 12", LabelKind::Figure);
        let options = FigureOptions {
            label: Some(label.id.clone()),
            ..Default::default()
        };
        let out = render_figure("b12.png", &options);
        assert!(out.contains("\\label{fig:sample_b_12}"));
    }

    #[test]
    fn test_escape_round() {
        assert_eq!(escape_latex("a_b & 50%"), "a\\_b \\& 50\\%");
    }
}
