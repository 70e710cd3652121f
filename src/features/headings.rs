//! Sectioning command emission
//!
//! Writes `\chapter`, `\section` and friends with optional labels and
//! indentation, plus the `\clearpage` separator used between report parts.
//! Titles are raw LaTeX by default; set [`HeadingOptions::escape`] when the
//! title comes from untrusted display text.

use std::io::Write;

use crate::data::constants::FRAGMENT_SEPARATOR;
use crate::data::escape::escape_latex;
use crate::utils::error::EmitResult;

/// Sectioning depth, mapped to the matching LaTeX command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingLevel {
    Chapter,
    Section,
    Subsection,
    Subsubsection,
    Paragraph,
}

impl HeadingLevel {
    /// The LaTeX sectioning command for this level
    pub fn command(&self) -> &'static str {
        match self {
            HeadingLevel::Chapter => "\\chapter",
            HeadingLevel::Section => "\\section",
            HeadingLevel::Subsection => "\\subsection",
            HeadingLevel::Subsubsection => "\\subsubsection",
            HeadingLevel::Paragraph => "\\paragraph",
        }
    }
}

/// Options for heading emission
#[derive(Debug, Clone, Default)]
pub struct HeadingOptions {
    /// Label identifier, emitted verbatim inside `\label{...}`
    pub label: Option<String>,
    /// Spaces written before the sectioning command
    pub indent: usize,
    /// Escape LaTeX special characters in the title
    pub escape: bool,
}

/// Render a sectioning command as a fragment string
pub fn render_heading(title: &str, level: HeadingLevel, options: &HeadingOptions) -> String {
    let title = if options.escape {
        escape_latex(title)
    } else {
        title.to_string()
    };

    let mut output = String::new();
    output.push_str(&" ".repeat(options.indent));
    output.push_str(level.command());
    output.push_str(&format!("{{{}}}", title));

    if let Some(ref label) = options.label {
        output.push_str(&format!("\\label{{{}}}", label));
    }

    output.push_str(FRAGMENT_SEPARATOR);
    output
}

/// Append a sectioning command at the given level
pub fn append_heading<W: Write>(
    file: &mut W,
    title: &str,
    level: HeadingLevel,
    options: &HeadingOptions,
) -> EmitResult<()> {
    file.write_all(render_heading(title, level, options).as_bytes())?;
    Ok(())
}

/// Append a `\section` heading
pub fn append_section_heading<W: Write>(
    file: &mut W,
    secname: &str,
    options: &HeadingOptions,
) -> EmitResult<()> {
    append_heading(file, secname, HeadingLevel::Section, options)
}

/// Append a `\chapter` title
pub fn append_chapter_title<W: Write>(
    file: &mut W,
    title: &str,
    options: &HeadingOptions,
) -> EmitResult<()> {
    append_heading(file, title, HeadingLevel::Chapter, options)
}

/// Append a `\clearpage` page break
pub fn append_newpage<W: Write>(file: &mut W) -> EmitResult<()> {
    file.write_all(b"\\clearpage\n\n")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_section_plain() {
        let out = render_heading("Results", HeadingLevel::Section, &HeadingOptions::default());
        assert_eq!(out, "\\section{Results}\n\n");
    }

    #[test]
    fn test_section_with_label_and_indent() {
        let options = HeadingOptions {
            label: Some("sec:results".to_string()),
            indent: 4,
            ..Default::default()
        };
        let out = render_heading("Results", HeadingLevel::Section, &options);
        assert_eq!(out, "    \\section{Results}\\label{sec:results}\n\n");
    }

    #[test]
    fn test_chapter_title() {
        let mut out = Vec::new();
        append_chapter_title(&mut out, "Sample \"B 12\"", &HeadingOptions::default()).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "\\chapter{Sample \"B 12\"}\n\n"
        );
    }

    #[test]
    fn test_heading_levels() {
        assert_eq!(HeadingLevel::Chapter.command(), "\\chapter");
        assert_eq!(HeadingLevel::Subsection.command(), "\\subsection");
        assert_eq!(HeadingLevel::Paragraph.command(), "\\paragraph");
    }

    #[test]
    fn test_escaped_title() {
        let options = HeadingOptions {
            escape: true,
            ..Default::default()
        };
        let out = render_heading("Load & strain", HeadingLevel::Subsection, &options);
        assert_eq!(out, "\\subsection{Load \\& strain}\n\n");
    }

    #[test]
    fn test_newpage() {
        let mut out = Vec::new();
        append_newpage(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "\\clearpage\n\n");
    }
}
