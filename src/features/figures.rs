//! Figure block emission
//!
//! Writes `figure`/`sidewaysfigure` environments around an
//! `\includegraphics` command. The sideways form expects the `rotating`
//! LaTeX package in the document preamble.

use std::io::Write;

use crate::data::constants::{DEFAULT_FIGURE_WIDTH, DEFAULT_PLACEMENT, FRAGMENT_SEPARATOR};
use crate::features::refs::{prefixed, LabelKind};
use crate::utils::error::EmitResult;

/// Options for figure emission
#[derive(Debug, Clone)]
pub struct FigureOptions {
    /// Use a `sidewaysfigure` environment
    pub sideways: bool,
    /// Caption text, emitted verbatim (may contain LaTeX)
    pub caption: Option<String>,
    /// Label identifier, emitted with a `fig:` prefix
    pub label: Option<String>,
    /// Float placement specifier
    pub placement: String,
    /// Width argument passed to `\includegraphics`
    pub width: String,
    /// Additional arguments appended to the `\includegraphics` options
    pub extra_args: String,
}

impl Default for FigureOptions {
    fn default() -> Self {
        Self {
            sideways: false,
            caption: None,
            label: None,
            placement: DEFAULT_PLACEMENT.to_string(),
            width: DEFAULT_FIGURE_WIDTH.to_string(),
            extra_args: String::new(),
        }
    }
}

/// Render a figure block as a fragment string
pub fn render_figure(figfilepath: &str, options: &FigureOptions) -> String {
    let env = if options.sideways {
        "sidewaysfigure"
    } else {
        "figure"
    };

    let mut args = format!("width={}", options.width);
    if !options.extra_args.is_empty() {
        args.push(',');
        args.push_str(&options.extra_args);
    }

    let mut output = String::new();
    output.push_str(&format!("\\begin{{{}}}[{}]\n", env, options.placement));
    output.push_str("    \\centering\n");
    output.push_str(&format!(
        "    \\includegraphics[{}]{{{}}}\n",
        args, figfilepath
    ));

    if let Some(ref caption) = options.caption {
        output.push_str(&format!("    \\caption{{{}}}\n", caption));
    }
    if let Some(ref label) = options.label {
        output.push_str(&format!(
            "    \\label{{{}}}\n",
            prefixed(LabelKind::Figure, label)
        ));
    }

    output.push_str(&format!("\\end{{{}}}", env));
    output.push_str(FRAGMENT_SEPARATOR);
    output
}

/// Append a figure block referencing `figfilepath`
///
/// The fragment is rendered in full before a single write.
pub fn append_figure<W: Write>(
    file: &mut W,
    figfilepath: &str,
    options: &FigureOptions,
) -> EmitResult<()> {
    file.write_all(render_figure(figfilepath, options).as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_figure() {
        let out = render_figure("./figs/curve.png", &FigureOptions::default());
        assert_eq!(
            out,
            "\\begin{figure}[htp]\n    \\centering\n    \\includegraphics[width=\\linewidth]{./figs/curve.png}\n\\end{figure}\n\n"
        );
    }

    #[test]
    fn test_figure_with_caption_and_label() {
        let options = FigureOptions {
            caption: Some("Consolidation curve".to_string()),
            label: Some("curve".to_string()),
            ..Default::default()
        };
        let out = render_figure("curve.png", &options);
        assert!(out.contains("    \\caption{Consolidation curve}\n"));
        assert!(out.contains("    \\label{fig:curve}\n"));
    }

    #[test]
    fn test_sideways_figure() {
        let options = FigureOptions {
            sideways: true,
            ..Default::default()
        };
        let out = render_figure("wide.png", &options);
        assert!(out.starts_with("\\begin{sidewaysfigure}[htp]\n"));
        assert!(out.contains("\\end{sidewaysfigure}\n\n"));
    }

    #[test]
    fn test_extra_args_and_placement() {
        let options = FigureOptions {
            placement: "hp!".to_string(),
            width: "0.8\\textwidth".to_string(),
            extra_args: "angle=90".to_string(),
            ..Default::default()
        };
        let out = render_figure("rot.png", &options);
        assert!(out.starts_with("\\begin{figure}[hp!]\n"));
        assert!(out.contains("\\includegraphics[width=0.8\\textwidth,angle=90]{rot.png}"));
    }

    #[test]
    fn test_append_writes_once() {
        let mut out = Vec::new();
        append_figure(&mut out, "a.png", &FigureOptions::default()).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.ends_with("\n\n"));
    }
}
