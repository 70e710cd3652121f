//! LaTeX special-character escaping
//!
//! Text destined for LaTeX body content passes through a single static
//! table of replacements. The table covers the baseline set of characters
//! that break plain LaTeX text: `% _ & # $ { } ~ ^ \`.

use phf::phf_map;

/// Special character to LaTeX replacement mapping
pub static LATEX_ESCAPES: phf::Map<char, &'static str> = phf_map! {
    '\\' => "\\textbackslash{}",
    '&' => "\\&",
    '%' => "\\%",
    '$' => "\\$",
    '#' => "\\#",
    '_' => "\\_",
    '{' => "\\{",
    '}' => "\\}",
    '~' => "\\textasciitilde{}",
    '^' => "\\textasciicircum{}",
};

/// Escape special LaTeX characters in text
///
/// Characters are mapped one at a time, so replacements that themselves
/// contain braces are never re-escaped.
pub fn escape_latex(text: &str) -> String {
    let mut result = String::with_capacity(text.len());

    for ch in text.chars() {
        if let Some(rep) = LATEX_ESCAPES.get(&ch) {
            result.push_str(rep);
        } else {
            result.push(ch);
        }
    }

    result
}
