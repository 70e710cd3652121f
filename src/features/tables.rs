//! Table emission
//!
//! An in-process table model (ordered rows of mixed numeric/text cells plus
//! ordered column labels) rendered to `table`/`tabular` markup. Rendering
//! is deterministic: identical table and options produce byte-identical
//! output, and every fragment is rendered in full before a single write so
//! a validation failure writes nothing.

use std::io::Write;

use indexmap::IndexMap;

use crate::core::numfmt::NumberFormat;
use crate::data::constants::{DEFAULT_PLACEMENT, FRAGMENT_SEPARATOR, SIDEWAYS_PLACEMENT};
use crate::data::escape::escape_latex;
use crate::features::refs::{prefixed, LabelKind};
use crate::utils::error::{EmitError, EmitResult};

/// Column alignment in the tabular specification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

impl Alignment {
    /// Convert to LaTeX column specification character
    pub fn to_char(&self) -> char {
        match self {
            Alignment::Left => 'l',
            Alignment::Center => 'c',
            Alignment::Right => 'r',
        }
    }
}

/// A single table cell
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "data-loading", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    Text(String),
    Int(i64),
    Float(f64),
    Empty,
}

impl Cell {
    /// Whether this cell renders as the table's `na_rep`
    pub fn is_na(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Float(x) => x.is_nan(),
            _ => false,
        }
    }

    /// Render the cell to LaTeX text
    ///
    /// `formatter` applies to `Float` cells only; `Int` cells always render
    /// as plain integers and `Text` cells pass through the escape layer
    /// when `escape` is set. `na_rep` is emitted verbatim.
    pub fn render(
        &self,
        escape: bool,
        na_rep: &str,
        formatter: Option<&NumberFormat>,
    ) -> EmitResult<String> {
        match self {
            Cell::Empty => Ok(na_rep.to_string()),
            Cell::Text(s) => Ok(if escape { escape_latex(s) } else { s.clone() }),
            Cell::Int(i) => Ok(i.to_string()),
            Cell::Float(x) => {
                if x.is_nan() {
                    return Ok(na_rep.to_string());
                }
                match formatter {
                    Some(fmt) => fmt.apply(*x),
                    None => Ok(x.to_string()),
                }
            }
        }
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::Text(s.to_string())
    }
}

impl From<String> for Cell {
    fn from(s: String) -> Self {
        Cell::Text(s)
    }
}

impl From<i64> for Cell {
    fn from(i: i64) -> Self {
        Cell::Int(i)
    }
}

impl From<i32> for Cell {
    fn from(i: i32) -> Self {
        Cell::Int(i64::from(i))
    }
}

impl From<f64> for Cell {
    fn from(x: f64) -> Self {
        Cell::Float(x)
    }
}

impl From<f32> for Cell {
    fn from(x: f32) -> Self {
        Cell::Float(f64::from(x))
    }
}

/// An in-process tabular dataset
///
/// Rows are kept rectangular: every pushed row must have exactly as many
/// cells as there are column labels.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<Cell>>,
    row_labels: Vec<Option<String>>,
}

impl Table {
    /// Create an empty table with the given ordered column labels
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            row_labels: Vec::new(),
        }
    }

    pub fn num_cols(&self) -> usize {
        self.columns.len()
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The ordered column labels
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// The table body
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// The label recorded for a row, if any
    pub fn row_label(&self, idx: usize) -> Option<&str> {
        self.row_labels.get(idx).and_then(|l| l.as_deref())
    }

    fn check_width(&self, found: usize) -> EmitResult<()> {
        if found != self.columns.len() {
            return Err(EmitError::shape("row", self.columns.len(), found));
        }
        Ok(())
    }

    /// Append a row
    ///
    /// # Errors
    ///
    /// Fails with [`EmitError::ShapeMismatch`] when the cell count differs
    /// from the column count.
    pub fn push_row(&mut self, cells: Vec<Cell>) -> EmitResult<()> {
        self.check_width(cells.len())?;
        self.rows.push(cells);
        self.row_labels.push(None);
        Ok(())
    }

    /// Append a row with a label used by the index column
    pub fn push_labeled_row(
        &mut self,
        label: impl Into<String>,
        cells: Vec<Cell>,
    ) -> EmitResult<()> {
        self.check_width(cells.len())?;
        self.rows.push(cells);
        self.row_labels.push(Some(label.into()));
        Ok(())
    }
}

/// Options for table emission
///
/// All fields default to the plain form: no index column, escaping on,
/// booktabs rules, `\small` text, `htp` placement.
#[derive(Debug, Clone)]
pub struct TableOptions {
    /// Include row labels (or row ordinals) as a leading column
    pub index: bool,
    /// Override the table's column labels; length must match the data
    /// column count
    pub header: Option<Vec<String>>,
    /// Escape LaTeX special characters in text cells and headings
    pub escape: bool,
    /// Replacement text for `Empty` and NaN cells, emitted verbatim
    pub na_rep: String,
    /// Emit `\small` before the tabular block
    pub small: bool,
    /// Rotate the table via `turn`/`minipage` wrappers
    pub sideways: bool,
    /// Emit `\centering`
    pub centering: bool,
    /// Float placement specifier
    pub placement: String,
    /// Caption text, emitted verbatim (may contain LaTeX)
    pub caption: Option<String>,
    /// Typeset the caption above the tabular block
    pub caption_above: bool,
    /// Label identifier, emitted with a `tab:` prefix
    pub label: Option<String>,
    /// Wrap the tabular block in a `threeparttable`
    pub threeparttable: bool,
    /// Footnotes typeset below the table; a non-empty value forces
    /// `threeparttable` and `caption_above` on
    pub tablenotes: String,
    /// Use `\toprule`/`\midrule`/`\bottomrule` instead of `\hline`
    pub booktabs: bool,
    /// Explicit tabular column specification; inferred when absent
    pub column_format: Option<String>,
    /// Per-column number formats, keyed by data column label
    pub formatters: IndexMap<String, NumberFormat>,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            index: false,
            header: None,
            escape: true,
            na_rep: String::new(),
            small: true,
            sideways: false,
            centering: false,
            placement: DEFAULT_PLACEMENT.to_string(),
            caption: None,
            caption_above: true,
            label: None,
            threeparttable: false,
            tablenotes: String::new(),
            booktabs: true,
            column_format: None,
            formatters: IndexMap::new(),
        }
    }
}

/// Right-align columns whose cells are all numeric (or missing)
fn infer_alignments(table: &Table) -> Vec<Alignment> {
    (0..table.num_cols())
        .map(|col| {
            let mut saw_number = false;
            for row in table.rows() {
                match &row[col] {
                    Cell::Text(_) => return Alignment::Left,
                    Cell::Int(_) | Cell::Float(_) => saw_number = true,
                    Cell::Empty => {}
                }
            }
            if saw_number {
                Alignment::Right
            } else {
                Alignment::Left
            }
        })
        .collect()
}

fn column_spec(table: &Table, options: &TableOptions) -> String {
    if let Some(ref format) = options.column_format {
        return format.clone();
    }

    let mut spec = String::new();
    if options.index {
        spec.push('l');
    }
    for align in infer_alignments(table) {
        spec.push(align.to_char());
    }
    spec
}

/// Render the tabular block alone
///
/// # Errors
///
/// Fails with [`EmitError::ShapeMismatch`] when a header override's length
/// differs from the table's data column count, before anything is built.
pub fn render_tabular(table: &Table, options: &TableOptions) -> EmitResult<String> {
    if let Some(ref header) = options.header {
        if header.len() != table.num_cols() {
            return Err(EmitError::shape("header", table.num_cols(), header.len()));
        }
    }

    let header = options.header.as_deref().unwrap_or(table.columns());
    let (top, mid, bottom) = if options.booktabs {
        ("\\toprule", "\\midrule", "\\bottomrule")
    } else {
        ("\\hline", "\\hline", "\\hline")
    };

    let mut output = String::new();
    output.push_str(&format!(
        "\\begin{{tabular}}{{{}}}\n",
        column_spec(table, options)
    ));
    output.push_str(top);
    output.push('\n');

    // Heading row; the index column gets an empty heading
    let mut cells: Vec<String> = Vec::new();
    if options.index {
        cells.push(String::new());
    }
    for label in header {
        cells.push(if options.escape {
            escape_latex(label)
        } else {
            label.clone()
        });
    }
    output.push_str(&cells.join(" & "));
    output.push_str(" \\\\\n");
    output.push_str(mid);
    output.push('\n');

    for (idx, row) in table.rows().iter().enumerate() {
        let mut cells: Vec<String> = Vec::new();
        if options.index {
            let label = match table.row_label(idx) {
                Some(label) if options.escape => escape_latex(label),
                Some(label) => label.to_string(),
                None => idx.to_string(),
            };
            cells.push(label);
        }
        for (cell, column) in row.iter().zip(table.columns()) {
            let formatter = options.formatters.get(column);
            cells.push(cell.render(options.escape, &options.na_rep, formatter)?);
        }
        output.push_str(&cells.join(" & "));
        output.push_str(" \\\\\n");
    }

    output.push_str(bottom);
    output.push('\n');
    output.push_str("\\end{tabular}\n");
    Ok(output)
}

/// Render the complete table fragment
pub fn render_table(table: &Table, options: &TableOptions) -> EmitResult<String> {
    // Validates the header override before anything is assembled
    let tabular = render_tabular(table, options)?;

    let mut threeparttable = options.threeparttable;
    let mut caption_above = options.caption_above;
    if !options.tablenotes.is_empty() {
        threeparttable = true;
        caption_above = true;
    }

    let caption = options
        .caption
        .as_ref()
        .map(|c| format!("\\caption{{{}}}\n", c));
    let label = options
        .label
        .as_ref()
        .map(|l| format!("\\label{{{}}}\n", prefixed(LabelKind::Table, l)));

    let mut output = String::new();
    if options.sideways {
        output.push_str("\\begin{turn}{90}\n");
        output.push_str("\\begin{minipage}{0.9\\textheight}\n");
        output.push_str(&format!("\\begin{{table}}[{}]\n", SIDEWAYS_PLACEMENT));
    } else {
        output.push_str(&format!("\\begin{{table}}[{}]\n", options.placement));
    }
    if options.centering {
        output.push_str("\\centering\n");
    }
    if threeparttable {
        output.push_str("\\begin{threeparttable}\n");
    }
    if options.small {
        output.push_str("\\small\n");
    }

    if caption_above {
        if let Some(ref cap) = caption {
            output.push_str(cap);
        }
        if let Some(ref lab) = label {
            output.push_str(lab);
        }
    }

    output.push_str(&tabular);

    if !caption_above {
        if let Some(ref cap) = caption {
            output.push_str(cap);
        }
        if let Some(ref lab) = label {
            output.push_str(lab);
        }
    }

    if threeparttable {
        output.push_str("\\begin{tablenotes}\n");
        if !options.tablenotes.is_empty() {
            output.push_str(&options.tablenotes);
            output.push('\n');
        }
        output.push_str("\\end{tablenotes}\n");
        output.push_str("\\end{threeparttable}\n");
    }

    output.push_str("\\end{table}");
    if options.sideways {
        output.push('\n');
        output.push_str("\\end{minipage}\n");
        output.push_str("\\end{turn}");
    }
    output.push_str(FRAGMENT_SEPARATOR);
    Ok(output)
}

/// Append the LaTeX representation of `table` to `file`
///
/// The fragment is rendered in full before a single write, so a failed
/// call writes nothing. The file is never closed here.
pub fn append_table<W: Write>(
    file: &mut W,
    table: &Table,
    options: &TableOptions,
) -> EmitResult<()> {
    file.write_all(render_table(table, options)?.as_bytes())?;
    Ok(())
}
