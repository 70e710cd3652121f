//! Dataset loading from CSV and JSON records
//!
//! Optional constructors that build a [`Table`] out of external tabular
//! data. CSV files need a header row; JSON input is an array of flat
//! objects. Fields are parsed as integer, then float, else kept as text;
//! empty fields and JSON nulls become [`Cell::Empty`].
//!
//! Gated behind the `data-loading` cargo feature.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde_json::Value;

use crate::features::tables::{Cell, Table};
use crate::utils::error::{EmitError, EmitResult};

fn parse_field(field: &str) -> Cell {
    let trimmed = field.trim();
    if trimmed.is_empty() {
        Cell::Empty
    } else if let Ok(i) = trimmed.parse::<i64>() {
        Cell::Int(i)
    } else if let Ok(x) = trimmed.parse::<f64>() {
        Cell::Float(x)
    } else {
        Cell::Text(trimmed.to_string())
    }
}

fn json_cell(value: Option<&Value>) -> Cell {
    match value {
        None | Some(Value::Null) => Cell::Empty,
        Some(Value::Number(n)) => match n.as_i64() {
            Some(i) => Cell::Int(i),
            None => Cell::Float(n.as_f64().unwrap_or(f64::NAN)),
        },
        Some(Value::String(s)) => Cell::Text(s.clone()),
        Some(Value::Bool(b)) => Cell::Text(b.to_string()),
        Some(other) => Cell::Text(other.to_string()),
    }
}

impl Table {
    /// Build a table from CSV data with a header row
    pub fn from_csv_reader<R: Read>(reader: R) -> EmitResult<Table> {
        let mut rdr = csv::Reader::from_reader(reader);
        let columns = rdr
            .headers()
            .map_err(|e| EmitError::invalid(format!("CSV header: {}", e)))?
            .iter()
            .map(str::to_string)
            .collect();

        let mut table = Table::new(columns);
        for record in rdr.records() {
            let record = record.map_err(|e| EmitError::invalid(format!("CSV record: {}", e)))?;
            table.push_row(record.iter().map(parse_field).collect())?;
        }
        Ok(table)
    }

    /// Build a table from a CSV file
    pub fn from_csv_path(path: impl AsRef<Path>) -> EmitResult<Table> {
        let file = File::open(path)?;
        Self::from_csv_reader(file)
    }

    /// Build a table from a JSON array of flat objects
    ///
    /// Columns are taken from the first record; keys missing from later
    /// records become empty cells.
    pub fn from_json_records(json: &str) -> EmitResult<Table> {
        let value: Value =
            serde_json::from_str(json).map_err(|e| EmitError::invalid(format!("JSON: {}", e)))?;
        let records = value
            .as_array()
            .ok_or_else(|| EmitError::invalid("JSON dataset must be an array of objects"))?;

        let first = match records.first() {
            Some(first) => first,
            None => return Ok(Table::new(Vec::new())),
        };
        let columns: Vec<String> = first
            .as_object()
            .ok_or_else(|| EmitError::invalid("JSON dataset records must be objects"))?
            .keys()
            .cloned()
            .collect();

        let mut table = Table::new(columns);
        for record in records {
            let object = record
                .as_object()
                .ok_or_else(|| EmitError::invalid("JSON dataset records must be objects"))?;
            let cells = table
                .columns()
                .iter()
                .map(|column| json_cell(object.get(column)))
                .collect();
            table.push_row(cells)?;
        }
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_from_csv_reader() {
        let data = "step,load,note\n1,50.5,first\n2,100.0,\n";
        let table = Table::from_csv_reader(data.as_bytes()).unwrap();

        assert_eq!(
            table.columns(),
            &["step".to_string(), "load".to_string(), "note".to_string()]
        );
        assert_eq!(table.num_rows(), 2);
        assert_eq!(
            table.rows()[0],
            vec![
                Cell::Int(1),
                Cell::Float(50.5),
                Cell::Text("first".to_string())
            ]
        );
        assert_eq!(table.rows()[1][2], Cell::Empty);
    }

    #[test]
    fn test_from_csv_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.csv");
        std::fs::write(&path, "a,b\n1,2\n").unwrap();

        let table = Table::from_csv_path(&path).unwrap();
        assert_eq!(table.num_rows(), 1);
        assert_eq!(table.rows()[0], vec![Cell::Int(1), Cell::Int(2)]);
    }

    #[test]
    fn test_from_json_records() {
        let json = r#"[
            {"load": 50.5, "step": 1},
            {"load": null, "step": 2}
        ]"#;
        let table = Table::from_json_records(json).unwrap();

        assert_eq!(table.columns(), &["load".to_string(), "step".to_string()]);
        assert_eq!(
            table.rows()[0],
            vec![Cell::Float(50.5), Cell::Int(1)]
        );
        assert_eq!(table.rows()[1][0], Cell::Empty);
    }

    #[test]
    fn test_from_json_rejects_non_array() {
        assert!(Table::from_json_records("{\"a\": 1}").is_err());
        assert!(Table::from_json_records("not json").is_err());
    }

    #[test]
    fn test_from_json_empty_array() {
        let table = Table::from_json_records("[]").unwrap();
        assert!(table.is_empty());
        assert_eq!(table.num_cols(), 0);
    }
}
