//! Purpose: In-memory typed-cell sheet and its JSON conversion path.
//! Exports: `Cell`, `Sheet`.
//! Role: Collaborator surface; the tree core never learns spreadsheet formats.
//! Invariants: Rows match the column count; arity mismatch is a usage error.
//! Invariants: Conversion preserves column order and row order.
//! Invariants: Cells reach JSON only through the scalar-lifting adapters.
use rust_decimal::Decimal;

use crate::core::error::{Error, ErrorKind};
use crate::core::lift;
use crate::core::value::Value;

/// One extracted cell value. `Empty` converts to JSON `null`.
#[derive(Clone, Debug, PartialEq)]
pub enum Cell {
    Empty,
    Bool(bool),
    Int(i64),
    Float(f64),
    Decimal(Decimal),
    Text(String),
}

impl Cell {
    fn lift(&self) -> Result<Value, Error> {
        match self {
            Cell::Empty => Ok(lift::from_string(None)),
            Cell::Bool(value) => Ok(lift::from_bool(*value)),
            Cell::Int(value) => Ok(lift::from_i64(*value)),
            Cell::Float(value) => lift::from_f64(*value),
            Cell::Decimal(value) => Ok(lift::from_decimal(*value)),
            Cell::Text(value) => Ok(lift::from_string(Some(value.as_str()))),
        }
    }
}

/// A fully-populated sheet: named columns and rows of typed cells.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Sheet {
    columns: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl Sheet {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn push_row(&mut self, row: Vec<Cell>) -> Result<(), Error> {
        if row.len() != self.columns.len() {
            return Err(Error::new(ErrorKind::Usage).with_message(format!(
                "row has {} cells, sheet has {} columns",
                row.len(),
                self.columns.len()
            )));
        }
        self.rows.push(row);
        Ok(())
    }

    /// Assemble the sheet as a JSON value: one object per row, members in
    /// column order. Duplicate column names collapse last-wins, keeping the
    /// object key-unique. Fails if any cell cannot be lifted.
    pub fn to_value(&self) -> Result<Value, Error> {
        let mut rows = Vec::with_capacity(self.rows.len());
        for row in &self.rows {
            let mut object = Value::Object(Vec::with_capacity(self.columns.len()));
            for (column, cell) in self.columns.iter().zip(row) {
                object.insert(column.clone(), cell.lift()?)?;
            }
            rows.push(object);
        }
        Ok(Value::Array(rows))
    }

    /// Convert the sheet to canonical JSON text.
    pub fn convert_to_json(&self) -> Result<String, Error> {
        let value = self.to_value()?;
        tracing::debug!(
            rows = self.rows.len(),
            columns = self.columns.len(),
            "converted sheet to json"
        );
        Ok(value.render())
    }
}

#[cfg(test)]
mod tests {
    use super::{Cell, Sheet};
    use crate::core::error::ErrorKind;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn sample() -> Sheet {
        let mut sheet = Sheet::new(vec!["name".to_string(), "qty".to_string()]);
        sheet
            .push_row(vec![Cell::Text("bolt".to_string()), Cell::Int(12)])
            .expect("row");
        sheet
            .push_row(vec![Cell::Empty, Cell::Decimal(Decimal::from_str("1.50").expect("dec"))])
            .expect("row");
        sheet
    }

    #[test]
    fn converts_rows_to_object_array_in_column_order() {
        let json = sample().convert_to_json().expect("convert");
        assert_eq!(json, r#"[{"name":"bolt","qty":12},{"name":null,"qty":1.50}]"#);
    }

    #[test]
    fn arity_mismatch_is_a_usage_error() {
        let mut sheet = Sheet::new(vec!["only".to_string()]);
        let err = sheet.push_row(vec![]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Usage);
    }

    #[test]
    fn duplicate_columns_collapse_to_last_cell() {
        let mut sheet = Sheet::new(vec!["a".to_string(), "a".to_string()]);
        sheet.push_row(vec![Cell::Int(1), Cell::Int(2)]).expect("row");
        let value = sheet.to_value().expect("convert");
        let row = value.at(0).expect("row");
        assert_eq!(row.as_object().expect("object").len(), 1);
        assert_eq!(sheet.convert_to_json().expect("convert"), r#"[{"a":2}]"#);
    }

    #[test]
    fn empty_sheet_converts_to_empty_array() {
        let sheet = Sheet::new(vec!["a".to_string()]);
        assert_eq!(sheet.convert_to_json().expect("convert"), "[]");
    }

    #[test]
    fn non_finite_cell_aborts_conversion() {
        let mut sheet = Sheet::new(vec!["x".to_string()]);
        sheet.push_row(vec![Cell::Float(f64::NAN)]).expect("row");
        let err = sheet.convert_to_json().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnsupportedShape);
    }

    #[test]
    fn converted_output_round_trips_through_build() {
        use crate::core::value::Value;
        let json = sample().convert_to_json().expect("convert");
        let tree = Value::from_text(&json).expect("reparse");
        assert_eq!(tree.render(), json);
    }
}
