//! Read-only view of one row, handed to mutation formulas.

use crate::entity::reserved_value;
use crate::{Attributes, EvalError, EvalResult, NodeId, Row, RowId, Value};

/// The row a formula is being evaluated against.
///
/// Formulas are row-local: they may read any column of the current row
/// (including the reserved `id`/`from`/`to` columns) but never other rows.
/// Columns the table has but this row never set read as `Null`; names the
/// table does not know at all are an error.
pub struct RowContext<'a> {
    id: u64,
    endpoints: Option<(NodeId, NodeId)>,
    attributes: &'a Attributes,
    columns: &'a [String],
}

impl<'a> RowContext<'a> {
    /// Create a context over `row` whose table has the given columns.
    pub fn new<R: Row>(row: &'a R, columns: &'a [String]) -> Self {
        Self {
            id: row.id().raw(),
            endpoints: row.endpoints(),
            attributes: row.attributes(),
            columns,
        }
    }

    /// Raw identifier of the row.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Returns true if the table has a column with this name.
    pub fn has(&self, name: &str) -> bool {
        reserved_value(self.id, self.endpoints, name).is_some()
            || self.columns.iter().any(|c| c == name)
    }

    /// Read a column of this row.
    pub fn get(&self, name: &str) -> EvalResult<Value> {
        if let Some(value) = reserved_value(self.id, self.endpoints, name) {
            return Ok(value);
        }
        if let Some(value) = self.attributes.get(name) {
            return Ok(value.clone());
        }
        if self.columns.iter().any(|c| c == name) {
            return Ok(Value::Null);
        }
        Err(EvalError::unknown_attribute(name))
    }

    /// Read a numeric column. `Ok(None)` means the cell holds the sentinel.
    pub fn number(&self, name: &str) -> EvalResult<Option<f64>> {
        match self.get(name)? {
            Value::Null => Ok(None),
            other => other.as_f64().map(Some).ok_or_else(|| {
                EvalError::type_error(format!(
                    "attribute '{}' is {}, expected a number",
                    name,
                    other.type_name()
                ))
            }),
        }
    }
}
