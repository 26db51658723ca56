//! Attribute assignments.

use std::fmt;

use tabula_core::{EvalResult, RowContext, Value};

/// A pure, row-local function producing an attribute value.
pub type Formula = Box<dyn Fn(&RowContext<'_>) -> EvalResult<Value>>;

/// `name = formula(row)`.
pub struct Assignment {
    /// Attribute to write.
    pub name: String,
    /// How to compute it from the current row.
    pub formula: Formula,
}

impl Assignment {
    /// Create an assignment from a closure over the row context.
    pub fn new<F>(name: impl Into<String>, formula: F) -> Self
    where
        F: Fn(&RowContext<'_>) -> EvalResult<Value> + 'static,
    {
        Self {
            name: name.into(),
            formula: Box::new(formula),
        }
    }

    /// Assign the same value to every selected row.
    pub fn constant(name: impl Into<String>, value: impl Into<Value>) -> Self {
        let value = value.into();
        Self::new(name, move |_| Ok(value.clone()))
    }

    /// Copy another column.
    pub fn copy_of(name: impl Into<String>, source: impl Into<String>) -> Self {
        let source = source.into();
        Self::new(name, move |row| row.get(&source))
    }

    /// Evaluate against one row.
    pub fn eval(&self, row: &RowContext<'_>) -> EvalResult<Value> {
        (self.formula)(row)
    }
}

impl fmt::Debug for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Assignment")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}
