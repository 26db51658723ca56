//! Row-ordered table storage with a rectangular column schema.

use std::collections::{BTreeSet, HashMap};

use tabula_core::{Attributes, Row, RowId, ValidationError, Value};

use crate::error::{GraphError, GraphResult};

/// A table of rows sharing one column schema.
///
/// Rows keep insertion order. Every row carries every column; cells a row
/// never set hold `Value::Null`. Identifiers are handed out from a counter
/// that only moves forward, so a removed row's id is never seen again.
#[derive(Debug, Clone)]
pub struct Table<R: Row> {
    rows: Vec<R>,
    positions: HashMap<R::Id, usize>,
    columns: Vec<String>,
    next_id: u64,
}

impl<R: Row> Default for Table<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Row> Table<R> {
    /// Create a new empty table.
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            positions: HashMap::new(),
            columns: Vec::new(),
            next_id: 1,
        }
    }

    /// Reserve the next identifier.
    pub fn alloc_id(&mut self) -> R::Id {
        let id = R::Id::from_raw(self.next_id);
        self.next_id += 1;
        id
    }

    /// Insert a row, extending the schema with any columns it introduces.
    pub fn insert(&mut self, mut row: R) -> GraphResult<R::Id> {
        let id = row.id();
        if self.positions.contains_key(&id) {
            return Err(GraphError::DuplicateId(id.raw()));
        }
        self.next_id = self.next_id.max(id.raw() + 1);

        let mut introduced: Vec<String> = row
            .attributes()
            .keys()
            .filter(|name| !self.has_column(name))
            .cloned()
            .collect();
        introduced.sort();
        let reserved: Vec<String> = introduced
            .iter()
            .filter(|name| R::KIND.is_reserved(name))
            .cloned()
            .collect();
        if !reserved.is_empty() {
            return Err(ValidationError::reserved_attribute(reserved).into());
        }
        for name in introduced {
            self.add_column(&name);
        }
        fill_missing(row.attributes_mut(), &self.columns);

        self.positions.insert(id, self.rows.len());
        self.rows.push(row);
        Ok(id)
    }

    /// Remove a row.
    pub fn remove(&mut self, id: R::Id) -> Option<R> {
        let pos = self.positions.remove(&id)?;
        let row = self.rows.remove(pos);
        for (i, r) in self.rows.iter().enumerate().skip(pos) {
            self.positions.insert(r.id(), i);
        }
        Some(row)
    }

    /// Get a row by ID.
    pub fn get(&self, id: R::Id) -> Option<&R> {
        self.positions.get(&id).map(|&pos| &self.rows[pos])
    }

    /// Returns true if a row with this ID exists.
    pub fn contains(&self, id: R::Id) -> bool {
        self.positions.contains_key(&id)
    }

    /// All rows, in table order.
    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    /// All identifiers, in table order.
    pub fn ids(&self) -> impl Iterator<Item = R::Id> + '_ {
        self.rows.iter().map(|r| r.id())
    }

    /// Rows whose identifier is in `ids`, in table order.
    pub fn subset<'a>(&'a self, ids: &'a BTreeSet<R::Id>) -> impl Iterator<Item = &'a R> + 'a {
        self.rows.iter().filter(move |r| ids.contains(&r.id()))
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    // ==================== Columns ====================

    /// Column names in the order they were first introduced.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Returns true if the schema has this column.
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }

    /// Read a whole column in row order.
    pub fn column(&self, name: &str) -> Option<Vec<Value>> {
        if !self.has_column(name) {
            return None;
        }
        Some(
            self.rows
                .iter()
                .map(|r| r.get_attr(name).cloned().unwrap_or(Value::Null))
                .collect(),
        )
    }

    /// Overwrite a whole column, one value per row in row order.
    ///
    /// A new column is appended to the schema. Reserved columns are rejected.
    pub fn write_column(&mut self, name: &str, values: Vec<Value>) -> GraphResult<()> {
        if R::KIND.is_reserved(name) {
            return Err(ValidationError::reserved_attribute(vec![name.to_string()]).into());
        }
        if values.len() != self.rows.len() {
            return Err(GraphError::column_length(name, self.rows.len(), values.len()));
        }
        if !self.has_column(name) {
            self.columns.push(name.to_string());
        }
        for (row, value) in self.rows.iter_mut().zip(values) {
            row.set_attr(name.to_string(), value);
        }
        Ok(())
    }

    /// Set one cell. A new column is back-filled with `Null` on every other row.
    pub fn set(&mut self, id: R::Id, name: &str, value: Value) -> GraphResult<()> {
        if R::KIND.is_reserved(name) {
            return Err(ValidationError::reserved_attribute(vec![name.to_string()]).into());
        }
        let pos = *self
            .positions
            .get(&id)
            .ok_or_else(|| ValidationError::invalid_argument(format!("unknown {} {}", R::KIND, id)))?;
        if !self.has_column(name) {
            self.add_column(name);
        }
        self.rows[pos].set_attr(name.to_string(), value);
        Ok(())
    }

    /// Returns true if every row carries exactly the schema's columns.
    pub fn is_rectangular(&self) -> bool {
        self.rows.iter().all(|r| {
            r.attributes().len() == self.columns.len()
                && self.columns.iter().all(|c| r.attributes().contains_key(c))
        })
    }

    /// Returns true if the position index agrees with the row vector.
    pub(crate) fn index_consistent(&self) -> bool {
        self.positions.len() == self.rows.len()
            && self
                .rows
                .iter()
                .enumerate()
                .all(|(i, r)| self.positions.get(&r.id()) == Some(&i))
    }

    fn add_column(&mut self, name: &str) {
        self.columns.push(name.to_string());
        for row in &mut self.rows {
            row.set_attr(name.to_string(), Value::Null);
        }
    }
}

fn fill_missing(attributes: &mut Attributes, columns: &[String]) {
    for column in columns {
        attributes.entry(column.clone()).or_insert(Value::Null);
    }
}
