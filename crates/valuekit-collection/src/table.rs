//! Two-key table: row -> column -> value.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

/// A hash-based table keyed by `(row, column)` pairs.
///
/// Rows without cells are dropped, so `is_empty` means "no cells".
pub struct Table<R, C, V> {
    rows: HashMap<R, HashMap<C, V>>,
}

impl<R, C, V> Table<R, C, V> {
    pub fn new() -> Self {
        Self {
            rows: HashMap::new(),
        }
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.rows.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of rows holding at least one cell.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// All cells as `(row, column, value)` triples, in no particular order.
    pub fn cells(&self) -> impl Iterator<Item = (&R, &C, &V)> + '_ {
        self.rows
            .iter()
            .flat_map(|(row, columns)| columns.iter().map(move |(column, value)| (row, column, value)))
    }

    pub fn row_keys(&self) -> impl Iterator<Item = &R> + '_ {
        self.rows.keys()
    }
}

impl<R: Eq + Hash, C: Eq + Hash, V> Table<R, C, V> {
    /// Store `value` at `(row, column)`, returning the value it replaced.
    pub fn put(&mut self, row: R, column: C, value: V) -> Option<V> {
        self.rows.entry(row).or_default().insert(column, value)
    }

    pub fn get<QR, QC>(&self, row: &QR, column: &QC) -> Option<&V>
    where
        R: Borrow<QR>,
        C: Borrow<QC>,
        QR: Hash + Eq + ?Sized,
        QC: Hash + Eq + ?Sized,
    {
        self.rows.get(row)?.get(column)
    }

    pub fn contains<QR, QC>(&self, row: &QR, column: &QC) -> bool
    where
        R: Borrow<QR>,
        C: Borrow<QC>,
        QR: Hash + Eq + ?Sized,
        QC: Hash + Eq + ?Sized,
    {
        self.get(row, column).is_some()
    }

    pub fn contains_row<QR>(&self, row: &QR) -> bool
    where
        R: Borrow<QR>,
        QR: Hash + Eq + ?Sized,
    {
        self.rows.contains_key(row)
    }

    /// Remove the cell at `(row, column)`, dropping the row once it is empty.
    pub fn remove<QR, QC>(&mut self, row: &QR, column: &QC) -> Option<V>
    where
        R: Borrow<QR>,
        C: Borrow<QC>,
        QR: Hash + Eq + ?Sized,
        QC: Hash + Eq + ?Sized,
    {
        let columns = self.rows.get_mut(row)?;
        let removed = columns.remove(column);
        if columns.is_empty() {
            self.rows.remove(row);
        }
        removed
    }

    /// The column -> value map of one row.
    pub fn row<QR>(&self, row: &QR) -> Option<&HashMap<C, V>>
    where
        R: Borrow<QR>,
        QR: Hash + Eq + ?Sized,
    {
        self.rows.get(row)
    }

    /// The `(row, value)` pairs of one column.
    pub fn column<'a, QC>(&'a self, column: &'a QC) -> impl Iterator<Item = (&'a R, &'a V)> + 'a
    where
        C: Borrow<QC>,
        QC: Hash + Eq + ?Sized,
    {
        self.rows
            .iter()
            .filter_map(move |(row, columns)| columns.get(column).map(|value| (row, value)))
    }

    /// Copy every cell of `other` into this table, replacing existing cells.
    pub fn put_all(&mut self, other: &Table<R, C, V>)
    where
        R: Clone,
        C: Clone,
        V: Clone,
    {
        for (row, column, value) in other.cells() {
            self.put(row.clone(), column.clone(), value.clone());
        }
    }
}

impl<R, C, V> Default for Table<R, C, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Clone, C: Clone, V: Clone> Clone for Table<R, C, V> {
    fn clone(&self) -> Self {
        Self {
            rows: self.rows.clone(),
        }
    }
}

impl<R: Eq + Hash, C: Eq + Hash, V: PartialEq> PartialEq for Table<R, C, V> {
    fn eq(&self, other: &Self) -> bool {
        self.rows == other.rows
    }
}

impl<R: Eq + Hash, C: Eq + Hash, V: Eq> Eq for Table<R, C, V> {}

impl<R: fmt::Debug, C: fmt::Debug, V: fmt::Debug> fmt::Debug for Table<R, C, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.rows.iter()).finish()
    }
}

impl<R: Eq + Hash, C: Eq + Hash, V> FromIterator<(R, C, V)> for Table<R, C, V> {
    fn from_iter<I: IntoIterator<Item = (R, C, V)>>(iter: I) -> Self {
        let mut table = Self::new();
        table.extend(iter);
        table
    }
}

impl<R: Eq + Hash, C: Eq + Hash, V> Extend<(R, C, V)> for Table<R, C, V> {
    fn extend<I: IntoIterator<Item = (R, C, V)>>(&mut self, iter: I) {
        for (row, column, value) in iter {
            self.put(row, column, value);
        }
    }
}
