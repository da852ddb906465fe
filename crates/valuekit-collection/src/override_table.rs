//! Override builders for two-key tables.

use std::hash::Hash;

use crate::builder::Builder;
use crate::error::OverrideError;
use crate::immutable::ImmutableTable;
use crate::safe::copy_or_empty;
use crate::table::Table;

/// Builds mutable [`Table`] snapshots.
#[derive(Debug, Clone)]
pub struct OverridingTableBuilder<R, C, V> {
    backing: Table<R, C, V>,
}

impl<R: Eq + Hash, C: Eq + Hash, V> OverridingTableBuilder<R, C, V> {
    pub fn new() -> Self {
        Self {
            backing: Table::new(),
        }
    }

    /// Start from a copy of `initial`. The table is only read, never kept.
    pub fn from_initial(initial: Option<&Table<R, C, V>>) -> Self
    where
        R: Clone,
        C: Clone,
        V: Clone,
    {
        Self {
            backing: copy_or_empty(initial),
        }
    }

    /// Store `value` at `(row, column)`, replacing any previous value.
    pub fn override_with(&mut self, row: R, column: C, value: V) -> &mut Self {
        self.backing.put(row, column, value);
        self
    }

    /// Copy every cell of `source`, replacing cells at the same coordinates.
    /// An absent source is a no-op.
    pub fn override_with_all(&mut self, source: Option<&Table<R, C, V>>) -> &mut Self
    where
        R: Clone,
        C: Clone,
        V: Clone,
    {
        if let Some(source) = source {
            self.backing.put_all(source);
        }
        self
    }
}

impl<R: Eq + Hash, C: Eq + Hash, V> Default for OverridingTableBuilder<R, C, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Eq + Hash + Clone, C: Eq + Hash + Clone, V: Clone> Builder for OverridingTableBuilder<R, C, V> {
    type Output = Table<R, C, V>;

    /// A mutable copy of the backing table.
    fn build(&self) -> Table<R, C, V> {
        tracing::trace!(cells = self.backing.len(), "building table snapshot");
        self.backing.clone()
    }
}

/// Builds shared read-only [`ImmutableTable`] snapshots, rejecting absent
/// coordinates or values as soon as they are written.
#[derive(Debug, Clone)]
pub struct OverridingImmutableTableBuilder<R, C, V> {
    backing: Table<R, C, V>,
}

impl<R: Eq + Hash, C: Eq + Hash, V> OverridingImmutableTableBuilder<R, C, V> {
    pub fn new() -> Self {
        Self {
            backing: Table::new(),
        }
    }

    pub fn from_initial(initial: Option<&Table<R, C, V>>) -> Self
    where
        R: Clone,
        C: Clone,
        V: Clone,
    {
        Self {
            backing: copy_or_empty(initial),
        }
    }

    pub fn override_with(&mut self, row: R, column: C, value: V) -> &mut Self {
        self.backing.put(row, column, value);
        self
    }

    /// Checks row, then column, then value.
    pub fn try_override_with(
        &mut self,
        row: Option<R>,
        column: Option<C>,
        value: Option<V>,
    ) -> Result<&mut Self, OverrideError> {
        let row = row.ok_or(OverrideError::NullRow)?;
        let column = column.ok_or(OverrideError::NullColumn)?;
        let value = value.ok_or(OverrideError::NullValue)?;
        Ok(self.override_with(row, column, value))
    }

    pub fn override_with_all(&mut self, source: Option<&Table<R, C, V>>) -> &mut Self
    where
        R: Clone,
        C: Clone,
        V: Clone,
    {
        if let Some(source) = source {
            self.backing.put_all(source);
        }
        self
    }

    /// Apply cells in order, stopping at the first incomplete one. Cells
    /// applied before the failure are kept.
    pub fn try_override_with_all<I>(&mut self, source: Option<I>) -> Result<&mut Self, OverrideError>
    where
        I: IntoIterator<Item = (Option<R>, Option<C>, Option<V>)>,
    {
        for (row, column, value) in source.into_iter().flatten() {
            self.try_override_with(row, column, value)?;
        }
        Ok(self)
    }
}

impl<R: Eq + Hash, C: Eq + Hash, V> Default for OverridingImmutableTableBuilder<R, C, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Eq + Hash + Clone, C: Eq + Hash + Clone, V: Clone> Builder
    for OverridingImmutableTableBuilder<R, C, V>
{
    type Output = ImmutableTable<R, C, V>;

    fn build(&self) -> ImmutableTable<R, C, V> {
        tracing::trace!(cells = self.backing.len(), "building immutable table snapshot");
        ImmutableTable::from(self.backing.clone())
    }
}
