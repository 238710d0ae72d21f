use crate::error::StoreError;
use fxhash::FxHashMap;
use parking_lot::RwLock;
use std::cmp::Ordering;
use std::fmt;
use tracing::debug;

/// A row that can live in a [`Table`].
pub trait Record: Clone + Send + Sync + 'static {
    /// Secondary key the table keeps unique, if any.
    ///
    /// Implementations normalize the key themselves (case folding, trimming),
    /// the table compares the returned strings as-is.
    fn unique_key(&self) -> Option<String> {
        None
    }
}

struct TableInner<T> {
    rows: FxHashMap<u64, T>,
    unique: FxHashMap<String, u64>,
    next_id: u64,
}

/// A thread-safe, in-memory table with auto-increment identifiers.
///
/// Identifiers start at `1` and are never reused, even after a rejected insert
/// they are simply not consumed.
pub struct Table<T> {
    name: &'static str,
    inner: RwLock<TableInner<T>>,
}

impl<T: Record> Table<T> {
    #[must_use]
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            inner: RwLock::new(TableInner {
                rows: FxHashMap::default(),
                unique: FxHashMap::default(),
                next_id: 1,
            }),
        }
    }

    /// Allocates the next identifier, builds the row from it and stores it.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Conflict`] when the row's [`Record::unique_key`] is
    /// already taken. Nothing is stored in that case.
    pub fn insert_with(&self, build: impl FnOnce(u64) -> T) -> Result<T, StoreError> {
        let mut inner = self.inner.write();
        let id = inner.next_id;
        let row = build(id);

        let key = row.unique_key();
        if let Some(key) = &key
            && inner.unique.contains_key(key)
        {
            return Err(StoreError::Conflict {
                message: format!("'{key}' already exists").into(),
                context: Some(self.name.into()),
            });
        }

        if let Some(key) = key {
            inner.unique.insert(key, id);
        }
        inner.rows.insert(id, row.clone());
        inner.next_id += 1;
        debug!(table = self.name, id, "Inserted row");

        Ok(row)
    }

    #[must_use]
    pub fn get(&self, id: u64) -> Option<T> {
        self.inner.read().rows.get(&id).cloned()
    }

    /// Looks a row up by its unique key.
    #[must_use]
    pub fn get_unique(&self, key: &str) -> Option<T> {
        let inner = self.inner.read();
        inner.unique.get(key).and_then(|id| inner.rows.get(id)).cloned()
    }

    #[must_use]
    pub fn contains(&self, id: u64) -> bool {
        self.inner.read().rows.contains_key(&id)
    }

    /// Every row matching `predicate`, sorted with `order`.
    #[must_use]
    pub fn select(
        &self,
        predicate: impl Fn(&T) -> bool,
        order: impl FnMut(&T, &T) -> Ordering,
    ) -> Vec<T> {
        let mut rows: Vec<T> =
            self.inner.read().rows.values().filter(|row| predicate(row)).cloned().collect();
        rows.sort_by(order);
        rows
    }
}

impl<T> fmt::Debug for Table<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.read();
        f.debug_struct("Table")
            .field("name", &self.name)
            .field("rows", &inner.rows.len())
            .field("next_id", &inner.next_id)
            .finish()
    }
}
