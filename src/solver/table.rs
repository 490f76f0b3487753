use crate::*;
use std::collections::HashMap;

/// Every position one solver has proved, keyed by canonical state.
///
/// Owned by exactly one [`Solver`] and discarded with it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table(HashMap<Key, Position>);

impl Table {
    pub fn get(&self, key: &Key) -> Option<&Position> {
        self.0.get(key)
    }
    pub fn contains(&self, key: &Key) -> bool {
        self.0.contains_key(key)
    }
    /// Each key is written exactly once.
    pub fn insert(&mut self, key: Key, position: Position) {
        let previous = self.0.insert(key, position);
        debug_assert!(previous.is_none(), "position solved twice");
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn iter(&self) -> impl Iterator<Item = (&Key, &Position)> {
        self.0.iter()
    }
}
