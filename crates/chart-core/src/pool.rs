// File: crates/chart-core/src/pool.rs
// Summary: Keyed free lists so short-lived chart elements are reused instead of reallocated.

use std::collections::HashMap;
use std::hash::Hash;

/// Arena of released elements grouped by kind `K`.
#[derive(Debug)]
pub struct Pool<K, T> {
    free: HashMap<K, Vec<T>>,
    created: usize,
}

impl<K: Eq + Hash, T> Default for Pool<K, T> {
    fn default() -> Self { Self { free: HashMap::new(), created: 0 } }
}

impl<K: Eq + Hash, T> Pool<K, T> {
    pub fn new() -> Self { Self::default() }

    /// Fill the free list of `kind` with `count` fresh elements.
    pub fn prewarm(&mut self, kind: K, count: usize, mut create: impl FnMut() -> T) {
        let list = self.free.entry(kind).or_default();
        list.extend((0..count).map(|_| create()));
        self.created += count;
    }

    /// Most recently released element of `kind`, or a new one from `create`.
    pub fn acquire(&mut self, kind: &K, create: impl FnOnce() -> T) -> T {
        match self.free.get_mut(kind).and_then(Vec::pop) {
            Some(item) => item,
            None => {
                self.created += 1;
                create()
            }
        }
    }

    pub fn release(&mut self, kind: K, item: T) {
        self.free.entry(kind).or_default().push(item);
    }

    pub fn available(&self, kind: &K) -> usize {
        self.free.get(kind).map_or(0, Vec::len)
    }

    /// Elements ever built by this pool.
    pub fn created(&self) -> usize { self.created }
}
