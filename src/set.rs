use super::*;
use std::{collections::HashSet, hash::BuildHasher};

/// Hash sets, with either the std SipHash hasher or `fxhash`.
impl<S: BuildHasher + Default> Container for HashSet<String, S> {
    fn add(&mut self, value: String) {
        self.insert(value);
    }

    fn contains(&self, value: &str) -> bool {
        HashSet::contains(self, value)
    }

    fn clear(&mut self) {
        HashSet::clear(self);
    }

    fn len(&self) -> usize {
        HashSet::len(self)
    }
}
