//! Interned identifier names.
//!
//! The teacher's `ori_ir::interner::StringInterner` is sharded and
//! `parking_lot`-locked so concurrent Salsa queries can intern from
//! multiple threads at once. LA compiles a single file on a single thread
//! (see SPEC_FULL §5), so `Interner` here is a plain `HashMap`-backed
//! table with no locking — same "intern everything, compare by index"
//! shape, without the concurrency machinery that shape doesn't need here.

use rustc_hash::FxHashMap;
use std::fmt;

/// An interned name: O(1) equality and hashing, cheap to copy around an AST.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Name(u32);

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name({})", self.0)
    }
}

/// Single-threaded string interner.
#[derive(Default)]
pub struct Interner {
    map: FxHashMap<String, u32>,
    strings: Vec<String>,
}

impl Interner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern `s`, returning the same `Name` for equal strings.
    pub fn intern(&mut self, s: &str) -> Name {
        if let Some(&idx) = self.map.get(s) {
            return Name(idx);
        }
        let idx = u32::try_from(self.strings.len()).unwrap_or(u32::MAX);
        self.strings.push(s.to_string());
        self.map.insert(s.to_string(), idx);
        Name(idx)
    }

    /// Resolve a previously interned name back to its text.
    pub fn resolve(&self, name: Name) -> &str {
        &self.strings[name.0 as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_string_interns_to_same_name() {
        let mut interner = Interner::new();
        let a = interner.intern("foo");
        let b = interner.intern("foo");
        assert_eq!(a, b);
    }

    #[test]
    fn different_strings_intern_differently() {
        let mut interner = Interner::new();
        let a = interner.intern("foo");
        let b = interner.intern("bar");
        assert_ne!(a, b);
    }

    #[test]
    fn resolve_round_trips() {
        let mut interner = Interner::new();
        let name = interner.intern("xyz");
        assert_eq!(interner.resolve(name), "xyz");
    }
}
