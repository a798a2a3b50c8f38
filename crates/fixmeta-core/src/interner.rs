//! String interning for metadata string leaves.
//!
//! Every `!"..."` leaf in the node store is an interned string. Two leaves
//! carrying the same text share one `StrId`, which keeps node uniquing a
//! plain structural comparison.

use std::collections::HashMap;

/// Handle to an interned metadata string.
///
/// Ids are assigned in insertion order and are only meaningful for the
/// interner (and therefore the `MdContext`) that produced them.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct StrId(u32);

impl StrId {
    /// Raw index for debugging.
    #[inline]
    pub fn as_u32(self) -> u32 {
        self.0
    }
}

/// Deduplicating string table.
#[derive(Debug, Clone, Default)]
pub struct Interner {
    map: HashMap<Box<str>, StrId>,
    strings: Vec<Box<str>>,
}

impl Interner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern a string, returning the existing id if it was seen before.
    pub fn intern(&mut self, s: &str) -> StrId {
        if let Some(&id) = self.map.get(s) {
            return id;
        }

        let id = StrId(self.strings.len() as u32);
        self.strings.push(s.into());
        self.map.insert(s.into(), id);
        id
    }

    /// Look up a string without interning it.
    #[inline]
    pub fn get(&self, s: &str) -> Option<StrId> {
        self.map.get(s).copied()
    }

    /// Resolve an id back to its text.
    ///
    /// # Panics
    /// Panics if the id was not created by this interner.
    #[inline]
    pub fn resolve(&self, id: StrId) -> &str {
        &self.strings[id.0 as usize]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}
