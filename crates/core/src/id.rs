//! Strongly-typed identifiers used across the domain.

use serde::{Deserialize, Serialize};

/// Identifier of a catalog item.
///
/// Keys are totally ordered; listings and filter results are sorted by them.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemKey(u64);

impl ItemKey {
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn get(&self) -> u64 {
        self.0
    }
}

impl core::fmt::Display for ItemKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<u64> for ItemKey {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<ItemKey> for u64 {
    fn from(value: ItemKey) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_the_bare_number() {
        assert_eq!(ItemKey::new(202).to_string(), "202");
    }

    #[test]
    fn serializes_transparently() {
        let json = serde_json::to_string(&ItemKey::from(7)).unwrap();
        assert_eq!(json, "7");
        let back: ItemKey = serde_json::from_str(&json).unwrap();
        assert_eq!(back.get(), 7);
    }
}
