use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// A value whose hash is exactly the integer it holds.
///
/// Two instances with the same number always collide in a hash table,
/// which makes collision handling easy to exercise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SettableHashCode(i32);

impl SettableHashCode {
    pub const fn new(hash_code: i32) -> Self {
        Self(hash_code)
    }

    pub const fn get(self) -> i32 {
        self.0
    }
}

impl Hash for SettableHashCode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_i32(self.0);
    }
}

#[cfg(test)]
mod tests {
    use std::collections::hash_map::RandomState;
    use std::collections::HashSet;
    use std::hash::BuildHasher;

    use super::*;

    #[test]
    fn test_hash_is_the_held_integer() {
        let state = RandomState::new();
        for n in [i32::MIN, -1, 0, 1, 42, i32::MAX] {
            assert_eq!(state.hash_one(SettableHashCode::new(n)), state.hash_one(n));
        }
    }

    #[test]
    fn test_equality_and_sets() {
        let set: HashSet<_> = [1, 1, 2].into_iter().map(SettableHashCode::new).collect();
        assert_eq!(set.len(), 2);
        assert_eq!(SettableHashCode::new(5).get(), 5);
    }
}
