//! Content-keyed caches shared by the frames of one document.

use std::collections::HashMap;

use crate::foundation::math::Fnv1a64;

/// When cached entries are dropped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EvictionPolicy {
    /// Entries live as long as the cache. A document has a finite set of
    /// paths and gradients, so growth is bounded by the payload.
    #[default]
    Never,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct CacheStats {
    pub entries: usize,
    pub hits: u64,
    pub misses: u64,
}

#[derive(Debug)]
pub struct ResourceCache<T> {
    policy: EvictionPolicy,
    entries: HashMap<u64, T>,
    hits: u64,
    misses: u64,
}

impl<T> Default for ResourceCache<T> {
    fn default() -> Self {
        Self::new(EvictionPolicy::Never)
    }
}

impl<T> ResourceCache<T> {
    pub fn new(policy: EvictionPolicy) -> Self {
        Self {
            policy,
            entries: HashMap::new(),
            hits: 0,
            misses: 0,
        }
    }

    /// Content key over string parts and one integer discriminator.
    pub fn key(parts: &[&str], discriminator: u64) -> u64 {
        let mut h = Fnv1a64::new_default();
        for p in parts {
            h.write_str(p);
        }
        h.write_u64(discriminator);
        h.finish()
    }

    pub fn policy(&self) -> EvictionPolicy {
        self.policy
    }

    pub fn get(&self, key: u64) -> Option<&T> {
        self.entries.get(&key)
    }

    pub fn get_or_insert_with(&mut self, key: u64, make: impl FnOnce() -> T) -> &mut T {
        if self.entries.contains_key(&key) {
            self.hits += 1;
        } else {
            self.misses += 1;
        }
        self.entries.entry(key).or_insert_with(make)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.entries.len(),
            hits: self.hits,
            misses: self.misses,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/eval/cache.rs"]
mod tests;
