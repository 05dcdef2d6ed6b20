//! Vote tally and its persisted store.

use crate::catalog::Genre;
use crate::constants::STORAGE_KEY;
use crate::storage::KeyValueStore;
use fnv::FnvHashMap;
use serde_json::{Map, Value};

/// Vote count per catalog key. Every catalog key always has an entry.
#[derive(Clone, Debug, PartialEq)]
pub struct VoteTally {
    catalog: &'static [Genre],
    counts: FnvHashMap<&'static str, u32>,
}

impl VoteTally {
    pub fn zeroed(catalog: &'static [Genre]) -> Self {
        let counts = catalog.iter().map(|g| (g.key, 0)).collect();
        Self { catalog, counts }
    }

    /// Lenient load of the persisted JSON object.
    ///
    /// Malformed input yields an all-zero tally; entries that are not
    /// non-negative integers read as zero; unknown keys are dropped.
    pub fn from_json(catalog: &'static [Genre], text: &str) -> Self {
        let mut tally = Self::zeroed(catalog);
        let parsed: Map<String, Value> = match serde_json::from_str(text) {
            Ok(m) => m,
            Err(e) => {
                log::warn!("[votes] ignoring malformed tally: {}", e);
                return tally;
            }
        };
        for g in catalog {
            if let Some(n) = parsed.get(g.key).and_then(Value::as_u64) {
                tally
                    .counts
                    .insert(g.key, u32::try_from(n).unwrap_or(u32::MAX));
            }
        }
        tally
    }

    pub fn to_json(&self) -> String {
        let obj: Map<String, Value> = self
            .iter()
            .map(|(k, n)| (k.to_owned(), Value::from(n)))
            .collect();
        Value::Object(obj).to_string()
    }

    #[inline]
    pub fn count(&self, key: &str) -> u32 {
        self.counts.get(key).copied().unwrap_or(0)
    }

    /// Add one vote. Returns the new count, or `None` for unknown keys.
    pub fn increment(&mut self, key: &str) -> Option<u32> {
        self.counts.get_mut(key).map(|c| {
            *c = c.saturating_add(1);
            *c
        })
    }

    pub fn reset(&mut self) {
        for c in self.counts.values_mut() {
            *c = 0;
        }
    }

    pub fn total(&self) -> u64 {
        self.counts.values().map(|&c| c as u64).sum()
    }

    /// `(key, count)` pairs in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, u32)> + '_ {
        self.catalog.iter().map(|g| (g.key, self.count(g.key)))
    }
}

/// Tally backed by durable storage; every mutation rewrites the full entry.
pub struct VoteStore<S: KeyValueStore> {
    tally: VoteTally,
    store: S,
    key: &'static str,
}

impl<S: KeyValueStore> VoteStore<S> {
    pub fn open(catalog: &'static [Genre], store: S) -> Self {
        Self::open_with_key(catalog, store, STORAGE_KEY)
    }

    pub fn open_with_key(catalog: &'static [Genre], store: S, key: &'static str) -> Self {
        let tally = match store.get(key) {
            Some(text) => VoteTally::from_json(catalog, &text),
            None => VoteTally::zeroed(catalog),
        };
        log::info!("[votes] loaded {} votes from `{}`", tally.total(), key);
        Self { tally, store, key }
    }

    #[inline]
    pub fn tally(&self) -> &VoteTally {
        &self.tally
    }

    #[inline]
    pub fn count(&self, key: &str) -> u32 {
        self.tally.count(key)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn increment(&mut self, key: &str) -> Option<u32> {
        let Some(n) = self.tally.increment(key) else {
            log::debug!("[votes] ignoring vote for unknown genre `{}`", key);
            return None;
        };
        self.persist();
        Some(n)
    }

    pub fn reset(&mut self) {
        self.tally.reset();
        self.persist();
    }

    fn persist(&mut self) {
        // The in-memory tally stays authoritative when the write fails.
        if let Err(e) = self.store.set(self.key, &self.tally.to_json()) {
            log::warn!("[votes] persist failed: {}", e);
        }
    }
}
