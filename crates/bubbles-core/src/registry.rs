use crate::catalog::Rgb;
use crate::physics::BodyHandle;
use fnv::FnvHashMap;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RegisteredBody {
    pub handle: BodyHandle,
    pub radius: f32,
    pub color: Rgb,
}

/// Genre key -> live physics body. Holds exactly one body per genre.
#[derive(Clone, Debug, Default)]
pub struct BodyRegistry {
    entries: FnvHashMap<&'static str, RegisteredBody>,
}

impl BodyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn get(&self, key: &str) -> Option<&RegisteredBody> {
        self.entries.get(key)
    }

    pub fn insert(&mut self, key: &'static str, body: RegisteredBody) {
        self.entries.insert(key, body);
    }

    /// Swap in `body` for `key` in one assignment; returns the body it
    /// replaced. Unknown keys are left untouched.
    pub fn replace(&mut self, key: &str, body: RegisteredBody) -> Option<RegisteredBody> {
        self.entries
            .get_mut(key)
            .map(|slot| std::mem::replace(slot, body))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn handles(&self) -> impl Iterator<Item = BodyHandle> + '_ {
        self.entries.values().map(|b| b.handle)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
