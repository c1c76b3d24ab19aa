use std::fmt;
use std::ops::Deref;

use gpui::SharedString;

/// Identity of a rendered control. Doubles as the container key a size
/// observer watches.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct ComponentId(SharedString);

impl ComponentId {
    pub fn new(value: impl Into<SharedString>) -> Self {
        Self(value.into())
    }

    /// An id derived from the caller's source location, stable across frames.
    #[track_caller]
    pub fn auto(prefix: &str) -> Self {
        Self(stable_auto_id(prefix).into())
    }

    pub fn slot(&self, slot: &str) -> SharedString {
        format!("{}::{slot}", self.0).into()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Deref for ComponentId {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.as_str()
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&'static str> for ComponentId {
    fn from(value: &'static str) -> Self {
        Self(value.into())
    }
}

impl From<String> for ComponentId {
    fn from(value: String) -> Self {
        Self(value.into())
    }
}

impl From<ComponentId> for gpui::ElementId {
    fn from(value: ComponentId) -> Self {
        gpui::ElementId::Name(value.0)
    }
}

#[track_caller]
pub fn stable_auto_id(prefix: &str) -> String {
    let location = std::panic::Location::caller();
    let seed = format!(
        "{prefix}:{}:{}:{}",
        location.file(),
        location.line(),
        location.column()
    );
    format!("{prefix}-{:016x}", fnv1a64(seed.as_bytes()))
}

fn fnv1a64(bytes: &[u8]) -> u64 {
    const OFFSET_BASIS: u64 = 0xcbf29ce484222325;
    const PRIME: u64 = 0x00000100000001b3;

    let mut hash = OFFSET_BASIS;
    for byte in bytes {
        hash ^= u64::from(*byte);
        hash = hash.wrapping_mul(PRIME);
    }
    hash
}
