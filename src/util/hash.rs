//! Hashing helpers for tests that need to place elements in specific slots.

use std::hash::{BuildHasher, Hash, Hasher};

/// A value with a hash chosen by hand, independent of the value itself. Equality only considers
/// `value`, so two ManualHashes can collide without being equal.
#[derive(Debug, Clone)]
pub struct ManualHash<T: Eq> {
    hash: u64,
    value: T,
}

impl<T: Eq> ManualHash<T> {
    pub const fn new(hash: u64, value: T) -> ManualHash<T> {
        ManualHash {
            hash,
            value,
        }
    }

    pub const fn value_ref(&self) -> &T {
        &self.value
    }
}

impl<T: Eq> Hash for ManualHash<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash);
    }
}

impl<T: Eq> PartialEq for ManualHash<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: Eq> Eq for ManualHash<T> {}

/// A Hasher that reports the last integer written to it, so a [`ManualHash`] (or a plain integer)
/// hashes to itself. Arbitrary bytes are folded in the same way as integers.
#[derive(Debug, Default)]
pub struct IdentityHasher {
    state: u64,
}

impl Hasher for IdentityHasher {
    fn finish(&self) -> u64 {
        self.state
    }

    fn write(&mut self, bytes: &[u8]) {
        for (offset, byte) in bytes.iter().enumerate() {
            self.state ^= (*byte as u64) << ((offset % 8) * 8);
        }
    }

    fn write_u64(&mut self, i: u64) {
        self.state = i;
    }

    fn write_usize(&mut self, i: usize) {
        self.state = i as u64;
    }

    fn write_u32(&mut self, i: u32) {
        self.state = i as u64;
    }

    fn write_i32(&mut self, i: i32) {
        self.state = i as u32 as u64;
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct IdentityHasherBuilder;

impl BuildHasher for IdentityHasherBuilder {
    type Hasher = IdentityHasher;

    fn build_hasher(&self) -> Self::Hasher {
        IdentityHasher::default()
    }
}
