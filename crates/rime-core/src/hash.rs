//! Lattice fingerprinting for determinism checks.
//!
//! Uses FNV-1a over the side length and every density's bit pattern.
//! Not cryptographically secure; used for fast equality checks between
//! runs that should be bit-identical.

use crate::lattice::Lattice;

/// FNV-1a offset basis for 64-bit.
const FNV_OFFSET: u64 = 0xcbf29ce484222325;
/// FNV-1a prime for 64-bit.
const FNV_PRIME: u64 = 0x00000100000001B3;

#[inline]
fn fnv1a_u64(mut hash: u64, v: u64) -> u64 {
    for &b in &v.to_le_bytes() {
        hash = (hash ^ b as u64).wrapping_mul(FNV_PRIME);
    }
    hash
}

/// Hash a lattice's size and contents.
///
/// Two lattices hash equal iff (barring collisions) they have the same
/// size and bit-identical densities. `0.0` and `-0.0` hash differently.
pub fn lattice_hash(lattice: &Lattice) -> u64 {
    let mut hash = fnv1a_u64(FNV_OFFSET, lattice.size() as u64);
    for &v in lattice.as_slice() {
        hash = fnv1a_u64(hash, v.to_bits());
    }
    hash
}
