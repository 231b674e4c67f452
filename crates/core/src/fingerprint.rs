//! Stable fingerprints for partition results.
//! This module exists to keep hashing concerns separate from the splitting
//! control code.

use std::hash::Hasher;

use xxhash_rust::xxh3::Xxh3;

use crate::types::Region;

/// Hash an ordered room list into a stable 64-bit fingerprint.
///
/// Two runs that produced the same rooms in the same order fingerprint
/// identically; a reordering or any geometric difference changes the value.
pub fn layout_fingerprint(rooms: &[Region]) -> u64 {
    let mut hasher = Xxh3::new();
    hasher.write_u32(rooms.len() as u32);
    for room in rooms {
        hasher.write_i32(room.x);
        hasher.write_i32(room.y);
        hasher.write_i32(room.width);
        hasher.write_i32(room.height);
    }
    hasher.finish()
}
