//! structural identity for graph entities. entities with a positive id are
//! keyed by that id; everything else is keyed by an FNV-1a 64 digest of its
//! IEEE-754 coordinate bit patterns, reinterpreted as an i64.

const FNV_OFFSET_BASIS: u64 = 0xcbf29ce484222325;
const FNV_PRIME: u64 = 0x100000001b3;

/// FNV-1a 64 over the little-endian bit patterns of a value sequence.
pub fn hash_values(values: impl IntoIterator<Item = f64>) -> i64 {
    let mut state = FNV_OFFSET_BASIS;
    for value in values {
        for byte in value.to_bits().to_le_bytes() {
            state ^= byte as u64;
            state = state.wrapping_mul(FNV_PRIME);
        }
    }
    state as i64
}

/// FNV-1a 64 over a sequence of already-computed entity keys.
pub fn hash_keys(keys: impl IntoIterator<Item = i64>) -> i64 {
    let mut state = FNV_OFFSET_BASIS;
    for key in keys {
        for byte in key.to_le_bytes() {
            state ^= byte as u64;
            state = state.wrapping_mul(FNV_PRIME);
        }
    }
    state as i64
}

/// resolve an entity key from its explicit id when positive, otherwise from
/// a lazily-computed structural hash. every identity comparison in the crate
/// funnels through this helper so that ids and hashes never disagree.
pub fn hash_or_id(id: i64, hash: impl FnOnce() -> i64) -> i64 {
    if id > 0 {
        id
    } else {
        hash()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_values_deterministic() {
        let a = hash_values([1.0, 2.0]);
        let b = hash_values([1.0, 2.0]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_hash_values_order_sensitive() {
        assert_ne!(hash_values([1.0, 2.0]), hash_values([2.0, 1.0]));
    }

    #[test]
    fn test_hash_or_id_prefers_positive_id() {
        assert_eq!(hash_or_id(42, || 7), 42);
        assert_eq!(hash_or_id(-1, || 7), 7);
        assert_eq!(hash_or_id(0, || 7), 7);
    }
}
