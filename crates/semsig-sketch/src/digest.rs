// crates/semsig-sketch/src/digest.rs
//
// Stable fixed-width digest of a composite signature string.
//
// FNV-1a (64-bit) rather than the standard library's hasher, so the digest
// is identical across processes, platforms, and releases. The digest is a
// single hash step applied to the composite string.

const FNV_OFFSET_BASIS: u64 = 0xcbf29ce484222325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// FNV-1a 64-bit hash of the composite signature string.
pub fn digest(composite: &str) -> u64 {
    let mut state = FNV_OFFSET_BASIS;
    for &byte in composite.as_bytes() {
        state ^= byte as u64;
        state = state.wrapping_mul(FNV_PRIME);
    }
    state
}

/// Render a digest value as `0x` followed by 16 lowercase hex digits.
pub fn format_digest(value: u64) -> String {
    format!("{:#018x}", value)
}

/// Digest the composite string and render it in hex form.
pub fn digest_hex(composite: &str) -> String {
    format_digest(digest(composite))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_fnv1a_vectors() {
        // Published FNV-1a 64 test vectors.
        assert_eq!(digest(""), 0xcbf29ce484222325);
        assert_eq!(digest("a"), 0xaf63dc4c8601ec8c);
    }

    #[test]
    fn test_stable_across_calls() {
        let composite = "123-456-789_987-654-321";
        assert_eq!(digest(composite), digest(composite));
    }

    #[test]
    fn test_hex_format() {
        let hex = digest_hex("");
        assert_eq!(hex, "0xcbf29ce484222325");
        assert_eq!(hex.len(), 18);
        assert!(hex.starts_with("0x"));
    }

    #[test]
    fn test_different_composites_differ() {
        assert_ne!(digest("1-2-3"), digest("1-2-4"));
    }
}
