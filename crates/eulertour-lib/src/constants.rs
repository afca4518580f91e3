//! Constants shared across the library.

/// Version number
pub const VERSION: (u8, u8, u8) = (0, 1, 0);

/// Minimum k-mer size.
///
/// A k-mer must have distinct prefix and suffix (k-1)-mers, so k = 1
/// is meaningless for graph construction.
pub const MIN_K: usize = 2;

/// Default k-mer size used by the CLI when none is given
pub const DEFAULT_K: usize = 6;

/// Check whether a k-mer size is valid
#[inline]
pub const fn is_valid_k(k: usize) -> bool {
    k >= MIN_K
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_k() {
        assert!(!is_valid_k(0));
        assert!(!is_valid_k(1));
        assert!(is_valid_k(2));
        assert!(is_valid_k(31));
        assert!(is_valid_k(DEFAULT_K));
    }
}
