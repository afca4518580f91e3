//! K-mer windowing.
//!
//! Chops a sequence into overlapping windows of length k. Each window
//! carries the k-mer itself plus its prefix and suffix (k-1)-mers,
//! which become the edge endpoints in the de Bruijn graph. The prefix
//! and suffix share k-2 characters; the k-mer is the prefix plus the
//! suffix's last character.

/// One k-mer window within a sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KmerWindow<'a> {
    /// The full k-mer
    pub kmer: &'a str,
    /// The leading (k-1)-mer, `kmer[..k-1]`
    pub prefix: &'a str,
    /// The trailing (k-1)-mer, `kmer[1..]`
    pub suffix: &'a str,
}

/// Iterate over all k-mer windows of a sequence.
///
/// Yields one window per start offset `0 ..= len - k`, in order.
/// Empty when the sequence is shorter than k. The sequence must be
/// ASCII; the caller validates this before chopping.
///
/// # Panics
/// Panics if `k < 2`. Going through a validated
/// [`AssemblyConfiguration`](super::AssemblyConfiguration) rules
/// this out.
pub fn chop(sequence: &str, k: usize) -> impl Iterator<Item = KmerWindow<'_>> {
    assert!(k >= 2, "k must be at least 2");
    debug_assert!(sequence.is_ascii());
    let count = (sequence.len() + 1).saturating_sub(k);
    (0..count).map(move |i| KmerWindow {
        kmer: &sequence[i..i + k],
        prefix: &sequence[i..i + k - 1],
        suffix: &sequence[i + 1..i + k],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chop_single_window() {
        let windows: Vec<_> = chop("GTAA", 4).collect();
        assert_eq!(windows.len(), 1);
        assert_eq!(windows[0].kmer, "GTAA");
        assert_eq!(windows[0].prefix, "GTA");
        assert_eq!(windows[0].suffix, "TAA");
    }

    #[test]
    fn test_chop_overlapping_windows() {
        let windows: Vec<_> = chop("CTCTAGCC", 6).collect();
        assert_eq!(windows.len(), 3);
        assert_eq!(windows[0].kmer, "CTCTAG");
        assert_eq!(windows[1].kmer, "TCTAGC");
        assert_eq!(windows[2].kmer, "CTAGCC");
        // Consecutive prefixes/suffixes overlap by k-2 characters
        assert_eq!(windows[0].suffix, windows[1].prefix);
        assert_eq!(windows[1].suffix, windows[2].prefix);
    }

    #[test]
    fn test_chop_kmer_is_prefix_plus_last_char() {
        for window in chop("TAGCCCCCT", 6) {
            let rebuilt = format!("{}{}", window.prefix, &window.suffix[window.suffix.len() - 1..]);
            assert_eq!(rebuilt, window.kmer);
        }
    }

    #[test]
    fn test_chop_too_short() {
        assert_eq!(chop("ACG", 4).count(), 0);
        assert_eq!(chop("", 2).count(), 0);
    }
}
