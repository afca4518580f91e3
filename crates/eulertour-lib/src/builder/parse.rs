//! FASTA/FASTQ parsing with automatic decompression.
//!
//! Reads DNA sequences from FASTA or FASTQ files, with transparent
//! gzip decompression. Validates DNA alphabet (A, C, G, T only).
//! This is the input-acquisition layer around the core; the graph
//! builder itself only ever sees plain strings.

use anyhow::{Context, Result};
use needletail::parse_fastx_file;
use std::path::Path;

/// Read all sequences from a FASTA/FASTQ file into owned strings
///
/// # Arguments
/// * `path` - Path to input file (may be gzipped)
///
/// # Errors
/// Returns error if:
/// - File cannot be opened
/// - File format is invalid
/// - Sequence contains non-DNA characters
pub fn read_sequences<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();

    // needletail automatically handles gzip decompression
    let mut reader = parse_fastx_file(path)
        .with_context(|| format!("Failed to open sequence file: {}", path.display()))?;

    let mut sequences = Vec::new();
    while let Some(record) = reader.next() {
        let record = record
            .with_context(|| format!("Failed to parse sequence record in {}", path.display()))?;

        let seq = record.seq();
        validate_dna_sequence(&seq)
            .with_context(|| format!("Invalid DNA sequence in {}", path.display()))?;

        // Uppercase so that reads differing only in case collapse
        // onto the same (k-1)-mer nodes
        let seq = String::from_utf8(seq.to_ascii_uppercase())
            .with_context(|| format!("Non-UTF8 sequence data in {}", path.display()))?;
        sequences.push(seq);
    }

    Ok(sequences)
}

/// Validate that a sequence contains only valid DNA bases (A, C, G, T)
///
/// # Errors
/// Returns error if sequence contains non-ACGT characters
pub fn validate_dna_sequence(seq: &[u8]) -> Result<()> {
    let is_dna = |base: u8| matches!(base.to_ascii_uppercase(), b'A' | b'C' | b'G' | b'T');
    if let Some(pos) = seq.iter().position(|&base| !is_dna(base)) {
        return Err(anyhow::anyhow!(
            "Invalid DNA base '{}' at position {}. Only A, C, G, T are allowed.",
            seq[pos] as char,
            pos
        ));
    }
    Ok(())
}
