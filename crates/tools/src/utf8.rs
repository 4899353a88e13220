//! Incremental UTF-8 decoding for streaming byte sources.
//!
//! Multi-byte sequences split across chunk boundaries are preserved via a
//! small carry buffer; invalid sequences decode to U+FFFD and decoding
//! continues. A byte-order mark at the very start of the stream is dropped
//! (the tokenizer never sees it).

use std::fs;
use std::io;
use std::path::Path;

const BOM: u32 = 0xFEFF;
const REPLACEMENT: u32 = 0xFFFD;

/// Streaming UTF-8 to code-point decoder.
#[derive(Debug)]
pub struct Utf8Decoder {
    /// Incomplete UTF-8 suffix from the previous chunk (at most 3 bytes).
    carry: Vec<u8>,
    /// Set until the first scalar has been seen, for BOM skipping.
    before_first_scalar: bool,
}

impl Default for Utf8Decoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Utf8Decoder {
    pub fn new() -> Self {
        Self {
            carry: Vec::new(),
            before_first_scalar: true,
        }
    }

    /// Decode a byte chunk, appending code points to `out`.
    pub fn push_bytes(&mut self, bytes: &[u8], out: &mut Vec<u32>) {
        if bytes.is_empty() {
            return;
        }

        if self.carry.is_empty() {
            self.decode(bytes, out);
            return;
        }

        // The carry is only an incomplete UTF-8 suffix, so it is small
        // (<= 3 bytes). Resolve it with just enough prefix bytes from this
        // chunk, then decode the rest without copying the full chunk.
        let mut remaining = bytes;
        while !self.carry.is_empty() && !remaining.is_empty() {
            let expected_len = utf8_seq_len(self.carry[0]);
            if expected_len == 0 {
                self.emit(REPLACEMENT, out);
                self.carry.clear();
                break;
            }

            let needed = expected_len.saturating_sub(self.carry.len());
            if needed == 0 {
                let pending = std::mem::take(&mut self.carry);
                self.decode(&pending, out);
                continue;
            }

            if remaining.len() < needed {
                self.carry.extend_from_slice(remaining);
                return;
            }

            let mut scratch = [0u8; 8];
            let carry_len = self.carry.len();
            scratch[..carry_len].copy_from_slice(&self.carry);
            scratch[carry_len..carry_len + needed].copy_from_slice(&remaining[..needed]);
            self.carry.clear();
            self.decode_resolved(&scratch[..carry_len + needed], out);
            remaining = &remaining[needed..];
        }

        if !remaining.is_empty() {
            self.decode(remaining, out);
        }
    }

    /// Flush a dangling incomplete sequence as U+FFFD so the stream is never
    /// silently truncated on completion.
    pub fn finish(&mut self, out: &mut Vec<u32>) {
        if self.carry.is_empty() {
            return;
        }
        self.carry.clear();
        self.emit(REPLACEMENT, out);
    }

    fn decode(&mut self, bytes: &[u8], out: &mut Vec<u32>) {
        let mut rest = bytes;
        loop {
            match std::str::from_utf8(rest) {
                Ok(text) => {
                    for ch in text.chars() {
                        self.emit(ch as u32, out);
                    }
                    return;
                }
                Err(err) => {
                    let valid = &rest[..err.valid_up_to()];
                    for ch in std::str::from_utf8(valid).unwrap_or("").chars() {
                        self.emit(ch as u32, out);
                    }
                    let after = &rest[err.valid_up_to()..];
                    match err.error_len() {
                        Some(bad) => {
                            self.emit(REPLACEMENT, out);
                            rest = &after[bad..];
                        }
                        None => {
                            // Incomplete suffix: keep it for the next chunk.
                            self.carry.extend_from_slice(after);
                            return;
                        }
                    }
                }
            }
        }
    }

    /// Like `decode`, but for a carry-resolved sequence that can no longer be
    /// incomplete: anything invalid here is a hard replacement.
    fn decode_resolved(&mut self, bytes: &[u8], out: &mut Vec<u32>) {
        match std::str::from_utf8(bytes) {
            Ok(text) => {
                for ch in text.chars() {
                    self.emit(ch as u32, out);
                }
            }
            Err(_) => self.emit(REPLACEMENT, out),
        }
    }

    fn emit(&mut self, cp: u32, out: &mut Vec<u32>) {
        if self.before_first_scalar {
            self.before_first_scalar = false;
            if cp == BOM {
                return;
            }
        }
        out.push(cp);
    }
}

/// Decode already-validated text, still honoring the leading-BOM skip.
pub fn decode_str(text: &str) -> Vec<u32> {
    let mut out = Vec::with_capacity(text.len());
    let mut chars = text.chars();
    let mut first = chars.next();
    if first == Some('\u{FEFF}') {
        first = chars.next();
    }
    if let Some(ch) = first {
        out.push(ch as u32);
        out.extend(chars.map(|c| c as u32));
    }
    out
}

/// Read and decode a whole file.
pub fn decode_file(path: &Path) -> io::Result<Vec<u32>> {
    let bytes = fs::read(path)?;
    let mut out = Vec::with_capacity(bytes.len());
    let mut decoder = Utf8Decoder::new();
    decoder.push_bytes(&bytes, &mut out);
    decoder.finish(&mut out);
    Ok(out)
}

fn utf8_seq_len(first: u8) -> usize {
    match first {
        0x00..=0x7F => 1,
        0xC2..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF4 => 4,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode_in_chunks(chunks: &[&[u8]]) -> Vec<u32> {
        let mut out = Vec::new();
        let mut decoder = Utf8Decoder::new();
        for chunk in chunks {
            decoder.push_bytes(chunk, &mut out);
        }
        decoder.finish(&mut out);
        out
    }

    fn as_text(cps: &[u32]) -> String {
        cps.iter().map(|&cp| char::from_u32(cp).unwrap()).collect()
    }

    #[test]
    fn whole_buffer_decodes_to_code_points() {
        let out = decode_in_chunks(&["aé\u{1F600}".as_bytes()]);
        assert_eq!(as_text(&out), "aé\u{1F600}");
    }

    #[test]
    fn multi_byte_sequences_survive_any_split() {
        let text = "xé\u{20AC}\u{1F600}y";
        let bytes = text.as_bytes();
        for split in 1..bytes.len() {
            let out = decode_in_chunks(&[&bytes[..split], &bytes[split..]]);
            assert_eq!(as_text(&out), text, "split at byte {split}");
        }
    }

    #[test]
    fn one_byte_at_a_time_matches_whole_buffer() {
        let text = "a\u{10FFFF}b";
        let chunks: Vec<&[u8]> = text.as_bytes().chunks(1).collect();
        let out = decode_in_chunks(&chunks);
        assert_eq!(as_text(&out), text);
    }

    #[test]
    fn invalid_bytes_decode_to_replacement_and_continue() {
        let out = decode_in_chunks(&[b"a\xFFb"]);
        assert_eq!(as_text(&out), "a\u{FFFD}b");
    }

    #[test]
    fn truncated_final_sequence_flushes_as_replacement() {
        let out = decode_in_chunks(&[&"é".as_bytes()[..1]]);
        assert_eq!(as_text(&out), "\u{FFFD}");
    }

    #[test]
    fn leading_bom_is_skipped() {
        let out = decode_in_chunks(&["\u{FEFF}x".as_bytes()]);
        assert_eq!(as_text(&out), "x");
    }

    #[test]
    fn bom_split_across_chunks_is_still_skipped() {
        let bom_then_x = "\u{FEFF}x".as_bytes();
        let out = decode_in_chunks(&[&bom_then_x[..1], &bom_then_x[1..]]);
        assert_eq!(as_text(&out), "x");
    }

    #[test]
    fn non_leading_bom_is_preserved() {
        let out = decode_in_chunks(&["x\u{FEFF}y".as_bytes()]);
        assert_eq!(as_text(&out), "x\u{FEFF}y");
    }

    #[test]
    fn decode_str_skips_a_leading_bom_only() {
        assert_eq!(as_text(&decode_str("\u{FEFF}ab")), "ab");
        assert_eq!(as_text(&decode_str("a\u{FEFF}b")), "a\u{FEFF}b");
        assert!(decode_str("").is_empty());
    }
}
