//! Columnar token storage with typed value arenas.

use crate::code_point::CodePoint;
use crate::error::CapacityError;
use crate::grow::ensure_push_capacity;

/// Append-only token table.
///
/// Tokens live in parallel columns (kind, exclusive source end, two
/// kind-specific slots); string, integer, and float values live in separate
/// arenas the slots index into. Nothing is mutated after a token is pushed.
///
/// Invariants:
/// - `end` is non-decreasing across pushes.
/// - The string-value watermark advances to the arena length at every push
///   and never retreats; `truncate_values` only discards entries above it.
#[derive(Debug)]
pub struct TokenTable<K> {
    kinds: Vec<K>,
    ends: Vec<u32>,
    slot_a: Vec<u32>,
    slot_b: Vec<u32>,
    string_values: Vec<CodePoint>,
    ints: Vec<i64>,
    floats: Vec<f64>,
    watermark: u32,
}

impl<K: Copy> TokenTable<K> {
    /// `size_hint` is the expected input length in code points; token and
    /// value capacity is reserved proportionally.
    pub fn with_size_hint(size_hint: usize) -> Self {
        Self {
            kinds: Vec::with_capacity(size_hint / 4),
            ends: Vec::with_capacity(size_hint / 4),
            slot_a: Vec::with_capacity(size_hint / 4),
            slot_b: Vec::with_capacity(size_hint / 4),
            string_values: Vec::with_capacity(size_hint / 2),
            ints: Vec::with_capacity(size_hint / 16),
            floats: Vec::with_capacity(size_hint / 16),
            watermark: 0,
        }
    }

    /// Append a token and commit the string arena up to its current length.
    pub fn push(&mut self, kind: K, end: u32, a: u32, b: u32) -> Result<u32, CapacityError> {
        debug_assert!(
            self.ends.last().is_none_or(|&prev| prev <= end),
            "token ends must be non-decreasing"
        );
        ensure_push_capacity(&mut self.kinds)?;
        ensure_push_capacity(&mut self.ends)?;
        ensure_push_capacity(&mut self.slot_a)?;
        ensure_push_capacity(&mut self.slot_b)?;
        let index = self.kinds.len() as u32;
        self.kinds.push(kind);
        self.ends.push(end);
        self.slot_a.push(a);
        self.slot_b.push(b);
        self.watermark = self.string_values.len() as u32;
        Ok(index)
    }

    /// Append one decoded code point to the string arena (above the
    /// watermark; it belongs to the in-progress token).
    pub fn push_value(&mut self, cp: CodePoint) -> Result<(), CapacityError> {
        ensure_push_capacity(&mut self.string_values)?;
        self.string_values.push(cp);
        Ok(())
    }

    /// Discard uncommitted string-arena entries (above the watermark).
    pub fn truncate_values(&mut self) {
        self.string_values.truncate(self.watermark as usize);
    }

    pub fn push_int(&mut self, value: i64) -> Result<u32, CapacityError> {
        ensure_push_capacity(&mut self.ints)?;
        let index = self.ints.len() as u32;
        self.ints.push(value);
        Ok(index)
    }

    pub fn push_float(&mut self, value: f64) -> Result<u32, CapacityError> {
        ensure_push_capacity(&mut self.floats)?;
        let index = self.floats.len() as u32;
        self.floats.push(value);
        Ok(index)
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    pub fn kind(&self, index: usize) -> K {
        self.kinds[index]
    }

    pub fn end(&self, index: usize) -> u32 {
        self.ends[index]
    }

    pub fn slot_a(&self, index: usize) -> u32 {
        self.slot_a[index]
    }

    pub fn slot_b(&self, index: usize) -> u32 {
        self.slot_b[index]
    }

    /// Source start of token `index`: the previous token's end, or 0.
    pub fn start(&self, index: usize) -> u32 {
        if index == 0 { 0 } else { self.ends[index - 1] }
    }

    /// Source end of the last token, or 0 when empty. This is where the
    /// in-progress token begins.
    pub fn last_end(&self) -> u32 {
        self.ends.last().copied().unwrap_or(0)
    }

    pub fn string_len(&self) -> u32 {
        self.string_values.len() as u32
    }

    pub fn watermark(&self) -> u32 {
        self.watermark
    }

    pub fn value_slice(&self, start: u32, end: u32) -> &[CodePoint] {
        &self.string_values[start as usize..end as usize]
    }

    pub fn string_value_at(&self, index: u32) -> CodePoint {
        self.string_values[index as usize]
    }

    pub fn int(&self, index: u32) -> i64 {
        self.ints[index as usize]
    }

    pub fn float(&self, index: u32) -> f64 {
        self.floats[index as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_commits_the_string_arena() {
        let mut table: TokenTable<u8> = TokenTable::with_size_hint(64);
        table.push_value('a' as u32).unwrap();
        table.push_value('b' as u32).unwrap();
        assert_eq!(table.watermark(), 0);
        let index = table.push(1, 2, 0, 2).unwrap();
        assert_eq!(index, 0);
        assert_eq!(table.watermark(), 2);
        assert_eq!(table.value_slice(0, 2), &['a' as u32, 'b' as u32]);
    }

    #[test]
    fn truncate_only_discards_uncommitted_values() {
        let mut table: TokenTable<u8> = TokenTable::with_size_hint(64);
        table.push_value('x' as u32).unwrap();
        table.push(1, 1, 0, 1).unwrap();
        table.push_value('y' as u32).unwrap();
        table.truncate_values();
        assert_eq!(table.string_len(), 1);
        assert_eq!(table.value_slice(0, 1), &['x' as u32]);
    }

    #[test]
    fn start_is_previous_end_or_zero() {
        let mut table: TokenTable<u8> = TokenTable::with_size_hint(64);
        table.push(1, 3, 0, 0).unwrap();
        table.push(2, 5, 0, 0).unwrap();
        assert_eq!(table.start(0), 0);
        assert_eq!(table.start(1), 3);
        assert_eq!(table.last_end(), 5);
    }

    #[test]
    fn typed_arenas_hand_back_indices() {
        let mut table: TokenTable<u8> = TokenTable::with_size_hint(64);
        assert_eq!(table.push_int(-7).unwrap(), 0);
        assert_eq!(table.push_float(0.5).unwrap(), 0);
        assert_eq!(table.push_int(10).unwrap(), 1);
        assert_eq!(table.int(1), 10);
        assert_eq!(table.float(0), 0.5);
    }
}
