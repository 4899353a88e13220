//! Capacity-checked vector growth.

use crate::error::CapacityError;

/// Make room for one more element, doubling the allocation when full.
///
/// `Vec::push` would grow on its own, but it aborts the process when the
/// allocator refuses; routing growth through `try_reserve` lets the caller
/// report the refusal as a lex error instead.
pub(crate) fn ensure_push_capacity<T>(v: &mut Vec<T>) -> Result<(), CapacityError> {
    if v.len() < v.capacity() {
        return Ok(());
    }
    let additional = v.capacity().max(64);
    v.try_reserve(additional).map_err(|_| CapacityError)
}
