//! Index arithmetic shared by the lightbox cursor and the accordion.

use crate::utils::error::{Result, SalonError};

/// Returns an error when `index` is not a valid position in a sequence of `len`.
pub fn check_index(index: usize, len: usize) -> Result<()> {
    if index < len {
        Ok(())
    } else {
        Err(SalonError::IndexOutOfRange { index, len })
    }
}

/// Panics when `index` is out of range. Used by the infallible `open`/`toggle`
/// entry points, where a bad index is a bug in the composing layer.
#[track_caller]
pub fn assert_in_range(index: usize, len: usize, what: &str) {
    assert!(
        index < len,
        "{}: index {} out of range for length {}",
        what,
        index,
        len
    );
}

/// Next position, wrapping from the last element back to the first.
pub fn wrap_next(index: usize, len: usize) -> usize {
    debug_assert!(len > 0);
    (index + 1) % len
}

/// Previous position, wrapping from the first element to the last.
pub fn wrap_prev(index: usize, len: usize) -> usize {
    debug_assert!(len > 0);
    (index + len - 1) % len
}
