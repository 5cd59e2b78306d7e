//! Quality bounds and the clamped adjustments every bounded item goes through.
//!
//! These are pure functions of `(current, amount)`. The clamp limits the
//! adjustment only: a value already at or past a bound is left as it is, it
//! is neither pulled back into range nor pushed further out.

/// Lowest quality a bounded item can be lowered to.
pub const MIN_QUALITY: i64 = 0;

/// Highest quality a bounded item can be raised to.
pub const MAX_QUALITY: i64 = 50;

/// `current + amount`, capped at [`MAX_QUALITY`].
///
/// Unchanged if `current` is already at or above the cap.
pub fn raised(current: i64, amount: i64) -> i64 {
    if current >= MAX_QUALITY {
        return current;
    }
    current.saturating_add(amount).min(MAX_QUALITY)
}

/// `current - amount`, floored at [`MIN_QUALITY`].
///
/// Unchanged if `current` is already at or below the floor.
pub fn lowered(current: i64, amount: i64) -> i64 {
    if current <= MIN_QUALITY {
        return current;
    }
    current.saturating_sub(amount).max(MIN_QUALITY)
}
