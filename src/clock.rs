//! Wall-clock readings in 100-nanosecond ticks.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Number of 100-nanosecond intervals between the Gregorian epoch (1582-10-15T00:00:00Z) and
/// the Unix epoch (1970-01-01T00:00:00Z).
pub const GREGORIAN_TO_UNIX_TICKS: u64 = 0x01b2_1dd2_1381_4000;

/// A trait for clocks that report 100-nanosecond ticks since the Gregorian epoch.
///
/// Takes `&self` so that one clock can serve a generator shared across threads.
///
/// # Examples
///
/// ```rust
/// use uuid6::TimeSource;
///
/// struct FixedTime;
/// impl TimeSource for FixedTime {
///     fn gregorian_ticks(&self) -> u64 {
///         0x1ec_9414_c232_ab00
///     }
/// }
///
/// assert_eq!(FixedTime.gregorian_ticks(), 0x1ec_9414_c232_ab00);
/// ```
pub trait TimeSource {
    /// Returns the current count of 100-nanosecond intervals since the Gregorian epoch.
    fn gregorian_ticks(&self) -> u64;
}

/// The system real-time clock.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    fn gregorian_ticks(&self) -> u64 {
        gregorian_epoch_ticks()
    }
}

/// Returns the number of 100-nanosecond intervals elapsed since the Unix epoch.
///
/// A system clock set before 1970 reads as the Unix epoch itself.
pub fn unix_epoch_ticks() -> u64 {
    to_ticks(
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default(),
    )
}

/// Returns the number of 100-nanosecond intervals elapsed since the Gregorian epoch.
pub fn gregorian_epoch_ticks() -> u64 {
    GREGORIAN_TO_UNIX_TICKS + unix_epoch_ticks()
}

fn to_ticks(elapsed: Duration) -> u64 {
    elapsed.as_secs() * 10_000_000 + (elapsed.subsec_nanos() / 100) as u64
}
