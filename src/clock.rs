use chrono::Utc;

/// Source of wall-clock time for computed variables.
pub trait Clock {
    /// Milliseconds since the Unix epoch.
    fn now_millis(&self) -> i64;

    /// Whole seconds since the Unix epoch, rounded to nearest.
    fn now_secs(&self) -> i64 {
        millis_to_secs(self.now_millis())
    }
}

/// Rounds milliseconds to the nearest second; halves round up. Saturates at
/// the ends of the `i64` range.
pub fn millis_to_secs(millis: i64) -> i64 {
    millis.saturating_add(500).div_euclid(1000)
}

/// Largest `|secs|` a [`FixedClock`] holds without clamping.
pub const MAX_FIXED_SECS: i64 = i64::MAX / 1000;

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

/// A clock pinned to one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    millis: i64,
}

impl FixedClock {
    pub fn from_millis(millis: i64) -> Self {
        FixedClock { millis }
    }

    /// Clamps to the `i64` millisecond range past [`MAX_FIXED_SECS`].
    pub fn from_secs(secs: i64) -> Self {
        FixedClock {
            millis: secs.saturating_mul(1000),
        }
    }
}

impl Clock for FixedClock {
    fn now_millis(&self) -> i64 {
        self.millis
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_millis(&self) -> i64 {
        (**self).now_millis()
    }
}
