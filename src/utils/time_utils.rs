use std::ops::Add;
use std::time::Duration;

use chrono::NaiveDate;

/// Monotonic instant that works on both native and wasm32 targets.
/// std::time::Instant panics in the browser; web_time polyfills it there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct AppInstant(web_time::Instant);

impl AppInstant {
    pub fn now() -> Self {
        Self(web_time::Instant::now())
    }

    pub fn elapsed(&self) -> Duration {
        self.0.elapsed()
    }

    /// Saturates to zero when `earlier` is actually later.
    pub fn duration_since(&self, earlier: AppInstant) -> Duration {
        self.0.saturating_duration_since(earlier.0)
    }
}

impl Add<Duration> for AppInstant {
    type Output = AppInstant;

    fn add(self, rhs: Duration) -> Self::Output {
        Self(self.0 + rhs)
    }
}

/// Short axis/tooltip date, e.g. "Mar 04".
pub(crate) fn short_date(date: NaiveDate) -> String {
    date.format("%b %d").to_string()
}
