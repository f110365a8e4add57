//! Testability ports - injected clock and ID generation.
//!
//! The aggregate never reaches for ambient system calls; construction takes
//! these as explicit collaborators so tests can pin time and identity.

use chrono::{DateTime, Utc};
use uuid::Uuid;

pub trait ClockPort: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

pub trait RandomPort: Send + Sync {
    fn gen_uuid(&self) -> Uuid;
}

/// System clock - uses real time.
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl ClockPort for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// System random - uses real randomness.
pub struct SystemRandom;

impl SystemRandom {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomPort for SystemRandom {
    fn gen_uuid(&self) -> Uuid {
        Uuid::new_v4()
    }
}

/// Fixed clock for testing.
pub struct FixedClock(pub DateTime<Utc>);

impl ClockPort for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Fixed random for testing.
pub struct FixedRandom(pub Uuid);

impl RandomPort for FixedRandom {
    fn gen_uuid(&self) -> Uuid {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn fixed_clock_returns_pinned_time() {
        let now = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
        let clock = FixedClock(now);
        assert_eq!(clock.now(), now);
        assert_eq!(clock.now(), clock.now());
    }

    #[test]
    fn fixed_random_returns_pinned_uuid() {
        let random = FixedRandom(Uuid::nil());
        assert_eq!(random.gen_uuid(), Uuid::nil());
    }

    #[test]
    fn system_random_generates_unique_uuids() {
        let random = SystemRandom::new();
        assert_ne!(random.gen_uuid(), random.gen_uuid());
    }
}
