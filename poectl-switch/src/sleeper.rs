//! Sleep abstraction for the power-cycle delay.
//!
//! `cycle_port` blocks between the off and on steps; the `Sleeper` trait
//! keeps that delay out of tests. The delay is a plain blocking sleep, not a
//! cancellable timer; a process kill mid-delay leaves the port off.

use std::sync::Mutex;
use std::time::Duration;

/// Trait for blocking delays.
pub trait Sleeper: Send + Sync {
    /// Sleep for the specified number of milliseconds.
    fn sleep_ms(&self, millis: u64);
}

/// Real sleeper that uses `std::thread::sleep`.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealSleeper;

impl RealSleeper {
    pub fn new() -> Self {
        Self
    }
}

impl Sleeper for RealSleeper {
    fn sleep_ms(&self, millis: u64) {
        std::thread::sleep(Duration::from_millis(millis));
    }
}

/// Mock sleeper for testing. Returns immediately and records every
/// requested delay.
#[derive(Debug, Default)]
pub struct MockSleeper {
    slept: Mutex<Vec<u64>>,
}

impl MockSleeper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delays requested so far, in order.
    pub fn slept(&self) -> Vec<u64> {
        self.slept.lock().expect("mock sleeper lock").clone()
    }
}

impl Sleeper for MockSleeper {
    fn sleep_ms(&self, millis: u64) {
        self.slept.lock().expect("mock sleeper lock").push(millis);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_sleeper_returns_immediately() {
        let sleeper = MockSleeper::new();
        let start = std::time::Instant::now();
        sleeper.sleep_ms(100_000);
        assert!(start.elapsed().as_millis() < 10);
    }

    #[test]
    fn test_mock_sleeper_records_delays() {
        let sleeper = MockSleeper::new();
        sleeper.sleep_ms(2000);
        sleeper.sleep_ms(500);
        assert_eq!(sleeper.slept(), vec![2000, 500]);
    }

    #[test]
    fn test_sleeper_trait_object() {
        let sleeper: Box<dyn Sleeper> = Box::new(MockSleeper::new());
        sleeper.sleep_ms(1);
    }
}
