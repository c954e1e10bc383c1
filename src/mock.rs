//! Test doubles shared by the unit tests.

use crate::gpio::{Button, Led, Level};
use crate::time::{TimeDuration, TimeInstant, TimeSource};
use core::cell::Cell;
use heapless::Vec;

// Mock Duration type
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestDuration(pub u64);

impl TimeDuration for TestDuration {
    const ZERO: Self = TestDuration(0);

    fn as_millis(&self) -> u64 {
        self.0
    }

    fn from_millis(millis: u64) -> Self {
        TestDuration(millis)
    }
}

// Mock Instant type
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestInstant(pub u64);

impl TimeInstant for TestInstant {
    type Duration = TestDuration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        TestDuration(self.0 - earlier.0)
    }

    fn checked_add(self, duration: Self::Duration) -> Option<Self> {
        self.0.checked_add(duration.0).map(TestInstant)
    }
}

// Mock time source with controllable time
pub struct MockTimeSource {
    current_time: Cell<TestInstant>,
}

impl MockTimeSource {
    pub fn new() -> Self {
        Self {
            current_time: Cell::new(TestInstant(0)),
        }
    }

    pub fn advance(&self, millis: u64) {
        let current = self.current_time.get();
        self.current_time.set(TestInstant(current.0 + millis));
    }

    pub fn set(&self, millis: u64) {
        self.current_time.set(TestInstant(millis));
    }
}

impl TimeSource<TestInstant> for MockTimeSource {
    fn now(&self) -> TestInstant {
        self.current_time.get()
    }
}

// Mock LED that records every write
pub struct MockLed {
    pub level: Level,
    pub history: Vec<Level, 64>,
}

impl MockLed {
    pub fn new() -> Self {
        Self {
            level: Level::Low,
            history: Vec::new(),
        }
    }
}

impl Led for MockLed {
    fn set_level(&mut self, level: Level) {
        self.level = level;
        let _ = self.history.push(level);
    }

    fn level(&self) -> Level {
        self.level
    }
}

// Mock button replaying a scripted sequence of samples, released once exhausted
pub struct ScriptedButton {
    samples: Vec<bool, 64>,
    next: usize,
}

impl ScriptedButton {
    pub fn new(samples: &[bool]) -> Self {
        let mut script = Vec::new();
        for &sample in samples {
            script.push(sample).unwrap();
        }
        Self {
            samples: script,
            next: 0,
        }
    }
}

impl Button for ScriptedButton {
    fn is_pressed(&mut self) -> bool {
        let sample = self.samples.get(self.next).copied().unwrap_or(false);
        self.next += 1;
        sample
    }
}
