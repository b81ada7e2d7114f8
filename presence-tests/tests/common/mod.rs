//! Mocks für Host-Tests: LED Writer und Delay

#![allow(dead_code)]

use embedded_hal_async::delay::DelayNs;
use presence_core::{Color, LedError, LedWriter, StatusLight};

// ============================================================================
// Mock LED Writer
// ============================================================================

#[derive(Default)]
pub struct MockLedWriter {
    pub last_color: Option<Color>,
    pub write_count: usize,
    pub fail_next_write: bool,
    /// Lässt den n-ten Schreibversuch (0-basiert) fehlschlagen
    pub fail_at_attempt: Option<usize>,
    pub attempts: usize,
    /// Alle erfolgreich geschriebenen Farben in Reihenfolge
    pub history: Vec<Color>,
}

impl MockLedWriter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LedWriter for MockLedWriter {
    fn write(&mut self, color: Color) -> Result<(), LedError> {
        let attempt = self.attempts;
        self.attempts += 1;
        if self.fail_at_attempt == Some(attempt) {
            return Err(LedError::WriteFailed);
        }
        if self.fail_next_write {
            self.fail_next_write = false;
            return Err(LedError::WriteFailed);
        }

        self.last_color = Some(color);
        self.write_count += 1;
        self.history.push(color);
        Ok(())
    }
}

// ============================================================================
// Mock Delay
// ============================================================================

/// Wartet nicht, merkt sich nur die angeforderten Millisekunden
#[derive(Default)]
pub struct MockDelay {
    pub waits_ms: Vec<u32>,
}

impl MockDelay {
    pub fn total_ms(&self) -> u32 {
        self.waits_ms.iter().sum()
    }
}

impl DelayNs for MockDelay {
    async fn delay_ns(&mut self, ns: u32) {
        self.waits_ms.push(ns / 1_000_000);
    }

    async fn delay_ms(&mut self, ms: u32) {
        self.waits_ms.push(ms);
    }
}

pub type TestLight = StatusLight<MockLedWriter, MockDelay>;

pub fn new_light() -> TestLight {
    StatusLight::new(MockLedWriter::new(), MockDelay::default())
}

pub fn writes(light: &TestLight) -> &[Color] {
    &light.driver().writer().history
}
