//! Animationen als Folge von (Farbe, Haltezeit)-Schritten
//!
//! Die Schritte werden vom `OutputDriver` nacheinander abgespielt. Die
//! Iteratoren selbst kennen weder Hardware noch Zeitgeber.

use crate::types::{BLACK, Color, WHITE};

/// Anzahl Weiß/Aus-Zyklen beim Verbindungsaufbau
pub const CONNECT_FLASH_TIMES: u32 = 3;

/// Dauer einer Phase (an oder aus) beim Connect-Flash
pub const CONNECT_FLASH_INTERVAL_MS: u32 = 100;

/// Helligkeits-Schrittweite der Fade-in-Rampe
pub const FADE_STEP: u8 = 5;

/// Haltezeit pro Rampen-Schritt
pub const FADE_STEP_MS: u32 = 10;

/// Haltezeit nach dem letzten Rampen-Schritt
pub const FADE_HOLD_MS: u32 = 500;

/// Ein Schritt einer Animation: Farbe setzen, dann `hold_ms` warten
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub color: Color,
    pub hold_ms: u32,
}

/// Graustufe mit gleichem Wert auf allen Kanälen
pub const fn gray(level: u8) -> Color {
    Color {
        r: level,
        g: level,
        b: level,
    }
}

/// Connect-Flash: `times` mal Weiß, dann Aus, je `interval_ms`
pub fn connect_flash(times: u32, interval_ms: u32) -> ConnectFlash {
    ConnectFlash {
        phase: 0,
        phases: times.saturating_mul(2),
        interval_ms,
    }
}

/// Iterator für den Connect-Flash (siehe [`connect_flash`])
#[derive(Debug, Clone)]
pub struct ConnectFlash {
    phase: u32,
    phases: u32,
    interval_ms: u32,
}

impl Iterator for ConnectFlash {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        if self.phase >= self.phases {
            return None;
        }
        let color = if self.phase % 2 == 0 { WHITE } else { BLACK };
        self.phase += 1;
        Some(Step {
            color,
            hold_ms: self.interval_ms,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.phases - self.phase) as usize;
        (remaining, Some(remaining))
    }
}

/// Power-on Fade: Graustufen-Rampe 0, 5, ..., 255, Halten, dann Weiß
///
/// Der letzte Rampen-Wert wird auf 255 begrenzt. Die Haltezeit hängt am
/// letzten Rampen-Schritt, der abschließende Weiß-Schritt hat keine
/// Haltezeit mehr.
pub fn fade_in() -> FadeIn {
    FadeIn {
        level: Some(0),
        settled: false,
    }
}

/// Iterator für den Power-on Fade (siehe [`fade_in`])
#[derive(Debug, Clone)]
pub struct FadeIn {
    level: Option<u16>,
    settled: bool,
}

impl Iterator for FadeIn {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        if let Some(level) = self.level {
            let clamped = level.min(u16::from(u8::MAX)) as u8;
            let last = clamped == u8::MAX;
            self.level = if last {
                None
            } else {
                Some(level + u16::from(FADE_STEP))
            };
            let hold_ms = if last {
                FADE_STEP_MS + FADE_HOLD_MS
            } else {
                FADE_STEP_MS
            };
            return Some(Step {
                color: gray(clamped),
                hold_ms,
            });
        }

        if self.settled {
            return None;
        }
        self.settled = true;
        Some(Step {
            color: WHITE,
            hold_ms: 0,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connect_flash_alternates_white_black() {
        let mut it = connect_flash(3, 100);
        for i in 0..6 {
            let step = it.next().unwrap();
            let expected = if i % 2 == 0 { WHITE } else { BLACK };
            assert_eq!(step.color, expected);
            assert_eq!(step.hold_ms, 100);
        }
        assert_eq!(it.next(), None);
    }

    #[test]
    fn test_connect_flash_zero_times_is_empty() {
        assert_eq!(connect_flash(0, 100).next(), None);
    }

    #[test]
    fn test_connect_flash_total_duration() {
        let total: u32 = connect_flash(3, 100).map(|s| s.hold_ms).sum();
        assert_eq!(total, 3 * 2 * 100);
    }

    #[test]
    fn test_fade_in_ramp_levels() {
        let mut expected = 0u8;
        let mut ramp = 0;
        for step in fade_in().take(52) {
            assert_eq!(step.color, gray(expected));
            expected = expected.saturating_add(FADE_STEP);
            ramp += 1;
        }
        assert_eq!(ramp, 52);
    }

    #[test]
    fn test_fade_in_ends_white_after_hold() {
        let mut it = fade_in().skip(51);
        let last_ramp = it.next().unwrap();
        assert_eq!(last_ramp.color, gray(255));
        assert_eq!(last_ramp.hold_ms, FADE_STEP_MS + FADE_HOLD_MS);

        let settle = it.next().unwrap();
        assert_eq!(settle, Step { color: WHITE, hold_ms: 0 });
        assert_eq!(it.next(), None);
    }

    #[test]
    fn test_fade_in_total_duration() {
        let total: u32 = fade_in().map(|s| s.hold_ms).sum();
        assert_eq!(total, 52 * FADE_STEP_MS + FADE_HOLD_MS);
    }
}
