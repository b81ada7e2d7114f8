//! Output Driver - einzige Komponente mit Zugriff auf die LED
//!
//! Merkt sich die zuletzt gesetzte Farbe (für Save/Restore um Animationen
//! herum) und spielt die Animationen ab.

use embedded_hal_async::delay::DelayNs;

use crate::animation::{self, Step};
use crate::traits::{LedError, LedWriter};
use crate::types::{Color, WHITE};

/// Output Driver
///
/// # Trait-basierte Abstraktion
/// - `W: LedWriter` - Real Hardware (RmtLedWriter) oder Mock
/// - `D: DelayNs` - `embassy_time::Delay` auf dem Target, Mock in Tests
pub struct OutputDriver<W, D> {
    writer: W,
    delay: D,
    current: Color,
    write_count: usize,
}

impl<W: LedWriter, D> OutputDriver<W, D> {
    /// Erstellt einen neuen Driver. Die Start-Farbe ist Weiß, geschrieben
    /// wird erst beim ersten `set_color()`.
    pub fn new(writer: W, delay: D) -> Self {
        Self {
            writer,
            delay,
            current: WHITE,
            write_count: 0,
        }
    }

    /// Schreibt die Farbe auf die LED und merkt sie sich als aktuelle Farbe
    ///
    /// Die Farbe wird auch bei einem Schreibfehler übernommen: sie ist der
    /// Soll-Zustand, den das nächste `set_color()` erneut durchsetzt.
    pub fn set_color(&mut self, color: Color) -> Result<(), LedError> {
        self.current = color;
        self.write_count += 1;
        self.writer.write(color)
    }

    /// Zuletzt gesetzte Farbe
    pub fn current_color(&self) -> Color {
        self.current
    }

    /// Anzahl der `set_color()` Aufrufe seit dem Start
    pub fn write_count(&self) -> usize {
        self.write_count
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    pub fn delay(&self) -> &D {
        &self.delay
    }
}

impl<W: LedWriter, D: DelayNs> OutputDriver<W, D> {
    /// Spielt die Schritte bis zum Ende ab
    ///
    /// Ein Schreibfehler bricht die Animation nicht ab, der erste Fehler
    /// wird nach dem letzten Schritt zurückgegeben.
    pub async fn play<I>(&mut self, steps: I) -> Result<(), LedError>
    where
        I: IntoIterator<Item = Step>,
    {
        let mut result = Ok(());
        for step in steps {
            let written = self.set_color(step.color);
            if result.is_ok() {
                result = written;
            }
            if step.hold_ms > 0 {
                self.delay.delay_ms(step.hold_ms).await;
            }
        }
        result
    }

    /// Blinkt `times` mal Weiß/Aus und stellt danach die vorherige Farbe
    /// exakt wieder her. Dauer: `times * 2 * interval_ms`.
    pub async fn flash(&mut self, times: u32, interval_ms: u32) -> Result<(), LedError> {
        let saved = self.current;
        let flashed = self.play(animation::connect_flash(times, interval_ms)).await;
        let restored = self.set_color(saved);
        flashed.and(restored)
    }

    /// Power-on Fade, endet auf Weiß
    pub async fn fade_in(&mut self) -> Result<(), LedError> {
        self.play(animation::fade_in()).await
    }
}
