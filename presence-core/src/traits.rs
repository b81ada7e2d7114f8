//! Hardware Abstraction Traits
//!
//! Diese Traits definieren Schnittstellen für Hardware-Zugriff
//! ohne konkrete Implementierung.

use core::fmt;

use crate::types::Color;

/// Fehler-Typ für LED-Operationen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LedError {
    WriteFailed,
}

impl fmt::Display for LedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LedError::WriteFailed => f.write_str("LED write failed"),
        }
    }
}

impl core::error::Error for LedError {}

/// Trait für den Zugriff auf die RGB LED
///
/// Setzt alle drei Kanäle auf einen absoluten Wert (kein Delta).
///
/// # Implementierungen
/// - **Production:** RmtLedWriter (ESP32 RMT Peripheral)
/// - **Testing:** MockLedWriter (in-memory Mock)
pub trait LedWriter {
    /// Schreibt eine RGB-Farbe auf die LED
    ///
    /// # Fehlerbehandlung
    /// Gibt `LedError::WriteFailed` zurück wenn Hardware-Zugriff fehlschlägt
    fn write(&mut self, color: Color) -> Result<(), LedError>;
}

impl<W: LedWriter + ?Sized> LedWriter for &mut W {
    fn write(&mut self, color: Color) -> Result<(), LedError> {
        (**self).write(color)
    }
}
