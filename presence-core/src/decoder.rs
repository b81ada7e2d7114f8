//! Status Decoder - eingehender Puffer → Status → Farbe

use crate::driver::OutputDriver;
use crate::logic::color_for;
use crate::traits::{LedError, LedWriter};
use crate::types::StatusCode;

/// Liest den Status aus dem ersten Byte, weitere Bytes werden ignoriert
pub fn decode(payload: &[u8]) -> Option<StatusCode> {
    payload.first().copied().map(StatusCode::from)
}

/// Hält den aktuellen Status und wendet empfangene Status auf die LED an
#[derive(Debug, Default)]
pub struct StatusDecoder {
    current: StatusCode,
}

impl StatusDecoder {
    pub const fn new() -> Self {
        Self {
            current: StatusCode::Unknown,
        }
    }

    pub fn current(&self) -> StatusCode {
        self.current
    }

    /// Verarbeitet einen empfangenen Puffer
    ///
    /// - Leerer Puffer: no-op, `Ok(None)`
    /// - Sonst: Status wird immer überschrieben und die Farbe immer neu
    ///   geschrieben, auch wenn sich nichts geändert hat. Die LED kann nach
    ///   einer gestörten Verbindung falsch stehen und wird so repariert.
    pub fn on_receive<W: LedWriter, D>(
        &mut self,
        payload: &[u8],
        driver: &mut OutputDriver<W, D>,
    ) -> Result<Option<StatusCode>, LedError> {
        let Some(status) = decode(payload) else {
            return Ok(None);
        };
        self.current = status;
        driver.set_color(color_for(status))?;
        Ok(Some(status))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_empty() {
        assert_eq!(decode(&[]), None);
    }

    #[test]
    fn test_decode_uses_first_byte_only() {
        assert_eq!(decode(&[7, 0, 1]), Some(StatusCode::InAMeeting));
    }

    #[test]
    fn test_decode_out_of_range() {
        assert_eq!(decode(&[200]), Some(StatusCode::Unrecognized(200)));
    }
}
