//! Pure Business Logic Functions
//!
//! Funktionen ohne Hardware-Dependencies (testbar!)

use crate::types::{Color, DIM_GRAY, GREEN, PURPLE, RED, StatusCode, WHITE, YELLOW};

/// Farb-Policy: einzige Quelle der Zuordnung Status → Farbe
///
/// Total und ohne Seiteneffekte. Nicht belegte Bytes (11-255) werden wie
/// `Unknown` behandelt.
///
/// # Beispiele
///
/// ```
/// # use presence_core::{StatusCode, color_for};
/// # use rgb::RGB8;
/// assert_eq!(color_for(StatusCode::Available), RGB8 { r: 0, g: 255, b: 0 });
/// assert_eq!(color_for(StatusCode::from(200)), color_for(StatusCode::Unknown));
/// ```
pub const fn color_for(status: StatusCode) -> Color {
    match status {
        StatusCode::Available => GREEN,
        StatusCode::Busy | StatusCode::Presenting | StatusCode::InAMeeting | StatusCode::InACall => {
            RED
        }
        StatusCode::Away | StatusCode::BeRightBack => YELLOW,
        StatusCode::DoNotDisturb | StatusCode::Focusing => PURPLE,
        StatusCode::Offline => DIM_GRAY,
        StatusCode::Unknown | StatusCode::Unrecognized(_) => WHITE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_for_available_is_green() {
        assert_eq!(color_for(StatusCode::Available), Color { r: 0, g: 255, b: 0 });
    }

    #[test]
    fn test_color_for_red_group() {
        for status in [
            StatusCode::Busy,
            StatusCode::Presenting,
            StatusCode::InAMeeting,
            StatusCode::InACall,
        ] {
            assert_eq!(color_for(status), Color { r: 255, g: 0, b: 0 });
        }
    }

    #[test]
    fn test_color_for_away_group() {
        assert_eq!(color_for(StatusCode::Away), Color { r: 255, g: 255, b: 0 });
        assert_eq!(color_for(StatusCode::BeRightBack), Color { r: 255, g: 255, b: 0 });
    }

    #[test]
    fn test_color_for_dnd_group() {
        assert_eq!(color_for(StatusCode::DoNotDisturb), Color { r: 128, g: 0, b: 128 });
        assert_eq!(color_for(StatusCode::Focusing), Color { r: 128, g: 0, b: 128 });
    }

    #[test]
    fn test_color_for_offline_is_dim() {
        assert_eq!(color_for(StatusCode::Offline), Color { r: 50, g: 50, b: 50 });
    }

    #[test]
    fn test_color_for_out_of_range_is_white() {
        for byte in 11..=u8::MAX {
            assert_eq!(color_for(StatusCode::from(byte)), WHITE);
        }
    }
}
