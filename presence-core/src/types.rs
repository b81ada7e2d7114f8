//! Core Types für die Status-Anzeige
//!
//! Datenstrukturen ohne Hardware-Dependencies

use rgb::RGB8;

/// Farbe der RGB LED (drei unabhängige 8-Bit-Kanäle, kein Alpha, kein Gamma)
pub type Color = RGB8;

pub const WHITE: Color = Color { r: 255, g: 255, b: 255 };
pub const BLACK: Color = Color { r: 0, g: 0, b: 0 };
pub const GREEN: Color = Color { r: 0, g: 255, b: 0 };
pub const RED: Color = Color { r: 255, g: 0, b: 0 };
pub const YELLOW: Color = Color { r: 255, g: 255, b: 0 };
pub const PURPLE: Color = Color { r: 128, g: 0, b: 128 };
pub const DIM_GRAY: Color = Color { r: 50, g: 50, b: 50 };

/// Präsenz-Status, wie er vom Host als einzelnes Byte gesendet wird
///
/// Die Konvertierung aus `u8` ist total: Bytes 0-10 ergeben einen der
/// definierten Status, alle anderen landen in `Unrecognized` und werden
/// wie `Unknown` dargestellt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StatusCode {
    Available,
    Busy,
    Away,
    BeRightBack,
    DoNotDisturb,
    Focusing,
    Presenting,
    InAMeeting,
    InACall,
    Offline,
    #[default]
    Unknown,
    /// Gültiges, aber nicht belegtes Byte (11-255)
    Unrecognized(u8),
}

impl StatusCode {
    /// Wire-Byte des Status
    pub const fn code(self) -> u8 {
        match self {
            Self::Available => 0,
            Self::Busy => 1,
            Self::Away => 2,
            Self::BeRightBack => 3,
            Self::DoNotDisturb => 4,
            Self::Focusing => 5,
            Self::Presenting => 6,
            Self::InAMeeting => 7,
            Self::InACall => 8,
            Self::Offline => 9,
            Self::Unknown => 10,
            Self::Unrecognized(byte) => byte,
        }
    }

    /// Total: jedes Byte ergibt einen Status
    pub const fn from_byte(byte: u8) -> Self {
        match byte {
            0 => Self::Available,
            1 => Self::Busy,
            2 => Self::Away,
            3 => Self::BeRightBack,
            4 => Self::DoNotDisturb,
            5 => Self::Focusing,
            6 => Self::Presenting,
            7 => Self::InAMeeting,
            8 => Self::InACall,
            9 => Self::Offline,
            10 => Self::Unknown,
            other => Self::Unrecognized(other),
        }
    }

    /// `false` nur für `Unrecognized`
    pub const fn is_defined(self) -> bool {
        !matches!(self, Self::Unrecognized(_))
    }

    /// Anzeigename (für Logs)
    pub const fn label(self) -> &'static str {
        match self {
            Self::Available => "Available",
            Self::Busy => "Busy",
            Self::Away => "Away",
            Self::BeRightBack => "Be Right Back",
            Self::DoNotDisturb => "Do Not Disturb",
            Self::Focusing => "Focusing",
            Self::Presenting => "Presenting",
            Self::InAMeeting => "In a Meeting",
            Self::InACall => "In a Call",
            Self::Offline => "Offline",
            Self::Unknown | Self::Unrecognized(_) => "Unknown",
        }
    }
}

impl From<u8> for StatusCode {
    fn from(byte: u8) -> Self {
        Self::from_byte(byte)
    }
}

impl From<StatusCode> for u8 {
    fn from(status: StatusCode) -> Self {
        status.code()
    }
}

/// Parst die Availability-Namen des Host-Publishers ("Available", "InAMeeting", ...)
impl core::convert::TryFrom<&str> for StatusCode {
    type Error = ();

    fn try_from(name: &str) -> Result<Self, Self::Error> {
        match name {
            "Available" => Ok(Self::Available),
            "Busy" => Ok(Self::Busy),
            "Away" => Ok(Self::Away),
            "BeRightBack" => Ok(Self::BeRightBack),
            "DoNotDisturb" => Ok(Self::DoNotDisturb),
            "Focusing" => Ok(Self::Focusing),
            "Presenting" => Ok(Self::Presenting),
            "InAMeeting" => Ok(Self::InAMeeting),
            "InACall" => Ok(Self::InACall),
            "Offline" => Ok(Self::Offline),
            "Unknown" => Ok(Self::Unknown),
            _ => Err(()),
        }
    }
}

/// Gesamter Zustand des Geräts (flüchtig, nach jedem Power-Cycle Unknown/Weiß)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceState {
    pub status: StatusCode,
    pub color: Color,
}

impl Default for DeviceState {
    fn default() -> Self {
        Self {
            status: StatusCode::Unknown,
            color: WHITE,
        }
    }
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for DeviceState {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "DeviceState {{ status: {} ({}), rgb: ({}, {}, {}) }}",
            self.status.label(),
            self.status.code(),
            self.color.r,
            self.color.g,
            self.color.b
        )
    }
}
