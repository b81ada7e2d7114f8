//! Link Lifecycle Controller
//!
//! Zwei Zustände, ausschließlich von Notifications des Radio-Stacks
//! getrieben. Baut selbst keine Verbindungen auf.

use embedded_hal_async::delay::DelayNs;

use crate::animation::{CONNECT_FLASH_INTERVAL_MS, CONNECT_FLASH_TIMES};
use crate::driver::OutputDriver;
use crate::logic::color_for;
use crate::traits::{LedError, LedWriter};
use crate::types::StatusCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LinkState {
    #[default]
    Disconnected,
    Connected,
}

#[derive(Debug, Default)]
pub struct LinkController {
    state: LinkState,
}

impl LinkController {
    pub const fn new() -> Self {
        Self {
            state: LinkState::Disconnected,
        }
    }

    pub fn state(&self) -> LinkState {
        self.state
    }

    /// Verbindung aufgebaut: Connect-Flash, danach Farbe des aktuellen
    /// Status erneut setzen (repariert Drift während der Trennung)
    pub async fn on_connected<W: LedWriter, D: DelayNs>(
        &mut self,
        status: StatusCode,
        driver: &mut OutputDriver<W, D>,
    ) -> Result<(), LedError> {
        self.state = LinkState::Connected;
        let flashed = driver
            .flash(CONNECT_FLASH_TIMES, CONNECT_FLASH_INTERVAL_MS)
            .await;
        let applied = driver.set_color(color_for(status));
        flashed.and(applied)
    }

    /// Verbindung getrennt: LED behält die letzte Farbe
    pub fn on_disconnected(&mut self) {
        self.state = LinkState::Disconnected;
    }
}
