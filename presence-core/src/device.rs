//! StatusLight - besitzt den gesamten Gerätezustand
//!
//! Komponiert Decoder, Link Controller und Output Driver. Alle Events
//! laufen über `handle()`, das von genau einer Stelle (dem LED-Task)
//! nacheinander aufgerufen wird.

use embedded_hal_async::delay::DelayNs;

use crate::decoder::StatusDecoder;
use crate::driver::OutputDriver;
use crate::events::LinkEvent;
use crate::link::{LinkController, LinkState};
use crate::traits::{LedError, LedWriter};
use crate::types::{DeviceState, WHITE};

pub struct StatusLight<W, D> {
    driver: OutputDriver<W, D>,
    decoder: StatusDecoder,
    link: LinkController,
    ready: bool,
}

impl<W: LedWriter, D: DelayNs> StatusLight<W, D> {
    pub fn new(writer: W, delay: D) -> Self {
        Self {
            driver: OutputDriver::new(writer, delay),
            decoder: StatusDecoder::new(),
            link: LinkController::new(),
            ready: false,
        }
    }

    /// Startsequenz: Weiß setzen, Fade-in abspielen
    ///
    /// Läuft nur einmal, weitere Aufrufe sind no-ops.
    pub async fn power_on(&mut self) -> Result<(), LedError> {
        if self.ready {
            return Ok(());
        }
        let initial = self.driver.set_color(WHITE);
        let faded = self.driver.fade_in().await;
        self.ready = true;
        initial.and(faded)
    }

    /// Verarbeitet ein Event bis zum Ende (inkl. Animationen)
    pub async fn handle(&mut self, event: LinkEvent<'_>) -> Result<(), LedError> {
        match event {
            LinkEvent::Connected => {
                self.link
                    .on_connected(self.decoder.current(), &mut self.driver)
                    .await
            }
            LinkEvent::Disconnected => {
                self.link.on_disconnected();
                Ok(())
            }
            LinkEvent::Received(payload) => self
                .decoder
                .on_receive(payload, &mut self.driver)
                .map(|_| ()),
        }
    }

    pub fn state(&self) -> DeviceState {
        DeviceState {
            status: self.decoder.current(),
            color: self.driver.current_color(),
        }
    }

    pub fn link_state(&self) -> LinkState {
        self.link.state()
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    pub fn driver(&self) -> &OutputDriver<W, D> {
        &self.driver
    }
}
