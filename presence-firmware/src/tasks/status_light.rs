// Status Light Task - einziger Besitzer der RGB LED
use defmt::{debug, error, info, warn};
use embassy_time::Delay;
use embedded_hal_async::delay::DelayNs;
use esp_hal_smartled::smart_led_buffer;

use crate::config::RMT_CLOCK_MHZ;
use crate::hal::RmtLedWriter;
use crate::{LedWriter, LinkEvent, RadioEvent, RadioEventReceiver, StatusLight};

/// Status Light Logic - Testbare Business Logic ohne Hardware-Abhängigkeit
///
/// - Spielt einmalig die Startsequenz (Weiß, Fade-in) ab
/// - Verarbeitet danach Radio-Events strikt nacheinander
/// - Jedes Event läuft bis zum Ende, inkl. Connect-Flash; Events, die
///   währenddessen ankommen, warten im Channel
///
/// # Trait-basierte Abstraktion
/// Die generischen Parameter `L: LedWriter` und `D: DelayNs` ermöglichen:
/// - Real Hardware (RmtLedWriter, embassy_time::Delay) im Production-Code
/// - Mock Implementierungen in Tests
///
/// # Parameter
/// - `led`: LED Writer (Hardware oder Mock)
/// - `delay`: Zeitgeber für Animationen
/// - `event_receiver`: Channel Receiver für Events vom BLE Task
pub async fn status_light_logic<L: LedWriter, D: DelayNs>(
    led: L,
    delay: D,
    event_receiver: RadioEventReceiver,
) -> ! {
    let mut light = StatusLight::new(led, delay);

    info!("LED: Power-on fade...");
    if let Err(e) = light.power_on().await {
        error!("LED: Write failed during power-on: {}", e);
    }
    info!("LED: Ready, {}", light.state());

    loop {
        let event = event_receiver.receive().await;
        let link_event = event.as_link_event();

        if matches!(link_event, LinkEvent::Received([])) {
            debug!("LED: Empty write ignored");
            continue;
        }

        if let Err(e) = light.handle(link_event).await {
            error!("LED: {} while handling {}", e, link_event);
        }

        match event {
            RadioEvent::Connected => info!("LED: Connected, restored {}", light.state()),
            RadioEvent::Disconnected => info!("LED: Disconnected, keeping {}", light.state()),
            RadioEvent::Received(_) => {
                let status = light.state().status;
                if status.is_defined() {
                    info!("LED: Status {} ({})", status.label(), status.code());
                } else {
                    warn!("LED: Unrecognized status byte {}, showing Unknown", status.code());
                }
            }
        }
    }
}

/// Status Light Task - Embassy Task für parallele Ausführung
///
/// Dieser Task übernimmt die Hardware-Initialisierung und ruft dann
/// die testbare `status_light_logic()` Funktion auf.
///
/// # Parameter
/// - `gpio8`: GPIO8 Peripheral für LED-Datenleitung
/// - `rmt_peripheral`: RMT Peripheral für präzises Timing
/// - `event_receiver`: Channel Receiver für Events vom BLE Task
#[embassy_executor::task]
pub async fn status_light_task(
    gpio8: esp_hal::peripherals::GPIO8<'static>,
    rmt_peripheral: esp_hal::peripherals::RMT<'static>,
    event_receiver: RadioEventReceiver,
) {
    // Buffer für SmartLED Daten erstellen (1 LED)
    // Macro allokiert Speicher im richtigen Format für RMT
    let mut rmt_buffer = smart_led_buffer!(1);

    // Hardware initialisieren: RmtLedWriter kapselt RMT + SmartLED
    let led = RmtLedWriter::new(gpio8, rmt_peripheral, RMT_CLOCK_MHZ, &mut rmt_buffer);

    status_light_logic(led, Delay, event_receiver).await
}
