// BLE Task - Peripheral mit GATT-Server (trouble-host)
//
// Übersetzt Connect/Disconnect/Write des Stacks in RadioEvents.
// Fasst die LED nie selbst an.
use bt_hci::controller::ExternalController;
use defmt::{debug, error, info, warn};
use embassy_futures::join::join;
use embassy_time::{Duration, Timer};
use esp_radio::ble::controller::BleConnector;
use trouble_host::prelude::*;

use crate::RadioEvent;
use crate::RadioEventSender;
use crate::config::*;

/// BLE Controller über HCI (esp-radio → bt-hci)
pub type BleController = ExternalController<BleConnector<'static>, HCI_SLOTS>;

/// GATT-Server mit RFduino-kompatiblem Layout
#[gatt_server]
struct Server {
    status_service: StatusService,
}

/// Status-Service: Host schreibt den Status in `inbox`
#[gatt_service(uuid = SERVICE_UUID)]
struct StatusService {
    /// Wird nie beschrieben oder notifiziert
    #[characteristic(uuid = READ_CHAR_UUID, read)]
    outbox: u8,
    #[characteristic(uuid = WRITE_CHAR_UUID, write, write_without_response)]
    inbox: heapless::Vec<u8, MAX_PAYLOAD_LEN>,
}

/// BLE Task - läuft parallel zum LED Task
///
/// - Baut den Host-Stack auf
/// - Advertised mit festem Namen, Payload und Intervall
/// - Akzeptiert genau eine Verbindung und leitet Events weiter
/// - Nach dem Disconnect wird sofort wieder advertised
///
/// # Parameter
/// - `controller`: HCI Controller (esp-radio BleConnector)
/// - `event_sender`: Channel Sender zum LED Task
#[embassy_executor::task]
pub async fn ble_task(controller: BleController, event_sender: RadioEventSender) {
    info!("BLE: Task started");

    let address = Address::random(BLE_ADDRESS);
    let mut resources: HostResources<DefaultPacketPool, CONNECTIONS_MAX, L2CAP_CHANNELS_MAX> =
        HostResources::new();
    let stack = trouble_host::new(controller, &mut resources).set_random_address(address);
    let Host {
        mut peripheral,
        runner,
        ..
    } = stack.build();

    let server = match Server::new_with_config(GapConfig::Peripheral(PeripheralConfig {
        name: DEVICE_NAME,
        appearance: &appearance::power_device::GENERIC_POWER_DEVICE,
    })) {
        Ok(server) => server,
        Err(e) => {
            error!("BLE: Failed to create GATT server: {}", e);
            return;
        }
    };

    join(runner_loop(runner), async {
        loop {
            match advertise(&mut peripheral, &server).await {
                Ok(conn) => {
                    event_sender.send(RadioEvent::Connected).await;
                    gatt_events(&server, &conn, &event_sender).await;
                    event_sender.send(RadioEvent::Disconnected).await;
                }
                Err(e) => {
                    warn!("BLE: Advertising failed: {}", e);
                    info!("BLE: Retrying in {}ms...", ADVERTISING_RETRY_DELAY_MS);
                    Timer::after(Duration::from_millis(ADVERTISING_RETRY_DELAY_MS)).await;
                }
            }
        }
    })
    .await;
}

/// Hält den Host-Stack am Laufen, startet ihn nach Fehlern neu
async fn runner_loop<C: Controller>(mut runner: Runner<'_, C, DefaultPacketPool>) {
    loop {
        if let Err(e) = runner.run().await {
            error!("BLE: Runner error: {}", e);
        }
    }
}

/// Startet das Advertising und wartet auf eine Verbindung
async fn advertise<'values, 'server, C: Controller>(
    peripheral: &mut Peripheral<'values, C, DefaultPacketPool>,
    server: &'server Server<'values>,
) -> Result<GattConnection<'values, 'server, DefaultPacketPool>, BleHostError<C::Error>> {
    let mut adv_data = [0u8; 31];
    let len = AdStructure::encode_slice(
        &[
            AdStructure::Flags(LE_GENERAL_DISCOVERABLE | BR_EDR_NOT_SUPPORTED),
            AdStructure::CompleteLocalName(DEVICE_NAME.as_bytes()),
            AdStructure::ManufacturerSpecificData {
                company_identifier: MANUFACTURER_ID,
                payload: ADVERTISEMENT_PAYLOAD,
            },
        ],
        &mut adv_data[..],
    )?;

    let interval = Duration::from_millis(ADVERTISING_INTERVAL_MS);
    let params = AdvertisementParameters {
        interval_min: interval,
        interval_max: interval,
        ..Default::default()
    };

    info!("BLE: Advertising as '{}'", DEVICE_NAME);
    let advertiser = peripheral
        .advertise(
            &params,
            Advertisement::ConnectableScannableUndirected {
                adv_data: &adv_data[..len],
                scan_data: &[],
            },
        )
        .await?;
    let conn = advertiser.accept().await?.with_attribute_server(server)?;
    info!("BLE: Connected");
    Ok(conn)
}

/// Leitet GATT-Writes auf die Inbox weiter, bis die Verbindung endet
async fn gatt_events(
    server: &Server<'_>,
    conn: &GattConnection<'_, '_, DefaultPacketPool>,
    event_sender: &RadioEventSender,
) {
    let inbox = server.status_service.inbox.handle;
    let reason = loop {
        match conn.next().await {
            GattConnectionEvent::Disconnected { reason } => break reason,
            GattConnectionEvent::Gatt { event } => {
                if let GattEvent::Write(write) = &event {
                    if write.handle() == inbox {
                        debug!("BLE: Write {} bytes", write.data().len());
                        event_sender.send(RadioEvent::received(write.data())).await;
                    }
                }
                // Kein Backchannel: Antwort nur auf ATT-Ebene
                match event.accept() {
                    Ok(reply) => reply.send().await,
                    Err(e) => warn!("BLE: Error sending response: {}", e),
                }
            }
            _ => {}
        }
    };
    info!("BLE: Disconnected: {}", reason);
}
