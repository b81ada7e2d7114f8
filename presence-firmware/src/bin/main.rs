// Keine Standard-Bibliothek verwenden (Embedded System)
#![no_std]
// Kein normaler main() Einstiegspunkt (wird von esp_rtos bereitgestellt)
#![no_main]
// Verbiete mem::forget - gefährlich bei ESP HAL Types mit DMA-Buffern
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, especially those \
    holding buffers for the duration of a data transfer."
)]
// Verbiete große Stack-Frames (Stack ist auf Embedded Systemen begrenzt)
#![deny(clippy::large_stack_frames)]

// Heap Allocator (BLE-Controller benötigt dynamischen Speicher)
extern crate alloc;

// Embassy Async Runtime
use embassy_executor::Spawner;
use embassy_time::{Duration, Timer};

// ESP32-C6 HAL
use esp_hal::clock::CpuClock;
use esp_hal::timer::timg::TimerGroup;

// BLE Controller (esp-radio → bt-hci)
use bt_hci::controller::ExternalController;
use esp_radio::ble::controller::BleConnector;

// Backtrace bei Panic und println!() Support
use {esp_backtrace as _, esp_println as _};

// Projekt-Module und Konfiguration
use presence_light::RadioEventChannel;
use presence_light::config::BLE_HEAP_SIZE;
use presence_light::tasks::{BleController, ble_task, status_light_task};

// ESP-IDF App Descriptor - erforderlich für den Bootloader!
// Ohne diesen schlägt das Flashen mit "ESP-IDF App Descriptor missing" fehl
esp_bootloader_esp_idf::esp_app_desc!();

/// Main Entry Point
///
/// Initialisiert Hardware, BLE-Controller, startet Embassy Runtime und
/// spawnt Tasks. Danach schläft main() - alle Arbeit läuft in Tasks.
#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    // ESP32-C6 Konfiguration: CPU auf maximale Taktfrequenz (160 MHz)
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    // Heap Allocator initialisieren (BLE braucht dynamischen Speicher!)
    esp_alloc::heap_allocator!(
        #[esp_hal::ram(reclaimed)]
        size: BLE_HEAP_SIZE
    );

    // Embassy Runtime initialisieren (Timer + Software Interrupt)
    let timg0 = TimerGroup::new(peripherals.TIMG0);
    let sw_interrupt =
        esp_hal::interrupt::software::SoftwareInterruptControl::new(peripherals.SW_INTERRUPT);
    esp_rtos::start(timg0.timer0, sw_interrupt.software_interrupt0);

    // Radio initialisieren
    static RADIO_INIT: static_cell::StaticCell<esp_radio::Controller> =
        static_cell::StaticCell::new();
    let radio_init =
        RADIO_INIT.init(esp_radio::init().expect("Failed to initialize Wi-Fi/BLE controller"));

    // BLE Controller als HCI-Transport für trouble-host
    let connector = BleConnector::new(radio_init, peripherals.BT, Default::default())
        .expect("Failed to initialize BLE");
    let controller: BleController = ExternalController::new(connector);

    // Radio-Event-Channel erstellen (BLE → LED)
    // Puffert Events, während der LED Task eine Animation abspielt
    static EVENT_CHANNEL: static_cell::StaticCell<RadioEventChannel> =
        static_cell::StaticCell::new();
    let event_channel = EVENT_CHANNEL.init(RadioEventChannel::new());

    // Spawn LED Task zuerst: Power-on Fade läuft, während BLE startet
    spawner
        .spawn(status_light_task(
            peripherals.GPIO8,
            peripherals.RMT,
            event_channel.receiver(),
        ))
        .unwrap();

    // Spawn BLE Task
    spawner
        .spawn(ble_task(controller, event_channel.sender()))
        .unwrap();

    // Main-Loop: schläft (alle Arbeit läuft in Tasks)
    loop {
        Timer::after(Duration::from_secs(3600)).await;
    }
}
