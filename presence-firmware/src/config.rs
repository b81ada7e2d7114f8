// Projekt-Konfiguration: Konstanten und Hardware-Zuordnungen
//
// Alles fest zur Compile-Zeit, es gibt keine Laufzeit-Konfiguration und
// keine Persistenz. Animations-Timings liegen in presence_core::animation.
#![allow(dead_code)]

use trouble_host::prelude::{Uuid, uuid};

// ============================================================================
// LED Konfiguration
// ============================================================================

/// GPIO-Pin für die RGB LED (WS2812 auf dem ESP32-C6 DevKit)
pub const LED_GPIO_PIN: u8 = 8;

/// RMT Taktfrequenz in MHz
/// 80 MHz ist optimal für WS2812 LED-Timing
pub const RMT_CLOCK_MHZ: u32 = 80;

/// Anzahl der LEDs im Strip
pub const LED_COUNT: usize = 1;

// ============================================================================
// BLE Konfiguration
// ============================================================================

/// Gerätename im Advertisement (Complete Local Name)
/// Der Host-Publisher sucht nach diesem Namen
pub const DEVICE_NAME: &str = "RFduino";

/// Nutzdaten im Advertisement (Manufacturer Specific Data)
pub const ADVERTISEMENT_PAYLOAD: &[u8] = b"Teams";

/// Company Identifier für die Manufacturer Specific Data
/// 0xFFFF ist für Tests/interne Nutzung reserviert
pub const MANUFACTURER_ID: u16 = 0xFFFF;

/// Advertising-Intervall in Millisekunden (min = max)
pub const ADVERTISING_INTERVAL_MS: u64 = 300;

/// Wartezeit nach einem Advertising-Fehler vor erneutem Versuch
pub const ADVERTISING_RETRY_DELAY_MS: u64 = 1000;

/// Zufällige statische BLE-Adresse (die zwei oberen Bits müssen gesetzt sein)
pub const BLE_ADDRESS: [u8; 6] = [0x54, 0x65, 0x61, 0x6d, 0x73, 0xc1];

/// Max. gleichzeitige Verbindungen (nur ein Host)
pub const CONNECTIONS_MAX: usize = 1;

/// Max. L2CAP-Kanäle (Signal + ATT)
pub const L2CAP_CHANNELS_MAX: usize = 2;

/// Max. Anzahl Befehle in der HCI-Queue des Controllers
pub const HCI_SLOTS: usize = 20;

/// Max. Länge eines Writes auf die Status-Characteristic (ATT MTU 23 - 3)
pub const MAX_PAYLOAD_LEN: usize = 20;

// ============================================================================
// GATT (RFduino-kompatibles Layout)
// ============================================================================

/// Primärer Service
pub const SERVICE_UUID: Uuid = uuid!("00002220-0000-1000-8000-00805f9b34fb");

/// Lesbare Characteristic (wird nie aktualisiert, nur fürs Layout)
pub const READ_CHAR_UUID: Uuid = uuid!("00002221-0000-1000-8000-00805f9b34fb");

/// Status-Inbox: Host schreibt hier das Status-Byte
pub const WRITE_CHAR_UUID: Uuid = uuid!("00002222-0000-1000-8000-00805f9b34fb");

// ============================================================================
// Event-Queue & Speicher
// ============================================================================

/// Kapazität der Event-Queue (BLE Task → LED Task)
/// Events während eines Connect-Flash warten hier
pub const EVENT_QUEUE_CAPACITY: usize = 8;

/// Heap-Größe für den BLE-Controller (Bytes)
pub const BLE_HEAP_SIZE: usize = 65536; // 64 KB
