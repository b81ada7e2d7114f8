// Library-Root: Wiederverwendbare Logik und Module
// Keine Standard-Bibliothek (Embedded System)
#![no_std]

// Module
pub mod config;
pub mod hal;
pub mod tasks;

// Re-exports von presence-core
pub use presence_core::{
    Color, DeviceState, LedError, LedWriter, LinkEvent, LinkState, StatusCode, StatusLight,
    color_for,
};

use embassy_sync::blocking_mutex::raw::NoopRawMutex;
use embassy_sync::channel::{Channel, Receiver, Sender};
use heapless::Vec;

use crate::config::{EVENT_QUEUE_CAPACITY, MAX_PAYLOAD_LEN};

// ============================================================================
// Radio Events
// ============================================================================

/// Notification des BLE-Stacks als eigenständige Nachricht
///
/// `LinkEvent` leiht sich den Puffer nur, über den Channel muss die
/// Nachricht die Bytes besitzen.
#[derive(Debug, Clone, PartialEq, Eq, defmt::Format)]
pub enum RadioEvent {
    Connected,
    Disconnected,
    Received(Vec<u8, MAX_PAYLOAD_LEN>),
}

impl RadioEvent {
    /// Kopiert die empfangenen Bytes, überzählige Bytes werden abgeschnitten
    /// (nur das erste Byte ist relevant)
    pub fn received(data: &[u8]) -> Self {
        let len = data.len().min(MAX_PAYLOAD_LEN);
        // Kann nicht fehlschlagen: len <= Kapazität
        let payload = Vec::from_slice(&data[..len]).unwrap_or_default();
        Self::Received(payload)
    }

    pub fn as_link_event(&self) -> LinkEvent<'_> {
        match self {
            RadioEvent::Connected => LinkEvent::Connected,
            RadioEvent::Disconnected => LinkEvent::Disconnected,
            RadioEvent::Received(payload) => LinkEvent::Received(payload),
        }
    }
}

// ============================================================================
// Type-Aliase für Channel-Typen
// ============================================================================
//
// Statt:  Sender<'static, NoopRawMutex, RadioEvent, 8>
// Nutze:  RadioEventSender

/// Channel für Radio-Events (BLE Task → LED Task)
/// Einziger Weg, auf dem der Zustand der LED verändert wird
pub type RadioEventChannel = Channel<NoopRawMutex, RadioEvent, EVENT_QUEUE_CAPACITY>;

/// Sender für Radio-Events (BLE Task)
pub type RadioEventSender = Sender<'static, NoopRawMutex, RadioEvent, EVENT_QUEUE_CAPACITY>;

/// Receiver für Radio-Events (LED Task)
pub type RadioEventReceiver = Receiver<'static, NoopRawMutex, RadioEvent, EVENT_QUEUE_CAPACITY>;
