// Task-Modul: Enthält alle Embassy Tasks
//
// BLE Task und LED Task laufen asynchron und unabhängig.
// Einzige Verbindung: der Radio-Event-Channel (BLE → LED).

pub mod ble;
pub mod status_light;

// Re-export Tasks für einfachen Import
pub use ble::{BleController, ble_task};
pub use status_light::status_light_task;
