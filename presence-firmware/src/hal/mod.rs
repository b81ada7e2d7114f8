// Hardware Abstraction Layer (HAL) Module
//
// Kapselt die LED-Hardware hinter presence_core::LedWriter,
// damit die Logik auf dem Host testbar bleibt.

pub mod led_writer;

pub use led_writer::RmtLedWriter;
