//! Presence Core - Platform-agnostic Logic and Traits
//!
//! Diese Crate enthält KEINE Hardware-Dependencies.
//! Sie definiert Status-Modell, Farb-Policy, Animationen und die
//! Zustandsmaschine der Status-Anzeige.

#![no_std]

pub mod animation;
pub mod decoder;
pub mod device;
pub mod driver;
pub mod events;
pub mod link;
pub mod logic;
pub mod traits;
pub mod types;

// Re-exports für einfachen Zugriff
pub use animation::Step;
pub use decoder::StatusDecoder;
pub use device::StatusLight;
pub use driver::OutputDriver;
pub use events::LinkEvent;
pub use link::{LinkController, LinkState};
pub use logic::color_for;
pub use traits::{LedError, LedWriter};
pub use types::{Color, DeviceState, StatusCode};
