//! Events vom Radio-Stack

/// Notification des Radio-Stacks
///
/// Wird nacheinander und ohne Reentrancy an `StatusLight::handle()`
/// übergeben.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LinkEvent<'a> {
    Connected,
    Disconnected,
    /// Vom Host geschriebene Bytes (nur das erste Byte ist relevant)
    Received(&'a [u8]),
}
