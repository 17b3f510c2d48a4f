//! Events that trigger mode transitions

/// Mode-level events, derived from debounced button presses and boot checks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// Menu button pressed
    MenuButton,
    /// "About" confirmed in the menu
    AboutSelected,
    /// A measurement confirmed in the menu
    MeasurementSelected,
    /// Recoverable problem the user should see (bad configuration)
    Recoverable,
    /// Hardware fault the device cannot run without
    Fatal,
}
