//! Context carried between journal events.

/// State the interpreter remembers from earlier events.
///
/// Created empty, mutated by individual rules, and reset to empty by a
/// `Shutdown` event.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Context {
    /// Settlement booked through a combat dropship.
    pub combat_zone_location: Option<String>,
    pub in_supercruise: bool,
    /// Body the player is currently on or flying over.
    pub current_body_name: Option<String>,
    /// Destination of a booked taxi or retreat dropship.
    pub taxi_destination: Option<String>,
    /// Last station seen docking, for when the host has no station name.
    pub station_name_guess: Option<String>,
    /// Deployed SRV, e.g. `"Scarab"`.
    pub vehicle_name: Option<String>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Record a booked taxi or retreat destination. Clears any combat zone.
    pub fn book_taxi(&mut self, destination: &str) {
        self.taxi_destination = non_empty(destination);
        self.combat_zone_location = None;
    }

    /// Record a combat zone booking. Clears any taxi destination.
    pub fn book_combat_zone(&mut self, location: &str) {
        self.combat_zone_location = non_empty(location);
        self.taxi_destination = None;
    }
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}
