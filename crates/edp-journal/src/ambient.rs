//! Fields the host supplies alongside each journal event.

/// Conveyance flags the host tracks outside the journal event itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AuxState {
    /// The player is riding an Apex taxi (or a dropship).
    pub taxi: bool,
    /// The player is riding a Frontline Solutions dropship.
    pub dropship: bool,
}

/// Ambient fields for one event.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ambient {
    /// Current star system as known to the host.
    pub system: String,
    /// Station the host believes the player is at, if any.
    pub station: Option<String>,
    pub aux: AuxState,
}

impl Ambient {
    pub fn new(system: impl Into<String>) -> Self {
        Self {
            system: system.into(),
            ..Self::default()
        }
    }

    pub fn with_station(mut self, station: impl Into<String>) -> Self {
        self.station = Some(station.into());
        self
    }

    pub fn with_aux(mut self, taxi: bool, dropship: bool) -> Self {
        self.aux = AuxState { taxi, dropship };
        self
    }

    /// True while a taxi or dropship narrative is in progress.
    pub fn in_transport(&self) -> bool {
        self.aux.taxi || self.aux.dropship
    }
}
