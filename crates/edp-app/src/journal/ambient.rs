//! Host-side tracking of the current system, station and ride.

use edp_journal::{Ambient, JournalEvent};

/// Derives [`Ambient`] from the event stream.
///
/// Updated with each event before the interpreter sees it, so the
/// interpreter's view already reflects that event.
#[derive(Debug, Default)]
pub struct AmbientTracker {
    ambient: Ambient,
}

impl AmbientTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold `event` in and return the ambient fields to pass with it.
    pub fn observe(&mut self, event: &JournalEvent) -> Ambient {
        let amb = &mut self.ambient;

        match event {
            JournalEvent::Location(ev) => {
                set_system(amb, &ev.star_system);
                amb.station = if ev.docked {
                    ev.station_name.clone().or_else(|| Some(ev.body.clone()))
                } else {
                    None
                };
                amb.aux.taxi = ev.taxi;
                if !ev.taxi {
                    amb.aux.dropship = false;
                }
            }
            JournalEvent::Embark(ev) => {
                set_system(amb, &ev.star_system);
                if ev.on_station {
                    if let Some(station) = &ev.station_name {
                        amb.station = Some(station.clone());
                    }
                }
                amb.aux.taxi = ev.taxi;
                if !ev.taxi {
                    amb.aux.dropship = false;
                }
            }
            JournalEvent::Disembark(ev) => {
                set_system(amb, &ev.star_system);
                if ev.on_station {
                    if let Some(station) = &ev.station_name {
                        amb.station = Some(station.clone());
                    }
                }
                amb.aux.taxi = false;
                amb.aux.dropship = false;
            }
            JournalEvent::Docked(ev) => {
                set_system(amb, &ev.star_system);
                amb.station = Some(ev.station_name.clone());
            }
            JournalEvent::Undocked(ev) => {
                amb.station = None;
                if ev.taxi {
                    amb.aux.taxi = true;
                }
            }
            JournalEvent::Touchdown(ev) | JournalEvent::Liftoff(ev) => {
                set_system(amb, &ev.star_system);
            }
            JournalEvent::ApproachBody(ev) | JournalEvent::LeaveBody(ev) => {
                set_system(amb, &ev.star_system);
            }
            JournalEvent::SupercruiseEntry(ev) | JournalEvent::FsdJump(ev) => {
                set_system(amb, &ev.star_system);
                amb.station = None;
            }
            JournalEvent::SupercruiseExit(ev) => set_system(amb, &ev.star_system),
            JournalEvent::BookTaxi(_) => {
                amb.aux.taxi = true;
                amb.aux.dropship = false;
            }
            JournalEvent::BookDropship(_) => {
                amb.aux.taxi = true;
                amb.aux.dropship = true;
            }
            JournalEvent::CancelTaxi | JournalEvent::CancelDropship => {
                amb.aux.taxi = false;
                amb.aux.dropship = false;
            }
            JournalEvent::DropshipDeploy(ev) => {
                set_system(amb, &ev.star_system);
                amb.aux.taxi = false;
                amb.aux.dropship = false;
            }
            JournalEvent::Shutdown => *amb = Ambient::default(),
            JournalEvent::LaunchVehicle(_)
            | JournalEvent::DockVehicle
            | JournalEvent::StartJump(_)
            | JournalEvent::Unknown => {}
        }

        amb.clone()
    }
}

fn set_system(ambient: &mut Ambient, system: &str) {
    if !system.is_empty() {
        ambient.system = system.to_string();
    }
}
