//! Journal events the interpreter understands.
//!
//! Each journal line is a JSON object whose `event` key names the kind.
//! Kinds the interpreter has no rule for deserialize to
//! [`JournalEvent::Unknown`]. Missing fields fall back to their defaults;
//! the journal is trusted to be well formed.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event")]
pub enum JournalEvent {
    Location(Location),
    Embark(Transfer),
    Disembark(Transfer),
    #[serde(rename = "LaunchSRV")]
    LaunchVehicle(LaunchVehicle),
    #[serde(rename = "DockSRV")]
    DockVehicle,
    Touchdown(SurfaceContact),
    Liftoff(SurfaceContact),
    ApproachBody(BodyProximity),
    LeaveBody(BodyProximity),
    Docked(Docked),
    Undocked(Undocked),
    StartJump(StartJump),
    SupercruiseEntry(SystemArrival),
    SupercruiseExit(SupercruiseExit),
    #[serde(rename = "FSDJump")]
    FsdJump(SystemArrival),
    BookDropship(BookDropship),
    CancelDropship,
    DropshipDeploy(DropshipDeploy),
    BookTaxi(BookTaxi),
    CancelTaxi,
    Shutdown,
    #[serde(other)]
    Unknown,
}

impl JournalEvent {
    /// Parse a single journal line.
    pub fn from_line(line: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(line)
    }

    /// The journal name of this event kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Location(_) => "Location",
            Self::Embark(_) => "Embark",
            Self::Disembark(_) => "Disembark",
            Self::LaunchVehicle(_) => "LaunchSRV",
            Self::DockVehicle => "DockSRV",
            Self::Touchdown(_) => "Touchdown",
            Self::Liftoff(_) => "Liftoff",
            Self::ApproachBody(_) => "ApproachBody",
            Self::LeaveBody(_) => "LeaveBody",
            Self::Docked(_) => "Docked",
            Self::Undocked(_) => "Undocked",
            Self::StartJump(_) => "StartJump",
            Self::SupercruiseEntry(_) => "SupercruiseEntry",
            Self::SupercruiseExit(_) => "SupercruiseExit",
            Self::FsdJump(_) => "FSDJump",
            Self::BookDropship(_) => "BookDropship",
            Self::CancelDropship => "CancelDropship",
            Self::DropshipDeploy(_) => "DropshipDeploy",
            Self::BookTaxi(_) => "BookTaxi",
            Self::CancelTaxi => "CancelTaxi",
            Self::Shutdown => "Shutdown",
            Self::Unknown => "Unknown",
        }
    }
}

// ---------------------------------------------------------------------------
// Payloads
// ---------------------------------------------------------------------------

/// Periodic resync written on load and respawn.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Location {
    pub star_system: String,
    pub body: String,
    pub body_type: String,
    pub docked: bool,
    pub station_name: Option<String>,
    pub taxi: bool,
    pub on_foot: bool,
}

/// Payload shared by `Embark` and `Disembark`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Transfer {
    pub star_system: String,
    pub body: String,
    pub on_station: bool,
    pub on_planet: bool,
    #[serde(rename = "SRV")]
    pub srv: bool,
    pub taxi: bool,
    pub station_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct LaunchVehicle {
    #[serde(rename = "SRVType")]
    pub srv_type: Option<String>,
    #[serde(rename = "SRVType_Localised")]
    pub srv_type_localised: Option<String>,
    pub player_controlled: bool,
}

impl Default for LaunchVehicle {
    fn default() -> Self {
        Self {
            srv_type: None,
            srv_type_localised: None,
            player_controlled: true,
        }
    }
}

impl LaunchVehicle {
    /// Display name of the vehicle, e.g. `"Scarab"` for `"SRV Scarab"`.
    pub fn display_name(&self) -> String {
        let name = self
            .srv_type_localised
            .as_deref()
            .or(self.srv_type.as_deref())
            .unwrap_or("SRV");
        name.strip_prefix("SRV ").unwrap_or(name).to_string()
    }
}

/// Payload shared by `Touchdown` and `Liftoff`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct SurfaceContact {
    pub star_system: String,
    pub body: String,
    pub player_controlled: bool,
}

impl Default for SurfaceContact {
    fn default() -> Self {
        Self {
            star_system: String::new(),
            body: String::new(),
            player_controlled: true,
        }
    }
}

/// Payload shared by `ApproachBody` and `LeaveBody`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct BodyProximity {
    pub star_system: String,
    pub body: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Docked {
    pub star_system: String,
    pub station_name: String,
    pub station_type: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Undocked {
    pub station_name: String,
    pub station_type: String,
    pub taxi: bool,
}

impl Undocked {
    /// Whether the station sits on a planet surface.
    pub fn is_surface_port(&self) -> bool {
        matches!(
            self.station_type.as_str(),
            "OnFootSettlement" | "CraterOutpost" | "CraterPort" | "SurfaceStation"
        )
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum JumpType {
    Hyperspace,
    Supercruise,
    #[default]
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct StartJump {
    pub jump_type: JumpType,
    /// Destination system; only present for hyperspace jumps.
    pub star_system: Option<String>,
}

/// Payload shared by `SupercruiseEntry` and `FSDJump`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct SystemArrival {
    pub star_system: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct SupercruiseExit {
    pub star_system: String,
    pub body: String,
    pub body_type: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct BookDropship {
    pub retreat: bool,
    pub destination_location: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct DropshipDeploy {
    pub star_system: String,
    pub body: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct BookTaxi {
    pub destination_location: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_docked_line() {
        let line = r#"{ "timestamp":"2024-03-01T18:02:11Z", "event":"Docked", "StationName":"Jameson Memorial", "StationType":"Orbis", "StarSystem":"Shinrarta Dezhra", "SystemAddress":3932277478106 }"#;
        let event = JournalEvent::from_line(line).unwrap();
        match event {
            JournalEvent::Docked(docked) => {
                assert_eq!(docked.station_name, "Jameson Memorial");
                assert_eq!(docked.star_system, "Shinrarta Dezhra");
                assert_eq!(docked.station_type, "Orbis");
            }
            other => panic!("expected Docked, got {other:?}"),
        }
    }

    #[test]
    fn parses_renamed_kinds() {
        let launch = JournalEvent::from_line(
            r#"{"event":"LaunchSRV","SRVType":"testbuggy","SRVType_Localised":"SRV Scarab","Loadout":"starter","PlayerControlled":true}"#,
        )
        .unwrap();
        assert!(matches!(launch, JournalEvent::LaunchVehicle(ref v) if v.display_name() == "Scarab"));

        let dock = JournalEvent::from_line(r#"{"event":"DockSRV","SRVType":"testbuggy","ID":53}"#)
            .unwrap();
        assert_eq!(dock, JournalEvent::DockVehicle);

        let jump = JournalEvent::from_line(
            r#"{"event":"FSDJump","StarSystem":"Sol","JumpDist":8.4,"Body":"Sol"}"#,
        )
        .unwrap();
        assert!(matches!(jump, JournalEvent::FsdJump(ref a) if a.star_system == "Sol"));
    }

    #[test]
    fn parses_transfer_flags() {
        let line = r#"{"event":"Embark","SRV":false,"Taxi":true,"Multicrew":false,"OnStation":false,"OnPlanet":true,"Body":"Mitterand Hollow","StarSystem":"Shinrarta Dezhra"}"#;
        let event = JournalEvent::from_line(line).unwrap();
        let JournalEvent::Embark(embark) = event else {
            panic!("expected Embark");
        };
        assert!(embark.taxi);
        assert!(embark.on_planet);
        assert!(!embark.srv);
        assert_eq!(embark.station_name, None);
    }

    #[test]
    fn parses_start_jump_types() {
        let hyper = JournalEvent::from_line(
            r#"{"event":"StartJump","JumpType":"Hyperspace","StarSystem":"Sol","StarClass":"G"}"#,
        )
        .unwrap();
        assert!(matches!(
            hyper,
            JournalEvent::StartJump(StartJump { jump_type: JumpType::Hyperspace, star_system: Some(ref s) }) if s == "Sol"
        ));

        let cruise =
            JournalEvent::from_line(r#"{"event":"StartJump","JumpType":"Supercruise"}"#).unwrap();
        assert!(matches!(
            cruise,
            JournalEvent::StartJump(StartJump { jump_type: JumpType::Supercruise, star_system: None })
        ));

        let carrier =
            JournalEvent::from_line(r#"{"event":"StartJump","JumpType":"Carrier"}"#).unwrap();
        assert!(matches!(
            carrier,
            JournalEvent::StartJump(StartJump { jump_type: JumpType::Other, .. })
        ));
    }

    #[test]
    fn unit_kinds_ignore_extra_fields() {
        let cancel =
            JournalEvent::from_line(r#"{"event":"CancelTaxi","Refund":100}"#).unwrap();
        assert_eq!(cancel, JournalEvent::CancelTaxi);

        let shutdown = JournalEvent::from_line(r#"{"timestamp":"x","event":"Shutdown"}"#).unwrap();
        assert_eq!(shutdown, JournalEvent::Shutdown);
    }

    #[test]
    fn unhandled_kind_is_unknown() {
        let event = JournalEvent::from_line(r#"{"event":"Music","MusicTrack":"Exploration"}"#)
            .unwrap();
        assert_eq!(event, JournalEvent::Unknown);
        assert_eq!(event.kind(), "Unknown");
    }

    #[test]
    fn missing_player_controlled_defaults_to_true() {
        let event =
            JournalEvent::from_line(r#"{"event":"Touchdown","Body":"Moon","StarSystem":"Sol"}"#)
                .unwrap();
        assert!(matches!(event, JournalEvent::Touchdown(ref t) if t.player_controlled));
    }

    #[test]
    fn surface_port_types() {
        let mut undocked = Undocked {
            station_type: "CraterOutpost".into(),
            ..Undocked::default()
        };
        assert!(undocked.is_surface_port());
        undocked.station_type = "Coriolis".into();
        assert!(!undocked.is_surface_port());
    }

    #[test]
    fn vehicle_name_without_prefix_kept() {
        let launch = LaunchVehicle {
            srv_type_localised: Some("Scorpion".into()),
            ..LaunchVehicle::default()
        };
        assert_eq!(launch.display_name(), "Scorpion");
        assert_eq!(LaunchVehicle::default().display_name(), "SRV");
    }
}
