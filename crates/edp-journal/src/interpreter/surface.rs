//! Rules for being on foot, in an SRV, and landing or lifting off.

use crate::ambient::Ambient;
use crate::context::Context;
use crate::event::{LaunchVehicle, Location, SurfaceContact, Transfer};
use crate::status::StatusPair;

use super::in_system;

pub(super) fn location(
    context: &mut Context,
    status: &mut StatusPair,
    ambient: &Ambient,
    ev: &Location,
) {
    if ev.on_foot {
        match ev.body_type.as_str() {
            "Station" => status.details = format!("On foot at {}", ev.body),
            "Planet" => status.details = format!("On foot on {}", ev.body),
            _ => {}
        }
    } else if ev.docked {
        let station = ev.station_name.as_deref().unwrap_or(&ev.body);
        status.details = format!("Docked at {station}");
        context.station_name_guess = Some(station.to_string());
    } else if ev.taxi {
        status.details = if ambient.aux.dropship {
            dropship_back(context.taxi_destination.as_deref())
        } else {
            taxi_to(context.taxi_destination.as_deref())
        };
    } else if ev.body_type == "Planet" {
        status.details = format!("On {}", ev.body);
    } else {
        status.details = "Flying in normal space".to_string();
    }
    status.state = in_system(&ev.star_system);
}

/// Boarding a ship, taxi, dropship or SRV.
pub(super) fn embark(
    context: &mut Context,
    status: &mut StatusPair,
    ambient: &Ambient,
    ev: &Transfer,
) {
    let taxi = ev.taxi || ambient.aux.taxi;

    let details = if taxi && !ambient.aux.dropship {
        Some(taxi_to(context.taxi_destination.as_deref()))
    } else if ambient.aux.dropship {
        Some(match &context.combat_zone_location {
            Some(location) => format!("Taking a dropship to {location}"),
            None => "Taking a dropship".to_string(),
        })
    } else if ev.on_station {
        let station = ev
            .station_name
            .as_deref()
            .or(ambient.station.as_deref())
            .or(context.station_name_guess.as_deref())
            .unwrap_or(&ev.body);
        Some(format!("Docked at {station}"))
    } else if ev.srv {
        Some(match &context.vehicle_name {
            Some(name) => format!("Driving {name} On {}", ev.body),
            None => format!("Driving SRV On {}", ev.body),
        })
    } else if ev.on_planet {
        Some(
            match ambient
                .station
                .as_deref()
                .or(context.station_name_guess.as_deref())
            {
                Some(station) => format!("Docked at {station}"),
                None => format!("On {}", ev.body),
            },
        )
    } else {
        None
    };

    if let Some(details) = details {
        status.details = details;
    }
    status.state = in_system(&ev.star_system);
}

/// Stepping out on foot.
pub(super) fn disembark(
    context: &mut Context,
    status: &mut StatusPair,
    ambient: &Ambient,
    ev: &Transfer,
) {
    if let Some(station) = &ambient.station {
        status.details = format!("On foot at {station}");
    } else if let Some(guess) = &context.station_name_guess {
        status.details = format!("On foot at {guess}");
    } else if ev.on_station {
        let station = ev.station_name.as_deref().unwrap_or(&ev.body);
        status.details = format!("On foot at {station}");
    } else if ev.on_planet {
        status.details = format!("On foot on {}", ev.body);
        context.current_body_name = Some(ev.body.clone());
    }
    status.state = in_system(&ev.star_system);
    context.taxi_destination = None;
}

pub(super) fn launch_vehicle(context: &mut Context, status: &mut StatusPair, ev: &LaunchVehicle) {
    if !ev.player_controlled {
        return;
    }
    let name = ev.display_name();
    status.details = match &context.current_body_name {
        Some(body) => format!("Driving {name} on {body}"),
        None => format!("Driving {name}"),
    };
    context.vehicle_name = Some(name);
}

pub(super) fn dock_vehicle(context: &mut Context, status: &mut StatusPair) {
    status.details = match &context.current_body_name {
        Some(body) => format!("On {body}"),
        None => "In ship on planet surface".to_string(),
    };
    context.vehicle_name = None;
}

pub(super) fn touchdown(context: &mut Context, status: &mut StatusPair, ev: &SurfaceContact) {
    if !ev.player_controlled {
        return;
    }
    status.details = format!("Landed On {}", ev.body);
    status.state = in_system(&ev.star_system);
    context.current_body_name = Some(ev.body.clone());
}

pub(super) fn liftoff(status: &mut StatusPair, ambient: &Ambient, ev: &SurfaceContact) {
    if ambient.aux.taxi || !ev.player_controlled {
        return;
    }
    status.details = format!("Flying On {}", ev.body);
    status.state = in_system(&ev.star_system);
}

fn taxi_to(destination: Option<&str>) -> String {
    match destination {
        Some(destination) => format!("Taking a taxi to {destination}"),
        None => "Taking a taxi".to_string(),
    }
}

fn dropship_back(destination: Option<&str>) -> String {
    match destination {
        Some(destination) => format!("Taking a dropship back to {destination}"),
        None => "Taking a dropship".to_string(),
    }
}
