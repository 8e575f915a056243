//! Taxi and dropship bookings.

use crate::ambient::Ambient;
use crate::context::Context;
use crate::event::{BookDropship, BookTaxi, DropshipDeploy};
use crate::status::StatusPair;

use super::in_system;

/// A retreat dropship takes the player home, so it is tracked like a taxi.
pub(super) fn book_dropship(context: &mut Context, ev: &BookDropship) {
    if ev.retreat {
        context.book_taxi(&ev.destination_location);
    } else {
        context.book_combat_zone(&ev.destination_location);
    }
}

pub(super) fn cancel_dropship(context: &mut Context) {
    context.combat_zone_location = None;
}

pub(super) fn dropship_deploy(
    context: &mut Context,
    status: &mut StatusPair,
    ambient: &Ambient,
    ev: &DropshipDeploy,
) {
    status.details = match &context.combat_zone_location {
        Some(location) => format!("Combat zone at {location}"),
        None => format!("Combat zone on {}", ev.body),
    };
    let system = if ev.star_system.is_empty() {
        &ambient.system
    } else {
        &ev.star_system
    };
    status.state = in_system(system);
}

pub(super) fn book_taxi(context: &mut Context, ev: &BookTaxi) {
    context.book_taxi(&ev.destination_location);
}

pub(super) fn cancel_taxi(context: &mut Context) {
    context.taxi_destination = None;
}
