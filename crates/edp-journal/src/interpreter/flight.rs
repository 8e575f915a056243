//! Rules for flight: bodies, stations, supercruise and hyperspace.
//!
//! Most rules here leave `details` alone while a taxi or dropship ride is
//! in progress, so the ride's narrative is not overwritten by the ship's
//! own movements. Body proximity is also ignored while in supercruise.

use crate::ambient::Ambient;
use crate::context::Context;
use crate::event::{
    BodyProximity, Docked, JumpType, StartJump, SupercruiseExit, SystemArrival, Undocked,
};
use crate::status::StatusPair;

use super::in_system;

fn body_transition_suppressed(context: &Context, ambient: &Ambient) -> bool {
    ambient.in_transport() || context.in_supercruise
}

pub(super) fn approach_body(
    context: &mut Context,
    status: &mut StatusPair,
    ambient: &Ambient,
    ev: &BodyProximity,
) {
    if !body_transition_suppressed(context, ambient) {
        status.details = format!("Flying On {}", ev.body);
    }
    status.state = in_system(&ev.star_system);
    context.current_body_name = Some(ev.body.clone());
}

pub(super) fn leave_body(
    context: &mut Context,
    status: &mut StatusPair,
    ambient: &Ambient,
    ev: &BodyProximity,
) {
    if !body_transition_suppressed(context, ambient) {
        status.details = "Flying in normal space".to_string();
    }
    status.state = in_system(&ev.star_system);
    context.current_body_name = None;
}

pub(super) fn docked(context: &mut Context, status: &mut StatusPair, ev: &Docked) {
    status.details = format!("Docked at {}", ev.station_name);
    status.state = in_system(&ev.star_system);
    context.station_name_guess = Some(ev.station_name.clone());
}

pub(super) fn undocked(
    context: &mut Context,
    status: &mut StatusPair,
    ambient: &Ambient,
    ev: &Undocked,
) {
    let surface = ev.is_surface_port();

    if !(ev.taxi || ambient.aux.taxi) && !ambient.aux.dropship {
        status.details = if surface {
            match &context.current_body_name {
                Some(body) => format!("Flying on {body}"),
                None => format!("Leaving {}", ev.station_name),
            }
        } else {
            "Flying in normal space".to_string()
        };
    }
    status.state = in_system(&ambient.system);

    context.station_name_guess = None;
    if !surface {
        context.current_body_name = None;
    }
}

pub(super) fn start_jump(
    context: &mut Context,
    status: &mut StatusPair,
    ambient: &Ambient,
    ev: &StartJump,
) {
    if ambient.in_transport() {
        return;
    }
    match ev.jump_type {
        JumpType::Hyperspace => {
            status.details = match &ev.star_system {
                Some(destination) => format!("Jumping to {destination}"),
                None => "Jumping".to_string(),
            };
            status.state = format!("From {}", ambient.system);
        }
        JumpType::Supercruise => {
            status.details = "Preparing for supercruise".to_string();
            status.state = in_system(&ambient.system);
            context.in_supercruise = true;
        }
        JumpType::Other => {}
    }
}

pub(super) fn supercruise_entry(
    context: &mut Context,
    status: &mut StatusPair,
    ambient: &Ambient,
    ev: &SystemArrival,
) {
    if !ambient.in_transport() {
        status.details = "Supercruising".to_string();
    }
    status.state = in_system(&ev.star_system);
    context.in_supercruise = true;
}

pub(super) fn supercruise_exit(
    context: &mut Context,
    status: &mut StatusPair,
    ambient: &Ambient,
    ev: &SupercruiseExit,
) {
    if !ambient.in_transport() {
        status.details = if ev.body_type == "Planet" {
            format!("Flying On {}", ev.body)
        } else {
            "Flying in normal space".to_string()
        };
    }
    status.state = in_system(&ev.star_system);
    context.in_supercruise = false;
}

/// Arrival in a new system; the ship drops into supercruise.
pub(super) fn fsd_jump(
    context: &mut Context,
    status: &mut StatusPair,
    ambient: &Ambient,
    ev: &SystemArrival,
) {
    supercruise_entry(context, status, ambient, ev);
}
