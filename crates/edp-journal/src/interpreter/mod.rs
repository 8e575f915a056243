//! Event-interpretation state machine.
//!
//! [`interpret`] is a single exhaustive dispatch on [`JournalEvent`]: each
//! kind has one rule that may read and update the [`Context`] left by
//! earlier events and rewrite the status pair. Rules never look at each
//! other's output within the same call.

mod flight;
mod surface;
mod transport;


use tracing::debug;

use crate::ambient::Ambient;
use crate::context::Context;
use crate::event::JournalEvent;
use crate::status::{StatusPair, DEFAULT_IDLE_MESSAGE};

/// Apply one event to `context` and derive the status pair that follows
/// `previous`.
///
/// Events without a rule return `previous` unchanged. `Shutdown` resets the
/// context and yields the idle pair built from `idle_message`.
pub fn interpret(
    context: &mut Context,
    previous: &StatusPair,
    ambient: &Ambient,
    event: &JournalEvent,
    idle_message: &str,
) -> StatusPair {
    let mut next = previous.clone();
    let status = &mut next;

    match event {
        JournalEvent::Location(ev) => surface::location(context, status, ambient, ev),
        JournalEvent::Embark(ev) => surface::embark(context, status, ambient, ev),
        JournalEvent::Disembark(ev) => surface::disembark(context, status, ambient, ev),
        JournalEvent::LaunchVehicle(ev) => surface::launch_vehicle(context, status, ev),
        JournalEvent::DockVehicle => surface::dock_vehicle(context, status),
        JournalEvent::Touchdown(ev) => surface::touchdown(context, status, ev),
        JournalEvent::Liftoff(ev) => surface::liftoff(status, ambient, ev),
        JournalEvent::ApproachBody(ev) => flight::approach_body(context, status, ambient, ev),
        JournalEvent::LeaveBody(ev) => flight::leave_body(context, status, ambient, ev),
        JournalEvent::Docked(ev) => flight::docked(context, status, ev),
        JournalEvent::Undocked(ev) => flight::undocked(context, status, ambient, ev),
        JournalEvent::StartJump(ev) => flight::start_jump(context, status, ambient, ev),
        JournalEvent::SupercruiseEntry(ev) => {
            flight::supercruise_entry(context, status, ambient, ev)
        }
        JournalEvent::SupercruiseExit(ev) => {
            flight::supercruise_exit(context, status, ambient, ev)
        }
        JournalEvent::FsdJump(ev) => flight::fsd_jump(context, status, ambient, ev),
        JournalEvent::BookDropship(ev) => transport::book_dropship(context, ev),
        JournalEvent::CancelDropship => transport::cancel_dropship(context),
        JournalEvent::DropshipDeploy(ev) => {
            transport::dropship_deploy(context, status, ambient, ev)
        }
        JournalEvent::BookTaxi(ev) => transport::book_taxi(context, ev),
        JournalEvent::CancelTaxi => transport::cancel_taxi(context),
        JournalEvent::Shutdown => {
            context.reset();
            *status = StatusPair::idle(idle_message);
        }
        JournalEvent::Unknown => {}
    }

    next
}

/// `In <system>`, the usual `state` line.
pub(crate) fn in_system(system: &str) -> String {
    format!("In {system}")
}

// ---------------------------------------------------------------------------
// Interpreter
// ---------------------------------------------------------------------------

/// Owns the [`Context`] and the current status pair across events.
#[derive(Debug, Clone)]
pub struct StatusInterpreter {
    context: Context,
    status: StatusPair,
    idle_message: String,
}

impl Default for StatusInterpreter {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusInterpreter {
    pub fn new() -> Self {
        Self::with_idle_message(DEFAULT_IDLE_MESSAGE)
    }

    /// Start idle, using `idle_message` as the idle `state` line.
    pub fn with_idle_message(idle_message: impl Into<String>) -> Self {
        let idle_message = idle_message.into();
        Self {
            context: Context::new(),
            status: StatusPair::idle(&idle_message),
            idle_message,
        }
    }

    /// Feed one event and return the resulting status pair.
    pub fn apply(&mut self, ambient: &Ambient, event: &JournalEvent) -> &StatusPair {
        let next = interpret(
            &mut self.context,
            &self.status,
            ambient,
            event,
            &self.idle_message,
        );
        if next != self.status {
            debug!(
                event = event.kind(),
                state = %next.state,
                details = %next.details,
                "status changed"
            );
        }
        self.status = next;
        &self.status
    }

    pub fn context(&self) -> &Context {
        &self.context
    }

    pub fn status(&self) -> &StatusPair {
        &self.status
    }
}
