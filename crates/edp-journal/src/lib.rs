//! Journal event model and the status interpreter.
//!
//! Turns Elite Dangerous journal events into the two-line presence
//! status (`state` / `details`). Everything here is pure: the interpreter
//! mutates an explicit [`Context`] and never performs I/O.

pub mod ambient;
pub mod context;
pub mod event;
pub mod interpreter;
pub mod status;

pub use ambient::{Ambient, AuxState};
pub use context::Context;
pub use event::{JournalEvent, JumpType};
pub use interpreter::{interpret, StatusInterpreter};
pub use status::{StatusPair, DEFAULT_IDLE_MESSAGE};
