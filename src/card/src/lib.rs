pub mod render;
pub mod request;
pub mod roster;
pub mod validate;

pub use render::render_document;
pub use request::{MatchCardRequest, RosterEntry};
pub use roster::{NormalizedRoster, RosterRow, ROSTER_SIZE};
pub use validate::{validate, ValidationError};
