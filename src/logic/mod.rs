//! Game business logic: selection, resolution, guessing.

mod guessing;
mod resolver;
mod selection;

pub use guessing::{reset_round, submit_guess};
pub use resolver::{pick_matching_player, PlayerResolver};
pub use selection::{apply_resolution, begin_selection, Resolution, ResolutionTicket};
