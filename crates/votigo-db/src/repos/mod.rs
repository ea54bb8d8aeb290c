//! Repository modules implementing storage operations for Votigo entities.
//!
//! Each module adds methods to `VoteDb` via `impl VoteDb` blocks.

pub mod category;
pub mod option;
pub mod tally;
pub mod vote;
