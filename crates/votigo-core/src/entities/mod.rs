//! Entity structs for all Votigo domain objects.
//!
//! Each entity maps to one table of the relational schema (`categories`,
//! `options`, `votes`, `vote_selections`). All structs derive `Serialize`,
//! `Deserialize`, and `JsonSchema` for JSON output and schema validation.

mod category;
mod option;
mod vote;

pub use category::Category;
pub use option::PollOption;
pub use vote::{Selection, Vote};
