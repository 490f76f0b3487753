//! Card ownership and the mutable search state.
//!
//! - [`Player`]: the two seats, `P0` being the canonical leader
//! - [`State`]: ownership of every active slot packed into one `u64`
//! - [`Deck`]: state plus weights plus the canonical flag, with the
//!   mutation operators the solver explores continuations with
//! - [`Scope`]: applies one mutation and undoes it on drop
mod card;
mod deck;
mod player;
mod scope;
mod state;

pub use card::*;
pub use deck::*;
pub use player::*;
pub use scope::*;
pub use state::*;
