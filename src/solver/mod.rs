//! Backward induction over every continuation of a distribution.
//!
//! ## Records
//!
//! - [`Verdict`]: winner and margin of a position; terminal evaluation
//! - [`Reply`]: the responder's answer to one led card: take or beat
//! - [`Answer`]: a led card's value, reply and trap kind
//! - [`Position`]: the memoized record for one state
//!
//! ## Search
//!
//! - [`Key`] / [`Table`]: the transposition table every state is solved into once
//! - [`Solver`]: the mutually recursive lead and respond phases
//!
//! ## Reporting
//!
//! - [`Variant`]: which of the four rule sets is in force
//! - [`Outcome`]: the winner as reported across the canonical boundary
mod answer;
mod key;
mod outcome;
mod position;
mod reply;
mod solver;
mod table;
mod variant;
mod verdict;


pub use answer::*;
pub use key::*;
pub use outcome::*;
pub use position::*;
pub use reply::*;
pub use solver::*;
pub use table::*;
pub use variant::*;
pub use verdict::*;
