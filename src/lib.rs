//! Exact solver for single-suit Fool.
//!
//! Two players share one suit of `n` ranked cards. The leader lays a card,
//! the responder either beats it with a higher card (and takes over the lead)
//! or takes it into hand (and the same leader leads again). Whoever is left
//! holding cards is the fool.
//!
//! The crate solves every such distribution by backward induction:
//!
//! - [`deck`]: packed ownership state, mutation operators, scoped undo
//! - [`solver`]: terminal evaluation, position records, transposition table,
//!   and the lead/respond recursion
//! - [`config`]: validated starting distributions and rule variants
//! - [`play`]: replaying a solved game move by move against a human
//! - [`dto`]: serializable summaries of a solve
//! - `sweep`: solving every distribution of a deck size in parallel
pub mod config;
pub mod deck;
pub mod dto;
pub mod play;
pub mod solver;
#[cfg(feature = "cli")]
pub mod sweep;

pub use config::*;
pub use deck::*;
pub use dto::*;
pub use play::*;
pub use solver::*;
#[cfg(feature = "cli")]
pub use sweep::*;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Signed value attached to a card in the weighted variants.
pub type Weight = i64;
/// Margin of victory: cards or summed weight left with the loser.
pub type Score = i64;

// ============================================================================
// GAME PARAMETERS
// ============================================================================
/// Largest deck the packed `u64` state can hold (one bit is the sentinel).
pub const MAX_CARDS: usize = 63;
/// Largest deck `sweep` will enumerate.
pub const MAX_SWEEP: usize = 16;
/// Deck size used by `Arbitrary` configurations.
pub const ARBITRARY_CARDS: std::ops::RangeInclusive<usize> = 1..=9;
/// Weight range used by `Arbitrary` configurations.
pub const ARBITRARY_WEIGHTS: std::ops::RangeInclusive<Weight> = -3..=3;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and benchmarking.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "cli")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}
