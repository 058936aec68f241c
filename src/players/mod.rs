//! Player strategies and the match runner.
//!
//! Strategies are trait-based so hosts can plug in their own:
//! - `ManualStrategy`: plays paths selected through a UI
//! - `RandomStrategy`: uniform over legal destinations
//! - `GreedyStrategy`: maximizes open space around the destination
//! - `DefensiveStrategy`: minimizes exposure after the move

mod heuristic;
mod runner;
mod strategy;

pub use heuristic::{defensive_risk, greedy_score, rank_greedy, DefensiveStrategy, GreedyStrategy};
pub use runner::{play_match, MatchOutcome};
pub use strategy::{ManualStrategy, RandomStrategy, Strategy};
