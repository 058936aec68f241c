//! Board representation: positions, wraparound arithmetic, dealing, and
//! collapse.

pub mod grid;
pub mod position;

pub use grid::Board;
pub use position::{Direction, Position};
