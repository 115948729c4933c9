pub mod game;

pub use game::{Position, SolveReport};
