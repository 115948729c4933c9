pub mod config;
pub mod dictionary;
pub mod error;
pub mod game;
pub mod models;
pub mod utils;

pub use dictionary::Dictionary;
pub use error::SolverError;
pub use game::{Board, BoggleSolver};
