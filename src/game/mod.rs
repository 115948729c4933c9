pub mod board;
pub mod grid;
pub mod solver;
pub mod validator;

pub use board::Board;
pub use grid::GridGenerator;
pub use solver::BoggleSolver;
pub use validator::WordValidator;
