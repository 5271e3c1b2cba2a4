//! Page components.

mod board;

pub use board::BoardPage;
