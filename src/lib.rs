pub mod config;
pub mod game;
pub mod hangul;
pub mod storage;
pub mod words;

pub use game::{GameSession, GameStatus, GuessError, HintError, KeyState};
pub use words::WordBook;
