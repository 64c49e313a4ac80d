//! 게임 엔진
//!
//! 채점(analyzer), 단서 저장(clues), 추론(infer), 힌트(hint),
//! 키보드 투영(keyboard)을 세션(session)이 묶는다.

pub mod analyzer;
pub mod clues;
pub mod constants;
pub mod feedback;
pub mod hint;
pub mod infer;
pub mod keyboard;
pub mod session;

pub use analyzer::GuessError;
pub use clues::{ClueBoard, HotCombo};
pub use feedback::{BoardRow, Feedback};
pub use hint::HintError;
pub use keyboard::KeyState;
pub use session::{GameSession, GameStatus};
