//! 힌트 선택
//!
//! 정답 자모 가운데 아직 확정도 배제도 되지 않은 것 하나를
//! 날짜 번호로 결정해 공개한다.

use thiserror::Error;

use crate::game::clues::ClueBoard;
use crate::game::feedback::BoardRow;
use crate::game::keyboard::{key_state, KeyState};
use crate::hangul::word_components;

/// 힌트가 거부된 이유
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HintError {
    /// 남은 힌트가 없거나 더 알려줄 자모가 없음
    #[error("알려줄 힌트가 없어요")]
    Exhausted,
    /// 이미 끝난 게임에서 힌트를 요청함
    #[error("이미 끝난 게임이에요")]
    GameFinished,
}

/// 힌트 후보: 정답의 자모 중 키보드 상태가 미확정인 것, 첫 등장 순서
pub fn hint_candidates(secret: &str, clues: &ClueBoard, board: &[BoardRow]) -> Vec<char> {
    let mut candidates = Vec::new();
    for comps in word_components(secret) {
        for c in comps {
            if candidates.contains(&c) {
                continue;
            }
            match key_state(clues, board, c) {
                KeyState::Used | KeyState::Untouched => candidates.push(c),
                KeyState::Hinted | KeyState::Confirmed | KeyState::Eliminated => {}
            }
        }
    }
    candidates
}

/// 오늘 공개할 힌트 자모, 남은 후보가 없으면 None
pub fn select_hint(
    secret: &str,
    clues: &ClueBoard,
    board: &[BoardRow],
    day_number: u64,
) -> Option<char> {
    let candidates = hint_candidates(secret, clues, board);
    if candidates.is_empty() {
        return None;
    }
    let index = (day_number % candidates.len() as u64) as usize;
    Some(candidates[index])
}
