//! 키보드 상태 투영
//!
//! 단서 저장소와 피드백 판에서 자판 한 칸의 상태를 계산한다.
//! 저장된 상태를 읽어 덧칠하는 방식이 아니라 언제든 처음부터
//! 다시 계산할 수 있는 순수 함수다.

use crate::game::clues::ClueBoard;
use crate::game::constants::MAX_LETTERS;
use crate::game::feedback::BoardRow;
use crate::hangul::syllable_components;

/// 자판 한 칸의 표시 상태 (우선순위 내림차순)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyState {
    /// 힌트로 공개된 자모
    Hinted,
    /// 어느 한 자리에 확실히 있는 자모
    Confirmed,
    /// 두 자리 모두에서 배제된 자모
    Eliminated,
    /// 제출한 글자에 쓰였지만 아직 판정이 없는 자모
    Used,
    /// 아직 한 번도 쓰이지 않은 자모
    Untouched,
}

/// 자모 하나의 키보드 상태
pub fn key_state(clues: &ClueBoard, board: &[BoardRow], jamo: char) -> KeyState {
    if clues.is_hint(jamo) {
        return KeyState::Hinted;
    }
    if (0..MAX_LETTERS).any(|pos| clues.is_yes(jamo, pos)) {
        return KeyState::Confirmed;
    }
    if (0..MAX_LETTERS).all(|pos| clues.is_no(jamo, pos)) {
        return KeyState::Eliminated;
    }
    let used = board.iter().any(|row| {
        row.letters
            .iter()
            .any(|&syllable| syllable_components(syllable).contains(&jamo))
    });
    if used {
        return KeyState::Used;
    }
    KeyState::Untouched
}
