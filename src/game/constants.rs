//! 게임 상수

use std::time::{SystemTime, UNIX_EPOCH};

/// 한 단어의 글자 수
pub const MAX_LETTERS: usize = 2;
/// 게임당 추측 횟수
pub const NUMBER_OF_GUESSES: u32 = 7;
/// 게임당 힌트 횟수
pub const NUMBER_OF_HINTS: u32 = 1;

/// 연습 게임 단어
pub const PRACTICE_WORD: &str = "노래";
/// 연습 게임 예비 단어 (첫 추측이 정답 글자를 맞히면 교체)
pub const PRACTICE_WORD_BACKUP: &str = "무대";

/// 데일리 단어 기준일 2024-01-01 00:00 UTC
pub const GAME_EPOCH_UNIX: u64 = 1_704_067_200;

/// 유닉스 초 -> 기준일 이후 경과 일수
pub fn day_number_from_unix(unix_secs: u64) -> u64 {
    unix_secs.saturating_sub(GAME_EPOCH_UNIX) / 86_400
}

/// 현재 시각 기준 경과 일수
pub fn current_day_number() -> u64 {
    let unix_secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(GAME_EPOCH_UNIX);
    day_number_from_unix(unix_secs)
}
