//! 추측 피드백 분류와 표시 데이터

use crate::game::constants::MAX_LETTERS;

/// 글자 하나에 대한 피드백 분류
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    /// 🥕 당근: 글자 완전 일치
    Match,
    /// 🍄 버섯: 첫 자음 일치 + 자모 2개 이상 일치
    Similar,
    /// 🧄 마늘: 자모 2개 이상 일치 (첫 자음 불일치)
    Many,
    /// 🍆 가지: 자모 1개만 일치
    Exists,
    /// 🍌 바나나: 이 글자엔 없고 반대쪽 글자에 있음
    Opposite,
    /// 🍎 사과: 양쪽 어디에도 없음
    None,
}

impl Feedback {
    /// 피드백 이모지
    pub fn emote(self) -> &'static str {
        match self {
            Feedback::Match => "🥕",
            Feedback::Similar => "🍄",
            Feedback::Many => "🧄",
            Feedback::Exists => "🍆",
            Feedback::Opposite => "🍌",
            Feedback::None => "🍎",
        }
    }

    /// 피드백 설명 (채소/과일 말장난 그대로)
    pub fn description(self) -> &'static str {
        match self {
            Feedback::Match => "당근이에요! 글자가 정확히 맞아요",
            Feedback::Similar => "비슷해요! 첫 자음과 자모 2개 이상이 같아요",
            Feedback::Many => "많아요! 자모 2개 이상이 같아요",
            Feedback::Exists => "가지고 있어요! 자모 1개가 같아요",
            Feedback::Opposite => "반대로 있어요! 반대쪽 글자에 있어요",
            Feedback::None => "사과할게요, 맞는 자모가 없어요",
        }
    }

    /// 피드백 표시 색상 (RGB)
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            Feedback::Match => (255, 130, 45),
            Feedback::Similar => (248, 86, 155),
            Feedback::Many => (229, 205, 179),
            Feedback::Exists => (140, 66, 179),
            Feedback::Opposite => (248, 214, 87),
            Feedback::None => (248, 49, 47),
        }
    }
}

/// 힌트 표시 이모지 (피드백이 아닌 메타 표시)
pub const HINT_EMOTE: &str = "🎃";

/// 아직 확정되지 않은 자모의 키보드 색상 (회색)
pub const COLOR_MAYBE_RGB: (u8, u8, u8) = (150, 150, 150);

/// 제출된 추측 한 행
#[derive(Debug, Clone)]
pub struct BoardRow {
    /// 추측한 두 글자
    pub letters: [char; MAX_LETTERS],
    /// 글자별 피드백
    pub feedback: [Feedback; MAX_LETTERS],
    /// 이 행에서 사용한 힌트 자모 (표시용)
    pub hint: Option<char>,
}

impl BoardRow {
    /// 두 글자 모두 정답인 행인지
    pub fn is_winning(&self) -> bool {
        self.feedback.iter().all(|&f| f == Feedback::Match)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emotes_distinct() {
        let all = [
            Feedback::Match,
            Feedback::Similar,
            Feedback::Many,
            Feedback::Exists,
            Feedback::Opposite,
            Feedback::None,
        ];
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(a.emote(), b.emote());
                assert_ne!(a.rgb(), b.rgb());
            }
        }
    }

    #[test]
    fn test_is_winning() {
        let row = BoardRow {
            letters: ['사', '과'],
            feedback: [Feedback::Match, Feedback::Match],
            hint: None,
        };
        assert!(row.is_winning());

        let row = BoardRow {
            letters: ['사', '자'],
            feedback: [Feedback::Match, Feedback::Exists],
            hint: None,
        };
        assert!(!row.is_winning());
    }
}
