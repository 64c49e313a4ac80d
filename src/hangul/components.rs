//! 음절 -> 게임용 자모 구성요소 분해
//!
//! 복합 모음과 복합 받침은 단순 자모로 펼쳐서 비교한다.
//! 예: 곽 -> [ㄱ, ㅗ, ㅏ, ㄱ], 값 -> [ㄱ, ㅏ, ㅂ, ㅅ]

use super::unicode::{choseong_to_jamo_char, decompose_syllable};

/// 중성 인덱스 -> 구성 모음 자모 (복합 모음은 2개로 펼침)
pub fn jungseong_components(jung: u32) -> &'static [char] {
    match jung {
        0 => &['ㅏ'],
        1 => &['ㅐ'],
        2 => &['ㅑ'],
        3 => &['ㅒ'],
        4 => &['ㅓ'],
        5 => &['ㅔ'],
        6 => &['ㅕ'],
        7 => &['ㅖ'],
        8 => &['ㅗ'],
        9 => &['ㅗ', 'ㅏ'],  // ㅘ
        10 => &['ㅗ', 'ㅐ'], // ㅙ
        11 => &['ㅗ', 'ㅣ'], // ㅚ
        12 => &['ㅛ'],
        13 => &['ㅜ'],
        14 => &['ㅜ', 'ㅓ'], // ㅝ
        15 => &['ㅜ', 'ㅔ'], // ㅞ
        16 => &['ㅜ', 'ㅣ'], // ㅟ
        17 => &['ㅠ'],
        18 => &['ㅡ'],
        19 => &['ㅡ', 'ㅣ'], // ㅢ
        20 => &['ㅣ'],
        _ => &[],
    }
}

/// 종성 인덱스 -> 구성 자음 자모 (복합 받침은 2개로 펼침, 0 = 없음)
pub fn jongseong_components(jong: u32) -> &'static [char] {
    match jong {
        0 => &[],
        1 => &['ㄱ'],
        2 => &['ㄲ'],
        3 => &['ㄱ', 'ㅅ'],  // ㄳ
        4 => &['ㄴ'],
        5 => &['ㄴ', 'ㅈ'],  // ㄵ
        6 => &['ㄴ', 'ㅎ'],  // ㄶ
        7 => &['ㄷ'],
        8 => &['ㄹ'],
        9 => &['ㄹ', 'ㄱ'],  // ㄺ
        10 => &['ㄹ', 'ㅁ'], // ㄻ
        11 => &['ㄹ', 'ㅂ'], // ㄼ
        12 => &['ㄹ', 'ㅅ'], // ㄽ
        13 => &['ㄹ', 'ㅌ'], // ㄾ
        14 => &['ㄹ', 'ㅍ'], // ㄿ
        15 => &['ㄹ', 'ㅎ'], // ㅀ
        16 => &['ㅁ'],
        17 => &['ㅂ'],
        18 => &['ㅂ', 'ㅅ'], // ㅄ
        19 => &['ㅅ'],
        20 => &['ㅆ'],
        21 => &['ㅇ'],
        22 => &['ㅈ'],
        23 => &['ㅊ'],
        24 => &['ㅋ'],
        25 => &['ㅌ'],
        26 => &['ㅍ'],
        27 => &['ㅎ'],
        _ => &[],
    }
}

/// 음절 하나를 게임용 구성 자모 목록으로 분해
/// 완성형 음절이 아니면 입력 문자를 그대로 하나의 구성요소로 반환
pub fn syllable_components(c: char) -> Vec<char> {
    let Some((cho, jung, jong)) = decompose_syllable(c) else {
        return vec![c];
    };
    let mut components = Vec::with_capacity(4);
    if let Some(lead) = choseong_to_jamo_char(cho) {
        components.push(lead);
    }
    components.extend_from_slice(jungseong_components(jung));
    components.extend_from_slice(jongseong_components(jong));
    components
}

/// 단어의 글자별 구성 자모 목록
pub fn word_components(word: &str) -> Vec<Vec<char>> {
    word.chars().map(syllable_components).collect()
}
