//! 유니코드 한글 조합/분해 유틸리티

/// 한글 음절 시작 코드포인트 (가)
const HANGUL_SYLLABLE_BASE: u32 = 0xAC00;
/// 한글 음절 끝 코드포인트 (힣)
const HANGUL_SYLLABLE_LAST: u32 = 0xD7A3;

/// 초성 개수
const CHOSEONG_COUNT: u32 = 19;
/// 중성 개수
const JUNGSEONG_COUNT: u32 = 21;
/// 종성 개수 (종성 없음 포함)
const JONGSEONG_COUNT: u32 = 28;

/// 완성형 한글 음절인지 확인 (가 ~ 힣)
pub fn is_hangul_syllable(c: char) -> bool {
    (HANGUL_SYLLABLE_BASE..=HANGUL_SYLLABLE_LAST).contains(&(c as u32))
}

/// 호환용 자음 자모인지 확인 (ㄱ ~ ㅎ, 복합 자음 포함)
pub fn is_consonant_jamo(c: char) -> bool {
    ('\u{3131}'..='\u{314E}').contains(&c)
}

/// 호환용 모음 자모인지 확인 (ㅏ ~ ㅣ)
pub fn is_vowel_jamo(c: char) -> bool {
    ('\u{314F}'..='\u{3163}').contains(&c)
}

/// 초성/중성/종성 인덱스로 완성된 한글 음절 생성
/// - cho: 초성 인덱스 (0~18)
/// - jung: 중성 인덱스 (0~20)
/// - jong: 종성 인덱스 (0~27, 0 = 종성 없음)
pub fn compose_syllable(cho: u32, jung: u32, jong: u32) -> Option<char> {
    if cho >= CHOSEONG_COUNT || jung >= JUNGSEONG_COUNT || jong >= JONGSEONG_COUNT {
        return None;
    }
    let code = HANGUL_SYLLABLE_BASE + (cho * JUNGSEONG_COUNT + jung) * JONGSEONG_COUNT + jong;
    char::from_u32(code)
}

/// 완성형 한글 음절을 초성/중성/종성 인덱스로 분해
/// 반환: (초성 인덱스, 중성 인덱스, 종성 인덱스)
pub fn decompose_syllable(c: char) -> Option<(u32, u32, u32)> {
    if !is_hangul_syllable(c) {
        return None;
    }
    let offset = c as u32 - HANGUL_SYLLABLE_BASE;
    let jong = offset % JONGSEONG_COUNT;
    let jung = (offset / JONGSEONG_COUNT) % JUNGSEONG_COUNT;
    let cho = offset / (JUNGSEONG_COUNT * JONGSEONG_COUNT);
    Some((cho, jung, jong))
}

/// 초성 인덱스 순서의 호환용 자모 (19개)
#[rustfmt::skip]
const CHOSEONG_JAMO: [char; 19] = [
    'ㄱ', 'ㄲ', 'ㄴ', 'ㄷ', 'ㄸ', 'ㄹ', 'ㅁ', 'ㅂ', 'ㅃ', 'ㅅ',
    'ㅆ', 'ㅇ', 'ㅈ', 'ㅉ', 'ㅊ', 'ㅋ', 'ㅌ', 'ㅍ', 'ㅎ',
];

/// 중성 인덱스 순서의 호환용 자모 (21개)
#[rustfmt::skip]
const JUNGSEONG_JAMO: [char; 21] = [
    'ㅏ', 'ㅐ', 'ㅑ', 'ㅒ', 'ㅓ', 'ㅔ', 'ㅕ', 'ㅖ', 'ㅗ', 'ㅘ',
    'ㅙ', 'ㅚ', 'ㅛ', 'ㅜ', 'ㅝ', 'ㅞ', 'ㅟ', 'ㅠ', 'ㅡ', 'ㅢ', 'ㅣ',
];

/// 초성 인덱스 -> 호환용 자모 문자
pub fn choseong_to_jamo_char(cho: u32) -> Option<char> {
    CHOSEONG_JAMO.get(cho as usize).copied()
}

/// 중성 인덱스 -> 호환용 자모 문자
pub fn jungseong_to_jamo_char(jung: u32) -> Option<char> {
    JUNGSEONG_JAMO.get(jung as usize).copied()
}

/// 호환용 자모 문자 -> 초성 인덱스
pub fn jamo_char_to_choseong(c: char) -> Option<u32> {
    CHOSEONG_JAMO.iter().position(|&j| j == c).map(|i| i as u32)
}

/// 호환용 자모 문자 -> 중성 인덱스
pub fn jamo_char_to_jungseong(c: char) -> Option<u32> {
    JUNGSEONG_JAMO.iter().position(|&j| j == c).map(|i| i as u32)
}

/// 호환용 자음 문자 -> 종성 인덱스
/// ㄸ/ㅃ/ㅉ는 종성이 될 수 없으므로 None
pub fn jamo_char_to_jongseong(c: char) -> Option<u32> {
    // 종성 인덱스 순서 (28개, 0 = 없음):
    // 없음(0) ㄱ(1) ㄲ(2) ㄳ(3) ㄴ(4) ㄵ(5) ㄶ(6) ㄷ(7) ㄹ(8) ㄺ(9)
    // ㄻ(10) ㄼ(11) ㄽ(12) ㄾ(13) ㄿ(14) ㅀ(15) ㅁ(16) ㅂ(17) ㅄ(18) ㅅ(19)
    // ㅆ(20) ㅇ(21) ㅈ(22) ㅊ(23) ㅋ(24) ㅌ(25) ㅍ(26) ㅎ(27)
    match c {
        'ㄱ' => Some(1),
        'ㄲ' => Some(2),
        'ㄴ' => Some(4),
        'ㄷ' => Some(7),
        'ㄹ' => Some(8),
        'ㅁ' => Some(16),
        'ㅂ' => Some(17),
        'ㅅ' => Some(19),
        'ㅆ' => Some(20),
        'ㅇ' => Some(21),
        'ㅈ' => Some(22),
        'ㅊ' => Some(23),
        'ㅋ' => Some(24),
        'ㅌ' => Some(25),
        'ㅍ' => Some(26),
        'ㅎ' => Some(27),
        _ => None,
    }
}

/// 두 중성을 복합 모음으로 조합
/// 반환: 복합 모음 인덱스 (조합 불가 시 None)
pub fn combine_jungseong(first: u32, second: u32) -> Option<u32> {
    match (first, second) {
        (8, 0) => Some(9),    // ㅗ + ㅏ = ㅘ
        (8, 1) => Some(10),   // ㅗ + ㅐ = ㅙ
        (8, 20) => Some(11),  // ㅗ + ㅣ = ㅚ
        (13, 4) => Some(14),  // ㅜ + ㅓ = ㅝ
        (13, 5) => Some(15),  // ㅜ + ㅔ = ㅞ
        (13, 20) => Some(16), // ㅜ + ㅣ = ㅟ
        (18, 20) => Some(19), // ㅡ + ㅣ = ㅢ
        _ => None,
    }
}

/// 복합 모음의 첫 구성 모음 인덱스
/// 한 자모만 지울 때 복합 모음이 단순 모음으로 되돌아가는 데 사용
pub fn jungseong_first_part(jung: u32) -> Option<u32> {
    match jung {
        9 | 10 | 11 => Some(8),  // ㅘ/ㅙ/ㅚ -> ㅗ
        14 | 15 | 16 => Some(13), // ㅝ/ㅞ/ㅟ -> ㅜ
        19 => Some(18),           // ㅢ -> ㅡ
        _ => None,
    }
}

/// 두 종성을 복합 종성으로 조합
/// 반환: 복합 종성 인덱스 (조합 불가 시 None)
pub fn combine_jongseong(first: u32, second: u32) -> Option<u32> {
    match (first, second) {
        (1, 19) => Some(3),   // ㄱ + ㅅ = ㄳ
        (4, 22) => Some(5),   // ㄴ + ㅈ = ㄵ
        (4, 27) => Some(6),   // ㄴ + ㅎ = ㄶ
        (8, 1) => Some(9),    // ㄹ + ㄱ = ㄺ
        (8, 16) => Some(10),  // ㄹ + ㅁ = ㄻ
        (8, 17) => Some(11),  // ㄹ + ㅂ = ㄼ
        (8, 19) => Some(12),  // ㄹ + ㅅ = ㄽ
        (8, 25) => Some(13),  // ㄹ + ㅌ = ㄾ
        (8, 26) => Some(14),  // ㄹ + ㅍ = ㄿ
        (8, 27) => Some(15),  // ㄹ + ㅎ = ㅀ
        (17, 19) => Some(18), // ㅂ + ㅅ = ㅄ
        _ => None,
    }
}

/// 복합 종성을 분리
/// 반환: (남는 종성 인덱스, 분리된 자음의 초성 인덱스)
/// 두 번째 값은 다음 글자의 초성으로 이동
pub fn split_jongseong(jong: u32) -> Option<(u32, u32)> {
    match jong {
        3 => Some((1, 9)),   // ㄳ -> ㄱ + ㅅ(초성)
        5 => Some((4, 12)),  // ㄵ -> ㄴ + ㅈ(초성)
        6 => Some((4, 18)),  // ㄶ -> ㄴ + ㅎ(초성)
        9 => Some((8, 0)),   // ㄺ -> ㄹ + ㄱ(초성)
        10 => Some((8, 6)),  // ㄻ -> ㄹ + ㅁ(초성)
        11 => Some((8, 7)),  // ㄼ -> ㄹ + ㅂ(초성)
        12 => Some((8, 9)),  // ㄽ -> ㄹ + ㅅ(초성)
        13 => Some((8, 16)), // ㄾ -> ㄹ + ㅌ(초성)
        14 => Some((8, 17)), // ㄿ -> ㄹ + ㅍ(초성)
        15 => Some((8, 18)), // ㅀ -> ㄹ + ㅎ(초성)
        18 => Some((17, 9)), // ㅄ -> ㅂ + ㅅ(초성)
        _ => None,
    }
}

/// 단일 종성을 초성 인덱스로 변환
/// 종성이 다음 글자의 초성으로 이동할 때 사용
pub fn jongseong_to_choseong(jong: u32) -> Option<u32> {
    match jong {
        1 => Some(0),   // ㄱ
        2 => Some(1),   // ㄲ
        4 => Some(2),   // ㄴ
        7 => Some(3),   // ㄷ
        8 => Some(5),   // ㄹ
        16 => Some(6),  // ㅁ
        17 => Some(7),  // ㅂ
        19 => Some(9),  // ㅅ
        20 => Some(10), // ㅆ
        21 => Some(11), // ㅇ
        22 => Some(12), // ㅈ
        23 => Some(14), // ㅊ
        24 => Some(15), // ㅋ
        25 => Some(16), // ㅌ
        26 => Some(17), // ㅍ
        27 => Some(18), // ㅎ
        _ => None,
    }
}
