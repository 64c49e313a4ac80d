//! 자모 조합 가능성 테이블
//!
//! 한 음절 안에서 두 자모가 공존할 수 있는지를 담은 고정 테이블.
//! 모음끼리는 복합 모음을 이룰 때만, 자음끼리는 겹받침을 이룰 때만 조합 가능.
//! 추론 엔진이 "확정된 자모와 공존 불가능한 자모"를 소거할 때 사용한다.

/// 받침 없음 표시 (자음 조합 테이블의 0번 항목)
pub const NO_BATCHIM_MARK: char = ' ';

/// 게임 구성 자음 19개 (초성 순서)
#[rustfmt::skip]
pub const CONSONANT_COMPONENTS: [char; 19] = [
    'ㄱ', 'ㄲ', 'ㄴ', 'ㄷ', 'ㄸ', 'ㄹ', 'ㅁ', 'ㅂ', 'ㅃ', 'ㅅ',
    'ㅆ', 'ㅇ', 'ㅈ', 'ㅉ', 'ㅊ', 'ㅋ', 'ㅌ', 'ㅍ', 'ㅎ',
];

/// 게임 구성 모음 14개 (단순 모음만, 복합 모음은 분해되어 들어옴)
#[rustfmt::skip]
pub const VOWEL_COMPONENTS: [char; 14] = [
    'ㅏ', 'ㅐ', 'ㅑ', 'ㅒ', 'ㅓ', 'ㅔ', 'ㅕ', 'ㅖ', 'ㅗ', 'ㅛ',
    'ㅜ', 'ㅠ', 'ㅡ', 'ㅣ',
];

/// 모음 조합 테이블 (14x14, 대칭)
/// 인덱스: ㅏ(0) ㅐ(1) ㅑ(2) ㅒ(3) ㅓ(4) ㅔ(5) ㅕ(6) ㅖ(7) ㅗ(8) ㅛ(9)
///         ㅜ(10) ㅠ(11) ㅡ(12) ㅣ(13)
/// 1 = 복합 모음으로 조합 가능 (ㅘ ㅙ ㅚ ㅝ ㅞ ㅟ ㅢ), 대각선은 1
#[rustfmt::skip]
const VOWEL_PAIRING: [[u8; 14]; 14] = [
    [1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0], // ㅏ
    [0, 1, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0], // ㅐ
    [0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0], // ㅑ
    [0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0], // ㅒ
    [0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0], // ㅓ
    [0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0], // ㅔ
    [0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0], // ㅕ
    [0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0], // ㅖ
    [1, 1, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1], // ㅗ
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0], // ㅛ
    [0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 1, 0, 0, 1], // ㅜ
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0], // ㅠ
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1], // ㅡ
    [0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 1, 0, 1, 1], // ㅣ
];

/// 자음 조합 테이블 (20x20, 대칭)
/// 인덱스: 받침없음(0) ㄱ(1) ㄲ(2) ㄴ(3) ㄷ(4) ㄸ(5) ㄹ(6) ㅁ(7) ㅂ(8) ㅃ(9)
///         ㅅ(10) ㅆ(11) ㅇ(12) ㅈ(13) ㅉ(14) ㅊ(15) ㅋ(16) ㅌ(17) ㅍ(18) ㅎ(19)
/// 0번 행: 받침이 될 수 있으면 1 (ㄸ/ㅃ/ㅉ만 0)
/// 나머지: 겹받침으로 조합 가능하면 1 (ㄳ ㄵ ㄶ ㄺ ㄻ ㄼ ㄽ ㄾ ㄿ ㅀ ㅄ), 대각선은 1
#[rustfmt::skip]
const CONSONANT_PAIRING: [[u8; 20]; 20] = [
    [1, 1, 1, 1, 1, 0, 1, 1, 1, 0, 1, 1, 1, 1, 0, 1, 1, 1, 1, 1], // 받침없음
    [1, 1, 0, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0], // ㄱ
    [1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0], // ㄲ
    [1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1], // ㄴ
    [1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0], // ㄷ
    [0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0], // ㄸ
    [1, 1, 0, 0, 0, 0, 1, 1, 1, 0, 1, 0, 0, 0, 0, 0, 0, 1, 1, 1], // ㄹ
    [1, 0, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0], // ㅁ
    [1, 0, 0, 0, 0, 0, 1, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0], // ㅂ
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0], // ㅃ
    [1, 1, 0, 0, 0, 0, 1, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0], // ㅅ
    [1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0], // ㅆ
    [1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0], // ㅇ
    [1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0], // ㅈ
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0], // ㅉ
    [1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0], // ㅊ
    [1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0], // ㅋ
    [1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0], // ㅌ
    [1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0], // ㅍ
    [1, 0, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1], // ㅎ
];

/// 모음 문자 -> 조합 테이블 인덱스
fn vowel_pairing_index(c: char) -> Option<usize> {
    VOWEL_COMPONENTS.iter().position(|&v| v == c)
}

/// 자음 문자 -> 조합 테이블 인덱스 (받침없음 표시는 0)
fn consonant_pairing_index(c: char) -> Option<usize> {
    if c == NO_BATCHIM_MARK {
        return Some(0);
    }
    CONSONANT_COMPONENTS.iter().position(|&j| j == c).map(|i| i + 1)
}

/// 서로 다른 두 모음이 한 음절에서 공존 불가능한지 확인
/// 모음이 아니거나 같은 자모면 false
pub fn are_unpairable_vowels(a: char, b: char) -> bool {
    let (Some(ai), Some(bi)) = (vowel_pairing_index(a), vowel_pairing_index(b)) else {
        return false;
    };
    a != b && VOWEL_PAIRING[ai][bi] == 0
}

/// 서로 다른 두 자음이 한 음절에서 공존 불가능한지 확인
/// 자음이 아니거나 같은 자모면 false
pub fn are_unpairable_consonants(a: char, b: char) -> bool {
    let (Some(ai), Some(bi)) = (consonant_pairing_index(a), consonant_pairing_index(b)) else {
        return false;
    };
    a != b && CONSONANT_PAIRING[ai][bi] == 0
}

/// 주어진 모음과 공존 불가능한 모음 목록
/// 모음이 아니면 빈 목록
pub fn unpairable_vowels(c: char) -> Vec<char> {
    let Some(ci) = vowel_pairing_index(c) else {
        return Vec::new();
    };
    VOWEL_COMPONENTS
        .iter()
        .enumerate()
        .filter(|&(i, _)| VOWEL_PAIRING[ci][i] == 0)
        .map(|(_, &v)| v)
        .collect()
}

/// 주어진 자음과 공존 불가능한 자음 목록
/// 받침없음 표시를 주면 받침이 될 수 없는 자음 목록 (ㄸ ㅃ ㅉ)
pub fn unpairable_consonants(c: char) -> Vec<char> {
    let Some(ci) = consonant_pairing_index(c) else {
        return Vec::new();
    };
    CONSONANT_COMPONENTS
        .iter()
        .enumerate()
        .filter(|&(i, _)| CONSONANT_PAIRING[ci][i + 1] == 0)
        .map(|(_, &j)| j)
        .collect()
}
