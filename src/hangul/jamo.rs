//! 두벌식 자판 영문 키 -> 한글 자모 매핑

/// 영문 키 하나를 두벌식 자모 문자로 변환
/// 매핑에 없는 문자(숫자, 특수문자, 한글 등)는 그대로 반환
pub fn key_to_jamo(key: char) -> char {
    match key {
        // 자음
        'r' => 'ㄱ',
        'R' => 'ㄲ',
        's' => 'ㄴ',
        'e' => 'ㄷ',
        'E' => 'ㄸ',
        'f' => 'ㄹ',
        'a' => 'ㅁ',
        'q' => 'ㅂ',
        'Q' => 'ㅃ',
        't' => 'ㅅ',
        'T' => 'ㅆ',
        'd' => 'ㅇ',
        'w' => 'ㅈ',
        'W' => 'ㅉ',
        'c' => 'ㅊ',
        'z' => 'ㅋ',
        'x' => 'ㅌ',
        'v' => 'ㅍ',
        'g' => 'ㅎ',
        // 모음
        'k' => 'ㅏ',
        'o' => 'ㅐ',
        'i' => 'ㅑ',
        'O' => 'ㅒ',
        'j' => 'ㅓ',
        'p' => 'ㅔ',
        'u' => 'ㅕ',
        'P' => 'ㅖ',
        'h' => 'ㅗ',
        'y' => 'ㅛ',
        'n' => 'ㅜ',
        'b' => 'ㅠ',
        'm' => 'ㅡ',
        'l' => 'ㅣ',
        _ => key,
    }
}

/// 게임 키보드 배열 (두벌식 기준, 겹자모 행 포함)
/// 구성 자모 33개(자음 19 + 단순 모음 14)를 모두 포함한다
#[rustfmt::skip]
pub const KEYBOARD_ROWS: [&[char]; 4] = [
    &['ㅃ', 'ㅉ', 'ㄸ', 'ㄲ', 'ㅆ', 'ㅒ', 'ㅖ'],
    &['ㅂ', 'ㅈ', 'ㄷ', 'ㄱ', 'ㅅ', 'ㅛ', 'ㅕ', 'ㅑ', 'ㅐ', 'ㅔ'],
    &['ㅁ', 'ㄴ', 'ㅇ', 'ㄹ', 'ㅎ', 'ㅗ', 'ㅓ', 'ㅏ', 'ㅣ'],
    &['ㅋ', 'ㅌ', 'ㅊ', 'ㅍ', 'ㅠ', 'ㅜ', 'ㅡ'],
];
