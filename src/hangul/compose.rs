//! 자모 입력 조합 (IME식 덧붙이기 / 한 자모 지우기)

use super::unicode::{
    choseong_to_jamo_char, combine_jongseong, combine_jungseong, compose_syllable,
    decompose_syllable, is_consonant_jamo, is_vowel_jamo, jamo_char_to_choseong,
    jamo_char_to_jongseong, jamo_char_to_jungseong, jongseong_to_choseong, jungseong_first_part,
    split_jongseong,
};

/// 마지막 글자에 자모 하나를 덧붙여 조합
///
/// 조합 결과:
/// - 자음 + 모음 -> 음절 ("ㄱ" + ㅏ -> "가")
/// - 음절 + 모음 -> 복합 모음 ("고" + ㅏ -> "과"),
///   받침이 있으면 받침이 다음 글자 초성으로 이동 ("각" + ㅏ -> "가가")
/// - 음절 + 자음 -> 받침 추가/겹받침 ("가" + ㄱ -> "각", "각" + ㅅ -> "갃")
///
/// 조합이 불가능하면 단순 이어붙인 문자열을 반환하며,
/// 호출자는 이를 비교해서 새 글자 시작으로 처리한다
pub fn append_jamo(previous: char, key: char) -> String {
    if is_consonant_jamo(previous) {
        if is_vowel_jamo(key) {
            if let (Some(cho), Some(jung)) =
                (jamo_char_to_choseong(previous), jamo_char_to_jungseong(key))
            {
                if let Some(syllable) = compose_syllable(cho, jung, 0) {
                    return syllable.to_string();
                }
            }
        }
        return format!("{previous}{key}");
    }

    let Some((cho, jung, jong)) = decompose_syllable(previous) else {
        return format!("{previous}{key}");
    };

    if is_vowel_jamo(key) {
        let Some(new_jung) = jamo_char_to_jungseong(key) else {
            return format!("{previous}{key}");
        };
        if jong == 0 {
            // 복합 모음 시도
            if let Some(combined) = combine_jungseong(jung, new_jung) {
                if let Some(syllable) = compose_syllable(cho, combined, 0) {
                    return syllable.to_string();
                }
            }
            return format!("{previous}{key}");
        }
        // 받침이 다음 글자의 초성으로 이동
        let (remaining_jong, moved_cho) = match split_jongseong(jong) {
            Some((remain, moved)) => (remain, Some(moved)),
            None => (0, jongseong_to_choseong(jong)),
        };
        if let Some(moved_cho) = moved_cho {
            if let (Some(stripped), Some(next)) = (
                compose_syllable(cho, jung, remaining_jong),
                compose_syllable(moved_cho, new_jung, 0),
            ) {
                return format!("{stripped}{next}");
            }
        }
        return format!("{previous}{key}");
    }

    if is_consonant_jamo(key) {
        if let Some(new_jong) = jamo_char_to_jongseong(key) {
            let combined = if jong == 0 {
                Some(new_jong)
            } else {
                combine_jongseong(jong, new_jong)
            };
            if let Some(combined) = combined {
                if let Some(syllable) = compose_syllable(cho, jung, combined) {
                    return syllable.to_string();
                }
            }
        }
        return format!("{previous}{key}");
    }

    format!("{previous}{key}")
}

/// 마지막 글자에서 자모 하나를 지우기
///
/// - 겹받침 -> 첫 받침만 남김 ("갃" -> "각")
/// - 단일 받침 -> 받침 제거 ("각" -> "가")
/// - 복합 모음 -> 첫 모음만 남김 ("과" -> "고")
/// - 단순 모음 -> 초성 자모만 남김 ("가" -> "ㄱ")
/// - 낱자모 -> 빈 문자열
pub fn delete_one_jamo(previous: char) -> String {
    let Some((cho, jung, jong)) = decompose_syllable(previous) else {
        return String::new();
    };

    if jong != 0 {
        let remaining_jong = split_jongseong(jong).map(|(remain, _)| remain).unwrap_or(0);
        return compose_syllable(cho, jung, remaining_jong)
            .map(String::from)
            .unwrap_or_default();
    }

    if let Some(first) = jungseong_first_part(jung) {
        return compose_syllable(cho, first, 0)
            .map(String::from)
            .unwrap_or_default();
    }

    choseong_to_jamo_char(cho).map(String::from).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_consonant_vowel() {
        assert_eq!(append_jamo('ㄱ', 'ㅏ'), "가");
        assert_eq!(append_jamo('ㄴ', 'ㅗ'), "노");
        assert_eq!(append_jamo('ㅎ', 'ㅣ'), "히");
    }

    #[test]
    fn test_append_compound_vowel() {
        assert_eq!(append_jamo('고', 'ㅏ'), "과");
        assert_eq!(append_jamo('오', 'ㅐ'), "왜");
        assert_eq!(append_jamo('으', 'ㅣ'), "의");
        // 복합 모음이 없는 쌍은 이어붙임
        assert_eq!(append_jamo('가', 'ㅗ'), "가ㅗ");
    }

    #[test]
    fn test_append_batchim() {
        assert_eq!(append_jamo('가', 'ㄱ'), "각");
        assert_eq!(append_jamo('각', 'ㅅ'), "갃");
        assert_eq!(append_jamo('달', 'ㄱ'), "닭");
        // 겹받침 불가 조합은 이어붙임
        assert_eq!(append_jamo('각', 'ㄱ'), "각ㄱ");
        // 받침이 될 수 없는 자음도 이어붙임
        assert_eq!(append_jamo('가', 'ㄸ'), "가ㄸ");
    }

    #[test]
    fn test_append_batchim_moves_to_next() {
        // 받침이 다음 글자 초성으로 이동
        assert_eq!(append_jamo('각', 'ㅏ'), "가가");
        assert_eq!(append_jamo('갃', 'ㅏ'), "각사");
        assert_eq!(append_jamo('닭', 'ㅡ'), "달그");
    }

    #[test]
    fn test_append_no_composition() {
        // 자음 + 자음은 이어붙임 (호출자가 새 글자 시작으로 처리)
        assert_eq!(append_jamo('ㄱ', 'ㄷ'), "ㄱㄷ");
        // 모음 단독에는 덧붙일 수 없음
        assert_eq!(append_jamo('ㅏ', 'ㄱ'), "ㅏㄱ");
        assert_eq!(append_jamo('ㅏ', 'ㅏ'), "ㅏㅏ");
        // 한글이 아닌 문자
        assert_eq!(append_jamo('a', 'ㄱ'), "aㄱ");
    }

    #[test]
    fn test_delete_one_jamo() {
        assert_eq!(delete_one_jamo('갃'), "각");
        assert_eq!(delete_one_jamo('각'), "가");
        assert_eq!(delete_one_jamo('과'), "고");
        assert_eq!(delete_one_jamo('가'), "ㄱ");
        assert_eq!(delete_one_jamo('ㄱ'), "");
        assert_eq!(delete_one_jamo('닭'), "달");
        assert_eq!(delete_one_jamo('의'), "으");
    }

    #[test]
    fn test_delete_until_empty() {
        // 어떤 음절이든 유한 단계 안에 빈 문자열 도달
        for &c in &['갃', '뷁', '가', 'ㅎ', '의'] {
            let mut current = c.to_string();
            let mut steps = 0;
            while !current.is_empty() {
                let last = current.chars().last().unwrap();
                let replaced = delete_one_jamo(last);
                current.pop();
                current.push_str(&replaced);
                steps += 1;
                assert!(steps <= 5, "{c}에서 삭제가 끝나지 않음");
            }
        }
    }
}
