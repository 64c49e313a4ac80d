//! 입력 단어 검사와 채점
//!
//! 제출된 두 글자를 정답과 견주어 글자별 피드백을 정하고,
//! 그 피드백에서 바로 끌어낼 수 있는 단서를 저장소에 적는다.

use thiserror::Error;

use crate::game::clues::ClueBoard;
use crate::game::constants::MAX_LETTERS;
use crate::game::feedback::Feedback;
use crate::hangul::pairing::{
    unpairable_consonants, CONSONANT_COMPONENTS, NO_BATCHIM_MARK, VOWEL_COMPONENTS,
};
use crate::hangul::{
    is_consonant_jamo, is_hangul_syllable, is_vowel_jamo, syllable_components, word_components,
};
use crate::words::WordBook;

/// 제출이 거부된 이유
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    /// 두 글자 미만이거나 완성되지 않은 글자가 섞여 있음
    #[error("2개 글자를 입력하세요")]
    IncompleteWord,
    /// 사전에 없는 단어
    #[error("옳은 단어를 입력하세요")]
    UnknownWord,
    /// 모든 자음과 모음이 이미 오답으로 판정된 단어
    #[error("자음과 모음들이 모두 틀려요")]
    AllComponentsWrong,
    /// 이미 끝난 게임에 제출함
    #[error("이미 끝난 게임이에요")]
    GameFinished,
}

/// 두 자모 목록이 공유하는 자모 개수 (중복 포함)
///
/// 한쪽에서 이미 짝지은 자모는 다시 세지 않는다.
pub fn count_shared_components(xs: &[char], ys: &[char]) -> usize {
    let mut used = vec![false; ys.len()];
    let mut shared = 0;
    for &x in xs {
        for (j, &y) in ys.iter().enumerate() {
            if !used[j] && x == y {
                used[j] = true;
                shared += 1;
                break;
            }
        }
    }
    shared
}

/// 추측 글자 하나를 정답과 견주어 피드백 분류
pub fn classify(guess_syllable: char, secret: &str, pos: usize) -> Feedback {
    let secret_chars: Vec<char> = secret.chars().collect();
    let secret_syllable = secret_chars.get(pos).copied().unwrap_or(NO_BATCHIM_MARK);
    if guess_syllable == secret_syllable {
        return Feedback::Match;
    }

    let comps = syllable_components(guess_syllable);
    let secret_comps = syllable_components(secret_syllable);
    let shared = count_shared_components(&comps, &secret_comps);

    if shared > 1 {
        // 첫 자모까지 같으면 비슷해요, 아니면 많을 거예요
        if comps.first() == secret_comps.first() {
            return Feedback::Similar;
        }
        return Feedback::Many;
    }
    if shared == 1 {
        return Feedback::Exists;
    }

    // 이 자리에는 없지만 반대쪽 글자에는 있는 경우
    let other = MAX_LETTERS - 1 - pos;
    let other_syllable = secret_chars.get(other).copied().unwrap_or(NO_BATCHIM_MARK);
    let other_comps = syllable_components(other_syllable);
    if count_shared_components(&comps, &other_comps) > 0 {
        return Feedback::Opposite;
    }
    Feedback::None
}

/// 두 글자 전체를 한 번에 분류
pub fn classify_word(guess: &str, secret: &str) -> [Feedback; MAX_LETTERS] {
    let mut feedback = [Feedback::None; MAX_LETTERS];
    for (pos, syllable) in guess.chars().take(MAX_LETTERS).enumerate() {
        feedback[pos] = classify(syllable, secret, pos);
    }
    feedback
}

/// 제출 전 검사: 글자 수, 사전, 전부-오답 순서로 확인
pub fn validate(input: &str, words: &WordBook, clues: &ClueBoard) -> Result<(), GuessError> {
    let chars: Vec<char> = input.chars().collect();
    if chars.len() != MAX_LETTERS || chars.iter().any(|&c| !is_hangul_syllable(c)) {
        return Err(GuessError::IncompleteWord);
    }
    if !words.exists(input) {
        return Err(GuessError::UnknownWord);
    }
    let all_wrong = word_components(input)
        .iter()
        .enumerate()
        .all(|(pos, comps)| comps.iter().all(|&c| clues.is_no(c, pos)));
    if all_wrong {
        return Err(GuessError::AllComponentsWrong);
    }
    Ok(())
}

/// 입력 중 검사: 조합이 끝나지 않은 자모가 섞여 있어도 한글이면 통과
///
/// 화면에 입력란을 그리는 쪽에서 쓴다. 사전 검사는 제출 때만 한다.
pub fn is_valid_composing(input: &str) -> bool {
    let mut len = 0;
    for c in input.chars() {
        if !is_hangul_syllable(c) && !is_consonant_jamo(c) && !is_vowel_jamo(c) {
            return false;
        }
        len += 1;
    }
    len <= MAX_LETTERS
}

/// 피드백에서 바로 끌어낼 수 있는 단서를 저장소에 기록
pub fn apply_facts(
    clues: &mut ClueBoard,
    guess: &str,
    secret: &str,
    feedback: &[Feedback; MAX_LETTERS],
) {
    for (pos, syllable) in guess.chars().take(MAX_LETTERS).enumerate() {
        let comps = syllable_components(syllable);
        match feedback[pos] {
            Feedback::Match => apply_match(clues, &comps, pos),
            Feedback::Similar => apply_similar(clues, &comps, pos),
            Feedback::Many => apply_many(clues, &comps, pos),
            Feedback::Exists => apply_exists(clues, &comps, secret, pos),
            Feedback::Opposite => apply_opposite(clues, &comps, pos),
            Feedback::None => apply_none(clues, &comps),
        }
    }
}

/// 글자 전체가 맞음: 구성 자모는 전부 yes, 나머지 자모는 전부 no
fn apply_match(clues: &mut ClueBoard, comps: &[char], pos: usize) {
    for &c in comps {
        clues.add_yes(c, pos);
    }
    let rest = CONSONANT_COMPONENTS
        .iter()
        .chain(VOWEL_COMPONENTS.iter())
        .copied()
        .filter(|c| !comps.contains(c));
    clues.add_all_no(rest, pos);
}

/// 첫 자모가 맞고 2개 이상 겹침
fn apply_similar(clues: &mut ClueBoard, comps: &[char], pos: usize) {
    if comps.len() <= 2 {
        for &c in comps {
            clues.add_yes(c, pos);
        }
    } else if let Some(&lead) = comps.first() {
        clues.add_yes(lead, pos);
    }
    clues.add_hot_combo(comps.to_vec(), pos, 2, 10);
    // 첫 자음이 확정됐으니 이 글자의 나머지 자음 자리는 받침뿐이다
    // 받침이 될 수 없는 자음은 이 글자에 더 들어갈 수 없음
    clues.add_all_no(unpairable_consonants(NO_BATCHIM_MARK), pos);
}

/// 자모 2개 이상 겹침 (첫 자모는 다름)
fn apply_many(clues: &mut ClueBoard, comps: &[char], pos: usize) {
    if comps.len() <= 2 {
        // 자모 2개가 모두 겹쳤으니 둘 다 정답에 있다
        for &c in comps {
            clues.add_yes(c, pos);
        }
    }
    clues.add_hot_combo(comps.to_vec(), pos, 2, 10);
}

/// 자모 1개만 겹침: 어떤 자모인지 모르니 짝짓기로 후보를 좁힌다
fn apply_exists(clues: &mut ClueBoard, comps: &[char], secret: &str, pos: usize) {
    let secret_syllable = secret.chars().nth(pos).unwrap_or(NO_BATCHIM_MARK);
    let secret_comps = syllable_components(secret_syllable);
    let mut used = vec![false; secret_comps.len()];
    let mut matched = vec![false; comps.len()];

    // 1차: 같은 자리끼리 짝짓기
    for i in 0..comps.len() {
        if i < secret_comps.len() && !used[i] && secret_comps[i] == comps[i] {
            used[i] = true;
            matched[i] = true;
        }
    }
    // 2차: 남은 자모는 자리와 무관하게 짝짓기
    for i in 0..comps.len() {
        if matched[i] {
            continue;
        }
        if let Some(j) = (0..secret_comps.len()).find(|&j| !used[j] && secret_comps[j] == comps[i]) {
            used[j] = true;
            matched[i] = true;
        }
    }

    // 한 번도 짝지어지지 않은 자모 값만 no로 기록
    // (같은 값이 다른 자리에서 짝지어졌다면 그 자모는 정답에 있는 것)
    for (i, &c) in comps.iter().enumerate() {
        if matched[i] {
            continue;
        }
        let value_matched = comps
            .iter()
            .enumerate()
            .any(|(j, &d)| matched[j] && d == c);
        if !value_matched {
            clues.add_no(c, pos);
        }
    }

    let m = matched.iter().filter(|&&b| b).count();
    clues.add_hot_combo(comps.to_vec(), pos, m.max(1), m);
}

/// 이 자리에는 하나도 없지만 반대쪽 글자에는 있음
fn apply_opposite(clues: &mut ClueBoard, comps: &[char], pos: usize) {
    for &c in comps {
        clues.add_no(c, pos);
    }
    let other = MAX_LETTERS - 1 - pos;
    clues.add_hot_combo(comps.to_vec(), other, 1, 10);
}

/// 어느 글자에도 없음
fn apply_none(clues: &mut ClueBoard, comps: &[char]) {
    for pos in 0..MAX_LETTERS {
        for &c in comps {
            clues.add_no(c, pos);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::clues::HotCombo;

    // count_shared_components 테스트

    #[test]
    fn test_shared_components_multiset() {
        // 중복 자모는 짝지은 만큼만 센다
        assert_eq!(count_shared_components(&['ㄱ', 'ㅏ', 'ㄱ'], &['ㄱ', 'ㅗ']), 1);
        assert_eq!(count_shared_components(&['ㄱ', 'ㄱ'], &['ㄱ', 'ㄱ']), 2);
        assert_eq!(count_shared_components(&['ㅅ', 'ㅏ'], &['ㄱ', 'ㅗ', 'ㅏ']), 1);
        assert_eq!(count_shared_components(&['ㅍ', 'ㅣ'], &['ㅅ', 'ㅏ']), 0);
    }

    // classify 테스트 (정답: 사과)

    #[test]
    fn test_classify_match() {
        assert_eq!(classify('사', "사과", 0), Feedback::Match);
        assert_eq!(classify('과', "사과", 1), Feedback::Match);
    }

    #[test]
    fn test_classify_similar() {
        // 곡[ㄱㅗㄱ] vs 과[ㄱㅗㅏ]: 첫 자모 같고 ㄱ,ㅗ 겹침
        assert_eq!(classify('곡', "사과", 1), Feedback::Similar);
    }

    #[test]
    fn test_classify_many() {
        // 화[ㅎㅗㅏ] vs 과[ㄱㅗㅏ]: 첫 자모 다르고 ㅗ,ㅏ 겹침
        assert_eq!(classify('화', "사과", 1), Feedback::Many);
    }

    #[test]
    fn test_classify_exists() {
        // 가[ㄱㅏ] vs 사[ㅅㅏ]: ㅏ 하나만 겹침
        assert_eq!(classify('가', "사과", 0), Feedback::Exists);
    }

    #[test]
    fn test_classify_opposite() {
        // 고[ㄱㅗ] vs 사[ㅅㅏ]: 이 자리엔 없지만 과[ㄱㅗㅏ]에 있음
        assert_eq!(classify('고', "사과", 0), Feedback::Opposite);
    }

    #[test]
    fn test_classify_none() {
        // 피[ㅍㅣ]는 사과 어디에도 없음
        assert_eq!(classify('피', "사과", 0), Feedback::None);
        assert_eq!(classify('피', "사과", 1), Feedback::None);
    }

    #[test]
    fn test_classify_word_both_positions() {
        assert_eq!(classify_word("가지", "사과"), [Feedback::Exists, Feedback::None]);
        assert_eq!(classify_word("사과", "사과"), [Feedback::Match, Feedback::Match]);
    }

    // validate 테스트

    #[test]
    fn test_validate_incomplete() {
        let words = WordBook::new();
        let clues = ClueBoard::new();
        assert_eq!(validate("사", &words, &clues), Err(GuessError::IncompleteWord));
        assert_eq!(validate("", &words, &clues), Err(GuessError::IncompleteWord));
        // 마지막 글자가 자음만 남은 경우
        assert_eq!(validate("사ㄱ", &words, &clues), Err(GuessError::IncompleteWord));
        assert_eq!(validate("사과나", &words, &clues), Err(GuessError::IncompleteWord));
    }

    #[test]
    fn test_validate_unknown_word() {
        let words = WordBook::new();
        let clues = ClueBoard::new();
        assert_eq!(validate("흙밭", &words, &clues), Err(GuessError::UnknownWord));
    }

    #[test]
    fn test_validate_all_wrong() {
        let words = WordBook::new();
        let mut clues = ClueBoard::new();
        // 가지의 모든 자모를 오답 처리
        for &c in &['ㄱ', 'ㅏ'] {
            clues.add_no(c, 0);
        }
        for &c in &['ㅈ', 'ㅣ'] {
            clues.add_no(c, 1);
        }
        assert_eq!(validate("가지", &words, &clues), Err(GuessError::AllComponentsWrong));
        // 한 자모라도 살아 있으면 통과
        let mut partial = ClueBoard::new();
        partial.add_no('ㄱ', 0);
        assert_eq!(validate("가지", &words, &partial), Ok(()));
    }

    #[test]
    fn test_is_valid_composing() {
        // 조합 중인 자모와 빈 입력은 허용
        assert!(is_valid_composing(""));
        assert!(is_valid_composing("ㅅ"));
        assert!(is_valid_composing("사ㄱ"));
        assert!(is_valid_composing("사과"));
        // 한글이 아니거나 두 칸을 넘으면 거부
        assert!(!is_valid_composing("사x"));
        assert!(!is_valid_composing("ab"));
        assert!(!is_valid_composing("사과나"));
    }

    #[test]
    fn test_validate_ok() {
        let words = WordBook::new();
        let clues = ClueBoard::new();
        assert_eq!(validate("사과", &words, &clues), Ok(()));
    }

    // apply_facts 테스트

    #[test]
    fn test_apply_match_fills_both_lists() {
        let mut clues = ClueBoard::new();
        apply_facts(&mut clues, "사과", "사과", &[Feedback::Match, Feedback::Match]);
        for &c in &['ㅅ', 'ㅏ'] {
            assert!(clues.is_yes(c, 0));
        }
        for &c in &['ㄱ', 'ㅗ', 'ㅏ'] {
            assert!(clues.is_yes(c, 1));
        }
        // 글자에 없는 자모는 모두 no, 복합 자모는 알파벳이 아니므로 제외
        assert!(clues.is_no('ㄱ', 0));
        assert!(!clues.is_no('ㅄ', 0));
        assert!(clues.is_no('ㅅ', 1));
        assert!(!clues.is_no('ㅏ', 1));
    }

    #[test]
    fn test_apply_similar_blocks_non_batchim() {
        let mut clues = ClueBoard::new();
        // 곡[ㄱㅗㄱ] vs 과: 첫 자음만 yes, 쌍자음 ㄸㅃㅉ는 no
        apply_facts(&mut clues, "사곡", "사과", &[Feedback::Match, Feedback::Similar]);
        assert!(clues.is_yes('ㄱ', 1));
        assert!(!clues.is_yes('ㅗ', 1));
        for &c in &['ㄸ', 'ㅃ', 'ㅉ'] {
            assert!(clues.is_no(c, 1));
        }
        assert_eq!(
            clues.hot_combos_at(1),
            &[HotCombo { components: vec!['ㄱ', 'ㅗ', 'ㄱ'], min: 2, max: 10 }]
        );
    }

    #[test]
    fn test_apply_many_two_components_all_yes() {
        let mut clues = ClueBoard::new();
        // 고[ㄱㅗ] vs 옥[ㅇㅗㄱ]: 자모 2개가 전부 겹치므로 둘 다 yes
        assert_eq!(classify('고', "마옥", 1), Feedback::Many);
        apply_facts(&mut clues, "마고", "마옥", &[Feedback::Match, Feedback::Many]);
        assert!(clues.is_yes('ㄱ', 1));
        assert!(clues.is_yes('ㅗ', 1));
    }

    #[test]
    fn test_apply_exists_spares_matched_value() {
        let mut clues = ClueBoard::new();
        // 각[ㄱㅏㄱ] vs 고[ㄱㅗ]: ㄱ은 짝지어졌으니 ㅏ만 no
        apply_facts(&mut clues, "각하", "고수", &[Feedback::Exists, Feedback::None]);
        assert!(clues.is_no('ㅏ', 0));
        assert!(!clues.is_no('ㄱ', 0));
        assert_eq!(
            clues.hot_combos_at(0),
            &[HotCombo { components: vec!['ㄱ', 'ㅏ', 'ㄱ'], min: 1, max: 1 }]
        );
    }

    #[test]
    fn test_apply_opposite_and_none() {
        let mut clues = ClueBoard::new();
        // 고[ㄱㅗ]는 0번 자리에 없고 반대쪽에 있음, 피[ㅍㅣ]는 어디에도 없음
        apply_facts(&mut clues, "고피", "사과", &[Feedback::Opposite, Feedback::None]);
        assert!(clues.is_no('ㄱ', 0));
        assert!(clues.is_no('ㅗ', 0));
        assert_eq!(
            clues.hot_combos_at(1),
            &[HotCombo { components: vec!['ㄱ', 'ㅗ'], min: 1, max: 10 }]
        );
        for pos in 0..MAX_LETTERS {
            assert!(clues.is_no('ㅍ', pos));
            assert!(clues.is_no('ㅣ', pos));
        }
    }
}
