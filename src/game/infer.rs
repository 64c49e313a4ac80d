//! 단서 전파 추론
//!
//! 지금까지의 피드백 행과 단서 저장소를 반복해서 훑으며,
//! 더 이상 새 단서가 나오지 않을 때까지 yes/no 목록을 넓힌다.
//! 모든 규칙은 확실한 것만 기록한다. 추측은 하지 않는다.

use crate::game::clues::ClueBoard;
use crate::game::constants::MAX_LETTERS;
use crate::game::feedback::{BoardRow, Feedback};
use crate::hangul::pairing::{
    are_unpairable_consonants, are_unpairable_vowels, unpairable_consonants, unpairable_vowels,
    CONSONANT_COMPONENTS,
};
use crate::hangul::syllable_components;

/// 판 전체를 고정점까지 추론, 단서가 하나라도 늘었으면 true
pub fn run_inference(clues: &mut ClueBoard, board: &[BoardRow]) -> bool {
    let mut learned = false;
    let mut passes = 0;
    loop {
        let mut changed = false;
        for row in board {
            for pos in 0..MAX_LETTERS {
                changed |= infer_row_position(clues, row, pos);
            }
        }
        changed |= infer_from_hints(clues);
        changed |= infer_cross_rules(clues);
        passes += 1;
        if !changed {
            break;
        }
        learned = true;
    }
    if learned {
        log::debug!("추론 {}회 반복 후 고정점 도달", passes);
    }
    learned
}

/// 피드백 행 하나의 한 자리에서 끌어낼 수 있는 단서
fn infer_row_position(clues: &mut ClueBoard, row: &BoardRow, pos: usize) -> bool {
    let comps = syllable_components(row.letters[pos]);
    match row.feedback[pos] {
        Feedback::Exists => {
            // 이 글자의 자모 중 정확히 하나만 정답에 있음
            let (yes_count, maybe) = yes_no_maybe(clues, &comps, pos, true);
            if yes_count == 0 && maybe.len() == 1 {
                return clues.add_yes(maybe[0], pos);
            }
            if yes_count == 0 && maybe.len() > 1 {
                return breaks_any_hot_combo(clues, pos, &maybe);
            }
            if yes_count == 1 && !maybe.is_empty() {
                // 하나가 이미 확정됐으니 나머지는 전부 오답
                let mut added = false;
                for &c in &maybe {
                    added = clues.add_no(c, pos) || added;
                }
                return added;
            }
            false
        }
        Feedback::Many | Feedback::Similar => {
            // 이 글자의 자모 중 2개 이상이 정답에 있음
            let (yes_count, maybe) = yes_no_maybe(clues, &comps, pos, false);
            if (yes_count == 0 && maybe.len() == 2) || (yes_count == 1 && maybe.len() == 1) {
                let mut added = false;
                for &c in &maybe {
                    added = clues.add_yes(c, pos) || added;
                }
                return added;
            }
            false
        }
        Feedback::Opposite => {
            // 반대쪽 글자에 이 자모들 중 하나 이상이 있음
            let other = MAX_LETTERS - 1 - pos;
            let (yes_count, maybe) = yes_no_maybe(clues, &comps, other, true);
            if yes_count == 0 && maybe.len() == 1 {
                return clues.add_yes(maybe[0], other);
            }
            false
        }
        Feedback::Match | Feedback::None => false,
    }
}

/// 자모 목록을 yes 개수와 미확정 목록으로 가르기
///
/// dedup이면 같은 자모는 한 번만 센다 (Exists 계열 수량 제약용).
fn yes_no_maybe(clues: &ClueBoard, comps: &[char], pos: usize, dedup: bool) -> (usize, Vec<char>) {
    let mut seen: Vec<char> = Vec::new();
    let mut yes_count = 0;
    let mut maybe = Vec::new();
    for &c in comps {
        if dedup {
            if seen.contains(&c) {
                continue;
            }
            seen.push(c);
        }
        if clues.is_yes(c, pos) {
            yes_count += 1;
        } else if !clues.is_no(c, pos) {
            maybe.push(c);
        }
    }
    (yes_count, maybe)
}

/// 후보 자모를 하나씩 정답이라 가정해 보고, 수량 제약이 깨지는 후보를 배제
///
/// Exists 행에서 후보가 여럿 남았을 때 쓴다. 후보 중 정확히 하나가 정답이므로
/// 한 후보를 yes로, 나머지를 no로 가정한 뒤 모든 제약을 검사한다.
fn breaks_any_hot_combo(clues: &mut ClueBoard, pos: usize, candidates: &[char]) -> bool {
    let mut doomed = None;
    'candidates: for &candidate in candidates {
        let mut scratch_yes: Vec<char> = clues.yes_at(pos).to_vec();
        let mut scratch_no: Vec<char> = clues.no_at(pos).to_vec();
        scratch_yes.push(candidate);
        scratch_no.extend(unpairable_vowels(candidate));
        for &other in candidates {
            if other != candidate {
                scratch_no.push(other);
            }
        }

        for combo in clues.hot_combos_at(pos) {
            let mut remaining = scratch_yes.clone();
            let mut possible = 0;
            let mut matched = 0;
            for &c in &combo.components {
                if !scratch_no.contains(&c) {
                    possible += 1;
                }
                if let Some(i) = remaining.iter().position(|&y| y == c) {
                    remaining.remove(i);
                    matched += 1;
                }
            }
            if possible < combo.min || matched > combo.max {
                doomed = Some(candidate);
                break 'candidates;
            }
        }
    }
    match doomed {
        Some(candidate) => clues.add_no(candidate, pos),
        None => false,
    }
}

/// 힌트 자모는 정답 어딘가에 반드시 있다
/// 한쪽 자리에서 배제됐으면 반대쪽 자리로 확정
fn infer_from_hints(clues: &mut ClueBoard) -> bool {
    let hints: Vec<char> = clues.hints().to_vec();
    let mut changed = false;
    for &hint in &hints {
        for pos in 0..MAX_LETTERS {
            let other = MAX_LETTERS - 1 - pos;
            if clues.is_no(hint, other) && !clues.is_yes(hint, pos) {
                changed = clues.add_yes(hint, pos) || changed;
            }
        }
    }
    changed
}

/// 자모 짝짓기 표로 yes 목록에서 추가 배제를 끌어내는 교차 규칙
fn infer_cross_rules(clues: &mut ClueBoard) -> bool {
    let mut changed = false;
    let hints: Vec<char> = clues.hints().to_vec();

    for pos in 0..MAX_LETTERS {
        let other = MAX_LETTERS - 1 - pos;

        // 새로 확정된 모음과 짝이 안 되는 모음은 같은 글자에 못 들어감
        let fresh: Vec<char> = clues.new_yes_at(pos).to_vec();
        for &jamo in &fresh {
            for v in unpairable_vowels(jamo) {
                changed = clues.add_no(v, pos) || changed;
            }
        }

        // 힌트 모음이 이 자리의 확정 모음과 짝이 안 되면 반대쪽 자리로
        for &hint in &hints {
            let conflict = clues
                .yes_at(pos)
                .iter()
                .any(|&y| are_unpairable_vowels(hint, y));
            if conflict {
                changed = clues.add_no(hint, pos) || changed;
                changed = clues.add_yes(hint, other) || changed;
            }
        }

        // 자음 자리는 초성 1 + 받침 2가 전부
        let yes_consonants: Vec<char> = clues
            .yes_at(pos)
            .iter()
            .copied()
            .filter(|c| CONSONANT_COMPONENTS.contains(c))
            .collect();
        if yes_consonants.len() >= 3 {
            let rest: Vec<char> = CONSONANT_COMPONENTS
                .iter()
                .copied()
                .filter(|c| !yes_consonants.contains(c))
                .collect();
            changed = clues.add_all_no(rest, pos) || changed;
        } else if yes_consonants.len() == 2
            && are_unpairable_consonants(yes_consonants[0], yes_consonants[1])
        {
            // 받침에서 짝이 안 되는 두 자음이면 하나는 초성
            // 둘 모두와 짝이 안 되는 자음은 들어갈 자리가 없다
            let first = unpairable_consonants(yes_consonants[0]);
            let second = unpairable_consonants(yes_consonants[1]);
            let blocked: Vec<char> = first.into_iter().filter(|c| second.contains(c)).collect();
            changed = clues.add_all_no(blocked, pos) || changed;
        }
    }
    changed
}
