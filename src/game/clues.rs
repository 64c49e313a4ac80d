//! 추리 단서 저장소
//!
//! 글자 위치별로 "정답에 있음(yes)" / "정답에 없음(no)" 자모와
//! 수량 제약(hot combo)을 누적한다. 단서는 추가만 되고 지워지지 않는다.

use crate::game::constants::MAX_LETTERS;

/// 수량 제약: components 중 min~max개가 해당 위치 글자에 들어 있다 (중복 포함 개수)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HotCombo {
    pub components: Vec<char>,
    pub min: usize,
    pub max: usize,
}

/// 위치별 단서 저장소
#[derive(Debug, Clone, Default)]
pub struct ClueBoard {
    yes: [Vec<char>; MAX_LETTERS],
    no: [Vec<char>; MAX_LETTERS],
    hot_combos: [Vec<HotCombo>; MAX_LETTERS],
    hints: Vec<char>,
    /// 마지막 정리 이후 새로 추가된 yes 자모 (추론/키보드 갱신이 소비)
    new_yes: [Vec<char>; MAX_LETTERS],
    /// 마지막 정리 이후 새로 추가된 no 자모
    new_no: [Vec<char>; MAX_LETTERS],
}

impl ClueBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// 자모를 yes 목록에 추가
    /// 이미 있거나 no 목록과 모순이면 추가하지 않고 false
    pub fn add_yes(&mut self, jamo: char, pos: usize) -> bool {
        if self.yes[pos].contains(&jamo) {
            return false;
        }
        if self.no[pos].contains(&jamo) {
            debug_assert!(false, "단서 모순: {jamo}는 위치 {pos}에서 이미 no");
            log::warn!("단서 모순 무시: yes 추가 거부 {} (위치 {})", jamo, pos);
            return false;
        }
        self.yes[pos].push(jamo);
        self.new_yes[pos].push(jamo);
        true
    }

    /// 자모를 no 목록에 추가
    /// 이미 있거나 yes 목록과 모순이면 추가하지 않고 false
    pub fn add_no(&mut self, jamo: char, pos: usize) -> bool {
        if self.no[pos].contains(&jamo) {
            return false;
        }
        if self.yes[pos].contains(&jamo) {
            debug_assert!(false, "단서 모순: {jamo}는 위치 {pos}에서 이미 yes");
            log::warn!("단서 모순 무시: no 추가 거부 {} (위치 {})", jamo, pos);
            return false;
        }
        self.no[pos].push(jamo);
        self.new_no[pos].push(jamo);
        true
    }

    /// 여러 자모를 no 목록에 추가, 하나라도 추가되면 true
    /// yes에 있는 자모는 조용히 건너뜀
    pub fn add_all_no(&mut self, jamos: impl IntoIterator<Item = char>, pos: usize) -> bool {
        let mut added = false;
        for jamo in jamos {
            if self.yes[pos].contains(&jamo) {
                continue;
            }
            added = self.add_no(jamo, pos) || added;
        }
        added
    }

    /// 수량 제약 추가 (중복 검사 없이 누적)
    pub fn add_hot_combo(&mut self, components: Vec<char>, pos: usize, min: usize, max: usize) {
        self.hot_combos[pos].push(HotCombo { components, min, max });
    }

    /// 힌트로 공개된 자모 기록
    pub fn add_hint(&mut self, jamo: char) -> bool {
        if self.hints.contains(&jamo) {
            return false;
        }
        self.hints.push(jamo);
        true
    }

    pub fn is_yes(&self, jamo: char, pos: usize) -> bool {
        self.yes[pos].contains(&jamo)
    }

    pub fn is_no(&self, jamo: char, pos: usize) -> bool {
        self.no[pos].contains(&jamo)
    }

    pub fn is_hint(&self, jamo: char) -> bool {
        self.hints.contains(&jamo)
    }

    pub fn yes_at(&self, pos: usize) -> &[char] {
        &self.yes[pos]
    }

    pub fn no_at(&self, pos: usize) -> &[char] {
        &self.no[pos]
    }

    pub fn hot_combos_at(&self, pos: usize) -> &[HotCombo] {
        &self.hot_combos[pos]
    }

    pub fn hints(&self) -> &[char] {
        &self.hints
    }

    pub fn new_yes_at(&self, pos: usize) -> &[char] {
        &self.new_yes[pos]
    }

    pub fn new_no_at(&self, pos: usize) -> &[char] {
        &self.new_no[pos]
    }

    /// 새로 추가된 자모 목록 비우기 (추론과 키보드 갱신이 끝난 뒤 호출)
    pub fn clear_new(&mut self) {
        for pos in 0..MAX_LETTERS {
            self.new_yes[pos].clear();
            self.new_no[pos].clear();
        }
    }
}
