//! 게임 세션
//!
//! 정답 단어, 입력 버퍼, 피드백 판, 단서 저장소를 한 판 단위로 소유한다.
//! 제출과 힌트는 여기서만 상태를 바꾸고, 실패한 요청은 아무것도 바꾸지 않는다.

use crate::game::analyzer::{self, GuessError};
use crate::game::clues::ClueBoard;
use crate::game::constants::{
    current_day_number, MAX_LETTERS, NUMBER_OF_GUESSES, NUMBER_OF_HINTS, PRACTICE_WORD,
    PRACTICE_WORD_BACKUP,
};
use crate::game::feedback::{BoardRow, Feedback};
use crate::game::hint::{select_hint, HintError};
use crate::game::infer::run_inference;
use crate::game::keyboard::{self, KeyState};
use crate::hangul::pairing::{CONSONANT_COMPONENTS, VOWEL_COMPONENTS};
use crate::hangul::{append_jamo, delete_one_jamo, key_to_jamo};
use crate::words::WordBook;

/// 게임 진행 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
}

/// 한 판의 게임
#[derive(Debug, Clone)]
pub struct GameSession {
    words: WordBook,
    secret: String,
    practice: bool,
    day_number: u64,
    input: String,
    board: Vec<BoardRow>,
    clues: ClueBoard,
    status: GameStatus,
    found_match: [bool; MAX_LETTERS],
    guesses_left: u32,
    hints_left: u32,
    /// 다음 제출 행에 표시할 힌트 자모
    pending_hint: Option<char>,
}

impl GameSession {
    /// 날짜 번호로 정한 오늘의 단어로 시작
    /// 단어 목록이 비어 있으면 연습 게임으로 대신한다
    pub fn new_daily(words: WordBook, day_number: u64) -> Self {
        let secret = words.word_for_day(day_number).map(|e| e.word.to_string());
        match secret {
            Some(secret) => Self::with_secret(words, secret, false, day_number),
            None => {
                log::warn!("단어 목록이 비어 있어 연습 게임으로 시작합니다");
                Self::new_practice(words)
            }
        }
    }

    /// 고정 연습 단어로 시작
    pub fn new_practice(words: WordBook) -> Self {
        Self::with_secret(words, PRACTICE_WORD.to_string(), true, current_day_number())
    }

    /// 지정한 단어로 시작 (연속 플레이용)
    /// 목록에 없는 단어면 연습 게임으로 대신한다
    pub fn new_custom(words: WordBook, secret: &str) -> Self {
        if !words.exists(secret) {
            log::warn!("목록에 없는 단어 {}로는 시작할 수 없어 연습 게임으로 대신합니다", secret);
            return Self::new_practice(words);
        }
        Self::with_secret(words, secret.to_string(), false, current_day_number())
    }

    fn with_secret(words: WordBook, secret: String, practice: bool, day_number: u64) -> Self {
        Self {
            words,
            secret,
            practice,
            day_number,
            input: String::new(),
            board: Vec::new(),
            clues: ClueBoard::new(),
            status: GameStatus::Playing,
            found_match: [false; MAX_LETTERS],
            guesses_left: NUMBER_OF_GUESSES,
            hints_left: NUMBER_OF_HINTS,
            pending_hint: None,
        }
    }

    /// 로마자 자판 글쇠 입력 (두벌식 변환 후 삽입)
    pub fn insert_key(&mut self, key: char) -> bool {
        self.insert_jamo(key_to_jamo(key))
    }

    /// 자모 하나를 입력 버퍼 끝에 붙이기, 받아들여지면 true
    pub fn insert_jamo(&mut self, jamo: char) -> bool {
        if self.status != GameStatus::Playing {
            return false;
        }
        let Some(last) = self.input.chars().last() else {
            self.input.push(jamo);
            return true;
        };
        let combined = append_jamo(last, jamo);
        let makes_new_cell = combined.chars().count() == MAX_LETTERS;
        if makes_new_cell && self.input.chars().count() >= MAX_LETTERS {
            // 꽉 찬 버퍼에서 글자 수가 늘어나는 입력은 거부
            return false;
        }
        self.input.pop();
        self.input.push_str(&combined);
        true
    }

    /// 버퍼 끝에서 자모 하나 지우기
    pub fn delete_jamo(&mut self) {
        if let Some(last) = self.input.chars().last() {
            self.input.pop();
            self.input.push_str(&delete_one_jamo(last));
        }
    }

    /// 입력 버퍼 비우기
    pub fn clear_input(&mut self) {
        self.input.clear();
    }

    /// 현재 버퍼를 제출
    ///
    /// 검사 실패 시 버퍼와 판은 그대로 남는다. 성공하면 피드백 행이
    /// 추가되고 단서 추론까지 끝난 뒤 버퍼가 비워진다.
    pub fn submit_guess(&mut self) -> Result<(), GuessError> {
        if self.status != GameStatus::Playing {
            return Err(GuessError::GameFinished);
        }
        analyzer::validate(&self.input, &self.words, &self.clues)?;
        self.maybe_swap_practice_secret();

        let guess = self.input.clone();
        let feedback = analyzer::classify_word(&guess, &self.secret);
        analyzer::apply_facts(&mut self.clues, &guess, &self.secret, &feedback);

        let mut letters = [' '; MAX_LETTERS];
        for (slot, c) in letters.iter_mut().zip(guess.chars()) {
            *slot = c;
        }
        self.board.push(BoardRow {
            letters,
            feedback,
            hint: self.pending_hint.take(),
        });
        run_inference(&mut self.clues, &self.board);
        self.clues.clear_new();

        for pos in 0..MAX_LETTERS {
            if feedback[pos] == Feedback::Match {
                self.found_match[pos] = true;
            }
        }
        self.guesses_left = self.guesses_left.saturating_sub(1);
        if guess == self.secret {
            self.status = GameStatus::Won;
            log::debug!("{}번째 제출에서 정답", self.board.len());
        } else if self.guesses_left == 0 {
            self.status = GameStatus::Lost;
        }
        self.input.clear();
        Ok(())
    }

    /// 연습 게임 첫 제출에서 정답 글자를 바로 맞히면 예비 단어로 교체
    /// 이번 제출부터 새 정답으로 채점한다
    fn maybe_swap_practice_secret(&mut self) {
        if !self.practice || !self.board.is_empty() {
            return;
        }
        let same_any = self
            .input
            .chars()
            .zip(self.secret.chars())
            .any(|(g, s)| g == s);
        if same_any {
            log::debug!("연습 단어를 예비 단어로 교체");
            self.secret = PRACTICE_WORD_BACKUP.to_string();
        }
    }

    /// 남은 힌트를 써서 정답 자모 하나를 공개
    pub fn use_hint(&mut self) -> Result<char, HintError> {
        if self.status != GameStatus::Playing {
            return Err(HintError::GameFinished);
        }
        if self.hints_left == 0 {
            return Err(HintError::Exhausted);
        }
        let Some(jamo) = select_hint(&self.secret, &self.clues, &self.board, self.day_number)
        else {
            return Err(HintError::Exhausted);
        };
        self.clues.add_hint(jamo);
        run_inference(&mut self.clues, &self.board);
        self.clues.clear_new();
        self.hints_left -= 1;
        self.pending_hint = Some(jamo);
        log::debug!("힌트 자모 {} 공개", jamo);
        Ok(jamo)
    }

    /// 자모 하나의 키보드 표시 상태
    pub fn key_state(&self, jamo: char) -> KeyState {
        keyboard::key_state(&self.clues, &self.board, jamo)
    }

    /// 전체 자모 알파벳의 키보드 상태
    pub fn key_states(&self) -> Vec<(char, KeyState)> {
        CONSONANT_COMPONENTS
            .iter()
            .chain(VOWEL_COMPONENTS.iter())
            .map(|&c| (c, self.key_state(c)))
            .collect()
    }

    pub fn input_text(&self) -> &str {
        &self.input
    }

    pub fn board(&self) -> &[BoardRow] {
        &self.board
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn secret(&self) -> &str {
        &self.secret
    }

    pub fn is_practice(&self) -> bool {
        self.practice
    }

    pub fn day_number(&self) -> u64 {
        self.day_number
    }

    pub fn guesses_left(&self) -> u32 {
        self.guesses_left
    }

    pub fn hints_left(&self) -> u32 {
        self.hints_left
    }

    pub fn found_match(&self) -> [bool; MAX_LETTERS] {
        self.found_match
    }

    pub fn clues(&self) -> &ClueBoard {
        &self.clues
    }

    pub fn words(&self) -> &WordBook {
        &self.words
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn daily() -> GameSession {
        // 날짜 0의 단어는 목록 첫 단어인 사과
        GameSession::new_daily(WordBook::new(), 0)
    }

    fn type_word(session: &mut GameSession, word: &str) {
        session.clear_input();
        for c in word.chars() {
            session.insert_jamo(c);
        }
    }

    #[test]
    fn test_insert_key_composes_syllables() {
        let mut session = GameSession::new_practice(WordBook::new());
        // rk → 가
        session.insert_key('r');
        session.insert_key('k');
        assert_eq!(session.input_text(), "가");
        // ㅂ 받침, 지우고 ㅅ 받침
        session.insert_key('q');
        assert_eq!(session.input_text(), "갑");
        session.delete_jamo();
        session.insert_key('t');
        assert_eq!(session.input_text(), "갓");
        // 모음이 오면 받침이 다음 글자로 넘어간다
        session.insert_key('k');
        assert_eq!(session.input_text(), "가사");
    }

    #[test]
    fn test_insert_rejected_when_buffer_full() {
        let mut session = GameSession::new_practice(WordBook::new());
        type_word(&mut session, "가삭");
        // 받침 이동으로 세 번째 글자가 생기는 입력은 거부
        assert!(!session.insert_jamo('ㅗ'));
        assert_eq!(session.input_text(), "가삭");
        // 글자 수가 그대로인 겹받침 조합은 꽉 찬 버퍼에서도 허용
        assert!(session.insert_jamo('ㅅ'));
        assert_eq!(session.input_text(), "가삯");
        // 겹받침이 안 되는 자음은 거부
        assert!(!session.insert_jamo('ㅂ'));
        assert_eq!(session.input_text(), "가삯");
    }

    #[test]
    fn test_delete_until_empty() {
        let mut session = GameSession::new_practice(WordBook::new());
        type_word(&mut session, "가삭");
        for _ in 0..6 {
            session.delete_jamo();
        }
        assert_eq!(session.input_text(), "");
        // 빈 버퍼에서 한 번 더 지워도 그대로
        session.delete_jamo();
        assert_eq!(session.input_text(), "");
    }

    #[test]
    fn test_submit_win() {
        let mut session = daily();
        type_word(&mut session, "사과");
        assert_eq!(session.submit_guess(), Ok(()));
        assert_eq!(session.status(), GameStatus::Won);
        assert_eq!(session.found_match(), [true, true]);
        let row = &session.board()[0];
        assert!(row.is_winning());
        // 끝난 게임은 입력과 제출을 모두 거부
        assert!(!session.insert_jamo('ㄱ'));
        type_word(&mut session, "가지");
        assert_eq!(session.submit_guess(), Err(GuessError::GameFinished));
    }

    #[test]
    fn test_submit_error_keeps_state() {
        let mut session = daily();
        type_word(&mut session, "흙밭");
        assert_eq!(session.submit_guess(), Err(GuessError::UnknownWord));
        // 실패한 제출은 아무것도 바꾸지 않는다
        assert_eq!(session.input_text(), "흙밭");
        assert!(session.board().is_empty());
        assert_eq!(session.guesses_left(), NUMBER_OF_GUESSES);
    }

    #[test]
    fn test_seven_guesses_then_lost() {
        let mut session = daily();
        for turn in 0..NUMBER_OF_GUESSES {
            assert_eq!(session.status(), GameStatus::Playing, "{}번째 제출 전", turn);
            type_word(&mut session, "가지");
            assert_eq!(session.submit_guess(), Ok(()));
        }
        assert_eq!(session.status(), GameStatus::Lost);
        assert_eq!(session.guesses_left(), 0);
        assert_eq!(session.board().len(), NUMBER_OF_GUESSES as usize);
    }

    #[test]
    fn test_practice_swaps_on_instant_match() {
        let mut session = GameSession::new_practice(WordBook::new());
        assert_eq!(session.secret(), "노래");
        // 첫 제출에서 글자가 겹치면 예비 단어로 바뀌고 그 기준으로 채점
        type_word(&mut session, "노래");
        assert_eq!(session.submit_guess(), Ok(()));
        assert_eq!(session.secret(), "무대");
        assert_eq!(session.status(), GameStatus::Playing);
        assert!(!session.board()[0].is_winning());
        // 두 번째 제출부터는 더 바뀌지 않는다
        type_word(&mut session, "무대");
        assert_eq!(session.submit_guess(), Ok(()));
        assert_eq!(session.status(), GameStatus::Won);
    }

    #[test]
    fn test_practice_keeps_secret_without_match() {
        let mut session = GameSession::new_practice(WordBook::new());
        type_word(&mut session, "사과");
        assert_eq!(session.submit_guess(), Ok(()));
        assert_eq!(session.secret(), "노래");
    }

    #[test]
    fn test_hint_reveals_and_marks_row() {
        let mut session = daily();
        // 날짜 0, 후보 [ㅅㅏㄱㅗ] → ㅅ
        assert_eq!(session.use_hint(), Ok('ㅅ'));
        assert_eq!(session.hints_left(), 0);
        assert_eq!(session.key_state('ㅅ'), KeyState::Hinted);
        // 한 게임에 힌트는 한 번
        assert_eq!(session.use_hint(), Err(HintError::Exhausted));
        // 힌트 뒤 첫 제출 행에 힌트 자모가 표시된다
        type_word(&mut session, "가지");
        assert_eq!(session.submit_guess(), Ok(()));
        assert_eq!(session.board()[0].hint, Some('ㅅ'));
        type_word(&mut session, "나무");
        assert_eq!(session.submit_guess(), Ok(()));
        assert_eq!(session.board()[1].hint, None);
    }

    #[test]
    fn test_custom_word_session() {
        let session = GameSession::new_custom(WordBook::new(), "나무");
        assert_eq!(session.secret(), "나무");
        assert!(!session.is_practice());
        // 목록에 없는 단어는 연습 게임으로
        let fallback = GameSession::new_custom(WordBook::new(), "흙밭");
        assert!(fallback.is_practice());
        assert_eq!(fallback.secret(), "노래");
    }

    #[test]
    fn test_key_states_cover_alphabet() {
        let session = daily();
        let states = session.key_states();
        assert_eq!(states.len(), 33);
        assert!(states.iter().all(|&(_, s)| s == KeyState::Untouched));
    }
}
