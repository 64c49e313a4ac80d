//! dudle - 두 글자 한글 단어 맞히기 터미널 게임

use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use dudle::config::{GameSettings, GameStats};
use dudle::game::analyzer::is_valid_composing;
use dudle::game::constants::current_day_number;
use dudle::game::feedback::{BoardRow, Feedback, COLOR_MAYBE_RGB, HINT_EMOTE};
use dudle::game::{GameSession, GameStatus, KeyState};
use dudle::hangul::jamo::KEYBOARD_ROWS;
use dudle::words::WordBook;
use rand::seq::IndexedRandom;

fn main() {
    // 로깅 초기화 (error/warn만 출력)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut settings = GameSettings::load();
    let mut stats = GameStats::load();

    println!("dudle - 두 글자 한글 단어 맞히기");
    print_legend();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut played: Vec<String> = Vec::new();

    loop {
        let Some(mut session) = start_session(&mut lines, &played) else {
            break;
        };
        let Some(won) = play_game(&mut session, &mut lines, &mut settings) else {
            break;
        };
        played.push(session.secret().to_string());

        stats.record_game(won);
        if let Err(e) = stats.save() {
            log::warn!("통계 저장 실패: {}", e);
        }
        print_summary(&session, &stats);

        print!("한 판 더? (y/그 외 종료) ");
        let _ = io::stdout().flush();
        match next_line(&mut lines) {
            Some(line) if line.trim().eq_ignore_ascii_case("y") => {}
            _ => break,
        }
    }
    println!("다음에 또 만나요");
}

fn next_line(lines: &mut impl Iterator<Item = io::Result<String>>) -> Option<String> {
    match lines.next() {
        Some(Ok(line)) => Some(line),
        _ => None,
    }
}

/// 모드를 골라 세션 하나를 연다
fn start_session(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    played: &[String],
) -> Option<GameSession> {
    println!();
    println!("모드: 1) 오늘의 단어  2) 연습  3) 아무 단어");
    print!("> ");
    let _ = io::stdout().flush();
    let choice = next_line(lines)?;
    let book = WordBook::new();

    let session = match choice.trim() {
        "2" => GameSession::new_practice(book),
        "3" => {
            // 이미 나온 단어는 빼고 무작위로 뽑는다
            let exclude: Vec<&str> = played.iter().map(String::as_str).collect();
            let fresh = book.filtered(&exclude, &[]);
            match fresh.choose(&mut rand::rng()) {
                Some(entry) => GameSession::new_custom(book, entry.word),
                None => {
                    println!("남은 단어가 없어 연습 게임으로 시작합니다");
                    GameSession::new_practice(book)
                }
            }
        }
        _ => {
            let day = current_day_number();
            println!("{}번째 날의 단어입니다", day);
            GameSession::new_daily(book, day)
        }
    };
    Some(session)
}

/// 한 판 진행, 끝나면 승리 여부 (입력이 끊기면 None)
fn play_game(
    session: &mut GameSession,
    lines: &mut impl Iterator<Item = io::Result<String>>,
    settings: &mut GameSettings,
) -> Option<bool> {
    println!(
        "기회는 {}번, 명령은 :힌트 :포기 :무음 (한글 또는 두벌식 로마자로 입력)",
        session.guesses_left()
    );

    loop {
        println!();
        render_board(session);
        render_keyboard(session);
        print!("단어 입력> ");
        let _ = io::stdout().flush();
        let line = next_line(lines)?;
        let line = line.trim();

        match line {
            "" => continue,
            ":힌트" | ":hint" => match session.use_hint() {
                Ok(jamo) => println!("{} 정답에 {} 이(가) 있어요", HINT_EMOTE, jamo),
                Err(e) => println!("{}", e),
            },
            ":무음" | ":mute" => {
                settings.sound_enabled = !settings.sound_enabled;
                if let Err(e) = settings.save() {
                    log::warn!("설정 저장 실패: {}", e);
                }
                println!("효과음 {}", if settings.sound_enabled { "켬" } else { "끔" });
            }
            ":포기" | ":quit" => {
                println!("정답은 {} 이었어요", session.secret());
                return Some(false);
            }
            _ => {
                session.clear_input();
                for c in line.chars().filter(|c| !c.is_whitespace()) {
                    session.insert_key(c);
                }
                if !is_valid_composing(session.input_text()) {
                    println!("한글만 입력할 수 있어요");
                    session.clear_input();
                    continue;
                }
                match session.submit_guess() {
                    Ok(()) => {
                        if let Some(row) = session.board().last() {
                            print_row(row, settings.animations_enabled);
                        }
                    }
                    Err(e) => println!("{}", e),
                }
            }
        }

        match session.status() {
            GameStatus::Playing => {}
            GameStatus::Won => {
                if settings.sound_enabled {
                    print!("\x07");
                }
                println!("{}번 만에 정답!", session.board().len());
                return Some(true);
            }
            GameStatus::Lost => {
                println!("아쉽네요. 정답은 {} 이었어요", session.secret());
                return Some(false);
            }
        }
    }
}

/// 피드백 종류 안내
fn print_legend() {
    println!();
    for feedback in [
        Feedback::Match,
        Feedback::Similar,
        Feedback::Many,
        Feedback::Exists,
        Feedback::Opposite,
        Feedback::None,
    ] {
        println!(
            "  {} {}",
            feedback.emote(),
            paint(feedback.description(), feedback.rgb())
        );
    }
}

fn render_board(session: &GameSession) {
    for row in session.board() {
        print_row(row, false);
    }
}

/// 행 하나를 이모지와 색으로 출력
fn print_row(row: &BoardRow, animate: bool) {
    for pos in 0..row.letters.len() {
        let feedback = row.feedback[pos];
        let cell = format!("{} {}", row.letters[pos], feedback.emote());
        print!("{}  ", paint(&cell, feedback.rgb()));
        let _ = io::stdout().flush();
        if animate {
            thread::sleep(Duration::from_millis(250));
        }
    }
    if let Some(jamo) = row.hint {
        print!("{} {}", HINT_EMOTE, jamo);
    }
    println!();
}

fn render_keyboard(session: &GameSession) {
    for keyboard_row in KEYBOARD_ROWS {
        let mut line = String::new();
        for &key in keyboard_row {
            let painted = match session.key_state(key) {
                KeyState::Hinted | KeyState::Confirmed => {
                    paint(&key.to_string(), Feedback::Match.rgb())
                }
                KeyState::Eliminated => paint(&key.to_string(), Feedback::None.rgb()),
                KeyState::Used => paint(&key.to_string(), COLOR_MAYBE_RGB),
                KeyState::Untouched => key.to_string(),
            };
            line.push_str(&painted);
            line.push(' ');
        }
        println!("  {}", line);
    }
}

/// 정답 뜻풀이와 누적 통계
fn print_summary(session: &GameSession, stats: &GameStats) {
    if let Some(entry) = session.words().entry(session.secret()) {
        println!("{}: {}", entry.word, entry.meanings.join(", "));
    }
    println!(
        "통계: {}판 {}승 (승률 {}%), 연승 {} (최고 {})",
        stats.games_played,
        stats.games_won,
        stats.win_rate_percent(),
        stats.current_streak,
        stats.best_streak
    );
}

/// 24비트 색 ANSI 출력
fn paint(text: &str, (r, g, b): (u8, u8, u8)) -> String {
    format!("\x1b[38;2;{};{};{}m{}\x1b[0m", r, g, b, text)
}
