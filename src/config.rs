//! 게임 설정과 누적 통계 (JSON 저장)

use serde::{Deserialize, Serialize};

use crate::storage;

const SETTINGS_KEY: &str = "settings";
const STATS_KEY: &str = "stats";

/// 게임 설정
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct GameSettings {
    /// 화면 테마 (0 시스템 따름, 1 밝게, 2 어둡게)
    #[serde(default = "default_theme")]
    pub theme: u32,
    /// 효과음 켜기
    #[serde(default = "default_sound_enabled")]
    pub sound_enabled: bool,
    /// 화면 효과 켜기
    #[serde(default = "default_animations_enabled")]
    pub animations_enabled: bool,
}

fn default_theme() -> u32 {
    0
}

fn default_sound_enabled() -> bool {
    true
}

fn default_animations_enabled() -> bool {
    true
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            sound_enabled: default_sound_enabled(),
            animations_enabled: default_animations_enabled(),
        }
    }
}

impl GameSettings {
    /// 저장된 설정 로드 (없거나 깨졌으면 기본값)
    pub fn load() -> Self {
        storage::load(SETTINGS_KEY)
    }

    pub fn save(&self) -> Result<(), String> {
        storage::save(SETTINGS_KEY, self)
    }
}

/// 누적 게임 통계
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct GameStats {
    #[serde(default)]
    pub games_played: u32,
    #[serde(default)]
    pub games_won: u32,
    /// 현재 연승
    #[serde(default)]
    pub current_streak: u32,
    /// 최고 연승
    #[serde(default)]
    pub best_streak: u32,
}

impl GameStats {
    /// 저장된 통계 로드 (없거나 깨졌으면 0에서 시작)
    pub fn load() -> Self {
        storage::load(STATS_KEY)
    }

    pub fn save(&self) -> Result<(), String> {
        storage::save(STATS_KEY, self)
    }

    /// 끝난 게임 한 판 반영 (지면 연승이 끊긴다)
    pub fn record_game(&mut self, won: bool) {
        self.games_played += 1;
        if won {
            self.games_won += 1;
            self.current_streak += 1;
            if self.current_streak > self.best_streak {
                self.best_streak = self.current_streak;
            }
        } else {
            self.current_streak = 0;
        }
    }

    /// 백분율 승률, 판이 없으면 0
    pub fn win_rate_percent(&self) -> u32 {
        if self.games_played == 0 {
            return 0;
        }
        self.games_won * 100 / self.games_played
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = GameSettings::default();
        assert_eq!(settings.theme, 0);
        assert!(settings.sound_enabled);
        assert!(settings.animations_enabled);
    }

    #[test]
    fn test_backward_compat_missing_field() {
        // 이전 저장 파일에 일부 항목이 없는 경우 기본값 사용
        let json = r#"{"theme": 2}"#;
        let settings: GameSettings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.theme, 2);
        assert!(settings.sound_enabled);
    }

    #[test]
    fn test_stats_parse_empty_object() {
        let stats: GameStats = serde_json::from_str("{}").unwrap();
        assert_eq!(stats, GameStats::default());
    }

    #[test]
    fn test_stats_streak_tracking() {
        let mut stats = GameStats::default();
        stats.record_game(true);
        stats.record_game(true);
        assert_eq!(stats.current_streak, 2);
        assert_eq!(stats.best_streak, 2);

        stats.record_game(false);
        assert_eq!(stats.current_streak, 0);
        assert_eq!(stats.best_streak, 2);

        stats.record_game(true);
        assert_eq!(stats.games_played, 4);
        assert_eq!(stats.games_won, 3);
        assert_eq!(stats.win_rate_percent(), 75);
    }
}
