//! 게임 데이터 파일 저장소 (JSON)
//!
//! 키 하나가 파일 하나에 대응한다. 읽기 실패는 기본값으로 조용히
//! 넘어가고, 쓰기 실패만 호출자에게 돌려준다.

use std::fs;
use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::Serialize;

/// 저장 파일 경로: ~/.dudle/<키>.json
pub fn storage_path(key: &str) -> PathBuf {
    let home = std::env::var("HOME")
        .ok()
        .map(PathBuf::from)
        .filter(|p| p.is_absolute() && p.is_dir())
        .unwrap_or_else(|| {
            // HOME이 없거나 유효하지 않으면 /var/tmp에 저장
            PathBuf::from("/var/tmp")
        });
    home.join(".dudle").join(format!("{}.json", key))
}

/// 저장된 값 로드 (파일 없거나 파싱 실패 시 기본값)
pub fn load<T: DeserializeOwned + Default>(key: &str) -> T {
    let path = storage_path(key);
    match fs::read_to_string(&path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
            log::warn!("저장 데이터 해석 실패 ({}): {}", key, e);
            T::default()
        }),
        Err(_) => T::default(),
    }
}

/// 값 저장
pub fn save<T: Serialize>(key: &str, value: &T) -> Result<(), String> {
    let path = storage_path(key);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| format!("저장 디렉토리 생성 실패: {}", e))?;
    }
    let json = serde_json::to_string_pretty(value).map_err(|e| format!("직렬화 실패: {}", e))?;
    fs::write(&path, json).map_err(|e| format!("저장 파일 쓰기 실패: {}", e))?;
    Ok(())
}
