//! 내장 단어 사전
//!
//! 두 글자 표제어와 짧은 뜻풀이. 제출 검사, 오늘의 단어,
//! 무작위 뽑기, 연속 플레이용 거르기를 제공한다.

use rand::seq::IndexedRandom;

use crate::hangul::word_components;

/// 표제어 하나와 뜻풀이
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordEntry {
    pub word: &'static str,
    pub meanings: &'static [&'static str],
}

const fn entry(word: &'static str, meanings: &'static [&'static str]) -> WordEntry {
    WordEntry { word, meanings }
}

#[rustfmt::skip]
const WORDS: &[WordEntry] = &[
    entry("사과", &["둥글고 새콤한 과일", "잘못을 빎"]),
    entry("가지", &["보라색 길쭉한 채소", "나무 줄기에서 뻗은 부분"]),
    entry("노래", &["곡조를 붙여 부르는 소리"]),
    entry("무대", &["공연을 하는 자리"]),
    entry("바다", &["짠물이 괴어 있는 넓은 곳"]),
    entry("하늘", &["땅 위로 펼쳐진 공간"]),
    entry("구름", &["공중에 떠 있는 물방울 덩어리"]),
    entry("바람", &["공기의 흐름", "이루어지기를 비는 마음"]),
    entry("나무", &["줄기와 가지가 있는 식물"]),
    entry("호박", &["둥글고 큰 주황색 열매"]),
    entry("당근", &["주황색 뿌리 채소"]),
    entry("마늘", &["알싸한 양념 채소"]),
    entry("버섯", &["갓이 달린 균류"]),
    entry("포도", &["송이로 열리는 과일"]),
    entry("수박", &["속이 붉은 여름 과일"]),
    entry("딸기", &["붉고 씨가 겉에 있는 과일"]),
    entry("감자", &["녹말이 많은 덩이줄기"]),
    entry("고추", &["맵고 길쭉한 채소"]),
    entry("배추", &["김치의 주재료인 잎채소"]),
    entry("오이", &["길쭉한 초록 채소"]),
    entry("토끼", &["귀가 긴 동물"]),
    entry("사자", &["갈기가 있는 맹수"]),
    entry("여우", &["꾀 많기로 이르는 동물"]),
    entry("늑대", &["개와 비슷한 야생 동물"]),
    entry("고래", &["바다에 사는 큰 포유류"]),
    entry("거북", &["등딱지가 있는 동물"]),
    entry("기린", &["목이 긴 동물"]),
    entry("하마", &["물가에 사는 큰 동물"]),
    entry("악어", &["이빨이 날카로운 파충류"]),
    entry("까치", &["검고 흰 텃새"]),
    entry("제비", &["봄에 돌아오는 철새"]),
    entry("학교", &["가르치고 배우는 곳"]),
    entry("병원", &["아픈 사람을 치료하는 곳"]),
    entry("시장", &["물건을 사고파는 곳", "시의 행정을 맡은 사람"]),
    entry("공원", &["쉬어 가도록 꾸민 너른 터"]),
    entry("서점", &["책을 파는 가게"]),
    entry("주말", &["한 주의 끝 무렵"]),
    entry("아침", &["날이 새고 얼마 안 된 때", "아침에 먹는 끼니"]),
    entry("저녁", &["해가 질 무렵", "저녁에 먹는 끼니"]),
    entry("겨울", &["눈이 오는 추운 계절"]),
    entry("여름", &["덥고 해가 긴 계절"]),
    entry("가을", &["단풍이 드는 계절"]),
    entry("우산", &["비를 막으려 쓰는 물건"]),
    entry("안경", &["눈에 쓰는 기구"]),
    entry("시계", &["시간을 알려 주는 기계"]),
    entry("지도", &["땅의 모양을 줄여 그린 그림", "이끌어 가르침"]),
    entry("편지", &["글로 적어 보내는 소식"]),
    entry("연필", &["흑심으로 글씨를 쓰는 도구"]),
    entry("책상", &["책을 놓고 쓰는 상"]),
    entry("의자", &["걸터앉는 가구"]),
    entry("거울", &["모습을 비추어 보는 물건"]),
    entry("열쇠", &["자물쇠를 여는 도구"]),
    entry("비누", &["씻을 때 쓰는 세정제"]),
    entry("수건", &["물기를 닦는 천"]),
    entry("치마", &["허리 아래로 두르는 옷"]),
    entry("장갑", &["손에 끼는 물건"]),
    entry("모자", &["머리에 쓰는 물건", "어머니와 아들"]),
    entry("구두", &["가죽으로 지은 신", "입으로 하는 말"]),
    entry("양말", &["발에 꿰어 신는 것"]),
    entry("단추", &["옷자락을 여미는 물건"]),
];

/// 내장 사전
#[derive(Debug, Clone, Copy)]
pub struct WordBook {
    entries: &'static [WordEntry],
}

impl WordBook {
    pub fn new() -> Self {
        Self { entries: WORDS }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[WordEntry] {
        self.entries
    }

    /// 표제어 찾기
    pub fn entry(&self, word: &str) -> Option<&WordEntry> {
        self.entries.iter().find(|e| e.word == word)
    }

    /// 제출 가능한 단어인지 확인
    pub fn exists(&self, word: &str) -> bool {
        self.entry(word).is_some()
    }

    /// 날짜 번호로 도는 오늘의 단어, 빈 사전이면 None
    pub fn word_for_day(&self, day_number: u64) -> Option<&WordEntry> {
        if self.entries.is_empty() {
            return None;
        }
        let index = (day_number % self.entries.len() as u64) as usize;
        Some(&self.entries[index])
    }

    /// 무작위 단어 하나
    pub fn random(&self) -> Option<&WordEntry> {
        self.entries.choose(&mut rand::rng())
    }

    /// 이미 쓴 단어와 배제된 자모가 든 단어를 거른 목록 (연속 플레이용)
    pub fn filtered(&self, exclude_words: &[&str], excluded_components: &[char]) -> Vec<&WordEntry> {
        self.entries
            .iter()
            .filter(|e| !exclude_words.contains(&e.word))
            .filter(|e| {
                word_components(e.word)
                    .iter()
                    .flatten()
                    .all(|c| !excluded_components.contains(c))
            })
            .collect()
    }
}

impl Default for WordBook {
    fn default() -> Self {
        Self::new()
    }
}
