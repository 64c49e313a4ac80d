//! 한글 처리 모듈: 유니코드 분해/조합, 자판 매핑, 게임용 구성요소, 조합 가능성

pub mod components;
pub mod compose;
pub mod jamo;
pub mod pairing;
pub mod unicode;

pub use components::{syllable_components, word_components};
pub use compose::{append_jamo, delete_one_jamo};
pub use jamo::key_to_jamo;
pub use pairing::{
    are_unpairable_consonants, are_unpairable_vowels, unpairable_consonants, unpairable_vowels,
    CONSONANT_COMPONENTS, NO_BATCHIM_MARK, VOWEL_COMPONENTS,
};
pub use unicode::{is_consonant_jamo, is_hangul_syllable, is_vowel_jamo};
