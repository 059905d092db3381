//! # 다항식 기반 텍스트 스테가노그래피
//!
//! 32×256 크기의 무작위 문자 격자 안에 짧은 메시지를 숨깁니다.
//! 각 메시지 문자의 행 위치는 무작위로 생성된 3~5차 다항식이 결정하며,
//! 같은 계수(키)를 가진 쪽만 메시지를 다시 읽어낼 수 있습니다.
//!
//! 암호가 아니라 은닉 기법입니다. 비밀성은 전적으로 계수를 아는지에 달려 있습니다.

pub mod types;
pub mod error;
pub mod generator;
pub mod polynomial;
pub mod key;
pub mod encoder;
pub mod decoder;
pub mod storage;
pub mod overlay;

#[cfg(test)]
mod __test__;

// 라이브러리 사용자가 편리하게 접근할 수 있도록 주요 항목들을 공개합니다.
pub use types::{Coefficients, Grid, COLS, FILLER_ALPHABET, MAX_MESSAGE_LEN, ROWS};
pub use error::{Result, ShapeMismatch, StegError};
pub use encoder::{create_character_grid, encode};
pub use decoder::{decode, decode_message, decode_text};
pub use storage::{load_grid, read_grid_lines, save_grid, DEFAULT_GRID_FILE};
pub use overlay::overlay;
