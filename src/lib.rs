//! Polysteg - 다항식 경로를 이용한 텍스트 스테가노그래피

pub mod stego;

#[cfg(feature = "python")]
mod bindings;

pub use stego::{
    create_character_grid, decode, decode_message, decode_text, encode, load_grid, overlay,
    save_grid, Coefficients, Grid, Result, StegError,
};
