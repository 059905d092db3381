use crate::stego::{Coefficients, Grid, COLS, FILLER_ALPHABET, ROWS};
use rand::rngs::StdRng;
use rand::SeedableRng;

pub mod generator_test;
pub mod overlay_test;

/// 고정 시드 난수 생성기
pub fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// 테스트용 고정 키
pub fn fixed_key() -> Coefficients {
    Coefficients::new(vec![0.0004, -0.01, 0.05, 16.2]).unwrap()
}

#[test]
fn test_filler_grid_shape_and_alphabet() {
    let grid = Grid::filler(&mut seeded(7));

    assert_eq!(grid.cells().dim(), (ROWS, COLS));
    for &ch in grid.cells().iter() {
        assert!(
            FILLER_ALPHABET.contains(&(ch as u8)),
            "채움 문자 {:?}가 허용 집합 밖에 있음",
            ch
        );
    }
}

#[test]
fn test_filler_alphabet_excludes_control_whitespace() {
    assert_eq!(FILLER_ALPHABET.len(), 95);
    for bad in [b'\t', b'\n', b'\r', 0x0b, 0x0c] {
        assert!(!FILLER_ALPHABET.contains(&bad));
    }
    assert!(FILLER_ALPHABET.contains(&b' '));
}
