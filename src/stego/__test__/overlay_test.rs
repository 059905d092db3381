use super::{fixed_key, seeded};
use crate::stego::overlay::MASK;
use crate::stego::{encode, overlay, COLS, FILLER_ALPHABET, ROWS};

#[test]
fn test_overlay_reveals_only_path() {
    let key = fixed_key();
    let grid = encode("overlay", &key, &mut seeded(10)).unwrap();
    let picture = overlay(&grid, &key, 7);

    let lines: Vec<Vec<char>> = picture.lines().map(|l| l.chars().collect()).collect();
    assert_eq!(lines.len(), ROWS);
    assert!(lines.iter().all(|l| l.len() == COLS));

    let mut revealed = 0;
    for (row, line) in lines.iter().enumerate() {
        for (x, &ch) in line.iter().enumerate() {
            if x < 7 && key.evaluate(x) == row {
                assert_eq!(ch, grid.get(row, x));
                revealed += 1;
            } else {
                assert_eq!(ch, MASK);
            }
        }
    }
    assert_eq!(revealed, 7);
}

#[test]
fn test_overlay_clamps_column_count() {
    let key = fixed_key();
    let grid = encode("", &key, &mut seeded(10)).unwrap();
    let picture = overlay(&grid, &key, 10_000);
    assert_eq!(picture.lines().count(), ROWS);
}

#[test]
fn test_mask_is_outside_filler_alphabet() {
    assert!(!FILLER_ALPHABET.iter().any(|&b| b as char == MASK));

    // 경로 위의 '.'은 가려진 칸과 구별되어야 함
    let key = fixed_key();
    let grid = encode("...", &key, &mut seeded(12)).unwrap();
    let picture = overlay(&grid, &key, 3);
    let revealed = picture.chars().filter(|&c| c == '.').count();
    assert_eq!(revealed, 3, "경로 위 '.' 3개가 모두 보여야 함");
    assert!(picture.lines().all(|l| l.chars().count() == COLS));
}
