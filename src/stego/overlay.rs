use super::types::{Coefficients, Grid, COLS, ROWS};

/// 경로 밖의 칸을 가리는 문자 (가운뎃점). 채움 문자 집합에 없으므로 경로 위의 문자와 헷갈리지 않습니다.
pub const MASK: char = '\u{b7}';

/// 키 경로를 드러낸 격자 그림
///
/// 앞쪽 `columns`개 열에서 경로 위의 칸만 원래 문자를 남기고 나머지는 `MASK`로 바꿉니다.
pub fn overlay(grid: &Grid, key: &Coefficients, columns: usize) -> String {
    let mut canvas = vec![vec![MASK; COLS]; ROWS];
    for (x, row) in key.path(columns.min(COLS)) {
        canvas[row][x] = grid.get(row, x);
    }

    let mut out = String::with_capacity(ROWS * (COLS + 1));
    for line in canvas {
        out.extend(line);
        out.push('\n');
    }
    out
}
