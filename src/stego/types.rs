use ndarray::Array2;

use super::error::{Result, ShapeMismatch, StegError};

/// 격자의 행 개수
pub const ROWS: usize = 32;
/// 격자의 열 개수 (= 숨길 수 있는 최대 문자 수)
pub const COLS: usize = 256;
/// 메시지 최대 길이 (문자 단위)
pub const MAX_MESSAGE_LEN: usize = COLS;

/// 채움 문자 집합: 숫자, 소문자, 대문자, 구두점, 공백 (95자)
///
/// 관례적인 printable 집합에서 마지막 5개(탭, 개행, 복귀, 수직탭, 폼피드)를 뺀 것입니다.
pub const FILLER_ALPHABET: &[u8; 95] = b"0123456789\
abcdefghijklmnopqrstuvwxyz\
ABCDEFGHIJKLMNOPQRSTUVWXYZ\
!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~ ";

/// 다항식 계수 (키)
///
/// 0번이 최고차항, 마지막이 상수항입니다. 생성 후에는 바뀌지 않습니다.
#[derive(Debug, Clone, PartialEq)]
pub struct Coefficients(pub(super) Vec<f64>);

impl Coefficients {
    /// 임의의 계수 목록으로 키를 만듭니다. 비어 있거나 유한하지 않은 값이 있으면 거부합니다.
    pub fn new(values: Vec<f64>) -> Result<Self> {
        if values.is_empty() {
            return Err(StegError::InvalidKey("no coefficients given".to_string()));
        }
        if let Some(bad) = values.iter().find(|v| !v.is_finite()) {
            return Err(StegError::InvalidKey(format!("coefficient {} is not finite", bad)));
        }
        Ok(Self(values))
    }

    /// 다항식 차수 (계수 개수 - 1)
    pub fn degree(&self) -> usize {
        self.0.len() - 1
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn leading(&self) -> f64 {
        self.0[0]
    }

    pub fn constant(&self) -> f64 {
        self.0[self.0.len() - 1]
    }

    /// 최고차항과 상수항 사이의 계수들
    pub fn interior(&self) -> &[f64] {
        match self.0.len() {
            0..=2 => &self.0[..0],
            n => &self.0[1..n - 1],
        }
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.0
    }
}

/// 32×256 문자 격자
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    pub(super) cells: Array2<char>,
}

impl Grid {
    /// `(ROWS, COLS)` 형태의 배열로 격자를 만듭니다.
    pub fn from_cells(cells: Array2<char>) -> Result<Self> {
        let (rows, cols) = cells.dim();
        if rows != ROWS {
            return Err(StegError::InvalidGridShape(ShapeMismatch::RowCount { found: rows }));
        }
        if cols != COLS {
            return Err(StegError::InvalidGridShape(ShapeMismatch::ColumnCount { found: cols }));
        }
        Ok(Self { cells })
    }

    /// 한 줄이 한 행인 텍스트 행들로부터 격자를 복원합니다.
    ///
    /// 줄 끝의 `\n` 또는 `\r\n`은 길이를 재기 전에 제거합니다. 공백은 유효한 채움 문자이므로
    /// 그 외의 공백은 지우지 않습니다.
    pub fn from_lines<I, S>(lines: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut flat = Vec::with_capacity(ROWS * COLS);
        let mut rows = 0;
        for line in lines {
            let line = line.as_ref();
            let line = line.strip_suffix('\n').unwrap_or(line);
            let line = line.strip_suffix('\r').unwrap_or(line);
            if rows >= ROWS {
                return Err(StegError::InvalidGridShape(ShapeMismatch::RowCount { found: rows + 1 }));
            }
            let before = flat.len();
            flat.extend(line.chars());
            let width = flat.len() - before;
            if width != COLS {
                return Err(StegError::InvalidGridShape(ShapeMismatch::RowWidth { row: rows, found: width }));
            }
            rows += 1;
        }
        if rows != ROWS {
            return Err(StegError::InvalidGridShape(ShapeMismatch::RowCount { found: rows }));
        }

        let cells = Array2::from_shape_vec((ROWS, COLS), flat)
            .map_err(|_| StegError::InvalidGridShape(ShapeMismatch::RowCount { found: rows }))?;
        Ok(Self { cells })
    }

    /// 저장 형식의 텍스트 전체로부터 격자를 복원합니다.
    pub fn from_text(text: &str) -> Result<Self> {
        Self::from_lines(text.lines())
    }

    pub fn cells(&self) -> &Array2<char> {
        &self.cells
    }

    pub fn get(&self, row: usize, col: usize) -> char {
        self.cells[[row, col]]
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, ch: char) {
        self.cells[[row, col]] = ch;
    }

    /// 각 행을 줄바꿈 없는 문자열로 반환합니다.
    pub fn to_lines(&self) -> Vec<String> {
        self.cells.rows().into_iter().map(|row| row.iter().collect()).collect()
    }

    /// 저장 형식: 행마다 한 줄, 각 줄은 `\n`으로 끝납니다.
    pub fn to_text(&self) -> String {
        let mut out = String::with_capacity(ROWS * (COLS + 1));
        for line in self.to_lines() {
            out.push_str(&line);
            out.push('\n');
        }
        out
    }
}
