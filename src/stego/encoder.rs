use ndarray::Array2;
use ndarray_rand::RandomExt;
use rand::distributions::Uniform;
use rand::Rng;
use tracing::debug;

use super::error::{Result, StegError};
use super::types::{Coefficients, Grid, COLS, FILLER_ALPHABET, MAX_MESSAGE_LEN, ROWS};

impl Grid {
    /// 모든 칸을 채움 문자 집합에서 독립적으로 균등하게 뽑은 격자
    pub fn filler<R: Rng>(rng: &mut R) -> Self {
        let picks: Array2<usize> =
            Array2::random_using((ROWS, COLS), Uniform::new(0, FILLER_ALPHABET.len()), rng);
        Grid {
            cells: picks.mapv(|i| FILLER_ALPHABET[i] as char),
        }
    }

    /// 메시지 문자 `x`를 `(evaluate(x), x)` 칸에 덮어씁니다.
    ///
    /// 같은 행으로 가는 두 문자라도 열이 다르므로 서로 덮어쓰지 않습니다.
    pub fn embed(&mut self, message: &[char], key: &Coefficients) {
        for ((x, row), &ch) in key.path(message.len()).zip(message) {
            self.set(row, x, ch);
        }
    }
}

/// 메시지를 문자 단위로 검사합니다.
///
/// 256자를 넘거나 줄 끝 문자가 들어 있으면 격자를 만들기 전에 거부합니다.
pub fn validate_message(message: &str) -> Result<Vec<char>> {
    let chars: Vec<char> = message.chars().collect();
    if chars.len() > MAX_MESSAGE_LEN {
        return Err(StegError::MessageTooLong { len: chars.len() });
    }
    if let Some(index) = chars.iter().position(|&c| c == '\n' || c == '\r') {
        return Err(StegError::InvalidMessageCharacter {
            index,
            ch: chars[index],
        });
    }
    Ok(chars)
}

/// 주어진 키로 메시지를 새 채움 격자에 숨깁니다.
pub fn encode<R: Rng>(message: &str, key: &Coefficients, rng: &mut R) -> Result<Grid> {
    let chars = validate_message(message)?;
    let mut grid = Grid::filler(rng);
    grid.embed(&chars, key);
    debug!(embedded = chars.len(), "message embedded into grid");
    Ok(grid)
}

/// 채움 격자를 만들고, 새 키를 생성해 메시지를 숨긴 뒤 둘 다 반환합니다.
///
/// 난수는 격자 채움, 키 생성 순서로 소비됩니다.
pub fn create_character_grid<R: Rng>(message: &str, rng: &mut R) -> Result<(Grid, Coefficients)> {
    let chars = validate_message(message)?;
    let mut grid = Grid::filler(rng);
    let key = Coefficients::generate(rng);
    grid.embed(&chars, &key);
    debug!(embedded = chars.len(), degree = key.degree(), "message embedded into grid");
    Ok((grid, key))
}
