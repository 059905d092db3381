use super::error::{Result, StegError};
use super::types::{Coefficients, Grid, COLS, MAX_MESSAGE_LEN};

/// 키가 가리키는 경로를 따라 256개 문자를 열 순서대로 읽습니다.
///
/// 원래 메시지 길이와 상관없이 항상 256자를 돌려줍니다. 메시지 뒤쪽은 채움 문자입니다.
pub fn decode(grid: &Grid, key: &Coefficients) -> String {
    key.path(COLS).map(|(x, row)| grid.get(row, x)).collect()
}

/// 메시지 길이를 알고 있을 때 앞쪽 `len`자만 읽습니다.
pub fn decode_message(grid: &Grid, key: &Coefficients, len: usize) -> Result<String> {
    if len > MAX_MESSAGE_LEN {
        return Err(StegError::MessageTooLong { len });
    }
    Ok(key.path(len).map(|(x, row)| grid.get(row, x)).collect())
}

/// 저장 형식의 텍스트를 검사한 뒤 디코딩합니다.
pub fn decode_text(text: &str, key: &Coefficients) -> Result<String> {
    let grid = Grid::from_text(text)?;
    Ok(decode(&grid, key))
}
