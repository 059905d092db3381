use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::info;

use super::error::{Result, StegError};
use super::types::Grid;

/// 파일 이름을 주지 않았을 때 쓰는 기본 격자 파일
pub const DEFAULT_GRID_FILE: &str = "encrypted_message.txt";

fn persistence(path: &Path) -> impl FnOnce(std::io::Error) -> StegError + '_ {
    move |source| StegError::Persistence {
        path: path.to_path_buf(),
        source,
    }
}

/// 격자를 한 행에 한 줄씩 저장합니다.
pub fn save_grid(grid: &Grid, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(persistence(path))?;
    let mut writer = BufWriter::new(file);
    for line in grid.to_lines() {
        writeln!(writer, "{}", line).map_err(persistence(path))?;
    }
    writer.flush().map_err(persistence(path))?;
    info!(path = %path.display(), "grid saved");
    Ok(())
}

/// 격자 파일의 줄들을 형태 검사 없이 읽습니다. 줄 끝 문자는 제거됩니다.
pub fn read_grid_lines(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(persistence(path))?;
    info!(path = %path.display(), "grid read");
    Ok(text.lines().map(str::to_owned).collect())
}

/// 격자 파일을 읽고 32×256 형태를 검사합니다.
pub fn load_grid(path: impl AsRef<Path>) -> Result<Grid> {
    let lines = read_grid_lines(path)?;
    Grid::from_lines(&lines)
}
