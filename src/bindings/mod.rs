mod stego;

use pyo3::prelude::*;
use pyo3::types::PyModule;

/// Polysteg - 다항식 경로 텍스트 스테가노그래피
#[pymodule]
pub fn polysteg(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    // 키 생성, 인코딩, 디코딩, 파일 입출력
    stego::register(m)?;
    Ok(())
}
