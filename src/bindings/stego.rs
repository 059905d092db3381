use ndarray::Array2;
use numpy::{IntoPyArray, PyArray2, PyReadonlyArray2};
use pyo3::exceptions::{PyOSError, PyValueError};
use pyo3::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::stego::{self, Coefficients, Grid, StegError, DEFAULT_GRID_FILE};

impl From<StegError> for PyErr {
    fn from(err: StegError) -> PyErr {
        match &err {
            StegError::Persistence { .. } => PyOSError::new_err(err.to_string()),
            _ => PyValueError::new_err(err.to_string()),
        }
    }
}

fn rng_from(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// 유니코드 코드포인트 배열을 격자로 바꿉니다.
fn grid_from_codepoints(codes: PyReadonlyArray2<u32>) -> PyResult<Grid> {
    let view = codes.as_array();
    let chars = view
        .iter()
        .map(|&code| {
            char::from_u32(code)
                .ok_or_else(|| PyValueError::new_err(format!("invalid code point {}", code)))
        })
        .collect::<PyResult<Vec<char>>>()?;
    let cells = Array2::from_shape_vec(view.dim(), chars)
        .map_err(|e| PyValueError::new_err(e.to_string()))?;
    Ok(Grid::from_cells(cells)?)
}

#[pyfunction]
#[pyo3(signature = (seed=None))]
pub fn generate_polynomial(seed: Option<u64>) -> Vec<f64> {
    Coefficients::generate(&mut rng_from(seed)).into_vec()
}

#[pyfunction]
pub fn evaluate_polynomial(x: usize, coefficients: Vec<f64>) -> PyResult<usize> {
    Ok(Coefficients::new(coefficients)?.evaluate(x))
}

/// 메시지를 숨긴 격자(코드포인트 배열)와 키를 반환합니다.
#[pyfunction]
#[pyo3(signature = (message, seed=None))]
pub fn create_character_grid<'py>(
    py: Python<'py>,
    message: &str,
    seed: Option<u64>,
) -> PyResult<(&'py PyArray2<u32>, Vec<f64>)> {
    let mut rng = rng_from(seed);
    let (grid, key) = py.allow_threads(|| stego::create_character_grid(message, &mut rng))?;
    let codes = grid.cells().mapv(|ch| ch as u32);
    Ok((codes.into_pyarray(py), key.into_vec()))
}

#[pyfunction]
#[pyo3(signature = (grid, filename=None))]
pub fn save_grid_to_file(grid: PyReadonlyArray2<u32>, filename: Option<&str>) -> PyResult<()> {
    let grid = grid_from_codepoints(grid)?;
    stego::save_grid(&grid, filename.unwrap_or(DEFAULT_GRID_FILE))?;
    Ok(())
}

#[pyfunction]
#[pyo3(signature = (filename=None))]
pub fn read_grid_from_file(filename: Option<&str>) -> PyResult<Vec<String>> {
    Ok(stego::read_grid_lines(filename.unwrap_or(DEFAULT_GRID_FILE))?)
}

/// 격자 행 목록과 키로 256자를 복원합니다.
#[pyfunction]
pub fn decrypt(grid: Vec<String>, coefficients: Vec<f64>) -> PyResult<String> {
    let grid = Grid::from_lines(&grid)?;
    let key = Coefficients::new(coefficients)?;
    Ok(stego::decode(&grid, &key))
}

pub fn register(m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(generate_polynomial, m)?)?;
    m.add_function(wrap_pyfunction!(evaluate_polynomial, m)?)?;
    m.add_function(wrap_pyfunction!(create_character_grid, m)?)?;
    m.add_function(wrap_pyfunction!(save_grid_to_file, m)?)?;
    m.add_function(wrap_pyfunction!(read_grid_from_file, m)?)?;
    m.add_function(wrap_pyfunction!(decrypt, m)?)?;
    Ok(())
}
