use rand::Rng;
use tracing::debug;

use super::types::Coefficients;

/// 최고차항 계수의 절댓값 상한
pub const LEADING_BOUND: f64 = 0.0125;
/// 중간 계수들의 절댓값 상한
pub const INTERIOR_BOUND: f64 = 0.125;
/// 상수항 범위 (기준 행)
pub const CONSTANT_RANGE: (f64, f64) = (8.0, 24.0);
/// 차수 범위
pub const DEGREE_RANGE: (usize, usize) = (3, 5);

impl Coefficients {
    /// 새 키를 무작위로 생성합니다.
    ///
    /// 차수는 3~5 중 균등하게 고릅니다. 계수 크기를 차수별로 제한해
    /// 다항식 값이 256열 전체에서 32행 대역 근처에 머물도록 합니다.
    pub fn generate<R: Rng>(rng: &mut R) -> Self {
        let degree = rng.gen_range(DEGREE_RANGE.0..=DEGREE_RANGE.1);

        let mut values = Vec::with_capacity(degree + 1);
        values.push(rng.gen_range(-LEADING_BOUND..=LEADING_BOUND));
        for _ in 1..degree {
            values.push(rng.gen_range(-INTERIOR_BOUND..=INTERIOR_BOUND));
        }
        values.push(rng.gen_range(CONSTANT_RANGE.0..=CONSTANT_RANGE.1));

        debug!(degree, "generated polynomial key");
        Coefficients(values)
    }
}
