use super::types::{Coefficients, ROWS};

/// 열 좌표의 중심. 다항식은 `x - CENTER` 위에서 계산되어 127열을 기준으로 대칭이 됩니다.
pub const CENTER: f64 = 127.0;

impl Coefficients {
    /// 열 `x`에서의 다항식 값 (반올림 전)
    ///
    /// 계수 순서대로 내림차순 거듭제곱에 곱해 더합니다 (호너 방식).
    pub fn value_at(&self, x: usize) -> f64 {
        let t = x as f64 - CENTER;
        self.0.iter().fold(0.0, |acc, &c| acc * t + c)
    }

    /// 열 `x`에 대응하는 행 인덱스 `[0, ROWS)`
    pub fn evaluate(&self, x: usize) -> usize {
        row_index(self.value_at(x))
    }

    /// 앞쪽 `columns`개 열의 `(열, 행)` 경로
    pub fn path(&self, columns: usize) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..columns).map(move |x| (x, self.evaluate(x)))
    }
}

/// 다항식 값을 행 인덱스로 바꿉니다.
///
/// 가장 가까운 정수로 반올림(동률은 짝수 쪽)한 뒤 `ROWS`로 나눈 나머지를 취합니다.
/// 격자 경계에서 멈추지 않고 순환하므로 결과는 항상 유효한 행입니다.
/// 나머지는 부동소수점에서 계산합니다. 정수 값의 `rem_euclid`는 정확하고, 2^63 이상의 값도 포화되지 않습니다.
pub fn row_index(y: f64) -> usize {
    y.round_ties_even().rem_euclid(ROWS as f64) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_index_wraps_cyclically() {
        assert_eq!(row_index(0.0), 0);
        assert_eq!(row_index(31.4), 31);
        assert_eq!(row_index(32.0), 0);
        assert_eq!(row_index(45.0), 13);
        assert_eq!(row_index(-1.0), 31);
        assert_eq!(row_index(-33.0), 31);
    }

    #[test]
    fn test_row_index_rounds_half_to_even() {
        assert_eq!(row_index(16.5), 16);
        assert_eq!(row_index(17.5), 18);
        assert_eq!(row_index(-0.5), 0);
    }

    #[test]
    fn test_row_index_of_huge_values_is_exact() {
        // 2^63 이상의 f64는 모두 32의 배수
        assert_eq!(row_index(1e30), 0);
        assert_eq!(row_index(-1e30), 0);
        assert_eq!(row_index(1e300), 0);
        assert_eq!(row_index(-1e300), 0);
        assert_eq!(row_index(2f64.powi(63)), 0);
        // 2^53 + 32k 근처의 정확한 정수
        assert_eq!(row_index(2f64.powi(53) + 6.0), 6);
        assert_eq!(row_index(-(2f64.powi(53) + 6.0)), 26);
    }

    #[test]
    fn test_constant_key_with_huge_value_maps_to_row_zero() {
        let key = Coefficients::new(vec![1e30]).unwrap();
        assert_eq!(key.evaluate(0), 0);
        assert_eq!(key.evaluate(255), 0);
    }
}
