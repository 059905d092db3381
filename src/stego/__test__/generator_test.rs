//! 키 생성 테스트

use super::seeded;
use crate::stego::generator::{CONSTANT_RANGE, INTERIOR_BOUND, LEADING_BOUND};
use crate::stego::Coefficients;

#[test]
fn test_generated_coefficients_respect_bounds() {
    let mut rng = seeded(42);
    for _ in 0..500 {
        let key = Coefficients::generate(&mut rng);

        assert!((4..=6).contains(&key.len()), "계수 개수 {}", key.len());
        assert!(key.leading().abs() <= LEADING_BOUND, "최고차항 범위 초과");
        for c in key.interior() {
            assert!(c.abs() <= INTERIOR_BOUND, "중간 계수 범위 초과: {}", c);
        }
        assert!(
            (CONSTANT_RANGE.0..=CONSTANT_RANGE.1).contains(&key.constant()),
            "상수항 범위 초과"
        );
        assert_eq!(key.interior().len(), key.len() - 2);
    }
}

#[test]
fn test_every_degree_is_reachable() {
    let mut rng = seeded(3);
    let mut seen = [false; 3];
    for _ in 0..200 {
        let key = Coefficients::generate(&mut rng);
        seen[key.degree() - 3] = true;
    }
    assert_eq!(seen, [true, true, true], "3, 4, 5차가 모두 나와야 함");
}

#[test]
fn test_generation_is_reproducible_with_seed() {
    let a = Coefficients::generate(&mut seeded(27));
    let b = Coefficients::generate(&mut seeded(27));
    assert_eq!(a, b);
}
