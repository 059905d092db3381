//! 키 교환 형식: 최고차항부터 공백으로 구분한 십진수들

use std::fmt;
use std::str::FromStr;

use super::error::StegError;
use super::types::Coefficients;

impl fmt::Display for Coefficients {
    /// 각 계수를 가장 짧은 왕복 가능 표현으로 씁니다.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, c) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

impl FromStr for Coefficients {
    type Err = StegError;

    /// 공백이나 쉼표로 구분된 계수를 읽습니다. 양끝의 `[` `]`는 무시합니다.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let body = s.trim();
        let body = body.strip_prefix('[').unwrap_or(body);
        let body = body.strip_suffix(']').unwrap_or(body);

        let values = body
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|token| !token.is_empty())
            .map(|token| {
                token
                    .parse::<f64>()
                    .map_err(|_| StegError::InvalidKey(format!("{:?} is not a decimal number", token)))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Coefficients::new(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_space_separated() {
        let key = Coefficients::new(vec![-0.003905, 0.104075, 17.036691]).unwrap();
        assert_eq!(key.to_string(), "-0.003905 0.104075 17.036691");
    }

    #[test]
    fn test_parse_accepts_printed_list() {
        let key: Coefficients = "[-0.003905 0.104075 17.036691]".parse().unwrap();
        assert_eq!(key.as_slice(), &[-0.003905, 0.104075, 17.036691]);

        let key: Coefficients = " 1.5, -2 ,3 ".parse().unwrap();
        assert_eq!(key.as_slice(), &[1.5, -2.0, 3.0]);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!("".parse::<Coefficients>(), Err(StegError::InvalidKey(_))));
        assert!(matches!("[ ]".parse::<Coefficients>(), Err(StegError::InvalidKey(_))));
        assert!(matches!("1 two 3".parse::<Coefficients>(), Err(StegError::InvalidKey(_))));
        assert!(matches!("1 inf 3".parse::<Coefficients>(), Err(StegError::InvalidKey(_))));
        assert!(matches!("NaN".parse::<Coefficients>(), Err(StegError::InvalidKey(_))));
    }
}
