//! Startup depth argument.

use crate::depth::Depth;
use crate::error::ParseDepthError;

/// Parses a command-line depth.
///
/// Surrounding whitespace is ignored. Any integer is accepted and clamped
/// into `[0, 10]`; integers too large for `i64` clamp by sign. Anything
/// else is an error the caller is expected to warn about and ignore.
pub fn parse_depth_arg(input: &str) -> Result<Depth, ParseDepthError> {
    let s = input.trim();
    let digits = s.strip_prefix(['+', '-']).unwrap_or(s);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseDepthError::new(input));
    }

    Ok(match s.parse::<i64>() {
        Ok(n) => Depth::clamped(n),
        Err(_) if s.starts_with('-') => Depth::MIN,
        Err(_) => Depth::MAX,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_integers() {
        assert_eq!(parse_depth_arg("0"), Ok(Depth::MIN));
        assert_eq!(parse_depth_arg("7").map(Depth::get), Ok(7));
        assert_eq!(parse_depth_arg(" 3 ").map(Depth::get), Ok(3));
        assert_eq!(parse_depth_arg("+2").map(Depth::get), Ok(2));
    }

    #[test]
    fn out_of_range_clamps() {
        assert_eq!(parse_depth_arg("-3"), Ok(Depth::MIN));
        assert_eq!(parse_depth_arg("11"), Ok(Depth::MAX));
        assert_eq!(parse_depth_arg("99999999999999999999999"), Ok(Depth::MAX));
        assert_eq!(parse_depth_arg("-99999999999999999999999"), Ok(Depth::MIN));
    }

    #[test]
    fn non_numeric_is_rejected() {
        for bad in ["", "abc", "3.5", "-", "+", "4x", "0x10"] {
            let err = parse_depth_arg(bad).unwrap_err();
            assert_eq!(err.input, bad);
        }
    }
}
