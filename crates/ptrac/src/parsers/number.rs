// nom parser combinators
use nom::character::complete::{self, space0};
use nom::combinator::{all_consuming, map};
use nom::multi::many0;
use nom::number::complete::double;
use nom::sequence::terminated;
use nom::IResult;

/// Every value on a line as a list of signed integers
///
/// An empty line is an empty list. Anything that is not an integer fails.
pub(crate) fn vector_of_i64(i: &str) -> IResult<&str, Vec<i64>> {
    all_consuming(many0(terminated(complete::i64, space0)))(i.trim())
}

/// Every value on a line as a list of f64 values
pub(crate) fn vector_of_f64(i: &str) -> IResult<&str, Vec<f64>> {
    all_consuming(many0(terminated(double, space0)))(i.trim())
}

/// Every value on a line read as a real and truncated to an integer
///
/// Integers are sometimes written in floating point form, e.g. `1.3000E+01`.
pub(crate) fn vector_of_truncated(i: &str) -> IResult<&str, Vec<i64>> {
    map(vector_of_f64, |values| {
        values.into_iter().map(|v| v as i64).collect()
    })(i)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_lists() {
        assert_eq!(vector_of_i64("  1  2 -3 "), Ok(("", vec![1, 2, -3])));
        assert_eq!(vector_of_i64(""), Ok(("", vec![])));
        assert_eq!(vector_of_i64("   "), Ok(("", vec![])));
        assert!(vector_of_i64("1 2.5").is_err());
        assert!(vector_of_i64("1 abc").is_err());
    }

    #[test]
    fn real_lists() {
        assert_eq!(
            vector_of_f64(" 4000  1.5E+00 -2.0e-01 3"),
            Ok(("", vec![4000.0, 1.5, -0.2, 3.0]))
        );
        assert!(vector_of_f64("1.0 x").is_err());
    }

    #[test]
    fn truncated_lists() {
        assert_eq!(
            vector_of_truncated("1.3000E+01 2.0 0.9 -1.5"),
            Ok(("", vec![13, 2, 0, -1]))
        );
    }
}
