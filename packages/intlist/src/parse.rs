use std::num::IntErrorKind;

use crate::iter::Run;
use crate::{Item, Iter, Status};

/// Parses an [intlist][crate] and returns the fully expanded values in specification order.
///
/// An empty string is valid input and returns an empty result. On error no values are
/// returned, even when some items of the specification were well-formed.
///
/// See [package-level documentation][crate] for details.
///
/// # Example
///
/// ```
/// let values = intlist::parse("1,2,21,50...54,61...57").unwrap();
///
/// assert_eq!(
///     values,
///     vec![1, 2, 21, 50, 51, 52, 53, 54, 61, 60, 59, 58, 57]
/// );
/// ```
pub fn parse(spec: &str) -> crate::Result<Vec<Item>> {
    let mut iter = Iter::new(spec);

    if let Status::Invalid(error) = iter.status() {
        return Err(error.clone());
    }

    let mut values = Vec::new();

    while let Some(value) = iter.next() {
        values.push(value);
    }

    Ok(values)
}

/// Validates a whole specification and converts it into pending runs, stopping at the first
/// invalid item. Nothing is retained from a specification that contains any invalid item.
pub(crate) fn parse_spec(spec: &str) -> crate::Result<Vec<Run>> {
    if spec.is_empty() {
        // The empty specification denotes the empty list. This is the sole place where a
        // zero-length item is tolerated.
        return Ok(Vec::new());
    }

    spec.split(',').map(parse_item).collect()
}

fn parse_item(item: &str) -> crate::Result<Run> {
    if item.is_empty() {
        return Err(crate::Error::InvalidSyntax {
            invalid_value: item.to_string(),
            problem: "specification items must not be empty".to_string(),
        });
    }

    let endpoints = item.split("...").collect::<Vec<_>>();

    match *endpoints.as_slice() {
        [value] => parse_integer(value, "item").map(Run::single),
        [first, last] => parse_range(first, last),
        _ => Err(crate::Error::InvalidSyntax {
            invalid_value: item.to_string(),
            problem: "an item may contain at most one '...' separator".to_string(),
        }),
    }
}

fn parse_range(first: &str, last: &str) -> crate::Result<Run> {
    let first = parse_integer(first, "range start")?;
    let last = parse_integer(last, "range end")?;

    Ok(Run::spanning(first, last))
}

/// Parses one integer literal, distinguishing overflow from malformed input.
fn parse_integer(literal: &str, role: &str) -> crate::Result<Item> {
    literal.parse::<Item>().map_err(|inner| {
        if matches!(
            inner.kind(),
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow
        ) {
            crate::Error::ValueOutOfRange {
                invalid_value: literal.to_string(),
            }
        } else {
            crate::Error::InvalidSyntax {
                invalid_value: literal.to_string(),
                problem: format!("{role} could not be parsed as an integer: {inner}"),
            }
        }
    })
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn parse_smoke_test() {
        assert_eq!(parse("").unwrap(), vec![]);

        assert_eq!(parse("1234").unwrap(), vec![1234]);

        assert_eq!(parse("6...9").unwrap(), vec![6, 7, 8, 9]);

        assert_eq!(parse("-1...2,6...4").unwrap(), vec![-1, 0, 1, 2, 6, 5, 4]);

        assert_eq!(
            parse("1...3,7,5...3,9").unwrap(),
            vec![1, 2, 3, 7, 5, 4, 3, 9]
        );

        assert_eq!(
            parse("1,2,21,50...54,57...61").unwrap(),
            vec![1, 2, 21, 50, 51, 52, 53, 54, 57, 58, 59, 60, 61]
        );
    }

    #[test]
    fn equal_endpoints_yield_one_value() {
        assert_eq!(parse("7...7").unwrap(), vec![7]);
    }

    #[test]
    fn leading_plus_is_accepted() {
        assert_eq!(parse("+5,+1...+3").unwrap(), vec![5, 1, 2, 3]);
    }

    #[test]
    fn extreme_values_parse() {
        assert_eq!(parse("9223372036854775807").unwrap(), vec![i64::MAX]);
        assert_eq!(parse("-9223372036854775808").unwrap(), vec![i64::MIN]);
    }

    #[test]
    fn expanded_length_is_sum_of_item_lengths() {
        // One literal plus two six-value ranges.
        assert_eq!(parse("42,4...9,8...3").unwrap().len(), 1 + 6 + 6);
    }

    #[test]
    fn whitespace_is_error() {
        // A whitespace-only string is not the empty list.
        parse(" ").unwrap_err();

        parse("   12, 4, 9...6").unwrap_err();
        parse(" 1").unwrap_err();
        parse("1 ").unwrap_err();
        parse("1... 2").unwrap_err();
    }

    #[test]
    fn garbage_is_error() {
        parse("foo").unwrap_err();
        parse("3.5,12").unwrap_err();
        parse("3.9...5").unwrap_err();
        parse("2...5.4").unwrap_err();
        parse("6...").unwrap_err();
        parse("...6").unwrap_err();
    }

    #[test]
    fn multiple_range_separators_in_one_item_is_error() {
        parse("-2...-4...-6,12").unwrap_err();
        parse("1......2").unwrap_err();
    }

    #[test]
    fn empty_item_is_error() {
        parse(",").unwrap_err();
        parse(",1").unwrap_err();
        parse("1,,2").unwrap_err();
        parse("1,2,").unwrap_err();
    }

    #[test]
    fn overflow_is_distinct_from_syntax_error() {
        assert!(matches!(
            parse("99999999999999999999"),
            Err(crate::Error::ValueOutOfRange { .. })
        ));

        assert!(matches!(
            parse("5...99999999999999999999"),
            Err(crate::Error::ValueOutOfRange { .. })
        ));

        assert!(matches!(
            parse("abc"),
            Err(crate::Error::InvalidSyntax { .. })
        ));
    }

    #[test]
    fn first_invalid_item_is_reported() {
        // The malformed second item wins over the out-of-range third one.
        assert!(matches!(
            parse("1,x,99999999999999999999"),
            Err(crate::Error::InvalidSyntax { .. })
        ));
    }
}
