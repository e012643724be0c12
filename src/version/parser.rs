//! Device version string parsing

use crate::version::error::VersionError;
use crate::version::number::VersionNumber;

/// Parse a dotted version string from device metadata.
///
/// Every `.`-separated component must be a non-negative integer, optionally
/// written with a leading `+`. Missing trailing components are 0 and
/// components past the third are ignored.
///
/// Examples:
/// - "1" -> VersionNumber(1, 0, 0)
/// - "1.2" -> VersionNumber(1, 2, 0)
/// - "1.2.3.4" -> VersionNumber(1, 2, 3)
pub fn parse_device_version(version: &str) -> Result<VersionNumber, VersionError> {
    let numbers = version
        .split('.')
        .map(|part| part.parse::<u64>().map_err(|_| VersionError::MissingNumber))
        .collect::<Result<Vec<_>, _>>()?;

    let nth = |index: usize| numbers.get(index).copied().unwrap_or(0);

    Ok(VersionNumber::new(nth(0), nth(1), nth(2)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("1", VersionNumber::new(1, 0, 0))]
    #[case("1.2", VersionNumber::new(1, 2, 0))]
    #[case("1.2.3", VersionNumber::new(1, 2, 3))]
    #[case("1.0.3", VersionNumber::new(1, 0, 3))]
    #[case("01.002.0", VersionNumber::new(1, 2, 0))]
    #[case("1.2.3.4", VersionNumber::new(1, 2, 3))] // extra components ignored
    #[case("+1.2.3", VersionNumber::new(1, 2, 3))] // explicit plus sign
    #[case("1.+2", VersionNumber::new(1, 2, 0))]
    fn parse_device_version_fills_missing_components(
        #[case] input: &str,
        #[case] expected: VersionNumber,
    ) {
        assert_eq!(parse_device_version(input), Ok(expected));
    }

    #[rstest]
    #[case("")]
    #[case("invalid")]
    #[case("1.x.3")]
    #[case("1..3")]
    #[case("1.2.")]
    #[case("-1.2.3")]
    #[case("++1.2.3")]
    #[case("+")]
    #[case("v1.2.3")]
    #[case(" 1.2.3")]
    #[case("1.2.3.beta")]
    fn parse_device_version_rejects_non_numeric_components(#[case] input: &str) {
        assert_eq!(parse_device_version(input), Err(VersionError::MissingNumber));
    }

    #[rstest]
    #[case("1", "1.0.0")]
    #[case("1.2", "1.2.0")]
    #[case("1.2.3", "1.2.3")]
    #[case("01.002.0", "1.2.0")]
    #[case("1.2.3.4", "1.2.3")]
    #[case("+1.2.3", "1.2.3")]
    fn parsed_version_renders_canonical_form(#[case] input: &str, #[case] expected: &str) {
        let parsed = parse_device_version(input).unwrap();

        assert_eq!(parsed.to_string(), expected);
        assert_eq!(parse_device_version(&parsed.to_string()), Ok(parsed));
    }
}
