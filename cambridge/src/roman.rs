//! Roman numerals

use crate::Error;

/// Symbols for the (one, five, ten) of each decimal place below the thousands.
const HUNDREDS: (char, char, char) = ('C', 'D', 'M');
const TENS: (char, char, char) = ('X', 'L', 'C');
const ONES: (char, char, char) = ('I', 'V', 'X');

/// Converts `num` to an upper-case Roman numeral.
///
/// Thousands are written as repeated `M`s, so there is no upper limit, although anything past
/// 3999 is no longer classical notation.
///
/// # Example
///
/// ```rust
/// use cambridge::roman::roman;
/// assert_eq!(roman(1994).unwrap(), "MCMXCIV");
/// assert!(roman(0).is_err());
/// ```
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if `num` is zero or negative.
pub fn roman(num: i64) -> Result<String, Error> {
    if num < 1 {
        return Err(Error::InvalidInput(format!(
            "roman numerals are only defined for positive integers, got {num}"
        )));
    }

    let thousands = usize::try_from(num / 1000)
        .map_err(|_| Error::InvalidInput(format!("{num} is out of range")))?;
    let mut out = "M".repeat(thousands);
    let mut rest = num % 1000;

    for (divisor, symbols) in [(100, HUNDREDS), (10, TENS), (1, ONES)] {
        out.push_str(&digit(rest / divisor, symbols));
        rest %= divisor;
    }

    Ok(out)
}

/// Writes a single decimal digit using the symbols of its place.
fn digit(num: i64, (one, five, ten): (char, char, char)) -> String {
    let times = |n: i64| std::iter::repeat_n(one, usize::try_from(n).unwrap_or_default());

    match num {
        1..=3 => times(num).collect(),
        4 => [one, five].iter().collect(),
        5..=8 => std::iter::once(five).chain(times(num - 5)).collect(),
        9 => [one, ten].iter().collect(),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(1, "I")]
    #[case(3, "III")]
    #[case(4, "IV")]
    #[case(5, "V")]
    #[case(8, "VIII")]
    #[case(9, "IX")]
    #[case(14, "XIV")]
    #[case(40, "XL")]
    #[case(90, "XC")]
    #[case(400, "CD")]
    #[case(444, "CDXLIV")]
    #[case(1994, "MCMXCIV")]
    #[case(2024, "MMXXIV")]
    #[case(3999, "MMMCMXCIX")]
    fn converts_canonical_forms(#[case] num: i64, #[case] expected: &str) {
        assert_eq!(roman(num).unwrap(), expected);
    }

    #[rstest]
    #[case(0)]
    #[case(-1)]
    #[case(i64::MIN)]
    fn rejects_non_positive(#[case] num: i64) {
        assert!(matches!(roman(num), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn uses_only_roman_symbols() {
        for num in 1..=4000 {
            let numeral = roman(num).unwrap();

            assert!(
                numeral.chars().all(|c| "IVXLCDM".contains(c)),
                "{num} => {numeral}"
            );
        }
    }

    #[test]
    fn length_grows_with_non_zero_digit_groups() {
        // Each non-zero place contributes at least one symbol
        for num in 1..=4000_i64 {
            let groups = [num / 1000, (num / 100) % 10, (num / 10) % 10, num % 10]
                .iter()
                .filter(|&&d| d != 0)
                .count();

            assert!(roman(num).unwrap().len() >= groups);
        }
    }

    #[test]
    fn writes_thousands_as_repeated_m() {
        assert_eq!(roman(5000).unwrap(), "MMMMM");
    }
}
