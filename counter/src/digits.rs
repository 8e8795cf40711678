//! Carry propagation shared by every counter in this crate. Digits are stored
//! least significant first, so index 0 is incremented and any overflow carries
//! towards the end of the string.
use std::convert::Infallible;

/// The set of values a single digit can take.
pub trait Radix {
    type Digit: Copy + PartialEq;
    type Error;

    /// The value a digit wraps around to after its maximum.
    const MIN: Self::Digit;

    /// Returns the digit after `digit`, or `None` if `digit` is the maximum
    /// and must wrap. Digits outside the alphabet are reported as errors.
    fn successor(
        digit: Self::Digit,
    ) -> Result<Option<Self::Digit>, Self::Error>;
}

/// What happens when a carry runs off the most significant end of the digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Growth {
    /// The number of digits never changes. Overflow leaves every digit at the
    /// minimum.
    Fixed,
    /// Overflow appends an extra minimum digit, so "zz" is followed by
    /// "aaa".
    OnOverflow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rollover {
    /// Some digit absorbed the carry.
    Stopped,
    /// Every digit wrapped to the minimum and the width is fixed.
    Wrapped,
    /// Every digit wrapped to the minimum and a new minimum digit was appended.
    Grew,
}

/// Adds one to `digits`. Only the digits visited by the carry are validated.
/// If an invalid digit is found, the digits before it will already have been
/// wrapped to `R::MIN`.
pub fn increment<R: Radix>(
    digits: &mut Vec<R::Digit>,
    growth: Growth,
) -> Result<Rollover, R::Error> {
    for digit in digits.iter_mut() {
        match R::successor(*digit)? {
            Some(next) => {
                *digit = next;
                return Ok(Rollover::Stopped);
            }
            None => *digit = R::MIN,
        }
    }
    match growth {
        Growth::Fixed => Ok(Rollover::Wrapped),
        Growth::OnOverflow => {
            digits.push(R::MIN);
            Ok(Rollover::Grew)
        }
    }
}

/// Base 256 digits.
pub struct Byte;

impl Radix for Byte {
    type Digit = u8;
    type Error = Infallible;

    const MIN: u8 = 0;

    fn successor(digit: u8) -> Result<Option<u8>, Infallible> {
        Ok(digit.checked_add(1))
    }
}

/// Base 26 digits spelled with the lowercase latin letters.
pub struct Lowercase;

impl Lowercase {
    pub const MAX: char = 'z';
}

impl Radix for Lowercase {
    type Digit = char;

    /// The offending symbol.
    type Error = char;

    const MIN: char = 'a';

    fn successor(digit: char) -> Result<Option<char>, char> {
        match digit {
            Self::MAX => Ok(None),
            'a'..'z' => Ok(Some((digit as u8 + 1) as char)),
            _ => Err(digit),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn increment_str(s: &str, growth: Growth) -> (String, Rollover) {
        let mut digits = s.chars().collect::<Vec<_>>();
        let rollover = increment::<Lowercase>(&mut digits, growth).unwrap();
        (digits.into_iter().collect(), rollover)
    }

    #[test]
    fn byte_carry_stops_at_first_non_wrapping_digit() {
        let mut digits = vec![255, 3, 255];
        assert_eq!(
            increment::<Byte>(&mut digits, Growth::Fixed),
            Ok(Rollover::Stopped)
        );
        assert_eq!(digits, vec![0, 4, 255]);
    }

    #[test]
    fn byte_fixed_width_wraps() {
        let mut digits = vec![255, 255];
        assert_eq!(
            increment::<Byte>(&mut digits, Growth::Fixed),
            Ok(Rollover::Wrapped)
        );
        assert_eq!(digits, vec![0, 0]);
    }

    #[test]
    fn byte_growth_appends_min_digit() {
        let mut digits = vec![255];
        assert_eq!(
            increment::<Byte>(&mut digits, Growth::OnOverflow),
            Ok(Rollover::Grew)
        );
        assert_eq!(digits, vec![0, 0]);
    }

    #[test]
    fn lowercase_carries() {
        assert_eq!(
            increment_str("za", Growth::OnOverflow),
            ("ab".to_string(), Rollover::Stopped)
        );
        assert_eq!(
            increment_str("zz", Growth::OnOverflow),
            ("aaa".to_string(), Rollover::Grew)
        );
        assert_eq!(
            increment_str("zz", Growth::Fixed),
            ("aa".to_string(), Rollover::Wrapped)
        );
    }

    #[test]
    fn empty_digits() {
        assert_eq!(
            increment_str("", Growth::OnOverflow),
            ("a".to_string(), Rollover::Grew)
        );
        assert_eq!(
            increment_str("", Growth::Fixed),
            (String::new(), Rollover::Wrapped)
        );
    }

    #[test]
    fn lowercase_rejects_symbols_outside_alphabet() {
        for symbol in ['A', '`', '{', '1', 'é'] {
            let mut digits = vec![symbol];
            assert_eq!(
                increment::<Lowercase>(&mut digits, Growth::OnOverflow),
                Err(symbol)
            );
        }
    }

    #[test]
    fn only_visited_digits_are_validated() {
        let mut digits = vec!['b', '1'];
        assert_eq!(
            increment::<Lowercase>(&mut digits, Growth::OnOverflow),
            Ok(Rollover::Stopped)
        );
        assert_eq!(digits, vec!['c', '1']);
    }
}
