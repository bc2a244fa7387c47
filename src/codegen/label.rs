//! Spreadsheet-style label sequences.
//!
//! Labels are numerals in a bijective base-`n` system whose digits are the
//! characters of an inclusive [`LabelRange`]. There is no zero digit, so the
//! sequence over `A..=Z` reads `A, B, ..., Z, AA, AB, ..., AZ, BA, ..., ZZ, AAA`.
//!
//! ```text
//! index:  0  1 ... 25 26 27 ... 51 52 ... 701 702
//! label:  A  B ...  Z AA AB ... AZ BA ...  ZZ AAA
//! ```

use std::cmp::Ordering;

use super::GenerateError;

/// An inclusive window of characters used as the digit alphabet of a label.
///
/// Ranges iterate by Unicode scalar value, so a window spanning the surrogate
/// block simply skips it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LabelRange {
    low: char,
    high: char,
}

/// `A..=Z`, the alphabet of type-placeholder labels.
pub const UPPERCASE: LabelRange = LabelRange::new('A', 'Z');

/// `a..=z`, the alphabet of parameter-name labels.
pub const LOWERCASE: LabelRange = LabelRange::new('a', 'z');

impl LabelRange {
    /// Creates a range from `low` to `high`, both inclusive.
    ///
    /// # Panics
    ///
    /// Panics if `low` sorts after `high`. Use [`LabelRange::try_new`] for
    /// ranges that come from outside the program.
    #[must_use]
    pub const fn new(low: char, high: char) -> Self {
        assert!(low as u32 <= high as u32, "label range is inverted");
        Self { low, high }
    }

    /// Creates a range from `low` to `high`, rejecting inverted bounds.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::InvertedRange`] if `low > high`.
    pub const fn try_new(low: char, high: char) -> Result<Self, GenerateError> {
        if low as u32 > high as u32 {
            return Err(GenerateError::InvertedRange { low, high });
        }
        Ok(Self { low, high })
    }

    /// The first digit of the alphabet.
    #[must_use]
    pub const fn low(&self) -> char {
        self.low
    }

    /// The last digit of the alphabet.
    #[must_use]
    pub const fn high(&self) -> char {
        self.high
    }

    /// Number of digits in the alphabet.
    #[must_use]
    pub fn base(&self) -> usize {
        (self.low..=self.high).count()
    }

    /// Returns `true` if `character` is one of the range's digits.
    #[must_use]
    pub const fn contains(&self, character: char) -> bool {
        self.low as u32 <= character as u32 && character as u32 <= self.high as u32
    }

    fn alphabet(self) -> Vec<char> {
        (self.low..=self.high).collect()
    }

    fn offset_of(self, start: char) -> Result<usize, GenerateError> {
        if !self.contains(start) {
            return Err(GenerateError::StartOutOfRange {
                start,
                low: self.low,
                high: self.high,
            });
        }
        Ok((self.low..start).count())
    }
}

/// Returns the label at `index` of the sequence over `range` that begins at
/// `start`.
///
/// `start` shifts the sequence: index 0 yields `start`, and the sequence then
/// continues exactly as the default one would from that point.
///
/// # Panics
///
/// Panics if `start` is not inside `range`.
///
/// # Examples
///
/// ```rust
/// use pipable::codegen::{letter_identifier, LOWERCASE, UPPERCASE};
///
/// assert_eq!(letter_identifier(0, UPPERCASE, 'A'), "A");
/// assert_eq!(letter_identifier(25, UPPERCASE, 'A'), "Z");
/// assert_eq!(letter_identifier(26, UPPERCASE, 'A'), "AA");
/// assert_eq!(letter_identifier(0, LOWERCASE, 'f'), "f");
/// assert_eq!(letter_identifier(21, LOWERCASE, 'f'), "aa");
/// ```
#[must_use]
pub fn letter_identifier(index: usize, range: LabelRange, start: char) -> String {
    match try_letter_identifier(index, range, start) {
        Ok(label) => label,
        Err(error) => panic!("{error}"),
    }
}

/// Fallible form of [`letter_identifier`].
///
/// # Errors
///
/// Returns [`GenerateError::StartOutOfRange`] if `start` is not inside `range`.
pub fn try_letter_identifier(
    index: usize,
    range: LabelRange,
    start: char,
) -> Result<String, GenerateError> {
    let offset = range.offset_of(start)?;
    Ok(encode(index + offset, &range.alphabet()))
}

fn encode(index: usize, alphabet: &[char]) -> String {
    let base = alphabet.len();
    let mut digits = Vec::new();
    let mut value = index + 1;
    while value > 0 {
        value -= 1;
        digits.push(alphabet[value % base]);
        value /= base;
    }
    digits.iter().rev().collect()
}

/// Orders labels the way the sequence produces them: shorter labels first,
/// then digit by digit.
///
/// ```rust
/// use std::cmp::Ordering;
/// use pipable::codegen::compare_labels;
///
/// assert_eq!(compare_labels("Z", "AA"), Ordering::Less);
/// assert_eq!(compare_labels("AB", "AA"), Ordering::Greater);
/// ```
#[must_use]
pub fn compare_labels(left: &str, right: &str) -> Ordering {
    left.chars()
        .count()
        .cmp(&right.chars().count())
        .then_with(|| left.cmp(right))
}

/// An unbounded iterator over the labels of a range, beginning at a start
/// character.
///
/// ```rust
/// use pipable::codegen::{LabelSequence, UPPERCASE};
///
/// let labels: Vec<String> = LabelSequence::new(UPPERCASE, 'B').take(3).collect();
/// assert_eq!(labels, ["B", "C", "D"]);
/// ```
#[derive(Debug, Clone)]
pub struct LabelSequence {
    alphabet: Vec<char>,
    next: usize,
}

impl LabelSequence {
    /// Creates the sequence over `range` that begins at `start`.
    ///
    /// # Panics
    ///
    /// Panics if `start` is not inside `range`.
    #[must_use]
    pub fn new(range: LabelRange, start: char) -> Self {
        match Self::try_new(range, start) {
            Ok(sequence) => sequence,
            Err(error) => panic!("{error}"),
        }
    }

    /// Creates the sequence, rejecting a start outside the range.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::StartOutOfRange`] if `start` is not inside `range`.
    pub fn try_new(range: LabelRange, start: char) -> Result<Self, GenerateError> {
        let next = range.offset_of(start)?;
        Ok(Self {
            alphabet: range.alphabet(),
            next,
        })
    }

    /// The sequence over `range` beginning at its low bound.
    #[must_use]
    pub fn from_low(range: LabelRange) -> Self {
        Self {
            alphabet: range.alphabet(),
            next: 0,
        }
    }
}

impl Iterator for LabelSequence {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        let label = encode(self.next, &self.alphabet);
        self.next += 1;
        Some(label)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, "A")]
    #[case(1, "B")]
    #[case(25, "Z")]
    #[case(26, "AA")]
    #[case(27, "AB")]
    #[case(51, "AZ")]
    #[case(52, "BA")]
    #[case(701, "ZZ")]
    #[case(702, "AAA")]
    fn test_uppercase_labels(#[case] index: usize, #[case] expected: &str) {
        assert_eq!(letter_identifier(index, UPPERCASE, 'A'), expected);
    }

    #[rstest]
    #[case(0, 'B', "B")]
    #[case(24, 'B', "Z")]
    #[case(25, 'B', "AA")]
    #[case(0, 'Z', "Z")]
    #[case(1, 'Z', "AA")]
    fn test_start_shifts_sequence(#[case] index: usize, #[case] start: char, #[case] expected: &str) {
        assert_eq!(letter_identifier(index, UPPERCASE, start), expected);
    }

    #[test]
    fn test_parameter_labels_from_f() {
        let labels: Vec<String> = (0..4).map(|i| letter_identifier(i, LOWERCASE, 'f')).collect();
        assert_eq!(labels, ["f", "g", "h", "i"]);
    }

    #[test]
    fn test_single_digit_range() {
        let unary = LabelRange::new('x', 'x');
        assert_eq!(unary.base(), 1);
        assert_eq!(letter_identifier(0, unary, 'x'), "x");
        assert_eq!(letter_identifier(2, unary, 'x'), "xxx");
    }

    #[test]
    fn test_try_new_rejects_inverted_range() {
        assert_eq!(
            LabelRange::try_new('b', 'a'),
            Err(GenerateError::InvertedRange {
                low: 'b',
                high: 'a'
            })
        );
        assert_eq!(LabelRange::try_new('a', 'a').map(|r| r.base()), Ok(1));
    }

    #[test]
    #[should_panic(expected = "label range is inverted")]
    fn test_new_panics_on_inverted_range() {
        let _ = LabelRange::new('Z', 'A');
    }

    #[test]
    #[should_panic(expected = "outside label range")]
    fn test_start_outside_range_panics() {
        let _ = letter_identifier(0, UPPERCASE, 'a');
    }

    #[test]
    fn test_try_letter_identifier_reports_start() {
        assert_eq!(
            try_letter_identifier(0, LOWERCASE, 'F'),
            Err(GenerateError::StartOutOfRange {
                start: 'F',
                low: 'a',
                high: 'z'
            })
        );
    }

    #[test]
    fn test_sequence_matches_identifier() {
        let from_iterator: Vec<String> = LabelSequence::new(LOWERCASE, 'g').take(40).collect();
        let from_function: Vec<String> = (0..40).map(|i| letter_identifier(i, LOWERCASE, 'g')).collect();
        assert_eq!(from_iterator, from_function);
    }

    #[test]
    fn test_from_low_starts_at_low_bound() {
        let mut sequence = LabelSequence::from_low(UPPERCASE);
        assert_eq!(sequence.next().as_deref(), Some("A"));
        assert_eq!(sequence.nth(24).as_deref(), Some("Z"));
        assert_eq!(sequence.next().as_deref(), Some("AA"));
    }

    #[test]
    fn test_compare_labels_is_shortlex() {
        assert_eq!(compare_labels("A", "A"), Ordering::Equal);
        assert_eq!(compare_labels("Z", "AA"), Ordering::Less);
        assert_eq!(compare_labels("ZZ", "AAA"), Ordering::Less);
        assert_eq!(compare_labels("BA", "AZ"), Ordering::Greater);
    }
}
