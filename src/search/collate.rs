//! Locale-style title ordering.
//!
//! Titles are decomposed (NFD) and compared in three levels:
//!
//! 1. base characters, case-folded, with whitespace ahead of punctuation,
//!    punctuation ahead of other symbols, symbols ahead of digits and digits
//!    ahead of letters;
//! 2. accents, unaccented first;
//! 3. case, lowercase first.
//!
//! A later level only matters when every earlier level ties.

use std::cmp::Ordering;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// ASCII punctuation in collation order. Anything not listed falls into the
/// symbol group and orders by code point.
const PUNCTUATION_ORDER: &str = "_-,;:!?.'\"()[]{}@*/\\&#%`^+<=>|~$";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum CharClass {
	Whitespace,
	Punctuation,
	Symbol,
	Digit,
	Letter,
}

/// Primary weight of one base character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct Weight {
	class: CharClass,
	value: u32,
}

impl Weight {
	fn of(c: char) -> Self {
		let (class, value) = if c.is_whitespace() {
			(CharClass::Whitespace, 0)
		} else if c.is_alphabetic() {
			(CharClass::Letter, u32::from(c))
		} else if c.is_numeric() {
			(CharClass::Digit, c.to_digit(10).unwrap_or(u32::from(c)))
		} else if let Some(rank) = PUNCTUATION_ORDER.find(c) {
			(CharClass::Punctuation, rank as u32)
		} else {
			(CharClass::Symbol, u32::from(c))
		};
		Self { class, value }
	}
}

/// Precomputed sort key for one title.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct CollationKey {
	primary: Vec<Weight>,
	secondary: Vec<Vec<char>>,
	tertiary: Vec<bool>,
}

impl CollationKey {
	#[must_use]
	pub fn new(title: &str) -> Self {
		let mut primary = Vec::with_capacity(title.len());
		let mut secondary: Vec<Vec<char>> = Vec::with_capacity(title.len());
		let mut tertiary = Vec::with_capacity(title.len());
		for c in title.nfd() {
			if is_combining_mark(c)
				&& let Some(marks) = secondary.last_mut()
			{
				marks.push(c);
				continue;
			}
			primary.extend(c.to_lowercase().map(Weight::of));
			secondary.push(Vec::new());
			tertiary.push(c.is_uppercase());
		}
		Self {
			primary,
			secondary,
			tertiary,
		}
	}
}

/// Compare two titles the way [`CollationKey`] orders them.
#[must_use]
pub fn compare(a: &str, b: &str) -> Ordering {
	CollationKey::new(a).cmp(&CollationKey::new(b))
}

#[cfg(test)]
mod tests {
	use super::*;

	fn sorted(mut titles: Vec<&str>) -> Vec<&str> {
		titles.sort_by(|a, b| compare(a, b));
		titles
	}

	#[test]
	fn case_does_not_dominate_ordering() {
		assert_eq!(
			sorted(vec!["beta", "Alpha", "alpha2", "Gamma"]),
			vec!["Alpha", "alpha2", "beta", "Gamma"]
		);
	}

	#[test]
	fn lowercase_breaks_ties_first() {
		assert_eq!(compare("api", "API"), Ordering::Less);
		assert_eq!(compare("Api", "Api"), Ordering::Equal);
	}

	#[test]
	fn punctuation_and_digits_precede_letters() {
		assert_eq!(
			sorted(vec!["Zed", "3D Viewer", "_draft", "Atlas"]),
			vec!["_draft", "3D Viewer", "Atlas", "Zed"]
		);
	}

	#[test]
	fn accented_letters_sort_with_their_base_letter() {
		assert_eq!(
			sorted(vec!["Zebra", "Éclair", "eagle"]),
			vec!["eagle", "Éclair", "Zebra"]
		);
		assert_eq!(sorted(vec!["Ölfarbe", "Oboe", "Pilot"]), vec!["Oboe", "Ölfarbe", "Pilot"]);
	}

	#[test]
	fn accents_outrank_case() {
		assert_eq!(
			sorted(vec!["Résumé", "résumé", "Resume", "resume"]),
			vec!["resume", "Resume", "résumé", "Résumé"]
		);
	}

	#[test]
	fn precomposed_and_decomposed_forms_are_equal() {
		assert_eq!(compare("caf\u{e9}", "cafe\u{301}"), Ordering::Equal);
	}

	#[test]
	fn separators_follow_punctuation_table() {
		assert_eq!(
			sorted(vec!["a-b", "a_b", "a b", "a.b"]),
			vec!["a b", "a_b", "a-b", "a.b"]
		);
	}
}
