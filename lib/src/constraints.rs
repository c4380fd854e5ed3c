use crate::results::GuessResult;
use crate::results::LetterResult;
use crate::results::WordleError;
use std::iter::zip;
use std::result::Result;

/// The longest word a spec with constraints may describe.
pub const MAX_WORD_LENGTH: usize = 255;

/// One known fact about a letter, typically derived from the feedback to an earlier guess.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LetterConstraint {
    pub letter: char,
    /// Whether the letter is in the word at all. `false` excludes it from every position.
    pub is_present: bool,
    /// The zero-based index where the letter is known to be, if known.
    pub known_position: Option<usize>,
    /// Zero-based indices where the letter is known not to be.
    #[cfg_attr(feature = "serde", serde(default))]
    pub excluded_positions: Vec<usize>,
}

impl LetterConstraint {
    /// The letter is not in the word.
    pub fn absent(letter: char) -> LetterConstraint {
        LetterConstraint {
            letter,
            is_present: false,
            known_position: None,
            excluded_positions: Vec::new(),
        }
    }

    /// The letter is at the given index.
    pub fn here(letter: char, index: usize) -> LetterConstraint {
        LetterConstraint {
            letter,
            is_present: true,
            known_position: Some(index),
            excluded_positions: Vec::new(),
        }
    }

    /// The letter is in the word, but not at any of the given indices.
    pub fn elsewhere<I: IntoIterator<Item = usize>>(letter: char, excluded: I) -> LetterConstraint {
        LetterConstraint {
            letter,
            is_present: true,
            known_position: None,
            excluded_positions: excluded.into_iter().collect(),
        }
    }

    /// Builds a constraint from the sentinel form, where a negative `place` means the position
    /// is unknown.
    pub fn from_raw(
        letter: char,
        is_present: bool,
        place: i64,
        excluded_positions: Vec<usize>,
    ) -> LetterConstraint {
        LetterConstraint {
            letter,
            is_present,
            known_position: usize::try_from(place).ok(),
            excluded_positions,
        }
    }

    /// Returns `true` iff the letter is present but its index is not yet known.
    pub fn is_present_elsewhere(&self) -> bool {
        self.is_present && self.known_position.is_none()
    }

    fn positions(&self) -> impl Iterator<Item = usize> + '_ {
        self.known_position
            .iter()
            .chain(self.excluded_positions.iter())
            .copied()
    }
}

/// Describes which words to keep: either every word of a given length, or the words of that
/// length that also satisfy a list of letter constraints.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FilterSpec {
    LengthOnly(usize),
    WithConstraints {
        char_count: usize,
        constraints: Vec<LetterConstraint>,
    },
}

impl FilterSpec {
    /// Creates a spec for words with `char_count` letters. A missing or empty constraint list
    /// yields [`FilterSpec::LengthOnly`].
    pub fn new(char_count: usize, constraints: Option<Vec<LetterConstraint>>) -> FilterSpec {
        match constraints {
            Some(constraints) if !constraints.is_empty() => FilterSpec::WithConstraints {
                char_count,
                constraints,
            },
            _ => FilterSpec::LengthOnly(char_count),
        }
    }

    /// Builds a spec from the feedback given to one or more guesses.
    ///
    /// If a letter is marked [`LetterResult::NotPresent`] in one place but is present elsewhere
    /// (i.e. the guess contained the letter more times than the word does), that place is
    /// excluded for the letter instead of excluding the letter entirely.
    pub fn from_guess_results(
        char_count: usize,
        guess_results: &[GuessResult],
    ) -> Result<FilterSpec, WordleError> {
        let mut fixed: Vec<(char, usize)> = Vec::new();
        let mut elsewhere: Vec<(char, Vec<usize>)> = Vec::new();
        let mut not_present: Vec<(char, usize)> = Vec::new();

        for guess_result in guess_results {
            if guess_result.guess.chars().count() != char_count
                || guess_result.results.len() != char_count
            {
                return Err(WordleError::WordLength(char_count));
            }
            for ((index, letter), result) in
                zip(guess_result.guess.chars().enumerate(), &guess_result.results)
            {
                match result {
                    LetterResult::Correct => {
                        if !fixed.contains(&(letter, index)) {
                            fixed.push((letter, index));
                        }
                    }
                    LetterResult::PresentNotHere => add_excluded(&mut elsewhere, letter, index),
                    LetterResult::NotPresent => not_present.push((letter, index)),
                }
            }
        }

        let mut absent: Vec<char> = Vec::new();
        for (letter, index) in not_present {
            let is_known_present = fixed.iter().any(|(other, _)| *other == letter)
                || elsewhere.iter().any(|(other, _)| *other == letter);
            if is_known_present {
                add_excluded(&mut elsewhere, letter, index);
            } else if !absent.contains(&letter) {
                absent.push(letter);
            }
        }

        let constraints = fixed
            .into_iter()
            .map(|(letter, index)| LetterConstraint::here(letter, index))
            .chain(
                elsewhere
                    .into_iter()
                    .map(|(letter, excluded)| LetterConstraint::elsewhere(letter, excluded)),
            )
            .chain(absent.into_iter().map(LetterConstraint::absent))
            .collect();
        Ok(FilterSpec::new(char_count, Some(constraints)))
    }

    /// The number of letters a matching word must have.
    pub fn char_count(&self) -> usize {
        match self {
            FilterSpec::LengthOnly(char_count) => *char_count,
            FilterSpec::WithConstraints { char_count, .. } => *char_count,
        }
    }

    /// The constraints to apply, which is empty for [`FilterSpec::LengthOnly`].
    pub fn constraints(&self) -> &[LetterConstraint] {
        match self {
            FilterSpec::LengthOnly(_) => &[],
            FilterSpec::WithConstraints { constraints, .. } => constraints,
        }
    }

    /// Checks that every referenced index lies inside the word, and that a spec with constraints
    /// describes words of at most [`MAX_WORD_LENGTH`] letters.
    pub fn validate(&self) -> Result<(), WordleError> {
        let char_count = self.char_count();
        if !self.constraints().is_empty() && char_count > MAX_WORD_LENGTH {
            return Err(WordleError::WordTooLong {
                char_count,
                max: MAX_WORD_LENGTH,
            });
        }
        for constraint in self.constraints() {
            if let Some(position) = constraint.positions().find(|index| *index >= char_count) {
                return Err(WordleError::PositionOutOfRange {
                    letter: constraint.letter,
                    position,
                    char_count,
                });
            }
        }
        Ok(())
    }
}

fn add_excluded(elsewhere: &mut Vec<(char, Vec<usize>)>, letter: char, index: usize) {
    match elsewhere.iter_mut().find(|(other, _)| *other == letter) {
        Some((_, excluded)) => {
            if !excluded.contains(&index) {
                excluded.push(index);
            }
        }
        None => elsewhere.push((letter, vec![index])),
    }
}
