use std::io;
use thiserror::Error;

/// The result of a given letter at a specific location.
#[derive(Debug, Eq, PartialEq, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LetterResult {
    Correct,
    PresentNotHere,
    NotPresent,
}

impl LetterResult {
    /// Parses a single feedback character: `g` for correct, `y` for present elsewhere, and `.`
    /// for not present.
    pub fn from_char(feedback: char) -> Result<LetterResult, WordleError> {
        match feedback.to_ascii_lowercase() {
            'g' => Ok(LetterResult::Correct),
            'y' => Ok(LetterResult::PresentNotHere),
            '.' => Ok(LetterResult::NotPresent),
            other => Err(WordleError::UnsupportedFeedback(other)),
        }
    }
}

/// Indicates that an error occurred while loading words or compiling a filter.
#[derive(Debug, Error)]
pub enum WordleError {
    /// The word list could not be opened or read.
    #[error("failed to read the word list: {0}")]
    Io(#[from] io::Error),
    /// The word bank was not loaded from a file, so it cannot be reloaded.
    #[error("the word bank has no backing file to reload from")]
    NoSource,
    /// A guess or its feedback did not match the expected word length. Contains the expected
    /// length.
    #[error("invalid word length, expected {0}")]
    WordLength(usize),
    /// A spec with constraints described words longer than the supported maximum.
    #[error("words of {char_count} letters are not supported, the maximum is {max}")]
    WordTooLong { char_count: usize, max: usize },
    /// A constraint referenced an index outside the word.
    #[error("letter '{letter}' references position {position}, but words have {char_count} letters")]
    PositionOutOfRange {
        letter: char,
        position: usize,
        char_count: usize,
    },
    /// Two different letters were fixed at the same index, so no word can match.
    #[error("position {position} cannot hold both '{first}' and '{second}'")]
    ConflictingPositions {
        position: usize,
        first: char,
        second: char,
    },
    /// A feedback character was not one of `g`, `y` or `.`.
    #[error("unsupported feedback character '{0}', expected one of 'g', 'y' or '.'")]
    UnsupportedFeedback(char),
    /// The generated pattern was rejected by the regex engine.
    #[error("failed to compile pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// The result of a single word guess.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct GuessResult<'a> {
    pub guess: &'a str,
    /// The result of each letter, provided in the same letter order as in the guess.
    pub results: Vec<LetterResult>,
}

impl<'a> GuessResult<'a> {
    /// Builds a result from a guess and a feedback string such as `"g.y.."`.
    ///
    /// The feedback must have one character per letter of the guess.
    pub fn parse(guess: &'a str, feedback: &str) -> Result<GuessResult<'a>, WordleError> {
        let guess_length = guess.chars().count();
        if feedback.chars().count() != guess_length {
            return Err(WordleError::WordLength(guess_length));
        }
        Ok(GuessResult {
            guess,
            results: feedback
                .chars()
                .map(LetterResult::from_char)
                .collect::<Result<Vec<LetterResult>, WordleError>>()?,
        })
    }
}
