use crate::constraints::FilterSpec;
use crate::restrictions::WordRestrictions;
use crate::results::WordleError;
use std::result::Result;
use tracing::debug;

/// Returns the words that satisfy the given spec, in their original order.
///
/// The spec is compiled once per call. Duplicate words are kept.
///
/// ```
/// use rs_wordle_filter::*;
///
/// let words = ["слава", "халва", "сплав", "ульва"];
/// let spec = FilterSpec::new(
///     5,
///     Some(vec![
///         LetterConstraint::here('а', 4),
///         LetterConstraint::elsewhere('л', [2]),
///     ]),
/// );
///
/// assert_eq!(filter_words(&words, &spec)?, vec!["слава", "ульва"]);
/// # Ok::<(), WordleError>(())
/// ```
pub fn filter_words<'a, S: AsRef<str>>(
    words: &'a [S],
    spec: &FilterSpec,
) -> Result<Vec<&'a str>, WordleError> {
    let restrictions = WordRestrictions::compile(spec)?;
    let possible_words = get_possible_words(&restrictions, words);
    debug!(
        num_words = words.len(),
        num_possible = possible_words.len(),
        "filtered words"
    );
    Ok(possible_words)
}

/// Gets the list of words that meet the given restrictions.
pub fn get_possible_words<'a, S: AsRef<str>>(
    restrictions: &WordRestrictions,
    words: &'a [S],
) -> Vec<&'a str> {
    words
        .iter()
        .map(|word| word.as_ref())
        .filter(|word| restrictions.is_satisfied_by(word))
        .collect()
}
