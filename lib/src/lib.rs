//! Filters a word list down to the words that fit what is known from Wordle-style feedback.
//!
//! Letter facts are given as [`LetterConstraint`]s inside a [`FilterSpec`], compiled into
//! anchored patterns by [`WordRestrictions`], and applied to a [`WordBank`].
//!
//! ```
//! use rs_wordle_filter::*;
//!
//! let bank = WordBank::from_iterator(["crane", "force", "curve", "price"]);
//! let guess = GuessResult::parse("crane", "yy..g")?;
//! let spec = FilterSpec::from_guess_results(5, &[guess])?;
//!
//! assert_eq!(bank.filter(&spec)?, vec!["force"]);
//! # Ok::<(), WordleError>(())
//! ```

mod constraints;
mod data;
mod engine;
mod restrictions;
mod results;

pub use constraints::FilterSpec;
pub use constraints::MAX_WORD_LENGTH;
pub use constraints::LetterConstraint;
pub use data::LoadOptions;
pub use data::WordBank;
pub use engine::*;
pub use restrictions::WordRestrictions;
pub use results::*;

/// The building blocks of compiled restrictions.
pub mod details {
    pub use crate::restrictions::build_exclusion_set;
    pub use crate::restrictions::build_inclusion_pattern;
    pub use crate::restrictions::ExclusionSet;
    pub use crate::restrictions::InclusionPattern;
    pub use crate::restrictions::PositionMatcher;
}
