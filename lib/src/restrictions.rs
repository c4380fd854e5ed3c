use crate::constraints::FilterSpec;
use crate::results::WordleError;
use regex::Regex;
use std::fmt;
use std::result::Result;
use tracing::debug;
use tracing::warn;

/// What a single location in the word may hold.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum PositionMatcher {
    /// The location holds exactly this letter.
    Fixed(char),
    /// The location holds any letter except these.
    NoneOf(Vec<char>),
    /// The location holds any letter.
    Any,
}

impl PositionMatcher {
    fn write_source(&self, out: &mut String) {
        match self {
            PositionMatcher::Fixed(letter) => out.push_str(&escape(*letter)),
            PositionMatcher::NoneOf(letters) => {
                out.push_str("[^");
                for letter in letters {
                    out.push_str(&escape(*letter));
                }
                out.push(']');
            }
            PositionMatcher::Any => out.push('.'),
        }
    }
}

/// Matches whole words against the letters known by location.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum InclusionPattern {
    /// Any word with this many letters.
    LengthOnly(usize),
    /// One matcher per location in the word.
    Positional(Vec<PositionMatcher>),
}

impl InclusionPattern {
    /// Returns the anchored regular expression for this pattern, e.g. `^.б...$`.
    pub fn regex_source(&self) -> String {
        match self {
            InclusionPattern::LengthOnly(char_count) => format!("^.{{{}}}$", char_count),
            InclusionPattern::Positional(matchers) => {
                let mut source = String::from("^");
                for matcher in matchers {
                    matcher.write_source(&mut source);
                }
                source.push('$');
                source
            }
        }
    }

    pub fn to_regex(&self) -> Result<Regex, WordleError> {
        Ok(Regex::new(&self.regex_source())?)
    }
}

impl fmt::Display for InclusionPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.regex_source())
    }
}

/// Letters that must not appear anywhere in the word.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct ExclusionSet {
    letters: Vec<char>,
}

impl ExclusionSet {
    /// The excluded letters, in the order they were first given.
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    pub fn contains(&self, letter: char) -> bool {
        self.letters.contains(&letter)
    }

    /// Returns a character class matching any excluded letter, e.g. `[гейш]`.
    pub fn regex_source(&self) -> String {
        let mut source = String::from("[");
        for letter in &self.letters {
            source.push_str(&escape(*letter));
        }
        source.push(']');
        source
    }

    pub fn to_regex(&self) -> Result<Regex, WordleError> {
        Ok(Regex::new(&self.regex_source())?)
    }
}

/// Collects the letters of every constraint that marks a letter as not present.
///
/// Returns `None` when there are no such letters.
pub fn build_exclusion_set(spec: &FilterSpec) -> Option<ExclusionSet> {
    let mut letters: Vec<char> = Vec::new();
    for constraint in spec.constraints().iter().filter(|c| !c.is_present) {
        if !letters.contains(&constraint.letter) {
            letters.push(constraint.letter);
        }
    }
    if letters.is_empty() {
        return None;
    }
    Some(ExclusionSet { letters })
}

/// Builds the positional pattern from the constraints of letters that are present.
///
/// For each location, a known letter wins. Otherwise every present letter that is known not to
/// be there is excluded from that location. Any remaining location is a wildcard.
pub fn build_inclusion_pattern(spec: &FilterSpec) -> Result<InclusionPattern, WordleError> {
    spec.validate()?;
    let (char_count, constraints) = match spec {
        FilterSpec::LengthOnly(char_count) => return Ok(InclusionPattern::LengthOnly(*char_count)),
        FilterSpec::WithConstraints {
            char_count,
            constraints,
        } => (*char_count, constraints),
    };

    let mut fixed: Vec<Option<char>> = vec![None; char_count];
    let mut not_here: Vec<Vec<char>> = vec![Vec::new(); char_count];
    for constraint in constraints.iter().filter(|c| c.is_present) {
        if let Some(index) = constraint.known_position {
            let previous = fixed[index];
            match previous {
                Some(existing) if existing != constraint.letter => {
                    return Err(WordleError::ConflictingPositions {
                        position: index,
                        first: existing,
                        second: constraint.letter,
                    });
                }
                _ => fixed[index] = Some(constraint.letter),
            }
            continue;
        }
        for index in &constraint.excluded_positions {
            let letters = &mut not_here[*index];
            if !letters.contains(&constraint.letter) {
                letters.push(constraint.letter);
            }
        }
    }

    Ok(InclusionPattern::Positional(
        fixed
            .into_iter()
            .zip(not_here)
            .map(|(maybe_letter, letters)| match maybe_letter {
                Some(letter) => PositionMatcher::Fixed(letter),
                None if !letters.is_empty() => PositionMatcher::NoneOf(letters),
                None => PositionMatcher::Any,
            })
            .collect(),
    ))
}

/// The compiled form of a [`FilterSpec`]: everything needed to test a word.
#[derive(Debug, Clone)]
pub struct WordRestrictions {
    char_count: usize,
    inclusion: InclusionPattern,
    inclusion_regex: Option<Regex>,
    exclusion: Option<ExclusionSet>,
    exclusion_regex: Option<Regex>,
    required_letters: Vec<char>,
    length_only: bool,
}

impl WordRestrictions {
    /// Compiles the given spec.
    ///
    /// Fails if the word is too long, if any index lies outside the word, or if two different
    /// letters are fixed at the same index. Two other contradictions are reported with a warning
    /// and compiled as given: a letter that is both excluded and said to be present (words
    /// containing it are rejected), and a letter fixed at an index where it is also said not to
    /// be (the fixed letter wins). No regex is built for a length-only spec.
    pub fn compile(spec: &FilterSpec) -> Result<WordRestrictions, WordleError> {
        let inclusion = build_inclusion_pattern(spec)?;
        let exclusion = build_exclusion_set(spec);
        let matchers: &[PositionMatcher] = match &inclusion {
            InclusionPattern::Positional(matchers) => matchers,
            InclusionPattern::LengthOnly(_) => &[],
        };

        let mut required_letters: Vec<char> = Vec::new();
        for constraint in spec.constraints().iter().filter(|c| c.is_present) {
            if let Some(excluded) = &exclusion {
                if excluded.contains(constraint.letter) {
                    warn!(
                        letter = %constraint.letter,
                        "letter is marked both present and not present; words containing it will be rejected"
                    );
                }
            }
            let fixed_here = PositionMatcher::Fixed(constraint.letter);
            for index in &constraint.excluded_positions {
                if matchers.get(*index) == Some(&fixed_here) {
                    warn!(
                        letter = %constraint.letter,
                        position = *index,
                        "letter is fixed at a position where it is also excluded; the fixed letter wins"
                    );
                }
            }
            if constraint.known_position.is_some() || required_letters.contains(&constraint.letter)
            {
                continue;
            }
            let is_pinned = matchers.iter().any(|matcher| *matcher == fixed_here);
            if !is_pinned {
                required_letters.push(constraint.letter);
            }
        }

        let inclusion_regex = match &inclusion {
            InclusionPattern::LengthOnly(_) => None,
            InclusionPattern::Positional(_) => Some(inclusion.to_regex()?),
        };
        let exclusion_regex = exclusion.as_ref().map(ExclusionSet::to_regex).transpose()?;
        debug!(
            inclusion = %inclusion,
            exclusion = ?exclusion.as_ref().map(ExclusionSet::regex_source),
            required = ?required_letters,
            "compiled word restrictions"
        );
        Ok(WordRestrictions {
            char_count: spec.char_count(),
            inclusion,
            inclusion_regex,
            exclusion,
            exclusion_regex,
            required_letters,
            length_only: matches!(spec, FilterSpec::LengthOnly(_)),
        })
    }

    /// Returns `true` iff the given word satisfies these restrictions.
    pub fn is_satisfied_by(&self, word: &str) -> bool {
        if word.chars().count() != self.char_count {
            return false;
        }
        if self.length_only {
            return true;
        }
        if let Some(exclusion_regex) = &self.exclusion_regex {
            if exclusion_regex.is_match(word) {
                return false;
            }
        }
        if let Some(inclusion_regex) = &self.inclusion_regex {
            if !inclusion_regex.is_match(word) {
                return false;
            }
        }
        self.required_letters
            .iter()
            .all(|letter| word.contains(*letter))
    }

    pub fn char_count(&self) -> usize {
        self.char_count
    }

    pub fn inclusion(&self) -> &InclusionPattern {
        &self.inclusion
    }

    pub fn exclusion(&self) -> Option<&ExclusionSet> {
        self.exclusion.as_ref()
    }

    /// The anchored positional pattern, e.g. `^б.[^вг][^г][^в]$`.
    pub fn inclusion_source(&self) -> String {
        self.inclusion.regex_source()
    }

    /// The character class of excluded letters, if any.
    pub fn exclusion_source(&self) -> Option<&str> {
        self.exclusion_regex.as_ref().map(Regex::as_str)
    }

    /// Letters that must appear somewhere in the word, at an index that is not yet known.
    pub fn required_letters(&self) -> &[char] {
        &self.required_letters
    }
}

fn escape(letter: char) -> String {
    let mut buffer = [0; 4];
    regex::escape(letter.encode_utf8(&mut buffer))
}
