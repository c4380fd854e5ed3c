use crate::constraints::FilterSpec;
use crate::engine::filter_words;
use crate::results::WordleError;
use std::collections::HashSet;
use std::fs::File;
use std::io;
use std::io::BufRead;
use std::ops::Deref;
use std::path::Path;
use std::path::PathBuf;
use std::result::Result;
use std::sync::Arc;
use tracing::info;

/// Options applied while reading a word list.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LoadOptions {
    /// If true, words that contain the same letter more than once are skipped.
    pub unique_letters_only: bool,
}

impl LoadOptions {
    fn accepts(&self, word: &str) -> bool {
        if !self.unique_letters_only {
            return true;
        }
        let mut seen = HashSet::new();
        word.chars().all(|letter| seen.insert(letter))
    }
}

/// Contains all the words of the dictionary, in the order they were given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordBank {
    all_words: Vec<Arc<str>>,
    source: Option<PathBuf>,
    options: LoadOptions,
}

impl WordBank {
    /// Constructs a new `WordBank` struct by reading words from the given reader.
    ///
    /// The reader should provide one word per line. Words are kept exactly as given, including
    /// duplicates.
    pub fn from_reader<R: BufRead>(word_reader: R) -> Result<Self, WordleError> {
        WordBank::from_reader_with_options(word_reader, LoadOptions::default())
    }

    /// Like [`WordBank::from_reader`], applying the given options to each word.
    pub fn from_reader_with_options<R: BufRead>(
        word_reader: R,
        options: LoadOptions,
    ) -> Result<Self, WordleError> {
        Ok(WordBank {
            all_words: read_words(word_reader, options)?,
            source: None,
            options,
        })
    }

    /// Constructs a new `WordBank` struct using the words from the given iterator.
    pub fn from_iterator<S, I>(words: I) -> Self
    where
        S: AsRef<str>,
        I: IntoIterator<Item = S>,
    {
        WordBank {
            all_words: words
                .into_iter()
                .map(|word| Arc::<str>::from(word.as_ref()))
                .collect(),
            source: None,
            options: LoadOptions::default(),
        }
    }

    /// Reads the word list at the given path.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, WordleError> {
        WordBank::open_with_options(path, LoadOptions::default())
    }

    /// Reads the word list at the given path, applying the given options to each word.
    pub fn open_with_options<P: AsRef<Path>>(
        path: P,
        options: LoadOptions,
    ) -> Result<Self, WordleError> {
        let path = path.as_ref();
        let all_words = read_words(io::BufReader::new(File::open(path)?), options)?;
        info!(
            path = %path.display(),
            num_words = all_words.len(),
            "loaded word list"
        );
        Ok(WordBank {
            all_words,
            source: Some(path.to_path_buf()),
            options,
        })
    }

    /// Reads the word list again from the file this bank was opened from, replacing the current
    /// words.
    ///
    /// On failure, the current words are left untouched.
    pub fn reload(&mut self) -> Result<(), WordleError> {
        let path = self.source.as_ref().ok_or(WordleError::NoSource)?;
        let all_words = read_words(io::BufReader::new(File::open(path)?), self.options)?;
        info!(
            path = %path.display(),
            num_words = all_words.len(),
            "reloaded word list"
        );
        self.all_words = all_words;
        Ok(())
    }

    /// Returns the words that match the given spec, in dictionary order.
    pub fn filter(&self, spec: &FilterSpec) -> Result<Vec<&str>, WordleError> {
        filter_words(&self.all_words, spec)
    }

    /// Returns the number of words.
    pub fn len(&self) -> usize {
        self.all_words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.all_words.is_empty()
    }

    /// The file this bank was read from, if any.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }
}

impl Deref for WordBank {
    type Target = [Arc<str>];

    fn deref(&self) -> &Self::Target {
        &self.all_words
    }
}

fn read_words<R: BufRead>(
    word_reader: R,
    options: LoadOptions,
) -> Result<Vec<Arc<str>>, WordleError> {
    let mut all_words: Vec<Arc<str>> = Vec::new();
    for maybe_word in word_reader.lines() {
        let word = maybe_word?;
        if options.accepts(&word) {
            all_words.push(Arc::from(word.as_str()));
        }
    }
    Ok(all_words)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn load_options_default_accepts_repeated_letters() {
        assert!(LoadOptions::default().accepts("слава"));
    }

    #[test]
    fn load_options_unique_letters_only() {
        let options = LoadOptions {
            unique_letters_only: true,
        };

        assert!(options.accepts("плавк"));
        assert!(!options.accepts("слава"));
        assert!(options.accepts(""));
    }

    #[test]
    fn read_words_strips_line_endings_only() -> Result<(), WordleError> {
        let words = read_words(Cursor::new("слава\r\n Вода\n\nслава"), LoadOptions::default())?;

        let expected: Vec<Arc<str>> = vec![
            Arc::from("слава"),
            Arc::from(" Вода"),
            Arc::from(""),
            Arc::from("слава"),
        ];
        assert_eq!(words, expected);
        Ok(())
    }

    #[test]
    fn reload_without_source_fails() {
        let mut bank = WordBank::from_iterator(["abc"]);

        assert!(matches!(bank.reload(), Err(WordleError::NoSource)));
        assert_eq!(bank.len(), 1);
    }
}
