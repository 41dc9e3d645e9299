use crate::Error;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::fs::read_to_string;
use std::hash::BuildHasher;
use tracing::{info, instrument};

/// Membership test for the words that may appear on the board.
///
/// Words are queried in uppercase.
pub trait WordSet {
    /// Returns true if `word` is a legal word.
    fn contains(&self, word: &str) -> bool;
}

impl<S: BuildHasher> WordSet for HashSet<String, S> {
    fn contains(&self, word: &str) -> bool {
        HashSet::contains(self, word)
    }
}

impl<T: WordSet + ?Sized> WordSet for &T {
    fn contains(&self, word: &str) -> bool {
        (**self).contains(word)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
/// The set of all legal words, normalized to uppercase.
pub struct Dictionary {
    words: HashSet<String>,
    /// Path of the wordfile used to build the dictionary.
    /// Empty if the dictionary is not build from a file.
    wordfile: String,
}

impl fmt::Display for Dictionary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "<Dictionary: {} words from '{}'>",
            self.words.len(),
            self.wordfile
        )
    }
}

impl WordSet for Dictionary {
    fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }
}

fn normalize(word: &str) -> Option<String> {
    let word = word.trim();
    if word.is_empty() {
        None
    } else {
        Some(word.to_uppercase())
    }
}

impl<S: AsRef<str>> std::iter::FromIterator<S> for Dictionary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let words = iter
            .into_iter()
            .filter_map(|word| normalize(word.as_ref()))
            .collect();
        Dictionary {
            words,
            wordfile: String::new(),
        }
    }
}

impl Dictionary {
    /// Build a dictionary from a list of words.
    /// Words are trimmed and converted to uppercase, empty words are skipped.
    /// ## Examples
    /// ```
    /// use wordgrid_validator::{Dictionary, WordSet};
    /// let dictionary = Dictionary::from_words(&["zap", " Man "]);
    /// assert!(dictionary.contains("ZAP"));
    /// assert!(dictionary.contains("MAN"));
    /// assert_eq!(dictionary.len(), 2);
    /// ```
    pub fn from_words<S: AsRef<str>>(words: &[S]) -> Dictionary {
        words.iter().collect()
    }

    /// Read the dictionary from a file. The file must be encoded in utf-8 and
    /// have one word per line. Case does not matter.
    /// ## Errors
    /// Fails if the wordfile can not be read.
    #[instrument]
    pub fn from_file(wordfile: &str) -> Result<Dictionary, Error> {
        let mut dictionary: Dictionary = read_to_string(wordfile)
            .map_err(|source| Error::ReadError {
                path: String::from(wordfile),
                source,
            })?
            .lines()
            .collect();
        dictionary.wordfile = String::from(wordfile);
        info!(words = dictionary.len(), "loaded dictionary");
        Ok(dictionary)
    }

    #[cfg(feature = "bincode")]
    /// Deserialize the dictionary from a bincoded file.
    /// ## Errors
    /// - If the wordfile can not be read.
    /// - If the contents can not be deserialized
    #[instrument]
    pub fn deserialize_from(wordfile: &str) -> Result<Dictionary, Error> {
        use std::fs::File;
        use std::io::BufReader;
        let file = File::open(wordfile).map_err(|source| Error::ReadError {
            path: String::from(wordfile),
            source,
        })?;
        let reader = BufReader::new(file);
        let mut dictionary: Dictionary = bincode::deserialize_from(reader)
            .map_err(|_| Error::WordfileDeserializeError(String::from(wordfile)))?;
        dictionary.wordfile = String::from(wordfile);
        info!(words = dictionary.len(), "loaded dictionary");
        Ok(dictionary)
    }

    #[cfg(feature = "bincode")]
    /// Serialize the dictionary into a bincoded file, that can be read
    /// with [`deserialize_from`](Dictionary::deserialize_from).
    /// ## Errors
    /// If the file can not be created or written.
    pub fn serialize_into(&self, wordfile: &str) -> Result<(), Error> {
        use std::fs::File;
        use std::io::BufWriter;
        let file = File::create(wordfile)
            .map_err(|_| Error::WordfileSerializeError(String::from(wordfile)))?;
        bincode::serialize_into(BufWriter::new(file), self)
            .map_err(|_| Error::WordfileSerializeError(String::from(wordfile)))
    }

    /// The number of words in the dictionary
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if the dictionary has no words
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Path of the wordfile, or an empty string.
    pub fn wordfile(&self) -> &str {
        &self.wordfile
    }

    /// Iterate over all words, in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::env;
    use std::fs;

    const WORDS: &[&str] = &["man", "mad", "an", "zap", "am", "ma"];

    fn temp_wordfile(name: &str, contents: &str) -> String {
        let path = env::temp_dir().join(format!("wordgrid-{}-{}", std::process::id(), name));
        fs::write(&path, contents).unwrap();
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn test_from_words() {
        let dictionary = Dictionary::from_words(WORDS);
        assert_eq!(dictionary.len(), 6);
        assert!(dictionary.contains("MAN"));
        assert!(!dictionary.contains("man"));
        assert!(!dictionary.contains("NAM"));
        assert_eq!(dictionary.wordfile(), "");
    }

    #[test]
    fn test_from_file() -> Result<(), Error> {
        let path = temp_wordfile("words.txt", "man\r\nMad\n  zap \n\nAn\n");
        let dictionary = Dictionary::from_file(&path)?;
        fs::remove_file(&path).unwrap();
        assert_eq!(dictionary.len(), 4);
        for word in &["MAN", "MAD", "ZAP", "AN"] {
            assert!(dictionary.contains(word), "{} missing", word);
        }
        assert_eq!(dictionary.wordfile(), path);
        assert!(dictionary.to_string().starts_with("<Dictionary: 4 words from"));
        Ok(())
    }

    #[test]
    fn test_missing_file() {
        let result = Dictionary::from_file("no/such/wordfile.txt");
        assert!(matches!(result, Err(Error::ReadError { path, .. }) if path == "no/such/wordfile.txt"));
    }

    #[test]
    fn test_hashset_is_wordset() {
        let words: HashSet<String> = WORDS.iter().map(|w| w.to_uppercase()).collect();
        let wordset: &dyn WordSet = &words;
        assert!(wordset.contains("ZAP"));
        assert!(!wordset.contains("ZIP"));
    }

    #[cfg(feature = "bincode")]
    #[test]
    fn test_bincode_roundtrip() -> Result<(), Error> {
        let dictionary = Dictionary::from_words(WORDS);
        let path = temp_wordfile("words.bin", "");
        dictionary.serialize_into(&path)?;
        let loaded = Dictionary::deserialize_from(&path)?;
        fs::remove_file(&path).unwrap();
        assert_eq!(loaded.len(), dictionary.len());
        assert!(loaded.iter().all(|word| dictionary.contains(word)));
        assert_eq!(loaded.wordfile(), path);
        Ok(())
    }
}
