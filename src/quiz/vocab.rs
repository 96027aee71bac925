//! # Vocabulary Sets
//!
//! Read-only data for each subject. Loaded once at startup, either from the
//! bundled JSON under `data/` or from paths given in the config file.
//!
//! No validation happens here beyond what serde's typing gives us. A data set
//! that is too small for some question kind simply makes those draws fail.

use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

const BUNDLED_KANNADA: &str = include_str!("../../data/kannada.json");
const BUNDLED_HINDI: &str = include_str!("../../data/hindi.json");
const BUNDLED_GEOGRAPHY: &str = include_str!("../../data/geography.json");

// ============================================================================
// Script literacy (Kannada)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct WordPair {
    pub word: String,
    pub meaning: String,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct KannadaData {
    /// Order is meaningful: it defines "before" and "after".
    #[serde(default)]
    pub vowels: Vec<String>,
    #[serde(default)]
    pub consonants: Vec<String>,
    #[serde(default)]
    pub known_words: Vec<WordPair>,
    /// Ten numeral glyphs, index `d` is the glyph for digit `d`.
    #[serde(default)]
    pub numbers: Vec<String>,
}

impl KannadaData {
    pub fn meaning_of(&self, word: &str) -> Option<&str> {
        self.known_words
            .iter()
            .find(|pair| pair.word == word)
            .map(|pair| pair.meaning.as_str())
    }

    pub fn word_for(&self, meaning: &str) -> Option<&str> {
        self.known_words
            .iter()
            .find(|pair| pair.meaning == meaning)
            .map(|pair| pair.word.as_str())
    }
}

// ============================================================================
// Grammar (Hindi)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GenderPair {
    pub male: String,
    pub female: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AnnotatedSentence {
    pub sentence: String,
    #[serde(default)]
    pub nouns: Vec<String>,
    #[serde(default)]
    pub verbs: Vec<String>,
    /// English gloss of the whole sentence.
    pub meaning: String,
}

impl AnnotatedSentence {
    /// Word tokens in reading order, duplicates kept.
    pub fn tokens(&self) -> Vec<String> {
        self.sentence.split_whitespace().map(str::to_string).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct NumberPair {
    pub singular: String,
    pub plural: String,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct HindiData {
    #[serde(default)]
    pub gender: Vec<GenderPair>,
    #[serde(default)]
    pub meanings: Vec<WordPair>,
    #[serde(default)]
    pub nouns_and_verbs: Vec<AnnotatedSentence>,
    #[serde(default)]
    pub singular_plural: Vec<NumberPair>,
}

// ============================================================================
// Geography
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Region {
    pub name: String,
    pub capital: String,
    /// Two-letter code used as the map id (`IN-<code>`).
    #[serde(default)]
    pub code: String,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GeographyData {
    #[serde(default)]
    pub states: Vec<Region>,
    #[serde(default)]
    pub union_territories: Vec<Region>,
}

impl GeographyData {
    /// States followed by union territories.
    pub fn all_regions(&self) -> Vec<&Region> {
        self.states.iter().chain(self.union_territories.iter()).collect()
    }

    pub fn is_state(&self, name: &str) -> bool {
        self.states.iter().any(|region| region.name == name)
    }

    pub fn region(&self, name: &str) -> Option<&Region> {
        self.states
            .iter()
            .chain(self.union_territories.iter())
            .find(|region| region.name == name)
    }
}

// ============================================================================
// All subjects
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct VocabularySet {
    pub kannada: KannadaData,
    pub hindi: HindiData,
    pub geography: GeographyData,
}

/// Optional per-subject overrides for the bundled data files.
#[derive(Debug, Clone, Default)]
pub struct DataPaths {
    pub kannada: Option<PathBuf>,
    pub hindi: Option<PathBuf>,
    pub geography: Option<PathBuf>,
}

#[derive(Debug)]
pub enum DataError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse {
        origin: String,
        source: serde_json::Error,
    },
}

impl fmt::Display for DataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataError::Io { path, source } => {
                write!(f, "could not read {}: {source}", path.display())
            }
            DataError::Parse { origin, source } => {
                write!(f, "invalid vocabulary data in {origin}: {source}")
            }
        }
    }
}

impl std::error::Error for DataError {}

impl VocabularySet {
    /// The data sets compiled into the binary.
    pub fn bundled() -> Result<Self, DataError> {
        Ok(Self {
            kannada: parse(BUNDLED_KANNADA, "bundled kannada.json")?,
            hindi: parse(BUNDLED_HINDI, "bundled hindi.json")?,
            geography: parse(BUNDLED_GEOGRAPHY, "bundled geography.json")?,
        })
    }

    /// Bundled data, with any subject replaced by the file at its configured path.
    pub fn load(paths: &DataPaths) -> Result<Self, DataError> {
        let mut set = Self::bundled()?;
        if let Some(path) = &paths.kannada {
            set.kannada = read_json(path)?;
        }
        if let Some(path) = &paths.hindi {
            set.hindi = read_json(path)?;
        }
        if let Some(path) = &paths.geography {
            set.geography = read_json(path)?;
        }
        info!(
            "Vocabulary loaded: {} known words, {} hindi meanings, {} regions",
            set.kannada.known_words.len(),
            set.hindi.meanings.len(),
            set.geography.all_regions().len()
        );
        Ok(set)
    }
}

fn parse<T: for<'de> Deserialize<'de>>(json: &str, origin: &str) -> Result<T, DataError> {
    serde_json::from_str(json).map_err(|source| DataError::Parse {
        origin: origin.to_string(),
        source,
    })
}

fn read_json<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<T, DataError> {
    debug!("Reading vocabulary from {}", path.display());
    let contents = fs::read_to_string(path).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&contents, &path.display().to_string())
}
