//! Loading boundary: assemble a study from the two external documents
//!
//! A study is the verse text plus its highlight catalog, the entire
//! external contract of the system. The loader reads both files, runs the
//! tokenizer, and validates the shared word-index space, turning the
//! implicit coupling between the two documents into reported diagnostics.
//! Issues never fail the load; rendering proceeds with the catalog as
//! supplied and degrades toward "nothing highlighted" rather than
//! crashing.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::catalog::{CatalogError, CatalogIssue, HighlightCatalog};
use crate::tokenizer::{tokenize, MaqafGroup, Token};

/// Errors raised while loading the study documents.
#[derive(Debug)]
pub enum LoadError {
    /// Reading one of the source files failed.
    Io(PathBuf, io::Error),
    /// The catalog document could not be parsed.
    Catalog(CatalogError),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io(path, err) => write!(f, "failed to read {}: {}", path.display(), err),
            LoadError::Catalog(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for LoadError {}

impl From<CatalogError> for LoadError {
    fn from(err: CatalogError) -> Self {
        LoadError::Catalog(err)
    }
}

/// A fully loaded study: tokenized verse text, catalog, and the
/// diagnostics from validating one against the other.
#[derive(Debug, Clone, Default)]
pub struct Study {
    groups: Vec<MaqafGroup>,
    words: Vec<String>,
    catalog: HighlightCatalog,
    issues: Vec<CatalogIssue>,
}

impl Study {
    /// Assemble a study from in-memory documents.
    pub fn from_documents(verse_text: &str, catalog_json: &str) -> Result<Self, LoadError> {
        let groups = tokenize(verse_text);
        let catalog = HighlightCatalog::from_json_str(catalog_json)?;
        Ok(Study::assemble(groups, catalog))
    }

    /// A study with no text and no catalog; what an unloaded page shows.
    pub fn empty() -> Self {
        Study::default()
    }

    fn assemble(groups: Vec<MaqafGroup>, catalog: HighlightCatalog) -> Self {
        let words: Vec<String> = groups
            .iter()
            .flat_map(|g| g.tokens())
            .filter(|t| !t.is_maqaf())
            .map(|t| t.text().to_string())
            .collect();
        let issues = catalog.validate(&words);
        Study {
            groups,
            words,
            catalog,
            issues,
        }
    }

    pub fn groups(&self) -> &[MaqafGroup] {
        &self.groups
    }

    pub fn catalog(&self) -> &HighlightCatalog {
        &self.catalog
    }

    pub fn issues(&self) -> &[CatalogIssue] {
        &self.issues
    }

    /// Number of real words in the text.
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Text of the word at a given index, if the text has one.
    pub fn word_text(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(String::as_str)
    }

    /// All tokens of the document in order, flattened across groups.
    pub fn tokens(&self) -> impl Iterator<Item = &Token> {
        self.groups.iter().flat_map(|g| g.tokens().iter())
    }
}

/// File-based loader for the two study documents.
#[derive(Debug, Default)]
pub struct StudyLoader;

impl StudyLoader {
    pub fn new() -> Self {
        StudyLoader
    }

    /// Read and assemble a study from a verse text file and a catalog file.
    pub fn load(
        &self,
        verse_path: &Path,
        catalog_path: &Path,
    ) -> Result<Study, LoadError> {
        let verse_text = read(verse_path)?;
        let catalog_json = read(catalog_path)?;
        Study::from_documents(&verse_text, &catalog_json)
    }

    /// Read and tokenize the verse text alone, with an empty catalog.
    pub fn load_text_only(&self, verse_path: &Path) -> Result<Study, LoadError> {
        let verse_text = read(verse_path)?;
        Ok(Study::assemble(
            tokenize(&verse_text),
            HighlightCatalog::default(),
        ))
    }
}

fn read(path: &Path) -> Result<String, LoadError> {
    fs::read_to_string(path).map_err(|err| LoadError::Io(path.to_path_buf(), err))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_documents_assembles_word_table() {
        let study = Study::from_documents(
            "1 אבגד־הוזח 2 טיכ",
            r#"{"highlights":[{"words":[["אבגד",1]]}]}"#,
        )
        .unwrap();
        assert_eq!(study.word_count(), 5);
        assert_eq!(study.word_text(0), Some("1"));
        assert_eq!(study.word_text(1), Some("אבגד"));
        assert_eq!(study.word_text(4), Some("טיכ"));
        assert!(study.issues().is_empty());
    }

    #[test]
    fn test_inconsistent_catalog_is_loaded_with_issues() {
        let study = Study::from_documents(
            "אבג",
            r#"{"highlights":[{"words":[["דהו",0],["אבג",7]]}]}"#,
        )
        .unwrap();
        assert_eq!(study.catalog().len(), 1);
        assert_eq!(study.issues().len(), 2);
    }

    #[test]
    fn test_empty_study_renders_nothing() {
        let study = Study::empty();
        assert!(study.groups().is_empty());
        assert_eq!(study.word_count(), 0);
        assert!(study.catalog().is_empty());
    }

    #[test]
    fn test_invalid_catalog_json_is_a_load_error() {
        let err = Study::from_documents("אבג", "}{").unwrap_err();
        assert!(matches!(err, LoadError::Catalog(_)));
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let loader = StudyLoader::new();
        let err = loader
            .load(Path::new("/nonexistent/verses.txt"), Path::new("/nonexistent/h.json"))
            .unwrap_err();
        assert!(matches!(err, LoadError::Io(_, _)));
    }
}
