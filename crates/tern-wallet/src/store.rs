//! Phrase persistence port.
//!
//! The phrase is stored as plaintext, exactly N words joined by single
//! spaces with no trailing structure. A missing file is not an error;
//! it is the signal that a new phrase must be generated.
//!
//! Writing the phrase in plaintext is a deliberate, security-sensitive
//! property of this tool; callers own the file's location and mode.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::error::WalletError;

/// Durable storage for the secret phrase.
pub trait PhraseStore {
    /// Load the persisted phrase, or `None` if none has been saved yet.
    fn load(&self) -> Result<Option<String>, WalletError>;

    /// Persist the phrase verbatim, replacing any previous contents.
    fn save(&self, phrase: &str) -> Result<(), WalletError>;
}

/// Plaintext file-backed phrase store.
pub struct FsPhraseStore {
    path: PathBuf,
}

impl FsPhraseStore {
    /// Create a store backed by the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file path this store reads and writes.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PhraseStore for FsPhraseStore {
    fn load(&self) -> Result<Option<String>, WalletError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, phrase: &str) -> Result<(), WalletError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, phrase)?;
        Ok(())
    }
}

/// In-memory phrase store for tests.
#[derive(Default)]
pub struct MemoryPhraseStore {
    phrase: Mutex<Option<String>>,
}

impl MemoryPhraseStore {
    /// Create an empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with a phrase.
    pub fn with_phrase(phrase: &str) -> Self {
        Self {
            phrase: Mutex::new(Some(phrase.to_string())),
        }
    }
}

impl PhraseStore for MemoryPhraseStore {
    fn load(&self) -> Result<Option<String>, WalletError> {
        Ok(self.phrase.lock().expect("store mutex poisoned").clone())
    }

    fn save(&self, phrase: &str) -> Result<(), WalletError> {
        *self.phrase.lock().expect("store mutex poisoned") = Some(phrase.to_string());
        Ok(())
    }
}
