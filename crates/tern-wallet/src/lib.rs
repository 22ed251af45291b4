//! # tern-wallet — mnemonic-backed wallet provisioning.
//!
//! Provides the wallet identity half of the transfer tool: a 24-word
//! BIP-39 phrase as the single source of truth, deterministic Ed25519
//! key derivation from it, workchain-qualified address construction,
//! and a persistence port so the phrase can live in a plaintext file
//! (production) or in memory (tests).
//!
//! # Modules
//!
//! - [`error`] — `WalletError` enum
//! - [`mnemonic`] — phrase generation, parsing, seed extraction
//! - [`keys`] — `KeyPair` / `PublicKey`, derivation from a phrase
//! - [`address`] — workchain-qualified addresses
//! - [`store`] — `PhraseStore` port with file and in-memory backends
//! - [`wallet`] — load-or-generate provisioning

pub mod address;
pub mod error;
pub mod keys;
pub mod mnemonic;
pub mod store;
pub mod wallet;

// Re-exports for convenient access
pub use address::{Address, BASE_WORKCHAIN};
pub use error::WalletError;
pub use keys::{KeyPair, PublicKey};
pub use mnemonic::{generate_phrase, parse_phrase, PHRASE_WORDS};
pub use store::{FsPhraseStore, MemoryPhraseStore, PhraseStore};
pub use wallet::Wallet;
