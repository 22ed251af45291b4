//! Load-or-generate wallet provisioning.
//!
//! Ties the phrase store, key derivation, and address construction
//! together. The invariant: once a phrase has been persisted, every
//! subsequent provisioning run reconstructs the identical wallet.

use tracing::info;

use crate::address::{Address, BASE_WORKCHAIN};
use crate::error::WalletError;
use crate::keys::{keypair_from_phrase, KeyPair};
use crate::mnemonic::{generate_phrase, parse_phrase};
use crate::store::PhraseStore;

/// A provisioned wallet: key material plus derived identity.
pub struct Wallet {
    keypair: KeyPair,
    address: Address,
}

impl Wallet {
    /// Load the wallet from the store, generating and persisting a new
    /// phrase if none exists yet.
    ///
    /// Returns the wallet and `true` if a fresh phrase was generated.
    /// If persisting a freshly generated phrase fails, the error
    /// propagates and the phrase is lost for this run.
    pub fn provision<S: PhraseStore>(store: &S) -> Result<(Self, bool), WalletError> {
        let (phrase, created) = match store.load()? {
            Some(phrase) => {
                info!("mnemonic loaded from store");
                (phrase, false)
            }
            None => {
                let phrase = generate_phrase();
                store.save(&phrase)?;
                info!("new mnemonic generated and saved");
                (phrase, true)
            }
        };
        Ok((Self::from_phrase(&phrase)?, created))
    }

    /// Rebuild a wallet directly from a phrase, without touching storage.
    pub fn from_phrase(phrase: &str) -> Result<Self, WalletError> {
        let m = parse_phrase(phrase)?;
        let keypair = keypair_from_phrase(&m);
        let address = Address::from_public_key(&keypair.public_key(), BASE_WORKCHAIN);
        Ok(Self { keypair, address })
    }

    /// The wallet's signing keypair.
    pub fn keypair(&self) -> &KeyPair {
        &self.keypair
    }

    /// The wallet's on-chain address (workchain 0).
    pub fn address(&self) -> Address {
        self.address
    }
}

impl std::fmt::Debug for Wallet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Wallet")
            .field("address", &self.address)
            .finish_non_exhaustive()
    }
}
