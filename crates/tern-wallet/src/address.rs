//! Workchain-qualified wallet addresses.
//!
//! An address is a workchain identifier plus a 32-byte SHA-256 account
//! hash committing to the owner's public key. The human-readable raw
//! form is `<workchain>:<64 hex chars>`, e.g. `0:3fa9...`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sha2::{Digest, Sha256};
use std::fmt;
use std::str::FromStr;

use crate::error::WalletError;
use crate::keys::PublicKey;

/// Domain tag mixed into the account hash.
const ADDRESS_DOMAIN: &[u8] = b"tern-address-v1";

/// The base workchain all wallets in this tool live in.
pub const BASE_WORKCHAIN: i8 = 0;

/// A ledger address: workchain plus 32-byte account hash.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Address {
    workchain: i8,
    hash: [u8; 32],
}

impl Address {
    /// Create an address from a raw account hash and workchain.
    pub fn from_hash(workchain: i8, hash: [u8; 32]) -> Self {
        Self { workchain, hash }
    }

    /// Derive the address owned by a public key in the given workchain.
    pub fn from_public_key(public_key: &PublicKey, workchain: i8) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(ADDRESS_DOMAIN);
        hasher.update([workchain as u8]);
        hasher.update(public_key.to_bytes());
        let hash: [u8; 32] = hasher.finalize().into();
        Self { workchain, hash }
    }

    /// The workchain this address belongs to.
    pub fn workchain(&self) -> i8 {
        self.workchain
    }

    /// The 32-byte account hash.
    pub fn hash(&self) -> &[u8; 32] {
        &self.hash
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.workchain, hex::encode(self.hash))
    }
}

impl FromStr for Address {
    type Err = WalletError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (wc_str, hash_str) = s
            .split_once(':')
            .ok_or_else(|| WalletError::InvalidAddress(format!("missing ':' in {s:?}")))?;
        let workchain: i8 = wc_str
            .parse()
            .map_err(|_| WalletError::InvalidAddress(format!("bad workchain {wc_str:?}")))?;
        let bytes = hex::decode(hash_str)
            .map_err(|e| WalletError::InvalidAddress(format!("bad hex: {e}")))?;
        let hash: [u8; 32] = bytes
            .try_into()
            .map_err(|_| WalletError::InvalidAddress("account hash must be 32 bytes".into()))?;
        Ok(Self { workchain, hash })
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
