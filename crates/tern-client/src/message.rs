//! Transfer intent and signed external message.
//!
//! The external message is the wire form of one transfer: the unsigned
//! fields are bincode-encoded and signed with the wallet's Ed25519 key,
//! then the whole message is hex-encoded for submission. The seqno baked
//! into the message must be the one queried immediately before building;
//! the network rejects a stale seqno.

use bincode::{Decode, Encode};

use tern_wallet::{Address, KeyPair, PublicKey};

use crate::error::ClientError;

/// A single outbound transfer, constructed once and submitted once.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransferIntent {
    /// Destination address.
    pub dest: Address,
    /// Amount in nanotern.
    pub amount: u64,
    /// Optional text comment attached to the transfer.
    pub comment: Option<String>,
    /// Whether the message bounces back on delivery failure.
    pub bounce: bool,
}

/// Fields covered by the signature.
#[derive(Encode)]
struct SigningBody<'a> {
    seqno: u32,
    dest: &'a str,
    amount: u64,
    comment: &'a Option<String>,
    bounce: bool,
}

/// A signed external message ready for submission.
#[derive(Encode, Decode, Clone, Debug, PartialEq, Eq)]
pub struct ExternalMessage {
    /// Wallet seqno at submission time.
    pub seqno: u32,
    /// Destination address in raw `workchain:hex` form.
    pub dest: String,
    /// Amount in nanotern.
    pub amount: u64,
    /// Optional text comment.
    pub comment: Option<String>,
    /// Bounce flag.
    pub bounce: bool,
    /// Sender public key (32 bytes).
    pub public_key: [u8; 32],
    /// Ed25519 signature over the unsigned fields (64 bytes).
    pub signature: [u8; 64],
}

impl ExternalMessage {
    /// Build and sign a message for `intent` at the given seqno.
    pub fn build(
        intent: &TransferIntent,
        seqno: u32,
        keypair: &KeyPair,
    ) -> Result<Self, ClientError> {
        let dest = intent.dest.to_string();
        let body = signing_bytes(seqno, &dest, intent.amount, &intent.comment, intent.bounce)?;
        let signature = keypair.sign(&body);
        Ok(Self {
            seqno,
            dest,
            amount: intent.amount,
            comment: intent.comment.clone(),
            bounce: intent.bounce,
            public_key: keypair.public_key().to_bytes(),
            signature,
        })
    }

    /// Check the embedded signature against the embedded public key.
    pub fn verify(&self) -> Result<(), ClientError> {
        let pk = PublicKey::from_bytes(&self.public_key)
            .map_err(|e| ClientError::Transfer(e.to_string()))?;
        let body = signing_bytes(self.seqno, &self.dest, self.amount, &self.comment, self.bounce)?;
        pk.verify(&body, &self.signature)
            .map_err(|_| ClientError::Transfer("bad message signature".into()))
    }

    /// Hex-encoded bincode blob for `sendrawmessage`.
    pub fn encode_hex(&self) -> Result<String, ClientError> {
        let bytes = bincode::encode_to_vec(self, bincode::config::standard())
            .map_err(|e| ClientError::Transfer(format!("encode: {e}")))?;
        Ok(hex::encode(bytes))
    }

    /// Decode a message from its hex wire form.
    pub fn decode_hex(s: &str) -> Result<Self, ClientError> {
        let bytes =
            hex::decode(s).map_err(|e| ClientError::Transfer(format!("bad hex: {e}")))?;
        let (msg, _) = bincode::decode_from_slice(&bytes, bincode::config::standard())
            .map_err(|e| ClientError::Transfer(format!("decode: {e}")))?;
        Ok(msg)
    }
}

/// Deterministic byte encoding of the signed fields.
fn signing_bytes(
    seqno: u32,
    dest: &str,
    amount: u64,
    comment: &Option<String>,
    bounce: bool,
) -> Result<Vec<u8>, ClientError> {
    let body = SigningBody {
        seqno,
        dest,
        amount,
        comment,
        bounce,
    };
    bincode::encode_to_vec(&body, bincode::config::standard())
        .map_err(|e| ClientError::Transfer(format!("encode signing body: {e}")))
}
