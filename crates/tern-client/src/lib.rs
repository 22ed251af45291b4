//! # tern-client — network session and transfer submission.
//!
//! The network half of the transfer tool: resolves a live RPC endpoint
//! for a named network environment, binds a JSON-RPC client to it,
//! builds and signs the single outbound transfer message, and polls the
//! wallet seqno until the network reports it advanced.
//!
//! # Modules
//!
//! - [`error`] — `ClientError` enum
//! - [`units`] — nanotern amount parsing and display
//! - [`discovery`] — endpoint resolution for a named network
//! - [`rpc`] — `LedgerClient` trait and jsonrpsee HTTP implementation
//! - [`message`] — transfer intent, signed external message
//! - [`confirm`] — seqno polling with an explicit retry policy

pub mod confirm;
pub mod discovery;
pub mod error;
pub mod message;
pub mod rpc;
pub mod units;

// Re-exports for convenient access
pub use confirm::{wait_for_seqno_change, ConfirmPolicy};
pub use discovery::{Discovery, HttpDiscovery};
pub use error::ClientError;
pub use message::{ExternalMessage, TransferIntent};
pub use rpc::{HttpLedgerClient, LedgerClient};
pub use units::{format_nano, parse_tern, NANO_PER_TERN};
