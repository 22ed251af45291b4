//! Confirmation polling.
//!
//! Finalization is inferred from seqno drift only: the loop re-reads the
//! wallet seqno on a fixed interval and reports confirmation the first
//! time it differs from the seqno the transfer was submitted with. Any
//! other transaction advancing the seqno would be indistinguishable from
//! ours; there is no receipt or hash check.

use std::time::Duration;

use tracing::info;

use tern_wallet::Address;

use crate::error::ClientError;
use crate::rpc::LedgerClient;

/// How the confirmation loop waits.
///
/// The default polls every 1500 ms with no upper bound, so an
/// unconfirmable transfer hangs rather than erroring. Setting
/// `max_attempts` turns the hang into [`ClientError::ConfirmTimeout`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfirmPolicy {
    /// Sleep between polls.
    pub interval: Duration,
    /// Give up after this many polls; `None` waits forever.
    pub max_attempts: Option<u32>,
}

impl Default for ConfirmPolicy {
    fn default() -> Self {
        Self {
            interval: Duration::from_millis(1500),
            max_attempts: None,
        }
    }
}

impl ConfirmPolicy {
    /// A bounded policy that errors instead of hanging.
    pub fn bounded(interval: Duration, max_attempts: u32) -> Self {
        Self {
            interval,
            max_attempts: Some(max_attempts),
        }
    }
}

/// Poll until the wallet seqno differs from `submitted_seqno`.
///
/// Sleeps first, then re-queries, matching the submit-then-wait flow.
/// Returns the new seqno on confirmation. Query errors propagate
/// immediately; the loop never retries a failed query.
pub async fn wait_for_seqno_change<C>(
    client: &C,
    address: &Address,
    submitted_seqno: u32,
    policy: &ConfirmPolicy,
) -> Result<u32, ClientError>
where
    C: LedgerClient + ?Sized,
{
    let mut attempts: u32 = 0;
    loop {
        if let Some(max) = policy.max_attempts {
            if attempts >= max {
                return Err(ClientError::ConfirmTimeout { attempts });
            }
        }
        info!("waiting for transaction to confirm...");
        tokio::time::sleep(policy.interval).await;
        attempts += 1;

        let current = client.seqno(address).await?;
        if current != submitted_seqno {
            return Ok(current);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::ExternalMessage;
    use async_trait::async_trait;
    use std::str::FromStr;
    use std::sync::Mutex;

    /// Ledger stub replaying a scripted sequence of seqno reads.
    struct ScriptedLedger {
        seqnos: Mutex<Vec<u32>>,
        reads: Mutex<u32>,
    }

    impl ScriptedLedger {
        fn new(seqnos: &[u32]) -> Self {
            let mut s = seqnos.to_vec();
            s.reverse();
            Self {
                seqnos: Mutex::new(s),
                reads: Mutex::new(0),
            }
        }

        fn reads(&self) -> u32 {
            *self.reads.lock().unwrap()
        }
    }

    #[async_trait]
    impl LedgerClient for ScriptedLedger {
        async fn balance(&self, _address: &Address) -> Result<u64, ClientError> {
            Ok(0)
        }

        async fn seqno(&self, _address: &Address) -> Result<u32, ClientError> {
            *self.reads.lock().unwrap() += 1;
            self.seqnos
                .lock()
                .unwrap()
                .pop()
                .ok_or_else(|| ClientError::Rpc("scripted ledger exhausted".into()))
        }

        async fn send_external(&self, _message: &ExternalMessage) -> Result<(), ClientError> {
            Ok(())
        }
    }

    fn test_address() -> Address {
        Address::from_str("0:2222222222222222222222222222222222222222222222222222222222222222")
            .unwrap()
    }

    /// S, S, S, S+1: must confirm on the fourth read, not earlier.
    #[tokio::test(start_paused = true)]
    async fn terminates_only_on_seqno_change() {
        let ledger = ScriptedLedger::new(&[5, 5, 5, 6]);
        let policy = ConfirmPolicy::default();

        let new_seqno = wait_for_seqno_change(&ledger, &test_address(), 5, &policy)
            .await
            .unwrap();

        assert_eq!(new_seqno, 6);
        assert_eq!(ledger.reads(), 4, "must keep polling while seqno == S");
    }

    /// A decreased seqno still counts as drift (any change terminates).
    #[tokio::test(start_paused = true)]
    async fn any_drift_terminates() {
        let ledger = ScriptedLedger::new(&[4]);
        let new_seqno = wait_for_seqno_change(&ledger, &test_address(), 5, &ConfirmPolicy::default())
            .await
            .unwrap();
        assert_eq!(new_seqno, 4);
    }

    /// Bounded policy gives up with ConfirmTimeout when seqno never moves.
    #[tokio::test(start_paused = true)]
    async fn bounded_policy_times_out() {
        let ledger = ScriptedLedger::new(&[5, 5, 5, 5, 5, 5, 5, 5]);
        let policy = ConfirmPolicy::bounded(Duration::from_millis(1500), 3);

        let err = wait_for_seqno_change(&ledger, &test_address(), 5, &policy)
            .await
            .unwrap_err();

        assert_eq!(err, ClientError::ConfirmTimeout { attempts: 3 });
        assert_eq!(ledger.reads(), 3);
    }

    /// A query failure inside the loop propagates immediately.
    #[tokio::test(start_paused = true)]
    async fn query_error_propagates() {
        let ledger = ScriptedLedger::new(&[5]); // second read errors
        let err = wait_for_seqno_change(&ledger, &test_address(), 5, &ConfirmPolicy::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::Rpc(_)));
    }
}
