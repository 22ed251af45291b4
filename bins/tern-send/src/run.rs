//! The linear transfer flow.
//!
//! Session setup runs before wallet provisioning so a dead discovery
//! service leaves no side effects: the phrase file is neither read nor
//! created when no endpoint can be resolved. After that the flow is
//! strictly sequential: provision, query, submit once, poll until the
//! seqno drifts.

use anyhow::{Context, Result};
use tracing::info;

use tern_client::{
    format_nano, wait_for_seqno_change, ClientError, Discovery, ExternalMessage, LedgerClient,
    TransferIntent,
};
use tern_wallet::{PhraseStore, Wallet};

use crate::config::Config;

/// Execute one provision-send-confirm cycle.
pub async fn run<D, S, C, F>(discovery: &D, store: &S, connect: F, config: &Config) -> Result<()>
where
    D: Discovery,
    S: PhraseStore,
    C: LedgerClient,
    F: FnOnce(&str) -> Result<C, ClientError>,
{
    let endpoint = discovery
        .http_endpoint(&config.network)
        .await
        .context("endpoint discovery failed")?;
    let client = connect(&endpoint).context("failed to bind RPC client")?;
    info!(%endpoint, network = %config.network, "session established");

    let (wallet, created) = Wallet::provision(store).context("wallet provisioning failed")?;
    let address = wallet.address();
    info!(%address, created, "wallet ready");

    let balance = client
        .balance(&address)
        .await
        .context("balance query failed")?;
    let seqno = client.seqno(&address).await.context("seqno query failed")?;
    info!(balance = %format_nano(balance), seqno, "on-chain state");

    let intent = TransferIntent {
        dest: config.destination,
        amount: config.amount,
        comment: config.comment.clone(),
        bounce: config.bounce,
    };
    let message = ExternalMessage::build(&intent, seqno, wallet.keypair())
        .context("failed to build transfer message")?;
    client
        .send_external(&message)
        .await
        .context("transfer submission failed")?;
    info!(
        amount = %format_nano(config.amount),
        dest = %config.destination,
        seqno,
        "transfer submitted"
    );

    let new_seqno = wait_for_seqno_change(&client, &address, seqno, &config.confirm)
        .await
        .context("confirmation polling failed")?;
    info!(seqno = new_seqno, "transaction confirmed!");
    Ok(())
}
