mod config;

use std::sync::Arc;

use anyhow::{bail, Context};
use client::{
    AccountId, DropZone, JsonRpcProvider, KeyType, Notice, Outcome, PublicKey, SecretKey, Session,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("drop_cli=info".parse().unwrap())
                .add_directive("client=debug".parse().unwrap()),
        )
        .init();

    let config = config::Config::from_env();
    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = args.first().map(String::as_str).unwrap_or("status");

    let provider = Arc::new(JsonRpcProvider::new(config.rpc_url.clone()));
    let contract_id: AccountId = config
        .contract_id
        .parse()
        .context("CONTRACT_ID is not a valid account id")?;
    tracing::info!("using contract {} via {}", contract_id, config.rpc_url);

    match command {
        "status" => {
            let mut zone = drop_zone(&config, provider, contract_id)?;
            let dropped = zone.check_drop().await?;
            println!("app key: {}", zone.session().public_key());
            println!("dropped tokens: {dropped}");
        }
        "claim" => {
            let mut zone = drop_zone(&config, provider, contract_id)?;
            report(zone.claim_drop().await?);
            println!("dropped tokens: {}", zone.balance_dropped());
        }
        "transfer" => {
            let receiver = args.get(1).map(String::as_str).unwrap_or("");
            let mut zone = drop_zone(&config, provider, contract_id)?;
            let outcome = zone.transfer_drop(receiver).await?;
            report(outcome);
            if !matches!(outcome, Outcome::Benign(Notice::ReceiverMissing)) {
                println!("dropped tokens: {}", zone.balance_dropped());
                println!("receiver tokens: {}", zone.balance_tokens());
            }
        }
        "receiver" => {
            let receiver = args.get(1).context("usage: receiver <account_id>")?;
            let mut zone = drop_zone(&config, provider, contract_id)?;
            let balance = zone.check_receiver(receiver).await?;
            println!("receiver tokens: {balance}");
        }
        "grant" => {
            let owner = owner_session(&config, provider, contract_id)?;
            match args.get(1) {
                Some(raw) => {
                    let public_key: PublicKey = raw.parse().context("invalid public key")?;
                    owner.grant_drop_key(public_key).await?;
                    println!("granted drop key {raw}");
                }
                None => {
                    // No key supplied: mint a fresh pair and print both halves.
                    let secret = SecretKey::from_random(KeyType::ED25519);
                    owner.grant_drop_key(secret.public_key()).await?;
                    println!("granted drop key {}", secret.public_key());
                    println!("secret key: {secret}");
                }
            }
        }
        _ => bail!(
            "unknown command: {command} (expected status | claim | transfer | receiver | grant)"
        ),
    }

    Ok(())
}

fn report(outcome: Outcome) {
    match outcome {
        Outcome::Completed => println!("ok"),
        Outcome::Benign(notice) => println!("notice: {}", notice.message()),
    }
}

fn drop_zone(
    config: &config::Config,
    provider: Arc<JsonRpcProvider>,
    contract_id: AccountId,
) -> anyhow::Result<DropZone> {
    let secret: SecretKey = config
        .access_key_secret
        .as_deref()
        .context("ACCESS_KEY_SECRET is not set")?
        .parse()
        .context("ACCESS_KEY_SECRET is not a valid secret key")?;
    let account_id = match &config.account_id {
        Some(raw) => Some(raw.parse().context("ACCOUNT_ID is not a valid account id")?),
        None => None,
    };
    Ok(DropZone::new(Session::new(
        provider,
        contract_id,
        secret,
        account_id,
    )))
}

fn owner_session(
    config: &config::Config,
    provider: Arc<JsonRpcProvider>,
    contract_id: AccountId,
) -> anyhow::Result<Session> {
    let secret: SecretKey = config
        .owner_secret
        .as_deref()
        .context("OWNER_SECRET is not set (grant needs the owner's full-access key)")?
        .parse()
        .context("OWNER_SECRET is not a valid secret key")?;
    Ok(Session::new(provider, contract_id, secret, None))
}
