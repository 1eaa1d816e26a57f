use std::process::ExitCode;

use alloy_primitives::Address;
use anyhow::{Context, Result};
use apps::{cli, config, BallotClient, ConnectionArgs, SignerArgs};
use clap::Parser;

/// Prints the name of the proposal currently leading a Ballot contract.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Address of the deployed Ballot contract
    #[clap(value_parser = config::parse_address)]
    ballot_address: Address,

    #[clap(flatten)]
    connection: ConnectionArgs,

    #[clap(flatten)]
    signer: SignerArgs,
}

#[tokio::main]
async fn main() -> ExitCode {
    cli::init_logging();
    match cli::parse_args::<Args>() {
        Ok(args) => cli::report(run(args).await),
        Err(code) => code,
    }
}

async fn run(args: Args) -> Result<()> {
    let signer = args.signer.resolve().context("failed to set up the signing wallet")?;
    println!("Using address {}", signer.address());
    let provider = config::connect(&args.connection, signer.signer);
    let ballot = BallotClient::new(args.ballot_address, provider);

    println!("Querying for winning proposal");
    let name = ballot.winner_name().await.context("failed to query the winner")?;
    println!("Winning proposal: {name}");

    Ok(())
}
