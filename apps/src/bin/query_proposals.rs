use std::process::ExitCode;

use alloy_primitives::Address;
use anyhow::{Context, Result};
use apps::{cli, config, BallotClient, ConnectionArgs, SignerArgs};
use clap::Parser;

/// Prints the name and vote count of the proposals of a Ballot contract.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Address of the deployed Ballot contract
    #[clap(value_parser = config::parse_address)]
    ballot_address: Address,

    /// Print only the proposal with this index
    proposal_index: Option<u64>,

    /// Read at most this many proposals when listing all of them
    #[clap(long)]
    max_proposals: Option<u64>,

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

    println!("Attaching ballot contract interface to address {}", args.ballot_address);
    let ballot = BallotClient::new(args.ballot_address, provider);

    if let Some(index) = args.proposal_index {
        let proposal = ballot
            .proposal(index)
            .await
            .with_context(|| format!("failed to read proposal {index}"))?;
        match proposal {
            Some(proposal) => {
                println!("Printing name and vote count of proposal with index {index}");
                println!("{} : {}", proposal.name, proposal.vote_count);
            }
            None => println!("No proposal with index {index}"),
        }
        return Ok(());
    }

    println!("Printing name and vote count of all proposals");
    let proposals = ballot
        .proposals(args.max_proposals)
        .await
        .context("failed to read the proposal list")?;
    for proposal in &proposals {
        println!("{} : {}", proposal.name, proposal.vote_count);
    }
    log::debug!("{} proposals in ballot {}", proposals.len(), ballot.address());

    Ok(())
}
