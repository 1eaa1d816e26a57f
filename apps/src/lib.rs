//! Command-line tools for querying a deployed Ballot contract.

pub mod cli;
pub mod client;
pub mod config;

pub use client::{BallotClient, QueryError};
pub use config::{ConnectionArgs, ResolvedSigner, SignerArgs, SignerSource};
