//! Signer and node connection settings shared by the ballot executables.
//!
//! Every setting is a command-line flag with an environment variable fallback.

use std::str::FromStr;

use alloy::{
    network::EthereumWallet,
    providers::{DynProvider, Provider, ProviderBuilder},
    signers::local::{coins_bip39::English, LocalSignerError, MnemonicBuilder, PrivateKeySigner},
    transports::http::reqwest::Url,
};
use alloy_primitives::{Address, AddressError};
use clap::Args;
use thiserror::Error;

/// A key that has been published in tutorials for years. Anything it signs is
/// visible to, and front-runnable by, everyone.
pub const INSECURE_DEFAULT_KEY: &str =
    "8da4ef21b864d2cc526dbdb2a120bd2874c36c9d0a1fb7f8c63d7f7a8b41de8f";

/// Ethereum node connection.
#[derive(Args, Debug, Clone)]
pub struct ConnectionArgs {
    /// Ethereum node JSON-RPC endpoint.
    #[clap(long, env, default_value = "http://127.0.0.1:8545")]
    pub rpc_url: Url,
}

/// Where the signing key comes from. Checked in this order.
#[derive(Args, Debug, Clone, Default)]
pub struct SignerArgs {
    /// BIP-39 mnemonic; the account at m/44'/60'/0'/0/0 signs.
    #[clap(long, env = "MNEMONIC", hide_env_values = true)]
    pub mnemonic: Option<String>,

    /// Hex-encoded secp256k1 private key, used when no mnemonic is given.
    #[clap(long, env = "PRIVATE_KEY", hide_env_values = true)]
    pub private_key: Option<String>,

    /// Fail instead of falling back to the publicly known default key.
    #[clap(long, env = "REQUIRE_SIGNER")]
    pub require_signer: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignerSource {
    Mnemonic,
    PrivateKey,
    InsecureDefault,
}

#[derive(Debug, Clone)]
pub struct ResolvedSigner {
    pub signer: PrivateKeySigner,
    pub source: SignerSource,
}

impl ResolvedSigner {
    pub fn address(&self) -> Address {
        self.signer.address()
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("MNEMONIC is not a valid BIP-39 English phrase")]
    Mnemonic(#[source] LocalSignerError),
    #[error("PRIVATE_KEY is not a valid hex-encoded secp256k1 key")]
    PrivateKey(#[source] LocalSignerError),
    #[error("neither MNEMONIC nor PRIVATE_KEY is set and --require-signer forbids the default key")]
    MissingSigner,
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|value| !value.is_empty())
}

impl SignerArgs {
    pub fn resolve(&self) -> Result<ResolvedSigner, ConfigError> {
        if let Some(phrase) = non_blank(&self.mnemonic) {
            let signer = MnemonicBuilder::<English>::default()
                .phrase(phrase)
                .index(0)
                .and_then(|builder| builder.build())
                .map_err(ConfigError::Mnemonic)?;
            return Ok(ResolvedSigner { signer, source: SignerSource::Mnemonic });
        }

        if let Some(key) = non_blank(&self.private_key) {
            let signer = PrivateKeySigner::from_str(key).map_err(ConfigError::PrivateKey)?;
            return Ok(ResolvedSigner { signer, source: SignerSource::PrivateKey });
        }

        if self.require_signer {
            return Err(ConfigError::MissingSigner);
        }

        let signer =
            PrivateKeySigner::from_str(INSECURE_DEFAULT_KEY).map_err(ConfigError::PrivateKey)?;
        log::warn!(
            "neither MNEMONIC nor PRIVATE_KEY is set: signing as {} with a publicly known \
             private key. Never send real funds to it; pass --require-signer to refuse this \
             fallback.",
            signer.address()
        );
        Ok(ResolvedSigner { signer, source: SignerSource::InsecureDefault })
    }
}

/// Parses a contract address. Mixed-case hex must carry a valid EIP-55 checksum;
/// all-lowercase or all-uppercase hex is taken as is.
pub fn parse_address(s: &str) -> Result<Address, AddressError> {
    let digits = s.strip_prefix("0x").unwrap_or(s);
    let mixed_case = digits.bytes().any(|b| b.is_ascii_lowercase())
        && digits.bytes().any(|b| b.is_ascii_uppercase());
    if mixed_case {
        Address::parse_checksummed(format!("0x{digits}"), None)
    } else {
        Ok(digits.parse::<Address>()?)
    }
}

/// Builds an HTTP provider that signs with `signer` and fills gas, nonce and
/// chain id.
pub fn connect(connection: &ConnectionArgs, signer: PrivateKeySigner) -> DynProvider {
    log::debug!("connecting to {}", connection.rpc_url);
    let wallet = EthereumWallet::from(signer);
    ProviderBuilder::new()
        .wallet(wallet)
        .connect_http(connection.rpc_url.clone())
        .erased()
}
