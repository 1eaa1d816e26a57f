use alloy::providers::Provider;
use alloy_primitives::{Address, U256};
use ballot_bindings::{
    is_contract_revert, parse_bytes32_string, revert_reason, Ballot, Bytes32StringError, Proposal,
    Voter,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum QueryError {
    #[error("ballot contract call failed")]
    Contract(#[from] alloy::contract::Error),
    #[error("ballot returned a malformed proposal name")]
    Name(#[from] Bytes32StringError),
}

/// Read access to a deployed Ballot contract.
pub struct BallotClient<P> {
    contract: Ballot::BallotInstance<P>,
}

impl<P: Provider> BallotClient<P> {
    pub fn new(address: Address, provider: P) -> Self {
        Self { contract: Ballot::new(address, provider) }
    }

    pub fn address(&self) -> Address {
        *self.contract.address()
    }

    /// Reads one proposal. `None` means the contract rejected the index.
    pub async fn proposal(&self, index: u64) -> Result<Option<Proposal>, QueryError> {
        match self.contract.proposals(U256::from(index)).call().await {
            Ok(raw) => Ok(Some(Proposal::try_from(raw)?)),
            Err(err) if is_contract_revert(&err) => {
                log::debug!(
                    "proposals({index}) reverted: {}",
                    revert_reason(&err).unwrap_or_default()
                );
                Ok(None)
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Reads proposals in index order until the contract rejects an index or
    /// `limit` proposals have been read.
    ///
    /// The contract does not expose a proposal count, so this costs one round trip
    /// per proposal plus the final rejected one.
    pub async fn proposals(&self, limit: Option<u64>) -> Result<Vec<Proposal>, QueryError> {
        let mut proposals = Vec::new();
        let mut index = 0;
        while limit.map_or(true, |limit| index < limit) {
            match self.proposal(index).await? {
                Some(proposal) => proposals.push(proposal),
                None => return Ok(proposals),
            }
            index += 1;
        }
        log::debug!("stopped after {index} proposals without reaching the end of the ballot");
        Ok(proposals)
    }

    pub async fn winner_name(&self) -> Result<String, QueryError> {
        let name = self.contract.winnerName().call().await?;
        Ok(parse_bytes32_string(name)?)
    }

    pub async fn winning_proposal(&self) -> Result<U256, QueryError> {
        Ok(self.contract.winningProposal().call().await?)
    }

    pub async fn chairperson(&self) -> Result<Address, QueryError> {
        Ok(self.contract.chairperson().call().await?)
    }

    pub async fn voter(&self, account: Address) -> Result<Voter, QueryError> {
        Ok(self.contract.voters(account).call().await?.into())
    }
}
