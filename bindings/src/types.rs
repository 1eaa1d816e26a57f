use alloy_primitives::{Address, U256};

use crate::{bytes32::Bytes32StringError, parse_bytes32_string, Ballot};

/// A ballot proposal as read back from the contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Proposal {
    pub name: String,
    pub vote_count: U256,
}

impl TryFrom<Ballot::proposalsReturn> for Proposal {
    type Error = Bytes32StringError;

    fn try_from(raw: Ballot::proposalsReturn) -> Result<Self, Self::Error> {
        Ok(Self {
            name: parse_bytes32_string(raw.name)?,
            vote_count: raw.voteCount,
        })
    }
}

/// Voting state of one account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Voter {
    pub weight: U256,
    pub voted: bool,
    /// `Address::ZERO` until the voter delegates.
    pub delegate: Address,
    /// Only meaningful once `voted` is set.
    pub vote: U256,
}

impl From<Ballot::votersReturn> for Voter {
    fn from(raw: Ballot::votersReturn) -> Self {
        Self {
            weight: raw.weight,
            voted: raw.voted,
            delegate: raw.delegate,
            vote: raw.vote,
        }
    }
}
