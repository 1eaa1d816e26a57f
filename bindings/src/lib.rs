//! Contract interfaces and value conversions shared by the CLI tools and the
//! integration tests.

mod bytes32;
mod revert;
mod types;

pub use bytes32::{
    convert_string_array_to_bytes32, format_bytes32_string, parse_bytes32_string,
    Bytes32StringError,
};
pub use revert::{is_contract_revert, revert_reason};
pub use types::{Proposal, Voter};

alloy::sol! {
    /// Voting with delegation. Proposals are fixed at deployment; the deployer
    /// becomes chairperson and is the only account that can hand out voting rights.
    #[sol(rpc, all_derives)]
    interface Ballot {
        function chairperson() external view returns (address);
        function voters(address voter) external view returns (uint256 weight, bool voted, address delegate, uint256 vote);
        /// Reverts when `index` is past the last proposal.
        function proposals(uint256 index) external view returns (bytes32 name, uint256 voteCount);
        function giveRightToVote(address voter) external;
        function delegate(address to) external;
        function vote(uint256 proposal) external;
        /// Ties resolve to the lowest index.
        function winningProposal() external view returns (uint256 winningProposal_);
        function winnerName() external view returns (bytes32 winnerName_);
    }

    #[sol(rpc, all_derives)]
    interface HelloWorld {
        function helloWorld() external view returns (bytes32);
        function setText(bytes32 newText) external;
        function owner() external view returns (address);
        function transferOwnership(address newOwner) external;
    }
}
