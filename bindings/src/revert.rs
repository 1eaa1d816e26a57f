use alloy::contract::Error as ContractError;
use alloy_sol_types::{decode_revert_reason, Revert, SolError};

/// JSON-RPC error code anvil, geth and hardhat use for execution reverts.
const EXECUTION_REVERTED: i64 = 3;

/// Whether the node rejected the call while executing it, as opposed to the call
/// never reaching the node, the node refusing to serve it (rate limits, unknown
/// methods, missing state) or its answer being unreadable.
pub fn is_contract_revert(err: &ContractError) -> bool {
    let ContractError::TransportError(rpc) = err else { return false };
    let Some(payload) = rpc.as_error_resp() else { return false };
    if payload.as_revert_data().is_some() || payload.code == EXECUTION_REVERTED {
        return true;
    }
    let message = payload.message.to_ascii_lowercase();
    message.contains("revert") || message.contains("invalid opcode")
}

/// Human readable reason of a reverted call or transaction.
///
/// Prefers the `Error(string)` payload from the revert data, then any other
/// decodable payload (e.g. `Panic(uint256)`), then the node's own error message.
pub fn revert_reason(err: &ContractError) -> Option<String> {
    if let Some(data) = err.as_revert_data() {
        if let Ok(revert) = Revert::abi_decode(&data) {
            return Some(revert.reason);
        }
        if let Some(reason) = decode_revert_reason(&data) {
            return Some(reason);
        }
    }
    match err {
        ContractError::TransportError(rpc) => {
            rpc.as_error_resp().map(|payload| payload.message.to_string())
        }
        _ => None,
    }
}
