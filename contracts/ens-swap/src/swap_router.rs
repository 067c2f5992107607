use soroban_sdk::{contractclient, contracttype, Address, Env};

/// Exact-input, single-pool swap parameters understood by the router
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ExactInputSingleParams {
    pub token_in: Address,
    pub token_out: Address,
    /// Pool fee tier, forwarded untouched
    pub fee: u32,
    /// Account the router pulls `amount_in` from
    pub sender: Address,
    pub recipient: Address,
    /// Ledger timestamp after which the router must refuse the swap
    pub deadline: u64,
    pub amount_in: i128,
    pub amount_out_minimum: i128,
}

#[contractclient(name = "SwapRouterClient")]
pub trait SwapRouterInterface {
    /// Swap exactly `params.amount_in` of `params.token_in` and return the
    /// amount of `params.token_out` paid to `params.recipient`.
    fn exact_input_single(e: Env, params: ExactInputSingleParams) -> i128;
}
