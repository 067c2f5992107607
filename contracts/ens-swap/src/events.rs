use soroban_sdk::{contractevent, Address, Env};

/// Topics `("swap", caller)`, data `(token_in, token_out, amount_in, amount_out, fee_tier)`.
#[contractevent(topics = ["swap"], data_format = "vec")]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SwapExecuted {
    #[topic]
    pub caller: Address,
    pub token_in: Address,
    pub token_out: Address,
    pub amount_in: i128,
    pub amount_out: i128,
    pub fee_tier: u32,
}

pub fn swap_executed(
    e: &Env,
    caller: &Address,
    token_in: &Address,
    token_out: &Address,
    amount_in: i128,
    amount_out: i128,
    fee_tier: u32,
) {
    SwapExecuted {
        caller: caller.clone(),
        token_in: token_in.clone(),
        token_out: token_out.clone(),
        amount_in,
        amount_out,
        fee_tier,
    }
    .publish(e);
}
