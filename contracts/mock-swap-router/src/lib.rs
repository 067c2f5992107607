#![no_std]
//! # Mock Swap Router
//!
//! Stand-in for a concentrated-liquidity router on testnets and in tests.
//! It speaks the same `exact_input_single` interface as the real router but
//! pays a fixed, pre-configured amount of a pre-configured token instead of
//! pricing against a pool.
//!
//! ## Key Characteristics:
//! - Pulls `amount_in` of `token_in` from `params.sender`
//! - Pays `mock_amount_out` of `token_out` from its own balance, so fund it first
//! - Does NOT enforce `amount_out_minimum`; slippage checks belong to the caller

use soroban_sdk::{
    contract, contractevent, contractimpl, contracttype, token::TokenClient, Address, Env,
};

mod error;
mod storage;

pub use error::MockRouterError;

use storage::{
    extend_instance_ttl, read_mock_amount_out, read_token_out, write_mock_amount_out,
    write_token_out,
};

/// Exact-input, single-pool swap parameters
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ExactInputSingleParams {
    pub token_in: Address,
    pub token_out: Address,
    pub fee: u32,
    pub sender: Address,
    pub recipient: Address,
    pub deadline: u64,
    pub amount_in: i128,
    pub amount_out_minimum: i128,
}

/// Topics `("config", "token_out")`, data the new output token.
#[contractevent(topics = ["config", "token_out"], data_format = "single-value")]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TokenOutSet {
    pub token: Address,
}

/// Topics `("config", "amount")`, data the new payout.
#[contractevent(topics = ["config", "amount"], data_format = "single-value")]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AmountOutSet {
    pub amount: i128,
}

pub fn check_nonnegative_amount(amount: i128) -> Result<(), MockRouterError> {
    if amount < 0 {
        Err(MockRouterError::NegativeNotAllowed)
    } else {
        Ok(())
    }
}

#[contract]
pub struct MockSwapRouter;

#[contractimpl]
impl MockSwapRouter {
    pub fn set_token_out(e: Env, token: Address) {
        write_token_out(&e, &token);
        extend_instance_ttl(&e);
        TokenOutSet { token }.publish(&e);
    }

    pub fn set_mock_amount_out(e: Env, amount: i128) -> Result<(), MockRouterError> {
        check_nonnegative_amount(amount)?;
        write_mock_amount_out(&e, amount);
        extend_instance_ttl(&e);
        AmountOutSet { amount }.publish(&e);
        Ok(())
    }

    pub fn token_out(e: Env) -> Result<Address, MockRouterError> {
        read_token_out(&e).ok_or(MockRouterError::TokenOutNotSet)
    }

    pub fn mock_amount_out(e: Env) -> i128 {
        read_mock_amount_out(&e)
    }

    /// Take `params.amount_in` from the sender and pay the configured output
    /// to `params.recipient`. `params.fee` is accepted for any value.
    pub fn exact_input_single(e: Env, params: ExactInputSingleParams) -> Result<i128, MockRouterError> {
        params.sender.require_auth();
        check_nonnegative_amount(params.amount_in)?;

        if e.ledger().timestamp() > params.deadline {
            return Err(MockRouterError::Expired);
        }

        let token_out = read_token_out(&e).ok_or(MockRouterError::TokenOutNotSet)?;
        if token_out != params.token_out {
            return Err(MockRouterError::UnsupportedPair);
        }

        let this = e.current_contract_address();
        TokenClient::new(&e, &params.token_in).transfer(&params.sender, &this, &params.amount_in);

        let amount_out = read_mock_amount_out(&e);
        TokenClient::new(&e, &token_out).transfer(&this, &params.recipient, &amount_out);

        Ok(amount_out)
    }
}
