#![no_std]
//! # ENS Swap - Slippage-Guarded Settlement
//!
//! Settles a single exact-input swap for a user whose slippage and fee
//! preferences come from their name records. The front end reads those
//! records; this contract only sees the resulting numbers.
//!
//! ## Token Flow:
//! User (token_in) → EnsSwap → Router → EnsSwap (token_out) → User
//!
//! The user approves this contract for `amount_in` beforehand. The contract
//! takes custody of the input, authorizes the router to pull it, and forwards
//! the output only when it clears the slippage floor. Any failure returns an
//! error, which rolls back the whole invocation including the pulled input.

use soroban_sdk::{
    auth::{ContractContext, InvokerContractAuthEntry, SubContractInvocation},
    contract, contractimpl, token::TokenClient, vec, Address, Env, IntoVal, Symbol, Val, Vec,
};

mod error;
mod events;
mod slippage;
mod storage;
mod swap_router;

pub use error::EnsSwapError;
pub use slippage::BPS_DENOMINATOR;
pub use swap_router::ExactInputSingleParams;

use swap_router::SwapRouterClient;
use storage::{extend_instance_ttl, get_swap_router_address, set_swap_router_address};

pub fn check_nonnegative_amount(amount: i128) -> Result<(), EnsSwapError> {
    if amount < 0 {
        Err(EnsSwapError::NegativeNotAllowed)
    } else {
        Ok(())
    }
}

#[contract]
pub struct EnsSwap;

#[contractimpl]
impl EnsSwap {
    /// Store the router every swap is delegated to
    pub fn __constructor(e: Env, router_address: Address) {
        set_swap_router_address(&e, &router_address);
        extend_instance_ttl(&e);
    }

    pub fn swap_router(e: Env) -> Address {
        get_swap_router_address(&e)
    }

    /// Quote the slippage floor `swap` would enforce for these inputs
    pub fn min_amount_out(_e: Env, amount_in: i128, slippage_bps: u32) -> Result<i128, EnsSwapError> {
        slippage::min_amount_out(amount_in, slippage_bps)
    }

    /// Swap `amount_in` of `token_in` for `token_out` through the router
    ///
    /// ## Parameters:
    /// - `caller`: The user swapping (must sign, must have approved this contract)
    /// - `token_in`: Token being sold
    /// - `token_out`: Token being purchased
    /// - `amount_in`: Exact amount of `token_in` to sell
    /// - `fee_tier`: Router pool fee tier (500, 3000, 10000, ...), passed through as is
    /// - `slippage_bps`: Tolerance in basis points, 50 = 0.5%
    ///
    /// ## Returns:
    /// Amount of `token_out` transferred to the caller
    ///
    /// ## Errors:
    /// - `InsufficientBalance` if the caller holds less than `amount_in`
    /// - `InsufficientAllowance` if the approval to this contract is below `amount_in`
    /// - `SlippageExceeded` if the router paid less than
    ///   `amount_in * (10000 - slippage_bps) / 10000`
    pub fn swap(
        e: Env,
        caller: Address,
        token_in: Address,
        token_out: Address,
        amount_in: i128,
        fee_tier: u32,
        slippage_bps: u32,
    ) -> Result<i128, EnsSwapError> {
        caller.require_auth();
        check_nonnegative_amount(amount_in)?;
        let amount_out_minimum = slippage::min_amount_out(amount_in, slippage_bps)?;
        extend_instance_ttl(&e);

        let this = e.current_contract_address();
        let token_in_client = TokenClient::new(&e, &token_in);

        // Balance is checked before allowance so an over-approved but
        // under-funded caller gets the balance error.
        if token_in_client.balance(&caller) < amount_in {
            return Err(EnsSwapError::InsufficientBalance);
        }
        if token_in_client.allowance(&caller, &this) < amount_in {
            return Err(EnsSwapError::InsufficientAllowance);
        }

        token_in_client.transfer_from(&this, &caller, &this, &amount_in);

        let swap_router_address = get_swap_router_address(&e);
        let swap_router_client = SwapRouterClient::new(&e, &swap_router_address);

        // The router pulls the input from this contract, which is not its
        // direct invoker for the token call.
        let mut transfer_args: Vec<Val> = vec![&e];
        transfer_args.push_back(this.into_val(&e)); // From
        transfer_args.push_back(swap_router_address.into_val(&e)); // To
        transfer_args.push_back(amount_in.into_val(&e)); // Amount

        e.authorize_as_current_contract(vec![
            &e,
            InvokerContractAuthEntry::Contract(SubContractInvocation {
                context: ContractContext {
                    contract: token_in.clone(),
                    fn_name: Symbol::new(&e, "transfer"),
                    args: transfer_args,
                },
                sub_invocations: vec![&e],
            }),
        ]);

        let amount_out = swap_router_client.exact_input_single(&ExactInputSingleParams {
            token_in: token_in.clone(),
            token_out: token_out.clone(),
            fee: fee_tier,
            sender: this.clone(),
            recipient: this.clone(),
            deadline: u64::MAX,
            amount_in,
            amount_out_minimum,
        });

        if amount_out < amount_out_minimum {
            return Err(EnsSwapError::SlippageExceeded);
        }

        TokenClient::new(&e, &token_out).transfer(&this, &caller, &amount_out);

        events::swap_executed(&e, &caller, &token_in, &token_out, amount_in, amount_out, fee_tier);

        Ok(amount_out)
    }
}
