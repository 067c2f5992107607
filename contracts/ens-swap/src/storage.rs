use soroban_sdk::{contracttype, panic_with_error, Address, Env};

use crate::error::EnsSwapError;

#[derive(Clone)]
#[contracttype]
enum DataKey {
    SwapRouter,
}

const DAY_IN_LEDGERS: u32 = 17280;
pub const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

pub fn extend_instance_ttl(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub fn set_swap_router_address(e: &Env, router_address: &Address) {
    e.storage()
        .instance()
        .set(&DataKey::SwapRouter, router_address);
}

pub fn get_swap_router_address(e: &Env) -> Address {
    e.storage()
        .instance()
        .get(&DataKey::SwapRouter)
        .unwrap_or_else(|| panic_with_error!(e, EnsSwapError::NotInitialized))
}
