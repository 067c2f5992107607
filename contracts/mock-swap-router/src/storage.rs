use soroban_sdk::{contracttype, Address, Env};

#[derive(Clone)]
#[contracttype]
enum DataKey {
    TokenOut,
    MockAmountOut,
}

const DAY_IN_LEDGERS: u32 = 17280;
pub const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

pub fn extend_instance_ttl(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub fn write_token_out(e: &Env, token: &Address) {
    e.storage().instance().set(&DataKey::TokenOut, token);
}

pub fn read_token_out(e: &Env) -> Option<Address> {
    e.storage().instance().get(&DataKey::TokenOut)
}

pub fn write_mock_amount_out(e: &Env, amount: i128) {
    e.storage().instance().set(&DataKey::MockAmountOut, &amount);
}

pub fn read_mock_amount_out(e: &Env) -> i128 {
    e.storage()
        .instance()
        .get(&DataKey::MockAmountOut)
        .unwrap_or(0)
}
