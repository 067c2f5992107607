use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum MockRouterError {
    NegativeNotAllowed = 1,
    /// `set_token_out` was never called
    TokenOutNotSet = 2,
    /// Requested output token differs from the configured one
    UnsupportedPair = 3,
    /// Ledger timestamp is past the swap deadline
    Expired = 4,
}
