use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum EnsSwapError {
    /// Caller holds less `token_in` than `amount_in`
    InsufficientBalance = 1,
    /// Caller approved this contract for less than `amount_in`
    InsufficientAllowance = 2,
    /// Router paid out less than the slippage floor (too little received)
    SlippageExceeded = 3,

    NegativeNotAllowed = 4,
    /// Slippage above 10000 basis points
    InvalidSlippage = 5,
    ArithmeticOverflow = 6,
    /// Router address was never stored
    NotInitialized = 7,
}
