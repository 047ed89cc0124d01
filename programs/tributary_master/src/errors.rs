use anchor_lang::prelude::*;

#[error_code]
pub enum MasterError {
    /// Forward/release amount must be greater than zero
    #[msg("Amount must be greater than zero")]
    ZeroAmount,

    /// Reported yield index must be positive
    #[msg("Yield index must be greater than zero")]
    ZeroIndex,

    /// Signer is not the yield oracle authority
    #[msg("Unauthorized: signer is not the yield oracle")]
    UnauthorizedOracle,

    /// Stake record does not belong to the signing feeder
    #[msg("Stake does not belong to this feeder")]
    UnknownFeeder,

    /// Release request exceeds the feeder's staked value
    #[msg("Release amount exceeds the feeder's staked value")]
    InsufficientStake,

    /// Token account mint does not match the pool asset
    #[msg("Token account does not match the master pool asset")]
    AssetMismatch,

    /// Arithmetic overflow during valuation
    #[msg("Arithmetic overflow in valuation")]
    ArithmeticOverflow,

    /// Division by zero during valuation
    #[msg("Division by zero in valuation")]
    DivisionByZero,
}
