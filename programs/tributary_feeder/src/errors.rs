use anchor_lang::prelude::*;

#[error_code]
pub enum FeederError {
    /// The deposit gate is switched off
    #[msg("Deposits are currently disabled for this pool")]
    DepositsDisabled,

    /// The withdraw gate is switched off
    #[msg("Withdrawals are currently disabled for this pool")]
    WithdrawalsDisabled,

    /// The pool has been deactivated; the transition is one-way
    #[msg("Pool has been permanently deactivated")]
    PoolInactive,

    /// Deposit/withdraw amount must be greater than zero
    #[msg("Amount must be greater than zero")]
    ZeroAmount,

    /// Withdrawal request meets or exceeds the current balance; a full exit
    /// must go through withdraw_all
    #[msg("Withdrawal request exceeds current balance")]
    InsufficientFunds,

    /// Governance toggle matches the value already set
    #[msg("Governance change matches the current value")]
    RedundantGovernanceChange,

    /// Deactivation is reserved for the liquidation authority
    #[msg("Unauthorized: signer is not the liquidation authority")]
    UnauthorizedDeactivation,

    /// Pool is whitelisted and the depositor has no entry
    #[msg("Depositor is not on the pool whitelist")]
    NotWhitelisted,

    /// Signer is not the pool governor / reward authority
    #[msg("Unauthorized: signer does not hold the required authority")]
    Unauthorized,

    /// Invalid access mode value (must be 0 or 1)
    #[msg("Invalid access mode (must be 0=open or 1=whitelisted)")]
    InvalidAccessMode,

    /// Token account does not match the pool's underlying asset
    #[msg("Token account does not match the pool's underlying asset")]
    AssetMismatch,

    /// Upstream account does not match the one wired at pool creation
    #[msg("Account does not match the wired upstream pool")]
    UpstreamMismatch,

    /// Arithmetic overflow during pool accounting
    #[msg("Arithmetic overflow in pool accounting")]
    ArithmeticOverflow,

    /// Division by zero during pool accounting
    #[msg("Division by zero in pool accounting")]
    DivisionByZero,
}
