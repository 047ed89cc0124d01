use anchor_lang::prelude::*;

use crate::instructions::withdraw::{self, Withdraw, WithdrawKind};

/// Full exit: burns every unit and withdraws the entire principal, with no
/// proportional attribution to round.
pub fn handler(ctx: Context<Withdraw>) -> Result<()> {
    withdraw::execute(ctx, WithdrawKind::Full)
}
