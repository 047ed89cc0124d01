use anchor_lang::prelude::*;

use crate::errors::FeederError;
use crate::state::pool::AccessMode;

/// Whitelist membership marker.
///
/// Seeds: ["whitelist", pool, depositor]
/// Existence is the membership test; closing the account revokes access.
///
/// Size calculation:
///   discriminator: 8
///   pool: 32
///   depositor: 32
///   added_at: 8
///   bump: 1
///   TOTAL: 81
#[account]
pub struct WhitelistEntry {
    pub pool: Pubkey,
    pub depositor: Pubkey,
    pub added_at: i64,
    pub bump: u8,
}

impl WhitelistEntry {
    /// Account size for space allocation (includes discriminator)
    pub const SIZE: usize = 8 + 32 + 32 + 8 + 1;
}

/// Access-gate predicate wrapping the deposit/withdraw entry points: open
/// pools admit anyone; whitelisted pools require a live entry matching the
/// pool and depositor. The orchestrator behind the gate is identical either
/// way.
pub fn authorize(
    mode: AccessMode,
    pool_key: &Pubkey,
    entry: Option<&WhitelistEntry>,
    depositor: &Pubkey,
) -> Result<()> {
    match mode {
        AccessMode::Open => Ok(()),
        AccessMode::Whitelisted => {
            let entry = entry.ok_or(FeederError::NotWhitelisted)?;
            require!(
                entry.pool == *pool_key && entry.depositor == *depositor,
                FeederError::NotWhitelisted
            );
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_pools_admit_anyone() {
        let depositor = Pubkey::new_unique();
        assert!(authorize(AccessMode::Open, &Pubkey::new_unique(), None, &depositor).is_ok());
    }

    #[test]
    fn whitelisted_pools_require_a_matching_entry() {
        let pool = Pubkey::new_unique();
        let depositor = Pubkey::new_unique();
        assert!(authorize(AccessMode::Whitelisted, &pool, None, &depositor).is_err());

        let entry = WhitelistEntry {
            pool,
            depositor,
            added_at: 0,
            bump: 0,
        };
        assert!(authorize(AccessMode::Whitelisted, &pool, Some(&entry), &depositor).is_ok());

        let stranger = Pubkey::new_unique();
        assert!(authorize(AccessMode::Whitelisted, &pool, Some(&entry), &stranger).is_err());
    }
}
