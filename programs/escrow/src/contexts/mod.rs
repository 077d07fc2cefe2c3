pub mod close_escrow;
pub mod confirm_order;
pub mod fail_order;
pub mod initialize;
pub mod refund_order;
pub mod withdraw_funds;

pub use close_escrow::*;
pub use confirm_order::*;
pub use fail_order::*;
pub use initialize::*;
pub use refund_order::*;
pub use withdraw_funds::*;

use anchor_lang::prelude::*;

use crate::error::EscrowError;

/// Moves lamports out of a program-owned account by editing balances
/// directly. The system program cannot debit a PDA that carries data, so
/// every payout from the escrow account goes through here.
pub(crate) fn transfer_lamports(from: &AccountInfo, to: &AccountInfo, amount: u64) -> Result<()> {
    let from_lamports = **from.try_borrow_lamports()?;
    require!(from_lamports >= amount, EscrowError::InsufficientFunds);

    **from.try_borrow_mut_lamports()? -= amount;
    **to.try_borrow_mut_lamports()? += amount;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::solana_program::system_program;

    fn wallet<'a>(
        key: &'a Pubkey,
        lamports: &'a mut u64,
        data: &'a mut [u8],
        owner: &'a Pubkey,
    ) -> AccountInfo<'a> {
        AccountInfo::new(key, false, true, lamports, data, owner, false, 0)
    }

    #[test]
    fn moves_exactly_the_requested_amount() {
        let system = system_program::ID;
        let from_key = Pubkey::new_unique();
        let to_key = Pubkey::new_unique();
        let mut from_lamports = 3_000_000_000u64;
        let mut to_lamports = 250u64;
        let mut from_data: [u8; 0] = [];
        let mut to_data: [u8; 0] = [];
        let from = wallet(&from_key, &mut from_lamports, &mut from_data, &system);
        let to = wallet(&to_key, &mut to_lamports, &mut to_data, &system);

        transfer_lamports(&from, &to, 1_000_000_000).unwrap();

        assert_eq!(from.lamports(), 2_000_000_000);
        assert_eq!(to.lamports(), 1_000_000_250);
    }

    #[test]
    fn refuses_to_overdraw_the_source() {
        let system = system_program::ID;
        let from_key = Pubkey::new_unique();
        let to_key = Pubkey::new_unique();
        let mut from_lamports = 500u64;
        let mut to_lamports = 0u64;
        let mut from_data: [u8; 0] = [];
        let mut to_data: [u8; 0] = [];
        let from = wallet(&from_key, &mut from_lamports, &mut from_data, &system);
        let to = wallet(&to_key, &mut to_lamports, &mut to_data, &system);

        let err = transfer_lamports(&from, &to, 501).unwrap_err();

        assert_eq!(err, EscrowError::InsufficientFunds.into());
        assert_eq!(from.lamports(), 500);
        assert_eq!(to.lamports(), 0);
    }

    #[test]
    fn a_full_drain_leaves_zero_behind() {
        let system = system_program::ID;
        let from_key = Pubkey::new_unique();
        let to_key = Pubkey::new_unique();
        let mut from_lamports = 500u64;
        let mut to_lamports = 0u64;
        let mut from_data: [u8; 0] = [];
        let mut to_data: [u8; 0] = [];
        let from = wallet(&from_key, &mut from_lamports, &mut from_data, &system);
        let to = wallet(&to_key, &mut to_lamports, &mut to_data, &system);

        transfer_lamports(&from, &to, 500).unwrap();

        assert_eq!(from.lamports(), 0);
        assert_eq!(to.lamports(), 500);
    }
}
