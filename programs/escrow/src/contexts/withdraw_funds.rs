use anchor_lang::prelude::*;

use super::transfer_lamports;
use crate::error::EscrowError;
use crate::state::{EscrowAccount, ESCROW_SEED};

#[derive(Accounts)]
pub struct WithdrawFunds<'info> {
    /// The seller collecting the deposit of a confirmed order. Receives the
    /// lamports, so the account must be writable
    #[account(mut)]
    pub seller: Signer<'info>,

    #[account(
        mut,
        has_one = seller @ EscrowError::Unauthorized,
        seeds = [ESCROW_SEED, escrow_account.buyer.as_ref(), escrow_account.seller.as_ref(), escrow_account.order_details.as_bytes()],
        bump = escrow_account.bump
    )]
    pub escrow_account: Account<'info, EscrowAccount>,
}

impl<'info> WithdrawFunds<'info> {
    /// Completes the order and pays the held amount out of the escrow account
    /// into the seller's wallet
    pub fn withdraw(&mut self) -> Result<()> {
        let seller = self.seller.key();
        let released = self.escrow_account.withdraw(&seller)?;

        transfer_lamports(
            &self.escrow_account.to_account_info(),
            &self.seller.to_account_info(),
            released,
        )?;

        msg!("Released {} lamports to seller {}", released, seller);
        Ok(())
    }
}
