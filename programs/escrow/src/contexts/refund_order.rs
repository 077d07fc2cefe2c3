use anchor_lang::prelude::*;

use super::transfer_lamports;
use crate::error::EscrowError;
use crate::state::{EscrowAccount, ESCROW_SEED};

#[derive(Accounts)]
pub struct RefundOrder<'info> {
    /// The buyer taking the deposit back before the seller has confirmed.
    /// Receives the lamports
    #[account(mut)]
    pub buyer: Signer<'info>,

    #[account(
        mut,
        has_one = buyer @ EscrowError::Unauthorized,
        seeds = [ESCROW_SEED, escrow_account.buyer.as_ref(), escrow_account.seller.as_ref(), escrow_account.order_details.as_bytes()],
        bump = escrow_account.bump
    )]
    pub escrow_account: Account<'info, EscrowAccount>,
}

impl<'info> RefundOrder<'info> {
    /// Returns the full deposit from the escrow account to the buyer's wallet
    pub fn refund(&mut self) -> Result<()> {
        let buyer = self.buyer.key();
        let released = self.escrow_account.refund(&buyer)?;

        transfer_lamports(
            &self.escrow_account.to_account_info(),
            &self.buyer.to_account_info(),
            released,
        )?;

        msg!("Refunded {} lamports to buyer {}", released, buyer);
        Ok(())
    }
}
