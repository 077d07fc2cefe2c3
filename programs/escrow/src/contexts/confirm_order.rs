use anchor_lang::prelude::*;

use crate::error::EscrowError;
use crate::state::{EscrowAccount, ESCROW_SEED};

#[derive(Accounts)]
pub struct ConfirmOrder<'info> {
    /// The seller acknowledging the order. `has_one` pins this signer to the
    /// seller recorded on the escrow
    pub seller: Signer<'info>,

    #[account(
        mut,
        has_one = seller @ EscrowError::Unauthorized,
        seeds = [ESCROW_SEED, escrow_account.buyer.as_ref(), escrow_account.seller.as_ref(), escrow_account.order_details.as_bytes()],
        bump = escrow_account.bump
    )]
    pub escrow_account: Account<'info, EscrowAccount>,
}

impl<'info> ConfirmOrder<'info> {
    pub fn confirm(&mut self) -> Result<()> {
        let seller = self.seller.key();
        self.escrow_account.confirm(&seller)?;

        msg!(
            "Order {} confirmed by seller",
            self.escrow_account.order_details
        );
        Ok(())
    }
}
