use anchor_lang::prelude::*;

use super::transfer_lamports;
use crate::error::EscrowError;
use crate::state::{EscrowAccount, ESCROW_SEED};

#[derive(Accounts)]
pub struct FailOrder<'info> {
    /// Whichever party is aborting the order. Buyer and seller are equally
    /// entitled to do so while the deposit is still held
    #[account(
        constraint = authority.key() == escrow_account.buyer
            || authority.key() == escrow_account.seller
            @ EscrowError::Unauthorized
    )]
    pub authority: Signer<'info>,

    /// CHECK: Destination for the returned deposit. Pinned to the buyer
    /// recorded on the escrow, so a failure always pays the buyer back no
    /// matter which party triggered it
    #[account(
        mut,
        constraint = buyer.key() == escrow_account.buyer @ EscrowError::OnlyBuyerAllowed
    )]
    pub buyer: AccountInfo<'info>,

    #[account(
        mut,
        seeds = [ESCROW_SEED, escrow_account.buyer.as_ref(), escrow_account.seller.as_ref(), escrow_account.order_details.as_bytes()],
        bump = escrow_account.bump
    )]
    pub escrow_account: Account<'info, EscrowAccount>,
}

impl<'info> FailOrder<'info> {
    /// Marks the order failed and returns the deposit to the buyer's wallet
    pub fn fail(&mut self) -> Result<()> {
        let authority = self.authority.key();
        let released = self.escrow_account.fail(&authority)?;

        transfer_lamports(&self.escrow_account.to_account_info(), &self.buyer, released)?;

        msg!(
            "Order {} failed; {} lamports returned to buyer",
            self.escrow_account.order_details,
            released
        );
        Ok(())
    }
}
