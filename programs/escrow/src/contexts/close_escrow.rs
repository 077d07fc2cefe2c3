use anchor_lang::prelude::*;

use crate::state::{EscrowAccount, ESCROW_SEED};

#[derive(Accounts)]
pub struct CloseEscrow<'info> {
    /// Collects the rent reserve once the record is gone. Any signer may reap
    /// a settled escrow; the deposit itself left the account when the order
    /// settled, so only rent is at stake here
    #[account(mut)]
    pub receiver: Signer<'info>,

    /// Closed and its remaining lamports sent to the receiver, provided the
    /// order has settled and the held amount is zero
    #[account(
        mut,
        close = receiver,
        seeds = [ESCROW_SEED, escrow_account.buyer.as_ref(), escrow_account.seller.as_ref(), escrow_account.order_details.as_bytes()],
        bump = escrow_account.bump
    )]
    pub escrow_account: Account<'info, EscrowAccount>,
}

impl<'info> CloseEscrow<'info> {
    pub fn close(&mut self) -> Result<()> {
        self.escrow_account.assert_closable()?;

        msg!(
            "Escrow for order {} closed",
            self.escrow_account.order_details
        );
        Ok(())
    }
}
