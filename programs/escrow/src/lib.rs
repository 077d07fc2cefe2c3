#![allow(clippy::result_large_err)]
#![allow(unexpected_cfgs)]

use anchor_lang::prelude::*;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

pub mod state;
pub use state::*;
pub mod contexts;
pub use contexts::*;
pub mod error;
pub use error::*;


#[program]
pub mod escrow {
    use super::*;

    /// Opens an escrow for an order between the signing buyer and the named
    /// seller, then moves the buyer's deposit into it
    pub fn initialize(ctx: Context<Initialize>, order_details: String, amount: u64) -> Result<()> {
        ctx.accounts.save_escrow(order_details, amount, &ctx.bumps)?;
        ctx.accounts.deposit(amount)
    }

    /// Seller signs off on the order, committing the deposit to an eventual
    /// withdrawal and ruling out a refund
    pub fn confirm_order(ctx: Context<ConfirmOrder>) -> Result<()> {
        ctx.accounts.confirm()
    }

    /// Pays the deposit of a confirmed order out to the seller
    pub fn withdraw_funds(ctx: Context<WithdrawFunds>) -> Result<()> {
        ctx.accounts.withdraw()
    }

    /// Returns the deposit to the buyer while the order is still unconfirmed
    pub fn refund_order(ctx: Context<RefundOrder>) -> Result<()> {
        ctx.accounts.refund()
    }

    /// Aborts an unsettled order and sends the deposit back to the buyer;
    /// either party may call this
    pub fn fail_order(ctx: Context<FailOrder>) -> Result<()> {
        ctx.accounts.fail()
    }

    /// Deallocates a settled escrow account and hands its rent reserve to the
    /// signing receiver
    pub fn close_escrow(ctx: Context<CloseEscrow>) -> Result<()> {
        ctx.accounts.close()
    }
}
