use anchor_lang::{prelude::*, system_program};

use crate::error::EscrowError;
use crate::state::{EscrowAccount, ESCROW_SEED};

/// Accounts for opening an escrow: the buyer funds it, the seller is only
/// named, and the escrow account itself doubles as the vault for the deposit
#[derive(Accounts)]
#[instruction(order_details: String)]
pub struct Initialize<'info> {
    /// The buyer opening the order. Signs the transaction, pays the rent for
    /// the escrow account and supplies the deposit
    #[account(mut)]
    pub buyer: Signer<'info>,

    /// CHECK: Only the address is recorded on the escrow; the seller does not
    /// sign here and the account is never read or written
    pub seller: AccountInfo<'info>,

    /// The escrow record and vault in one. Its address derives from the two
    /// parties plus the order identifier, so a given order can only ever live
    /// at one address. `init_if_needed` lets the address of a settled and
    /// closed order be reused; re-opening a live one is rejected in the
    /// handler instead
    #[account(
        init_if_needed,
        payer = buyer,
        space = 8 + EscrowAccount::INIT_SPACE,
        seeds = [ESCROW_SEED, buyer.key().as_ref(), seller.key().as_ref(), order_details.as_bytes()],
        bump
    )]
    pub escrow_account: Account<'info, EscrowAccount>,

    pub system_program: Program<'info, System>,
}

impl<'info> Initialize<'info> {
    /// Validates the order arguments and writes the fresh record. Fails with
    /// `DuplicateEscrow` when the account already holds a live order
    pub fn save_escrow(
        &mut self,
        order_details: String,
        amount: u64,
        bumps: &InitializeBumps,
    ) -> Result<()> {
        self.escrow_account.assert_vacant()?;

        let escrow = EscrowAccount::new(
            self.buyer.key(),
            self.seller.key(),
            order_details,
            amount,
            bumps.escrow_account,
        )?;
        self.escrow_account.set_inner(escrow);
        Ok(())
    }

    /// Moves the deposit from the buyer's wallet into the escrow account
    pub fn deposit(&mut self, amount: u64) -> Result<()> {
        // Rent for the account was already debited during account creation,
        // so the remaining balance must cover the full deposit
        require!(
            self.buyer.lamports() >= amount,
            EscrowError::InsufficientFunds
        );

        let cpi_accounts = system_program::Transfer {
            from: self.buyer.to_account_info(),
            to: self.escrow_account.to_account_info(),
        };
        let cpi_ctx = CpiContext::new(self.system_program.to_account_info(), cpi_accounts);
        system_program::transfer(cpi_ctx, amount)?;

        msg!(
            "Escrow for order {} funded with {} lamports",
            self.escrow_account.order_details,
            amount
        );
        Ok(())
    }
}
