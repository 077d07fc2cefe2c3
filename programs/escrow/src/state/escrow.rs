use anchor_lang::prelude::*;

use crate::error::EscrowError;

/// Seed prefix for the escrow PDA. The full derivation is
/// `["escrow", buyer, seller, order_details]`, which doubles as the record's
/// primary key: one open escrow per (buyer, seller, order) triple.
pub const ESCROW_SEED: &[u8] = b"escrow";

/// Longest accepted `order_details`, in bytes. Must stay in sync with the
/// `#[max_len]` attribute on [`EscrowAccount::order_details`].
pub const MAX_ORDER_DETAILS_LEN: usize = 32;

/// State held for one escrowed order. The account's lamport balance is the
/// custodial vault: it always equals `amount` plus the rent-exemption
/// reserve, and `amount` reaches zero in the same transaction that pays the
/// funds out.
#[account]
#[derive(InitSpace)]
pub struct EscrowAccount {
    /// The depositing party. Recorded at creation, never changed.
    pub buyer: Pubkey,
    /// The party expected to fulfill the order. Recorded at creation, never
    /// changed.
    pub seller: Pubkey,
    /// Opaque off-chain order identifier, also part of the PDA seeds.
    #[max_len(32)]
    pub order_details: String,
    /// Lamports currently held in trust. Zero once settled.
    pub amount: u64,
    pub status: EscrowStatus,
    /// Cached bump for the escrow PDA.
    pub bump: u8,
}

/// Lifecycle discriminant. `Initialized` may move to `Confirmed`, `Refunded`
/// or `Failed`; `Confirmed` may move to `Completed` or `Failed`. The last
/// three are terminal: funds have left the escrow and only `close_escrow`
/// may touch the record afterwards.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, InitSpace)]
pub enum EscrowStatus {
    Initialized,
    Confirmed,
    Completed,
    Refunded,
    Failed,
}

impl EscrowAccount {
    /// Validates the creation arguments and builds the record in its
    /// `Initialized` state. The deposit itself is moved by the caller.
    pub fn new(
        buyer: Pubkey,
        seller: Pubkey,
        order_details: String,
        amount: u64,
        bump: u8,
    ) -> std::result::Result<Self, EscrowError> {
        if order_details.len() > MAX_ORDER_DETAILS_LEN {
            return Err(EscrowError::OrderDetailsTooLong);
        }
        if amount == 0 {
            return Err(EscrowError::ZeroAmount);
        }
        Ok(Self {
            buyer,
            seller,
            order_details,
            amount,
            status: EscrowStatus::Initialized,
            bump,
        })
    }

    /// Rejects re-initialization of an open record. A freshly created
    /// account deserializes with every field zeroed, so a recorded buyer
    /// marks the slot as occupied; the buyer signs `initialize`, so the
    /// default pubkey can never belong to a real record.
    pub fn assert_vacant(&self) -> std::result::Result<(), EscrowError> {
        if self.buyer != Pubkey::default() {
            return Err(EscrowError::DuplicateEscrow);
        }
        Ok(())
    }

    /// Seller acknowledges the order. Locks the deposit in favor of an
    /// eventual withdrawal: refunds are no longer possible afterwards.
    pub fn confirm(&mut self, authority: &Pubkey) -> std::result::Result<(), EscrowError> {
        if *authority != self.seller {
            return Err(EscrowError::Unauthorized);
        }
        if self.status != EscrowStatus::Initialized {
            return Err(EscrowError::InvalidStatusForConfirm);
        }
        self.status = EscrowStatus::Confirmed;
        Ok(())
    }

    /// Releases the held amount to the seller once the order is confirmed.
    /// Returns the lamports the caller must move out of the account.
    pub fn withdraw(&mut self, authority: &Pubkey) -> std::result::Result<u64, EscrowError> {
        if *authority != self.seller {
            return Err(EscrowError::Unauthorized);
        }
        if self.status != EscrowStatus::Confirmed {
            return Err(EscrowError::InvalidStatusForWithdraw);
        }
        if self.amount == 0 {
            return Err(EscrowError::AlreadyWithdrawn);
        }
        let released = self.amount;
        self.amount = 0;
        self.status = EscrowStatus::Completed;
        Ok(released)
    }

    /// Returns the deposit to the buyer. Only legal strictly before the
    /// seller has confirmed.
    pub fn refund(&mut self, authority: &Pubkey) -> std::result::Result<u64, EscrowError> {
        if *authority != self.buyer {
            return Err(EscrowError::Unauthorized);
        }
        if self.status != EscrowStatus::Initialized {
            return Err(EscrowError::InvalidStatusForRefund);
        }
        if self.amount == 0 {
            return Err(EscrowError::ZeroAmount);
        }
        let released = self.amount;
        self.amount = 0;
        self.status = EscrowStatus::Refunded;
        Ok(released)
    }

    /// Marks the order failed. Either party may trigger it while funds are
    /// still held, and the deposit always returns to the buyer no matter who
    /// pulled the trigger.
    pub fn fail(&mut self, authority: &Pubkey) -> std::result::Result<u64, EscrowError> {
        if *authority != self.buyer && *authority != self.seller {
            return Err(EscrowError::Unauthorized);
        }
        if !matches!(self.status, EscrowStatus::Initialized | EscrowStatus::Confirmed) {
            return Err(EscrowError::InvalidStatusForFail);
        }
        if self.amount == 0 {
            return Err(EscrowError::ZeroAmount);
        }
        let released = self.amount;
        self.amount = 0;
        self.status = EscrowStatus::Failed;
        Ok(released)
    }

    /// A record may be closed only once every lamport of the deposit has
    /// been paid out and the status is terminal, so closing can never
    /// discard unmoved value.
    pub fn assert_closable(&self) -> std::result::Result<(), EscrowError> {
        if self.amount != 0 || !self.is_terminal() {
            return Err(EscrowError::InvalidStatusForClose);
        }
        Ok(())
    }

    pub fn is_terminal(&self) -> bool {
        matches!(
            self.status,
            EscrowStatus::Completed | EscrowStatus::Refunded | EscrowStatus::Failed
        )
    }
}
