use anchor_lang::error_code;

/// Every rejected precondition maps to exactly one of these variants, so the
/// off-chain client can derive a precise user-facing message from the error
/// name alone.
#[error_code]
pub enum EscrowError {
    // Input validation
    #[msg("Order details exceed the maximum length of 32 bytes")]
    OrderDetailsTooLong,

    #[msg("Escrow amount must be greater than zero")]
    ZeroAmount,

    #[msg("An open escrow already exists for this buyer, seller and order")]
    DuplicateEscrow,

    // Authorization
    #[msg("Signer is neither the buyer nor the seller recorded on the escrow")]
    Unauthorized,

    #[msg("Refunds on failure must be paid to the escrow's buyer")]
    OnlyBuyerAllowed,

    // State transitions
    #[msg("Cannot confirm an escrow that is not in the Initialized state")]
    InvalidStatusForConfirm,

    #[msg("Cannot withdraw funds unless the escrow is in the Confirmed state")]
    InvalidStatusForWithdraw,

    #[msg("Cannot refund an escrow that is not in the Initialized state")]
    InvalidStatusForRefund,

    #[msg("Cannot fail an escrow that has already been settled")]
    InvalidStatusForFail,

    #[msg("Escrow can only be closed once settled and emptied of funds")]
    InvalidStatusForClose,

    // Funds
    #[msg("Funds have already been withdrawn")]
    AlreadyWithdrawn,

    #[msg("Insufficient funds to cover the transfer")]
    InsufficientFunds,
}
