use anchor_lang::prelude::*;

// Codes are part of the external contract: 100..=109 must never be renumbered.
// 100..=103 share their numbers with Anchor's instruction errors
// (InstructionMissing, InstructionFallbackNotFound, InstructionDidNotDeserialize,
// InstructionDidNotSerialize). Clients tell them apart by the error name or by
// whether the failure came from the handler, not by the number alone.
#[error_code(offset = 100)]
pub enum VaultError {

    #[msg("Caller is not authorized")]
    NotAuthorized,

    #[msg("Amount is invalid")]
    InvalidAmount,

    // Reserved, no instruction raises it.
    #[msg("Allocation failed")]
    AllocationFailed,

    #[msg("Withdrawal proposal not found")]
    WithdrawalNotApproved,

    #[msg("Campaign is closed")]
    CampaignClosed,

    #[msg("Bucket percentages must sum to 100")]
    InvalidPercent,

    #[msg("Bucket not found")]
    BucketNotFound,

    #[msg("Insufficient bucket balance")]
    InsufficientBalance,

    #[msg("Invalid bucket name")]
    InvalidBucketName,

    #[msg("Maximum number of buckets exceeded")]
    MaxBucketsExceeded,

    #[msg("Math overflow error")]
    ArithmeticOverflow,
}
