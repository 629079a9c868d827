use anchor_lang::prelude::*;

use crate::state::BucketName;

#[event]
pub struct VaultInitialized {
    pub vault: Pubkey,
    pub owner: Pubkey,
    pub mint: Pubkey,
    pub required_approvals: u8,
    pub timestamp: i64,
}

#[event]
pub struct BucketsInitialized {
    pub vault: Pubkey,
    pub percents: [u8; 5],
    pub timestamp: i64,
}

#[event]
pub struct DonationReceived {
    pub vault: Pubkey,
    pub donor: Pubkey,
    pub amount: u64,
    pub history_id: u64,
    pub total_funds: u64,
    pub timestamp: i64,
}

#[event]
pub struct WithdrawalProposed {
    pub vault: Pubkey,
    pub proposal_id: u64,
    pub bucket: BucketName,
    pub amount: u64,
    pub recipient: Pubkey,
    pub required_approvals: u8,
    pub timestamp: i64,
}

#[event]
pub struct ProposalApproved {
    pub vault: Pubkey,
    pub proposal_id: u64,
    pub approver: Pubkey,
    pub approvals: u8,
    pub timestamp: i64,
}

#[event]
pub struct ProposalExecuted {
    pub vault: Pubkey,
    pub proposal_id: u64,
    pub recipient: Pubkey,
    pub amount: u64,
    pub remaining_funds: u64,
    pub timestamp: i64,
}

#[event]
pub struct CampaignClosed {
    pub vault: Pubkey,
    pub total_funds: u64,
    pub timestamp: i64,
}

#[event]
pub struct RequiredApprovalsUpdated {
    pub vault: Pubkey,
    pub required_approvals: u8,
    pub timestamp: i64,
}
