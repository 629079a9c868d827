use anchor_lang::prelude::*;

use crate::constants::{DEFAULT_REQUIRED_APPROVALS, MAX_BUCKETS, MAX_REQUIRED_APPROVALS, VAULT_SEED};
use crate::state::{
    ApprovalOutcome, Authority, Bucket, BucketAllocation, BucketName, HistoryEntry, Proposal,
    ProposalStatus, Role, TransferRecord, VaultError,
};

/// Campaign ledger. Every operation validates all of its preconditions
/// before touching any field. History entries and proposals live in their
/// own accounts, so the vault itself never grows past `INIT_SPACE`.
#[account]
#[derive(Debug)]
pub struct CampaignVault {
    pub owner: Pubkey,
    pub mint: Pubkey,               // Token the campaign accepts
    pub active: bool,
    pub total_funds: u64,           // Includes allocation dust
    pub required_approvals: u8,     // Threshold for new proposals
    pub max_buckets: u8,
    pub num_buckets: u8,
    pub next_proposal_id: u64,
    pub next_history_id: u64,
    pub created_at: i64,
    pub bump: u8,
    pub buckets: Vec<Bucket>,       // Empty until initialized, then exactly MAX_BUCKETS
}

impl Space for CampaignVault {
    const INIT_SPACE: usize = 8      // Discriminator
        + 32    // owner: Pubkey
        + 32    // mint: Pubkey
        + 1     // active: bool
        + 8     // total_funds: u64
        + 1     // required_approvals: u8
        + 1     // max_buckets: u8
        + 1     // num_buckets: u8
        + 8     // next_proposal_id: u64
        + 8     // next_history_id: u64
        + 8     // created_at: i64
        + 1     // bump: u8
        + 4 + MAX_BUCKETS as usize * Bucket::INIT_SPACE; // buckets: Vec<Bucket>
}

impl CampaignVault {
    pub fn new(owner: Pubkey, mint: Pubkey, created_at: i64, bump: u8) -> Self {
        Self {
            owner,
            mint,
            active: true,
            total_funds: 0,
            required_approvals: DEFAULT_REQUIRED_APPROVALS,
            max_buckets: MAX_BUCKETS,
            num_buckets: 0,
            next_proposal_id: 0,
            next_history_id: 0,
            created_at,
            bump,
            buckets: Vec::with_capacity(MAX_BUCKETS as usize),
        }
    }

    pub fn address(owner: &Pubkey, mint: &Pubkey) -> (Pubkey, u8) {
        Pubkey::find_program_address(&[VAULT_SEED, owner.as_ref(), mint.as_ref()], &crate::ID)
    }

    /// Seeds the vault PDA signs token transfers with.
    pub fn signer_seeds(&self) -> [&[u8]; 4] {
        [
            VAULT_SEED,
            self.owner.as_ref(),
            self.mint.as_ref(),
            std::slice::from_ref(&self.bump),
        ]
    }

    pub fn initialize_buckets(
        &mut self,
        authority: &impl Authority,
        caller: &Pubkey,
        split: BucketAllocation,
    ) -> Result<()> {
        require!(
            authority.allows(self, caller, Role::Admin),
            VaultError::NotAuthorized
        );
        require!(split.total() == 100, VaultError::InvalidPercent);
        require!(
            self.num_buckets < self.max_buckets,
            VaultError::MaxBucketsExceeded
        );

        self.buckets = BucketName::ALL
            .into_iter()
            .zip(split.percents())
            .map(|(name, percent)| Bucket::new(name, percent))
            .collect();
        self.num_buckets = MAX_BUCKETS;
        Ok(())
    }

    /// Books a donation and credits each bucket its floored share. Works
    /// before buckets exist; the whole amount then only lands in `total_funds`.
    /// Returns the history entry to store under `next_history_id` as it was
    /// before the call.
    pub fn receive_donation(
        &mut self,
        donor: &Pubkey,
        amount: u64,
        timestamp: i64,
    ) -> Result<(HistoryEntry, TransferRecord)> {
        require!(self.active, VaultError::CampaignClosed);
        require!(amount > 0, VaultError::InvalidAmount);

        let total_funds = self
            .total_funds
            .checked_add(amount)
            .ok_or(VaultError::ArithmeticOverflow)?;
        let history_id = self.next_history_id;
        let next_history_id = history_id
            .checked_add(1)
            .ok_or(VaultError::ArithmeticOverflow)?;
        let shares = self
            .buckets
            .iter()
            .map(|bucket| bucket.share_of(amount))
            .collect::<Result<Vec<u64>>>()?;

        self.total_funds = total_funds;
        self.next_history_id = next_history_id;
        for (bucket, share) in self.buckets.iter_mut().zip(shares) {
            bucket.balance += i128::from(share);
        }

        let entry = HistoryEntry {
            id: history_id,
            timestamp,
            amount,
            bucket: None,
            donor: *donor,
            bump: 0,
        };
        Ok((entry, TransferRecord::inbound(*donor, amount)))
    }

    /// Opens a withdrawal proposal under `next_proposal_id`. Nothing is
    /// reserved: several pending proposals may together exceed the bucket
    /// balance.
    pub fn propose_withdrawal(
        &mut self,
        authority: &impl Authority,
        caller: &Pubkey,
        amount: u64,
        bucket: &str,
        recipient: Pubkey,
    ) -> Result<Proposal> {
        require!(self.active, VaultError::CampaignClosed);
        require!(
            authority.allows(self, caller, Role::Admin),
            VaultError::NotAuthorized
        );
        require!(amount > 0, VaultError::InvalidAmount);
        let balance = self
            .bucket(bucket)
            .ok_or(VaultError::BucketNotFound)?
            .balance;
        require!(i128::from(amount) <= balance, VaultError::InsufficientBalance);
        let bucket: BucketName = bucket.parse()?;

        let id = self.next_proposal_id;
        self.next_proposal_id = id.checked_add(1).ok_or(VaultError::ArithmeticOverflow)?;
        Ok(Proposal {
            id,
            amount,
            bucket,
            recipient,
            proposer: *caller,
            approvals: 0,
            required_approvals: self.required_approvals,
            status: ProposalStatus::Pending,
            bump: 0,
        })
    }

    /// Counts one approval on `proposal`, `None` when no proposal exists
    /// under the requested id. A resolved proposal and a foreign caller are
    /// both reported as `NotAuthorized`. Approvals are not tracked per
    /// approver, so repeated calls from one key each count.
    pub fn approve_proposal(
        &mut self,
        authority: &impl Authority,
        caller: &Pubkey,
        proposal: Option<&mut Proposal>,
    ) -> Result<ApprovalOutcome> {
        let proposal = proposal.ok_or(VaultError::WithdrawalNotApproved)?;
        require!(
            !proposal.is_executed() && authority.allows(self, caller, Role::Admin),
            VaultError::NotAuthorized
        );

        let approvals = proposal
            .approvals
            .checked_add(1)
            .ok_or(VaultError::ArithmeticOverflow)?;
        if approvals < proposal.required_approvals {
            proposal.approvals = approvals;
            return Ok(ApprovalOutcome::Pending { approvals });
        }

        let bucket_index = self
            .buckets
            .iter()
            .position(|b| b.name == proposal.bucket)
            .ok_or(VaultError::BucketNotFound)?;
        let total_funds = self
            .total_funds
            .checked_sub(proposal.amount)
            .ok_or(VaultError::ArithmeticOverflow)?;

        proposal.approvals = approvals;
        proposal.status = ProposalStatus::Executed;
        // No coverage re-check: an over-committed bucket goes negative.
        self.buckets[bucket_index].balance -= i128::from(proposal.amount);
        self.total_funds = total_funds;
        Ok(ApprovalOutcome::Executed(TransferRecord::outbound(
            proposal.recipient,
            proposal.amount,
        )))
    }

    /// Permanently stops donations and new proposals.
    pub fn close_campaign(&mut self, authority: &impl Authority, caller: &Pubkey) -> Result<()> {
        require!(
            authority.allows(self, caller, Role::Admin),
            VaultError::NotAuthorized
        );
        self.active = false;
        Ok(())
    }

    /// Applies to proposals created afterwards; pending ones keep their snapshot.
    pub fn set_required_approvals(
        &mut self,
        authority: &impl Authority,
        caller: &Pubkey,
        required_approvals: u8,
    ) -> Result<()> {
        require!(
            authority.allows(self, caller, Role::Admin),
            VaultError::NotAuthorized
        );
        require!(
            (1..=MAX_REQUIRED_APPROVALS).contains(&required_approvals),
            VaultError::InvalidAmount
        );
        self.required_approvals = required_approvals;
        Ok(())
    }

    pub fn total_funds(&self) -> u64 {
        self.total_funds
    }

    pub fn bucket(&self, name: &str) -> Option<&Bucket> {
        self.buckets.iter().find(|b| b.name.as_str() == name)
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn owner(&self) -> Pubkey {
        self.owner
    }

    pub fn bucket_names(&self) -> [&'static str; 5] {
        BucketName::ALL.map(|name| name.as_str())
    }

    pub fn history_len(&self) -> u64 {
        self.next_history_id
    }
}
