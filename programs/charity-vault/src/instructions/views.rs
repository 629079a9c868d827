use anchor_lang::prelude::*;

use crate::constants::{HISTORY_SEED, PROPOSAL_SEED};
use crate::instructions::load_record;
use crate::state::{Bucket, CampaignVault, HistoryEntry, Proposal};

/// Read-only access for the `get_*` instructions; results travel as return data.
#[derive(Accounts)]
pub struct InspectVault<'info> {
    pub vault: Account<'info, CampaignVault>,
}

impl<'info> InspectVault<'info> {
    pub fn total_funds(&self) -> u64 {
        self.vault.total_funds()
    }

    pub fn bucket(&self, name: &str) -> Option<Bucket> {
        self.vault.bucket(name).cloned()
    }

    pub fn campaign_status(&self) -> bool {
        self.vault.is_active()
    }

    pub fn campaign_owner(&self) -> Pubkey {
        self.vault.owner()
    }

    pub fn all_buckets(&self) -> Vec<String> {
        self.vault
            .bucket_names()
            .iter()
            .map(|name| name.to_string())
            .collect()
    }

    pub fn history_length(&self) -> u64 {
        self.vault.history_len()
    }
}

#[derive(Accounts)]
#[instruction(id: u64)]
pub struct InspectProposal<'info> {
    pub vault: Account<'info, CampaignVault>,

    /// CHECK: May not exist; an empty address reads as `None`
    #[account(
        seeds = [PROPOSAL_SEED, vault.key().as_ref(), &id.to_le_bytes()],
        bump
    )]
    pub proposal: UncheckedAccount<'info>,
}

impl<'info> InspectProposal<'info> {
    pub fn load(&self, id: u64) -> Result<Option<Proposal>> {
        Ok(load_record::<Proposal>(&self.proposal)?.filter(|proposal| proposal.id == id))
    }
}

#[derive(Accounts)]
#[instruction(id: u64)]
pub struct InspectHistory<'info> {
    pub vault: Account<'info, CampaignVault>,

    /// CHECK: May not exist; an empty address reads as `None`
    #[account(
        seeds = [HISTORY_SEED, vault.key().as_ref(), &id.to_le_bytes()],
        bump
    )]
    pub history_entry: UncheckedAccount<'info>,
}

impl<'info> InspectHistory<'info> {
    pub fn load(&self, id: u64) -> Result<Option<HistoryEntry>> {
        Ok(load_record::<HistoryEntry>(&self.history_entry)?.filter(|entry| entry.id == id))
    }
}
