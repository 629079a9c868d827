#![allow(unexpected_cfgs)]
use anchor_lang::prelude::*;

pub mod constants;
pub mod instructions;
pub mod state;

use crate::instructions::*;
use crate::state::*;

declare_id!("CtYYAc9uHH88a44pmYWGDTBAvEjL7mm7xqnoZZCYTBF8");

#[program]
pub mod charity_vault {
    use super::*;

    pub fn initialize_vault(ctx: Context<InitializeVault>) -> Result<()> {
        ctx.accounts.initialize_vault(&ctx.bumps)?;
        Ok(())
    }

    pub fn initialize_buckets(
        ctx: Context<ManageCampaign>,
        projects: u8,
        operations: u8,
        reserves: u8,
        emergency: u8,
        incentives: u8,
    ) -> Result<()> {
        ctx.accounts.initialize_buckets(BucketAllocation {
            projects,
            operations,
            reserves,
            emergency,
            incentives,
        })?;
        Ok(())
    }

    pub fn receive_donation(ctx: Context<ReceiveDonation>, amount: u64) -> Result<()> {
        ctx.accounts.receive_donation(amount, &ctx.bumps)?;
        Ok(())
    }

    pub fn propose_withdrawal(ctx: Context<ProposeWithdrawal>, amount: u64, bucket: String, recipient: Pubkey) -> Result<u64> {
        ctx.accounts.propose_withdrawal(amount, bucket, recipient, &ctx.bumps)
    }

    pub fn approve_proposal(ctx: Context<ApproveProposal>, proposal_id: u64) -> Result<()> {
        ctx.accounts.approve_proposal(proposal_id)?;
        Ok(())
    }

    pub fn close_campaign(ctx: Context<ManageCampaign>) -> Result<()> {
        ctx.accounts.close_campaign()?;
        Ok(())
    }

    pub fn set_required_approvals(ctx: Context<ManageCampaign>, required_approvals: u8) -> Result<()> {
        ctx.accounts.set_required_approvals(required_approvals)?;
        Ok(())
    }

    pub fn get_total_funds(ctx: Context<InspectVault>) -> Result<u64> {
        Ok(ctx.accounts.total_funds())
    }

    pub fn get_bucket(ctx: Context<InspectVault>, name: String) -> Result<Option<Bucket>> {
        Ok(ctx.accounts.bucket(&name))
    }

    pub fn get_campaign_status(ctx: Context<InspectVault>) -> Result<bool> {
        Ok(ctx.accounts.campaign_status())
    }

    pub fn get_campaign_owner(ctx: Context<InspectVault>) -> Result<Pubkey> {
        Ok(ctx.accounts.campaign_owner())
    }

    pub fn get_all_buckets(ctx: Context<InspectVault>) -> Result<Vec<String>> {
        Ok(ctx.accounts.all_buckets())
    }

    pub fn get_proposal(ctx: Context<InspectProposal>, id: u64) -> Result<Option<Proposal>> {
        ctx.accounts.load(id)
    }

    pub fn get_history_length(ctx: Context<InspectVault>) -> Result<u64> {
        Ok(ctx.accounts.history_length())
    }

    pub fn get_history_entry(ctx: Context<InspectHistory>, id: u64) -> Result<Option<HistoryEntry>> {
        ctx.accounts.load(id)
    }
}
