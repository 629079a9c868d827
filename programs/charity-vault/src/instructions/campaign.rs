use anchor_lang::prelude::*;

use crate::constants::VAULT_SEED;
use crate::state::{
    BucketAllocation, BucketsInitialized, CampaignClosed, CampaignVault, OwnerOnly,
    RequiredApprovalsUpdated,
};

/// Owner-gated configuration of an existing vault. The caller is checked by
/// the vault itself so a wrong signer surfaces as `NotAuthorized`.
#[derive(Accounts)]
pub struct ManageCampaign<'info> {
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [VAULT_SEED, vault.owner.as_ref(), vault.mint.as_ref()],
        bump = vault.bump
    )]
    pub vault: Account<'info, CampaignVault>,
}

impl<'info> ManageCampaign<'info> {
    pub fn initialize_buckets(&mut self, split: BucketAllocation) -> Result<()> {
        self.vault
            .initialize_buckets(&OwnerOnly, &self.authority.key(), split)?;

        msg!("Buckets initialized: {:?}", split.percents());
        emit!(BucketsInitialized {
            vault: self.vault.key(),
            percents: split.percents(),
            timestamp: Clock::get()?.unix_timestamp
        });
        Ok(())
    }

    pub fn close_campaign(&mut self) -> Result<()> {
        self.vault.close_campaign(&OwnerOnly, &self.authority.key())?;

        msg!("Campaign closed with {} in custody", self.vault.total_funds);
        emit!(CampaignClosed {
            vault: self.vault.key(),
            total_funds: self.vault.total_funds,
            timestamp: Clock::get()?.unix_timestamp
        });
        Ok(())
    }

    pub fn set_required_approvals(&mut self, required_approvals: u8) -> Result<()> {
        self.vault
            .set_required_approvals(&OwnerOnly, &self.authority.key(), required_approvals)?;

        emit!(RequiredApprovalsUpdated {
            vault: self.vault.key(),
            required_approvals,
            timestamp: Clock::get()?.unix_timestamp
        });
        Ok(())
    }
}
