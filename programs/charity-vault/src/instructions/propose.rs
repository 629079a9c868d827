use anchor_lang::prelude::*;

use crate::constants::{PROPOSAL_SEED, VAULT_SEED};
use crate::state::{CampaignVault, OwnerOnly, Proposal, WithdrawalProposed};

#[derive(Accounts)]
pub struct ProposeWithdrawal<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [VAULT_SEED, vault.owner.as_ref(), vault.mint.as_ref()],
        bump = vault.bump
    )]
    pub vault: Account<'info, CampaignVault>,

    #[account(
        init,
        payer = authority,
        space = Proposal::INIT_SPACE,
        seeds = [PROPOSAL_SEED, vault.key().as_ref(), &vault.next_proposal_id.to_le_bytes()],
        bump
    )]
    pub proposal: Account<'info, Proposal>,

    pub system_program: Program<'info, System>,
}

impl<'info> ProposeWithdrawal<'info> {
    pub fn propose_withdrawal(
        &mut self,
        amount: u64,
        bucket: String,
        recipient: Pubkey,
        bumps: &ProposeWithdrawalBumps,
    ) -> Result<u64> {
        let proposal = self.vault.propose_withdrawal(
            &OwnerOnly,
            &self.authority.key(),
            amount,
            &bucket,
            recipient,
        )?;
        let proposal_id = proposal.id;

        msg!("Proposal {} requests {} from {}", proposal_id, amount, bucket);
        emit!(WithdrawalProposed {
            vault: self.vault.key(),
            proposal_id,
            bucket: proposal.bucket,
            amount,
            recipient,
            required_approvals: proposal.required_approvals,
            timestamp: Clock::get()?.unix_timestamp
        });
        self.proposal.set_inner(Proposal {
            bump: bumps.proposal,
            ..proposal
        });
        Ok(proposal_id)
    }
}
