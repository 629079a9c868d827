use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token_interface::{transfer_checked, Mint, TokenAccount, TokenInterface, TransferChecked}
};

use crate::constants::{PROPOSAL_SEED, VAULT_SEED};
use crate::instructions::{load_record, store_record};
use crate::state::{
    ApprovalOutcome, CampaignVault, OwnerOnly, Proposal, ProposalApproved, ProposalExecuted,
    VaultError,
};

#[derive(Accounts)]
#[instruction(proposal_id: u64)]
pub struct ApproveProposal<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [VAULT_SEED, vault.owner.as_ref(), vault.mint.as_ref()],
        bump = vault.bump
    )]
    pub vault: Account<'info, CampaignVault>,

    /// CHECK: Loaded by hand so an id nothing was proposed under fails with
    /// `WithdrawalNotApproved` instead of an account error
    #[account(
        mut,
        seeds = [PROPOSAL_SEED, vault.key().as_ref(), &proposal_id.to_le_bytes()],
        bump
    )]
    pub proposal: UncheckedAccount<'info>,

    /// CHECK: Only receives tokens; compared against the proposal's recipient
    pub recipient: UncheckedAccount<'info>,

    #[account(address = vault.mint)]
    pub mint: InterfaceAccount<'info, Mint>,

    #[account(
        mut,
        associated_token::mint = mint,
        associated_token::authority = vault,
        associated_token::token_program = token_program
    )]
    pub vault_ata: InterfaceAccount<'info, TokenAccount>,

    #[account(
        init_if_needed,
        payer = authority,
        associated_token::mint = mint,
        associated_token::authority = recipient,
        associated_token::token_program = token_program
    )]
    pub recipient_ata: InterfaceAccount<'info, TokenAccount>,

    pub system_program: Program<'info, System>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub token_program: Interface<'info, TokenInterface>
}

impl<'info> ApproveProposal<'info> {
    pub fn approve_proposal(&mut self, proposal_id: u64) -> Result<()> {
        let now = Clock::get()?.unix_timestamp;
        let mut proposal = load_record::<Proposal>(&self.proposal)?;
        if let Some(proposal) = &proposal {
            require!(
                proposal.pays(&self.recipient.key()),
                anchor_lang::error::ErrorCode::RequireKeysEqViolated
            );
        }

        let outcome = self
            .vault
            .approve_proposal(&OwnerOnly, &self.authority.key(), proposal.as_mut())?;
        let proposal = proposal.ok_or(VaultError::WithdrawalNotApproved)?;
        store_record(&self.proposal, &proposal)?;

        emit!(ProposalApproved {
            vault: self.vault.key(),
            proposal_id,
            approver: self.authority.key(),
            approvals: proposal.approvals,
            timestamp: now
        });
        let record = match outcome {
            ApprovalOutcome::Pending { approvals } => {
                msg!("Proposal {} has {} approval(s)", proposal_id, approvals);
                return Ok(());
            }
            ApprovalOutcome::Executed(record) => record,
        };

        let seeds = self.vault.signer_seeds();
        let signer = &[&seeds[..]];

        let cpi_accounts = TransferChecked {
            from: self.vault_ata.to_account_info(),
            mint: self.mint.to_account_info(),
            to: self.recipient_ata.to_account_info(),
            authority: self.vault.to_account_info(),
        };
        let cpi_ctx = CpiContext::new_with_signer(
            self.token_program.to_account_info(),
            cpi_accounts,
            signer,
        );
        transfer_checked(cpi_ctx, record.amount, self.mint.decimals)?;

        msg!("Proposal {} executed: {} released", proposal_id, record.amount);
        emit!(ProposalExecuted {
            vault: self.vault.key(),
            proposal_id,
            recipient: self.recipient.key(),
            amount: record.amount,
            remaining_funds: self.vault.total_funds,
            timestamp: now
        });
        Ok(())
    }
}
