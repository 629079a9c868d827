use anchor_lang::prelude::*;
use anchor_spl::token_interface::{
    transfer_checked, Mint, TokenAccount, TokenInterface, TransferChecked
};

use crate::constants::{HISTORY_SEED, VAULT_SEED};
use crate::state::{CampaignVault, DonationReceived, HistoryEntry};

#[derive(Accounts)]
pub struct ReceiveDonation<'info> {
    #[account(mut)]
    pub donor: Signer<'info>,

    #[account(
        mut,
        seeds = [VAULT_SEED, vault.owner.as_ref(), vault.mint.as_ref()],
        bump = vault.bump
    )]
    pub vault: Account<'info, CampaignVault>,

    #[account(
        init,
        payer = donor,
        space = HistoryEntry::INIT_SPACE,
        seeds = [HISTORY_SEED, vault.key().as_ref(), &vault.next_history_id.to_le_bytes()],
        bump
    )]
    pub history_entry: Account<'info, HistoryEntry>,

    #[account(address = vault.mint)]
    pub mint: InterfaceAccount<'info, Mint>,

    #[account(
        mut,
        constraint = donor_ata.owner == donor.key(),
        constraint = donor_ata.mint == vault.mint
    )]
    pub donor_ata: InterfaceAccount<'info, TokenAccount>,

    #[account(
        mut,
        associated_token::mint = mint,
        associated_token::authority = vault,
        associated_token::token_program = token_program
    )]
    pub vault_ata: InterfaceAccount<'info, TokenAccount>,

    pub system_program: Program<'info, System>,
    pub token_program: Interface<'info, TokenInterface>
}

impl<'info> ReceiveDonation<'info> {
    pub fn receive_donation(&mut self, amount: u64, bumps: &ReceiveDonationBumps) -> Result<()> {
        let now = Clock::get()?.unix_timestamp;
        let (entry, record) = self.vault.receive_donation(&self.donor.key(), amount, now)?;
        let history_id = entry.id;
        self.history_entry.set_inner(HistoryEntry {
            bump: bumps.history_entry,
            ..entry
        });

        let cpi_accounts = TransferChecked {
            from: self.donor_ata.to_account_info(),
            mint: self.mint.to_account_info(),
            to: self.vault_ata.to_account_info(),
            authority: self.donor.to_account_info(),
        };
        let cpi_ctx = CpiContext::new(self.token_program.to_account_info(), cpi_accounts);
        transfer_checked(cpi_ctx, record.amount, self.mint.decimals)?;

        emit!(DonationReceived {
            vault: self.vault.key(),
            donor: self.donor.key(),
            amount,
            history_id,
            total_funds: self.vault.total_funds,
            timestamp: now
        });
        Ok(())
    }
}
