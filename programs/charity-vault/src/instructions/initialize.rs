use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token_interface::{Mint, TokenAccount, TokenInterface}
};

use crate::constants::VAULT_SEED;
use crate::state::{CampaignVault, VaultInitialized};

#[derive(Accounts)]
pub struct InitializeVault<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    pub mint: InterfaceAccount<'info, Mint>,

    #[account(
        init,
        payer = owner,
        space = CampaignVault::INIT_SPACE,
        seeds = [VAULT_SEED, owner.key().as_ref(), mint.key().as_ref()],
        bump
    )]
    pub vault: Account<'info, CampaignVault>,

    #[account(
        init,
        payer = owner,
        associated_token::mint = mint,
        associated_token::authority = vault,
        associated_token::token_program = token_program
    )]
    pub vault_ata: InterfaceAccount<'info, TokenAccount>,

    pub system_program: Program<'info, System>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub token_program: Interface<'info, TokenInterface>
}

impl<'info> InitializeVault<'info> {
    pub fn initialize_vault(&mut self, bumps: &InitializeVaultBumps) -> Result<()> {
        let now = Clock::get()?.unix_timestamp;
        self.vault.set_inner(CampaignVault::new(
            self.owner.key(),
            self.mint.key(),
            now,
            bumps.vault,
        ));

        msg!("Campaign vault opened for mint {}", self.mint.key());
        emit!(VaultInitialized {
            vault: self.vault.key(),
            owner: self.owner.key(),
            mint: self.mint.key(),
            required_approvals: self.vault.required_approvals,
            timestamp: now,
        });
        Ok(())
    }
}
