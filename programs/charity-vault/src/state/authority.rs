use anchor_lang::prelude::*;

use crate::state::CampaignVault;

/// Capability an operation requires from its caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Admin,
}

/// Decides whether `caller` may act with `role` on a vault.
pub trait Authority {
    fn allows(&self, vault: &CampaignVault, caller: &Pubkey, role: Role) -> bool;
}

/// Only the campaign owner holds any role.
#[derive(Clone, Copy, Debug, Default)]
pub struct OwnerOnly;

impl Authority for OwnerOnly {
    fn allows(&self, vault: &CampaignVault, caller: &Pubkey, _role: Role) -> bool {
        vault.owner == *caller
    }
}

impl<F> Authority for F
where
    F: Fn(&CampaignVault, &Pubkey, Role) -> bool,
{
    fn allows(&self, vault: &CampaignVault, caller: &Pubkey, role: Role) -> bool {
        self(vault, caller, role)
    }
}
