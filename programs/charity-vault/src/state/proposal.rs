use anchor_lang::prelude::*;

use crate::constants::PROPOSAL_SEED;
use crate::state::{BucketName, TransferRecord};

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProposalStatus {
    Pending,
    Executed,
}

/// Withdrawal request, stored at `["proposal", vault, id]`.
#[account]
#[derive(Debug, PartialEq, Eq)]
pub struct Proposal {
    pub id: u64,
    pub amount: u64,
    pub bucket: BucketName,
    pub recipient: Pubkey,
    pub proposer: Pubkey,
    pub approvals: u8,
    pub required_approvals: u8,  // Snapshot of the vault threshold at creation
    pub status: ProposalStatus,
    pub bump: u8,
}

impl Space for Proposal {
    const INIT_SPACE: usize = 8      // Discriminator
        + 8     // id: u64
        + 8     // amount: u64
        + 1     // bucket: BucketName
        + 32    // recipient: Pubkey
        + 32    // proposer: Pubkey
        + 1     // approvals: u8
        + 1     // required_approvals: u8
        + 1     // status: ProposalStatus
        + 1;    // bump: u8
}

impl Proposal {
    pub fn address(vault: &Pubkey, id: u64) -> (Pubkey, u8) {
        Pubkey::find_program_address(
            &[PROPOSAL_SEED, vault.as_ref(), &id.to_le_bytes()],
            &crate::ID,
        )
    }

    pub fn is_executed(&self) -> bool {
        self.status == ProposalStatus::Executed
    }

    /// Whether `account` is the one this proposal releases funds to.
    pub fn pays(&self, account: &Pubkey) -> bool {
        self.recipient == *account
    }
}

/// Result of a successful approval.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ApprovalOutcome {
    /// Threshold not reached yet.
    Pending { approvals: u8 },
    /// Threshold reached; the proposal is now terminal.
    Executed(TransferRecord),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn proposal(id: u64, recipient: Pubkey) -> Proposal {
        Proposal {
            id,
            amount: 10,
            bucket: BucketName::Projects,
            recipient,
            proposer: Pubkey::new_unique(),
            approvals: 0,
            required_approvals: 2,
            status: ProposalStatus::Pending,
            bump: 0,
        }
    }

    #[test]
    fn pays_only_its_recipient() {
        let recipient = Pubkey::new_unique();
        let p = proposal(0, recipient);
        assert!(p.pays(&recipient));
        assert!(!p.pays(&Pubkey::new_unique()));
        assert!(!p.pays(&p.proposer));
    }

    #[test]
    fn addresses_are_unique_per_vault_and_id() {
        let vault = Pubkey::new_unique();
        let other = Pubkey::new_unique();
        let (first, _) = Proposal::address(&vault, 0);
        let (second, _) = Proposal::address(&vault, 1);
        let (elsewhere, _) = Proposal::address(&other, 0);
        assert_ne!(first, second);
        assert_ne!(first, elsewhere);
        assert_ne!(first, crate::state::HistoryEntry::address(&vault, 0).0);
    }

    #[test]
    fn address_matches_seed_layout() {
        let vault = Pubkey::new_unique();
        let (address, bump) = Proposal::address(&vault, 7);
        let derived = Pubkey::create_program_address(
            &[PROPOSAL_SEED, vault.as_ref(), &7u64.to_le_bytes(), &[bump]],
            &crate::ID,
        )
        .unwrap();
        assert_eq!(address, derived);
    }

    #[test]
    fn serialized_proposal_fits_its_space() {
        let mut bytes = Vec::new();
        proposal(u64::MAX, Pubkey::new_unique())
            .try_serialize(&mut bytes)
            .unwrap();
        assert_eq!(bytes.len(), Proposal::INIT_SPACE);
    }
}
