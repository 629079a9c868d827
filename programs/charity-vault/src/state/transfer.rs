use anchor_lang::prelude::*;

/// One side of a settlement instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Party {
    Vault,
    Account(Pubkey),
}

/// Funds the ledger has accounted for and the host must move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TransferRecord {
    pub amount: u64,
    pub sender: Party,
    pub recipient: Party,
}

impl TransferRecord {
    pub fn inbound(from: Pubkey, amount: u64) -> Self {
        Self {
            amount,
            sender: Party::Account(from),
            recipient: Party::Vault,
        }
    }

    pub fn outbound(to: Pubkey, amount: u64) -> Self {
        Self {
            amount,
            sender: Party::Vault,
            recipient: Party::Account(to),
        }
    }

    /// Key of the external party, whichever side it is on.
    pub fn counterparty(&self) -> Option<Pubkey> {
        match (self.sender, self.recipient) {
            (Party::Account(key), _) | (_, Party::Account(key)) => Some(key),
            (Party::Vault, Party::Vault) => None,
        }
    }
}
