use anchor_lang::prelude::*;

use crate::constants::HISTORY_SEED;
use crate::state::BucketName;

/// One accepted donation, stored at `["history", vault, id]`. Never rewritten.
#[account]
#[derive(Debug, PartialEq, Eq)]
pub struct HistoryEntry {
    pub id: u64,
    pub timestamp: i64,
    pub amount: u64,
    pub bucket: Option<BucketName>,  // Donations fan out to every bucket, so this stays None
    pub donor: Pubkey,
    pub bump: u8,
}

impl Space for HistoryEntry {
    const INIT_SPACE: usize = 8      // Discriminator
        + 8     // id: u64
        + 8     // timestamp: i64
        + 8     // amount: u64
        + 1 + 1 // bucket: Option<BucketName>
        + 32    // donor: Pubkey
        + 1;    // bump: u8
}

impl HistoryEntry {
    pub fn address(vault: &Pubkey, id: u64) -> (Pubkey, u8) {
        Pubkey::find_program_address(
            &[HISTORY_SEED, vault.as_ref(), &id.to_le_bytes()],
            &crate::ID,
        )
    }
}
