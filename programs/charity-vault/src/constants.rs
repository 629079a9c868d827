pub const VAULT_SEED: &[u8] = b"vault";
pub const HISTORY_SEED: &[u8] = b"history";
pub const PROPOSAL_SEED: &[u8] = b"proposal";

// The vault always carries exactly the five fixed buckets
pub const MAX_BUCKETS: u8 = 5;

pub const DEFAULT_REQUIRED_APPROVALS: u8 = 2;
pub const MAX_REQUIRED_APPROVALS: u8 = 5;

// Allocations are whole percents of each donation
pub const PERCENT_DENOMINATOR: u128 = 100;
