use std::fmt;
use std::str::FromStr;

use anchor_lang::prelude::*;

use crate::constants::PERCENT_DENOMINATOR;
use crate::state::VaultError;

/// The fixed bucket set. Declaration order is the donation fan-out order.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BucketName {
    Projects,
    Operations,
    Reserves,
    Emergency,
    Incentives,
}

impl BucketName {
    pub const ALL: [BucketName; 5] = [
        BucketName::Projects,
        BucketName::Operations,
        BucketName::Reserves,
        BucketName::Emergency,
        BucketName::Incentives,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BucketName::Projects => "projects",
            BucketName::Operations => "operations",
            BucketName::Reserves => "reserves",
            BucketName::Emergency => "emergency",
            BucketName::Incentives => "incentives",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            BucketName::Projects => "Project funding",
            BucketName::Operations => "Operational costs",
            BucketName::Reserves => "Emergency reserves",
            BucketName::Emergency => "Emergency fund",
            BucketName::Incentives => "Donor incentives",
        }
    }
}

impl fmt::Display for BucketName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BucketName {
    type Err = VaultError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        BucketName::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or(VaultError::InvalidBucketName)
    }
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct Bucket {
    pub name: BucketName,
    pub balance: i128,          // Signed: execution never re-checks coverage
    pub allocated_percent: u8,
    pub description: String,
}

impl Space for Bucket {
    const INIT_SPACE: usize = 1      // name: BucketName
        + 16    // balance: i128
        + 1     // allocated_percent: u8
        + 4 + Self::MAX_DESCRIPTION_LEN; // description: String
}

impl Bucket {
    pub const MAX_DESCRIPTION_LEN: usize = 32;

    pub fn new(name: BucketName, allocated_percent: u8) -> Self {
        Self {
            name,
            balance: 0,
            allocated_percent,
            description: name.description().to_string(),
        }
    }

    /// Share of `amount` this bucket is credited with.
    pub fn share_of(&self, amount: u64) -> Result<u64> {
        allocation(amount, self.allocated_percent)
    }
}

/// Percentage split of a donation across the five buckets, in fan-out order.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct BucketAllocation {
    pub projects: u8,
    pub operations: u8,
    pub reserves: u8,
    pub emergency: u8,
    pub incentives: u8,
}

impl BucketAllocation {
    pub fn percents(&self) -> [u8; 5] {
        [
            self.projects,
            self.operations,
            self.reserves,
            self.emergency,
            self.incentives,
        ]
    }

    pub fn total(&self) -> u16 {
        self.percents().iter().map(|p| u16::from(*p)).sum()
    }
}

/// `floor(amount * percent / 100)`. Whatever the floor drops stays unassigned.
/// Percents above 100 can push the share past `u64::MAX`.
pub fn allocation(amount: u64, percent: u8) -> Result<u64> {
    let share = u128::from(amount) * u128::from(percent) / PERCENT_DENOMINATOR;
    Ok(u64::try_from(share).map_err(|_| VaultError::ArithmeticOverflow)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip_through_strings() {
        for name in BucketName::ALL {
            assert_eq!(name.as_str().parse::<BucketName>().ok(), Some(name));
        }
    }

    #[test]
    fn unknown_name_is_rejected() {
        assert!(matches!(
            "marketing".parse::<BucketName>(),
            Err(VaultError::InvalidBucketName)
        ));
        assert!(matches!(
            "Projects".parse::<BucketName>(),
            Err(VaultError::InvalidBucketName)
        ));
    }

    #[test]
    fn fan_out_order_and_descriptions_are_fixed() {
        let names: Vec<&str> = BucketName::ALL.iter().map(|b| b.as_str()).collect();
        assert_eq!(
            names,
            vec!["projects", "operations", "reserves", "emergency", "incentives"]
        );
        assert_eq!(BucketName::Reserves.description(), "Emergency reserves");
        assert_eq!(BucketName::Incentives.description(), "Donor incentives");
    }

    #[test]
    fn allocation_floors() {
        assert_eq!(allocation(1000, 40).unwrap(), 400);
        assert_eq!(allocation(7, 33).unwrap(), 2);
        assert_eq!(allocation(99, 1).unwrap(), 0);
        assert_eq!(allocation(u64::MAX, 100).unwrap(), u64::MAX);
    }

    #[test]
    fn allocation_above_amount_overflows() {
        let err = allocation(u64::MAX, 101).unwrap_err();
        match err {
            anchor_lang::error::Error::AnchorError(e) => assert_eq!(e.error_code_number, 110),
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(allocation(u64::MAX, 255).is_err());
        assert_eq!(allocation(u64::MAX / 2, 200).unwrap(), u64::MAX - 1);
    }

    #[test]
    fn allocation_total_sums_percents() {
        let split = BucketAllocation {
            projects: 40,
            operations: 30,
            reserves: 15,
            emergency: 10,
            incentives: 5,
        };
        assert_eq!(split.total(), 100);
        assert_eq!(split.percents(), [40, 30, 15, 10, 5]);

        let wide = BucketAllocation {
            projects: 255,
            operations: 255,
            reserves: 255,
            emergency: 255,
            incentives: 255,
        };
        assert_eq!(wide.total(), 1275);
    }

    #[test]
    fn descriptions_fit_reserved_space() {
        for name in BucketName::ALL {
            assert!(name.description().len() <= Bucket::MAX_DESCRIPTION_LEN);
            let mut bytes = Vec::new();
            Bucket::new(name, 100).serialize(&mut bytes).unwrap();
            assert!(bytes.len() <= Bucket::INIT_SPACE);
        }
    }
}
