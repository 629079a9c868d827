use anchor_lang::prelude::*;

/// Reads a program record from an address whose seeds were already checked.
/// An address nothing was ever created at yields `None`.
pub fn load_record<T>(info: &AccountInfo) -> Result<Option<T>>
where
    T: AccountDeserialize + anchor_lang::Owner,
{
    if info.data_is_empty() {
        return Ok(None);
    }
    require_keys_eq!(
        *info.owner,
        T::owner(),
        anchor_lang::error::ErrorCode::AccountOwnedByWrongProgram
    );
    let data = info.try_borrow_data()?;
    Ok(Some(T::try_deserialize(&mut &data[..])?))
}

/// Writes `record` back over the account it was loaded from.
pub fn store_record<T: AccountSerialize>(info: &AccountInfo, record: &T) -> Result<()> {
    let mut data = info.try_borrow_mut_data()?;
    let mut writer: &mut [u8] = &mut data[..];
    record.try_serialize(&mut writer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{BucketName, Proposal, ProposalStatus};

    fn proposal() -> Proposal {
        Proposal {
            id: 3,
            amount: 50,
            bucket: BucketName::Reserves,
            recipient: Pubkey::new_unique(),
            proposer: Pubkey::new_unique(),
            approvals: 1,
            required_approvals: 2,
            status: ProposalStatus::Pending,
            bump: 254,
        }
    }

    #[test]
    fn empty_address_loads_as_missing() {
        let key = Pubkey::new_unique();
        let owner = anchor_lang::system_program::ID;
        let mut lamports = 0;
        let mut data: Vec<u8> = Vec::new();
        let info = AccountInfo::new(&key, false, true, &mut lamports, &mut data, &owner, false, 0);

        assert!(load_record::<Proposal>(&info).unwrap().is_none());
    }

    #[test]
    fn stored_record_loads_back() {
        let key = Pubkey::new_unique();
        let owner = crate::ID;
        let mut lamports = 1_000_000;
        let mut data = vec![0u8; Proposal::INIT_SPACE];
        let info = AccountInfo::new(&key, false, true, &mut lamports, &mut data, &owner, false, 0);

        let mut record = proposal();
        store_record(&info, &record).unwrap();
        assert_eq!(load_record::<Proposal>(&info).unwrap().unwrap(), record);

        record.approvals = 2;
        record.status = ProposalStatus::Executed;
        store_record(&info, &record).unwrap();

        let loaded = load_record::<Proposal>(&info).unwrap().unwrap();
        assert_eq!(loaded, record);
    }

    #[test]
    fn foreign_account_is_rejected() {
        let key = Pubkey::new_unique();
        let owner = Pubkey::new_unique();
        let mut lamports = 1_000_000;
        let mut data = vec![1u8; Proposal::INIT_SPACE];
        let info = AccountInfo::new(&key, false, true, &mut lamports, &mut data, &owner, false, 0);

        assert!(load_record::<Proposal>(&info).is_err());
    }
}
