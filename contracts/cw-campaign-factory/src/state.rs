use cosmwasm_schema::cw_serde;
use cosmwasm_std::Addr;
use cw_storage_plus::{Index, IndexList, IndexedMap, Item, MultiIndex};

pub const CAMPAIGN_CODE_ID: Item<u64> = Item::new("campaign_code_id");

/// Number of campaigns deployed so far, also the next campaign ID.
pub const CAMPAIGN_COUNT: Item<u64> = Item::new("campaign_count");

/// Temporarily holds the manager of the campaign being instantiated
pub const TMP_MANAGER: Item<Addr> = Item::new("tmp_manager");

#[cw_serde]
pub struct CampaignInfo {
    pub id: u64,
    pub contract: Addr,
    pub manager: Addr,
}

pub struct CampaignIndexes<'a> {
    pub manager: MultiIndex<'a, String, CampaignInfo, u64>,
}

impl<'a> IndexList<CampaignInfo> for CampaignIndexes<'a> {
    fn get_indexes(&'_ self) -> Box<dyn Iterator<Item = &'_ dyn Index<CampaignInfo>> + '_> {
        let v: Vec<&dyn Index<CampaignInfo>> = vec![&self.manager];
        Box::new(v.into_iter())
    }
}

pub fn campaigns<'a>() -> IndexedMap<'a, u64, CampaignInfo, CampaignIndexes<'a>> {
    let indexes = CampaignIndexes {
        manager: MultiIndex::new(
            |_pk: &[u8], d: &CampaignInfo| d.manager.to_string(),
            "campaigns",
            "campaigns__manager",
        ),
    };
    IndexedMap::new("campaigns", indexes)
}
