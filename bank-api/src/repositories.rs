use crate::endpoints::{
    GroupId,
    loans::SetLoan,
    spy_cards::{BuySpyCard, SpyCardType},
    trade::{Resource, Trade},
    transactions::ListGroupTransactions,
    trust_fund::{TrustFund, TrustFundAction},
};

/// Builds requests that act on behalf of a single group.
#[derive(Default, Debug, Clone, Copy)]
pub struct GroupRepository {
    group_id: GroupId,
}

impl GroupRepository {
    pub fn new(group_id: GroupId) -> Self {
        Self { group_id }
    }

    pub fn group_id(&self) -> GroupId {
        self.group_id
    }

    pub fn transactions(&self) -> ListGroupTransactions {
        ListGroupTransactions::new(self.group_id)
    }

    pub fn trade(&self, resource: Resource, amount: i64) -> Trade {
        Trade::new(self.group_id, resource, amount)
    }

    pub fn trust_fund(&self, action: TrustFundAction, amount: i64) -> TrustFund {
        TrustFund::new(self.group_id, action, amount)
    }

    pub fn set_loan(&self, amount: i64, duration: i64) -> SetLoan {
        SetLoan::new(self.group_id, amount, duration)
    }

    pub fn buy_spy_card(&self, kind: SpyCardType) -> BuySpyCard {
        BuySpyCard::new(self.group_id, kind)
    }
}
