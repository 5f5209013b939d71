use super::{FundId, GroupId, MessageResponse};
use crate::macros::setter;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use tower_api_client::{Method, Request, RequestData};

// Common

#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrustFundAction {
    #[default]
    Add,
    Delete,
}

impl TrustFundAction {
    pub const ALL: [TrustFundAction; 2] = [TrustFundAction::Add, TrustFundAction::Delete];
}

impl std::fmt::Display for TrustFundAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Add => write!(f, "add"),
            Self::Delete => write!(f, "delete"),
        }
    }
}

// Requests

/// Add to or delete from a trust fund.
///
/// `fund_id` is always present in the body and is `null` unless set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrustFund {
    group_id: GroupId,
    action: TrustFundAction,
    amount: i64,
    fund_id: Option<FundId>,
}

impl TrustFund {
    pub fn new(group_id: GroupId, action: TrustFundAction, amount: i64) -> Self {
        Self {
            group_id,
            action,
            amount,
            fund_id: None,
        }
    }

    setter!(opt fund_id: FundId);
}

impl Request for TrustFund {
    type Data = Self;
    type Response = MessageResponse;
    const METHOD: Method = Method::POST;

    fn endpoint(&self) -> Cow<'_, str> {
        "/trust_fund".into()
    }

    fn data(&self) -> RequestData<&Self::Data> {
        RequestData::Json(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn add_sends_null_fund_id() {
        let req = TrustFund::new(GroupId::new(1), TrustFundAction::Add, 100);
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({"group_id": 1, "action": "add", "amount": 100, "fund_id": null})
        );
    }

    #[test]
    fn delete_carries_fund_id() {
        let req = TrustFund::new(GroupId::new(1), TrustFundAction::Delete, 0).fund_id(FundId::from(42));
        assert_eq!(serde_json::to_value(&req).unwrap()["fund_id"], json!(42));
    }
}
