use super::GroupId;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use tower_api_client::{Method, Request, RequestData};

// Common

/// One entry of a group's transaction history, as reported by the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    #[serde(rename = "type")]
    pub kind: String,
    pub amount: f64,
    pub date: String,
}

impl std::fmt::Display for TransactionRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {} - {}", self.kind, self.amount, self.date)
    }
}

// Requests

#[derive(Default, Debug, Clone, PartialEq, Serialize)]
pub struct ListGroupTransactions {
    group_id: GroupId,
}

impl ListGroupTransactions {
    pub fn new(group_id: GroupId) -> Self {
        Self { group_id }
    }

    pub fn group_id(&self) -> GroupId {
        self.group_id
    }
}

impl Request for ListGroupTransactions {
    type Data = Self;
    type Response = Vec<TransactionRecord>;
    const METHOD: Method = Method::POST;

    fn endpoint(&self) -> Cow<'_, str> {
        "/get_group_trans".into()
    }

    fn data(&self) -> RequestData<&Self::Data> {
        RequestData::Json(self)
    }
}
