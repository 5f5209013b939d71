use super::{GroupId, MessageResponse};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use tower_api_client::{Method, Request, RequestData};

// Common

#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpyCardType {
    #[default]
    Information,
    Market,
    Sabotage,
}

impl SpyCardType {
    pub const ALL: [SpyCardType; 3] = [
        SpyCardType::Information,
        SpyCardType::Market,
        SpyCardType::Sabotage,
    ];
}

impl std::fmt::Display for SpyCardType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Information => write!(f, "information"),
            Self::Market => write!(f, "market"),
            Self::Sabotage => write!(f, "sabotage"),
        }
    }
}

// Requests

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BuySpyCard {
    group_id: GroupId,
    #[serde(rename = "type")]
    kind: SpyCardType,
}

impl BuySpyCard {
    pub fn new(group_id: GroupId, kind: SpyCardType) -> Self {
        Self { group_id, kind }
    }
}

impl Request for BuySpyCard {
    type Data = Self;
    type Response = MessageResponse;
    const METHOD: Method = Method::POST;

    fn endpoint(&self) -> Cow<'_, str> {
        "/buy_spy_card".into()
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
    fn spy_card_body() {
        let req = BuySpyCard::new(GroupId::new(4), SpyCardType::Sabotage);
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({"group_id": 4, "type": "sabotage"})
        );
    }
}
