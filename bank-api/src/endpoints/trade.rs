use super::{GroupId, MessageResponse};
use crate::macros::setter;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use tower_api_client::{Method, Request, RequestData};

// Common

#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Resource {
    #[default]
    Oil,
    Wood,
    Stone,
    Crystal,
    Strenium,
}

impl Resource {
    pub const ALL: [Resource; 5] = [
        Resource::Oil,
        Resource::Wood,
        Resource::Stone,
        Resource::Crystal,
        Resource::Strenium,
    ];
}

impl std::fmt::Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Oil => write!(f, "oil"),
            Self::Wood => write!(f, "wood"),
            Self::Stone => write!(f, "stone"),
            Self::Crystal => write!(f, "crystal"),
            Self::Strenium => write!(f, "strenium"),
        }
    }
}

#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TradeType {
    #[default]
    Buy,
    Sell,
}

impl TradeType {
    pub const ALL: [TradeType; 2] = [TradeType::Buy, TradeType::Sell];
}

impl std::fmt::Display for TradeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Buy => write!(f, "buy"),
            Self::Sell => write!(f, "sell"),
        }
    }
}

// Requests

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trade {
    group_id: GroupId,
    resource: Resource,
    amount: i64,
    #[serde(rename = "type")]
    kind: TradeType,
}

impl Trade {
    pub fn new(group_id: GroupId, resource: Resource, amount: i64) -> Self {
        Self {
            group_id,
            resource,
            amount,
            kind: TradeType::default(),
        }
    }

    setter!(kind: TradeType);
}

impl Request for Trade {
    type Data = Self;
    type Response = MessageResponse;
    const METHOD: Method = Method::POST;

    fn endpoint(&self) -> Cow<'_, str> {
        "/trade".into()
    }

    fn data(&self) -> RequestData<&Self::Data> {
        RequestData::Json(self)
    }
}
