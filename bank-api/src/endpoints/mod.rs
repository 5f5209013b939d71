pub mod loans;
pub mod spy_cards;
pub mod trade;
pub mod transactions;
pub mod trust_fund;

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Identifier of the acting group. Opaque to the client.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GroupId(i64);

impl GroupId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn inner(&self) -> i64 {
        self.0
    }
}

impl From<i64> for GroupId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<GroupId> for i64 {
    fn from(value: GroupId) -> Self {
        value.0
    }
}

impl Display for GroupId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of an existing trust fund, needed to delete it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FundId(i64);

impl FundId {
    pub fn inner(&self) -> i64 {
        self.0
    }
}

impl From<i64> for FundId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl Display for FundId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Body returned by every mutating endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}
