use super::{GroupId, MessageResponse};
use serde::Serialize;
use std::borrow::Cow;
use tower_api_client::{Method, Request, RequestData};

// Requests

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SetLoan {
    group_id: GroupId,
    amount: i64,
    duration: i64,
}

impl SetLoan {
    pub fn new(group_id: GroupId, amount: i64, duration: i64) -> Self {
        Self {
            group_id,
            amount,
            duration,
        }
    }
}

impl Request for SetLoan {
    type Data = Self;
    type Response = MessageResponse;
    const METHOD: Method = Method::POST;

    fn endpoint(&self) -> Cow<'_, str> {
        "/set_loan".into()
    }

    fn data(&self) -> RequestData<&Self::Data> {
        RequestData::Json(self)
    }
}
