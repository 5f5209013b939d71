pub mod endpoints;
mod error;
mod macros;
pub mod repositories;

pub use crate::error::BankApiError;
use endpoints::GroupId;
use repositories::GroupRepository;
use tower_api_client::{Client as ApiClient, Request as ApiRequest};

/// Address of a locally running bank service, including the `/bank` prefix.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000/bank";

pub struct Client {
    inner: ApiClient,
}

impl Client {
    pub fn new(base_url: &str) -> Self {
        Self {
            inner: ApiClient::new(base_url),
        }
    }

    pub async fn send<R>(&self, request: R) -> Result<R::Response, BankApiError>
    where
        R: ApiRequest,
    {
        self.inner.send(request).await.map_err(From::from)
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

pub struct Request;

impl Request {
    /// Entry point for every request made on behalf of a group.
    pub fn group<G>(group_id: G) -> GroupRepository
    where
        G: Into<GroupId>,
    {
        GroupRepository::new(group_id.into())
    }
}
