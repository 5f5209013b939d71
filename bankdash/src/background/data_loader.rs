use crate::events::{ActionRequest, DataEvent};
use crate::state::FormTicket;
use bank_api::{
    endpoints::{transactions::ListGroupTransactions, MessageResponse},
    BankApiError, Client,
};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Performs requests against the bank service and reports the outcome as `DataEvent`s
#[derive(Clone)]
pub struct DataLoader {
    pub api_client: Arc<Client>,
    pub data_tx: mpsc::UnboundedSender<DataEvent>,
}

impl DataLoader {
    pub fn new(api_client: Arc<Client>, data_tx: mpsc::UnboundedSender<DataEvent>) -> Self {
        Self {
            api_client,
            data_tx,
        }
    }

    /// Fetch the group history
    pub async fn load_transactions(&self, request: ListGroupTransactions) {
        tracing::info!("Loading transactions for group {}", request.group_id());

        let event = match self.api_client.send(request).await {
            Ok(records) => {
                tracing::info!("Loaded {} transactions", records.len());
                DataEvent::TransactionsLoaded { records }
            }
            Err(e) => {
                log_failure("get_group_trans", &e);
                DataEvent::TransactionsLoadFailed {
                    error: e.to_string(),
                }
            }
        };
        let _ = self.data_tx.send(event);
    }

    /// Send one form submission. The result is tagged with `ticket` so the
    /// reducer can tell whether the issuing form is still mounted.
    pub async fn submit(&self, ticket: FormTicket, request: ActionRequest) {
        let endpoint = ticket.tab.key();
        tracing::info!("Sending {} request", endpoint);

        let result: Result<MessageResponse, BankApiError> = match request {
            ActionRequest::Trade(req) => self.api_client.send(req).await,
            ActionRequest::TrustFund(req) => self.api_client.send(req).await,
            ActionRequest::SetLoan(req) => self.api_client.send(req).await,
            ActionRequest::BuySpyCard(req) => self.api_client.send(req).await,
        };

        let event = match result {
            Ok(response) => {
                tracing::info!("{} succeeded: {}", endpoint, response.message);
                DataEvent::ActionSucceeded {
                    ticket,
                    message: response.message,
                }
            }
            Err(e) => {
                log_failure(endpoint, &e);
                DataEvent::ActionFailed {
                    ticket,
                    error: e.to_string(),
                }
            }
        };
        let _ = self.data_tx.send(event);
    }
}

fn log_failure(endpoint: &str, error: &BankApiError) {
    match error {
        BankApiError::Status(status, body) => {
            tracing::error!("{} returned {}: {}", endpoint, status, body)
        }
        BankApiError::Internal(e) => tracing::error!("{} failed: {:?}", endpoint, e),
    }
}
