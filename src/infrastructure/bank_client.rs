use crate::domain::bank::{BankAuthorization, BankProcessingStatus, BankRequest};
use crate::domain::ports::BankClient;
use async_trait::async_trait;
use reqwest::header;
use tracing::{error, info, warn};

/// HTTP adapter for the acquiring bank's authorization endpoint.
///
/// Performs exactly one POST per authorization; there are no retries.
/// Every failure mode is folded into a `BankAuthorization` so callers
/// never see a transport error.
pub struct HttpBankClient {
    client: reqwest::Client,
    url: String,
}

impl HttpBankClient {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }
}

#[async_trait]
impl BankClient for HttpBankClient {
    async fn authorize(&self, request: BankRequest) -> BankAuthorization {
        let response = match self
            .client
            .post(&self.url)
            .header(header::ACCEPT, "application/json")
            .json(&request)
            .send()
            .await
        {
            Ok(response) => response,
            Err(err) => {
                error!(error = %err, "error while sending payment to the bank");
                return BankAuthorization::unauthorized(BankProcessingStatus::InternalError);
            }
        };

        if !response.status().is_success() {
            warn!(status = %response.status(), "bank responded with non-success status");
            return BankAuthorization::unauthorized(BankProcessingStatus::Failure);
        }

        match response.json::<BankAuthorization>().await {
            Ok(mut authorization) => {
                // The endpoint's own status field is not trusted; it is
                // recomputed from the authorized flag.
                authorization.status = if authorization.authorized {
                    BankProcessingStatus::Success
                } else {
                    BankProcessingStatus::Failure
                };
                info!("payment processed by the bank");
                authorization
            }
            Err(err) => {
                warn!(error = %err, "bank response body could not be parsed");
                BankAuthorization::unauthorized(BankProcessingStatus::Failure)
            }
        }
    }
}
