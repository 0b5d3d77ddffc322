use crate::utils::error::AppError;
use async_trait::async_trait;
use serde::Serialize;

// Fast2SMS bulk endpoint ("q" = quick transactional route)
const FAST2SMS_URL: &str = "https://www.fast2sms.com/dev/bulkV2";

/// Outbound bulk SMS capability. One call carries the message to every
/// number; tests substitute stub channels for the real provider.
#[async_trait]
pub trait SmsChannel: Send + Sync {
    async fn send_bulk(&self, numbers: &[String], message: &str) -> Result<(), AppError>;
}

#[derive(Debug, Serialize)]
struct BulkSmsPayload<'a> {
    message: &'a str,
    language: &'a str,
    route: &'a str,
    numbers: String,
}

/// Fast2SMS-backed channel. The API key comes from configuration and is
/// validated at startup.
pub struct Fast2Sms {
    api_key: String,
    client: reqwest::Client,
}

impl Fast2Sms {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl SmsChannel for Fast2Sms {
    async fn send_bulk(&self, numbers: &[String], message: &str) -> Result<(), AppError> {
        let payload = BulkSmsPayload {
            message,
            language: "english",
            route: "q",
            numbers: numbers.join(","),
        };

        let response = self
            .client
            .post(FAST2SMS_URL)
            .header("authorization", &self.api_key)
            .json(&payload)
            .timeout(std::time::Duration::from_secs(10))
            .send()
            .await
            .map_err(|e| AppError::ExternalService(format!("Failed to reach Fast2SMS: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalService(format!(
                "Fast2SMS error {}: {}",
                status, body
            )));
        }

        log::info!("✔ SMS sent to {} numbers", numbers.len());

        Ok(())
    }
}
