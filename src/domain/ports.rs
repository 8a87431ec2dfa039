use crate::utils::error::GatewayError;
use async_trait::async_trait;

/// Outbound fetch to the measurement provider.
///
/// Implementations return the decoded JSON body untouched; interpreting the `value`
/// field is left to the caller. A single attempt is made per call.
#[async_trait]
pub trait Gateway: Send + Sync {
    async fn fetch(
        &self,
        url: &str,
        param: &str,
        location: Option<&str>,
    ) -> std::result::Result<serde_json::Value, GatewayError>;
}
