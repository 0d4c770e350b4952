//! Razorpay REST client

use std::time::Duration;

use async_trait::async_trait;

use super::{GatewayOrder, OrderRequest, PaymentError, PaymentGateway, PaymentSignature, signature};
use crate::core::config::PaymentConfig;

pub struct RazorpayGateway {
    client: reqwest::Client,
    key_id: String,
    key_secret: String,
    api_base: String,
    currency: String,
}

impl RazorpayGateway {
    /// Build from configuration; both credentials are required
    pub fn from_config(config: &PaymentConfig, timeout: Duration) -> Result<Self, PaymentError> {
        let (key_id, key_secret) = config
            .credentials()
            .ok_or(PaymentError::NotConfigured(
                config.missing_setting().unwrap_or("RAZORPAY_KEY_ID"),
            ))?;

        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            key_id: key_id.to_string(),
            key_secret: key_secret.to_string(),
            api_base: config.api_base.trim_end_matches('/').to_string(),
            currency: config.currency.clone(),
        })
    }
}

#[async_trait]
impl PaymentGateway for RazorpayGateway {
    fn key_id(&self) -> &str {
        &self.key_id
    }

    fn currency(&self) -> &str {
        &self.currency
    }

    async fn create_order(&self, request: OrderRequest) -> Result<GatewayOrder, PaymentError> {
        let response = self
            .client
            .post(format!("{}/orders", self.api_base))
            .basic_auth(&self.key_id, Some(&self.key_secret))
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), body = %body, "Gateway rejected order");
            return Err(PaymentError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        let order: GatewayOrder = response.json().await?;
        tracing::info!(order_id = %order.id, amount = order.amount, "Gateway order created");
        Ok(order)
    }

    fn verify_signature(&self, sig: &PaymentSignature) -> Result<(), PaymentError> {
        signature::verify(&sig.order_id, &sig.payment_id, &sig.signature, &self.key_secret)
    }
}
