//! Payment signature (HMAC-SHA256 over `order_id|payment_id`)

use hmac::{Hmac, Mac};
use sha2::Sha256;

use super::PaymentError;

type HmacSha256 = Hmac<Sha256>;

fn mac(order_id: &str, payment_id: &str, secret: &str) -> Result<HmacSha256, PaymentError> {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).map_err(|_| PaymentError::InvalidKey)?;
    mac.update(order_id.as_bytes());
    mac.update(b"|");
    mac.update(payment_id.as_bytes());
    Ok(mac)
}

/// Lowercase hex signature for an order / payment pair
pub fn sign(order_id: &str, payment_id: &str, secret: &str) -> Result<String, PaymentError> {
    Ok(hex::encode(mac(order_id, payment_id, secret)?.finalize().into_bytes()))
}

/// Check a hex signature in constant time
pub fn verify(
    order_id: &str,
    payment_id: &str,
    signature: &str,
    secret: &str,
) -> Result<(), PaymentError> {
    let expected = hex::decode(signature.trim()).map_err(|_| PaymentError::MalformedSignature)?;
    mac(order_id, payment_id, secret)?
        .verify_slice(&expected)
        .map_err(|_| PaymentError::SignatureMismatch)
}
