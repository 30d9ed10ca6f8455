//! `x-line-signature` verification.
//!
//! The platform signs every webhook body with HMAC-SHA256 keyed by the
//! channel secret and sends the Base64-encoded digest in the
//! `x-line-signature` header.

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use hmac::{Hmac, Mac};
use sha2::Sha256;
use thiserror::Error;

/// Header carrying the body signature.
pub const SIGNATURE_HEADER: &str = "x-line-signature";

type HmacSha256 = Hmac<Sha256>;

/// Reasons a webhook request is rejected before its body is decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SignatureError {
    /// The signature header is absent.
    #[error("missing {SIGNATURE_HEADER} header")]
    Missing,
    /// The header is not valid Base64.
    #[error("{SIGNATURE_HEADER} header is not valid Base64")]
    Malformed,
    /// The signature does not match the body.
    #[error("{SIGNATURE_HEADER} does not match the request body")]
    Mismatch,
    /// The channel secret cannot key the MAC.
    #[error("channel secret is not a usable HMAC key")]
    InvalidKey,
}

fn mac_for(channel_secret: &str, body: &[u8]) -> Result<HmacSha256, SignatureError> {
    let mut mac = <HmacSha256 as Mac>::new_from_slice(channel_secret.as_bytes())
        .map_err(|_| SignatureError::InvalidKey)?;
    mac.update(body);
    Ok(mac)
}

/// Compute the Base64 signature of `body` under `channel_secret`.
///
/// # Errors
///
/// Returns [`SignatureError::InvalidKey`] if the secret cannot key the MAC.
pub fn sign(channel_secret: &str, body: &[u8]) -> Result<String, SignatureError> {
    let mac = mac_for(channel_secret, body)?;
    Ok(BASE64.encode(mac.finalize().into_bytes()))
}

/// Check `signature` against `body`.
///
/// The comparison runs in constant time.
///
/// # Errors
///
/// Returns [`SignatureError`] when the header is missing, malformed or does
/// not match.
pub fn verify(
    channel_secret: &str,
    signature: Option<&[u8]>,
    body: &[u8],
) -> Result<(), SignatureError> {
    let encoded = signature.ok_or(SignatureError::Missing)?;
    let expected = BASE64
        .decode(encoded)
        .map_err(|_| SignatureError::Malformed)?;
    mac_for(channel_secret, body)?
        .verify_slice(&expected)
        .map_err(|_| SignatureError::Mismatch)
}
