//! Signed bearer tokens
//!
//! Format: `<user_id>.<hex HMAC-SHA256 of user_id>`

use common::{Error, Result};
use hmac::{Hmac, Mac};
use sha2::Sha256;
use tracing::debug;

type HmacSha256 = Hmac<Sha256>;

fn mac_for(user_id: &str, secret: &str) -> Result<HmacSha256> {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .map_err(|e| Error::Internal(e.to_string()))?;
    mac.update(user_id.as_bytes());
    Ok(mac)
}

/// Issue a token for `user_id`
pub fn issue_token(user_id: &str, secret: &str) -> Result<String> {
    let signature = mac_for(user_id, secret)?.finalize().into_bytes();
    Ok(format!("{}.{}", user_id, hex::encode(signature)))
}

/// Verify a token and return the user id it was issued for
pub fn verify_token(token: &str, secret: &str) -> Result<String> {
    // User ids never contain '.', so the signature follows the last one
    let (user_id, signature) = token.rsplit_once('.').ok_or(Error::InvalidToken)?;

    let signature_bytes = hex::decode(signature).map_err(|_| Error::InvalidToken)?;

    mac_for(user_id, secret)?
        .verify_slice(&signature_bytes)
        .map_err(|_| {
            debug!("Token signature mismatch for {}", user_id);
            Error::InvalidToken
        })?;

    Ok(user_id.to_string())
}
