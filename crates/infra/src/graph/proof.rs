//! `appsecret_proof` request signing
//!
//! When "Require App Secret" is enabled for an app, every Graph call must
//! carry `appsecret_proof = hex(HMAC-SHA256(key = app secret, msg = access token))`.

use ring::hmac;

/// Compute the `appsecret_proof` for an access token.
pub fn appsecret_proof(access_token: &str, app_secret: &str) -> String {
    let key = hmac::Key::new(hmac::HMAC_SHA256, app_secret.as_bytes());
    let tag = hmac::sign(&key, access_token.as_bytes());
    hex::encode(tag.as_ref())
}
