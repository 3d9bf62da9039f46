//! Request authentication
//!
//! CloudScrape authenticates every request with a shared-secret scheme: the
//! account id and API key are concatenated (account first, no delimiter) into
//! an access key, and the MD5 digest of that key is sent alongside the plain
//! account id. The scheme carries no per-request nonce or timestamp, so
//! replay is not mitigated at this layer, and MD5 is not a hardened
//! authentication primitive. Both are kept as-is for wire compatibility with
//! the service.

use md5::{Digest, Md5};

/// Header carrying the access digest
pub const ACCESS_HEADER: &str = "X-CloudScrape-Access";

/// Header carrying the plain account id
pub const ACCOUNT_HEADER: &str = "X-CloudScrape-Account";

/// Account credentials, fixed once the client is constructed
///
/// Every request derives its access digest from the same pair, so the digest
/// is deterministic for a given account.
#[derive(Debug, Clone)]
pub struct Credentials {
    account_id: String,
    api_key: String,
}

impl Credentials {
    pub fn new(api_key: impl Into<String>, account_id: impl Into<String>) -> Self {
        Self {
            account_id: account_id.into(),
            api_key: api_key.into(),
        }
    }

    /// The plain account id, sent in [`ACCOUNT_HEADER`]
    pub fn account_id(&self) -> &str {
        &self.account_id
    }

    /// The long-lived access key: account id and API key concatenated
    fn access_key(&self) -> String {
        format!("{}{}", self.account_id, self.api_key)
    }

    /// Lowercase hex MD5 digest of the access key, sent in [`ACCESS_HEADER`]
    pub fn access_digest(&self) -> String {
        format!("{:x}", Md5::digest(self.access_key().as_bytes()))
    }
}
