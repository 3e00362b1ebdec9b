//! Configuration options for fetch-and-extract calls.
//!
//! The `Options` struct carries the per-call transport configuration. There
//! is deliberately no process-wide configuration: relaxations such as
//! certificate acceptance are visible at every call site and mockable in
//! tests.

use std::time::Duration;

/// Desktop-browser user agent sent by default; some sites gate their
/// markup on it.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Per-call configuration for the outbound fetch.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use sitepeek::Options;
/// use std::time::Duration;
///
/// // Use defaults
/// let options = Options::default();
///
/// // Customize specific fields
/// let options = Options {
///     timeout: Duration::from_secs(10),
///     ..Options::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Total request timeout. Expiry is a terminal failure, never retried.
    ///
    /// Default: 5000 ms
    pub timeout: Duration,

    /// Accept untrusted, self-signed, or mismatched certificates.
    ///
    /// This is a deliberate trust trade-off for a best-effort metadata
    /// tool: many submitted sites present broken TLS, and a preview is
    /// still wanted. Set to `false` where the laxity is unacceptable.
    ///
    /// Default: `true`
    pub accept_invalid_certs: bool,

    /// User-Agent header value sent with the request.
    ///
    /// Default: [`DEFAULT_USER_AGENT`]
    pub user_agent: String,

    /// Maximum number of redirects to follow before giving up.
    ///
    /// Default: `10`
    pub max_redirects: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            timeout: Duration::from_millis(5000),
            accept_invalid_certs: true,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            max_redirects: 10,
        }
    }
}
