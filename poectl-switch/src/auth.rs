//! Login handshake against the console.
//!
//! The switch hashes the admin password with a server-supplied nonce (the
//! `rand` hidden field) before it ever crosses the wire: the client submits
//! `MD5(password + rand)` and receives an `SID` cookie that authenticates
//! every later call. Older firmware serves a login page without the nonce
//! and expects the bare password hash instead.

use md5::{Digest, Md5};
use poectl_extract::{extract_cookie_value, extract_quoted_attribute};
use poectl_transport::{Method, Transport, TransportError};
use thiserror::Error;

/// Login page path.
pub const LOGIN_PATH: &str = "/login.cgi";

/// Host and password for one switch. Supplied once, never mutated.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub host: String,
    pub password: String,
}

impl Credentials {
    pub fn new(host: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            password: password.into(),
        }
    }
}

/// An authenticated console session.
///
/// Holds the bearer `SID` cookie; lives only for the process lifetime and is
/// never persisted. Mutating and query calls borrow it per call.
#[derive(Debug, Clone)]
pub struct Session {
    pub cookie_token: String,
    pub authenticated: bool,
}

impl Session {
    /// The `Cookie` header value for subsequent calls.
    pub fn cookie_header(&self) -> String {
        format!("SID={}", self.cookie_token)
    }
}

/// Login-stage failures. The caller must retry login explicitly; nothing is
/// retried here.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("transport failure during login: {0}")]
    Transport(#[from] TransportError),

    #[error("login page returned status {0}")]
    BadStatus(u16),

    #[error("no SID cookie in login response")]
    NoCookie,
}

/// MD5 of `input`, lowercase hex.
pub fn md5_hex(input: &str) -> String {
    let mut hasher = Md5::new();
    hasher.update(input.as_bytes());
    hex(&hasher.finalize())
}

/// The console's password hashing scheme: `MD5(password + rand)`.
///
/// An empty rand degenerates to the plain password hash, which is exactly
/// the legacy-firmware behavior.
pub fn merge_hash(password: &str, rand: &str) -> String {
    md5_hex(&format!("{}{}", password, rand))
}

/// Authenticate against the console.
///
/// Fetches the login page, hashes the password with the `rand` nonce when
/// one is present, submits the digest, and lifts the `SID` cookie out of the
/// response headers. The cookie is the only reliable success signal; the
/// POST status code is ignored because firmware in the field reports login
/// results inconsistently.
pub fn login<T: Transport>(transport: &T, credentials: &Credentials) -> Result<Session, AuthError> {
    let page = transport.send(Method::Get, LOGIN_PATH, None, None)?;
    if page.status != 200 {
        return Err(AuthError::BadStatus(page.status));
    }

    // Missing rand means older firmware, not a failed login.
    let digest = match extract_quoted_attribute(&page.body, "rand") {
        Some(rand) => merge_hash(&credentials.password, rand),
        None => md5_hex(&credentials.password),
    };

    let body = format!("password={}", digest);
    let response = transport.send(Method::Post, LOGIN_PATH, Some(&body), None)?;

    let sid = extract_cookie_value(&response.headers, "SID").ok_or(AuthError::NoCookie)?;
    if sid.is_empty() {
        return Err(AuthError::NoCookie);
    }

    Ok(Session {
        cookie_token: sid.to_string(),
        authenticated: true,
    })
}

/// Lowercase hex of a digest.
fn hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}
