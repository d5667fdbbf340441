//! HTTP Basic credential parsing (RFC 7617).

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// Username and password decoded from an `Authorization: Basic` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicCredentials {
    pub username: String,
    pub password: String,
}

/// Decode the value of an `Authorization` header.
///
/// Returns `None` unless the header is `Basic <base64(user:pass)>` with valid
/// base64, valid UTF-8 and a `:` separator. The password may itself contain
/// colons; only the first one separates it from the username.
pub fn parse_basic_header(header: &str) -> Option<BasicCredentials> {
    let (scheme, encoded) = header.trim().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("basic") {
        return None;
    }

    let decoded = STANDARD.decode(encoded.trim()).ok()?;
    let decoded = String::from_utf8(decoded).ok()?;
    let (username, password) = decoded.split_once(':')?;

    Some(BasicCredentials {
        username: username.to_string(),
        password: password.to_string(),
    })
}
