//! Participant join codes and QR helpers
//!
//! Every event can carry a join code of the form `trivia-` + 8 lowercase hex
//! characters. Participants reach `<origin>/join/<code>` by scanning a QR
//! image; the image itself is rendered by an external service, never locally.

use once_cell::sync::Lazy;
use regex::Regex;
use uuid::Uuid;

use crate::error::{Error, Result};

static JOIN_CODE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^trivia-[0-9a-f]{8}$").expect("join code pattern is valid"));

/// External QR renderer; the join URL travels percent-encoded in `data`.
const QR_RENDER_URL: &str = "https://api.qrserver.com/v1/create-qr-code/";

/// True when `code` is a well-formed join code (`trivia-` + 8 lowercase hex).
pub fn is_valid_join_code(code: &str) -> bool {
    JOIN_CODE.is_match(code)
}

/// Generate a fresh join code from a v4 UUID.
pub fn generate_join_code() -> String {
    let uuid = Uuid::new_v4().simple().to_string();
    format!("trivia-{}", &uuid[..8])
}

/// Build the join URL participants land on: `<origin>/join/<code>`.
///
/// Rejects malformed codes instead of emitting a dead link.
pub fn join_url(origin: &str, code: &str) -> Result<String> {
    if !is_valid_join_code(code) {
        return Err(Error::InvalidJoinCode(code.to_string()));
    }
    Ok(format!("{}/join/{}", origin.trim_end_matches('/'), code))
}

/// URL of a rendered QR image for a join URL, `size` pixels square.
pub fn qr_image_url(join_url: &str, size: u32) -> String {
    format!(
        "{}?size={}x{}&data={}",
        QR_RENDER_URL,
        size,
        size,
        urlencoding::encode(join_url)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_join_codes() {
        assert!(is_valid_join_code("trivia-1a2b3c4d"));
        assert!(is_valid_join_code("trivia-00000000"));
        assert!(is_valid_join_code("trivia-deadbeef"));
    }

    #[test]
    fn test_invalid_join_codes() {
        assert!(!is_valid_join_code("trivia-XYZ"));
        assert!(!is_valid_join_code("abc-1a2b3c4d"));
        assert!(!is_valid_join_code("trivia-1a2b3c4"));
        assert!(!is_valid_join_code("trivia-1a2b3c4d5"));
        assert!(!is_valid_join_code("trivia-1A2B3C4D"));
        assert!(!is_valid_join_code("TRIVIA-1a2b3c4d"));
        assert!(!is_valid_join_code(""));
    }

    #[test]
    fn test_generated_codes_validate() {
        for _ in 0..32 {
            let code = generate_join_code();
            assert!(is_valid_join_code(&code), "generated bad code: {code}");
        }
    }

    #[test]
    fn test_join_url_shape() {
        let url = join_url("https://triviaspark.example.com", "trivia-1a2b3c4d").unwrap();
        assert_eq!(url, "https://triviaspark.example.com/join/trivia-1a2b3c4d");

        // Trailing slash on the origin is tolerated
        let url = join_url("https://triviaspark.example.com/", "trivia-1a2b3c4d").unwrap();
        assert_eq!(url, "https://triviaspark.example.com/join/trivia-1a2b3c4d");
    }

    #[test]
    fn test_join_url_rejects_bad_code() {
        assert!(join_url("https://triviaspark.example.com", "trivia-XYZ").is_err());
    }

    #[test]
    fn test_qr_image_url_encodes_payload() {
        let url = qr_image_url("https://triviaspark.example.com/join/trivia-1a2b3c4d", 200);
        assert!(url.starts_with("https://api.qrserver.com/v1/create-qr-code/?size=200x200&data="));
        assert!(url.contains("https%3A%2F%2Ftriviaspark.example.com%2Fjoin%2Ftrivia-1a2b3c4d"));
    }
}
