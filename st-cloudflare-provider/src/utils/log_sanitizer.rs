//! Log sanitization utilities
//!
//! Cloudflare responses can be large (full zone objects with name server
//! lists, owner and account blocks) and requests carry credentials. Both are
//! cut down before they reach debug/error logs.

/// Maximum number of bytes of a body included in log output.
const TRUNCATE_LIMIT: usize = 512;

/// Number of leading characters of a secret kept visible.
const SECRET_VISIBLE_PREFIX: usize = 4;

/// Largest char boundary at or below `index`.
fn floor_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        return s.len();
    }
    (0..=index).rev().find(|&i| s.is_char_boundary(i)).unwrap_or(0)
}

/// Truncate a response or request body for logging.
///
/// Bodies within the limit are returned unchanged; longer ones keep their
/// first `TRUNCATE_LIMIT` bytes and note the original size.
pub fn truncate_for_log(s: &str) -> String {
    if s.len() <= TRUNCATE_LIMIT {
        s.to_string()
    } else {
        format!(
            "{}... [truncated, total {} bytes]",
            &s[..floor_char_boundary(s, TRUNCATE_LIMIT)],
            s.len()
        )
    }
}

/// Mask a credential, keeping a short prefix so operators can tell keys apart.
pub fn mask_secret(secret: &str) -> String {
    let visible: String = secret.chars().take(SECRET_VISIBLE_PREFIX).collect();
    if secret.chars().count() <= SECRET_VISIBLE_PREFIX * 2 {
        "***".to_string()
    } else {
        format!("{visible}***")
    }
}
