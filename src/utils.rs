pub const VERSION: &str = env!("CARGO_PKG_VERSION");

use crate::names;

pub fn cookie(name: &str, value: &str, secure: bool) -> String {
    let secure = if secure { " Secure;" } else { "" };
    let max_age = names::SESSION_MAX_AGE.as_secs();
    format!("{name}={value}; HttpOnly; Max-Age={max_age};{secure} Path=/; SameSite=Strict")
}

/// Encodes raw bytes as a `data:` URL, the shape the analysis endpoint takes.
pub fn data_url(mime_type: &str, bytes: &[u8]) -> String {
    use base64::Engine;

    let mime_type = if mime_type.is_empty() {
        "image/jpeg"
    } else {
        mime_type
    };
    format!(
        "data:{mime_type};base64,{}",
        base64::engine::general_purpose::STANDARD.encode(bytes)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cookie_only_marks_secure_when_asked() {
        assert!(cookie("a", "b", true).contains("Secure;"));
        assert!(!cookie("a", "b", false).contains("Secure"));
        assert!(cookie("a", "b", false).starts_with("a=b; HttpOnly; Max-Age=86400;"));
    }

    #[test]
    fn data_url_encodes_bytes() {
        assert_eq!(data_url("image/png", b"abc"), "data:image/png;base64,YWJj");
        assert_eq!(data_url("", b"abc"), "data:image/jpeg;base64,YWJj");
    }
}
