//! Path normalization.
//!
//! # Responsibilities
//! - Canonicalize raw message paths into table keys
//!
//! # Design Decisions
//! - Strip surrounding slashes and spaces, then prepend a single slash
//! - Interior characters untouched (case-sensitive, no percent decoding)
//! - Pure function, applied at every registry write and read

/// Normalize a raw path into its canonical table-key form.
///
/// `"/echo/"`, `"echo"`, and `" /echo "` all normalize to `"/echo"`.
/// The empty string and `"/"` normalize to `"/"`.
pub fn normalize(raw: &str) -> String {
    let trimmed = raw.trim_matches(|c| c == '/' || c == ' ');
    format!("/{}", trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adds_leading_slash() {
        assert_eq!(normalize("echo"), "/echo");
    }

    #[test]
    fn test_strips_trailing_slash() {
        assert_eq!(normalize("/echo/"), "/echo");
    }

    #[test]
    fn test_strips_surrounding_spaces() {
        assert_eq!(normalize(" /echo "), "/echo");
        assert_eq!(normalize("  echo/  "), "/echo");
    }

    #[test]
    fn test_root_forms() {
        assert_eq!(normalize(""), "/");
        assert_eq!(normalize("/"), "/");
        assert_eq!(normalize(" // "), "/");
    }

    #[test]
    fn test_interior_untouched() {
        assert_eq!(normalize("/chat/room one/"), "/chat/room one");
        assert_eq!(normalize("/Echo"), "/Echo"); // case preserved
    }

    #[test]
    fn test_idempotent() {
        for raw in ["echo", "/echo/", " /a/b ", "", "/"] {
            let once = normalize(raw);
            assert_eq!(normalize(&once), once);
        }
    }
}
