/// Replace characters unsafe for file names with underscores.
///
/// Keeps alphanumerics, `-`, `_` and `.` so that session ids and source
/// labels can be embedded in log file names on any platform.
pub fn sanitize_component(s: &str) -> String {
    s.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.') {
                c
            } else {
                '_'
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_keeps_safe_chars() {
        assert_eq!(sanitize_component("batch-01_v2.final"), "batch-01_v2.final");
    }

    #[test]
    fn test_sanitize_replaces_unsafe_chars() {
        assert_eq!(sanitize_component("a b/c:d"), "a_b_c_d");
    }
}
