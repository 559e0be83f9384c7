//! Build metadata reported at startup.

const SHORT_SHA_LEN: usize = 9;

/// Returns `pkg_version (short_sha[-dirty])` for the startup log line.
///
/// Git metadata comes from `build.rs`; without it the revision reads
/// `unknown`.
#[must_use]
pub fn build_version() -> String {
    format_version(
        env!("CARGO_PKG_VERSION"),
        option_env!("VERGEN_GIT_SHA"),
        option_env!("VERGEN_GIT_DIRTY"),
    )
}

fn format_version(pkg_version: &str, sha: Option<&str>, dirty: Option<&str>) -> String {
    let Some(sha) = sha else {
        return format!("{pkg_version} (unknown)");
    };
    let short = sha.get(..SHORT_SHA_LEN).unwrap_or(sha);
    let suffix = if dirty == Some("true") { "-dirty" } else { "" };
    format!("{pkg_version} ({short}{suffix})")
}

#[cfg(test)]
mod tests {
    use super::format_version;

    #[test]
    fn shortens_sha_and_marks_dirty_tree() {
        let sha = "0123456789abcdef0123456789abcdef01234567";
        assert_eq!(
            format_version("0.1.0", Some(sha), Some("false")),
            "0.1.0 (012345678)"
        );
        assert_eq!(
            format_version("0.1.0", Some(sha), Some("true")),
            "0.1.0 (012345678-dirty)"
        );
        assert_eq!(format_version("0.1.0", None, None), "0.1.0 (unknown)");
        assert_eq!(format_version("0.1.0", Some("abc"), None), "0.1.0 (abc)");
    }
}
