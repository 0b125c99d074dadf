//! Per-severity line prefixes
//!
//! Each prefix carries its plain text, a colorized copy and whether the
//! line should carry call-site information. The plain tags are padded to a
//! common width so messages line up.

use super::color;
use super::log_level::Severity;
use std::sync::OnceLock;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prefix {
    plain: &'static [u8],
    colored: Vec<u8>,
    call_site: bool,
}

impl Prefix {
    fn new(plain: &'static [u8], paint: fn(&[u8]) -> Vec<u8>, call_site: bool) -> Self {
        Self {
            plain,
            colored: paint(plain),
            call_site,
        }
    }

    #[inline]
    pub fn plain(&self) -> &[u8] {
        self.plain
    }

    #[inline]
    pub fn colored(&self) -> &[u8] {
        &self.colored
    }

    /// Bytes to emit for the given color setting.
    #[inline]
    pub fn bytes(&self, color: bool) -> &[u8] {
        if color {
            &self.colored
        } else {
            self.plain
        }
    }

    /// Whether lines with this prefix include `function:file:line`.
    #[inline]
    pub fn requires_call_site(&self) -> bool {
        self.call_site
    }
}

static PREFIXES: OnceLock<[Prefix; 6]> = OnceLock::new();

fn prefixes() -> &'static [Prefix; 6] {
    PREFIXES.get_or_init(|| {
        [
            Prefix::new(b"[TRACE] ", color::cyan, false),
            Prefix::new(b"[DEBUG] ", color::purple, true),
            Prefix::new(b"[INFO]  ", color::green, false),
            Prefix::new(b"[WARN]  ", color::orange, false),
            Prefix::new(b"[ERROR] ", color::red, true),
            Prefix::new(b"[FATAL] ", color::red, true),
        ]
    })
}

pub fn for_severity(severity: Severity) -> &'static Prefix {
    let index = match severity {
        Severity::Trace => 0,
        Severity::Debug => 1,
        Severity::Info => 2,
        Severity::Warn => 3,
        Severity::Error => 4,
        Severity::Fatal => 5,
    };
    &prefixes()[index]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_tags_share_width() {
        for severity in Severity::ALL {
            let prefix = severity.prefix();
            assert_eq!(prefix.plain().len(), 8, "{severity}");
            let tag = std::str::from_utf8(prefix.plain()).unwrap();
            assert!(tag.starts_with(&format!("[{}]", severity.to_str())));
        }
    }

    #[test]
    fn test_call_site_flags() {
        let flagged: Vec<Severity> = Severity::ALL
            .into_iter()
            .filter(|s| s.prefix().requires_call_site())
            .collect();
        assert_eq!(flagged, vec![Severity::Debug, Severity::Error, Severity::Fatal]);
    }

    #[test]
    fn test_colored_variants() {
        assert_eq!(Severity::Fatal.prefix().colored(), color::red(b"[FATAL] ").as_slice());
        assert_eq!(Severity::Warn.prefix().colored(), color::orange(b"[WARN]  ").as_slice());
        assert_eq!(Severity::Info.prefix().bytes(false), b"[INFO]  ");
        assert_eq!(
            Severity::Trace.prefix().bytes(true),
            color::cyan(b"[TRACE] ").as_slice()
        );
    }
}
