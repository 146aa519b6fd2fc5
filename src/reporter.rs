// SHA-256 over the exact report text, so two implementations can be compared
// by a single line.

use core::fmt;

use sha2::{Digest, Sha256};

use crate::kat_session::KatReport;

/// Lowercase hex SHA-256 of `report_text` as bytes.
pub fn digest(report_text: &str) -> String {
    hex::encode(Sha256::digest(report_text.as_bytes()))
}

/// 1-based line of the first difference between a reference report and a
/// generated one, or `None` if they are byte-identical.
pub fn first_difference(expected: &str, actual: &str) -> Option<usize> {
    if expected == actual {
        return None;
    }
    let mut exp = expected.split_inclusive('\n');
    let mut act = actual.split_inclusive('\n');
    let mut line = 1;
    loop {
        match (exp.next(), act.next()) {
            (Some(a), Some(b)) if a == b => line += 1,
            _ => return Some(line),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KatSummary {
    pub digest: String,
    pub scheme: String,
    pub count: usize,
}

impl KatSummary {
    pub fn new(report_text: &str, scheme: &str, count: usize) -> Self {
        Self { digest: digest(report_text), scheme: scheme.to_string(), count }
    }

    pub fn of(report: &KatReport) -> Self {
        Self::new(&report.text(), report.scheme(), report.count())
    }
}

// `<digest> <scheme> (<count>)`
impl fmt::Display for KatSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({})", self.digest, self.scheme, self.count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sha256_of_text() {
        assert_eq!(
            digest(""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
        assert_eq!(
            digest("abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn digest_sees_formatting() {
        assert_ne!(digest("# x\n\n"), digest("# x\n"));
        assert_ne!(digest("msg = AB\n"), digest("msg = ab\n"));
    }

    #[test]
    fn identical_reports_have_no_difference() {
        let text = "# s\n\ncount = 0\nmsg = AB\n\n";
        assert_eq!(first_difference(text, text), None);
    }

    #[test]
    fn difference_is_reported_by_line() {
        let expected = "# s\n\ncount = 0\nmsg = AB\n\n";
        assert_eq!(first_difference(expected, "# s\n\ncount = 0\nmsg = AC\n\n"), Some(4));
        assert_eq!(first_difference(expected, "# t\n\ncount = 0\nmsg = AB\n\n"), Some(1));
        // truncated, extra record, and a missing trailing newline
        assert_eq!(first_difference(expected, "# s\n\n"), Some(3));
        assert_eq!(first_difference(expected, &format!("{}count = 1\n", expected)), Some(6));
        assert_eq!(first_difference(expected, "# s\n\ncount = 0\nmsg = AB\n"), Some(5));
    }

    #[test]
    fn summary_line() {
        let s = KatSummary::new("abc", "ML-DSA-44", 10);
        assert_eq!(
            s.to_string(),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad ML-DSA-44 (10)"
        );
    }
}
