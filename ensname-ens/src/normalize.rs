//! Name normalization (UTS-46 with STD3 ASCII rules).
//!
//! Normalization case-folds, width-maps, and validates a name according to
//! the UTS-46 mapping tables. It never hashes. The tables are compiled into
//! the `idna` crate, so there is no runtime state to initialize or share.
//!
//! Labels written in ACE form (`xn--…`) are validated, including their
//! punycode, but come out in ACE form rather than decoded. Empty labels pass
//! through unchanged.

use idna::uts46::{AsciiDenyList, Hyphens, Uts46};
use serde::{Deserialize, Serialize};
use tracing::debug;

use ensname_core::constants::LABEL_SEPARATOR;
use ensname_core::error::{EnsError, Result};

/// Characters UTS-46 treats as label separators.
const FULL_STOPS: [char; 4] = ['.', '\u{3002}', '\u{FF0E}', '\u{FF61}'];

/// Prefix of a punycode-encoded label.
const ACE_PREFIX: &str = "xn--";

/// Normalizer configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizerConfig {
    /// Reject ASCII outside letters, digits, and hyphen (STD3 rules)
    pub std3_rules: bool,
    /// Reject hyphens at label start/end and in positions 3-4
    pub check_hyphens: bool,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            std3_rules: true,
            check_hyphens: false,
        }
    }
}

impl NormalizerConfig {
    /// Strict STD3 rules plus hyphen placement checks.
    pub fn strict() -> Self {
        Self {
            check_hyphens: true,
            ..Default::default()
        }
    }
}

/// UTS-46 name normalizer.
///
/// The free functions [`normalize`] and [`is_valid_name`] use the default
/// configuration. Build a `Normalizer` only to change the rules.
#[derive(Clone, Debug, Default)]
pub struct Normalizer {
    config: NormalizerConfig,
}

impl Normalizer {
    /// Creates a normalizer with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a normalizer with custom configuration.
    pub fn with_config(config: NormalizerConfig) -> Self {
        Self { config }
    }

    /// Normalizes a name, returning [`EnsError::InvalidName`] on failure.
    ///
    /// The empty (root) name is returned unchanged.
    pub fn normalize(&self, raw: &str) -> Result<String> {
        if raw.is_empty() {
            return Ok(String::new());
        }

        let deny_list = if self.config.std3_rules {
            AsciiDenyList::STD3
        } else {
            AsciiDenyList::EMPTY
        };
        let hyphens = if self.config.check_hyphens {
            Hyphens::Check
        } else {
            Hyphens::Allow
        };

        let (mapped, outcome) = Uts46::new().to_unicode(raw.as_bytes(), deny_list, hyphens);
        if let Err(errors) = outcome {
            debug!(name = raw, ?errors, "Rejected name");
            return Err(EnsError::invalid_name(
                raw,
                format!("UTS-46 processing failed: {:?}", errors),
            ));
        }

        Ok(keep_ace_labels(raw, &mapped))
    }

    /// Normalizes a UTF-8 byte string.
    ///
    /// Bytes that are not valid UTF-8 are an [`EnsError::InvalidName`], the
    /// same error channel as any other rejected name.
    pub fn normalize_bytes(&self, raw: &[u8]) -> Result<String> {
        let text = std::str::from_utf8(raw)
            .map_err(|e| EnsError::invalid_name(String::from_utf8_lossy(raw), e))?;
        self.normalize(text)
    }

    /// Returns true iff [`Normalizer::normalize`] would succeed.
    pub fn is_valid_name(&self, raw: &str) -> bool {
        self.normalize(raw).is_ok()
    }
}

/// Replaces decoded labels with their ACE input, lowercased.
///
/// `mapped` is the validated `to_unicode` output of `raw`. An ASCII label
/// only maps to its lowercase form, so a lowercased `xn--` input label is
/// exactly its remapped form.
fn keep_ace_labels(raw: &str, mapped: &str) -> String {
    let raw_labels: Vec<&str> = raw.split(&FULL_STOPS[..]).collect();
    let mapped_labels: Vec<&str> = mapped.split(LABEL_SEPARATOR).collect();

    if raw_labels.len() != mapped_labels.len() || !raw_labels.iter().any(|l| is_ace_label(l)) {
        return mapped.to_string();
    }

    raw_labels
        .iter()
        .zip(mapped_labels)
        .map(|(raw_label, mapped_label)| {
            if is_ace_label(raw_label) {
                raw_label.to_ascii_lowercase()
            } else {
                mapped_label.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(".")
}

fn is_ace_label(label: &str) -> bool {
    label.is_ascii()
        && label.len() >= ACE_PREFIX.len()
        && label[..ACE_PREFIX.len()].eq_ignore_ascii_case(ACE_PREFIX)
}

/// Normalizes a name with the default (STD3) rules.
///
/// This does *not* check whether `raw` is a single label or a fully
/// qualified name.
pub fn normalize(raw: &str) -> Result<String> {
    Normalizer::new().normalize(raw)
}

/// Normalizes a UTF-8 byte string with the default rules.
pub fn normalize_bytes(raw: &[u8]) -> Result<String> {
    Normalizer::new().normalize_bytes(raw)
}

/// Returns true iff [`normalize`] would succeed. Never panics.
pub fn is_valid_name(raw: &str) -> bool {
    normalize(raw).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use test_case::test_case;

    #[test_case("Foo.ETH", "foo.eth" ; "case folded")]
    #[test_case("foo.eth", "foo.eth" ; "already normal")]
    #[test_case("ｆｏｏ.ＥＴＨ", "foo.eth" ; "fullwidth mapped")]
    #[test_case("foo。eth", "foo.eth" ; "ideographic full stop")]
    #[test_case("Straße.eth", "straße.eth" ; "sharp s kept")]
    #[test_case("ETH", "eth" ; "single label")]
    #[test_case("xn--bcher-kva.eth", "xn--bcher-kva.eth" ; "ace label kept")]
    #[test_case("XN--BCHER-KVA.ETH", "xn--bcher-kva.eth" ; "ace label lowercased")]
    #[test_case("Bücher.eth", "bücher.eth" ; "unicode label kept")]
    #[test_case("a..b", "a..b" ; "doubled dot passes through")]
    #[test_case("eth.", "eth." ; "trailing dot passes through")]
    #[test_case(".eth", ".eth" ; "leading dot passes through")]
    fn test_normalize(raw: &str, expected: &str) {
        assert_eq!(normalize(raw).unwrap(), expected);
    }

    #[test]
    fn test_empty_is_root() {
        assert_eq!(normalize("").unwrap(), "");
        assert_eq!(normalize_bytes(b"").unwrap(), "");
        assert!(is_valid_name(""));
    }

    #[test_case("a b.eth" ; "space")]
    #[test_case("foo\u{0}.eth" ; "nul")]
    #[test_case("xn--a.eth" ; "bad punycode")]
    fn test_normalize_rejects(raw: &str) {
        let err = normalize(raw).unwrap_err();
        assert!(err.is_invalid_name(), "unexpected error: {err}");
        assert!(!is_valid_name(raw));
    }

    #[test]
    fn test_invalid_name_carries_reason() {
        let err = normalize("xn--a.eth").unwrap_err();
        match err {
            EnsError::InvalidName { name, reason } => {
                assert_eq!(name, "xn--a.eth");
                assert!(reason.starts_with("UTS-46 processing failed: "), "{reason}");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_normalize_bytes() {
        assert_eq!(normalize_bytes("Foo.ETH".as_bytes()).unwrap(), "foo.eth");
    }

    #[test]
    fn test_normalize_bytes_rejects_bad_utf8() {
        let err = normalize_bytes(&[0x66, 0x6f, 0xff, 0xfe]).unwrap_err();
        assert!(err.is_invalid_name());
    }

    #[test]
    fn test_relaxed_std3_accepts_space() {
        let relaxed = Normalizer::with_config(NormalizerConfig {
            std3_rules: false,
            check_hyphens: false,
        });
        assert!(relaxed.is_valid_name("a b.eth"));
        assert!(!Normalizer::new().is_valid_name("a b.eth"));
    }

    #[test]
    fn test_hyphen_checks() {
        assert!(is_valid_name("-foo.eth"));
        let strict = Normalizer::with_config(NormalizerConfig::strict());
        assert!(!strict.is_valid_name("-foo.eth"));
        assert!(strict.is_valid_name("foo-bar.eth"));
    }

    #[test]
    fn test_config_serde() {
        let json = serde_json::to_string(&NormalizerConfig::default()).unwrap();
        let config: NormalizerConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, NormalizerConfig::default());
    }

    proptest! {
        #[test]
        fn prop_normalize_idempotent(raw in "[a-zA-Z0-9ａ-ｚＡ-Ｚß-]{1,12}(\\.[a-zA-Z0-9ａ-ｚ-]{1,12}){0,3}") {
            if let Ok(once) = normalize(&raw) {
                prop_assert_eq!(normalize(&once).unwrap(), once);
            }
        }

        #[test]
        fn prop_validity_partition(raw in any::<String>()) {
            prop_assert_eq!(is_valid_name(&raw), normalize(&raw).is_ok());
        }
    }
}
