//! Deterministic node identifiers.
//!
//! Three strategies, all pure functions of their inputs:
//!
//! - **natural key**: `<base><record id><suffix>` for sub-entities owned by
//!   exactly one record (the entry, its photo, a production step, ...).
//! - **content key**: `<base><sha1 hex of text>` for entities without a
//!   natural key (collections, series, subjects, titles, actor names). Two
//!   records carrying the same text resolve to the same node.
//! - **composite key**: content key over the ordered concatenation of several
//!   texts, with no delimiter (box label + box number).
//!
//! The digest is SHA-1 over the raw UTF-8 bytes: no case folding and no
//! whitespace normalisation, so `"Fototeca Zeri"` and `"Fototeca  Zeri"` are
//! different nodes. Keeping SHA-1 keeps identifiers compatible with graphs
//! produced by earlier schedaF conversions.
//!
//! Thesaurus terms (materials, formats, types) are not hashed; their text is
//! form-urlencoded into the IRI instead ([`term_key`]).

use crate::graph::NodeId;
use sha1::{Digest, Sha1};

/// Lowercase hex SHA-1 over the UTF-8 bytes of `text`.
pub fn content_digest(text: &str) -> String {
    let mut hasher = Sha1::new();
    hasher.update(text.as_bytes());
    hex(&hasher.finalize())
}

/// Lowercase hex SHA-1 over the ordered concatenation of `parts`.
pub fn composite_digest(parts: &[&str]) -> String {
    let mut hasher = Sha1::new();
    for part in parts {
        hasher.update(part.as_bytes());
    }
    hex(&hasher.finalize())
}

fn hex(bytes: &[u8]) -> String {
    use std::fmt::Write as _;

    let mut out = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        let _ = write!(&mut out, "{b:02x}");
    }
    out
}

/// `<base><record_id><suffix>`; the record id is form-urlencoded so that
/// ids with spaces or slashes still yield one IRI path segment.
pub fn natural_key(base: &str, record_id: &str, suffix: &str) -> NodeId {
    NodeId::from_iri(format!("{base}{}{suffix}", encode_segment(record_id)))
}

pub fn content_key(base: &str, text: &str) -> NodeId {
    NodeId::from_iri(format!("{base}{}", content_digest(text)))
}

/// Callers must qualify cross-type collisions through `base` (box vs issue
/// use different base paths).
pub fn composite_key(base: &str, parts: &[&str]) -> NodeId {
    NodeId::from_iri(format!("{base}{}", composite_digest(parts)))
}

/// `<base><form-urlencoded text>` for controlled-vocabulary terms.
pub fn term_key(base: &str, text: &str) -> NodeId {
    NodeId::from_iri(format!("{base}{}", encode_segment(text)))
}

/// Form-urlencode one IRI path segment (space becomes `+`, `/` is escaped).
pub fn encode_segment(text: &str) -> String {
    url::form_urlencoded::byte_serialize(text.as_bytes()).collect()
}

/// Normalise a catalogue file path (`\80000\45600\45423.jpg`) into a
/// slash-separated relative path with each segment encoded.
pub fn file_path_key(base: &str, raw_path: &str) -> Option<NodeId> {
    let normalised = raw_path.replace('\\', "/");
    let segments: Vec<String> = normalised
        .trim_matches('/')
        .split('/')
        .filter(|s| !s.trim().is_empty())
        .map(encode_segment)
        .collect();
    if segments.is_empty() {
        return None;
    }
    Some(NodeId::from_iri(format!("{base}{}", segments.join("/"))))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_digest_matches_known_sha1() {
        // printf 'abc' | sha1sum
        assert_eq!(
            content_digest("abc"),
            "a9993e364706816aba3e25717850c26c9cd0d89d"
        );
    }

    #[test]
    fn composite_digest_is_plain_concatenation() {
        assert_eq!(composite_digest(&["5", "42"]), content_digest("542"));
        assert_eq!(composite_digest(&["a", "b", "c"]), content_digest("abc"));
    }

    #[test]
    fn content_key_is_case_and_whitespace_sensitive() {
        let a = content_key("http://x/", "Fototeca Zeri");
        let b = content_key("http://x/", "fototeca zeri");
        let c = content_key("http://x/", "Fototeca  Zeri");
        assert_ne!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn natural_key_encodes_the_record_id() {
        assert_eq!(
            natural_key("http://x/", "67680", "/photo").as_str(),
            "http://x/67680/photo"
        );
        assert_eq!(natural_key("http://x/", "C 6133", "").as_str(), "http://x/C+6133");
    }

    #[test]
    fn term_key_matches_form_encoding() {
        assert_eq!(
            term_key("http://x/", "gelatina ai sali d'argento/ carta baritata").as_str(),
            "http://x/gelatina+ai+sali+d%27argento%2F+carta+baritata"
        );
    }

    #[test]
    fn file_path_key_normalises_separators() {
        let node = file_path_key("http://x/foto/", r"\80000\45600\45423.jpg").expect("path");
        assert_eq!(node.as_str(), "http://x/foto/80000/45600/45423.jpg");
        assert!(file_path_key("http://x/", r"\\").is_none());
    }
}
