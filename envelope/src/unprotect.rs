use std::fmt::{Display, Formatter};

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use veil::decoder::Decoder;

use crate::checksum::Checksum;
use crate::error::Error;
use crate::{Envelope, Protected};

/// Opens envelope text and returns the plain JSON value.
///
/// Dispatches on `v`, removes both base64 layers (and the version 1
/// rotation), verifies the checksum and parses the recovered JSON.
pub fn unprotect(text: &str) -> Result<Value, Error> {
    let envelope: Envelope = text.decode()?;
    let protected: Protected = envelope.decode()?;
    protected.decode()
}

/// Like [`unprotect`], deserializing straight into `T`.
pub fn unprotect_as<T>(text: &str) -> Result<T, Error>
where
    T: DeserializeOwned,
{
    let envelope: Envelope = text.decode()?;
    let protected: Protected = envelope.decode()?;
    let json = protected.recover()?;
    serde_json::from_str(&json).map_err(|e| Error::Format(e.to_string()))
}

/// Summary of an envelope, produced without failing on a checksum mismatch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub version: u8,
    pub stored_checksum: Option<u64>,
    pub computed_checksum: Checksum,
    pub payload_len: usize,
    pub json_len: usize,
    pub intact: bool,
}

impl Display for Report {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Envelope:")?;
        writeln!(f, "    Version: {}", self.version)?;
        match self.stored_checksum {
            Some(c) => writeln!(f, "    Stored checksum: {}", c)?,
            None => writeln!(f, "    Stored checksum: (missing)")?,
        }
        writeln!(f, "    Computed checksum: {}", self.computed_checksum)?;
        writeln!(f, "    Payload length: {} bytes", self.payload_len)?;
        writeln!(f, "    JSON length: {} bytes", self.json_len)?;
        write!(
            f,
            "    Integrity: {}",
            if self.intact { "ok" } else { "MISMATCH" }
        )
    }
}

/// Inspects envelope text. Format, version and base64 errors still fail;
/// a checksum mismatch is reported through [`Report::intact`].
pub fn inspect(text: &str) -> Result<Report, Error> {
    let envelope: Envelope = text.decode()?;
    let protected: Protected = envelope.decode()?;
    let (json, computed) = protected.reveal()?;
    let stored = protected.payload().checksum();
    Ok(Report {
        version: protected.version().number(),
        stored_checksum: stored,
        computed_checksum: computed,
        payload_len: protected.payload().data().len(),
        json_len: json.len(),
        intact: computed.matches(stored),
    })
}

#[cfg(test)]
mod tests {
    use base64text::to_base64;
    use proptest::prelude::*;
    use rstest::rstest;
    use serde::Deserialize;
    use serde_json::{Value, json};

    use crate::legacy::{FORWARD_SHIFT, shift_printable};
    use crate::{Checksum, Envelope, ErrorKind, Version, inspect, protect, unprotect, unprotect_as};

    fn legacy_envelope(json: &str) -> String {
        let manipulated = shift_printable(json, FORWARD_SHIFT);
        let d = to_base64(&to_base64(&manipulated));
        Envelope::new(d, Checksum::utf16(json), Version::Legacy).to_string()
    }

    fn kind_of(text: &str) -> ErrorKind {
        match unprotect(text) {
            Ok(v) => panic!("expected an error, got {v}"),
            Err(e) => e.kind(),
        }
    }

    #[rstest(
        value,
        case(json!(null)),
        case(json!(true)),
        case(json!(42)),
        case(json!(-1.25)),
        case(json!("")),
        case(json!([])),
        case(json!({})),
        case(json!({"metadata": {"totalActivities": 1}, "activities": [{"id": 1, "title": "Test"}]})),
        case(json!({"title": "Středoškolská odborná činnost", "tags": ["soutěž", "věda"]})),
        case(json!({"emoji": "🎉🚀", "quote": "\"uvozovky\" a \\ lomítko", "line": "a\nb"}))
    )]
    fn test_roundtrip(value: Value) {
        let text = protect(&value).unwrap();
        assert_eq!(value, unprotect(&text).unwrap());
    }

    #[test]
    fn test_roundtrip_keeps_key_order() {
        let value = json!({"z": 1, "a": 2, "m": 3});
        let text = protect(&value).unwrap();
        let decoded = unprotect(&text).unwrap();
        assert_eq!(
            r#"{"z":1,"a":2,"m":3}"#,
            serde_json::to_string(&decoded).unwrap()
        );
    }

    #[test]
    fn test_missing_version_decodes_as_version_2() {
        let value = json!({"activities": [{"id": 7, "title": "Dobrovolnictví"}]});
        let with_version = protect(&value).unwrap();
        let envelope: Value = serde_json::from_str(&with_version).unwrap();
        let without_version = json!({"d": envelope["d"], "c": envelope["c"]}).to_string();
        assert_eq!(
            unprotect(&with_version).unwrap(),
            unprotect(&without_version).unwrap()
        );
    }

    #[rstest(
        json,
        case(r#"{"id":1,"title":"Dobrovolnictví"}"#),
        case(r#"{"metadata":{"totalActivities":1},"activities":[{"id":1,"title":"Test"}]}"#),
        case(r#"{"note":"~ tilde, space and 🎉"}"#)
    )]
    fn test_legacy_envelope_decodes(json: &str) {
        let text = legacy_envelope(json);
        let expected: Value = serde_json::from_str(json).unwrap();
        assert_eq!(expected, unprotect(&text).unwrap());
    }

    #[rstest(
        input,
        expected,
        case("not json", ErrorKind::Format),
        case(r#"{"c":1,"v":2}"#, ErrorKind::Format),
        case(r#"{"d":"V3pFc01pd3pYUT09","c":422,"v":3}"#, ErrorKind::UnsupportedVersion),
        case(r#"{"d":"V3pFc01pd3pYUT09","c":423,"v":2}"#, ErrorKind::Integrity),
        case(r#"{"d":"V3pFc01pd3pYUT09","v":2}"#, ErrorKind::Integrity),
        case(r#"{"d":"not base64!","c":0,"v":2}"#, ErrorKind::Decode),
        // base64("bm90IGpzb24=") where the inner text is "not json"
        case(r#"{"d":"Ym05MElHcHpiMjQ9","c":0,"v":2}"#, ErrorKind::Integrity)
    )]
    fn test_unprotect_with_error(input: &str, expected: ErrorKind) {
        assert_eq!(expected, kind_of(input));
    }

    #[test]
    fn test_verified_but_unparsable_payload_is_format_error() {
        // "not json" sums to 811
        let text = r#"{"d":"Ym05MElHcHpiMjQ9","c":811,"v":2}"#;
        assert_eq!(ErrorKind::Format, kind_of(text));
    }

    #[test]
    fn test_single_character_flip_is_detected() {
        let value = json!({"metadata": {"totalActivities": 2}, "activities": [
            {"id": 1, "title": "Olympiáda"},
            {"id": 2, "title": "Stáž"}
        ]});
        let envelope: Envelope = protect(&value).unwrap().parse().unwrap();
        let data = envelope.data();
        for (i, ch) in data.char_indices() {
            let replacement = if ch == 'A' { 'B' } else { 'A' };
            let mut tampered = data.to_string();
            tampered.replace_range(i..i + ch.len_utf8(), &replacement.to_string());
            let text = json!({"d": tampered, "c": envelope.checksum(), "v": 2}).to_string();
            let kind = kind_of(&text);
            assert!(
                matches!(kind, ErrorKind::Integrity | ErrorKind::Decode),
                "position {i}: unexpected {kind:?}"
            );
        }
    }

    #[derive(Debug, Deserialize, PartialEq)]
    #[serde(rename_all = "camelCase")]
    struct Metadata {
        total_activities: usize,
    }

    #[derive(Debug, Deserialize, PartialEq)]
    struct Dataset {
        metadata: Metadata,
        activities: Vec<Value>,
    }

    #[test]
    fn test_unprotect_as_typed_value() {
        let value = json!({"metadata": {"totalActivities": 1}, "activities": [{"id": 1}]});
        let text = protect(&value).unwrap();
        let dataset: Dataset = unprotect_as(&text).unwrap();
        assert_eq!(1, dataset.metadata.total_activities);
        assert_eq!(vec![json!({"id": 1})], dataset.activities);
    }

    #[test]
    fn test_inspect_reports_mismatch() {
        let report = inspect(r#"{"d":"V3pFc01pd3pYUT09","c":1}"#).unwrap();
        assert_eq!(2, report.version);
        assert_eq!(Some(1), report.stored_checksum);
        assert_eq!(422, report.computed_checksum.value());
        assert_eq!(16, report.payload_len);
        assert_eq!(7, report.json_len);
        assert!(!report.intact);
        assert!(report.to_string().contains("Integrity: MISMATCH"));
    }

    #[test]
    fn test_inspect_legacy() {
        let report = inspect(&legacy_envelope(r#"{"id":1}"#)).unwrap();
        assert_eq!(1, report.version);
        assert!(report.intact);
    }

    proptest! {
        #[test]
        fn prop_string_roundtrip(title in any::<String>(), id in any::<u32>()) {
            let value = json!({"activities": [{"id": id, "title": title}]});
            let text = protect(&value).unwrap();
            prop_assert_eq!(unprotect(&text).unwrap(), value);
        }
    }
}
