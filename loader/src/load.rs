//! Loading activity data: protected envelope first, plain JSON second.
//!
//! A failed decode is never retried. The caller gets either the protected
//! data, the plain fallback, or an [`Error::Exhausted`] carrying both
//! failures.

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::auth::AdminGate;
use crate::dataset::Dataset;
use crate::error::Error;
use crate::source::Source;

/// Which resource the data came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Protected,
    Plain,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Loaded<T> {
    pub value: T,
    pub origin: Origin,
}

fn fetch_body(source: &dyn Source) -> Result<String, Error> {
    let body = source.fetch()?.ok_or_else(|| Error::NotFound(source.name()))?;
    if body.trim().is_empty() {
        return Err(Error::Empty(source.name()));
    }
    Ok(body)
}

/// Fetches an envelope and opens it.
pub fn load_protected<T>(source: &dyn Source) -> Result<T, Error>
where
    T: DeserializeOwned,
{
    let body = fetch_body(source)?;
    let value = envelope::unprotect_as(&body)?;
    debug!(source = %source.name(), "decoded protected data");
    Ok(value)
}

/// Fetches a plain JSON resource.
pub fn load_plain<T>(source: &dyn Source) -> Result<T, Error>
where
    T: DeserializeOwned,
{
    let body = fetch_body(source)?;
    Ok(serde_json::from_str(&body)?)
}

/// Loads `protected`, falling back to `plain` on any failure.
pub fn load_with_fallback<T>(protected: &dyn Source, plain: &dyn Source) -> Result<Loaded<T>, Error>
where
    T: DeserializeOwned,
{
    load_protected(protected)
        .map(|value| Loaded {
            value,
            origin: Origin::Protected,
        })
        .or_else(|protected_err| {
            warn!(
                source = %protected.name(),
                fallback = %plain.name(),
                error = %protected_err,
                "protected data unavailable, loading plain data"
            );
            load_plain(plain)
                .map(|value| Loaded {
                    value,
                    origin: Origin::Plain,
                })
                .map_err(|plain_err| Error::Exhausted {
                    protected: Box::new(protected_err),
                    plain: Box::new(plain_err),
                })
        })
}

/// Reads the unprotected dataset for the admin editor.
///
/// The caller must pass the gate first. Once authorized, a missing or
/// unreadable dataset is served as [`Dataset::empty`].
pub fn load_admin(
    gate: &AdminGate,
    authorization: Option<&str>,
    source: &dyn Source,
) -> Result<Dataset, Error> {
    gate.require(authorization)?;
    Ok(load_plain(source).unwrap_or_else(|e| {
        warn!(source = %source.name(), error = %e, "unprotected data unavailable, serving empty dataset");
        Dataset::empty()
    }))
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::{Value, json};

    use crate::auth::AdminGate;
    use crate::error::Error;
    use crate::load::{Origin, load_admin, load_plain, load_protected, load_with_fallback};
    use crate::source::MemorySource;

    const PROTECTED: &str = r#"{"d":"V3pFc01pd3pYUT09","c":422,"v":2}"#;

    #[test]
    fn test_load_protected() {
        let value: Value = load_protected(&MemorySource::new("protected", PROTECTED)).unwrap();
        assert_eq!(json!([1, 2, 3]), value);
    }

    #[test]
    fn test_load_plain() {
        let value: Value = load_plain(&MemorySource::new("plain", "[4]")).unwrap();
        assert_eq!(json!([4]), value);
    }

    #[test]
    fn test_fallback_not_used_when_protected_loads() {
        let protected = MemorySource::new("protected", PROTECTED);
        let plain = MemorySource::missing("plain");
        let loaded = load_with_fallback::<Value>(&protected, &plain).unwrap();
        assert_eq!(Origin::Protected, loaded.origin);
        assert_eq!(json!([1, 2, 3]), loaded.value);
    }

    #[rstest(
        protected,
        case(MemorySource::missing("protected")),
        case(MemorySource::new("protected", "")),
        case(MemorySource::new("protected", "  \n")),
        case(MemorySource::new("protected", "not json")),
        case(MemorySource::new("protected", r#"{"d":"V3pFc01pd3pYUT09","c":1,"v":2}"#)),
        case(MemorySource::new("protected", r#"{"d":"V3pFc01pd3pYUT09","c":422,"v":9}"#))
    )]
    fn test_fallback_to_plain(protected: MemorySource) {
        let plain = MemorySource::new("plain", r#"{"activities":[]}"#);
        let loaded = load_with_fallback::<Value>(&protected, &plain).unwrap();
        assert_eq!(Origin::Plain, loaded.origin);
        assert_eq!(json!({"activities": []}), loaded.value);
    }

    #[test]
    fn test_both_sources_fail() {
        let protected = MemorySource::new("protected", "not json");
        let plain = MemorySource::missing("plain");
        match load_with_fallback::<Value>(&protected, &plain) {
            Err(Error::Exhausted { protected, plain }) => {
                assert!(matches!(*protected, Error::Envelope(_)));
                assert!(matches!(*plain, Error::NotFound(_)));
            }
            other => panic!("expected exhausted sources, got {other:?}"),
        }
    }

    const UNPROTECTED: &str = r#"{"metadata":{"lastUpdated":"2025-03-01T10:00:00Z","totalActivities":1},"activities":[{"id":7,"title":"Olympiáda"}]}"#;

    #[test]
    fn test_load_admin_authorized() {
        let gate = AdminGate::new("s3cret");
        let source = MemorySource::new("unprotected", UNPROTECTED);
        let dataset = load_admin(&gate, Some("Bearer s3cret"), &source).unwrap();
        assert_eq!(1, dataset.metadata.total_activities);
        assert_eq!(json!("Olympiáda"), dataset.activities[0]["title"]);
    }

    #[rstest(header, case(None), case(Some("Bearer guess")), case(Some("s3cret")))]
    fn test_load_admin_unauthorized(header: Option<&str>) {
        let gate = AdminGate::new("s3cret");
        let source = MemorySource::new("unprotected", UNPROTECTED);
        assert!(matches!(
            load_admin(&gate, header, &source),
            Err(Error::Unauthorized)
        ));
    }

    #[rstest(
        source,
        case(MemorySource::missing("unprotected")),
        case(MemorySource::new("unprotected", "")),
        case(MemorySource::new("unprotected", "not json")),
        case(MemorySource::new("unprotected", r#"{"activities":{"id":1}}"#))
    )]
    fn test_load_admin_serves_empty_dataset(source: MemorySource) {
        let gate = AdminGate::new("s3cret");
        let dataset = load_admin(&gate, Some("Bearer s3cret"), &source).unwrap();
        assert_eq!(0, dataset.metadata.total_activities);
        assert!(dataset.activities.is_empty());
    }
}
