use chrono::{DateTime, Utc};
use envelope::Envelope;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use veil::encoder::{EncodableTo, Encoder};

use crate::error::Error;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    pub last_updated: DateTime<Utc>,
    pub total_activities: usize,
    /// Keys other than the two above, carried through unchanged
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The full activity list with its metadata header.
///
/// Activities are kept as raw JSON objects; their schema belongs to the
/// front end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub metadata: Metadata,
    pub activities: Vec<Value>,
}

impl Dataset {
    /// Stamps the current time and the activity count.
    pub fn new(activities: Vec<Value>) -> Self {
        Dataset {
            metadata: Metadata {
                last_updated: Utc::now(),
                total_activities: activities.len(),
                extra: Map::new(),
            },
            activities,
        }
    }

    /// Placeholder served when no data has been published yet.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Builds a dataset from an update body of the form
    /// `{"activities": [...]}`. Other keys are ignored.
    pub fn from_update(mut body: Value) -> Result<Self, Error> {
        match body.get_mut("activities").map(Value::take) {
            Some(Value::Array(activities)) => Ok(Self::new(activities)),
            _ => Err(Error::InvalidActivities),
        }
    }
}

impl EncodableTo<Dataset> for Envelope {}

impl Encoder<Dataset, Envelope> for Dataset {
    type Error = envelope::Error;

    fn encode(&self) -> Result<Envelope, Self::Error> {
        envelope::protect_envelope(self)
    }
}
