use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("failed to decode prediction response: {0}")]
    Json(#[from] serde_json::Error),
}

/// A single detected note
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Note {
    /// MIDI note number
    pub pitch: i32,
    /// Onset, in seconds
    pub start: f64,
    /// Offset, in seconds
    pub end: f64,
    /// Conventionally 0-127, not enforced
    pub velocity: i32,
}

impl Note {
    /// `end - start`; negative if the endpoint sent inverted times
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }
}

/// Notes sharing a General-MIDI program and drum flag
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Instrument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// General-MIDI program number
    pub program: i32,
    /// Percussion channel
    pub is_drum: bool,
    pub notes: Vec<Note>,
}

/// Reply from the pitch-prediction endpoint.
///
/// The endpoint has been seen answering with either a flat
///  `{"notes": [...]}` list or an `{"instruments": [...]}`
///  grouping. Which one applies is decided by the top-level
///  key present, with `notes` taking precedence.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PredictionResponse {
    Notes { notes: Vec<Note> },
    Instruments { instruments: Vec<Instrument> },
}

/// Read a JSON object only; derived struct visitors would also take positional arrays
fn object<'de, D>(deserializer: D) -> Result<Value, D::Error>
where
    D: Deserializer<'de>,
{
    Map::<String, Value>::deserialize(deserializer).map(Value::Object)
}

#[allow(dead_code)]
#[derive(Deserialize)]
#[serde(remote = "Note")]
struct NoteFields {
    pitch: i32,
    start: f64,
    end: f64,
    velocity: i32,
}

impl<'de> Deserialize<'de> for Note {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        NoteFields::deserialize(object(deserializer)?).map_err(D::Error::custom)
    }
}

#[allow(dead_code)]
#[derive(Deserialize)]
#[serde(remote = "Instrument")]
struct InstrumentFields {
    #[serde(default)]
    name: Option<String>,
    program: i32,
    is_drum: bool,
    notes: Vec<Note>,
}

impl<'de> Deserialize<'de> for Instrument {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        InstrumentFields::deserialize(object(deserializer)?).map_err(D::Error::custom)
    }
}

/// Remove `key`, treating an explicit `null` as absent
fn take(fields: &mut Map<String, Value>, key: &str) -> Option<Value> {
    fields.remove(key).filter(|value| !value.is_null())
}

impl<'de> Deserialize<'de> for PredictionResponse {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let mut fields = Map::<String, Value>::deserialize(deserializer)?;

        // `instruments` is only looked at when `notes` is absent
        if let Some(notes) = take(&mut fields, "notes") {
            let notes = Vec::<Note>::deserialize(notes).map_err(D::Error::custom)?;
            return Ok(PredictionResponse::Notes { notes });
        }

        match take(&mut fields, "instruments") {
            Some(instruments) => {
                let instruments =
                    Vec::<Instrument>::deserialize(instruments).map_err(D::Error::custom)?;
                Ok(PredictionResponse::Instruments { instruments })
            }
            None => Err(D::Error::custom(
                "expected a `notes` or `instruments` field",
            )),
        }
    }
}

impl PredictionResponse {
    pub fn from_slice(json: &[u8]) -> Result<Self, DecodeError> {
        decode(json)
    }

    pub fn is_grouped(&self) -> bool {
        matches!(self, PredictionResponse::Instruments { .. })
    }

    /// Instrument groups; empty for the flat shape
    pub fn instruments(&self) -> &[Instrument] {
        match self {
            PredictionResponse::Notes { .. } => &[],
            PredictionResponse::Instruments { instruments } => instruments.as_slice(),
        }
    }

    /// Every note in the response, across all instruments
    pub fn notes(&self) -> Box<dyn Iterator<Item = &Note> + '_> {
        match self {
            PredictionResponse::Notes { notes } => Box::new(notes.iter()),
            PredictionResponse::Instruments { instruments } => {
                Box::new(instruments.iter().flat_map(|i| i.notes.iter()))
            }
        }
    }

    pub fn note_count(&self) -> usize {
        match self {
            PredictionResponse::Notes { notes } => notes.len(),
            PredictionResponse::Instruments { instruments } => {
                instruments.iter().map(|i| i.notes.len()).sum()
            }
        }
    }
}

/// Decode a response body.
///
/// Unknown fields are ignored. Pitch, velocity and timing are
///  passed through without range checks.
pub fn decode(json: &[u8]) -> Result<PredictionResponse, DecodeError> {
    let response: PredictionResponse = serde_json::from_slice(json)?;
    tracing::debug!(
        grouped = response.is_grouped(),
        notes = response.note_count(),
        "decoded prediction response"
    );
    Ok(response)
}
