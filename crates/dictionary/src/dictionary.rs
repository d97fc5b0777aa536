use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::de;

/// One headword as returned by the lookup endpoint.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Entry {
    #[serde(default, deserialize_with = "crate::de::lenient")]
    pub word: Option<String>,
    #[serde(default, deserialize_with = "crate::de::lenient")]
    pub phonetic: Option<String>,
    #[serde(default, deserialize_with = "crate::de::lenient_seq")]
    pub phonetics: Option<Vec<Phonetic>>,
    #[serde(default, deserialize_with = "crate::de::lenient_seq")]
    pub meanings: Option<Vec<Meaning>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Phonetic {
    #[serde(default, deserialize_with = "crate::de::lenient")]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Meaning {
    #[serde(
        default,
        rename = "partOfSpeech",
        deserialize_with = "crate::de::lenient"
    )]
    pub part_of_speech: Option<String>,
    #[serde(default, deserialize_with = "crate::de::lenient_seq")]
    pub definitions: Option<Vec<Definition>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Definition {
    #[serde(default, deserialize_with = "crate::de::lenient")]
    pub definition: Option<String>,
    #[serde(default, deserialize_with = "crate::de::lenient")]
    pub example: Option<String>,
    #[serde(default, deserialize_with = "crate::de::lenient_seq")]
    pub synonyms: Option<Vec<String>>,
}

/// Body the endpoint sends instead of a list, e.g. when a word is unknown.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ErrorPayload {
    #[serde(default, deserialize_with = "crate::de::lenient")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "crate::de::lenient")]
    pub message: Option<String>,
}

/// A decoded response body.
///
/// The only discriminator is whether the top-level JSON value is an array:
/// every other shape, `null` included, is an [`ErrorPayload`].
#[derive(Debug, Clone, PartialEq)]
pub enum LookupResponse {
    Entries(Vec<Entry>),
    Error(ErrorPayload),
}

impl<'de> Deserialize<'de> for LookupResponse {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Value::deserialize(deserializer)? {
            Value::Array(items) => LookupResponse::Entries(de::fitting(items)),
            other => LookupResponse::Error(de::or_default(other)),
        })
    }
}

impl LookupResponse {
    pub fn from_slice(body: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(body)
    }
}

impl Entry {
    /// `phonetic` if set, otherwise the first `phonetics` element carrying text.
    pub fn phonetic_text(&self) -> Option<&str> {
        de::non_empty(&self.phonetic).or_else(|| {
            self.phonetics
                .iter()
                .flatten()
                .find_map(|phonetic| de::non_empty(&phonetic.text))
        })
    }

    pub fn word(&self) -> &str {
        self.word.as_deref().unwrap_or_default()
    }
}

impl Meaning {
    /// Both the part of speech and a definition list, or nothing at all.
    pub fn parts(&self) -> Option<(&str, &[Definition])> {
        let part_of_speech = de::non_empty(&self.part_of_speech)?;
        let definitions = self.definitions.as_deref()?;
        Some((part_of_speech, definitions))
    }
}

impl Definition {
    pub fn text(&self) -> &str {
        self.definition.as_deref().unwrap_or_default()
    }

    pub fn example(&self) -> Option<&str> {
        de::non_empty(&self.example)
    }

    /// The first `limit` synonyms, `None` when there are none.
    pub fn synonyms(&self, limit: usize) -> Option<&[String]> {
        let synonyms = self.synonyms.as_deref().filter(|s| !s.is_empty())?;
        Some(&synonyms[..synonyms.len().min(limit)])
    }
}

impl ErrorPayload {
    pub fn title(&self) -> Option<&str> {
        de::non_empty(&self.title)
    }

    pub fn message(&self) -> Option<&str> {
        de::non_empty(&self.message)
    }
}
