use std::fmt;
use std::path::PathBuf;

use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde_derive::Deserialize;
use serde_json::{Map, Value};

/// Entry of the `metadata.json` array shipped with a train/test dataset
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TrainTestAudioEntry {
    pub text: String,
    pub path_file: PathBuf,
}

/// Entry of a speech corpus `metadata.json`, keyed by utterance id
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SpeechCorpusEntry {
    pub text: String,
    pub filename: String,
}

/// Speech corpus `metadata.json`, with its entries in file order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpeechCorpusMetadata {
    pub entries: Vec<(String, SpeechCorpusEntry)>,
}

impl SpeechCorpusMetadata {
    pub fn values(&self) -> impl Iterator<Item = &SpeechCorpusEntry> {
        self.entries.iter().map(|(_, entry)| entry)
    }
}

impl<'de> de::Deserialize<'de> for SpeechCorpusMetadata {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct MetadataVisitor;

        impl<'de> Visitor<'de> for MetadataVisitor {
            type Value = SpeechCorpusMetadata;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of utterance ids to speech corpus entries")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some(entry) = access.next_entry::<String, SpeechCorpusEntry>()? {
                    entries.push(entry);
                }
                Ok(SpeechCorpusMetadata { entries })
            }
        }

        deserializer.deserialize_map(MetadataVisitor)
    }
}

/// Content of the `config.json` file of a cross validation dataset
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CrossValConfig {
    pub dataset: String,
    pub speech_corpus: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
