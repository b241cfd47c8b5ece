use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde_json::Map;

use crate::models::{Chunk, IntentData, NluDataset, TrainTestAudioEntry, Utterance};

pub fn chunk(text: &str, entity: Option<&str>) -> Chunk {
    Chunk {
        text: text.to_string(),
        entity: entity.map(|e| Some(e.to_string())),
        slot_name: entity.map(|e| e.trim_start_matches("snips/").to_string()),
        extra: Map::new(),
    }
}

pub fn audio_entry(text: &str, path_file: &str) -> TrainTestAudioEntry {
    TrainTestAudioEntry {
        text: text.to_string(),
        path_file: PathBuf::from(path_file),
    }
}

pub fn test_datasets_path() -> PathBuf {
    Path::new("data").join("tests").join("datasets")
}

pub struct DatasetBuilder {
    language: String,
    intents: HashMap<String, IntentData>,
}

impl DatasetBuilder {
    pub fn new(language: &str) -> Self {
        Self {
            language: language.to_string(),
            intents: HashMap::new(),
        }
    }

    pub fn intent(mut self, intent: &str) -> Self {
        self.intents
            .entry(intent.to_string())
            .or_insert_with(|| IntentData {
                utterances: vec![],
                extra: Map::new(),
            });
        self
    }

    pub fn utterance(mut self, intent: &str, chunks: Vec<(&str, Option<&str>)>) -> Self {
        let utterance = Utterance {
            data: chunks
                .into_iter()
                .map(|(text, entity)| chunk(text, entity))
                .collect(),
            extra: Map::new(),
        };
        self = self.intent(intent);
        self.intents
            .get_mut(intent)
            .unwrap()
            .utterances
            .push(utterance);
        self
    }

    pub fn build(self) -> NluDataset {
        NluDataset {
            language: Some(self.language),
            intents: self.intents,
            entities: HashMap::new(),
            extra: Map::new(),
        }
    }
}
