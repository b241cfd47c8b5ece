pub mod cross_validation;

use std::collections::HashMap;
use std::path::Path;

use log::info;

pub use self::cross_validation::CrossValDataset;
pub use self::train_test::TrainTestDataset;
use crate::audio_corpus::AudioCorpus;
use crate::errors::*;
use crate::models::{NluDataset, UtteranceLabels};

pub const METADATA_FILENAME: &str = "metadata.json";
pub const TRAINING_DATASET_FILENAME: &str = "training_dataset.json";
pub const TEST_DATASET_FILENAME: &str = "test_dataset.json";
pub const CONFIG_FILENAME: &str = "config.json";

/// Common interface of the datasets used to evaluate an NLU engine on audio
pub trait SpeechDataset {
    fn language(&self) -> Option<&str>;

    fn training_dataset(&self) -> &NluDataset;

    fn test_dataset(&self) -> Result<&NluDataset>;

    fn audio_corpus(&self) -> &AudioCorpus;

    fn utterances_labels(&self) -> &HashMap<String, UtteranceLabels>;

    fn get_audio_file(&self, text: &str) -> Result<&Path> {
        self.audio_corpus().get_audio_file(text)
    }

    fn get_transcript(&self, audio_file_name: &str) -> Result<&str> {
        self.audio_corpus().get_transcript(audio_file_name)
    }

    fn get_labels_from_text(&self, text: &str) -> Result<&UtteranceLabels> {
        let labels = self
            .utterances_labels()
            .get(text)
            .ok_or_else(|| SpeechDatasetError::TextNotFound(text.to_string()))?;
        Ok(labels)
    }

    fn get_labels_from_wav(&self, audio_file_name: &str) -> Result<&UtteranceLabels> {
        let text = self.get_transcript(audio_file_name)?;
        self.get_labels_from_text(text)
    }
}

pub trait FromDir {
    fn from_dir<P: AsRef<Path>>(dir: P) -> Result<Self>
    where
        Self: Sized;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetKind {
    TrainTest,
    CrossValidation,
}

impl DatasetKind {
    /// Cross validation datasets are described by a `config.json` file
    pub fn detect<P: AsRef<Path>>(dir: P) -> Self {
        if dir.as_ref().join(CONFIG_FILENAME).is_file() {
            DatasetKind::CrossValidation
        } else {
            DatasetKind::TrainTest
        }
    }
}

pub fn load_speech_dataset<P: AsRef<Path>>(dir: P) -> Result<Box<dyn SpeechDataset>> {
    let kind = DatasetKind::detect(&dir);
    info!("Loading {:?} dataset from {:?} ...", kind, dir.as_ref());
    match kind {
        DatasetKind::TrainTest => Ok(Box::new(TrainTestDataset::from_dir(dir)?) as _),
        DatasetKind::CrossValidation => Ok(Box::new(CrossValDataset::from_dir(dir)?) as _),
    }
}
