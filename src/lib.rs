mod audio_corpus;
mod dataset;
pub mod errors;
pub mod models;
#[cfg(test)]
mod testutils;
mod utils;

pub use crate::audio_corpus::{AudioCorpus, AUDIO_DIRECTORY};
pub use crate::dataset::{
    load_speech_dataset, CrossValDataset, DatasetKind, FromDir, SpeechDataset, TrainTestDataset,
    CONFIG_FILENAME, METADATA_FILENAME, TEST_DATASET_FILENAME, TRAINING_DATASET_FILENAME,
};
pub use crate::errors::*;
pub use crate::models::*;
pub use crate::utils::{
    keep_only_utterances_with_audio, load_json, normalize_path, retrieve_utterances_labels,
    EntityName, FilteringReport, IntentName, SlotName,
};
