use std::collections::HashMap;
use std::env;
use std::fs::File;
use std::io::BufReader;
use std::path::{Component, Path, PathBuf};

use failure::ResultExt;
use itertools::Itertools;
use log::warn;
use serde::de::DeserializeOwned;

use crate::audio_corpus::AudioCorpus;
use crate::errors::*;
use crate::models::{NluDataset, UtteranceLabels};

pub type IntentName = String;
pub type SlotName = String;
pub type EntityName = String;

/// Number of utterances dropped while joining a dataset with an audio corpus
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FilteringReport {
    pub skipped: usize,
    pub total: usize,
}

impl FilteringReport {
    pub fn kept(&self) -> usize {
        self.total - self.skipped
    }
}

pub fn load_json<T, P>(path: P) -> Result<T>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::open(path).with_context(|_| format!("Could not open json file {:?}", path))?;
    let content = serde_json::from_reader(BufReader::new(file))
        .with_context(|_| format!("Invalid json file {:?}", path))?;
    Ok(content)
}

/// Returns a copy of `dataset` in which each intent only keeps the utterances
/// whose text has a recording in `audio_corpus`
pub fn keep_only_utterances_with_audio(
    dataset: &NluDataset,
    audio_corpus: &AudioCorpus,
) -> (NluDataset, FilteringReport) {
    let mut cleaned_up_dataset = dataset.clone();
    let mut report = FilteringReport::default();
    for intent_data in cleaned_up_dataset.intents.values_mut() {
        let nb_utterances = intent_data.utterances.len();
        intent_data.utterances.retain(|utterance| {
            let sentence = utterance.text();
            let has_audio = audio_corpus.contains_text(&sentence);
            if !has_audio {
                warn!(
                    "Skipping sentence '{}' from dataset because it does not have an audio file",
                    sentence
                );
            }
            has_audio
        });
        report.total += nb_utterances;
        report.skipped += nb_utterances - intent_data.utterances.len();
    }
    warn!("{} utterances skipped out of {}", report.skipped, report.total);
    (cleaned_up_dataset, report)
}

/// Maps the text of every utterance to its intent and slots
///
/// Intents are visited in name order, so when several utterances share the
/// same text the one from the last intent wins.
pub fn retrieve_utterances_labels(dataset: &NluDataset) -> HashMap<String, UtteranceLabels> {
    let mut utterances_labels = HashMap::new();
    for (intent, intent_data) in dataset.intents.iter().sorted_by(|a, b| a.0.cmp(b.0)) {
        for utterance in intent_data.utterances.iter() {
            let sentence = utterance.text();
            let labels = UtteranceLabels {
                text: sentence.clone(),
                intent: intent.clone(),
                slots: utterance.slots(),
            };
            utterances_labels.insert(sentence, labels);
        }
    }
    utterances_labels
}

/// Makes `path` absolute and resolves `.` and `..` lexically, without
/// requiring the path to exist
pub fn normalize_path<P: AsRef<Path>>(path: P) -> Result<PathBuf> {
    let path = path.as_ref();
    let absolute_path = if path.is_absolute() {
        path.to_path_buf()
    } else {
        env::current_dir()
            .with_context(|_| "Could not retrieve current directory")?
            .join(path)
    };
    let mut normalized = PathBuf::new();
    for component in absolute_path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    Ok(normalized)
}

/// Name of the file pointed by `path`, used as key for transcript lookups
pub fn file_name<P: AsRef<Path>>(path: P) -> Option<String> {
    path.as_ref()
        .file_name()
        .and_then(|name| name.to_str())
        .map(|name| name.to_string())
}
