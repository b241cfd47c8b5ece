use std::collections::HashMap;
use std::path::Path;

use failure::ResultExt;
use log::info;

use crate::audio_corpus::AudioCorpus;
use crate::dataset::{FromDir, SpeechDataset, CONFIG_FILENAME, METADATA_FILENAME};
use crate::errors::*;
use crate::models::{CrossValConfig, NluDataset, SpeechCorpusMetadata, UtteranceLabels};
use crate::utils::{
    keep_only_utterances_with_audio, load_json, retrieve_utterances_labels, FilteringReport,
};

/// Dataset used to compute cross validation metrics
#[derive(Debug)]
pub struct CrossValDataset {
    config: CrossValConfig,
    dataset: NluDataset,
    audio_corpus: AudioCorpus,
    utterances_labels: HashMap<String, UtteranceLabels>,
    filtering_report: FilteringReport,
}

impl CrossValDataset {
    pub fn new(config: CrossValConfig, dataset: NluDataset, audio_corpus: AudioCorpus) -> Self {
        let (dataset, filtering_report) = keep_only_utterances_with_audio(&dataset, &audio_corpus);
        let utterances_labels = retrieve_utterances_labels(&dataset);
        Self {
            config,
            dataset,
            audio_corpus,
            utterances_labels,
            filtering_report,
        }
    }

    pub fn config(&self) -> &CrossValConfig {
        &self.config
    }

    pub fn filtering_report(&self) -> FilteringReport {
        self.filtering_report
    }

    fn load_files(dir: &Path) -> Result<(CrossValConfig, NluDataset, AudioCorpus)> {
        let config: CrossValConfig = load_json(dir.join(CONFIG_FILENAME))?;
        let dataset = load_json(dir.join(&config.dataset))?;
        let speech_corpus_dir = dir.join(&config.speech_corpus);
        let metadata: SpeechCorpusMetadata =
            load_json(speech_corpus_dir.join(METADATA_FILENAME))?;
        let audio_corpus =
            AudioCorpus::from_speech_corpus_metadata(&speech_corpus_dir, metadata.values())?;
        Ok((config, dataset, audio_corpus))
    }
}

impl FromDir for CrossValDataset {
    fn from_dir<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref();
        let (config, dataset, audio_corpus) = Self::load_files(dir)
            .with_context(|_| SpeechDatasetError::DatasetLoad(dir.display().to_string()))?;
        info!(
            "Loaded speech corpus '{}' with {} recordings",
            config.speech_corpus,
            audio_corpus.len()
        );
        Ok(Self::new(config, dataset, audio_corpus))
    }
}

impl SpeechDataset for CrossValDataset {
    fn language(&self) -> Option<&str> {
        self.dataset.language.as_ref().map(|language| &**language)
    }

    fn training_dataset(&self) -> &NluDataset {
        &self.dataset
    }

    fn test_dataset(&self) -> Result<&NluDataset> {
        Err(SpeechDatasetError::UnsupportedOperation(
            "CrossValDataset is not meant to be used with train test metrics",
        )
        .into())
    }

    fn audio_corpus(&self) -> &AudioCorpus {
        &self.audio_corpus
    }

    fn utterances_labels(&self) -> &HashMap<String, UtteranceLabels> {
        &self.utterances_labels
    }
}
