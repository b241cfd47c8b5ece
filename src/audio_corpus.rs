use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use log::debug;

use crate::errors::*;
use crate::models::SpeechCorpusEntry;
use crate::utils::{file_name, normalize_path};

pub const AUDIO_DIRECTORY: &str = "audio";

/// Lookup tables between transcripts and audio recordings
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AudioCorpus {
    audio_files: HashMap<String, PathBuf>,
    transcripts: HashMap<String, String>,
}

impl AudioCorpus {
    /// Builds the corpus from `(text, audio file)` pairs, later pairs override
    /// earlier ones sharing the same text
    pub fn from_entries<I, T, P>(entries: I) -> Self
    where
        I: IntoIterator<Item = (T, P)>,
        T: Into<String>,
        P: Into<PathBuf>,
    {
        let audio_files: HashMap<String, PathBuf> = entries
            .into_iter()
            .map(|(text, path)| (text.into(), path.into()))
            .collect();
        // Sorted so that the winner among texts sharing a file name is stable
        let transcripts = audio_files
            .iter()
            .collect::<BTreeMap<_, _>>()
            .into_iter()
            .filter_map(|(text, path)| file_name(path).map(|name| (name, text.clone())))
            .collect();
        Self {
            audio_files,
            transcripts,
        }
    }

    pub fn from_speech_corpus_metadata<'a, P, I>(speech_corpus_dir: P, entries: I) -> Result<Self>
    where
        P: AsRef<Path>,
        I: IntoIterator<Item = &'a SpeechCorpusEntry>,
    {
        let audio_dir = speech_corpus_dir.as_ref().join(AUDIO_DIRECTORY);
        let audio_files = entries
            .into_iter()
            .map(|entry| -> Result<(String, PathBuf)> {
                let audio_file = normalize_path(audio_dir.join(&entry.filename))?;
                Ok((entry.text.clone(), audio_file))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::from_entries(audio_files))
    }

    pub fn len(&self) -> usize {
        self.audio_files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.audio_files.is_empty()
    }

    pub fn contains_text(&self, text: &str) -> bool {
        self.audio_files.contains_key(text)
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.audio_files.keys().map(|text| &**text)
    }

    pub fn get_audio_file(&self, text: &str) -> Result<&Path> {
        debug!("Looking up audio file of '{}'", text);
        let path = self
            .audio_files
            .get(text)
            .ok_or_else(|| SpeechDatasetError::TextNotFound(text.to_string()))?;
        Ok(path.as_path())
    }

    /// Transcript of the recording named `audio_file_name`
    pub fn get_transcript(&self, audio_file_name: &str) -> Result<&str> {
        debug!("Looking up transcript of '{}'", audio_file_name);
        let text = self
            .transcripts
            .get(audio_file_name)
            .ok_or_else(|| SpeechDatasetError::AudioFileNotFound(audio_file_name.to_string()))?;
        Ok(&**text)
    }
}
