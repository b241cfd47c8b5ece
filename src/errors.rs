use failure::Fail;

#[derive(Debug, Fail)]
pub enum SpeechDatasetError {
    #[fail(display = "Text {} is absent from audio dataset", _0)]
    TextNotFound(String),
    #[fail(display = "File {} does not exist", _0)]
    AudioFileNotFound(String),
    #[fail(display = "Training dataset has no language")]
    MissingLanguage,
    #[fail(display = "{}", _0)]
    UnsupportedOperation(&'static str),
    #[fail(display = "Unable to load dataset from '{}'", _0)]
    DatasetLoad(String),
}

pub type Result<T> = ::std::result::Result<T, ::failure::Error>;
