use clap::{App, Arg};
use snips_speech_datasets::{load_speech_dataset, SpeechDataset};

fn main() {
    env_logger::Builder::from_default_env()
        .default_format_timestamp_nanos(true)
        .init();

    let matches = App::new("snips-speech-dataset-lookup")
        .about("Look up audio files and labels in a speech dataset")
        .arg(
            Arg::with_name("DATASET_DIR")
                .required(true)
                .takes_value(true)
                .index(1)
                .help("path to the train/test or cross validation dataset directory"),
        )
        .arg(
            Arg::with_name("QUERIES")
                .required(true)
                .multiple(true)
                .index(2)
                .help("sentences to look up, or audio file names when --wav is set"),
        )
        .arg(
            Arg::with_name("wav")
                .short("w")
                .long("wav")
                .help("look up audio file names instead of sentences"),
        )
        .get_matches();
    let dataset_dir = matches.value_of("DATASET_DIR").unwrap();
    let lookup_wav = matches.is_present("wav");

    println!("\nLoading the dataset...");
    let dataset = load_speech_dataset(dataset_dir).unwrap();
    println!(
        "Loaded a '{}' dataset with {} recordings",
        dataset.language().unwrap_or("unknown"),
        dataset.audio_corpus().len()
    );

    for query in matches.values_of("QUERIES").unwrap() {
        let text = if lookup_wav {
            match dataset.get_transcript(query) {
                Ok(text) => text,
                Err(error) => {
                    println!("> {}\n{}", query, error);
                    continue;
                }
            }
        } else {
            query
        };
        let audio_file = match dataset.get_audio_file(text) {
            Ok(audio_file) => audio_file,
            Err(error) => {
                println!("> {}\n{}", text, error);
                continue;
            }
        };
        println!("> {}", text);
        println!("audio file: {}", audio_file.display());
        match dataset.get_labels_from_text(text) {
            Ok(labels) => println!("{}", serde_json::to_string_pretty(labels).unwrap()),
            Err(error) => println!("no labels: {}", error),
        }
    }
}
