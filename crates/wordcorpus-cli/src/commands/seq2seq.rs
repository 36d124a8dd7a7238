use std::io::Write;

use wordcorpus::{Record, Seq2SeqCorpus, Split};

use crate::{
    commands::corpus_args::{SegmenterArgs, SplitArgs},
    input_output::{OutputArgs, write_json_line},
    logging::LogArgs,
};

/// One output line of the seq2seq command.
#[derive(serde::Serialize)]
struct PairLine<'a> {
    split: Split,
    source: &'a Record<u32>,
    target: Option<&'a Record<u32>>,
}

/// Args for the seq2seq command.
#[derive(clap::Args, Debug)]
pub struct Seq2SeqArgs {
    #[command(flatten)]
    splits: SplitArgs,

    #[command(flatten)]
    segmenter: SegmenterArgs,

    #[command(flatten)]
    output: OutputArgs,

    #[clap(flatten)]
    pub logging: LogArgs,
}

impl Seq2SeqArgs {
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(log::LevelFilter::Info)?;

        let corpus = Seq2SeqCorpus::load_from_paths(
            self.segmenter.corpus_options()?,
            &self.splits.train,
            self.splits.dev.as_ref(),
            self.splits.test.as_ref(),
        )?;

        if let Some(path) = &self.output.output {
            log::info!("output: {}", path);
        }
        let mut writer = self.output.open_writer()?;
        for split in [Split::Train, Split::Dev, Split::Test] {
            for (source, target) in corpus.split(split) {
                let line = PairLine {
                    split,
                    source,
                    target: target.as_ref(),
                };
                write_json_line(&mut writer, &line)?;
            }
        }
        writer.flush()?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use wordcorpus::CorpusOptions;

    use super::*;

    #[test]
    fn test_pair_line() {
        let corpus = Seq2SeqCorpus::<u32>::load_from_readers(
            CorpusOptions::default(),
            "hi\thello\n".as_bytes(),
            None,
            None,
        )
        .unwrap();

        let (source, target) = &corpus.train()[0];
        let line = PairLine {
            split: Split::Train,
            source,
            target: target.as_ref(),
        };
        let value = serde_json::to_value(&line).unwrap();
        assert_eq!(value["split"], "train");
        assert_eq!(value["source"]["word_ids"], serde_json::json!([2, 4, 3]));
        assert_eq!(value["target"]["word_ids"], serde_json::json!([2, 5, 3]));
    }
}
