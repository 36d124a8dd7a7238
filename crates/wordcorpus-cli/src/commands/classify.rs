use std::io::Write;

use wordcorpus::{ClassificationCorpus, Record, Split};

use crate::{
    commands::corpus_args::{SegmenterArgs, SplitArgs},
    input_output::{OutputArgs, write_json_line},
    logging::LogArgs,
};

/// One output line of the classify command.
#[derive(serde::Serialize)]
struct RecordLine<'a> {
    split: Split,

    #[serde(flatten)]
    record: &'a Record<u32>,
}

/// Args for the classify command.
#[derive(clap::Args, Debug)]
pub struct ClassifyArgs {
    #[command(flatten)]
    splits: SplitArgs,

    #[command(flatten)]
    segmenter: SegmenterArgs,

    #[command(flatten)]
    output: OutputArgs,

    #[clap(flatten)]
    pub logging: LogArgs,
}

impl ClassifyArgs {
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(log::LevelFilter::Info)?;

        let corpus = ClassificationCorpus::load_from_paths(
            self.segmenter.corpus_options()?,
            &self.splits.train,
            self.splits.dev.as_ref(),
            self.splits.test.as_ref(),
        )?;

        log::info!("Labels:");
        for (id, label) in corpus.labels().iter() {
            log::info!("{id}: {label}");
        }

        if let Some(path) = &self.output.output {
            log::info!("output: {}", path);
        }
        let mut writer = self.output.open_writer()?;
        for split in [Split::Train, Split::Dev, Split::Test] {
            for record in corpus.split(split) {
                write_json_line(&mut writer, &RecordLine { split, record })?;
            }
        }
        writer.flush()?;

        Ok(())
    }
}
