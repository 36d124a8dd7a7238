use wordcorpus::{
    CorpusOptions,
    regex::RegexPattern,
    segmentation::{DEFAULT_WORD_PATTERN, SegmenterKind, SegmenterOptions},
};

/// Corpus source files.
#[derive(clap::Args, Debug)]
pub struct SplitArgs {
    /// Training file; the vocabulary is induced from it.
    #[arg(long)]
    pub train: String,

    /// Optional dev file.
    #[arg(long, default_value = None)]
    pub dev: Option<String>,

    /// Optional test file; malformed lines degrade to unlabeled text.
    #[arg(long, default_value = None)]
    pub test: Option<String>,
}

/// Word segmentation arg group.
#[derive(clap::Args, Debug)]
pub struct SegmenterArgs {
    /// Segmentation engine.
    #[arg(long, default_value = "whitespace")]
    pub segmenter: SegmenterKind,

    /// Word pattern for the regex segmenter.
    #[arg(long, default_value_t = DEFAULT_WORD_PATTERN.to_string())]
    pub word_pattern: String,
}

impl SegmenterArgs {
    /// The segmenter options described by the args.
    pub fn segmenter_options(&self) -> SegmenterOptions {
        SegmenterOptions::default()
            .with_kind(self.segmenter)
            .with_pattern(RegexPattern::from(&self.word_pattern))
    }

    /// Corpus options using the configured segmenter.
    pub fn corpus_options(&self) -> Result<CorpusOptions<u32>, Box<dyn std::error::Error>> {
        Ok(CorpusOptions::default().with_segmenter_options(&self.segmenter_options())?)
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[derive(clap::Parser, Debug)]
    struct TestArgs {
        #[command(flatten)]
        splits: SplitArgs,

        #[command(flatten)]
        segmenter: SegmenterArgs,
    }

    #[test]
    fn test_defaults() {
        let args = TestArgs::parse_from(["test", "--train", "train.tsv"]);
        assert_eq!(args.splits.train, "train.tsv");
        assert_eq!(args.splits.dev, None);
        assert_eq!(args.segmenter.segmenter, SegmenterKind::Whitespace);
        assert_eq!(
            args.segmenter.segmenter_options(),
            SegmenterOptions::default()
        );
    }

    #[test]
    fn test_regex_segmenter() {
        let args = TestArgs::parse_from([
            "test",
            "--train",
            "a",
            "--test",
            "b",
            "--segmenter",
            "regex",
            "--word-pattern",
            r"\S+",
        ]);
        assert_eq!(args.splits.test.as_deref(), Some("b"));
        let options = args.segmenter.corpus_options().unwrap();
        assert_eq!(options.segmenter.segment("x, y").unwrap(), vec!["x,", "y"]);
    }
}
