mod classify;
mod corpus_args;
mod seq2seq;

/// Subcommands for wordcorpus
#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Build a text classification dataset from LABEL<TAB>TEXT files.
    Classify(classify::ClassifyArgs),

    /// Build a sequence-to-sequence dataset from SOURCE<TAB>TARGET files.
    Seq2seq(seq2seq::Seq2SeqArgs),
}

impl Commands {
    /// Run the subcommand.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        match self {
            Commands::Classify(cmd) => cmd.run(),
            Commands::Seq2seq(cmd) => cmd.run(),
        }
    }
}
