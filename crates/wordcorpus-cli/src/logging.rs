use log::LevelFilter;
use stderrlog::Timestamp;

/// Logging setup arg group.
#[derive(clap::Args, Debug)]
pub struct LogArgs {
    /// Silence log messages.
    #[clap(short, long)]
    pub quiet: bool,

    /// Raise the log level above the default (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Enable timestamped logging.
    #[clap(long)]
    pub ts: bool,
}

impl LogArgs {
    /// The effective level: `default`, raised one step per `-v`.
    pub fn level(
        &self,
        default: LevelFilter,
    ) -> LevelFilter {
        LevelFilter::iter()
            .skip_while(|&l| l < default)
            .nth(self.verbose as usize)
            .unwrap_or(LevelFilter::Trace)
    }

    /// Install a stderr logger for the wordcorpus crates.
    pub fn setup_logging(
        &self,
        default: LevelFilter,
    ) -> Result<(), Box<dyn std::error::Error>> {
        stderrlog::new()
            .module("wordcorpus")
            .quiet(self.quiet)
            .verbosity(self.level(default))
            .timestamp(if self.ts {
                Timestamp::Second
            } else {
                Timestamp::Off
            })
            .init()?;

        Ok(())
    }
}
