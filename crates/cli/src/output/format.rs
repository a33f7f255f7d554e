use clap::ValueEnum;

/// Output format for CLI results.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
	/// JSON envelope
	Json,
	/// Human-readable text
	#[default]
	Text,
}
