use clap::Parser;

/// Reads theme lines from stdin and writes them to stdout with legacy
/// `rgb_(R,G,B)` colors rewritten as hex.
#[derive(Debug, Clone, Parser)]
#[command(name = "theme-migrate", version)]
#[command(about = "Migrate legacy rgb_(R,G,B) theme colors to hex")]
pub struct CliConfig {
    #[arg(short, long, help = "Log each rewritten line to stderr")]
    pub verbose: bool,
}
