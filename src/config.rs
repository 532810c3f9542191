use clap::Parser;

pub const DEFAULT_HOST: &str = "http://localhost:11434";

/// Command-line options. The service address can also come from
/// `OLLAMA_HOST`, the same variable the Ollama tooling reads.
#[derive(Parser, Debug, Clone)]
#[command(name = "bali-itinerary")]
#[command(about = "Generate a personalized two-day Bali itinerary with a local Ollama model")]
pub struct Config {
    /// Base URL of the Ollama server
    #[arg(long, env = "OLLAMA_HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}
