//! hashkit CLI Application
//!
//! Hashes messages, generates secp256k1 key pairs and checks hash strings.

use clap::{Parser, Subcommand};
use secp_hashkit::cli::{self, DEFAULT_MESSAGE};
use secp_hashkit::crypto::HashAlgorithm;

#[derive(Parser)]
#[command(name = "hashkit")]
#[command(author = "Darshan")]
#[command(version = "0.1.0")]
#[command(about = "SHA-256, RIPEMD-160 and secp256k1 key utilities", long_about = None)]
struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Hash a message with every algorithm and generate a key pair (default)
    Demo {
        /// Message to hash
        #[arg(short, long, default_value = DEFAULT_MESSAGE)]
        message: String,
    },

    /// Hash a single input
    Hash {
        /// sha256, double-sha256, ripemd160, hash160 or keccak256
        #[arg(short, long, default_value = "sha256")]
        algorithm: HashAlgorithm,

        /// Text to hash
        input: String,
    },

    /// Generate a new secp256k1 key pair
    Keygen,

    /// Check whether a string is a well-formed hex digest
    Validate {
        /// Hex string to check
        hex: String,

        /// Expected digest length in bytes (defaults to 32)
        #[arg(short, long)]
        bytes: Option<usize>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match cli.command {
        None => cli::cmd_demo(DEFAULT_MESSAGE, cli.json),
        Some(Commands::Demo { message }) => cli::cmd_demo(&message, cli.json),
        Some(Commands::Hash { algorithm, input }) => cli::cmd_hash(algorithm, &input, cli.json),
        Some(Commands::Keygen) => cli::cmd_keygen(cli.json),
        Some(Commands::Validate { hex, bytes }) => cli::cmd_validate(&hex, bytes, cli.json),
    }
}
