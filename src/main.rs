use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use shortcode::{CodecConfig, DecodePolicy, MediaId, ShortcodeCodec, ShortcodeError};

#[derive(Parser)]
#[command(name = "shortcode", about = "Convert media shortcodes and links to identifiers", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Suppress all log output
    #[arg(long, short = 'q', global = true, conflicts_with = "verbose")]
    quiet: bool,

    /// Path to a TOML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode links or bare shortcodes to media identifiers
    Decode {
        /// Links or shortcodes, one identifier is printed per input
        #[arg(required = true)]
        links: Vec<String>,

        /// Reject characters outside the shortcode alphabet
        #[arg(long)]
        strict: bool,
    },

    /// Encode decimal media identifiers as shortcodes
    Encode {
        /// Decimal media identifiers
        #[arg(required = true)]
        ids: Vec<String>,

        /// Left-pad shortcodes with 'A' to at least this many symbols
        #[arg(long)]
        width: Option<usize>,
    },

    /// Classify a media link and show its parts
    Inspect {
        /// Sharable media link
        link: String,
    },
}

fn init_tracing(cli: &Cli) {
    // --quiet silences everything, --verbose shows info (or RUST_LOG),
    // otherwise only warnings are printed.
    let filter = if cli.quiet {
        tracing_subscriber::EnvFilter::new("off")
    } else if cli.verbose {
        tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into())
    } else {
        tracing_subscriber::EnvFilter::new("warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(&cli);

    if let Err(e) = run(cli) {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), ShortcodeError> {
    let config = match cli.config.as_deref() {
        Some(path) => CodecConfig::load(path)?,
        None => CodecConfig::default(),
    };

    match cli.command {
        Commands::Decode { links, strict } => {
            let mut codec = ShortcodeCodec::from_config(&config);
            if strict {
                codec = codec.with_policy(DecodePolicy::Strict);
            }
            for link in &links {
                println!("{}", codec.decode_link(link)?);
            }
        }

        Commands::Encode { ids, width } => {
            let mut codec = ShortcodeCodec::from_config(&config);
            if let Some(width) = width {
                codec = codec.with_width(width);
            }
            for id in &ids {
                let id: MediaId = id.parse()?;
                println!("{}", codec.encode(&id));
            }
        }

        Commands::Inspect { link } => {
            let codec = ShortcodeCodec::from_config(&config);
            let decoded = codec.inspect(&link)?;
            println!("kind:      {}", decoded.link.kind);
            println!("host:      {}", decoded.link.host);
            println!("domain:    {}", decoded.link.domain.as_deref().unwrap_or("-"));
            println!("shortcode: {}", decoded.link.shortcode);
            println!("media id:  {}", decoded.media_id);
        }
    }

    Ok(())
}
