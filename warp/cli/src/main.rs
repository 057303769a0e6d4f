mod config;
mod home_directory;
mod keys;
mod message;
mod prompt;

use {
    crate::{config::Config, home_directory::HomeDirectory, keys::KeysCmd, message::MessageArgs},
    clap::Parser,
    config_parser::parse_config,
    std::path::PathBuf,
    tracing::metadata::LevelFilter,
    warp_types::HexBinary,
};

#[derive(Parser)]
#[command(author, version, about, next_display_order = None)]
struct Cli {
    /// Directory for the config file and keys [default: ~/.warp]
    #[arg(long, global = true)]
    home: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Manage signer keys
    #[command(subcommand, next_display_order = None)]
    Keys(KeysCmd),

    /// Compute the digest signers sign to authorize an inbound message
    Digest(MessageArgs),

    /// Sign an inbound message, printing the 65-byte `v ‖ r ‖ s` signature
    Sign {
        /// Name of the key to sign with
        #[arg(long)]
        key: String,

        #[command(flatten)]
        message: MessageArgs,
    },

    /// Recover the signers of a signature blob over an inbound message
    Verify {
        /// Concatenated 65-byte signatures, hex-encoded
        #[arg(long)]
        signatures: HexBinary,

        #[command(flatten)]
        message: MessageArgs,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let app_dir = HomeDirectory::new_or_default(cli.home)?;

    // Without a config file, run with the defaults.
    let cfg: Config = if app_dir.config_file().exists() {
        parse_config(app_dir.config_file())?
    } else {
        Config::default()
    };

    tracing_subscriber::fmt()
        .with_max_level(cfg.log_level.parse::<LevelFilter>()?)
        .with_writer(std::io::stderr)
        .init();

    let keys_dir = cfg.keys_dir.clone().unwrap_or_else(|| app_dir.keys_dir());

    match cli.command {
        Command::Keys(cmd) => cmd.run(keys_dir),
        Command::Digest(message) => message::digest(&cfg, &message),
        Command::Sign { key, message } => message::sign(&cfg, &keys_dir, &key, &message),
        Command::Verify {
            signatures,
            message,
        } => message::verify(&cfg, &signatures, &message),
    }
}
