use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use polysteg::stego::{self, Coefficients, DEFAULT_GRID_FILE};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Hide short messages in a grid of random characters")]
struct Args {
    /// Seed for the random source, for reproducible grids and keys
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Hide a message in a new grid file and print the key
    Encode {
        /// Message to hide (prompted for when omitted)
        #[arg(long)]
        message: Option<String>,

        /// Grid file to write
        #[arg(long, default_value = DEFAULT_GRID_FILE)]
        output: PathBuf,
    },
    /// Read the characters on the key's path from a grid file
    Decode {
        /// Grid file to read
        #[arg(long, default_value = DEFAULT_GRID_FILE)]
        input: PathBuf,

        /// Coefficients, highest power first, e.g. "0.001 -0.05 12.5" (prompted for when omitted)
        #[arg(long, allow_hyphen_values = true)]
        key: Option<String>,

        /// Only print this many leading characters
        #[arg(long)]
        length: Option<usize>,
    },
    /// Print a freshly generated key
    Keygen,
    /// Show the grid with everything off the key's path masked
    Show {
        /// Grid file to read
        #[arg(long, default_value = DEFAULT_GRID_FILE)]
        input: PathBuf,

        /// Coefficients, highest power first
        #[arg(long, allow_hyphen_values = true)]
        key: String,

        /// Number of leading columns to reveal
        #[arg(long, default_value_t = stego::COLS)]
        columns: usize,
    },
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => {
            debug!(seed, "using seeded random source");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    }
}

/// 한 줄을 입력받습니다. 줄 끝 문자는 제거됩니다.
fn prompt(question: &str) -> Result<String> {
    print!("{}", question);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line).context("failed to read from stdin")?;
    Ok(line.trim_end_matches(['\n', '\r']).to_string())
}

fn parse_key(text: &str) -> Result<Coefficients> {
    text.parse::<Coefficients>().context("could not parse key")
}

fn run_encode(message: &str, output: &Path, rng: &mut StdRng) -> Result<()> {
    println!("Original message: {}", message);
    let (grid, key) = stego::create_character_grid(message, rng)?;
    stego::save_grid(&grid, output)?;
    println!("Grid saved to {}", output.display());
    println!("Polynomial coefficients: {}", key);
    Ok(())
}

fn run_decode(input: &Path, key: &Coefficients, length: Option<usize>) -> Result<()> {
    let grid = stego::load_grid(input)?;
    let decoded = match length {
        Some(len) => stego::decode_message(&grid, key, len)?,
        None => stego::decode(&grid, key),
    };
    println!("Decrypted message: {}", decoded);
    Ok(())
}

fn file_or_default(answer: String) -> PathBuf {
    if answer.trim().is_empty() {
        PathBuf::from(DEFAULT_GRID_FILE)
    } else {
        PathBuf::from(answer.trim())
    }
}

fn interactive(rng: &mut StdRng) -> Result<()> {
    let method = prompt("Encrypt or Decrypt message? (E for encrypt, D for decrypt): ")?;
    match method.trim().to_lowercase().as_str() {
        "e" => {
            let message = prompt("Enter the message to be encrypted: ")?;
            let output = file_or_default(prompt(
                "What file would you like to output to? (Leave empty for default): ",
            )?);
            run_encode(&message, &output, rng)
        }
        "d" => {
            let input = file_or_default(prompt(
                "What file would you like to decrypt? (Leave empty for default): ",
            )?);
            let key = parse_key(&prompt(
                "Enter key (coefficients from highest to lowest power like such: 5 4 3 2 1): ",
            )?)?;
            run_decode(&input, &key, None)
        }
        other => bail!("unknown choice {:?}, expected E or D", other),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let mut rng = make_rng(args.seed);

    match args.command {
        None => interactive(&mut rng),
        Some(Command::Encode { message, output }) => {
            let message = match message {
                Some(m) => m,
                None => prompt("Enter the message to be encrypted: ")?,
            };
            run_encode(&message, &output, &mut rng)
        }
        Some(Command::Decode { input, key, length }) => {
            let key = match key {
                Some(k) => k,
                None => prompt("Enter key (coefficients from highest to lowest power): ")?,
            };
            run_decode(&input, &parse_key(&key)?, length)
        }
        Some(Command::Keygen) => {
            println!("{}", Coefficients::generate(&mut rng));
            Ok(())
        }
        Some(Command::Show { input, key, columns }) => {
            let grid = stego::load_grid(&input)?;
            print!("{}", stego::overlay(&grid, &parse_key(&key)?, columns));
            Ok(())
        }
    }
}
