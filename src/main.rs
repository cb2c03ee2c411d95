use clap::{ArgGroup, Args, Parser, Subcommand};
use failure::bail;
use log::{error, info};
use rand::Rng;
use std::fs;
use std::path::PathBuf;
use xorbreak::cipher;
use xorbreak::corpus;
use xorbreak::encoding::ByteArray;
use xorbreak::job::Job;
use xorbreak::pipeline;

#[derive(Parser)]
#[command(name = "xorbreak")]
#[command(about = "Break repeating-key XOR ciphertexts by frequency analysis", long_about = None)]
struct Cli {
    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Recover the key and plaintext of one or more hex ciphertext files
    Decode(DecodeArgs),

    /// Encrypt a text file with a repeating key and print the hex ciphertext
    Encrypt(EncryptArgs),

    /// Print the byte frequency table of the reference corpus
    Profile(ProfileArgs),
}

#[derive(Args)]
struct CorpusArgs {
    /// Reference text for the English byte distribution
    #[arg(long, env = "XORBREAK_CORPUS", default_value = "corpus.txt")]
    corpus: PathBuf,
}

#[derive(Args)]
struct DecodeArgs {
    #[command(flatten)]
    corpus: CorpusArgs,

    /// Smallest key length tried for jobs without their own range
    #[arg(long, default_value_t = 2)]
    min: usize,

    /// Largest key length tried for jobs without their own range
    #[arg(long, default_value_t = 13)]
    max: usize,

    /// Ciphertext files, as PATH or PATH:MIN-MAX
    #[arg(required = true)]
    jobs: Vec<Job>,
}

#[derive(Args)]
#[command(group(ArgGroup::new("key_source").required(true).args(["key", "random_key"])))]
struct EncryptArgs {
    /// Key text
    #[arg(long)]
    key: Option<String>,

    /// Generate a random key of this many bytes
    #[arg(long)]
    random_key: Option<usize>,

    /// Plaintext file; surrounding whitespace is trimmed
    input: PathBuf,
}

#[derive(Args)]
struct ProfileArgs {
    #[command(flatten)]
    corpus: CorpusArgs,
}

fn main() -> Result<(), failure::Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match cli.cmd {
        Commands::Decode(args) => decode(args),
        Commands::Encrypt(args) => encrypt(args),
        Commands::Profile(args) => profile(args),
    }
}

fn decode(args: DecodeArgs) -> Result<(), failure::Error> {
    let reference = corpus::load(&args.corpus.corpus)?;

    let mut failed = 0;
    for job in &args.jobs {
        let (min, max) = job.range_or((args.min, args.max));
        match pipeline::decode_file(&job.path, min, max, &reference) {
            Ok(decoded) => println!("{}", decoded),
            Err(e) => {
                error!("{}: {}", job.path.display(), e);
                failed += 1;
            }
        }
    }

    if failed > 0 {
        bail!("{} of {} ciphertexts could not be decoded", failed, args.jobs.len());
    }
    Ok(())
}

fn encrypt(args: EncryptArgs) -> Result<(), failure::Error> {
    let plaintext = fs::read_to_string(&args.input)?;

    let key = match (args.key, args.random_key) {
        (Some(key), _) => key.into_bytes(),
        (None, Some(len)) => {
            let mut rng = rand::thread_rng();
            let key: Vec<u8> = (0..len).map(|_| rng.gen()).collect();
            info!("random key: {}", ByteArray::from_bytes(key.clone()).spaced_hex());
            key
        }
        (None, None) => bail!("either --key or --random-key is required"),
    };
    if key.is_empty() {
        bail!("the key must not be empty");
    }

    println!("{}", cipher::encrypt(plaintext.trim(), &key));
    Ok(())
}

fn profile(args: ProfileArgs) -> Result<(), failure::Error> {
    let reference = corpus::load(&args.corpus.corpus)?;
    println!("{}", reference);
    Ok(())
}
