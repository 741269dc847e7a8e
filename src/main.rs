use std::fs;
use std::io::{self, BufRead, Read, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use reelgenius::generator::{ChatClient, Generator};
use reelgenius::session::{ReelIdea, Session};
use reelgenius::{Config, Error, OutputFormat};

#[derive(Parser)]
#[command(name = "reelgenius")]
#[command(about = "Brainstorm hooks and shooting guides for short videos")]
struct Cli {
    /// Config file (missing file means built-in defaults)
    #[arg(short, long, global = true, default_value = "reelgenius.toml")]
    config: PathBuf,

    /// Log more detail (repeat for trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate five hooks for a reel idea
    Hooks {
        /// The reel idea (10 to 200 characters)
        idea: String,
    },
    /// Generate a shooting and editing guide for a hook
    Guide {
        hook: String,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Format an existing guide without calling the model
    Render {
        /// Guide text file (reads stdin when omitted or "-")
        input: Option<PathBuf>,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Generate hooks, then pick hooks interactively to see their guides
    Brainstorm {
        idea: String,
    },
}

#[derive(Args)]
struct OutputArgs {
    /// Output format (defaults to the config's output.format)
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Also export the guide as a PDF
    #[arg(long)]
    pdf: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    // Loaded before logging so RUST_LOG may come from .env
    let dotenv = dotenvy::dotenv();
    init_tracing(cli.verbose);
    if let Err(e) = dotenv {
        tracing::debug!(error = %e, "no .env loaded");
    }

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "reelgenius=debug,info",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .compact()
        .init();
}

fn run(cli: Cli) -> Result<(), Error> {
    let config = Config::load(&cli.config)?;

    match cli.command {
        Command::Hooks { idea } => {
            let idea = ReelIdea::parse(&idea)?;
            let generator = Generator::new(ChatClient::from_config(&config.model)?);
            let hooks = generator.generate_hooks(idea.as_str())?;
            for (i, hook) in hooks.iter().enumerate() {
                println!("{}. {}", i + 1, hook);
            }
            Ok(())
        }
        Command::Guide { hook, output } => {
            let generator = Generator::new(ChatClient::from_config(&config.model)?);
            let guide = generator.generate_description(&hook)?;
            write_guide(&guide, &output, &config)
        }
        Command::Render { input, output } => {
            let guide = read_input(input.as_deref())?;
            write_guide(&guide, &output, &config)
        }
        Command::Brainstorm { idea } => {
            let idea = ReelIdea::parse(&idea)?;
            let generator = Generator::new(ChatClient::from_config(&config.model)?);
            brainstorm(Session::new(generator), &idea, &config)
        }
    }
}

fn read_input(input: Option<&Path>) -> Result<String, Error> {
    match input {
        Some(path) if path != Path::new("-") => {
            fs::read_to_string(path).map_err(|source| Error::Io {
                path: path.to_path_buf(),
                source,
            })
        }
        _ => {
            let mut guide = String::new();
            io::stdin()
                .read_to_string(&mut guide)
                .map_err(|source| Error::Io {
                    path: PathBuf::from("<stdin>"),
                    source,
                })?;
            Ok(guide)
        }
    }
}

fn write_guide(guide: &str, args: &OutputArgs, config: &Config) -> Result<(), Error> {
    let blocks = reelgenius::format(guide);
    tracing::debug!(blocks = blocks.len(), "formatted guide");

    let format = args.format.unwrap_or(config.output.format);
    let rendered = reelgenius::render_blocks(&blocks, format, &config.output)?;

    match &args.output {
        Some(path) => {
            write_file(path, rendered.as_bytes())?;
            println!("Created {}", path.display());
        }
        None => print!("{}", rendered),
    }

    if let Some(path) = &args.pdf {
        let pdf_bytes = reelgenius::blocks_to_pdf(&blocks)?;
        write_file(path, &pdf_bytes)?;
        println!("Created {}", path.display());
    }

    Ok(())
}

fn write_file(path: &Path, bytes: &[u8]) -> Result<(), Error> {
    fs::write(path, bytes).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn brainstorm<C>(mut session: Session<C>, idea: &ReelIdea, config: &Config) -> Result<(), Error>
where
    C: reelgenius::generator::Completion,
{
    let hooks = match session.generate_hooks(idea) {
        Ok(hooks) => hooks.to_vec(),
        Err(notice) => {
            eprintln!("{}", notice);
            return Ok(());
        }
    };

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        println!();
        for (i, hook) in hooks.iter().enumerate() {
            println!("{}. {}", i + 1, hook);
        }
        print!("Pick a hook (1-{}, q to quit): ", hooks.len());
        let _ = io::stdout().flush();

        let Some(line) = lines.next() else { break };
        let line = line.map_err(|source| Error::Io {
            path: PathBuf::from("<stdin>"),
            source,
        })?;
        let choice = line.trim();
        if choice.eq_ignore_ascii_case("q") {
            break;
        }

        let Some(hook) = choice
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| hooks.get(i))
        else {
            eprintln!("Enter a number between 1 and {}.", hooks.len());
            continue;
        };

        match session.describe(hook) {
            Ok(guide) => {
                let blocks = reelgenius::format(guide);
                let rendered =
                    reelgenius::render_blocks(&blocks, OutputFormat::Text, &config.output)?;
                println!();
                println!("{}", hook);
                println!();
                print!("{}", rendered);
            }
            Err(notice) => eprintln!("{}", notice),
        }
    }

    Ok(())
}
