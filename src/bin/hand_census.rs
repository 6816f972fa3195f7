use std::io;

use clap::{Args, Parser, Subcommand};
use hand_census::analysis::{CountMode, DeckAnalyzer};
use hand_census::core::{DeckShape, HandCensusError};
use hand_census::report::{
    DeckPreset, HandSizeSweep, Summary, TraditionalLadder, describe, write_csv,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(name = "hand_census")]
#[command(about = "Exact poker hand counts for any deck shape and hand size")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug, Clone)]
struct DeckArgs {
    /// Named deck: standard, pinochle, short-deck, double, six-suit, wide
    #[arg(short, long, default_value = "standard")]
    deck: DeckPreset,
    /// Override the number of ranks
    #[arg(long)]
    ranks: Option<usize>,
    /// Override the number of suits
    #[arg(long)]
    suits: Option<usize>,
    /// Override the number of copies of each card
    #[arg(long)]
    copies: Option<usize>,
}

impl DeckArgs {
    fn dimensions(&self) -> (usize, usize, usize) {
        let (ranks, suits, copies) = self.deck.dimensions();
        (
            self.ranks.unwrap_or(ranks),
            self.suits.unwrap_or(suits),
            self.copies.unwrap_or(copies),
        )
    }

    fn shape(&self, hand_size: usize) -> Result<DeckShape, HandCensusError> {
        let (ranks, suits, copies) = self.dimensions();
        DeckShape::new(ranks, suits, copies, hand_size)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Count every category for one deck and hand size
    Analyze {
        #[command(flatten)]
        deck: DeckArgs,
        /// Cards per hand
        #[arg(short = 'n', long, default_value_t = 5)]
        hand_size: usize,
        /// Count each category without the categories above it
        #[arg(short, long)]
        exclusive: bool,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Best hand first ranking with high card
    Ladder {
        #[command(flatten)]
        deck: DeckArgs,
        /// Cards per hand
        #[arg(short = 'n', long, default_value_t = 5)]
        hand_size: usize,
    },
    /// One deck across a range of hand sizes
    Sweep {
        #[command(flatten)]
        deck: DeckArgs,
        /// Smallest hand size
        #[arg(long, default_value_t = 5)]
        from: usize,
        /// Largest hand size
        #[arg(long, default_value_t = 10)]
        to: usize,
        /// Count each category without the categories above it
        #[arg(short, long)]
        exclusive: bool,
        /// Print CSV instead of tables
        #[arg(long)]
        csv: bool,
    },
    /// Several decks across a range of hand sizes
    Compare {
        /// Decks to compare
        #[arg(
            short,
            long,
            value_delimiter = ',',
            default_value = "standard,pinochle,short-deck,wide"
        )]
        decks: Vec<DeckPreset>,
        /// Smallest hand size
        #[arg(long, default_value_t = 5)]
        from: usize,
        /// Largest hand size
        #[arg(long, default_value_t = 10)]
        to: usize,
        /// Append CSV for every deck
        #[arg(long)]
        csv: bool,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let outcome = match cli.command {
        Commands::Analyze {
            deck,
            hand_size,
            exclusive,
            json,
        } => analyze(&deck, hand_size, exclusive.into(), json),
        Commands::Ladder { deck, hand_size } => ladder(&deck, hand_size),
        Commands::Sweep {
            deck,
            from,
            to,
            exclusive,
            csv,
        } => sweep(&deck, from..=to, exclusive.into(), csv),
        Commands::Compare {
            decks,
            from,
            to,
            csv,
        } => compare(&decks, from..=to, csv),
    };

    if let Err(e) = outcome {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn analyze(
    deck: &DeckArgs,
    hand_size: usize,
    mode: CountMode,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let shape = deck.shape(hand_size)?;
    let result = DeckAnalyzer::new(shape).analyze_with(mode);
    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", Summary::new(&result));
    }
    Ok(())
}

fn ladder(deck: &DeckArgs, hand_size: usize) -> Result<(), Box<dyn std::error::Error>> {
    let shape = deck.shape(hand_size)?;
    println!("{}", describe(&shape));
    println!("Hand size: {} cards", hand_size);
    println!();
    println!("{}", TraditionalLadder::new(&DeckAnalyzer::new(shape)));
    Ok(())
}

fn sweep(
    deck: &DeckArgs,
    sizes: std::ops::RangeInclusive<usize>,
    mode: CountMode,
    csv: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let (ranks, suits, copies) = deck.dimensions();
    let sweep = HandSizeSweep::run(ranks, suits, copies, sizes, mode)?;
    if csv {
        write_csv(&sweep, io::stdout().lock())?;
    } else {
        println!("{sweep}");
    }
    Ok(())
}

fn compare(
    decks: &[DeckPreset],
    sizes: std::ops::RangeInclusive<usize>,
    csv: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut sweeps = Vec::with_capacity(decks.len());
    for preset in decks {
        let (ranks, suits, copies) = preset.dimensions();
        let sweep = HandSizeSweep::run(ranks, suits, copies, sizes.clone(), CountMode::Inclusive)?;
        println!("{sweep}");
        sweeps.push((preset, sweep));
    }

    println!("CROSSOVER SUMMARY");
    for (preset, sweep) in &sweeps {
        println!("{preset}:");
        let crossovers = sweep.crossovers();
        if crossovers.is_empty() {
            println!("  No crossovers detected");
        }
        for c in crossovers {
            println!(
                "  {} -> {} cards: '{}' and '{}' swap positions",
                c.from_size, c.to_size, c.rarer, c.other
            );
        }
    }

    if csv {
        for (preset, sweep) in &sweeps {
            println!();
            println!("# {preset}");
            write_csv(sweep, io::stdout().lock())?;
        }
    }
    Ok(())
}
