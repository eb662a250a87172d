use anyhow::Context;
use clap::{Parser, Subcommand};
use poker_hands::{classify, Card, CardFace, CardSuit, Category, Hand, HAND_SIZE};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Parser)]
#[command(version, about = "Classify five-card poker hands")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the category of a hand written like `Ah Kd Qh Qc Qs`
    Classify {
        #[arg(required = true)]
        cards: Vec<String>,
    },
    /// Deal random hands and print how often each category comes up
    Simulate {
        #[arg(short, long, default_value_t = 1_000_000)]
        iterations: u64,
        /// Fixed RNG seed for a reproducible run
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

fn deck() -> Vec<Card> {
    let mut deck = Vec::new();
    for suit in CardSuit::ALL {
        for face in CardFace::ALL {
            deck.push(Card::new(face, suit));
        }
    }
    deck
}

fn run_classify(cards: &[String]) -> anyhow::Result<()> {
    let text = cards.join(" ");
    let hand = text
        .parse::<Hand>()
        .with_context(|| format!("reading hand {text:?}"))?;
    match classify(&hand) {
        Some(category) => println!("{hand}: {category}"),
        None => println!("{hand}: invalid hand"),
    }
    Ok(())
}

fn run_simulate(iters: u64, seed: Option<u64>) -> anyhow::Result<()> {
    use rand::seq::SliceRandom;

    anyhow::ensure!(iters > 0, "need at least one iteration");
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    log::info!("dealing {iters} hands (seed {seed:?})");

    let deck = deck();
    let mut counts = Category::ALL.map(|category| (category, 0u64));
    for _ in 0..iters {
        let cards = deck
            .choose_multiple(&mut rng, HAND_SIZE)
            .copied()
            .collect::<arrayvec::ArrayVec<Card, HAND_SIZE>>();
        let category = classify(&Hand::new(cards))
            .context("dealt an invalid hand from a standard deck")?;
        if let Some((_, n)) = counts.iter_mut().find(|(c, _)| *c == category) {
            *n += 1;
        }
    }

    let max_str_len = counts
        .iter()
        .map(|(c, _)| c.name().len())
        .max()
        .unwrap_or_default();
    counts.sort_by_key(|(_, n)| std::cmp::Reverse(*n));
    for (category, n) in counts {
        println!(
            "{s: >width$}: {p}",
            s = category.name(),
            width = max_str_len,
            p = (n as f64 / iters as f64)
        );
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    match Args::parse().command {
        Command::Classify { cards } => run_classify(&cards),
        Command::Simulate { iterations, seed } => run_simulate(iterations, seed),
    }
}
