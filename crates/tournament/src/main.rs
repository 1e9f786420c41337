//! Tournament CLI
//!
//! Run matches between draughts engines and track Elo ratings.

use std::env;

use alphabeta_engine::{AlphaBetaEngine, ExhaustiveEngine};
use draughts_core::Engine;
use mcts_engine::MctsEngine;
use random_engine::RandomEngine;
use tournament::{quick_match, EloTracker, MatchConfig, MatchRunner, TournamentConfig, TournamentResults};

const ELO_FILE: &str = "tournament_elo.json";

fn print_usage() {
    println!("Draughts Tournament Runner");
    println!();
    println!("Usage:");
    println!("  tournament match <engine1> <engine2> [--games N] [--depth D]");
    println!("  tournament gauntlet <challenger> [--games N] [--depth D]");
    println!("  tournament leaderboard");
    println!();
    println!("Engines:");
    println!("  alphabeta     - Depth-limited alpha-beta with heuristic eval");
    println!("  exhaustive    - Full-depth minimax (endgames only)");
    println!("  mcts          - Monte Carlo tree search, 200 iterations");
    println!("  mcts:N        - MCTS with N iterations per move");
    println!("  random        - Uniform random legal moves");
    println!();
    println!("Examples:");
    println!("  tournament match alphabeta mcts --games 20 --depth 4");
    println!("  tournament gauntlet mcts:800 --games 10");
}

fn create_engine(spec: &str) -> Box<dyn Engine> {
    let parts: Vec<&str> = spec.split(':').collect();
    match parts[0].to_lowercase().as_str() {
        "alphabeta" | "ab" => Box::new(AlphaBetaEngine::new()),
        "exhaustive" => Box::new(ExhaustiveEngine::new()),
        "mcts" => {
            let iterations = parts
                .get(1)
                .and_then(|s| s.parse().ok())
                .unwrap_or(mcts_engine::DEFAULT_ITERATIONS);
            Box::new(MctsEngine::with_iterations(iterations))
        }
        "random" => Box::new(RandomEngine::new()),
        _ => {
            eprintln!("Unknown engine: {}, falling back to random", spec);
            Box::new(RandomEngine::new())
        }
    }
}

struct CliOptions {
    num_games: u32,
    depth: u8,
}

fn parse_options(args: &[String], from: usize) -> CliOptions {
    let mut opts = CliOptions {
        num_games: 10,
        depth: 4,
    };
    let mut i = from;
    while i < args.len() {
        match args[i].as_str() {
            "--games" | "-g" => {
                if i + 1 < args.len() {
                    opts.num_games = args[i + 1].parse().unwrap_or(10);
                    i += 1;
                }
            }
            "--depth" | "-d" => {
                if i + 1 < args.len() {
                    opts.depth = args[i + 1].parse().unwrap_or(4);
                    i += 1;
                }
            }
            _ => {}
        }
        i += 1;
    }
    opts
}

fn run_match(args: &[String]) {
    if args.len() < 2 {
        eprintln!("Error: match requires two engine specifications");
        print_usage();
        return;
    }

    let engine1_spec = &args[0];
    let engine2_spec = &args[1];
    let opts = parse_options(args, 2);

    println!("=== Match: {} vs {} ===", engine1_spec, engine2_spec);
    println!("Games: {}, Depth: {}", opts.num_games, opts.depth);
    println!();

    let mut engine1 = create_engine(engine1_spec);
    let mut engine2 = create_engine(engine2_spec);

    let config = MatchConfig {
        num_games: opts.num_games,
        depth: opts.depth,
        verbose: true,
        ..Default::default()
    };

    let runner = MatchRunner::new(config);
    let result = runner.run_match(engine1.as_mut(), engine2.as_mut());

    println!();
    println!("=== Final Result ===");
    println!(
        "{}: {} wins, {} losses, {} draws",
        engine1_spec, result.wins, result.losses, result.draws
    );
    println!("Score: {:.1}%", result.score() * 100.0);

    let mut tracker = EloTracker::load(ELO_FILE).unwrap_or_default();
    tracker.update_ratings(engine1_spec, engine2_spec, &result);
    tracker.print_leaderboard();

    if let Err(e) = tracker.save(ELO_FILE) {
        eprintln!("Warning: Failed to save Elo tracker: {}", e);
    }
}

fn run_gauntlet(args: &[String]) {
    if args.is_empty() {
        eprintln!("Error: gauntlet requires a challenger engine");
        print_usage();
        return;
    }

    let challenger_spec = &args[0];
    let opts = parse_options(args, 1);

    let opponents = vec!["alphabeta", "mcts", "random"];

    println!("=== Gauntlet: {} vs all ===", challenger_spec);
    println!("Opponents: {:?}", opponents);
    println!("Games per match: {}, Depth: {}", opts.num_games, opts.depth);
    println!();

    let mut tracker = EloTracker::load(ELO_FILE).unwrap_or_default();
    let mut results = TournamentResults::new(
        &format!("Gauntlet: {}", challenger_spec),
        std::iter::once(challenger_spec.to_string())
            .chain(opponents.iter().map(|s| s.to_string()))
            .collect(),
        TournamentConfig {
            games_per_match: opts.num_games,
            search_depth: opts.depth,
            ..Default::default()
        },
    );

    for opponent in opponents {
        println!("\n--- {} vs {} ---", challenger_spec, opponent);

        let mut challenger = create_engine(challenger_spec);
        let mut opp_engine = create_engine(opponent);

        let result = quick_match(
            challenger.as_mut(),
            opp_engine.as_mut(),
            opts.num_games,
            opts.depth,
        );

        println!(
            "Result: {}-{}-{} (Score: {:.1}%)",
            result.wins,
            result.losses,
            result.draws,
            result.score() * 100.0
        );

        tracker.update_ratings(challenger_spec, opponent, &result);
        results.add_match(challenger_spec, opponent, result);
    }

    println!();
    tracker.print_leaderboard();
    results.print_report();

    if let Err(e) = tracker.save(ELO_FILE) {
        eprintln!("Warning: Failed to save Elo tracker: {}", e);
    }
}

fn show_leaderboard() {
    match EloTracker::load(ELO_FILE) {
        Ok(tracker) => tracker.print_leaderboard(),
        Err(_) => {
            println!("No tournament data found. Run some matches first!");
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    match args[1].as_str() {
        "match" => run_match(&args[2..]),
        "gauntlet" => run_gauntlet(&args[2..]),
        "leaderboard" | "elo" => show_leaderboard(),
        "help" | "--help" | "-h" => print_usage(),
        _ => {
            eprintln!("Unknown command: {}", args[1]);
            print_usage();
        }
    }
}
