use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use isolation_agent::{
    Agent, Board, Deadline, EvaluationKind, Isolation, SearchAgent, SearchConfig, SearchStrategy,
    TimeBudget,
};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Time-bounded minimax / alpha-beta Isolation agent")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play one game between two search agents on the reference board
    Play(PlayArgs),
    /// Print the default search configuration as JSON
    Config,
}

#[derive(Args, Debug)]
struct PlayArgs {
    /// Board width
    #[arg(long, default_value_t = 7)]
    width: u32,

    /// Board height
    #[arg(long, default_value_t = 7)]
    height: u32,

    /// Milliseconds each player gets per turn
    #[arg(long, default_value_t = 150)]
    time_limit: u64,

    /// JSON config for the first player
    #[arg(long)]
    p1_config: Option<PathBuf>,

    /// Search strategy for the first player (overrides the config file)
    #[arg(long, value_parser = parse_strategy)]
    p1_strategy: Option<SearchStrategy>,

    /// Evaluation function for the first player (overrides the config file)
    #[arg(long, value_parser = parse_evaluation)]
    p1_eval: Option<EvaluationKind>,

    /// JSON config for the second player
    #[arg(long)]
    p2_config: Option<PathBuf>,

    /// Search strategy for the second player (overrides the config file)
    #[arg(long, value_parser = parse_strategy)]
    p2_strategy: Option<SearchStrategy>,

    /// Evaluation function for the second player (overrides the config file)
    #[arg(long, value_parser = parse_evaluation)]
    p2_eval: Option<EvaluationKind>,
}

fn parse_strategy(s: &str) -> Result<SearchStrategy, String> {
    serde_json::from_value(serde_json::Value::String(s.to_owned()))
        .map_err(|_| format!("unknown strategy '{s}' (expected minimax or alphabeta)"))
}

fn parse_evaluation(s: &str) -> Result<EvaluationKind, String> {
    serde_json::from_value(serde_json::Value::String(s.to_owned())).map_err(|_| {
        format!(
            "unknown evaluation '{s}' (expected mobility_difference, squared_mobility_difference, \
             squared_mobility_plus_centrality or random_baseline)"
        )
    })
}

fn build_config(
    path: Option<&PathBuf>,
    strategy: Option<SearchStrategy>,
    evaluation: Option<EvaluationKind>,
) -> Result<SearchConfig> {
    let mut config = match path {
        Some(path) => SearchConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => SearchConfig::default(),
    };
    if let Some(strategy) = strategy {
        config.strategy = strategy;
    }
    if let Some(evaluation) = evaluation {
        config.evaluation = evaluation;
    }
    config.validate()?;
    Ok(config)
}

fn play(args: PlayArgs) -> Result<()> {
    if args.width == 0 || args.height == 0 {
        bail!("board must be at least 1x1, got {}x{}", args.width, args.height);
    }

    let first = build_config(args.p1_config.as_ref(), args.p1_strategy, args.p1_eval)?;
    let second = build_config(args.p2_config.as_ref(), args.p2_strategy, args.p2_eval)?;

    let mut agents: [SearchAgent<Isolation>; 2] = [
        SearchAgent::new(format!("{:?}/{:?}", first.strategy, first.evaluation), first)?,
        SearchAgent::new(format!("{:?}/{:?}", second.strategy, second.evaluation), second)?,
    ];
    for (seat, agent) in agents.iter().enumerate() {
        info!(seat = seat + 1, name = agent.name(), config = ?agent.config(), "agent ready");
    }
    let mut board = Isolation::new(args.width, args.height);
    let time_limit = Duration::from_millis(args.time_limit);

    let winner = loop {
        let player = board.active_player();
        let opponent = board.opponent(player);
        let legal = board.legal_moves(None);
        if legal.is_empty() {
            info!(%player, "no legal moves");
            break opponent;
        }

        let agent = &mut agents[player.id() as usize];
        let deadline = Deadline::after(time_limit);
        let chosen = agent.choose_move(&board, &legal, &deadline);
        let left = deadline.time_left();

        if left < 0.0 {
            warn!(%player, overrun_ms = -left, "turn clock expired, forfeit");
            break opponent;
        }
        let Some(mv) = chosen.filter(|&mv| board.is_legal(mv)) else {
            warn!(%player, ?chosen, "illegal move, forfeit");
            break opponent;
        };

        println!("{} ({}) plays {}", player, agent.name(), mv);
        board.apply_move(mv);
    };

    println!();
    print!("{board}");
    println!(
        "{} ({}) wins after {} moves",
        winner,
        agents[winner.id() as usize].name(),
        board.move_count()
    );
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Play(args) => play(args),
        Command::Config => {
            let json = serde_json::to_string_pretty(&SearchConfig::default())?;
            println!("{json}");
            Ok(())
        }
    }
}
