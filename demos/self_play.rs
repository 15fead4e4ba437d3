//! A CLI driver that plays a series of Quarto games between two engine
//! players, swapping which side each plays after every game, and
//! prints cumulative payoffs and win counts.

use std::time::Duration;

use clap::{Parser, ValueEnum};
use log::info;

use quarto_engine::players::{MctsConfig, MctsPlayer, MtdfConfig, MtdfPlayer, Player};
use quarto_engine::symmetry::SymmetryMode;
use quarto_engine::{Side, State};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Engine {
    Mcts,
    Mtdf,
}

impl std::fmt::Display for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Engine::Mcts => write!(f, "mcts"),
            Engine::Mtdf => write!(f, "mtdf"),
        }
    }
}

/// Play a series of Quarto games between two engine-driven players.
#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// The first engine, contesting `Player1` in the opening game.
    #[arg(long, value_enum, default_value_t = Engine::Mtdf)]
    engine_a: Engine,

    /// The second engine, contesting `Player2` in the opening game.
    #[arg(long, value_enum, default_value_t = Engine::Mcts)]
    engine_b: Engine,

    /// How many games to play.
    #[arg(long, default_value_t = 1)]
    games: u32,

    /// Per-move time budget, in seconds, for either engine.
    #[arg(long, default_value_t = 2.0)]
    max_time: f64,

    /// Disable symmetry folding.
    #[arg(long)]
    no_symmetry: bool,

    /// Seed the MCTS player's RNG for a reproducible run.
    #[arg(long)]
    seed: Option<u64>,
}

fn build_player(engine: Engine, symmetry: SymmetryMode, args: &Args) -> Box<dyn Player> {
    match engine {
        Engine::Mcts => {
            let config = MctsConfig {
                max_time: Duration::from_secs_f64(args.max_time),
                symmetry,
                ..MctsConfig::default()
            };
            match args.seed {
                Some(seed) => Box::new(MctsPlayer::with_seed(config, seed)),
                None => Box::new(MctsPlayer::new(config)),
            }
        }
        Engine::Mtdf => {
            let config = MtdfConfig {
                max_time: Duration::from_secs_f64(args.max_time),
                symmetry,
                ..MtdfConfig::default()
            };
            Box::new(MtdfPlayer::new(config))
        }
    }
}

/// Plays one game, with identity `starting` seated as `Player1`.
///
/// Advances the game through `symmetry`, the same mode each player's
/// search uses internally: a player's engine only knows how to look up
/// moves from a canonical state, so the root it's handed each turn must
/// already be the canonical representative `symmetry.play` produces,
/// not whatever `State::play` alone would give.
fn play_one_game(
    identities: &mut [Box<dyn Player>; 2],
    starting: usize,
    symmetry: SymmetryMode,
) -> State {
    let mut state = State::new();
    while !state.is_over() {
        let seat = state.player_to_move() as usize;
        let identity = if starting == 0 { seat } else { 1 - seat };
        let mv = identities[identity]
            .choose_move(&state)
            .expect("a legal move is always available in a non-terminal state");
        state = symmetry.play(&state, mv).expect("engines only return legal moves");
    }
    state
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let symmetry = if args.no_symmetry { SymmetryMode::Unfolded } else { SymmetryMode::Folded };
    let labels = [format!("a:{}", args.engine_a), format!("b:{}", args.engine_b)];
    let mut identities =
        [build_player(args.engine_a, symmetry, &args), build_player(args.engine_b, symmetry, &args)];
    let mut starting = 0usize; // which identity is seated as Player1 this game

    let mut cum_payoffs = [0.0f64; 2];
    let mut wins = [0u32; 2];
    let mut draws = 0u32;

    for game in 0..args.games {
        let final_state = play_one_game(&mut identities, starting, symmetry);
        let payoffs = final_state.payoffs();
        let seat_of = |identity: usize| if starting == 0 { identity } else { 1 - identity };
        let payoff_of = |identity: usize| {
            if seat_of(identity) == 0 { payoffs[Side::Player1] } else { payoffs[Side::Player2] }
        };
        cum_payoffs[0] += payoff_of(0);
        cum_payoffs[1] += payoff_of(1);
        match final_state.winner().map(|side| side as usize) {
            Some(seat) => wins[if starting == 0 { seat } else { 1 - seat }] += 1,
            None => draws += 1,
        }
        info!(
            "game {game}: {} (player1) vs {} (player2), payoffs={payoffs:?}",
            labels[starting],
            labels[1 - starting]
        );

        starting = 1 - starting;
    }

    println!("cumulative payoffs: {}={} {}={}", labels[0], cum_payoffs[0], labels[1], cum_payoffs[1]);
    println!("wins: {}={} {}={} draws={}", labels[0], wins[0], labels[1], wins[1], draws);
}
