//! Gomoku minimax GUI
//!
//! Play against the alpha-beta engine, watch it play itself, or use it
//! for hints in a hotseat game.

use clap::{Parser, ValueEnum};
use gomoku::board::DEFAULT_BOARD_SIZE;
use gomoku::config::DEFAULT_DEPTH;
use gomoku::eval::EvaluatorKind;
use gomoku::logging::setup_logging;
use gomoku::ui::{GameMode, GomokuApp};
use gomoku::{EngineConfig, Stone};

#[derive(Parser, Debug)]
#[command(name = "gomoku", about = "Gomoku against a fixed-depth alpha-beta engine")]
struct Args {
    /// Board side length
    #[arg(long, default_value_t = DEFAULT_BOARD_SIZE)]
    size: usize,

    /// Search depth in plies
    #[arg(long, default_value_t = DEFAULT_DEPTH)]
    depth: u8,

    /// Line scoring strategy
    #[arg(long, value_enum, default_value_t = EvaluatorArg::Patterns)]
    evaluator: EvaluatorArg,

    /// Seed for reproducible opening moves
    #[arg(long)]
    seed: Option<u64>,

    /// Color the human plays; `none` for a hotseat game
    #[arg(long, value_enum, default_value_t = HumanArg::Black)]
    human: HumanArg,

    /// Log filter such as `info` or `gomoku=debug`, overrides RUST_LOG
    #[arg(long)]
    log_level: Option<String>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum EvaluatorArg {
    Patterns,
    Counting,
}

impl From<EvaluatorArg> for EvaluatorKind {
    fn from(arg: EvaluatorArg) -> Self {
        match arg {
            EvaluatorArg::Patterns => EvaluatorKind::Patterns,
            EvaluatorArg::Counting => EvaluatorKind::Counting,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum HumanArg {
    Black,
    White,
    None,
}

impl From<HumanArg> for GameMode {
    fn from(arg: HumanArg) -> Self {
        match arg {
            HumanArg::Black => GameMode::PvE { human_color: Stone::Black },
            HumanArg::White => GameMode::PvE { human_color: Stone::White },
            HumanArg::None => GameMode::PvP { show_suggestions: false },
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let _logger = setup_logging(args.log_level.as_deref())?;

    let config = EngineConfig::new(args.size, args.depth).with_evaluator(args.evaluator.into());
    config.validate()?;
    log::info!(
        "starting {}x{} game, depth {}, {:?} evaluator",
        config.board_size,
        config.board_size,
        config.depth,
        config.evaluator
    );

    let mode = GameMode::from(args.human);
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 750.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Gomoku - Minimax"),
        ..Default::default()
    };

    eframe::run_native(
        "Gomoku",
        options,
        Box::new(move |cc| Ok(Box::new(GomokuApp::new(cc, mode, config, args.seed)))),
    )?;
    Ok(())
}
