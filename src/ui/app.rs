//! eframe application: menu, status panel and board canvas

use eframe::egui;
use egui::{CentralPanel, Context, Key, Modifiers, RichText, SidePanel, Slider, TopBottomPanel, Ui};

use super::board_view::{self, Overlay};
use super::game_state::{GameMode, GameState, Job, Outcome, HINT_MAX_DEPTH};
use crate::board::{MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use crate::config::MAX_DEPTH;
use crate::eval::EvaluatorKind;
use crate::{EngineConfig, Pos, SearchType, Stone};

const MODES: [(&str, GameMode); 4] = [
    ("Black against the engine", GameMode::PvE { human_color: Stone::Black }),
    ("White against the engine", GameMode::PvE { human_color: Stone::White }),
    ("Hotseat", GameMode::PvP { show_suggestions: false }),
    ("Engine against itself", GameMode::EvE),
];

pub struct GomokuApp {
    game: GameState,
    /// Settings as edited in the panel. Depth and evaluator take effect on
    /// the next search, board size on the next game.
    draft: EngineConfig,
    show_stats: bool,
}

impl GomokuApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        mode: GameMode,
        config: EngineConfig,
        seed: Option<u64>,
    ) -> Self {
        Self {
            game: GameState::new(mode, config, seed),
            draft: config,
            show_stats: true,
        }
    }

    fn start(&mut self, mode: GameMode) {
        self.game.mode = mode;
        self.game.set_config(self.draft);
        self.game.restart();
    }

    fn shortcuts(&mut self, ctx: &Context) {
        let pressed = |key: Key| ctx.input_mut(|i| i.consume_key(Modifiers::NONE, key));
        if pressed(Key::N) {
            self.start(self.game.mode);
        }
        if pressed(Key::U) {
            self.game.undo();
        }
        if pressed(Key::H) {
            self.game.request_hint();
        }
        if pressed(Key::S) {
            self.show_stats = !self.show_stats;
        }
    }

    fn menu(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("New game", |ui| {
                    for (label, mode) in MODES {
                        if ui.button(label).clicked() {
                            self.start(mode);
                            ui.close_menu();
                        }
                    }
                });
                if let GameMode::PvP { show_suggestions } = &mut self.game.mode {
                    ui.checkbox(show_suggestions, "Auto hints");
                }
                ui.checkbox(&mut self.show_stats, "Search stats");
            });
        });
    }

    fn panel(&mut self, ctx: &Context) {
        SidePanel::right("panel").min_width(220.0).show(ctx, |ui| {
            ui.heading("Gomoku");
            ui.label(self.status());
            if let Some(msg) = &self.game.message {
                let warn = ui.visuals().warn_fg_color;
                ui.colored_label(warn, msg);
            }
            ui.separator();

            self.settings(ui);
            ui.separator();

            ui.horizontal(|ui| {
                if ui.button("Undo (U)").clicked() {
                    self.game.undo();
                }
                let idle = self.game.searching().is_none();
                if ui.add_enabled(idle, egui::Button::new("Hint (H)")).clicked() {
                    self.game.request_hint();
                }
                if ui.button("Restart (N)").clicked() {
                    self.start(self.game.mode);
                }
            });

            if self.show_stats {
                ui.separator();
                self.stats(ui);
            }
        });
    }

    fn status(&self) -> String {
        if let Some(outcome) = self.game.outcome {
            return match outcome {
                Outcome::Five { winner, .. } => format!("{} wins", side_name(winner)),
                Outcome::Draw => "Draw: the board is full".to_string(),
            };
        }
        let side = side_name(self.game.to_move);
        match self.game.searching() {
            Some((Job::Move, t)) => format!("{} (engine) thinking… {:.1}s", side, t.as_secs_f32()),
            Some((Job::Hint, _)) => format!("{} to move, looking for a hint…", side),
            None if self.game.human_to_move() => format!("{} to move", side),
            None => format!("{} (engine) to move", side),
        }
    }

    fn settings(&mut self, ui: &mut Ui) {
        ui.label(RichText::new("Engine").strong());
        ui.add(Slider::new(&mut self.draft.depth, 1..=MAX_DEPTH).text("depth"));
        ui.horizontal(|ui| {
            ui.radio_value(&mut self.draft.evaluator, EvaluatorKind::Patterns, "patterns");
            ui.radio_value(&mut self.draft.evaluator, EvaluatorKind::Counting, "counting");
        });
        ui.add(Slider::new(&mut self.draft.board_size, MIN_BOARD_SIZE..=MAX_BOARD_SIZE).text("board"));
        if self.draft.board_size != self.game.config.board_size {
            ui.small("New size applies to the next game");
        }
        ui.small(format!("Hints search {} plies", self.draft.depth.min(HINT_MAX_DEPTH)));

        let live = EngineConfig {
            board_size: self.game.config.board_size,
            ..self.draft
        };
        if live != self.game.config {
            self.game.set_config(live);
        }
    }

    fn stats(&self, ui: &mut Ui) {
        let Some((job, result)) = &self.game.last_search else {
            ui.weak("No search yet");
            return;
        };
        egui::Grid::new("stats").num_columns(2).show(ui, |ui| {
            ui.label("search");
            ui.label(match job {
                Job::Move => "engine move",
                Job::Hint => "hint",
            });
            ui.end_row();
            ui.label("move");
            ui.label(point_name(result.best_move));
            ui.end_row();
            ui.label("kind");
            ui.label(match result.search_type {
                SearchType::AlphaBeta => "alpha-beta",
                SearchType::Fallback => "opening",
            });
            ui.end_row();
            ui.label("score");
            ui.label(result.score.map_or("-".to_string(), |s| s.to_string()));
            ui.end_row();
            ui.label("nodes");
            ui.label(result.nodes.to_string());
            ui.end_row();
            ui.label("time");
            ui.label(format!("{} ms", result.time_ms));
            ui.end_row();
        });
    }

    fn board(&mut self, ctx: &Context) {
        let accepting = self.game.outcome.is_none()
            && self.game.human_to_move()
            && !matches!(self.game.searching(), Some((Job::Move, _)));
        let overlay = Overlay {
            last_move: self.game.last_move(),
            hint: self.game.hint,
            five: self.game.outcome.and_then(|o| o.line()),
            preview: accepting.then_some(self.game.to_move),
        };

        CentralPanel::default().show(ctx, |ui| {
            if let Some(pos) = board_view::show(ui, &self.game.board, &overlay) {
                if let Err(msg) = self.game.play(pos) {
                    self.game.message = Some(msg);
                }
            }
        });
    }

    fn auto_hint(&mut self) {
        let wanted = matches!(self.game.mode, GameMode::PvP { show_suggestions: true })
            && self.game.hint.is_none()
            && self.game.message.is_none()
            && self.game.searching().is_none();
        if wanted {
            self.game.request_hint();
        }
    }
}

/// Point in the canvas labels, e.g. `H8`
fn point_name(pos: Pos) -> String {
    format!("{}{}", char::from(b'A' + pos.col), pos.row + 1)
}

fn side_name(stone: Stone) -> &'static str {
    match stone {
        Stone::Black => "Black",
        Stone::White => "White",
        Stone::Empty => "Nobody",
    }
}

impl eframe::App for GomokuApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.shortcuts(ctx);
        self.game.tick();
        self.auto_hint();

        self.menu(ctx);
        self.panel(ctx);
        self.board(ctx);

        if self.game.searching().is_some() {
            ctx.request_repaint();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_name_matches_labels() {
        assert_eq!(point_name(Pos::new(0, 0)), "A1");
        assert_eq!(point_name(Pos::new(7, 7)), "H8");
        assert_eq!(point_name(Pos::new(14, 2)), "C15");
    }
}
