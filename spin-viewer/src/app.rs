//! Main application implementing eframe::App

use crate::audio::AudioPlayer;
use crate::renderer::SpriteRenderer;
use egui::{Color32, Key, RichText, Vec2};
use spin_core::{GameConfig, Screen, Session, Track};
use std::path::PathBuf;

const BUTTON_SIZE: Vec2 = Vec2::new(220.0, 56.0);

/// Main application state
pub struct SpinApp {
    /// Round and screen flow
    session: Session,
    /// Music player
    audio: AudioPlayer,
}

impl SpinApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        config: GameConfig,
        menu_music: Option<PathBuf>,
        game_music: Option<PathBuf>,
    ) -> Self {
        let mut audio = AudioPlayer::new();
        for (track, path) in [(Track::Menu, menu_music), (Track::Game, game_music)] {
            let Some(path) = path else { continue };
            match audio.load(track, &path) {
                Ok(()) => log::info!("Loaded {} track: {}", track, path.display()),
                Err(e) => log::warn!("Failed to load audio: {:#}", e),
            }
        }
        if !audio.has_audio() {
            log::info!("No music loaded, playing silently");
        }

        Self {
            session: Session::new(config),
            audio,
        }
    }

    /// Handle keyboard input
    fn handle_input(&mut self, ctx: &egui::Context) {
        let (space, enter, restart) = ctx.input(|input| {
            (
                input.key_pressed(Key::Space),
                input.key_pressed(Key::Enter),
                input.key_pressed(Key::R),
            )
        });

        match self.session.screen() {
            Screen::Start if space || enter => self.start_game(ctx),
            Screen::Game if space => self.tap(),
            Screen::End if restart => self.back_to_start(),
            _ => {}
        }
    }

    fn start_game(&mut self, ctx: &egui::Context) {
        self.session.start_game(&mut self.audio, std::thread::sleep);
        // Kick off the frame loop
        ctx.request_repaint();
    }

    fn tap(&mut self) {
        self.session.tap();
    }

    fn back_to_start(&mut self) {
        self.session.back_to_start(&mut self.audio, std::thread::sleep);
    }

    /// Advance the round to this frame's timestamp
    fn update_round(&mut self, ctx: &egui::Context) {
        let now_ms = ctx.input(|input| input.time) * 1000.0;
        let Some(outcome) = self.session.frame(now_ms, &mut self.audio) else {
            return;
        };

        if let Some(score) = outcome.score_changed {
            log::debug!("Score: {}", score);
        }
        if outcome.ended {
            log::info!("Final score: {}", self.session.round().score());
        } else {
            ctx.request_repaint();
        }
    }

    fn show_start(&mut self, ui: &mut egui::Ui) {
        let available = ui.available_rect_before_wrap();
        let stage = egui::Rect::from_min_max(
            available.min,
            egui::Pos2::new(available.max.x, available.max.y - BUTTON_SIZE.y - 20.0),
        );

        let renderer = SpriteRenderer::new(stage);
        let painter = ui.painter_at(stage);
        renderer.draw_stage_bg(&painter);
        renderer.draw_title(&painter, self.session.round().config().duration_ms / 1000);
        ui.allocate_rect(stage, egui::Sense::hover());

        ui.vertical_centered(|ui| {
            let start = ui.add_sized(BUTTON_SIZE, egui::Button::new(RichText::new("START").size(24.0)));
            if start.clicked() {
                self.start_game(ui.ctx());
            }
        });
    }

    fn show_game(&mut self, ui: &mut egui::Ui) {
        let available = ui.available_rect_before_wrap();
        let stage = egui::Rect::from_min_max(
            available.min,
            egui::Pos2::new(available.max.x, available.max.y - BUTTON_SIZE.y - 20.0),
        );

        let round = self.session.round();
        let renderer = SpriteRenderer::new(stage);
        let painter = ui.painter_at(stage);
        renderer.draw_stage_bg(&painter);
        renderer.draw_sprite(&painter, round.frame(), round.config().frames);
        renderer.draw_hud(&painter, round.score(), round.seconds_left(), round.progress());

        if let Some(final_score) = self.session.final_score() {
            renderer.draw_end_overlay(&painter, final_score);
        }
        ui.allocate_rect(stage, egui::Sense::hover());

        ui.vertical_centered(|ui| {
            if self.session.screen() == Screen::End {
                let restart =
                    ui.add_sized(BUTTON_SIZE, egui::Button::new(RichText::new("RESTART").size(24.0)));
                if restart.clicked() {
                    self.back_to_start();
                }
            } else {
                let spin = ui.add_sized(BUTTON_SIZE, egui::Button::new(RichText::new("SPIN").size(24.0)));
                // Tap on press, not release
                if spin.hovered() && ui.input(|input| input.pointer.primary_pressed()) {
                    self.tap();
                }
            }
        });
    }
}

impl eframe::App for SpinApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Handle input
        self.handle_input(ctx);

        // One simulation step per repaint
        self.update_round(ctx);

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(Color32::from_rgb(15, 15, 20)))
            .show(ctx, |ui| match self.session.screen() {
                Screen::Start => self.show_start(ui),
                Screen::Game | Screen::End => self.show_game(ui),
            });
    }
}
