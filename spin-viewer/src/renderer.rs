//! Sprite, HUD and overlay drawing

use egui::{Align2, Color32, FontId, Pos2, Rect, Stroke, Vec2};

const BACKGROUND: Color32 = Color32::from_rgb(20, 20, 30);
const BORDER: Color32 = Color32::from_rgb(60, 60, 80);
const ACCENT: Color32 = Color32::from_rgb(100, 150, 255);

/// Renders the spinning sprite inside a square stage
pub struct SpriteRenderer {
    /// Stage rect in screen coordinates
    pub stage_rect: Rect,
    /// Sprite center
    pub center: Pos2,
    /// Sprite radius in pixels
    pub radius: f32,
}

impl SpriteRenderer {
    /// Create a new renderer sized for the given available rect
    pub fn new(available_rect: Rect) -> Self {
        let padding = 20.0;
        let side = (available_rect.width().min(available_rect.height()) - padding * 2.0).max(0.0);
        let stage_rect = Rect::from_center_size(available_rect.center(), Vec2::splat(side));

        Self {
            stage_rect,
            center: stage_rect.center(),
            radius: side * 0.4,
        }
    }

    /// Draw the stage background
    pub fn draw_stage_bg(&self, painter: &egui::Painter) {
        painter.rect_filled(self.stage_rect, 8.0, BACKGROUND);
        painter.rect_stroke(self.stage_rect, 8.0, Stroke::new(2.0, BORDER));
    }

    /// Draw sprite frame `frame` of `frames`.
    ///
    /// Each frame is the same wheel turned one bucket further, so the
    /// motion reads as discrete steps just like a sprite sheet.
    pub fn draw_sprite(&self, painter: &egui::Painter, frame: usize, frames: u32) {
        let frames = frames.max(1) as usize;
        let rotation = frame_rotation(frame, frames);

        painter.circle_filled(self.center, self.radius, Color32::from_rgb(35, 35, 50));
        painter.circle_stroke(self.center, self.radius, Stroke::new(3.0, Color32::WHITE));

        let spoke_step = std::f32::consts::TAU / frames as f32;
        for i in 0..frames {
            let angle = rotation + i as f32 * spoke_step;
            let (color, width) = if i == 0 {
                (ACCENT, 6.0)
            } else {
                (Color32::from_gray(170), 2.0)
            };
            painter.line_segment(
                [self.center, self.point_at(angle, self.radius * 0.92)],
                Stroke::new(width, color),
            );
        }

        // Marker at the tip of the highlighted spoke
        painter.circle_filled(self.point_at(rotation, self.radius * 0.92), self.radius * 0.08, ACCENT);
        painter.circle_filled(self.center, self.radius * 0.12, Color32::WHITE);
    }

    /// Draw score, seconds left and a time bar along the stage top
    pub fn draw_hud(&self, painter: &egui::Painter, score: u32, seconds_left: u64, progress: f32) {
        let top = self.stage_rect.min + Vec2::new(12.0, 10.0);
        painter.text(
            top,
            Align2::LEFT_TOP,
            format!("Score: {}", score),
            FontId::proportional(22.0),
            Color32::WHITE,
        );
        painter.text(
            Pos2::new(self.stage_rect.max.x - 12.0, top.y),
            Align2::RIGHT_TOP,
            format!("{}s", seconds_left),
            FontId::monospace(22.0),
            Color32::WHITE,
        );

        let track = Rect::from_min_size(
            Pos2::new(self.stage_rect.min.x + 12.0, self.stage_rect.min.y + 42.0),
            Vec2::new(self.stage_rect.width() - 24.0, 6.0),
        );
        painter.rect_filled(track, 3.0, Color32::from_rgb(50, 50, 60));
        let remaining = Rect::from_min_size(
            track.min,
            Vec2::new(track.width() * (1.0 - progress.clamp(0.0, 1.0)), track.height()),
        );
        painter.rect_filled(remaining, 3.0, ACCENT);
    }

    /// Darken the stage and show the final score
    pub fn draw_end_overlay(&self, painter: &egui::Painter, final_score: u32) {
        painter.rect_filled(
            self.stage_rect,
            8.0,
            Color32::from_rgba_unmultiplied(0, 0, 0, 170),
        );
        painter.text(
            self.center - Vec2::new(0.0, 30.0),
            Align2::CENTER_CENTER,
            "Time's up!",
            FontId::proportional(36.0),
            Color32::WHITE,
        );
        painter.text(
            self.center + Vec2::new(0.0, 20.0),
            Align2::CENTER_CENTER,
            format!("Spins: {}", final_score),
            FontId::proportional(28.0),
            ACCENT,
        );
    }

    /// Title card for the start screen
    pub fn draw_title(&self, painter: &egui::Painter, duration_secs: u64) {
        painter.text(
            self.center - Vec2::new(0.0, 40.0),
            Align2::CENTER_CENTER,
            "SPIN",
            FontId::proportional(64.0),
            Color32::WHITE,
        );
        painter.text(
            self.center + Vec2::new(0.0, 20.0),
            Align2::CENTER_CENTER,
            format!("Tap to spin. Full turns in {} seconds score.", duration_secs),
            FontId::proportional(16.0),
            Color32::from_gray(180),
        );
    }

    fn point_at(&self, angle: f32, distance: f32) -> Pos2 {
        Pos2::new(
            self.center.x + angle.cos() * distance,
            self.center.y + angle.sin() * distance,
        )
    }
}

/// Screen rotation in radians for a sprite frame; frame 0 points up
pub fn frame_rotation(frame: usize, frames: usize) -> f32 {
    let frames = frames.max(1);
    let step = std::f32::consts::TAU / frames as f32;
    -std::f32::consts::FRAC_PI_2 + (frame % frames) as f32 * step
}
