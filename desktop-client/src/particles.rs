use common::games::SessionRng;
use eframe::egui::{Color32, Pos2, Rect, Vec2, vec2};

pub const GRAVITY: f32 = 0.2;
const MAX_SPEED: f32 = 5.0;

const PALETTE: [Color32; 5] = [
    Color32::from_rgb(255, 50, 50),
    Color32::from_rgb(50, 150, 255),
    Color32::from_rgb(50, 255, 100),
    Color32::from_rgb(255, 255, 100),
    Color32::from_rgb(200, 100, 255),
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub pos: Pos2,
    pub vel: Vec2,
    pub color: Color32,
    pub radius: f32,
}

/// Confetti burst shown after a win, advanced once per frame.
#[derive(Debug, Default)]
pub struct Celebration {
    particles: Vec<Particle>,
    frames_left: u32,
}

impl Celebration {
    pub fn start(&mut self, origin: Pos2, count: usize, frames: u32, rng: &mut SessionRng) {
        self.particles = (0..count)
            .map(|_| Particle {
                pos: origin,
                vel: vec2(
                    rng.random_range(-MAX_SPEED..MAX_SPEED),
                    rng.random_range(-MAX_SPEED..MAX_SPEED),
                ),
                color: rng.choose(&PALETTE).copied().unwrap_or(Color32::WHITE),
                radius: rng.random_range(3..=8) as f32,
            })
            .collect();
        self.frames_left = frames;
    }

    pub fn clear(&mut self) {
        self.particles.clear();
        self.frames_left = 0;
    }

    pub fn is_active(&self) -> bool {
        self.frames_left > 0
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Moves every particle one frame and drops those that left `bounds`.
    pub fn step(&mut self, bounds: Rect) {
        if !self.is_active() {
            return;
        }
        self.frames_left -= 1;

        for particle in &mut self.particles {
            particle.pos += particle.vel;
            particle.vel.y += GRAVITY;
        }
        self.particles.retain(|particle| bounds.contains(particle.pos));

        if self.frames_left == 0 {
            self.particles.clear();
        }
    }
}
