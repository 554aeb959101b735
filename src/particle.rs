// Single particle of the backdrop field: drifts at a constant velocity, pulses its
// radius between the configured bounds, and respawns somewhere random once it leaves the canvas.

use crate::color::Color;
use crate::config::FieldConfig;
use rand::Rng;
use vecmath::{vec2_add, Vector2};

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vector2<f64>,
    pub vel: Vector2<f64>,
    pub size: f64,
    pub color: Color,
    pub growing: bool,
}

impl Particle {
    pub fn new(pos_x: f64, pos_y: f64, vel_x: f64, vel_y: f64, size: f64, color: Color) -> Particle {
        Particle {
            pos: [pos_x, pos_y],
            vel: [vel_x, vel_y],
            size,
            color,
            growing: true,
        }
    }

    pub fn spawn<R: Rng>(bounds: Vector2<f64>, config: &FieldConfig, rng: &mut R) -> Particle {
        let mut p = Particle::new(0.0, 0.0, 0.0, 0.0, config.min_size, Color::from_u32(Color::PALETTE[0]));
        p.reset(bounds, config, rng);
        p
    }

    /// Re-rolls every attribute: position, size, velocity, hue, opacity and pulse direction.
    pub fn reset<R: Rng>(&mut self, bounds: Vector2<f64>, config: &FieldConfig, rng: &mut R) {
        self.pos = [rng.gen::<f64>() * bounds[0], rng.gen::<f64>() * bounds[1]];
        self.size = sample_between(rng, config.min_size, config.max_size);
        self.vel = [
            sample_between(rng, -config.max_speed, config.max_speed),
            sample_between(rng, -config.max_speed, config.max_speed),
        ];
        let hue = Color::PALETTE[rng.gen_range(0, Color::PALETTE.len())];
        self.color = Color::from_u32(hue).with_alpha(sample_between(rng, config.min_alpha, config.max_alpha));
        self.growing = rng.gen_bool(0.5);
    }

    /// Moves one frame forward. Returns true when the particle left the canvas and was respawned.
    pub fn advance<R: Rng>(&mut self, bounds: Vector2<f64>, config: &FieldConfig, rng: &mut R) -> bool {
        self.pos = vec2_add(self.pos, self.vel);
        self.pulse(config);

        if self.is_within(bounds) {
            false
        } else {
            self.reset(bounds, config, rng);
            true
        }
    }

    pub fn is_within(&self, bounds: Vector2<f64>) -> bool {
        self.pos[0] >= 0.0 && self.pos[0] < bounds[0] && self.pos[1] >= 0.0 && self.pos[1] < bounds[1]
    }

    // Size is held at the bound for the frame it is reached, then heads back the other way.
    fn pulse(&mut self, config: &FieldConfig) {
        if self.growing {
            self.size += config.size_step;
            if self.size >= config.max_size {
                self.size = config.max_size;
                self.growing = false;
            }
        } else {
            self.size -= config.size_step;
            if self.size <= config.min_size {
                self.size = config.min_size;
                self.growing = true;
            }
        }
    }
}

// gen_range panics on an empty range; a collapsed (or inverted) range just yields its low end
fn sample_between<R: Rng>(rng: &mut R, low: f64, high: f64) -> f64 {
    if low < high {
        rng.gen_range(low, high)
    } else {
        low
    }
}
