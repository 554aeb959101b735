// Owns the particle pool and the canvas extent it lives in.
// One call to `frame` is one animation tick: clear, link nearby particles, move, draw.

use crate::config::FieldConfig;
use crate::particle::Particle;
use crate::renderer::Surface;
use rand::Rng;
use vecmath::{vec2_len, vec2_sub, Vector2};

pub struct ParticleField {
    width: f64,
    height: f64,
    config: FieldConfig,
    particles: Vec<Particle>,
}

impl ParticleField {
    /// Pool size for a viewport: one particle per `pixels_per_particle` of width, capped.
    pub fn particle_count(viewport_width: f64, config: &FieldConfig) -> usize {
        let count = (viewport_width / config.pixels_per_particle).floor();
        if count.is_nan() || count <= 0.0 {
            0
        } else {
            (count as usize).min(config.max_particles)
        }
    }

    pub fn new<R: Rng>(width: f64, height: f64, config: FieldConfig, rng: &mut R) -> ParticleField {
        let num_particles = ParticleField::particle_count(width, &config);
        let bounds = [width, height];
        let mut particles = Vec::with_capacity(num_particles);
        for _ in 0..num_particles {
            particles.push(Particle::spawn(bounds, &config, rng));
        }
        ParticleField {
            width,
            height,
            config,
            particles,
        }
    }

    /// Pool size is left alone; particles now outside the canvas respawn on their next update.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width.max(0.0);
        self.height = height.max(0.0);
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Every unordered pair (i < j) closer than the link distance.
    pub fn connections(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let link_distance = self.config.link_distance;
        let particles = &self.particles;
        (0..particles.len()).flat_map(move |i| {
            ((i + 1)..particles.len())
                .filter(move |&j| vec2_len(vec2_sub(particles[i].pos, particles[j].pos)) < link_distance)
                .map(move |j| (i, j))
        })
    }

    /// Advances every particle one frame without drawing. Returns how many respawned.
    pub fn update<R: Rng>(&mut self, rng: &mut R) -> usize {
        let bounds = self.bounds();
        let mut respawned = 0;
        for particle in &mut self.particles {
            if particle.advance(bounds, &self.config, rng) {
                respawned += 1;
            }
        }
        respawned
    }

    pub fn frame<S: Surface, R: Rng>(&mut self, surface: &mut S, rng: &mut R) -> Result<(), S::Error> {
        surface.clear(self.width, self.height)?;

        surface.set_line_style(&self.config.link_style, self.config.link_width)?;
        let links: Vec<(Vector2<f64>, Vector2<f64>)> = self
            .connections()
            .map(|(i, j)| (self.particles[i].pos, self.particles[j].pos))
            .collect();
        for (from, to) in links {
            surface.stroke_line(from, to)?;
        }

        let bounds = self.bounds();
        for particle in &mut self.particles {
            particle.advance(bounds, &self.config, rng);
            surface.fill_circle(particle.pos, particle.size, particle.color, self.config.glow_blur)?;
        }
        Ok(())
    }

    fn bounds(&self) -> Vector2<f64> {
        [self.width, self.height]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::renderer::recording::{DrawCall, RecordingSurface};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn still(x: f64, y: f64) -> Particle {
        Particle::new(x, y, 0.0, 0.0, 2.0, Color::from_u32(Color::PALETTE[1]).with_alpha(0.5))
    }

    fn field_with(particles: Vec<Particle>, width: f64, height: f64) -> ParticleField {
        ParticleField {
            width,
            height,
            config: FieldConfig::default(),
            particles,
        }
    }

    #[test]
    fn count_follows_viewport_width() {
        let config = FieldConfig::default();
        assert_eq!(ParticleField::particle_count(1000.0, &config), 100);
        assert_eq!(ParticleField::particle_count(3840.0, &config), 100);
        assert_eq!(ParticleField::particle_count(375.0, &config), 37);
        assert_eq!(ParticleField::particle_count(9.0, &config), 0);
        assert_eq!(ParticleField::particle_count(0.0, &config), 0);
        assert_eq!(ParticleField::particle_count(-20.0, &config), 0);
    }

    #[test]
    fn links_only_close_pairs() {
        let field = field_with(vec![still(0.0, 0.0), still(50.0, 0.0)], 500.0, 500.0);
        assert_eq!(field.connections().collect::<Vec<_>>(), vec![(0, 1)]);

        let field = field_with(vec![still(0.0, 0.0), still(150.0, 0.0)], 500.0, 500.0);
        assert_eq!(field.connections().count(), 0);

        // exactly at the link distance is not linked
        let field = field_with(vec![still(0.0, 0.0), still(60.0, 80.0)], 500.0, 500.0);
        assert_eq!(field.connections().count(), 0);
    }

    #[test]
    fn links_are_unordered_pairs() {
        let field = field_with(
            vec![still(10.0, 10.0), still(20.0, 10.0), still(30.0, 10.0), still(400.0, 400.0)],
            500.0,
            500.0,
        );
        assert_eq!(field.connections().collect::<Vec<_>>(), vec![(0, 1), (0, 2), (1, 2)]);
    }

    #[test]
    fn frame_draws_lines_before_moving() {
        let mut a = still(0.0, 0.0);
        a.vel = [1.0, 0.0];
        let b = still(50.0, 0.0);
        let mut field = field_with(vec![a, b], 500.0, 500.0);
        let mut surface = RecordingSurface::default();
        let mut rng = StdRng::seed_from_u64(1);

        field.frame(&mut surface, &mut rng).unwrap();

        assert_eq!(surface.calls[0], DrawCall::Clear(500.0, 500.0));
        assert_eq!(
            surface.calls[1],
            DrawCall::LineStyle("rgba(255, 255, 255, 0.1)".to_owned(), 0.5)
        );
        assert_eq!(surface.calls[2], DrawCall::Line([0.0, 0.0], [50.0, 0.0]));
        match &surface.calls[3] {
            DrawCall::Circle(center, _, color, glow) => {
                assert_eq!(*center, [1.0, 0.0]);
                assert_eq!(color.to_css(), "rgba(255, 177, 153, 0.5)");
                assert_eq!(*glow, 10.0);
            }
            other => panic!("expected a circle, got {:?}", other),
        }
        assert_eq!(surface.circles(), 2);
        assert_eq!(surface.lines(), 1);
    }

    #[test]
    fn empty_pool_frame_only_clears() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut field = ParticleField::new(5.0, 5.0, FieldConfig::default(), &mut rng);
        let mut surface = RecordingSurface::default();

        assert!(field.is_empty());
        field.frame(&mut surface, &mut rng).unwrap();
        assert_eq!(surface.lines(), 0);
        assert_eq!(surface.circles(), 0);
        assert_eq!(surface.calls.len(), 2);
    }

    #[test]
    fn invariants_hold_over_many_frames() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut field = ParticleField::new(1000.0, 800.0, FieldConfig::default(), &mut rng);
        assert_eq!(field.len(), 100);

        for _ in 0..600 {
            let mut surface = RecordingSurface::default();
            field.frame(&mut surface, &mut rng).unwrap();
            assert!(surface.lines() <= 4950);
            assert_eq!(field.len(), 100);
            for p in field.particles() {
                assert!(p.size >= 1.0 && p.size <= 6.0);
                assert!(p.is_within([1000.0, 800.0]));
            }
        }
    }

    #[test]
    fn resize_keeps_pool_and_respawns_stragglers() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut field = ParticleField::new(1000.0, 800.0, FieldConfig::default(), &mut rng);
        field.resize(200.0, 100.0);

        field.update(&mut rng);
        assert_eq!(field.len(), 100);
        assert_eq!((field.width(), field.height()), (200.0, 100.0));
        for p in field.particles() {
            assert!(p.is_within([200.0, 100.0]));
        }
    }

    #[test]
    fn update_reports_respawns() {
        let mut gone = still(999.0, 400.0);
        gone.vel = [2.0, 0.0];
        let mut field = field_with(vec![gone, still(10.0, 10.0)], 1000.0, 800.0);
        let mut rng = StdRng::seed_from_u64(2);

        assert_eq!(field.update(&mut rng), 1);
        assert_ne!(field.particles()[0].pos, [1001.0, 400.0]);
        assert!(field.particles()[0].is_within([1000.0, 800.0]));
        assert_eq!(field.particles()[1].pos, [10.0, 10.0]);
    }

    #[test]
    fn seeded_fields_are_reproducible() {
        let mut a = StdRng::seed_from_u64(77);
        let mut b = StdRng::seed_from_u64(77);
        let mut fa = ParticleField::new(640.0, 480.0, FieldConfig::default(), &mut a);
        let mut fb = ParticleField::new(640.0, 480.0, FieldConfig::default(), &mut b);
        for _ in 0..50 {
            fa.update(&mut a);
            fb.update(&mut b);
        }
        assert_eq!(fa.particles(), fb.particles());
    }
}
