// Tunables for the particle field. Defaults reproduce the landing page backdrop.

#[derive(Clone, Debug)]
pub struct FieldConfig {
    pub max_particles: usize,
    /// Horizontal pixels per particle when sizing the pool from the viewport.
    pub pixels_per_particle: f64,
    pub link_distance: f64,
    pub link_style: String,
    pub link_width: f64,
    pub max_speed: f64,
    pub min_size: f64,
    pub max_size: f64,
    pub size_step: f64,
    pub min_alpha: f64,
    pub max_alpha: f64,
    pub glow_blur: f64,
    pub container_selector: String,
    pub canvas_id: String,
    pub canvas_class: String,
    /// Wrap every frame in console.time / console.timeEnd.
    pub profile_frames: bool,
}

impl Default for FieldConfig {
    fn default() -> Self {
        FieldConfig {
            max_particles: 100,
            pixels_per_particle: 10.0,
            link_distance: 100.0,
            link_style: "rgba(255, 255, 255, 0.1)".to_owned(),
            link_width: 0.5,
            max_speed: 1.5,
            min_size: 1.0,
            max_size: 6.0,
            size_step: 0.03,
            min_alpha: 0.1,
            max_alpha: 0.6,
            glow_blur: 10.0,
            container_selector: ".floating-shapes".to_owned(),
            canvas_id: "particle-canvas".to_owned(),
            canvas_class: "particle-canvas".to_owned(),
            profile_frames: false,
        }
    }
}
