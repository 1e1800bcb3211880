use crate::constants::*;
use glam::Vec2;
use rand::prelude::*;

/// One drifting background star. Positions are logical (CSS) pixels.
#[derive(Clone, Debug)]
pub struct Star {
    pub pos: Vec2,
    pub radius: f32,
    /// x component jitters sideways, y component is the upward rise rate.
    pub drift: Vec2,
    pub alpha: f32,
    pub alpha_step: f32,
}

/// A filled-circle draw command for the 2D surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawCircle {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub alpha: f32,
}

#[inline]
pub fn star_count_for_width(width: f32) -> usize {
    if width <= SMALL_VIEWPORT_MAX {
        STARS_SMALL
    } else if width <= MEDIUM_VIEWPORT_MAX {
        STARS_MEDIUM
    } else {
        STARS_LARGE
    }
}

/// The full particle set plus the viewport it lives in. Owns its RNG so a
/// fixed seed reproduces the same field in tests.
pub struct StarField {
    stars: Vec<Star>,
    width: f32,
    height: f32,
    rng: StdRng,
}

impl StarField {
    pub fn new(width: f32, height: f32, seed: u64) -> Self {
        let mut field = Self {
            stars: Vec::new(),
            width,
            height,
            rng: StdRng::seed_from_u64(seed),
        };
        field.populate();
        field
    }

    /// Rebuild the whole set for a new viewport. No star survives a resize.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        self.populate();
    }

    fn populate(&mut self) {
        let count = star_count_for_width(self.width);
        self.stars.clear();
        for _ in 0..count {
            let star = Star {
                pos: Vec2::new(
                    self.rng.gen_range(0.0..self.width.max(1.0)),
                    self.rng.gen_range(0.0..self.height.max(1.0)),
                ),
                radius: self.rng.gen_range(STAR_RADIUS_MIN..STAR_RADIUS_MAX),
                drift: Vec2::new(
                    self.rng.gen_range(-STAR_DRIFT_X_MAX..STAR_DRIFT_X_MAX),
                    self.rng.gen_range(STAR_RISE_MIN..STAR_RISE_MAX),
                ),
                alpha: self.rng.gen_range(STAR_ALPHA_SEED_MIN..STAR_ALPHA_SEED_MAX),
                alpha_step: self.rng.gen_range(STAR_ALPHA_STEP_MIN..STAR_ALPHA_STEP_MAX),
            };
            self.stars.push(star);
        }
        log::debug!(
            "[starfield] populated {} stars for {:.0}x{:.0}",
            self.stars.len(),
            self.width,
            self.height
        );
    }

    /// Advance every star by one frame, appending one circle per star.
    ///
    /// Order per star: step alpha (bouncing the step sign off the band
    /// bounds), emit at the pre-move position with the new alpha, then move
    /// and wrap. Stars rise off the top and reappear at the bottom; x wraps
    /// on both sides.
    pub fn advance(&mut self, out: &mut Vec<DrawCircle>) {
        out.clear();
        out.reserve(self.stars.len());
        for star in &mut self.stars {
            star.alpha += star.alpha_step;
            if star.alpha > STAR_ALPHA_CEIL || star.alpha < STAR_ALPHA_FLOOR {
                star.alpha_step = -star.alpha_step;
            }

            out.push(DrawCircle {
                x: star.pos.x,
                y: star.pos.y,
                radius: star.radius,
                alpha: star.alpha,
            });

            star.pos.x += star.drift.x;
            star.pos.y -= star.drift.y;

            if star.pos.y < 0.0 {
                star.pos.y = self.height;
            }
            if star.pos.x < 0.0 {
                star.pos.x = self.width;
            }
            if star.pos.x > self.width {
                star.pos.x = 0.0;
            }
        }
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }
}
