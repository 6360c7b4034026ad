use crate::template::Template;
use crate::units::Px;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rand_distr::StandardNormal;

/// The randomness handle for one render invocation. All perturbation
/// draws flow through here in a fixed order, so a seeded handle
/// reproduces a render exactly and two invocations never share state.
pub(crate) struct Jitter {
    rng: ChaCha8Rng,
}

impl Jitter {
    pub fn from_seed(seed: u64) -> Jitter {
        Jitter {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Jitter {
        Jitter {
            rng: ChaCha8Rng::from_os_rng(),
        }
    }

    /// One zero-mean gaussian draw scaled by `sigma`. The draw is
    /// consumed even at zero sigma, keeping the sample stream aligned
    /// across configurations.
    fn deviation(&mut self, sigma: f32) -> f32 {
        let z: f32 = self.rng.sample(StandardNormal);
        z * sigma
    }

    /// Sample the rendered size for one glyph: the nominal font size
    /// perturbed by the font-size sigma, never smaller than one pixel
    pub fn font_size(&mut self, template: &Template) -> Px {
        let size = template.font_size() as f32 + self.deviation(template.font_size_sigma());
        Px(size.max(1.0))
    }

    /// Sample the horizontal gap added at one word boundary, on top
    /// of the space glyph's own advance
    pub fn word_gap(&mut self, template: &Template) -> Px {
        Px(template.word_spacing() as f32 + self.deviation(template.word_spacing_sigma()))
    }

    /// Sample the vertical advance from one line to the next
    pub fn line_gap(&mut self, template: &Template) -> Px {
        Px(template.line_spacing() as f32 + self.deviation(template.line_spacing_sigma()))
    }

    /// Sample the positional and rotational nudge for one glyph:
    /// `(Δx, Δy, Δθ)`, the angle in radians
    pub fn displace(&mut self, template: &Template) -> (Px, Px, f32) {
        let dx = Px(self.deviation(template.perturb_x_sigma()));
        let dy = Px(self.deviation(template.perturb_y_sigma()));
        let theta = self.deviation(template.perturb_theta_sigma());
        (dx, dy, theta)
    }
}
