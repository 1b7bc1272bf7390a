//! Reproducible random point sets for tests, benches and the CLI `sample` command.
//!
//! Model
//! - Ring: `n` angles equally spaced on [0, 2π) with bounded angular jitter,
//!   placed on a circle of radius `radius`. Points on a circle are always in
//!   convex position, so every ring point is a hull vertex.
//! - Interior: uniform points in the disk of radius `interior_frac * radius`.
//!   They are strictly inside the hull whenever the ring's inradius exceeds
//!   that disk (e.g. `n >= 6` with the default jitter).
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Point count distribution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}

impl PointCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            PointCount::Fixed(n) => n,
            PointCount::Uniform { min, max } => {
                let hi = max.max(min);
                rng.gen_range(min..=hi)
            }
        }
    }
}

/// Point-cloud sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct CloudCfg {
    /// Number of points on the outer circle.
    pub ring: PointCount,
    /// Number of points inside.
    pub interior: PointCount,
    /// Angular jitter as a fraction of the base spacing Δ=2π/n. Clamped to [0, 0.49].
    pub angle_jitter_frac: f64,
    pub radius: f64,
    /// Interior disk radius relative to `radius`. Clamped to [0, 1].
    pub interior_frac: f64,
    /// Random global phase in [0, 2π)?
    pub random_phase: bool,
}

impl Default for CloudCfg {
    fn default() -> Self {
        Self {
            ring: PointCount::Fixed(12),
            interior: PointCount::Fixed(100),
            angle_jitter_frac: 0.3,
            radius: 1000.0,
            interior_frac: 0.5,
            random_phase: true,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    pub fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Ring points only, in angular order (all in convex position).
pub fn draw_ring(cfg: CloudCfg, tok: ReplayToken) -> Vec<Vector2<f64>> {
    let mut rng = tok.to_std_rng();
    ring_points(&cfg, &mut rng)
}

/// Ring plus interior points, shuffled so input order carries no structure.
pub fn draw_cloud(cfg: CloudCfg, tok: ReplayToken) -> Vec<Vector2<f64>> {
    let mut rng = tok.to_std_rng();
    let mut pts = ring_points(&cfg, &mut rng);
    let m = cfg.interior.sample(&mut rng);
    let r_in = cfg.radius.abs() * cfg.interior_frac.clamp(0.0, 1.0);
    pts.reserve(m);
    for _ in 0..m {
        // sqrt for uniform density over the disk
        let r = r_in * rng.gen::<f64>().sqrt();
        let th = rng.gen::<f64>() * std::f64::consts::TAU;
        pts.push(Vector2::new(th.cos() * r, th.sin() * r));
    }
    pts.shuffle(&mut rng);
    pts
}

fn ring_points<R: Rng>(cfg: &CloudCfg, rng: &mut R) -> Vec<Vector2<f64>> {
    let n = cfg.ring.sample(rng);
    if n == 0 {
        return Vec::new();
    }
    let aj = cfg.angle_jitter_frac.clamp(0.0, 0.49);
    let delta = std::f64::consts::TAU / (n as f64);
    let phase = if cfg.random_phase {
        rng.gen::<f64>() * std::f64::consts::TAU
    } else {
        0.0
    };
    (0..n)
        .map(|k| {
            let jitter = (rng.gen::<f64>() * 2.0 - 1.0) * aj * delta;
            let th = phase + (k as f64) * delta + jitter;
            Vector2::new(th.cos() * cfg.radius, th.sin() * cfg.radius)
        })
        .collect()
}
