//! Deterministic key streams for hit-rate and latency benchmarks.
//!
//! A tiny xorshift generator keeps every run on the same access sequence
//! without an RNG dependency in the measured loop.

use arckit::traits::CoreCache;

#[derive(Debug, Clone, Copy)]
pub enum Pattern {
    /// Uniform keys in `[0, universe)`.
    Uniform,
    /// `hot_prob` of accesses land on the first `hot_fraction` of the universe.
    Hotset { hot_fraction: f64, hot_prob: f64 },
    /// Zipfian skew; `theta` 0.0 is uniform, 0.99 is the YCSB default.
    Zipfian { theta: f64 },
    /// Hot-set traffic broken up by one-pass scans of never-reused keys.
    /// Every `period` accesses, `scan_len` fresh keys are streamed through.
    HotWithScans {
        hot_keys: u64,
        period: u64,
        scan_len: u64,
    },
}

#[derive(Debug, Clone)]
pub struct KeyStream {
    universe: u64,
    pattern: Pattern,
    rng: XorShift64,
    zipf: Option<Zipf>,
    tick: u64,
    next_scan_key: u64,
}

impl KeyStream {
    pub fn new(universe: u64, pattern: Pattern, seed: u64) -> Self {
        let universe = universe.max(1);
        let zipf = match pattern {
            Pattern::Zipfian { theta } => Some(Zipf::new(universe, theta)),
            _ => None,
        };
        Self {
            universe,
            pattern,
            rng: XorShift64::new(seed),
            zipf,
            tick: 0,
            next_scan_key: universe,
        }
    }

    pub fn next_key(&mut self) -> u64 {
        self.tick += 1;
        match self.pattern {
            Pattern::Uniform => self.rng.below(self.universe),
            Pattern::Hotset {
                hot_fraction,
                hot_prob,
            } => {
                let hot = ((self.universe as f64 * hot_fraction.clamp(0.0, 1.0)).round() as u64)
                    .clamp(1, self.universe);
                if self.rng.unit() < hot_prob.clamp(0.0, 1.0) || hot == self.universe {
                    self.rng.below(hot)
                } else {
                    hot + self.rng.below(self.universe - hot)
                }
            },
            Pattern::Zipfian { .. } => {
                let u = self.rng.unit();
                match &self.zipf {
                    Some(zipf) => zipf.sample(u),
                    None => self.rng.below(self.universe),
                }
            },
            Pattern::HotWithScans {
                hot_keys,
                period,
                scan_len,
            } => {
                let phase = self.tick % (period + scan_len).max(1);
                if phase < period {
                    self.rng.below(hot_keys.max(1))
                } else {
                    // Scan keys start above the universe and never repeat.
                    self.next_scan_key += 1;
                    self.next_scan_key
                }
            },
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct HitRate {
    pub hits: u64,
    pub misses: u64,
}

impl HitRate {
    pub fn ratio(self) -> f64 {
        match self.hits + self.misses {
            0 => 0.0,
            total => self.hits as f64 / total as f64,
        }
    }
}

/// Drives `cache` as a read-through store: lookup, insert on miss.
pub fn replay<C, V, F>(cache: &mut C, stream: &mut KeyStream, ops: usize, value: F) -> HitRate
where
    C: CoreCache<u64, V>,
    F: Fn(u64) -> V,
{
    let mut rate = HitRate::default();
    for _ in 0..ops {
        let key = stream.next_key();
        if cache.get(&key).is_some() {
            rate.hits += 1;
        } else {
            rate.misses += 1;
            cache.insert(key, value(key));
        }
    }
    rate
}

/// YCSB-style Zipfian sampler (inverse CDF with precomputed zeta).
#[derive(Debug, Clone)]
struct Zipf {
    n: u64,
    theta: f64,
    zeta_n: f64,
    alpha: f64,
    eta: f64,
}

impl Zipf {
    fn new(n: u64, theta: f64) -> Self {
        let theta = theta.clamp(0.0, 0.9999);
        let zeta = |count: u64| (1..=count).map(|i| 1.0 / (i as f64).powf(theta)).sum::<f64>();
        let zeta_2 = zeta(2);
        let zeta_n = zeta(n);
        Self {
            n,
            theta,
            zeta_n,
            alpha: 1.0 / (1.0 - theta),
            eta: (1.0 - (2.0 / n as f64).powf(1.0 - theta)) / (1.0 - zeta_2 / zeta_n),
        }
    }

    fn sample(&self, u: f64) -> u64 {
        let uz = u * self.zeta_n;
        if uz < 1.0 {
            return 0;
        }
        if uz < 1.0 + 0.5_f64.powf(self.theta) {
            return 1;
        }
        let spread = self.n as f64 * (self.eta * u - self.eta + 1.0).powf(self.alpha);
        (spread as u64).min(self.n - 1)
    }
}

#[derive(Debug, Clone, Copy)]
struct XorShift64 {
    state: u64,
}

impl XorShift64 {
    fn new(seed: u64) -> Self {
        Self { state: seed.max(1) }
    }

    fn next(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    fn below(&mut self, bound: u64) -> u64 {
        self.next() % bound.max(1)
    }

    fn unit(&mut self) -> f64 {
        self.next() as f64 / u64::MAX as f64
    }
}
