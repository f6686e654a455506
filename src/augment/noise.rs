/*! Token-level noise injection

A token sequence goes through three passes, each one feeding the next:

1. **swap**: adjacent tokens are swapped with probability `swap_prob`,
2. **drop**: each token is dropped with probability `drop_prob`,
3. **duplicate**: each token is doubled with probability `dup_prob`.

The swap pass sweeps left to right over the array it is mutating,
so a token that has just been moved to `i+1` can be moved again at step `i+1`:
with `swap_prob = 1`, `[a, b, c, d]` becomes `[b, c, d, a]`.

Every decision consumes exactly one `f64` draw from the provided generator,
in pass order (`n-1` swap draws, then one per token left for drop, then one per token left for duplicate).
Runs are reproducible as long as the generator seed and the call order are.
!*/
use rand::Rng;

use crate::config::{DROP_PROB, DUP_PROB, SWAP_PROB};
use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoiseInjector {
    swap_prob: f64,
    drop_prob: f64,
    dup_prob: f64,
}

impl NoiseInjector {
    /// Create an injector. Each probability has to be in `[0, 1]`.
    pub fn new(swap_prob: f64, drop_prob: f64, dup_prob: f64) -> Result<Self, Error> {
        for (name, p) in [
            ("swap_prob", swap_prob),
            ("drop_prob", drop_prob),
            ("dup_prob", dup_prob),
        ] {
            if !(0.0..=1.0).contains(&p) {
                return Err(Error::Configuration(format!(
                    "{} must be in [0, 1], got {}",
                    name, p
                )));
            }
        }
        Ok(Self {
            swap_prob,
            drop_prob,
            dup_prob,
        })
    }

    /// Injector that leaves sequences untouched (but still consumes draws).
    pub fn identity() -> Self {
        Self {
            swap_prob: 0.0,
            drop_prob: 0.0,
            dup_prob: 0.0,
        }
    }

    pub fn swap_prob(&self) -> f64 {
        self.swap_prob
    }

    pub fn drop_prob(&self) -> f64 {
        self.drop_prob
    }

    pub fn dup_prob(&self) -> f64 {
        self.dup_prob
    }

    /// Returns a noisy copy of `tokens`.
    pub fn inject<T: Clone, R: Rng + ?Sized>(&self, tokens: &[T], rng: &mut R) -> Vec<T> {
        let tokens = self.swap_pass(tokens.to_vec(), rng);
        let tokens = self.drop_pass(tokens, rng);
        self.dup_pass(tokens, rng)
    }

    fn swap_pass<T, R: Rng + ?Sized>(&self, mut tokens: Vec<T>, rng: &mut R) -> Vec<T> {
        for i in 0..tokens.len().saturating_sub(1) {
            if draw(rng) < self.swap_prob {
                tokens.swap(i, i + 1);
            }
        }
        tokens
    }

    fn drop_pass<T, R: Rng + ?Sized>(&self, tokens: Vec<T>, rng: &mut R) -> Vec<T> {
        // keep with probability 1 - drop_prob
        tokens
            .into_iter()
            .filter(|_| draw(rng) >= self.drop_prob)
            .collect()
    }

    /// Equivalent to a cursor that skips over each inserted copy:
    /// one draw per incoming token, never one for a duplicate.
    fn dup_pass<T: Clone, R: Rng + ?Sized>(&self, tokens: Vec<T>, rng: &mut R) -> Vec<T> {
        let mut out = Vec::with_capacity(tokens.len());
        for token in tokens {
            if draw(rng) < self.dup_prob {
                out.push(token.clone());
            }
            out.push(token);
        }
        out
    }
}

impl Default for NoiseInjector {
    fn default() -> Self {
        Self {
            swap_prob: SWAP_PROB,
            drop_prob: DROP_PROB,
            dup_prob: DUP_PROB,
        }
    }
}

#[inline]
fn draw<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    rng.gen::<f64>()
}

/// Apply swap, drop and duplicate noise to `tokens`.
///
/// Fails if a probability is outside of `[0, 1]`.
pub fn inject_noise<T: Clone, R: Rng + ?Sized>(
    tokens: &[T],
    swap_prob: f64,
    drop_prob: f64,
    dup_prob: f64,
    rng: &mut R,
) -> Result<Vec<T>, Error> {
    Ok(NoiseInjector::new(swap_prob, drop_prob, dup_prob)?.inject(tokens, rng))
}
