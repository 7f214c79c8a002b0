//! Core divergence calculations.
//!
//! Implements information-theoretic divergence measures:
//! - KL Divergence (Kullback-Leibler)
//! - Jensen-Shannon Divergence
//! - Hellinger Distance
//!
//! All logarithms are natural logs, so results are in nats and the
//! Jensen-Shannon upper bound is ln 2.

use crate::error::{DivergenceError, Result};

/// Normalize a distribution to sum to 1.0
///
/// Falls back to the uniform distribution when the input sums to zero.
/// Caller-side utility for preparing proper distributions; the divergence
/// functions themselves never rescale their inputs.
#[inline]
pub fn normalize(dist: &mut [f64]) {
    let sum: f64 = dist.iter().sum();
    if sum > 0.0 {
        for x in dist.iter_mut() {
            *x /= sum;
        }
    } else if !dist.is_empty() {
        let uniform = 1.0 / dist.len() as f64;
        for x in dist.iter_mut() {
            *x = uniform;
        }
    }
}

/// Shannon entropy H(P) = -Σ p_i * ln(p_i)
///
/// Higher entropy = more diffuse distribution
/// Lower entropy = more concentrated distribution
#[inline]
pub fn entropy(p: &[f64]) -> f64 {
    p.iter()
        .filter(|&&x| x > 0.0)
        .map(|&x| -x * x.ln())
        .sum()
}

/// KL Divergence D_KL(P || Q) = Σ p_i * ln(p_i / q_i)
///
/// The sum runs only over indices where both `p_i > 0` and `q_i > 0`;
/// every other index contributes 0. This is a smoothing convention, not
/// the strict mathematical KLD (which diverges when `p_i > 0` and
/// `q_i == 0`). The convention sidesteps that singularity by exclusion,
/// which also means the result can go negative when mass of `p` falls
/// outside the support of `q`.
///
/// Properties (for distributions with matching support):
/// - Non-negative: D_KL(P || Q) >= 0
/// - Zero iff P = Q
/// - Asymmetric: D_KL(P || Q) != D_KL(Q || P)
#[inline]
pub fn kld(p: &[f64], q: &[f64]) -> Result<f64> {
    if p.len() != q.len() {
        return Err(DivergenceError::DimensionMismatch {
            expected: p.len(),
            got: q.len(),
        });
    }

    let mut kl = 0.0;
    for (&pi, &qi) in p.iter().zip(q.iter()) {
        if pi > 0.0 && qi > 0.0 {
            kl += pi * (pi / qi).ln();
        }
    }

    Ok(kl)
}

/// Symmetric KL Divergence
///
/// Φ(P,Q) = D_KL(P || Q) + D_KL(Q || P)
#[inline]
pub fn symmetric_kl(p: &[f64], q: &[f64]) -> Result<f64> {
    Ok(kld(p, q)? + kld(q, p)?)
}

/// Jensen-Shannon Divergence
///
/// JS(P,Q) = (D_KL(P || M) + D_KL(Q || M)) / 2
/// where M = (P + Q) / 2
///
/// Properties:
/// - Symmetric: JS(P, Q) = JS(Q, P), bitwise (the mixture and both KL
///   terms are order-independent)
/// - JS(P, P) = 0 exactly
/// - Bounded: 0 <= JS <= ln 2 for proper probability distributions
#[inline]
pub fn jsd(p: &[f64], q: &[f64]) -> Result<f64> {
    if p.len() != q.len() {
        return Err(DivergenceError::DimensionMismatch {
            expected: p.len(),
            got: q.len(),
        });
    }

    let m: Vec<f64> = p
        .iter()
        .zip(q.iter())
        .map(|(&pi, &qi)| 0.5 * (pi + qi))
        .collect();

    Ok(0.5 * (kld(p, &m)? + kld(q, &m)?))
}

/// Hellinger Distance
///
/// H(P,Q) = √(0.5 * Σ(√p_i - √q_i)²)
///
/// Properties:
/// - Symmetric
/// - Bounded: 0 <= H <= 1
/// - Satisfies triangle inequality (true metric)
#[inline]
pub fn hellinger_distance(p: &[f64], q: &[f64]) -> Result<f64> {
    if p.len() != q.len() {
        return Err(DivergenceError::DimensionMismatch {
            expected: p.len(),
            got: q.len(),
        });
    }

    let sum_sq: f64 = p
        .iter()
        .zip(q.iter())
        .map(|(&pi, &qi)| {
            let diff = pi.sqrt() - qi.sqrt();
            diff * diff
        })
        .sum();

    Ok((0.5 * sum_sq).sqrt())
}
