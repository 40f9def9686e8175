//! Output strategies — how a step turns the state vector into words
//!
//! Every step picks exactly one strategy from its phase value. Both
//! strategies are pure functions of the current state and the requested
//! length; neither mutates the state.

use super::corpus::{FRAGMENTS, VOCABULARY};
use super::state::StateVector;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Modulus of the phase value
pub const PHASE_MODULUS: u64 = 23;

/// Phases strictly below this select coherent extraction
pub const COHERENT_PHASE_LIMIT: u8 = 3;

/// The two production modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Strategy {
    /// Literal phrase fragment, padded with sampled words when short
    Coherent,
    /// Plain vocabulary sampling driven by state bytes
    Stochastic,
}

impl Strategy {
    pub fn for_phase(phase: u8) -> Self {
        if phase < COHERENT_PHASE_LIMIT {
            Strategy::Coherent
        } else {
            Strategy::Stochastic
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Strategy::Coherent => "coherent",
            Strategy::Stochastic => "stochastic",
        }
    }

    /// Produce `length` words from the current state
    pub fn produce(&self, state: &StateVector, length: usize) -> Vec<String> {
        match self {
            Strategy::Coherent => coherent_extraction(state, length),
            Strategy::Stochastic => stochastic_sampling(state, length),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// `(iterations * drift) mod 23`, reduced so it never overflows
pub fn phase(iterations: u64, drift: u8) -> u8 {
    (((iterations % PHASE_MODULUS) * u64::from(drift)) % PHASE_MODULUS) as u8
}

/// Position `i` picks `VOCABULARY[(state[i mod 32] + i) mod 25]`
pub fn stochastic_sampling(state: &StateVector, length: usize) -> Vec<String> {
    (0..length)
        .map(|i| {
            let index = (usize::from(state.at_wrapped(i)) + i) % VOCABULARY.len();
            VOCABULARY[index].to_string()
        })
        .collect()
}

/// Fragment chosen by the sum of the first three state bytes.
///
/// A fragment at least `length` long is truncated. A shorter one is kept
/// whole and padded with `length - fragment_len` sampled words, placed
/// after the fragment when `state[0]` is even and before it when odd.
pub fn coherent_extraction(state: &StateVector, length: usize) -> Vec<String> {
    let chosen = FRAGMENTS[state.head_sum() % FRAGMENTS.len()];

    if chosen.len() >= length {
        return chosen[..length].iter().map(|w| w.to_string()).collect();
    }

    let fragment = chosen.iter().map(|w| w.to_string());
    let noise = stochastic_sampling(state, length - chosen.len());
    if state.first() % 2 == 0 {
        fragment.chain(noise).collect()
    } else {
        noise.into_iter().chain(fragment).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| w.to_string()).collect()
    }

    /// Seed 42 after five rotations: head = [128, 142, 141], selector 6
    fn seed_42_fifth_state() -> StateVector {
        let mut state = StateVector::from_seed(42);
        for _ in 0..5 {
            state.rotate();
        }
        state
    }

    #[test]
    fn test_strategy_for_phase() {
        assert_eq!(Strategy::for_phase(0), Strategy::Coherent);
        assert_eq!(Strategy::for_phase(2), Strategy::Coherent);
        assert_eq!(Strategy::for_phase(3), Strategy::Stochastic);
        assert_eq!(Strategy::for_phase(22), Strategy::Stochastic);
        let coherent = (0..23).filter(|&p| Strategy::for_phase(p) == Strategy::Coherent).count();
        assert_eq!(coherent, 3);
    }

    #[test]
    fn test_phase_range_and_overflow() {
        assert_eq!(phase(5, 5), 2);
        assert_eq!(phase(1, 13), 13);
        for it in 0..200u64 {
            for drift in 0..17u8 {
                let p = phase(it, drift);
                assert!(p < 23);
                assert_eq!(u64::from(p), (it * u64::from(drift)) % 23);
            }
        }
        assert!(phase(u64::MAX, 16) < 23);
    }

    #[test]
    fn test_stochastic_sampling() {
        let mut state = StateVector::from_seed(42);
        state.rotate();
        let out = stochastic_sampling(&state, 5);
        assert_eq!(out, words(&["microscope", "cascade", "gentle", "mechanism", "fragment"]));
        assert!(stochastic_sampling(&state, 0).is_empty());
    }

    #[test]
    fn test_stochastic_sampling_long_wraps_state() {
        let state = StateVector::from_seed(9);
        let out = stochastic_sampling(&state, 100);
        assert_eq!(out.len(), 100);
        assert!(out.iter().all(|w| VOCABULARY.contains(&w.as_str())));
    }

    #[test]
    fn test_coherent_padding_even_head() {
        let state = seed_42_fifth_state();
        assert_eq!(state.first() % 2, 0);
        let out = coherent_extraction(&state, 5);
        assert_eq!(out, words(&["third", "floor", "fluorescent", "cascade", "cascade"]));
    }

    #[test]
    fn test_coherent_padding_odd_head() {
        let mut state = StateVector::from_seed(-7);
        state.rotate();
        assert_eq!(state.first() % 2, 1);
        let out = coherent_extraction(&state, 5);
        assert_eq!(out, words(&["fragment", "transparent", "oscillate", "shoot", "gun"]));
    }

    #[test]
    fn test_coherent_truncation() {
        let state = seed_42_fifth_state();
        assert_eq!(coherent_extraction(&state, 2), words(&["third", "floor"]));
        assert_eq!(coherent_extraction(&state, 1), words(&["third"]));
        assert!(coherent_extraction(&state, 0).is_empty());
    }

    #[test]
    fn test_coherent_fragment_contiguous() {
        for seed in 0..50 {
            let state = StateVector::from_seed(seed);
            let fragment = FRAGMENTS[state.head_sum() % FRAGMENTS.len()];
            for length in 0..8 {
                let out = coherent_extraction(&state, length);
                assert_eq!(out.len(), length);
                if fragment.len() >= length {
                    assert_eq!(out, words(&fragment[..length]));
                } else if state.first() % 2 == 0 {
                    assert_eq!(&out[..fragment.len()], words(fragment).as_slice());
                } else {
                    assert_eq!(&out[length - fragment.len()..], words(fragment).as_slice());
                }
            }
        }
    }

    #[test]
    fn test_produce_dispatch() {
        let state = seed_42_fifth_state();
        assert_eq!(
            Strategy::Coherent.produce(&state, 3),
            coherent_extraction(&state, 3)
        );
        assert_eq!(
            Strategy::Stochastic.produce(&state, 3),
            stochastic_sampling(&state, 3)
        );
        assert_eq!(Strategy::Coherent.to_string(), "coherent");
    }
}
