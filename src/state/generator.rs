//! Unique key and payload generation.
//!
//! Keys are URL-shaped (`prefix` + random URL-safe characters) and payloads
//! are HTML-shaped random text. Both are drawn until the candidate is absent
//! from the live page set, up to a configured retry cap.

use super::PageMap;
use crate::config::{GeneratorConfig, Validatable};
use crate::error::{GenerationErrorKind, PageWatchError, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Path appended to the key prefix when the scratch buffer cannot be used.
const FALLBACK_KEY_PATH: &str = "zero/";

/// Payload returned when the scratch buffer cannot be used.
pub const FALLBACK_PAYLOAD: &str = "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n</head>\n<body>\n</body>\n</html>";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Target {
    Key,
    Payload,
}

impl Target {
    const fn name(self) -> &'static str {
        match self {
            Self::Key => "key",
            Self::Payload => "payload",
        }
    }
}

/// Generates page keys and payloads that do not collide with live pages.
///
/// The generator owns its PRNG and a scratch buffer, so it must not be
/// shared between concurrent callers; [`SiteState`](super::SiteState)
/// keeps it behind the same lock as the page maps.
#[derive(Debug)]
pub struct IdentifierGenerator {
    config: GeneratorConfig,
    key_alphabet: Vec<char>,
    payload_alphabet: Vec<char>,
    key_space: u128,
    payload_space: u128,
    rng: StdRng,
    scratch: String,
}

impl IdentifierGenerator {
    /// Create a generator, rejecting unusable configurations up front.
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        let errors = config.validate();
        if !errors.is_empty() {
            let message = errors
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; ");
            return Err(PageWatchError::config(message));
        }

        let key_alphabet: Vec<char> = config.key_alphabet.chars().collect();
        let payload_alphabet: Vec<char> = config.payload_alphabet.chars().collect();
        let key_space = space_size(key_alphabet.len(), config.min_key_len, config.max_key_len);
        let payload_space = space_size(
            payload_alphabet.len(),
            config.min_payload_len,
            config.max_payload_len,
        );
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Ok(Self {
            config,
            key_alphabet,
            payload_alphabet,
            key_space,
            payload_space,
            rng,
            scratch: String::new(),
        })
    }

    /// The configuration this generator was built from.
    #[must_use]
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Number of distinct keys the configuration can produce (saturating).
    #[must_use]
    pub fn key_space(&self) -> u128 {
        self.key_space
    }

    /// Number of distinct payloads the configuration can produce (saturating).
    #[must_use]
    pub fn payload_space(&self) -> u128 {
        self.payload_space
    }

    /// Generate a key that is not yet present in `live`.
    pub fn generate_key(&mut self, live: &PageMap) -> Result<String> {
        self.generate(Target::Key, live.len(), |candidate| {
            live.contains_key(candidate)
        })
    }

    /// Generate a payload that no page in `live` currently holds.
    ///
    /// Uniqueness is checked against current values only; payloads that
    /// existed in earlier snapshots may be produced again.
    pub fn generate_payload(&mut self, live: &PageMap) -> Result<String> {
        self.generate(Target::Payload, live.len(), |candidate| {
            live.values().any(|payload| payload == candidate)
        })
    }

    /// Generate `count` payloads, unique against `live` and against each other.
    pub fn generate_payloads(&mut self, live: &PageMap, count: usize) -> Result<Vec<String>> {
        let mut fresh: Vec<String> = Vec::with_capacity(count);
        for _ in 0..count {
            let payload = self.generate(Target::Payload, live.len() + fresh.len(), |candidate| {
                live.values().any(|payload| payload == candidate)
                    || fresh.iter().any(|payload| payload == candidate)
            })?;
            fresh.push(payload);
        }
        Ok(fresh)
    }

    /// Draw one index uniformly from `0..len`, or `None` when `len` is zero.
    pub fn pick_index(&mut self, len: usize) -> Option<usize> {
        (len > 0).then(|| self.rng.random_range(0..len))
    }

    /// Draw `count` distinct indices from `0..len` without replacement.
    ///
    /// Returns an empty list when `count` exceeds `len`.
    pub fn sample_indices(&mut self, len: usize, count: usize) -> Vec<usize> {
        if count > len {
            return Vec::new();
        }
        rand::seq::index::sample(&mut self.rng, len, count).into_vec()
    }

    /// The placeholder key handed out when generation cannot use its buffer.
    #[must_use]
    pub fn fallback_key(&self) -> String {
        format!("{}{FALLBACK_KEY_PATH}", self.config.key_prefix)
    }

    fn fallback(&self, target: Target) -> String {
        match target {
            Target::Key => self.fallback_key(),
            Target::Payload => FALLBACK_PAYLOAD.to_string(),
        }
    }

    fn generate(
        &mut self,
        target: Target,
        occupied: usize,
        is_taken: impl Fn(&str) -> bool,
    ) -> Result<String> {
        let space = match target {
            Target::Key => self.key_space,
            Target::Payload => self.payload_space,
        };
        if space <= occupied as u128 {
            return Err(PageWatchError::generation(
                format!("generating {}", target.name()),
                GenerationErrorKind::SpaceTooSmall {
                    what: target.name(),
                    space,
                    occupied,
                },
            ));
        }

        for attempt in 1..=self.config.max_attempts {
            if !self.fill_scratch(target) {
                let fallback = self.fallback(target);
                if is_taken(&fallback) {
                    tracing::warn!(
                        what = target.name(),
                        "scratch buffer unavailable and placeholder already live"
                    );
                    return Err(PageWatchError::generation(
                        format!("generating {}", target.name()),
                        GenerationErrorKind::SpaceExhausted {
                            what: target.name(),
                            attempts: attempt,
                        },
                    ));
                }
                tracing::warn!(
                    what = target.name(),
                    "scratch buffer unavailable, falling back to placeholder"
                );
                return Ok(fallback);
            }
            if !is_taken(&self.scratch) {
                if attempt > 1 {
                    tracing::debug!(what = target.name(), attempt, "collision resolved");
                }
                return Ok(self.scratch.clone());
            }
        }

        Err(PageWatchError::generation(
            format!("generating {}", target.name()),
            GenerationErrorKind::SpaceExhausted {
                what: target.name(),
                attempts: self.config.max_attempts,
            },
        ))
    }

    /// Refill the scratch buffer with a fresh candidate.
    ///
    /// Returns `false` if the buffer could not be grown.
    fn fill_scratch(&mut self, target: Target) -> bool {
        let (alphabet, min_len, max_len, prefix) = match target {
            Target::Key => (
                &self.key_alphabet,
                self.config.min_key_len,
                self.config.max_key_len,
                self.config.key_prefix.as_str(),
            ),
            Target::Payload => (
                &self.payload_alphabet,
                self.config.min_payload_len,
                self.config.max_payload_len,
                "",
            ),
        };

        let len = self.rng.random_range(min_len..max_len);
        self.scratch.clear();
        if self
            .scratch
            .try_reserve(prefix.len() + len.saturating_mul(4))
            .is_err()
        {
            return false;
        }

        self.scratch.push_str(prefix);
        for _ in 0..len {
            let idx = self.rng.random_range(0..alphabet.len());
            self.scratch.push(alphabet[idx]);
        }
        true
    }
}

/// Count strings over `symbols` characters with length in `min_len..max_len`.
fn space_size(symbols: usize, min_len: usize, max_len: usize) -> u128 {
    let base = symbols as u128;
    let mut total: u128 = 0;
    for len in min_len..max_len {
        let Ok(exp) = u32::try_from(len) else {
            return u128::MAX;
        };
        match base.checked_pow(exp) {
            Some(count) => total = total.saturating_add(count),
            None => return u128::MAX,
        }
        if total == u128::MAX {
            break;
        }
    }
    total
}
