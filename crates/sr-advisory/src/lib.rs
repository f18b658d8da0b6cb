//! `sr-advisory` — trip-start safety advisory selection.
//!
//! When the user starts a trip, the application surfaces a couple of safety
//! recommendations drawn at random from a fixed list.  Delivery (the
//! platform notification) is the host's concern; this crate owns the
//! registry and the selection logic, kept deterministic under a seeded
//! [`TripRng`] so the same seed reproduces the same picks.

use sr_core::{TipId, TripRng};


/// The stock advisory texts shipped with the application.
const BUILT_IN_TIPS: [&str; 5] = [
    "Avoid poorly lit areas at night.",
    "Share your route with a family member or friend.",
    "Charge your phone before heading out.",
    "Keep your personal belongings secure.",
    "Avoid wearing headphones while walking.",
];

/// A fixed, ordered list of advisory texts addressed by [`TipId`].
///
/// Like the hazard catalog, a registry is built once and never mutated;
/// `TipId(n)` addresses the `n`-th tip for the registry's lifetime.
#[derive(Clone, Debug)]
pub struct TipRegistry {
    tips: Vec<String>,
}

impl TipRegistry {
    /// The stock five travel-safety tips.
    pub fn built_in() -> Self {
        Self {
            tips: BUILT_IN_TIPS.iter().map(|s| (*s).to_owned()).collect(),
        }
    }

    /// A registry over caller-supplied texts (e.g. from remote config).
    pub fn from_tips(tips: Vec<String>) -> Self {
        Self { tips }
    }

    pub fn len(&self) -> usize {
        self.tips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tips.is_empty()
    }

    pub fn get(&self, id: TipId) -> Option<&str> {
        self.tips.get(id.index()).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (TipId, &str)> {
        self.tips
            .iter()
            .enumerate()
            .map(|(i, s)| (TipId(i as u16), s.as_str()))
    }

    /// Pick `n` distinct tips uniformly at random.
    ///
    /// Returns fewer than `n` ids only when the registry is smaller than
    /// `n`; a tip is never repeated within one selection.  Order is the
    /// shuffle order, not registry order.
    pub fn pick(&self, n: usize, rng: &mut TripRng) -> Vec<TipId> {
        let mut ids: Vec<TipId> = (0..self.tips.len()).map(|i| TipId(i as u16)).collect();
        rng.shuffle(&mut ids);
        ids.truncate(n);
        ids
    }

    /// Like [`pick`](Self::pick), resolving ids to their texts.
    pub fn pick_texts(&self, n: usize, rng: &mut TripRng) -> Vec<&str> {
        self.pick(n, rng)
            .into_iter()
            .filter_map(|id| self.get(id))
            .collect()
    }
}

impl Default for TipRegistry {
    fn default() -> Self {
        Self::built_in()
    }
}
