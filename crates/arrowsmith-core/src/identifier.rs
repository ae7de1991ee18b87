//! Identifiers for graph nodes and relationships.
//!
//! Every node and relationship in a [`GraphModel`](crate::model::GraphModel)
//! carries an opaque [`Id`]. Ids are produced by an [`IdGenerator`] that the
//! caller hands to the model builder, so the same builder can emit random ids
//! for real exports and reproducible ids for tests.
//!
//! All generators draw from the same 62-character [`ALPHABET`].

use std::fmt;

use log::trace;
use rand::{Rng, SeedableRng, rngs::StdRng, rngs::ThreadRng};
use serde::Serialize;

/// Characters an identifier may contain: upper case, lower case, digits.
pub const ALPHABET: &[u8; 62] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Length of identifiers when none is configured.
pub const DEFAULT_ID_LENGTH: usize = 20;

/// Opaque identifier of a node or relationship.
///
/// # Examples
///
/// ```
/// use arrowsmith_core::identifier::Id;
///
/// let id = Id::new("aB3");
/// assert_eq!(id, "aB3");
/// assert_eq!(id.len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Id(String);

impl Id {
    /// Creates an `Id` from its textual form.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the number of characters in the identifier.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the identifier is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Id {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl PartialEq<str> for Id {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Id {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Source of fresh identifiers.
///
/// Implementations make no uniqueness promise beyond what their strategy
/// gives; the model builder does not check for collisions.
pub trait IdGenerator {
    /// Produce the next identifier, exactly `length` characters long and
    /// drawn only from [`ALPHABET`].
    fn next_id(&mut self, length: usize) -> Id;

    /// How many more distinct identifiers of `length` characters this
    /// generator can issue, or `None` when it has no fixed bound.
    fn remaining(&self, _length: usize) -> Option<u64> {
        None
    }
}

impl<G: IdGenerator + ?Sized> IdGenerator for &mut G {
    fn next_id(&mut self, length: usize) -> Id {
        (**self).next_id(length)
    }

    fn remaining(&self, length: usize) -> Option<u64> {
        (**self).remaining(length)
    }
}

impl<G: IdGenerator + ?Sized> IdGenerator for Box<G> {
    fn next_id(&mut self, length: usize) -> Id {
        (**self).next_id(length)
    }

    fn remaining(&self, length: usize) -> Option<u64> {
        (**self).remaining(length)
    }
}

/// Generator drawing every character independently and uniformly from
/// [`ALPHABET`].
///
/// # Examples
///
/// ```
/// use arrowsmith_core::identifier::{IdGenerator, RandomIdGenerator};
///
/// let mut ids = RandomIdGenerator::new();
/// let id = ids.next_id(20);
/// assert_eq!(id.len(), 20);
/// assert!(id.as_str().chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
#[derive(Debug, Clone)]
pub struct RandomIdGenerator<R = ThreadRng> {
    rng: R,
}

impl RandomIdGenerator {
    /// Creates a generator backed by the thread-local random source.
    pub fn new() -> Self {
        Self { rng: rand::rng() }
    }
}

impl Default for RandomIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomIdGenerator<StdRng> {
    /// Creates a generator whose sequence is fully determined by `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> IdGenerator for RandomIdGenerator<R> {
    fn next_id(&mut self, length: usize) -> Id {
        let value: String = (0..length)
            .map(|_| char::from(ALPHABET[self.rng.random_range(0..ALPHABET.len())]))
            .collect();
        trace!(id = value; "Generated random identifier");
        Id(value)
    }
}

/// Generator producing a base-62 counter, left padded with the first
/// alphabet character.
///
/// The first ids of length 4 are `AAAA`, `AAAB`, `AAAC`, ... Only `62^length`
/// distinct ids fit; past that the counter wraps and ids repeat, so callers
/// check [`IdGenerator::remaining`] before drawing.
///
/// # Examples
///
/// ```
/// use arrowsmith_core::identifier::{IdGenerator, SequentialIdGenerator};
///
/// let mut ids = SequentialIdGenerator::new();
/// assert_eq!(ids.next_id(4), "AAAA");
/// assert_eq!(ids.next_id(4), "AAAB");
/// ```
#[derive(Debug, Clone, Default)]
pub struct SequentialIdGenerator {
    counter: u64,
}

impl SequentialIdGenerator {
    /// Creates a generator starting at zero.
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&mut self, length: usize) -> Id {
        let base = ALPHABET.len() as u64;
        let mut remaining = self.counter;
        let mut digits = vec![ALPHABET[0]; length];
        for slot in digits.iter_mut().rev() {
            *slot = ALPHABET[(remaining % base) as usize];
            remaining /= base;
        }
        self.counter = self.counter.wrapping_add(1);

        // Every byte comes from ALPHABET, which is ASCII.
        Id(digits.into_iter().map(char::from).collect())
    }

    fn remaining(&self, length: usize) -> Option<u64> {
        let length = u32::try_from(length).ok()?;
        let total = (ALPHABET.len() as u64).checked_pow(length)?;
        Some(total.saturating_sub(self.counter))
    }
}
