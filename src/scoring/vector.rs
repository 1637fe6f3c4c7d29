// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Sparse vector keyed by global term index.
//!
//! Elements are `(index, value)` pairs kept strictly increasing by index, so
//! a dot product is a single merge-join over both sides: O(len(a) + len(b)),
//! no hashing.
//!
//! # Magnitude cache
//!
//! The magnitude is cached as raw `f64` bits in an atomic, with `0` meaning
//! "not computed". A vector whose magnitude really is zero just recomputes it
//! every time (same answer, a few wasted adds). Every mutation resets the
//! cache. Using an atomic keeps loaded field vectors `Sync`, so one index can
//! serve searches from several threads.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::contracts;
use crate::error::ConstraintViolation;

#[derive(Debug, Default)]
pub struct Vector {
    elements: Vec<(usize, f64)>,
    magnitude: AtomicU64,
}

impl Clone for Vector {
    fn clone(&self) -> Self {
        Self {
            elements: self.elements.clone(),
            magnitude: AtomicU64::new(self.magnitude.load(Ordering::Relaxed)),
        }
    }
}

impl PartialEq for Vector {
    fn eq(&self, other: &Self) -> bool {
        self.elements == other.elements
    }
}

impl Vector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode the serialized `[index, value, index, value, ...]` form.
    ///
    /// Indices arrive as JSON numbers, so they are checked to be finite,
    /// non-negative and integral, and to be strictly increasing.
    pub fn from_flat(flat: &[f64]) -> Result<Self, ConstraintViolation> {
        if flat.len() % 2 != 0 {
            return Err(ConstraintViolation::OddVectorLength { len: flat.len() });
        }

        let mut elements = Vec::with_capacity(flat.len() / 2);
        for (position, pair) in flat.chunks_exact(2).enumerate() {
            let raw = pair[0];
            if !raw.is_finite() || raw < 0.0 || raw.fract() != 0.0 {
                return Err(ConstraintViolation::InvalidVectorIndex { value: raw });
            }
            let index = raw as usize;
            if let Some(&(previous, _)) = elements.last() {
                if index <= previous {
                    return Err(ConstraintViolation::UnsortedVector { position });
                }
            }
            elements.push((index, pair[1]));
        }

        Ok(Self {
            elements,
            magnitude: AtomicU64::new(0),
        })
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Slot where `index` lives, or where it would be inserted.
    pub fn position_for_index(&self, index: usize) -> usize {
        match self.elements.binary_search_by_key(&index, |&(i, _)| i) {
            Ok(slot) | Err(slot) => slot,
        }
    }

    pub fn get(&self, index: usize) -> Option<f64> {
        self.elements
            .binary_search_by_key(&index, |&(i, _)| i)
            .ok()
            .map(|slot| self.elements[slot].1)
    }

    /// Insert a new element. Fails if `index` is already present.
    pub fn insert(&mut self, index: usize, value: f64) -> Result<(), ConstraintViolation> {
        match self.elements.binary_search_by_key(&index, |&(i, _)| i) {
            Ok(_) => Err(ConstraintViolation::DuplicateIndex { index }),
            Err(slot) => {
                self.elements.insert(slot, (index, value));
                self.invalidate();
                Ok(())
            }
        }
    }

    /// Insert, or fold `value` into the existing element with `combine(old, new)`.
    pub fn upsert<F>(&mut self, index: usize, value: f64, combine: F)
    where
        F: FnOnce(f64, f64) -> f64,
    {
        match self.elements.binary_search_by_key(&index, |&(i, _)| i) {
            Ok(slot) => {
                let existing = self.elements[slot].1;
                self.elements[slot].1 = combine(existing, value);
            }
            Err(slot) => self.elements.insert(slot, (index, value)),
        }
        self.invalidate();
    }

    /// Upsert with the default "replace" combine.
    pub fn set(&mut self, index: usize, value: f64) {
        self.upsert(index, value, |_, new| new);
    }

    pub fn magnitude(&self) -> f64 {
        let cached = f64::from_bits(self.magnitude.load(Ordering::Relaxed));
        if cached != 0.0 {
            return cached;
        }

        let sum_of_squares: f64 = self.elements.iter().map(|&(_, v)| v * v).sum();
        let magnitude = sum_of_squares.sqrt();
        self.magnitude.store(magnitude.to_bits(), Ordering::Relaxed);
        magnitude
    }

    /// Sum of products over shared indices.
    pub fn dot(&self, other: &Vector) -> f64 {
        let a = &self.elements;
        let b = &other.elements;
        let (mut i, mut j) = (0, 0);
        let mut product = 0.0;

        while i < a.len() && j < b.len() {
            let (a_index, a_value) = a[i];
            let (b_index, b_value) = b[j];
            if a_index < b_index {
                i += 1;
            } else if a_index > b_index {
                j += 1;
            } else {
                product += a_value * b_value;
                i += 1;
                j += 1;
            }
        }

        product
    }

    /// `dot(other) / |self|`, or 0 when `self` has no magnitude.
    ///
    /// Only the receiver is normalized. In scoring the receiver is the query
    /// vector, so field vector weights pass through unscaled.
    pub fn similarity(&self, other: &Vector) -> f64 {
        let magnitude = self.magnitude();
        if magnitude == 0.0 {
            0.0
        } else {
            self.dot(other) / magnitude
        }
    }

    /// Values only, in index order.
    pub fn values(&self) -> Vec<f64> {
        self.elements.iter().map(|&(_, v)| v).collect()
    }

    pub fn elements(&self) -> &[(usize, f64)] {
        &self.elements
    }

    /// Serialized `[index, value, ...]` form.
    pub fn to_flat(&self) -> Vec<f64> {
        self.elements
            .iter()
            .flat_map(|&(i, v)| [i as f64, v])
            .collect()
    }

    fn invalidate(&self) {
        contracts::check_vector_sorted(&self.elements);
        self.magnitude.store(0, Ordering::Relaxed);
    }
}
