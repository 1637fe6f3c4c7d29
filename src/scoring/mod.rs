// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring: how search results get their numbers.
//!
//! Every `(field, document)` pair in the index carries a precomputed sparse
//! vector of term weights. A query builds one vector per field out of clause
//! boosts and scores each candidate pair by dot product against it. There is
//! no other ranking signal.

mod vector;

pub use vector::*;
