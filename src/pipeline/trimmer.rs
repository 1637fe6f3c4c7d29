// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Strips punctuation from both ends of a token.

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Pipeline entry point. A token of only punctuation trims to nothing and is
/// dropped by the pipeline.
pub fn trimmer(token: &str) -> Vec<String> {
    vec![token.trim_matches(|c: char| !is_word_char(c)).to_string()]
}
