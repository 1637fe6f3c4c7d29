// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! WebAssembly bindings for the query engine.
//!
//! One type, `LunrexIndex`: load the JSON Lunr wrote, search it. Results come
//! back as plain objects in Lunr's shape (`{ ref, score, matchData }`), so an
//! existing Lunr front end can switch over without touching its rendering.

use serde::Serialize;
use serde_wasm_bindgen::{from_value, Serializer};
use wasm_bindgen::prelude::*;

use crate::config::SearchOptions;
use crate::error::Error;
use crate::index::Index;

/// WASM-accessible loaded index.
#[wasm_bindgen]
pub struct LunrexIndex {
    index: Index,
}

#[wasm_bindgen]
impl LunrexIndex {
    /// Load from the serialized index JSON string.
    #[wasm_bindgen(constructor)]
    pub fn new(json: &str) -> Result<LunrexIndex, JsValue> {
        let index = Index::from_json(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(LunrexIndex { index })
    }

    /// Load from an already-parsed JS object.
    #[wasm_bindgen(js_name = fromObject)]
    pub fn from_object(data: JsValue) -> Result<LunrexIndex, JsValue> {
        let data = from_value(data).map_err(|e| JsValue::from_str(&e.to_string()))?;
        let index = Index::load(data).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(LunrexIndex { index })
    }

    /// Search and return ranked results.
    ///
    /// Options (all optional):
    /// - `limit`: Maximum results (default: 10)
    ///
    /// A malformed query rejects with the parser's message, e.g.
    /// `"unrecognised field 'x', possible fields: 'title', 'body'"`.
    #[wasm_bindgen]
    pub fn search(&self, query: &str, options: Option<JsValue>) -> Result<JsValue, JsValue> {
        let options: SearchOptions = match options {
            Some(opts) => from_value(opts).unwrap_or_default(),
            None => SearchOptions::default(),
        };

        let results = self.index.search(query).map_err(|e| match e {
            Error::Parse(err) => JsValue::from_str(&err.message),
            other => JsValue::from_str(&other.to_string()),
        })?;

        // Plain objects rather than ES Maps for the nested metadata
        options
            .apply(results)
            .serialize(&Serializer::json_compatible())
            .map_err(|e| e.to_string().into())
    }

    /// Field names the index was built with.
    #[wasm_bindgen]
    pub fn fields(&self) -> Vec<String> {
        self.index.fields().to_vec()
    }

    #[wasm_bindgen(js_name = termCount)]
    pub fn term_count(&self) -> usize {
        self.index.term_count()
    }

    #[wasm_bindgen]
    pub fn version(&self) -> Option<String> {
        self.index.version().map(str::to_string)
    }
}
