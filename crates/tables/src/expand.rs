//! Display-volume expansion.
//!
//! Demo datasets hold a handful of rows, but table views need to exercise
//! pagination at realistic scale. Expansion synthesizes display volume by
//! cycling the source rows up to a configured floor. It is an index mapping
//! over the true row arena — duplicate rows are never materialized as
//! independently mutable entities, and every display entry keeps the source
//! index that edit/delete must target.

/// Expansion tuning. The floor is presentation configuration, not domain
/// logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpansionConfig {
    /// Minimum number of display rows synthesized from a non-empty source.
    pub floor: usize,
}

impl Default for ExpansionConfig {
    fn default() -> Self {
        Self { floor: 1200 }
    }
}

/// One entry of the expanded display list: a synthetic id plus the
/// back-reference into the source row sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRef {
    pub display_id: String,
    pub source_index: usize,
}

/// Expand a source of `source_len` rows to `max(source_len, floor)` display
/// refs. An empty source expands to nothing.
pub fn expand(dataset_id: &str, source_len: usize, config: ExpansionConfig) -> Vec<DisplayRef> {
    if source_len == 0 {
        return Vec::new();
    }

    let target = source_len.max(config.floor);
    (0..target)
        .map(|display_index| DisplayRef {
            display_id: format!("{dataset_id}-{}", display_index + 1),
            source_index: display_index % source_len,
        })
        .collect()
}
