use crate::digest::envelope::{status_code, ResponseEnvelope};
use crate::digest::fields::FieldSelector;
use crate::digest::render::format_scalar;
use crate::digest::view::NormalizedView;
use once_cell::sync::Lazy;
use serde_json::Value;

/// Most items a list view carries; `count` still reports the full length
pub const MAX_LIST_ITEMS: usize = 50;

static DEFAULT_EXTRACTOR: Lazy<Extractor> = Lazy::new(Extractor::default);

/// A decoder for one known payload shape. Returns `None` when `data`
/// does not have that shape.
type ShapeDecoder = fn(&Extractor, Option<i64>, &Value) -> Option<NormalizedView>;

/// Known payload shapes, tried in order
const SHAPES: [(&str, ShapeDecoder); 2] = [
    ("collection", Extractor::decode_collection),
    ("single", Extractor::decode_single),
];

/// Classifies raw response envelopes into normalized views
#[derive(Debug, Clone)]
pub struct Extractor {
    selector: FieldSelector,
    max_items: usize,
}

impl Default for Extractor {
    fn default() -> Self {
        Extractor::new(FieldSelector::default(), MAX_LIST_ITEMS)
    }
}

impl Extractor {
    pub fn new(selector: FieldSelector, max_items: usize) -> Self {
        Extractor {
            selector,
            max_items,
        }
    }

    /// Normalize a raw envelope.
    ///
    /// Never fails: anything that is not an error envelope, a collection
    /// or a single entity comes back as `NormalizedView::Raw` holding a
    /// copy of the input.
    pub fn extract(&self, raw: &Value) -> NormalizedView {
        let Some(envelope) = raw.as_object() else {
            tracing::debug!("envelope is not an object, keeping raw value");
            return Self::raw(raw);
        };

        if let Some(error) = envelope.get("error").filter(|e| !e.is_null()) {
            return NormalizedView::Error {
                message: format_scalar(error),
            };
        }

        let status = envelope.get("status").and_then(status_code);

        let Some(data) = envelope.get("data").filter(|d| !d.is_null()) else {
            tracing::debug!(?status, "envelope has no data, keeping raw value");
            return Self::raw(raw);
        };

        for (shape, decode) in SHAPES {
            if let Some(view) = decode(self, status, data) {
                tracing::debug!(shape, ?status, "classified response");
                return view;
            }
        }

        tracing::debug!(?status, "unrecognized payload shape, keeping raw value");
        Self::raw(raw)
    }

    /// `data.d.results` is an array
    fn decode_collection(&self, status: Option<i64>, data: &Value) -> Option<NormalizedView> {
        let results = data.get("d")?.get("results")?.as_array()?;

        let items = results
            .iter()
            .take(self.max_items)
            .map(|item| self.selector.select(item))
            .collect();

        Some(NormalizedView::List {
            status,
            count: results.len(),
            items,
        })
    }

    /// `data.d` is an object without a `results` member
    fn decode_single(&self, status: Option<i64>, data: &Value) -> Option<NormalizedView> {
        let entity = data.get("d")?;
        let fields = entity.as_object()?;

        // A `results` member that is not an array is malformed, not an entity
        if fields.contains_key("results") {
            return None;
        }

        Some(NormalizedView::Single {
            status,
            item: self.selector.select(entity),
        })
    }

    fn raw(raw: &Value) -> NormalizedView {
        NormalizedView::Raw {
            original: raw.clone(),
        }
    }
}

/// Normalize a raw envelope with the default allow-list and list cap
pub fn extract(raw: &Value) -> NormalizedView {
    DEFAULT_EXTRACTOR.extract(raw)
}

/// Normalize a typed envelope
pub fn extract_envelope(envelope: &ResponseEnvelope) -> NormalizedView {
    extract(&envelope.to_value())
}
