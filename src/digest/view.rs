use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single entity's field-to-value mapping, in display order
pub type Record = Map<String, Value>;

/// The normalized intermediate form of one API response.
///
/// Built fresh for every response and dropped once rendered. Items are
/// kept as `Value` because the field selector hands non-record entries
/// back unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NormalizedView {
    /// The envelope itself reported a failure
    Error { message: String },

    /// An OData collection
    List {
        status: Option<i64>,
        /// Length of the full result array, not of `items`
        count: usize,
        items: Vec<Value>,
    },

    /// An OData single-entity response
    Single { status: Option<i64>, item: Value },

    /// Unrecognized shape, carried through untouched
    Raw { original: Value },
}

impl NormalizedView {
    pub fn kind(&self) -> &'static str {
        match self {
            NormalizedView::Error { .. } => "error",
            NormalizedView::List { .. } => "list",
            NormalizedView::Single { .. } => "single",
            NormalizedView::Raw { .. } => "raw",
        }
    }
}
