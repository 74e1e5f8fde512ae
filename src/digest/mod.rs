//! Response digestion - turn OData-style API envelopes into summary text
//!
//! The pipeline is a straight line:
//! envelope → [`Extractor`] → [`FieldSelector`] → [`format_readable`].
//! Every stage is total and pure, so there is nothing to configure at
//! runtime beyond the allow-list and list cap.

pub mod envelope;
pub mod extractor;
pub mod fields;
pub mod render;
pub mod view;

pub use envelope::{status_code, ResponseEnvelope};
pub use extractor::{extract, extract_envelope, Extractor, MAX_LIST_ITEMS};
pub use fields::{pick_important_fields, FieldSelector, IMPORTANT_FIELDS};
pub use render::{coerce_text, format_key_values, format_readable, format_scalar};
pub use view::{NormalizedView, Record};
