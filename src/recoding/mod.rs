//! Codon selection and whole-sequence recoding.
//!
//! - [`selector`]: picks the synonymous codon closest to a reference codon
//! - [`recoder`]: validates a DNA/target pair and recodes every position
//!
//! Each codon position is evaluated independently against its own reference
//! codon; the change report is always in sequence order.

pub mod recoder;
pub mod selector;

pub use recoder::{recode, recode_sequence, recode_with_config, translate_sequence, RecodeConfig};
pub use selector::{choose_codon, Selection};
