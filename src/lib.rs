//! Reader and writer for Material Preparation Information Files (MPIF).
//!
//! MPIF is a STAR/CIF-derived, line-oriented text format describing chemical
//! synthesis procedures and characterization data: `_tag value` scalar pairs,
//! `loop_` repeated-record tables, `;`-fenced multi-line text blocks, and
//! embedded crystallography/adsorption sub-documents carried as opaque text.
//!
//! Two pure functions share one data model:
//! - [`parse`] decodes the full text of an `.mpif` file into a [`Document`].
//! - [`serialize`] encodes a [`Document`] back into MPIF text.
//!
//! Decoding is lenient: the only fatal condition is a missing `data_` block
//! header; every other malformed construct degrades to an absent field or a
//! skipped record. Encoding is strict: canonical section order, fenced text
//! blocks, derived loop counts, and positionally regenerated record
//! identifiers.
//!
//! ```
//! let text = "data_Example\n_mpif_product_name_common\t'MOF-5'\n";
//! let doc = mpif::parse(text).unwrap();
//! assert_eq!(doc.product.common_name, "MOF-5");
//! let out = mpif::serialize(&doc);
//! assert_eq!(mpif::parse(&out).unwrap(), doc);
//! ```

pub mod model;
pub mod read;
pub mod write;

mod tags;

pub use model::Document;
pub use read::{parse, ParseError};
pub use write::serialize;
