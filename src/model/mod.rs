//! Core data types for the mpif crate.
//!
//! Pure structure, no parsing logic: the [`Document`] tree is produced by
//! [`crate::read::parse`] and consumed by [`crate::write::serialize`], and is
//! mutated field-by-field by callers in between. Every optional field is an
//! explicit `Option`, and every enumerated field carries an `Other` fallback
//! so unrecognized values survive a decode untouched.

pub mod characterization;
pub mod document;
pub mod product;
pub mod synthesis;

pub use characterization::{
    Characterization, IsothermPoint, IsothermSeries, IsothermUnits, PxrdPoint, PxrdSeries,
    TgaPoint, TgaSeries, XraySource,
};
pub use document::{AuthorDetails, Document, Metadata, ProcedureStatus};
pub use product::{Atmosphere, PhysicalState, ProductClass, ProductInfo};
pub use synthesis::{
    AmountUnit, Hardware, ProcedureStep, ReactionConditions, Reagent, RecordKind, Scale,
    SynthesisDetails, SynthesisGeneral, TemperatureController, TimeUnit, Vessel,
};
