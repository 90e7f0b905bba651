//! Top-level document structure and audit metadata.

use super::characterization::Characterization;
use super::product::ProductInfo;
use super::synthesis::{SynthesisDetails, SynthesisGeneral};

/// A complete in-memory MPIF document.
///
/// Created wholesale by [`crate::read::parse`], or as a blank editing
/// session via `Document::default()`. The tree is plain owned data with no
/// identity or back-references; callers replace sections in place and hand
/// the whole thing to [`crate::write::serialize`].
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Document {
    pub metadata: Metadata,
    pub author: AuthorDetails,
    pub product: ProductInfo,
    pub synthesis: SynthesisGeneral,
    pub details: SynthesisDetails,
    pub characterization: Characterization,
}

/// Audit metadata from the head of the file.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Metadata {
    /// Name from the `data_<name>` header line.
    pub data_name: String,
    /// ISO 8601 date string.
    pub creation_date: String,
    pub generator_version: String,
    pub publication_doi: Option<String>,
    pub procedure_status: ProcedureStatus,
}

/// Outcome classification of the recorded procedure.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ProcedureStatus {
    Test,
    Success,
    Failure,
    /// Empty on the wire; a document that never set the field.
    #[default]
    Unset,
    /// Unrecognized token, kept verbatim.
    Other(String),
}

impl ProcedureStatus {
    pub fn as_str(&self) -> &str {
        match self {
            ProcedureStatus::Test => "test",
            ProcedureStatus::Success => "success",
            ProcedureStatus::Failure => "failure",
            ProcedureStatus::Unset => "",
            ProcedureStatus::Other(s) => s,
        }
    }
}

impl From<&str> for ProcedureStatus {
    fn from(s: &str) -> Self {
        let t = s.trim();
        if t.is_empty() {
            ProcedureStatus::Unset
        } else if t.eq_ignore_ascii_case("test") {
            ProcedureStatus::Test
        } else if t.eq_ignore_ascii_case("success") {
            ProcedureStatus::Success
        } else if t.eq_ignore_ascii_case("failure") {
            ProcedureStatus::Failure
        } else {
            ProcedureStatus::Other(t.to_string())
        }
    }
}

/// Contact author identification.
///
/// The ORCID format (`XXXX-XXXX-XXXX-XXX[0-9X]`) is not checked here;
/// validation is a separate concern layered on top of the model.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AuthorDetails {
    pub name: String,
    pub email: String,
    pub orcid: String,
    pub address: Option<String>,
    pub phone: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn procedure_status_tokens() {
        assert_eq!(ProcedureStatus::from("success"), ProcedureStatus::Success);
        assert_eq!(ProcedureStatus::from("TEST"), ProcedureStatus::Test);
        assert_eq!(ProcedureStatus::from(""), ProcedureStatus::Unset);
        assert_eq!(
            ProcedureStatus::from("inconclusive"),
            ProcedureStatus::Other("inconclusive".into())
        );
        assert_eq!(ProcedureStatus::Failure.as_str(), "failure");
        assert_eq!(ProcedureStatus::Unset.as_str(), "");
    }

    #[test]
    fn blank_document_is_empty() {
        let doc = Document::default();
        assert!(doc.details.substrates.is_empty());
        assert!(doc.characterization.pxrd.is_none());
        assert_eq!(doc.metadata.procedure_status, ProcedureStatus::Unset);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn document_json_round_trip() {
        let mut doc = Document::default();
        doc.metadata.data_name = "json_rt".into();
        doc.author.name = "A. Author".into();
        let json = serde_json::to_string(&doc).unwrap();
        let back: Document = serde_json::from_str(&json).unwrap();
        assert_eq!(back, doc);
    }
}
