//! Product description: what was made, in what form, and how to handle it.

/// General information about the synthesized product.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProductInfo {
    pub class: ProductClass,
    pub cas_number: Option<String>,
    pub ccdc_number: Option<String>,
    pub common_name: String,
    pub systematic_name: Option<String>,
    pub formula: Option<String>,
    pub formula_weight: Option<f64>,
    pub state: PhysicalState,
    /// Free text: a color word or a hex code.
    pub color: String,
    pub handling_atmosphere: Atmosphere,
    pub handling_note: Option<String>,
    /// Embedded crystallographic sub-document, carried as opaque text.
    pub cif: Option<String>,
}

/// Material classification of the product.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ProductClass {
    Mof,
    Cof,
    Hof,
    CoordinationPolymer,
    Zeolite,
    #[default]
    Unset,
    Other(String),
}

impl ProductClass {
    pub fn as_str(&self) -> &str {
        match self {
            ProductClass::Mof => "MOF",
            ProductClass::Cof => "COF",
            ProductClass::Hof => "HOF",
            ProductClass::CoordinationPolymer => "coordination polymer",
            ProductClass::Zeolite => "zeolite",
            ProductClass::Unset => "",
            ProductClass::Other(s) => s,
        }
    }
}

impl From<&str> for ProductClass {
    fn from(s: &str) -> Self {
        let t = s.trim();
        if t.is_empty() {
            ProductClass::Unset
        } else if t.eq_ignore_ascii_case("MOF") {
            ProductClass::Mof
        } else if t.eq_ignore_ascii_case("COF") {
            ProductClass::Cof
        } else if t.eq_ignore_ascii_case("HOF") {
            ProductClass::Hof
        } else if t.eq_ignore_ascii_case("coordination polymer") {
            ProductClass::CoordinationPolymer
        } else if t.eq_ignore_ascii_case("zeolite") {
            ProductClass::Zeolite
        } else {
            ProductClass::Other(t.to_string())
        }
    }
}

/// Physical state of the product as isolated.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PhysicalState {
    Powder,
    Crystal,
    Film,
    Liquid,
    Gel,
    #[default]
    Unset,
    Other(String),
}

impl PhysicalState {
    pub fn as_str(&self) -> &str {
        match self {
            PhysicalState::Powder => "powder",
            PhysicalState::Crystal => "crystal",
            PhysicalState::Film => "film",
            PhysicalState::Liquid => "liquid",
            PhysicalState::Gel => "gel",
            PhysicalState::Unset => "",
            PhysicalState::Other(s) => s,
        }
    }
}

impl From<&str> for PhysicalState {
    fn from(s: &str) -> Self {
        let t = s.trim();
        if t.is_empty() {
            PhysicalState::Unset
        } else if t.eq_ignore_ascii_case("powder") {
            PhysicalState::Powder
        } else if t.eq_ignore_ascii_case("crystal") {
            PhysicalState::Crystal
        } else if t.eq_ignore_ascii_case("film") {
            PhysicalState::Film
        } else if t.eq_ignore_ascii_case("liquid") {
            PhysicalState::Liquid
        } else if t.eq_ignore_ascii_case("gel") {
            PhysicalState::Gel
        } else {
            PhysicalState::Other(t.to_string())
        }
    }
}

/// Gas environment, used for both product handling and the reaction itself.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Atmosphere {
    Air,
    Inert,
    Vacuum,
    #[default]
    Unset,
    Other(String),
}

impl Atmosphere {
    pub fn as_str(&self) -> &str {
        match self {
            Atmosphere::Air => "air",
            Atmosphere::Inert => "inert",
            Atmosphere::Vacuum => "vacuum",
            Atmosphere::Unset => "",
            Atmosphere::Other(s) => s,
        }
    }
}

impl From<&str> for Atmosphere {
    fn from(s: &str) -> Self {
        let t = s.trim();
        if t.is_empty() {
            Atmosphere::Unset
        } else if t.eq_ignore_ascii_case("air") {
            Atmosphere::Air
        } else if t.eq_ignore_ascii_case("inert") {
            Atmosphere::Inert
        } else if t.eq_ignore_ascii_case("vacuum") {
            Atmosphere::Vacuum
        } else {
            Atmosphere::Other(t.to_string())
        }
    }
}
