//! Characterization data: diffraction and thermogravimetric series,
//! adsorption/desorption isotherms, and embedded AIF/CIF text.

/// All characterization attached to one document. Every member is optional;
/// a file with no characterization section simply leaves them all absent.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Characterization {
    pub pxrd: Option<PxrdSeries>,
    pub tga: Option<TgaSeries>,
    pub adsorption: Option<IsothermSeries>,
    pub desorption: Option<IsothermSeries>,
    /// Embedded Adsorption Information File, carried as opaque text.
    pub aif: Option<String>,
    /// Embedded Crystallographic Information File, carried as opaque text.
    pub cif: Option<String>,
}

/// Powder X-ray diffraction pattern.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PxrdSeries {
    pub source: XraySource,
    /// Wavelength in Å.
    pub wavelength: Option<f64>,
    pub points: Vec<PxrdPoint>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PxrdPoint {
    pub two_theta: f64,
    pub intensity: f64,
}

/// X-ray anode material or beam source.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum XraySource {
    Cu,
    Mo,
    Co,
    Ag,
    Synchrotron,
    #[default]
    Unset,
    Other(String),
}

impl XraySource {
    pub fn as_str(&self) -> &str {
        match self {
            XraySource::Cu => "Cu",
            XraySource::Mo => "Mo",
            XraySource::Co => "Co",
            XraySource::Ag => "Ag",
            XraySource::Synchrotron => "synchrotron",
            XraySource::Unset => "",
            XraySource::Other(s) => s,
        }
    }
}

impl From<&str> for XraySource {
    fn from(s: &str) -> Self {
        let t = s.trim();
        if t.is_empty() {
            XraySource::Unset
        } else if t.eq_ignore_ascii_case("Cu") {
            XraySource::Cu
        } else if t.eq_ignore_ascii_case("Mo") {
            XraySource::Mo
        } else if t.eq_ignore_ascii_case("Co") {
            XraySource::Co
        } else if t.eq_ignore_ascii_case("Ag") {
            XraySource::Ag
        } else if t.eq_ignore_ascii_case("synchrotron") {
            XraySource::Synchrotron
        } else {
            XraySource::Other(t.to_string())
        }
    }
}

/// Thermogravimetric analysis curve.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TgaSeries {
    pub points: Vec<TgaPoint>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TgaPoint {
    pub temperature_c: f64,
    pub weight_percent: f64,
}

/// One adsorption or desorption isotherm with its experimental metadata.
///
/// The same shape serves both branches; which one a series is comes from the
/// document field it sits in, not from the series itself.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IsothermSeries {
    /// Experimental temperature, in the unit named by `units.temperature`.
    pub temperature: Option<f64>,
    pub method: Option<String>,
    pub sample_mass: Option<f64>,
    pub sample_id: Option<String>,
    pub material_id: Option<String>,
    pub units: IsothermUnits,
    pub points: Vec<IsothermPoint>,
}

/// Unit annotations for an isotherm series.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IsothermUnits {
    pub temperature: Option<String>,
    pub pressure: Option<String>,
    pub mass: Option<String>,
    pub loading: Option<String>,
}

/// One measured point: equilibrium pressure, optional saturation pressure,
/// and loaded amount.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IsothermPoint {
    pub pressure: f64,
    pub p0: Option<f64>,
    pub amount: f64,
}
