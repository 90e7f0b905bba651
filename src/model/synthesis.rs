//! Synthesis conditions and the repeated-record collections of the
//! procedure-details section.

use super::product::Atmosphere;

/// General reaction conditions for one synthesis.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SynthesisGeneral {
    pub performed_date: Option<String>,
    /// Ambient lab temperature in °C. Physically > −273.15, but out-of-range
    /// values are representable; bounds checking is a validation concern.
    pub lab_temperature_c: Option<f64>,
    /// Relative humidity, nominally 0–100 %.
    pub lab_humidity_percent: Option<f64>,
    pub reaction: ReactionConditions,
    pub reaction_temperature_c: Option<f64>,
    pub temperature_controller: TemperatureController,
    pub reaction_time: Option<f64>,
    pub reaction_time_unit: TimeUnit,
    pub reaction_atmosphere: Atmosphere,
    pub reaction_container: Option<String>,
    pub reaction_note: Option<String>,
    pub product_amount: Option<f64>,
    pub product_amount_unit: AmountUnit,
    pub product_yield_percent: Option<f64>,
    pub scale: Scale,
    pub safety_note: Option<String>,
}

/// Reaction type together with its type-conditional parameters.
///
/// Each variant carries only the fields that are meaningful for that
/// reaction type, so "microwave power only when type = microwave" holds by
/// construction rather than by runtime convention.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ReactionConditions {
    Mix,
    Diffusion,
    Evaporation {
        method: Option<String>,
    },
    Microwave {
        power_w: Option<f64>,
    },
    Mechanochemical {
        method: Option<String>,
    },
    Electrochemical {
        cathode: Option<String>,
        anode: Option<String>,
        reference: Option<String>,
        voltage_v: Option<f64>,
        current_a: Option<f64>,
    },
    Sonochemical {
        method: Option<String>,
        power: Option<f64>,
        power_unit: Option<String>,
    },
    Photochemical {
        wavelength_nm: Option<f64>,
        power_w: Option<f64>,
        source: Option<String>,
    },
    #[default]
    Unset,
    Other(String),
}

impl ReactionConditions {
    /// The wire token written after `_mpif_synthesis_type`.
    pub fn kind(&self) -> &str {
        match self {
            ReactionConditions::Mix => "mix",
            ReactionConditions::Diffusion => "diffusion",
            ReactionConditions::Evaporation { .. } => "evaporation",
            ReactionConditions::Microwave { .. } => "microwave",
            ReactionConditions::Mechanochemical { .. } => "mechanochemical",
            ReactionConditions::Electrochemical { .. } => "electrochemical",
            ReactionConditions::Sonochemical { .. } => "sonochemical",
            ReactionConditions::Photochemical { .. } => "photochemical",
            ReactionConditions::Unset => "",
            ReactionConditions::Other(s) => s,
        }
    }
}

/// Device regulating the reaction temperature.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TemperatureController {
    Oven,
    OilBath,
    WaterBath,
    HotPlate,
    Incubator,
    #[default]
    Unset,
    Other(String),
}

impl TemperatureController {
    pub fn as_str(&self) -> &str {
        match self {
            TemperatureController::Oven => "oven",
            TemperatureController::OilBath => "oil bath",
            TemperatureController::WaterBath => "water bath",
            TemperatureController::HotPlate => "hot plate",
            TemperatureController::Incubator => "incubator",
            TemperatureController::Unset => "",
            TemperatureController::Other(s) => s,
        }
    }
}

impl From<&str> for TemperatureController {
    fn from(s: &str) -> Self {
        let t = s.trim();
        if t.is_empty() {
            TemperatureController::Unset
        } else if t.eq_ignore_ascii_case("oven") {
            TemperatureController::Oven
        } else if t.eq_ignore_ascii_case("oil bath") {
            TemperatureController::OilBath
        } else if t.eq_ignore_ascii_case("water bath") {
            TemperatureController::WaterBath
        } else if t.eq_ignore_ascii_case("hot plate") {
            TemperatureController::HotPlate
        } else if t.eq_ignore_ascii_case("incubator") {
            TemperatureController::Incubator
        } else {
            TemperatureController::Other(t.to_string())
        }
    }
}

/// Unit of the reaction duration.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TimeUnit {
    Seconds,
    Minutes,
    Hours,
    Days,
    #[default]
    Unset,
    Other(String),
}

impl TimeUnit {
    pub fn as_str(&self) -> &str {
        match self {
            TimeUnit::Seconds => "s",
            TimeUnit::Minutes => "min",
            TimeUnit::Hours => "h",
            TimeUnit::Days => "day",
            TimeUnit::Unset => "",
            TimeUnit::Other(s) => s,
        }
    }
}

impl From<&str> for TimeUnit {
    fn from(s: &str) -> Self {
        match s.trim() {
            "" => TimeUnit::Unset,
            t if t.eq_ignore_ascii_case("s") || t.eq_ignore_ascii_case("sec") => TimeUnit::Seconds,
            t if t.eq_ignore_ascii_case("min") => TimeUnit::Minutes,
            t if t.eq_ignore_ascii_case("h") || t.eq_ignore_ascii_case("hr") => TimeUnit::Hours,
            t if t.eq_ignore_ascii_case("day") || t.eq_ignore_ascii_case("d") => TimeUnit::Days,
            t => TimeUnit::Other(t.to_string()),
        }
    }
}

/// Unit of the isolated product amount.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AmountUnit {
    Milligram,
    Gram,
    Kilogram,
    Millimole,
    Mole,
    #[default]
    Unset,
    Other(String),
}

impl AmountUnit {
    pub fn as_str(&self) -> &str {
        match self {
            AmountUnit::Milligram => "mg",
            AmountUnit::Gram => "g",
            AmountUnit::Kilogram => "kg",
            AmountUnit::Millimole => "mmol",
            AmountUnit::Mole => "mol",
            AmountUnit::Unset => "",
            AmountUnit::Other(s) => s,
        }
    }
}

impl From<&str> for AmountUnit {
    fn from(s: &str) -> Self {
        match s.trim() {
            "" => AmountUnit::Unset,
            t if t.eq_ignore_ascii_case("mg") => AmountUnit::Milligram,
            t if t.eq_ignore_ascii_case("g") => AmountUnit::Gram,
            t if t.eq_ignore_ascii_case("kg") => AmountUnit::Kilogram,
            t if t.eq_ignore_ascii_case("mmol") => AmountUnit::Millimole,
            t if t.eq_ignore_ascii_case("mol") => AmountUnit::Mole,
            t => AmountUnit::Other(t.to_string()),
        }
    }
}

/// Overall scale the synthesis was run at.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Scale {
    Milligram,
    Gram,
    Kilogram,
    #[default]
    Unset,
    Other(String),
}

impl Scale {
    pub fn as_str(&self) -> &str {
        match self {
            Scale::Milligram => "mg",
            Scale::Gram => "g",
            Scale::Kilogram => "kg",
            Scale::Unset => "",
            Scale::Other(s) => s,
        }
    }
}

impl From<&str> for Scale {
    fn from(s: &str) -> Self {
        match s.trim() {
            "" => Scale::Unset,
            t if t.eq_ignore_ascii_case("mg") => Scale::Milligram,
            t if t.eq_ignore_ascii_case("g") => Scale::Gram,
            t if t.eq_ignore_ascii_case("kg") => Scale::Kilogram,
            t => Scale::Other(t.to_string()),
        }
    }
}

/// The repeated-record collections of the procedure-details section.
///
/// Ordering within each collection is meaningful: record identity is the
/// 1-based position (`R1`, `S1`, `V1`, `H1`, `P1`, …), so reordering a
/// collection changes every member's identity. The records themselves store
/// no identifier; [`RecordKind::id`] derives it from position on write.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SynthesisDetails {
    pub substrates: Vec<Reagent>,
    pub solvents: Vec<Reagent>,
    pub vessels: Vec<Vessel>,
    pub hardware: Vec<Hardware>,
    pub steps: Vec<ProcedureStep>,
    pub procedure_full: Option<String>,
}

/// One substrate or solvent entry (the two collections share a record shape).
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Reagent {
    pub name: String,
    pub molarity: Option<f64>,
    pub molarity_unit: Option<String>,
    pub amount: Option<f64>,
    pub amount_unit: Option<String>,
    pub supplier: Option<String>,
    pub purity_percent: Option<f64>,
    pub cas_number: Option<String>,
    pub smiles: Option<String>,
}

/// One reaction vessel entry.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vessel {
    pub volume: Option<f64>,
    pub volume_unit: Option<String>,
    pub material: Option<String>,
    pub vessel_type: Option<String>,
    pub supplier: Option<String>,
    pub purpose: Option<String>,
    pub note: Option<String>,
}

/// One auxiliary-hardware entry.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hardware {
    pub purpose: Option<String>,
    pub general_name: Option<String>,
    pub product_name: Option<String>,
    pub supplier: Option<String>,
    pub note: Option<String>,
}

/// One step of the synthesis procedure, in execution order.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProcedureStep {
    pub step_type: Option<String>,
    pub atmosphere: Option<String>,
    pub detail: Option<String>,
}

/// The five repeated-record collections and their positional-identifier
/// scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Substrate,
    Solvent,
    Vessel,
    Hardware,
    Step,
}

impl RecordKind {
    /// Tag stem used in loop field names (`_mpif_<stem>_…`).
    pub fn stem(self) -> &'static str {
        match self {
            RecordKind::Substrate => "substrate",
            RecordKind::Solvent => "solvent",
            RecordKind::Vessel => "vessel",
            RecordKind::Hardware => "hardware",
            RecordKind::Step => "procedure",
        }
    }

    /// Identifier prefix letter.
    pub fn prefix(self) -> &'static str {
        match self {
            RecordKind::Substrate => "R",
            RecordKind::Solvent => "S",
            RecordKind::Vessel => "V",
            RecordKind::Hardware => "H",
            RecordKind::Step => "P",
        }
    }

    /// Canonical identifier for the record at `index` (0-based) in its
    /// collection: prefix plus 1-based position.
    pub fn id(self, index: usize) -> String {
        format!("{}{}", self.prefix(), index + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_ids_are_positional() {
        assert_eq!(RecordKind::Substrate.id(0), "R1");
        assert_eq!(RecordKind::Solvent.id(1), "S2");
        assert_eq!(RecordKind::Vessel.id(2), "V3");
        assert_eq!(RecordKind::Hardware.id(9), "H10");
        assert_eq!(RecordKind::Step.id(0), "P1");
    }

    #[test]
    fn reaction_kind_tokens() {
        assert_eq!(ReactionConditions::Mix.kind(), "mix");
        assert_eq!(
            ReactionConditions::Microwave { power_w: Some(150.0) }.kind(),
            "microwave"
        );
        assert_eq!(ReactionConditions::Unset.kind(), "");
        assert_eq!(ReactionConditions::Other("sol-gel".into()).kind(), "sol-gel");
    }

    #[test]
    fn unit_aliases() {
        assert_eq!(TimeUnit::from("hr"), TimeUnit::Hours);
        assert_eq!(TimeUnit::from("SEC"), TimeUnit::Seconds);
        assert_eq!(AmountUnit::from("mmol"), AmountUnit::Millimole);
        assert_eq!(Scale::from("weird"), Scale::Other("weird".into()));
    }
}
