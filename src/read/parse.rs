//! MPIF text decoder: per-section extraction into the typed model.
//!
//! The characterization sub-blocks (PXRD, TGA, adsorption/desorption) mix
//! scalar metadata lines with a loop-style numeric table inside one `;`
//! fence; each is read by a small state machine driven by line
//! classification: scalars, then the loop preamble, then data rows.

use tracing::debug;

use crate::model::{
    AuthorDetails, Characterization, Document, Hardware, IsothermPoint, IsothermSeries, Metadata,
    ProcedureStep, ProductInfo, PxrdPoint, PxrdSeries, ReactionConditions, Reagent,
    SynthesisDetails, SynthesisGeneral, TgaPoint, TgaSeries, Vessel, XraySource,
};
use crate::tags;

use super::line::{cell_f64, cell_str, classify, scalar, LineKind};
use super::scan::Scan;

/// Errors from decoding MPIF text.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// No `data_<name>` block header anywhere outside text blocks. This is
    /// the one structurally unrecoverable input; everything else degrades
    /// to absent fields.
    #[error("missing `data_` block header: input is not an MPIF document")]
    MissingDataHeader,
}

/// Parse the full text of an `.mpif` file into a [`Document`].
pub fn parse(input: &str) -> Result<Document, ParseError> {
    let scan = Scan::new(input);
    let data_name = scan
        .data_header()
        .ok_or(ParseError::MissingDataHeader)?
        .to_string();
    Ok(Document {
        metadata: metadata(&scan, data_name),
        author: author(&scan),
        product: product(&scan),
        synthesis: synthesis_general(&scan),
        details: synthesis_details(&scan),
        characterization: characterization(&scan),
    })
}

/// Enum field: absent and placeholder values fall back to the unset default.
fn enum_field<T>(scan: &Scan, key: &str) -> T
where
    T: Default + for<'s> From<&'s str>,
{
    match scan.scalar_str(key) {
        Some(s) => T::from(s.as_str()),
        None => T::default(),
    }
}

fn metadata(scan: &Scan, data_name: String) -> Metadata {
    Metadata {
        data_name,
        creation_date: scan.scalar_str(tags::AUDIT_CREATION_DATE).unwrap_or_default(),
        generator_version: scan
            .scalar_str(tags::AUDIT_GENERATOR_VERSION)
            .unwrap_or_default(),
        publication_doi: scan.scalar_str(tags::AUDIT_PUBLICATION_DOI),
        procedure_status: enum_field(scan, tags::AUDIT_PROCEDURE_STATUS),
    }
}

fn author(scan: &Scan) -> AuthorDetails {
    AuthorDetails {
        name: scan.scalar_str(tags::AUTHOR_NAME).unwrap_or_default(),
        email: scan.scalar_str(tags::AUTHOR_EMAIL).unwrap_or_default(),
        orcid: scan.scalar_str(tags::AUTHOR_ORCID).unwrap_or_default(),
        address: scan.scalar_str(tags::AUTHOR_ADDRESS),
        phone: scan.scalar_str(tags::AUTHOR_PHONE),
    }
}

fn product(scan: &Scan) -> ProductInfo {
    ProductInfo {
        class: enum_field(scan, tags::PRODUCT_TYPE),
        cas_number: scan.scalar_str(tags::PRODUCT_CAS),
        ccdc_number: scan.scalar_str(tags::PRODUCT_CCDC),
        common_name: scan.scalar_str(tags::PRODUCT_NAME_COMMON).unwrap_or_default(),
        systematic_name: scan.scalar_str(tags::PRODUCT_NAME_SYSTEMATIC),
        formula: scan.scalar_str(tags::PRODUCT_FORMULA),
        formula_weight: scan.scalar_f64(tags::PRODUCT_FORMULA_WEIGHT),
        state: enum_field(scan, tags::PRODUCT_STATE),
        color: scan.scalar_str(tags::PRODUCT_COLOR).unwrap_or_default(),
        handling_atmosphere: enum_field(scan, tags::PRODUCT_HANDLING_ATMOSPHERE),
        handling_note: scan.text_block(tags::PRODUCT_HANDLING_NOTE),
        cif: scan.text_block(tags::PRODUCT_CIF),
    }
}

fn synthesis_general(scan: &Scan) -> SynthesisGeneral {
    let kind = scan.scalar_str(tags::SYNTHESIS_TYPE).unwrap_or_default();
    SynthesisGeneral {
        performed_date: scan.scalar_str(tags::SYNTHESIS_PERFORMED_DATE),
        lab_temperature_c: scan.scalar_f64(tags::SYNTHESIS_LAB_TEMPERATURE),
        lab_humidity_percent: scan.scalar_f64(tags::SYNTHESIS_LAB_HUMIDITY),
        reaction: reaction_conditions(scan, kind.trim()),
        reaction_temperature_c: scan.scalar_f64(tags::REACT_TEMPERATURE),
        temperature_controller: enum_field(scan, tags::REACT_TEMPERATURE_CONTROLLER),
        reaction_time: scan.scalar_f64(tags::REACT_TIME),
        reaction_time_unit: enum_field(scan, tags::REACT_TIME_UNIT),
        reaction_atmosphere: enum_field(scan, tags::REACT_ATMOSPHERE),
        reaction_container: scan.scalar_str(tags::REACT_CONTAINER),
        reaction_note: scan.text_block(tags::REACT_NOTE),
        product_amount: scan.scalar_f64(tags::PRODUCT_AMOUNT),
        product_amount_unit: enum_field(scan, tags::PRODUCT_AMOUNT_UNIT),
        product_yield_percent: scan.scalar_f64(tags::PRODUCT_YIELD),
        scale: enum_field(scan, tags::SYNTHESIS_SCALE),
        safety_note: scan.text_block(tags::SAFETY_NOTE),
    }
}

/// Build the reaction union: the type token selects the variant, and only
/// that variant's conditional tags are consulted.
fn reaction_conditions(scan: &Scan, kind: &str) -> ReactionConditions {
    match kind.to_ascii_lowercase().as_str() {
        "" => ReactionConditions::Unset,
        "mix" => ReactionConditions::Mix,
        "diffusion" => ReactionConditions::Diffusion,
        "evaporation" => ReactionConditions::Evaporation {
            method: scan.scalar_str(tags::EVAP_METHOD),
        },
        "microwave" => ReactionConditions::Microwave {
            power_w: scan.scalar_f64(tags::MICROWAVE_POWER),
        },
        "mechanochemical" => ReactionConditions::Mechanochemical {
            method: scan.scalar_str(tags::MECHANOCHEM_METHOD),
        },
        "electrochemical" => ReactionConditions::Electrochemical {
            cathode: scan.scalar_str(tags::ELECTROCHEM_CATHODE),
            anode: scan.scalar_str(tags::ELECTROCHEM_ANODE),
            reference: scan.scalar_str(tags::ELECTROCHEM_REFERENCE),
            voltage_v: scan.scalar_f64(tags::ELECTROCHEM_VOLTAGE),
            current_a: scan.scalar_f64(tags::ELECTROCHEM_CURRENT),
        },
        "sonochemical" => ReactionConditions::Sonochemical {
            method: scan.scalar_str(tags::SONICATION_METHOD),
            power: scan.scalar_f64(tags::SONICATION_POWER),
            power_unit: scan.scalar_str(tags::SONICATION_POWER_UNIT),
        },
        "photochemical" => ReactionConditions::Photochemical {
            wavelength_nm: scan.scalar_f64(tags::PHOTOCHEM_WAVELENGTH),
            power_w: scan.scalar_f64(tags::PHOTOCHEM_POWER),
            source: scan.scalar_str(tags::PHOTOCHEM_SOURCE),
        },
        _ => ReactionConditions::Other(kind.to_string()),
    }
}

fn synthesis_details(scan: &Scan) -> SynthesisDetails {
    SynthesisDetails {
        substrates: reagents(scan, "substrate"),
        solvents: reagents(scan, "solvent"),
        vessels: vessels(scan),
        hardware: hardware(scan),
        steps: steps(scan),
        procedure_full: scan.text_block(tags::PROCEDURE_FULL),
    }
}

fn reagents(scan: &Scan, stem: &str) -> Vec<Reagent> {
    let table = scan.records(stem);
    let tag = |suffix: &str| format!("_mpif_{stem}_{suffix}");
    (0..table.len())
        .map(|i| Reagent {
            // The identifier column is read but ignored: identity is
            // positional and regenerated on write.
            name: table
                .field(i, &tag("name"))
                .and_then(cell_str)
                .unwrap_or_default(),
            molarity: table.field(i, &tag("molarity")).and_then(cell_f64),
            molarity_unit: table.field(i, &tag("molarity_unit")).and_then(cell_str),
            amount: table.field(i, &tag("amount")).and_then(cell_f64),
            amount_unit: table.field(i, &tag("amount_unit")).and_then(cell_str),
            supplier: table.field(i, &tag("supplier")).and_then(cell_str),
            purity_percent: table.field(i, &tag("purity_percent")).and_then(cell_f64),
            cas_number: table.field(i, &tag("cas")).and_then(cell_str),
            smiles: table.field(i, &tag("smiles")).and_then(cell_str),
        })
        .collect()
}

fn vessels(scan: &Scan) -> Vec<Vessel> {
    let table = scan.records("vessel");
    (0..table.len())
        .map(|i| Vessel {
            volume: table.field(i, "_mpif_vessel_volume").and_then(cell_f64),
            volume_unit: table.field(i, "_mpif_vessel_volume_unit").and_then(cell_str),
            material: table.field(i, "_mpif_vessel_material").and_then(cell_str),
            vessel_type: table.field(i, "_mpif_vessel_type").and_then(cell_str),
            supplier: table.field(i, "_mpif_vessel_supplier").and_then(cell_str),
            purpose: table.field(i, "_mpif_vessel_purpose").and_then(cell_str),
            note: table.field(i, "_mpif_vessel_note").and_then(cell_str),
        })
        .collect()
}

fn hardware(scan: &Scan) -> Vec<Hardware> {
    let table = scan.records("hardware");
    (0..table.len())
        .map(|i| Hardware {
            purpose: table.field(i, "_mpif_hardware_purpose").and_then(cell_str),
            general_name: table
                .field(i, "_mpif_hardware_general_name")
                .and_then(cell_str),
            product_name: table
                .field(i, "_mpif_hardware_product_name")
                .and_then(cell_str),
            supplier: table.field(i, "_mpif_hardware_supplier").and_then(cell_str),
            note: table.field(i, "_mpif_hardware_note").and_then(cell_str),
        })
        .collect()
}

fn steps(scan: &Scan) -> Vec<ProcedureStep> {
    let table = scan.records("procedure");
    (0..table.len())
        .map(|i| ProcedureStep {
            step_type: table.field(i, "_mpif_procedure_type").and_then(cell_str),
            atmosphere: table
                .field(i, "_mpif_procedure_atmosphere")
                .and_then(cell_str),
            detail: table.field(i, "_mpif_procedure_detail").and_then(cell_str),
        })
        .collect()
}

fn characterization(scan: &Scan) -> Characterization {
    Characterization {
        pxrd: pxrd(scan),
        tga: tga(scan),
        adsorption: isotherm(scan, tags::ADSORP_DATA, "_adsorp"),
        desorption: isotherm(scan, tags::DESORP_DATA, "_desorp"),
        aif: scan.text_block(tags::AIF),
        cif: scan.text_block(tags::CIF),
    }
}

/// Sub-block reader state. Scalars come first; any loop tag or `loop_`
/// marker moves to the preamble; the first data row moves to data.
#[derive(Clone, Copy, PartialEq)]
enum TableState {
    Scalars,
    Preamble,
    Data,
}

/// Scalar helpers for tag lines inside sub-blocks.
fn tag_str(rest: &str) -> Option<String> {
    if rest.is_empty() {
        return None;
    }
    scalar(rest).text().map(str::to_owned)
}

fn tag_f64(rest: &str) -> Option<f64> {
    if rest.is_empty() {
        return None;
    }
    scalar(rest).as_f64()
}

fn pxrd(scan: &Scan) -> Option<PxrdSeries> {
    let start = scan.find_tag(tags::PXRD_DATA)?;
    let mut source: Option<String> = None;
    let mut wavelength = None;
    let mut points = Vec::new();
    let mut state = TableState::Scalars;

    for i in start + 1..scan.len() {
        let line = scan.line(i);
        match classify(line) {
            LineKind::Blank => {}
            LineKind::Fence => {
                if state == TableState::Data {
                    break;
                }
            }
            LineKind::Comment | LineKind::DataHeader(_) => break,
            LineKind::LoopMarker => state = TableState::Preamble,
            LineKind::Tag { key, rest } => {
                if key == tags::PXRD_SOURCE {
                    source = tag_str(rest);
                } else if key == tags::PXRD_LAMBDA {
                    wavelength = tag_f64(rest);
                } else if key == tags::PXRD_TWO_THETA || key == tags::PXRD_INTENSITY {
                    state = TableState::Preamble;
                } else {
                    break;
                }
            }
            LineKind::Text => {
                if state == TableState::Scalars {
                    continue;
                }
                state = TableState::Data;
                let mut nums = line.split_whitespace().map(str::parse::<f64>);
                match (nums.next(), nums.next()) {
                    (Some(Ok(two_theta)), Some(Ok(intensity))) => {
                        points.push(PxrdPoint {
                            two_theta,
                            intensity,
                        });
                    }
                    _ => debug!(line, "skipping malformed PXRD row"),
                }
            }
        }
    }

    if points.is_empty() {
        return None;
    }
    Some(PxrdSeries {
        source: source.as_deref().map(XraySource::from).unwrap_or_default(),
        wavelength,
        points,
    })
}

fn tga(scan: &Scan) -> Option<TgaSeries> {
    let start = scan.find_tag(tags::TGA_DATA)?;
    let mut points = Vec::new();
    let mut state = TableState::Scalars;

    for i in start + 1..scan.len() {
        let line = scan.line(i);
        match classify(line) {
            LineKind::Blank => {}
            LineKind::Fence => {
                if state == TableState::Data {
                    break;
                }
            }
            LineKind::Comment | LineKind::DataHeader(_) => break,
            LineKind::LoopMarker => state = TableState::Preamble,
            LineKind::Tag { key, .. } => {
                if key == tags::TGA_TEMPERATURE || key == tags::TGA_WEIGHT {
                    state = TableState::Preamble;
                } else {
                    break;
                }
            }
            LineKind::Text => {
                if state == TableState::Scalars {
                    continue;
                }
                state = TableState::Data;
                let mut nums = line.split_whitespace().map(str::parse::<f64>);
                match (nums.next(), nums.next()) {
                    (Some(Ok(temperature_c)), Some(Ok(weight_percent))) => {
                        points.push(TgaPoint {
                            temperature_c,
                            weight_percent,
                        });
                    }
                    _ => debug!(line, "skipping malformed TGA row"),
                }
            }
        }
    }

    if points.is_empty() {
        return None;
    }
    Some(TgaSeries { points })
}

/// Shared reader for the adsorption and desorption sub-blocks; `prefix` is
/// the loop-tag prefix (`_adsorp` or `_desorp`).
fn isotherm(scan: &Scan, marker: &str, prefix: &str) -> Option<IsothermSeries> {
    let start = scan.find_tag(marker)?;
    let mut series = IsothermSeries::default();
    let mut loop_tags: Vec<String> = Vec::new();
    let mut state = TableState::Scalars;

    let pressure_tag = format!("{prefix}_pressure");
    let p0_tag = format!("{prefix}_p0");
    let amount_tag = format!("{prefix}_amount");
    // Legacy AIF exports name the amount column `loading`.
    let loading_tag = format!("{prefix}_loading");

    for i in start + 1..scan.len() {
        let line = scan.line(i);
        match classify(line) {
            LineKind::Blank => {}
            LineKind::Fence => {
                if state == TableState::Data {
                    break;
                }
            }
            LineKind::Comment | LineKind::DataHeader(_) => break,
            LineKind::LoopMarker => state = TableState::Preamble,
            LineKind::Tag { key, rest } => {
                if key.starts_with(prefix) {
                    loop_tags.push(key.to_string());
                    state = TableState::Preamble;
                } else {
                    match key {
                        tags::EXPTL_TEMPERATURE => series.temperature = tag_f64(rest),
                        tags::EXPTL_METHOD => series.method = tag_str(rest),
                        tags::EXPTL_SAMPLE_MASS => series.sample_mass = tag_f64(rest),
                        tags::EXPTL_SAMPLE_ID => series.sample_id = tag_str(rest),
                        tags::EXPTL_MATERIAL_ID => series.material_id = tag_str(rest),
                        tags::UNITS_TEMPERATURE => series.units.temperature = tag_str(rest),
                        tags::UNITS_PRESSURE => series.units.pressure = tag_str(rest),
                        tags::UNITS_MASS => series.units.mass = tag_str(rest),
                        tags::UNITS_LOADING => series.units.loading = tag_str(rest),
                        _ => break,
                    }
                }
            }
            LineKind::Text => {
                if state == TableState::Scalars {
                    continue;
                }
                state = TableState::Data;
                let cells: Vec<&str> = line.split_whitespace().collect();
                let col = |tag: &str| {
                    loop_tags
                        .iter()
                        .position(|t| t.eq_ignore_ascii_case(tag))
                        .and_then(|ix| cells.get(ix).copied())
                };
                let pressure = col(&pressure_tag).and_then(cell_f64);
                let amount = col(&amount_tag).or_else(|| col(&loading_tag)).and_then(cell_f64);
                let p0 = col(&p0_tag).and_then(cell_f64);
                match (pressure, amount) {
                    (Some(pressure), Some(amount)) => {
                        series.points.push(IsothermPoint {
                            pressure,
                            p0,
                            amount,
                        });
                    }
                    _ => debug!(line, "skipping malformed isotherm row"),
                }
            }
        }
    }

    if series.points.is_empty() {
        return None;
    }
    Some(series)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AmountUnit, Atmosphere, PhysicalState, ProcedureStatus, ProductClass, Scale, TemperatureController, TimeUnit};

    const FIXTURE: &str = "data_MOF5_20240312_Kim

_mpif_audit_creation_date	2024-03-12
_mpif_audit_generator_version	1.2.0
_mpif_audit_publication_doi	'10.1000/xyz123'
_mpif_audit_procedure_status	'success'

#Section 1: Author details
_mpif_audit_contact_author_name	'Jane Kim'
_mpif_audit_contact_author_email	jane.kim@example.org
_mpif_audit_contact_author_id_orcid	0000-0002-1825-0097
_mpif_audit_contact_author_address	'1 Campus Way, Seoul'
_mpif_audit_contact_author_phone	?

#Section 2: Product General Information
_mpif_product_type	'MOF'
_mpif_product_cas	?
_mpif_product_ccdc	'602542'
_mpif_product_name_common	'MOF-5'
_mpif_product_name_systematic	'Zn4O(BDC)3'
_mpif_product_formula	'C24H12O13Zn4'
_mpif_product_formula_weight	769.9
_mpif_product_state	'powder'
_mpif_product_color	'white'
_mpif_product_handling_atmosphere	'inert'
_mpif_product_handling_note
;
Store in a desiccator.
Avoid moisture.
;

#Section 3: Synthesis General Information
_mpif_synthesis_performed_date	2024-03-10
_mpif_synthesis_lab_temperature_C	21.5
_mpif_synthesis_lab_humidity_percent	35
_mpif_synthesis_type	'mix'
_mpif_synthesis_react_temperature_C	120
_mpif_synthesis_react_temperature_controller	'oven'
_mpif_synthesis_react_time	24
_mpif_synthesis_react_time_unit	'h'
_mpif_synthesis_react_atmosphere	'air'
_mpif_synthesis_react_container	'Teflon-lined autoclave'
_mpif_synthesis_react_note
;
Heated at a ramp of 2 C/min.
;
_mpif_synthesis_product_amount	150
_mpif_synthesis_product_amount_unit	'mg'
_mpif_synthesis_product_yield_percent	72.5
_mpif_synthesis_scale	'mg'
_mpif_synthesis_safety_note
;
DMF is toxic. Work in a fume hood.
;

#Section 4: Synthesis Procedure Details
_mpif_substrate_number	2
loop_
_mpif_substrate_id
_mpif_substrate_name
_mpif_substrate_molarity
_mpif_substrate_molarity_unit
_mpif_substrate_amount
_mpif_substrate_amount_unit
_mpif_substrate_supplier
_mpif_substrate_purity_percent
_mpif_substrate_cas
_mpif_substrate_smiles
R1	zinc nitrate hexahydrate	?	?	890	mg	Sigma-Aldrich	98	10196-18-6	?
R2	terephthalic acid	?	?	166	mg	TCI	99	100-21-0	O=C(O)c1ccc(C(=O)O)cc1

_mpif_solvent_number	1
loop_
_mpif_solvent_id
_mpif_solvent_name
_mpif_solvent_molarity
_mpif_solvent_molarity_unit
_mpif_solvent_amount
_mpif_solvent_amount_unit
_mpif_solvent_supplier
_mpif_solvent_purity_percent
_mpif_solvent_cas
_mpif_solvent_smiles
S1	DMF	?	?	10	mL	Daejung	99.5	68-12-2	?

_mpif_vessel_number	1
loop_
_mpif_vessel_id
_mpif_vessel_volume
_mpif_vessel_volume_unit
_mpif_vessel_material
_mpif_vessel_type
_mpif_vessel_supplier
_mpif_vessel_purpose
_mpif_vessel_note
V1	20	mL	glass	vial	?	reaction	?

_mpif_hardware_number	1
loop_
_mpif_hardware_id
_mpif_hardware_purpose
_mpif_hardware_general_name
_mpif_hardware_product_name
_mpif_hardware_supplier
_mpif_hardware_note
H1	heating	oven	OF-22	Jeio Tech	?

_mpif_procedure_number	2
loop_
_mpif_procedure_id
_mpif_procedure_type
_mpif_procedure_atmosphere
_mpif_procedure_detail
P1	mix	air	Dissolve both solids in DMF
P2	heat	air	Heat at 120 C for 24 h

_mpif_procedure_full
;
Dissolve zinc nitrate and terephthalic acid in DMF,
seal the vial, and heat at 120 C for 24 h.
;

#Characterization Information

_mpif_pxrd_data
;
_mpif_pxrd_source	'Cu'
_mpif_pxrd_lambda	1.54056
loop_
_pxrd_2theta
_pxrd_intensity
5	100
5.1	150
5.2	120
;

_mpif_tga_data
;
loop_
_tga_temperature_celcius
_tga_weight_percent
25	100
100	99.1
500	55.3
;

_mpif_adsorp_data
;
_exptl_temperature	77
_exptl_method	'volumetric'
_exptl_sample_mass	25.3
_exptl_sample_id	'MOF5-01'
_exptl_material_id	'MOF-5'
_units_temperature	'K'
_units_pressure	'kPa'
_units_mass	'mg'
_units_loading	'mmol/g'
loop_
_adsorp_pressure
_adsorp_p0
_adsorp_amount
0.5	101.3	2.1
5	101.3	8.4
50	101.3	12.9
;

_mpif_aif
;
data_raw_isotherm
_units_pressure 'bar'
loop_
_adsorp_pressure
_adsorp_loading
0.05 1.9
0.5 8.1
;
";

    #[test]
    fn full_document_metadata_and_author() {
        let doc = parse(FIXTURE).unwrap();
        assert_eq!(doc.metadata.data_name, "MOF5_20240312_Kim");
        assert_eq!(doc.metadata.creation_date, "2024-03-12");
        assert_eq!(doc.metadata.generator_version, "1.2.0");
        assert_eq!(doc.metadata.publication_doi.as_deref(), Some("10.1000/xyz123"));
        assert_eq!(doc.metadata.procedure_status, ProcedureStatus::Success);

        assert_eq!(doc.author.name, "Jane Kim");
        assert_eq!(doc.author.email, "jane.kim@example.org");
        assert_eq!(doc.author.orcid, "0000-0002-1825-0097");
        assert_eq!(doc.author.address.as_deref(), Some("1 Campus Way, Seoul"));
        assert_eq!(doc.author.phone, None);
    }

    #[test]
    fn full_document_product() {
        let doc = parse(FIXTURE).unwrap();
        let p = &doc.product;
        assert_eq!(p.class, ProductClass::Mof);
        assert_eq!(p.cas_number, None);
        assert_eq!(p.ccdc_number.as_deref(), Some("602542"));
        assert_eq!(p.common_name, "MOF-5");
        assert_eq!(p.systematic_name.as_deref(), Some("Zn4O(BDC)3"));
        assert_eq!(p.formula.as_deref(), Some("C24H12O13Zn4"));
        assert_eq!(p.formula_weight, Some(769.9));
        assert_eq!(p.state, PhysicalState::Powder);
        assert_eq!(p.color, "white");
        assert_eq!(p.handling_atmosphere, Atmosphere::Inert);
        assert_eq!(
            p.handling_note.as_deref(),
            Some("Store in a desiccator.\nAvoid moisture.")
        );
        assert_eq!(p.cif, None);
    }

    #[test]
    fn full_document_synthesis_general() {
        let doc = parse(FIXTURE).unwrap();
        let s = &doc.synthesis;
        assert_eq!(s.performed_date.as_deref(), Some("2024-03-10"));
        assert_eq!(s.lab_temperature_c, Some(21.5));
        assert_eq!(s.lab_humidity_percent, Some(35.0));
        assert_eq!(s.reaction, ReactionConditions::Mix);
        assert_eq!(s.reaction_temperature_c, Some(120.0));
        assert_eq!(s.temperature_controller, TemperatureController::Oven);
        assert_eq!(s.reaction_time, Some(24.0));
        assert_eq!(s.reaction_time_unit, TimeUnit::Hours);
        assert_eq!(s.reaction_atmosphere, Atmosphere::Air);
        assert_eq!(s.reaction_container.as_deref(), Some("Teflon-lined autoclave"));
        assert_eq!(s.reaction_note.as_deref(), Some("Heated at a ramp of 2 C/min."));
        assert_eq!(s.product_amount, Some(150.0));
        assert_eq!(s.product_amount_unit, AmountUnit::Milligram);
        assert_eq!(s.product_yield_percent, Some(72.5));
        assert_eq!(s.scale, Scale::Milligram);
        assert!(s.safety_note.as_deref().unwrap().starts_with("DMF is toxic."));
    }

    #[test]
    fn full_document_details() {
        let doc = parse(FIXTURE).unwrap();
        let d = &doc.details;

        assert_eq!(d.substrates.len(), 2);
        let r1 = &d.substrates[0];
        assert_eq!(r1.name, "zinc nitrate hexahydrate");
        assert_eq!(r1.molarity, None);
        assert_eq!(r1.amount, Some(890.0));
        assert_eq!(r1.amount_unit.as_deref(), Some("mg"));
        assert_eq!(r1.supplier.as_deref(), Some("Sigma-Aldrich"));
        assert_eq!(r1.purity_percent, Some(98.0));
        assert_eq!(r1.cas_number.as_deref(), Some("10196-18-6"));
        assert_eq!(r1.smiles, None);
        assert_eq!(
            d.substrates[1].smiles.as_deref(),
            Some("O=C(O)c1ccc(C(=O)O)cc1")
        );

        assert_eq!(d.solvents.len(), 1);
        assert_eq!(d.solvents[0].name, "DMF");
        assert_eq!(d.solvents[0].purity_percent, Some(99.5));

        assert_eq!(d.vessels.len(), 1);
        let v = &d.vessels[0];
        assert_eq!(v.volume, Some(20.0));
        assert_eq!(v.volume_unit.as_deref(), Some("mL"));
        assert_eq!(v.material.as_deref(), Some("glass"));
        assert_eq!(v.vessel_type.as_deref(), Some("vial"));
        assert_eq!(v.supplier, None);
        assert_eq!(v.purpose.as_deref(), Some("reaction"));

        assert_eq!(d.hardware.len(), 1);
        assert_eq!(d.hardware[0].product_name.as_deref(), Some("OF-22"));
        assert_eq!(d.hardware[0].supplier.as_deref(), Some("Jeio Tech"));

        assert_eq!(d.steps.len(), 2);
        assert_eq!(d.steps[0].step_type.as_deref(), Some("mix"));
        assert_eq!(d.steps[0].detail.as_deref(), Some("Dissolve both solids in DMF"));
        assert_eq!(d.steps[1].detail.as_deref(), Some("Heat at 120 C for 24 h"));

        assert!(d.procedure_full.as_deref().unwrap().contains("seal the vial"));
    }

    #[test]
    fn full_document_characterization() {
        let doc = parse(FIXTURE).unwrap();
        let c = &doc.characterization;

        let pxrd = c.pxrd.as_ref().unwrap();
        assert_eq!(pxrd.source, XraySource::Cu);
        assert_eq!(pxrd.wavelength, Some(1.54056));
        assert_eq!(pxrd.points.len(), 3);
        assert_eq!(pxrd.points[1].two_theta, 5.1);
        assert_eq!(pxrd.points[1].intensity, 150.0);

        let tga = c.tga.as_ref().unwrap();
        assert_eq!(tga.points.len(), 3);
        assert_eq!(tga.points[2].temperature_c, 500.0);
        assert_eq!(tga.points[2].weight_percent, 55.3);

        let ads = c.adsorption.as_ref().unwrap();
        assert_eq!(ads.temperature, Some(77.0));
        assert_eq!(ads.method.as_deref(), Some("volumetric"));
        assert_eq!(ads.sample_mass, Some(25.3));
        assert_eq!(ads.sample_id.as_deref(), Some("MOF5-01"));
        assert_eq!(ads.material_id.as_deref(), Some("MOF-5"));
        assert_eq!(ads.units.pressure.as_deref(), Some("kPa"));
        assert_eq!(ads.units.loading.as_deref(), Some("mmol/g"));
        assert_eq!(ads.points.len(), 3);
        assert_eq!(ads.points[0].pressure, 0.5);
        assert_eq!(ads.points[0].p0, Some(101.3));
        assert_eq!(ads.points[0].amount, 2.1);

        assert_eq!(c.desorption, None);

        // The embedded AIF is opaque text; its data_ header and loop tags
        // must not bleed into the document.
        let aif = c.aif.as_deref().unwrap();
        assert!(aif.starts_with("data_raw_isotherm"));
        assert!(aif.contains("_adsorp_loading"));
        assert_eq!(doc.metadata.data_name, "MOF5_20240312_Kim");
    }

    #[test]
    fn minimal_document() {
        let input = "data_Test_20240101_Author
_mpif_audit_creation_date	2024-01-01
_mpif_audit_contact_author_name	'A. Author'
_mpif_audit_contact_author_email	a@b.org
";
        let doc = parse(input).unwrap();
        assert_eq!(doc.metadata.data_name, "Test_20240101_Author");
        assert_eq!(doc.author.name, "A. Author");
        assert!(doc.details.substrates.is_empty());
        assert!(doc.details.solvents.is_empty());
        assert!(doc.details.vessels.is_empty());
        assert!(doc.details.hardware.is_empty());
        assert!(doc.details.steps.is_empty());
        assert!(doc.characterization.pxrd.is_none());
    }

    #[test]
    fn missing_header_is_fatal() {
        let err = parse("_mpif_product_name_common\t'MOF-5'\n").unwrap_err();
        assert!(matches!(err, ParseError::MissingDataHeader));
        assert!(err.to_string().contains("data_"));
    }

    #[test]
    fn embedded_cif_header_does_not_count_as_document_header() {
        // The only data_ line sits inside a text block, so decoding fails.
        let input = "_mpif_product_cif\n;\ndata_crystal\n_cell_length_a 10.0\n;\n";
        assert!(matches!(parse(input), Err(ParseError::MissingDataHeader)));
    }

    #[test]
    fn unknown_placeholder_vs_empty_string() {
        let input = "data_t\n_mpif_audit_publication_doi\t?\n_mpif_product_ccdc\t''\n";
        let doc = parse(input).unwrap();
        assert_eq!(doc.metadata.publication_doi, None);
        assert_eq!(doc.product.ccdc_number.as_deref(), Some(""));
    }

    #[test]
    fn legacy_not_applicable_placeholders_read_as_absent() {
        let input = "data_t\n_mpif_audit_publication_doi\t-\n_mpif_product_cas\t.\n";
        let doc = parse(input).unwrap();
        assert_eq!(doc.metadata.publication_doi, None);
        assert_eq!(doc.product.cas_number, None);
    }

    #[test]
    fn unrecognized_enum_values_are_kept() {
        let input = "data_t\n_mpif_product_state\t'aerogel'\n_mpif_audit_procedure_status\t'pending'\n";
        let doc = parse(input).unwrap();
        assert_eq!(doc.product.state, PhysicalState::Other("aerogel".into()));
        assert_eq!(
            doc.metadata.procedure_status,
            ProcedureStatus::Other("pending".into())
        );
    }

    #[test]
    fn electrochemical_conditional_fields() {
        let input = "data_t
_mpif_synthesis_type	'electrochemical'
_mpif_synthesis_react_electrochem_cathode	Pt
_mpif_synthesis_react_electrochem_anode	Zn
_mpif_synthesis_react_electrochem_voltage_V	1.8
_mpif_synthesis_react_electrochem_current_A	0.05
";
        let doc = parse(input).unwrap();
        assert_eq!(
            doc.synthesis.reaction,
            ReactionConditions::Electrochemical {
                cathode: Some("Pt".into()),
                anode: Some("Zn".into()),
                reference: None,
                voltage_v: Some(1.8),
                current_a: Some(0.05),
            }
        );
    }

    #[test]
    fn microwave_power_only_read_for_microwave_type() {
        // A stray microwave tag under a different type stays out of the model.
        let input = "data_t
_mpif_synthesis_type	'mix'
_mpif_synthesis_react_microwave_power_W	300
";
        let doc = parse(input).unwrap();
        assert_eq!(doc.synthesis.reaction, ReactionConditions::Mix);
    }

    #[test]
    fn unknown_reaction_type_is_kept_verbatim() {
        let input = "data_t\n_mpif_synthesis_type\t'Sol Gel'\n";
        let doc = parse(input).unwrap();
        assert_eq!(
            doc.synthesis.reaction,
            ReactionConditions::Other("Sol Gel".into())
        );
    }

    #[test]
    fn pxrd_without_rows_is_absent() {
        let input = "data_t
_mpif_pxrd_data
;
_mpif_pxrd_source	'Cu'
loop_
_pxrd_2theta
_pxrd_intensity
;
";
        let doc = parse(input).unwrap();
        assert!(doc.characterization.pxrd.is_none());
    }

    #[test]
    fn pxrd_rows_skip_malformed_lines() {
        let input = "data_t
_mpif_pxrd_data
;
_mpif_pxrd_source	'Mo'
loop_
_pxrd_2theta
_pxrd_intensity
5	100
not a number
6	110
;
";
        let doc = parse(input).unwrap();
        let pxrd = doc.characterization.pxrd.unwrap();
        assert_eq!(pxrd.source, XraySource::Mo);
        assert_eq!(pxrd.points.len(), 2);
        assert_eq!(pxrd.points[1].two_theta, 6.0);
    }

    #[test]
    fn isotherm_rows_without_p0_column() {
        let input = "data_t
_mpif_adsorp_data
;
_units_pressure	'bar'
loop_
_adsorp_pressure
_adsorp_amount
0.1	1.5
0.2	2.5
;
";
        let doc = parse(input).unwrap();
        let ads = doc.characterization.adsorption.unwrap();
        assert_eq!(ads.points.len(), 2);
        assert_eq!(ads.points[0].p0, None);
        assert_eq!(ads.points[1].amount, 2.5);
    }

    #[test]
    fn legacy_loading_column_is_accepted() {
        let input = "data_t
_mpif_desorp_data
;
loop_
_desorp_pressure
_desorp_loading
0.9	11.5
0.5	10.1
;
";
        let doc = parse(input).unwrap();
        let des = doc.characterization.desorption.unwrap();
        assert_eq!(des.points.len(), 2);
        assert_eq!(des.points[0].amount, 11.5);
    }

    #[test]
    fn declared_count_truncates_loop() {
        // Declared 1 but two rows present: only the first is consumed.
        let input = "data_t
_mpif_substrate_number	1
loop_
_mpif_substrate_id
_mpif_substrate_name
_mpif_substrate_molarity
_mpif_substrate_molarity_unit
_mpif_substrate_amount
_mpif_substrate_amount_unit
_mpif_substrate_supplier
_mpif_substrate_purity_percent
_mpif_substrate_cas
_mpif_substrate_smiles
R1	first	?	?	?	?	?	?	?	?
R2	second	?	?	?	?	?	?	?	?
";
        let doc = parse(input).unwrap();
        assert_eq!(doc.details.substrates.len(), 1);
        assert_eq!(doc.details.substrates[0].name, "first");
    }

    #[test]
    fn identifier_text_is_ignored_on_read() {
        let input = "data_t
_mpif_procedure_number	2
loop_
_mpif_procedure_id
_mpif_procedure_type
_mpif_procedure_atmosphere
_mpif_procedure_detail
P99	mix	air	out of order id
X7	heat	air	nonsense id
";
        let doc = parse(input).unwrap();
        assert_eq!(doc.details.steps.len(), 2);
        assert_eq!(doc.details.steps[0].detail.as_deref(), Some("out of order id"));
    }
}
