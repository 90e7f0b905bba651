//! MPIF text encoder.
//!
//! Serialization always succeeds for any `Document` and emits the canonical
//! section order: header, audit metadata, author, product, synthesis
//! general, synthesis details (substrates, solvents, vessels, hardware,
//! steps, full procedure), characterization (PXRD, TGA, adsorption,
//! desorption, AIF/CIF text).
//!
//! Conventions, chosen once and written uniformly:
//! - absent optional scalar → bare `?`; present-but-empty string → `''`
//!   (the reader still accepts the legacy `-`/`.` forms, they are never
//!   written)
//! - multi-line fields always use the fenced `;` form, even though the
//!   reader tolerates the unfenced variant
//! - loop counts are derived from collection length, never stored
//! - record identifiers are regenerated from position (`R1..RN`, `S1..`,
//!   `V1..`, `H1..`, `P1..`), discarding whatever the file carried before

use crate::model::{
    Characterization, Document, Hardware, IsothermSeries, ProcedureStep, ReactionConditions,
    Reagent, RecordKind, Vessel,
};
use crate::tags;

/// Serialize a [`Document`] to MPIF text that [`crate::read::parse`]
/// round-trips.
pub fn serialize(doc: &Document) -> String {
    let mut w = Writer::default();

    w.push(format!("data_{}", doc.metadata.data_name));
    w.kv(tags::AUDIT_CREATION_DATE, &doc.metadata.creation_date);
    w.kv(tags::AUDIT_GENERATOR_VERSION, &doc.metadata.generator_version);
    w.kv(tags::AUDIT_PUBLICATION_DOI, opt_quoted(&doc.metadata.publication_doi));
    w.kv(
        tags::AUDIT_PROCEDURE_STATUS,
        quoted(doc.metadata.procedure_status.as_str()),
    );
    w.blank();

    w.push("#Section 1: Author details");
    w.kv(tags::AUTHOR_NAME, quoted(&doc.author.name));
    w.kv(tags::AUTHOR_EMAIL, &doc.author.email);
    w.kv(tags::AUTHOR_ORCID, &doc.author.orcid);
    w.kv(tags::AUTHOR_ADDRESS, opt_quoted(&doc.author.address));
    w.kv(tags::AUTHOR_PHONE, opt_bare(&doc.author.phone));
    w.blank();

    w.push("#Section 2: Product General Information");
    let product = &doc.product;
    w.kv(tags::PRODUCT_TYPE, quoted(product.class.as_str()));
    w.kv(tags::PRODUCT_CAS, opt_bare(&product.cas_number));
    w.kv(tags::PRODUCT_CCDC, opt_quoted(&product.ccdc_number));
    w.kv(tags::PRODUCT_NAME_COMMON, quoted(&product.common_name));
    w.kv(tags::PRODUCT_NAME_SYSTEMATIC, opt_quoted(&product.systematic_name));
    w.kv(tags::PRODUCT_FORMULA, opt_quoted(&product.formula));
    w.kv(tags::PRODUCT_FORMULA_WEIGHT, opt_num(product.formula_weight));
    w.kv(tags::PRODUCT_STATE, quoted(product.state.as_str()));
    w.kv(tags::PRODUCT_COLOR, quoted(&product.color));
    w.kv(
        tags::PRODUCT_HANDLING_ATMOSPHERE,
        quoted(product.handling_atmosphere.as_str()),
    );
    w.text_block(
        tags::PRODUCT_HANDLING_NOTE,
        product.handling_note.as_deref().unwrap_or(""),
    );
    if let Some(cif) = &product.cif {
        w.text_block(tags::PRODUCT_CIF, cif);
    }
    w.blank();

    w.push("#Section 3: Synthesis General Information");
    let syn = &doc.synthesis;
    w.kv(tags::SYNTHESIS_PERFORMED_DATE, opt_bare(&syn.performed_date));
    w.kv(tags::SYNTHESIS_LAB_TEMPERATURE, opt_num(syn.lab_temperature_c));
    w.kv(tags::SYNTHESIS_LAB_HUMIDITY, opt_num(syn.lab_humidity_percent));
    w.kv(tags::SYNTHESIS_TYPE, quoted(syn.reaction.kind()));
    reaction_fields(&mut w, &syn.reaction);
    w.kv(tags::REACT_TEMPERATURE, opt_num(syn.reaction_temperature_c));
    w.kv(
        tags::REACT_TEMPERATURE_CONTROLLER,
        quoted(syn.temperature_controller.as_str()),
    );
    w.kv(tags::REACT_TIME, opt_num(syn.reaction_time));
    w.kv(tags::REACT_TIME_UNIT, quoted(syn.reaction_time_unit.as_str()));
    w.kv(tags::REACT_ATMOSPHERE, quoted(syn.reaction_atmosphere.as_str()));
    w.kv(tags::REACT_CONTAINER, opt_quoted(&syn.reaction_container));
    w.text_block(tags::REACT_NOTE, syn.reaction_note.as_deref().unwrap_or(""));
    w.kv(tags::PRODUCT_AMOUNT, opt_num(syn.product_amount));
    w.kv(
        tags::PRODUCT_AMOUNT_UNIT,
        quoted(syn.product_amount_unit.as_str()),
    );
    if let Some(y) = syn.product_yield_percent {
        w.kv(tags::PRODUCT_YIELD, num(y));
    }
    w.kv(tags::SYNTHESIS_SCALE, quoted(syn.scale.as_str()));
    w.text_block(tags::SAFETY_NOTE, syn.safety_note.as_deref().unwrap_or(""));
    w.blank();

    w.push("#Section 4: Synthesis Procedure Details");
    reagent_loop(&mut w, RecordKind::Substrate, &doc.details.substrates);
    reagent_loop(&mut w, RecordKind::Solvent, &doc.details.solvents);
    vessel_loop(&mut w, &doc.details.vessels);
    hardware_loop(&mut w, &doc.details.hardware);
    step_loop(&mut w, &doc.details.steps);
    if let Some(full) = &doc.details.procedure_full {
        w.text_block(tags::PROCEDURE_FULL, full);
        w.blank();
    }

    characterization(&mut w, &doc.characterization);

    w.finish()
}

#[derive(Default)]
struct Writer {
    lines: Vec<String>,
}

impl Writer {
    fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    fn blank(&mut self) {
        self.lines.push(String::new());
    }

    fn kv(&mut self, key: &str, value: impl AsRef<str>) {
        self.push(format!("{key}\t{}", value.as_ref()));
    }

    /// Fenced multi-line block. Content lines go out verbatim; an empty
    /// content string becomes an empty block, which reads back as absent.
    fn text_block(&mut self, key: &str, content: &str) {
        self.push(key);
        self.push(";");
        for line in content.split('\n') {
            self.push(line);
        }
        self.push(";");
    }

    fn finish(self) -> String {
        let mut out = self.lines.join("\n");
        out.push('\n');
        out
    }
}

fn quoted(v: &str) -> String {
    format!("'{v}'")
}

fn opt_quoted(v: &Option<String>) -> String {
    match v {
        Some(s) => quoted(s),
        None => "?".into(),
    }
}

/// Unquoted optional field: absent → `?`, present-but-empty still needs the
/// quoted form to stay distinguishable from absent.
fn opt_bare(v: &Option<String>) -> String {
    match v.as_deref() {
        None => "?".into(),
        Some("") => "''".into(),
        Some(s) => s.into(),
    }
}

fn num(v: f64) -> String {
    format!("{v}")
}

fn opt_num(v: Option<f64>) -> String {
    match v {
        Some(x) => num(x),
        None => "?".into(),
    }
}

/// Loop cell: absent → `?` so the column count stays intact.
fn cell(v: &Option<String>) -> String {
    match v.as_deref() {
        None | Some("") => "?".into(),
        Some(s) => s.into(),
    }
}

fn cell_num(v: Option<f64>) -> String {
    opt_num(v)
}

fn kv_opt_quoted(w: &mut Writer, key: &str, v: &Option<String>) {
    if v.is_some() {
        w.kv(key, opt_quoted(v));
    }
}

fn kv_opt_bare(w: &mut Writer, key: &str, v: &Option<String>) {
    if v.is_some() {
        w.kv(key, opt_bare(v));
    }
}

fn kv_opt_num(w: &mut Writer, key: &str, v: Option<f64>) {
    if let Some(x) = v {
        w.kv(key, num(x));
    }
}

/// Type-conditional parameters: each reaction variant writes only its own
/// tags, and only when the value is present.
fn reaction_fields(w: &mut Writer, reaction: &ReactionConditions) {
    match reaction {
        ReactionConditions::Evaporation { method } => {
            kv_opt_quoted(w, tags::EVAP_METHOD, method);
        }
        ReactionConditions::Microwave { power_w } => {
            kv_opt_num(w, tags::MICROWAVE_POWER, *power_w);
        }
        ReactionConditions::Mechanochemical { method } => {
            kv_opt_quoted(w, tags::MECHANOCHEM_METHOD, method);
        }
        ReactionConditions::Electrochemical {
            cathode,
            anode,
            reference,
            voltage_v,
            current_a,
        } => {
            kv_opt_bare(w, tags::ELECTROCHEM_CATHODE, cathode);
            kv_opt_bare(w, tags::ELECTROCHEM_ANODE, anode);
            kv_opt_bare(w, tags::ELECTROCHEM_REFERENCE, reference);
            kv_opt_num(w, tags::ELECTROCHEM_VOLTAGE, *voltage_v);
            kv_opt_num(w, tags::ELECTROCHEM_CURRENT, *current_a);
        }
        ReactionConditions::Sonochemical {
            method,
            power,
            power_unit,
        } => {
            kv_opt_quoted(w, tags::SONICATION_METHOD, method);
            kv_opt_num(w, tags::SONICATION_POWER, *power);
            kv_opt_quoted(w, tags::SONICATION_POWER_UNIT, power_unit);
        }
        ReactionConditions::Photochemical {
            wavelength_nm,
            power_w,
            source,
        } => {
            kv_opt_num(w, tags::PHOTOCHEM_WAVELENGTH, *wavelength_nm);
            kv_opt_num(w, tags::PHOTOCHEM_POWER, *power_w);
            kv_opt_bare(w, tags::PHOTOCHEM_SOURCE, source);
        }
        ReactionConditions::Mix
        | ReactionConditions::Diffusion
        | ReactionConditions::Unset
        | ReactionConditions::Other(_) => {}
    }
}

fn loop_header(w: &mut Writer, stem: &str, count: usize, suffixes: &[&str]) {
    w.kv(&format!("_mpif_{stem}_number"), count.to_string());
    w.push("loop_");
    for suffix in suffixes {
        w.push(format!("_mpif_{stem}_{suffix}"));
    }
}

fn reagent_loop(w: &mut Writer, kind: RecordKind, items: &[Reagent]) {
    if items.is_empty() {
        return;
    }
    loop_header(
        w,
        kind.stem(),
        items.len(),
        &[
            "id",
            "name",
            "molarity",
            "molarity_unit",
            "amount",
            "amount_unit",
            "supplier",
            "purity_percent",
            "cas",
            "smiles",
        ],
    );
    for (i, r) in items.iter().enumerate() {
        let row = [
            kind.id(i),
            if r.name.is_empty() { "?".into() } else { r.name.clone() },
            cell_num(r.molarity),
            cell(&r.molarity_unit),
            cell_num(r.amount),
            cell(&r.amount_unit),
            cell(&r.supplier),
            cell_num(r.purity_percent),
            cell(&r.cas_number),
            cell(&r.smiles),
        ];
        w.push(row.join("\t"));
    }
    w.blank();
}

fn vessel_loop(w: &mut Writer, items: &[Vessel]) {
    if items.is_empty() {
        return;
    }
    loop_header(
        w,
        RecordKind::Vessel.stem(),
        items.len(),
        &[
            "id", "volume", "volume_unit", "material", "type", "supplier", "purpose", "note",
        ],
    );
    for (i, v) in items.iter().enumerate() {
        let row = [
            RecordKind::Vessel.id(i),
            cell_num(v.volume),
            cell(&v.volume_unit),
            cell(&v.material),
            cell(&v.vessel_type),
            cell(&v.supplier),
            cell(&v.purpose),
            cell(&v.note),
        ];
        w.push(row.join("\t"));
    }
    w.blank();
}

fn hardware_loop(w: &mut Writer, items: &[Hardware]) {
    if items.is_empty() {
        return;
    }
    loop_header(
        w,
        RecordKind::Hardware.stem(),
        items.len(),
        &["id", "purpose", "general_name", "product_name", "supplier", "note"],
    );
    for (i, h) in items.iter().enumerate() {
        let row = [
            RecordKind::Hardware.id(i),
            cell(&h.purpose),
            cell(&h.general_name),
            cell(&h.product_name),
            cell(&h.supplier),
            cell(&h.note),
        ];
        w.push(row.join("\t"));
    }
    w.blank();
}

fn step_loop(w: &mut Writer, items: &[ProcedureStep]) {
    if items.is_empty() {
        return;
    }
    loop_header(
        w,
        RecordKind::Step.stem(),
        items.len(),
        &["id", "type", "atmosphere", "detail"],
    );
    for (i, s) in items.iter().enumerate() {
        let row = [
            RecordKind::Step.id(i),
            cell(&s.step_type),
            cell(&s.atmosphere),
            cell(&s.detail),
        ];
        w.push(row.join("\t"));
    }
    w.blank();
}

fn characterization(w: &mut Writer, c: &Characterization) {
    let any = c.pxrd.is_some()
        || c.tga.is_some()
        || c.adsorption.is_some()
        || c.desorption.is_some()
        || c.aif.is_some()
        || c.cif.is_some();
    if !any {
        return;
    }

    w.push("#Characterization Information");
    w.blank();

    if let Some(pxrd) = &c.pxrd {
        w.push(tags::PXRD_DATA);
        w.push(";");
        w.kv(tags::PXRD_SOURCE, quoted(pxrd.source.as_str()));
        kv_opt_num(w, tags::PXRD_LAMBDA, pxrd.wavelength);
        w.push("loop_");
        w.push(tags::PXRD_TWO_THETA);
        w.push(tags::PXRD_INTENSITY);
        for p in &pxrd.points {
            w.push(format!("{}\t{}", num(p.two_theta), num(p.intensity)));
        }
        w.push(";");
        w.blank();
    }

    if let Some(tga) = &c.tga {
        w.push(tags::TGA_DATA);
        w.push(";");
        w.push("loop_");
        w.push(tags::TGA_TEMPERATURE);
        w.push(tags::TGA_WEIGHT);
        for p in &tga.points {
            w.push(format!("{}\t{}", num(p.temperature_c), num(p.weight_percent)));
        }
        w.push(";");
        w.blank();
    }

    if let Some(series) = &c.adsorption {
        isotherm_block(w, tags::ADSORP_DATA, "_adsorp", series);
    }
    if let Some(series) = &c.desorption {
        isotherm_block(w, tags::DESORP_DATA, "_desorp", series);
    }

    if let Some(aif) = &c.aif {
        w.text_block(tags::AIF, aif);
        w.blank();
    }
    if let Some(cif) = &c.cif {
        w.text_block(tags::CIF, cif);
    }
}

fn isotherm_block(w: &mut Writer, marker: &str, prefix: &str, series: &IsothermSeries) {
    w.push(marker);
    w.push(";");
    kv_opt_num(w, tags::EXPTL_TEMPERATURE, series.temperature);
    kv_opt_quoted(w, tags::EXPTL_METHOD, &series.method);
    kv_opt_num(w, tags::EXPTL_SAMPLE_MASS, series.sample_mass);
    kv_opt_quoted(w, tags::EXPTL_SAMPLE_ID, &series.sample_id);
    kv_opt_quoted(w, tags::EXPTL_MATERIAL_ID, &series.material_id);
    kv_opt_quoted(w, tags::UNITS_TEMPERATURE, &series.units.temperature);
    kv_opt_quoted(w, tags::UNITS_PRESSURE, &series.units.pressure);
    kv_opt_quoted(w, tags::UNITS_MASS, &series.units.mass);
    kv_opt_quoted(w, tags::UNITS_LOADING, &series.units.loading);
    w.push("loop_");
    w.push(format!("{prefix}_pressure"));
    w.push(format!("{prefix}_p0"));
    w.push(format!("{prefix}_amount"));
    for p in &series.points {
        w.push(format!(
            "{}\t{}\t{}",
            num(p.pressure),
            opt_num(p.p0),
            num(p.amount)
        ));
    }
    w.push(";");
    w.blank();
}
