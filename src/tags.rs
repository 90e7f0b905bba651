//! MPIF tag names shared by the reader and the writer.

pub(crate) const AUDIT_CREATION_DATE: &str = "_mpif_audit_creation_date";
pub(crate) const AUDIT_GENERATOR_VERSION: &str = "_mpif_audit_generator_version";
pub(crate) const AUDIT_PUBLICATION_DOI: &str = "_mpif_audit_publication_doi";
pub(crate) const AUDIT_PROCEDURE_STATUS: &str = "_mpif_audit_procedure_status";

pub(crate) const AUTHOR_NAME: &str = "_mpif_audit_contact_author_name";
pub(crate) const AUTHOR_EMAIL: &str = "_mpif_audit_contact_author_email";
pub(crate) const AUTHOR_ORCID: &str = "_mpif_audit_contact_author_id_orcid";
pub(crate) const AUTHOR_ADDRESS: &str = "_mpif_audit_contact_author_address";
pub(crate) const AUTHOR_PHONE: &str = "_mpif_audit_contact_author_phone";

pub(crate) const PRODUCT_TYPE: &str = "_mpif_product_type";
pub(crate) const PRODUCT_CAS: &str = "_mpif_product_cas";
pub(crate) const PRODUCT_CCDC: &str = "_mpif_product_ccdc";
pub(crate) const PRODUCT_NAME_COMMON: &str = "_mpif_product_name_common";
pub(crate) const PRODUCT_NAME_SYSTEMATIC: &str = "_mpif_product_name_systematic";
pub(crate) const PRODUCT_FORMULA: &str = "_mpif_product_formula";
pub(crate) const PRODUCT_FORMULA_WEIGHT: &str = "_mpif_product_formula_weight";
pub(crate) const PRODUCT_STATE: &str = "_mpif_product_state";
pub(crate) const PRODUCT_COLOR: &str = "_mpif_product_color";
pub(crate) const PRODUCT_HANDLING_ATMOSPHERE: &str = "_mpif_product_handling_atmosphere";
pub(crate) const PRODUCT_HANDLING_NOTE: &str = "_mpif_product_handling_note";
pub(crate) const PRODUCT_CIF: &str = "_mpif_product_cif";

pub(crate) const SYNTHESIS_PERFORMED_DATE: &str = "_mpif_synthesis_performed_date";
pub(crate) const SYNTHESIS_LAB_TEMPERATURE: &str = "_mpif_synthesis_lab_temperature_C";
pub(crate) const SYNTHESIS_LAB_HUMIDITY: &str = "_mpif_synthesis_lab_humidity_percent";
pub(crate) const SYNTHESIS_TYPE: &str = "_mpif_synthesis_type";
pub(crate) const EVAP_METHOD: &str = "_mpif_synthesis_evap_method";
pub(crate) const MICROWAVE_POWER: &str = "_mpif_synthesis_react_microwave_power_W";
pub(crate) const MECHANOCHEM_METHOD: &str = "_mpif_synthesis_react_mechanochem_method";
pub(crate) const ELECTROCHEM_CATHODE: &str = "_mpif_synthesis_react_electrochem_cathode";
pub(crate) const ELECTROCHEM_ANODE: &str = "_mpif_synthesis_react_electrochem_anode";
pub(crate) const ELECTROCHEM_REFERENCE: &str = "_mpif_synthesis_react_electrochem_reference";
pub(crate) const ELECTROCHEM_VOLTAGE: &str = "_mpif_synthesis_react_electrochem_voltage_V";
pub(crate) const ELECTROCHEM_CURRENT: &str = "_mpif_synthesis_react_electrochem_current_A";
pub(crate) const SONICATION_METHOD: &str = "_mpif_synthesis_react_sonication_method";
pub(crate) const SONICATION_POWER: &str = "_mpif_synthesis_react_sonication_power";
pub(crate) const SONICATION_POWER_UNIT: &str = "_mpif_synthesis_react_sonication_power_unit";
pub(crate) const PHOTOCHEM_WAVELENGTH: &str = "_mpif_synthesis_react_photochemical_wavelength_nm";
pub(crate) const PHOTOCHEM_POWER: &str = "_mpif_synthesis_react_photochemical_power_W";
pub(crate) const PHOTOCHEM_SOURCE: &str = "_mpif_synthesis_react_photochemical_source";
pub(crate) const REACT_TEMPERATURE: &str = "_mpif_synthesis_react_temperature_C";
pub(crate) const REACT_TEMPERATURE_CONTROLLER: &str = "_mpif_synthesis_react_temperature_controller";
pub(crate) const REACT_TIME: &str = "_mpif_synthesis_react_time";
pub(crate) const REACT_TIME_UNIT: &str = "_mpif_synthesis_react_time_unit";
pub(crate) const REACT_ATMOSPHERE: &str = "_mpif_synthesis_react_atmosphere";
pub(crate) const REACT_CONTAINER: &str = "_mpif_synthesis_react_container";
pub(crate) const REACT_NOTE: &str = "_mpif_synthesis_react_note";
pub(crate) const PRODUCT_AMOUNT: &str = "_mpif_synthesis_product_amount";
pub(crate) const PRODUCT_AMOUNT_UNIT: &str = "_mpif_synthesis_product_amount_unit";
pub(crate) const PRODUCT_YIELD: &str = "_mpif_synthesis_product_yield_percent";
pub(crate) const SYNTHESIS_SCALE: &str = "_mpif_synthesis_scale";
pub(crate) const SAFETY_NOTE: &str = "_mpif_synthesis_safety_note";

pub(crate) const PROCEDURE_FULL: &str = "_mpif_procedure_full";

pub(crate) const PXRD_DATA: &str = "_mpif_pxrd_data";
pub(crate) const PXRD_SOURCE: &str = "_mpif_pxrd_source";
pub(crate) const PXRD_LAMBDA: &str = "_mpif_pxrd_lambda";
pub(crate) const PXRD_TWO_THETA: &str = "_pxrd_2theta";
pub(crate) const PXRD_INTENSITY: &str = "_pxrd_intensity";

pub(crate) const TGA_DATA: &str = "_mpif_tga_data";
pub(crate) const TGA_TEMPERATURE: &str = "_tga_temperature_celcius";
pub(crate) const TGA_WEIGHT: &str = "_tga_weight_percent";

pub(crate) const ADSORP_DATA: &str = "_mpif_adsorp_data";
pub(crate) const DESORP_DATA: &str = "_mpif_desorp_data";
pub(crate) const EXPTL_TEMPERATURE: &str = "_exptl_temperature";
pub(crate) const EXPTL_METHOD: &str = "_exptl_method";
pub(crate) const EXPTL_SAMPLE_MASS: &str = "_exptl_sample_mass";
pub(crate) const EXPTL_SAMPLE_ID: &str = "_exptl_sample_id";
pub(crate) const EXPTL_MATERIAL_ID: &str = "_exptl_material_id";
pub(crate) const UNITS_TEMPERATURE: &str = "_units_temperature";
pub(crate) const UNITS_PRESSURE: &str = "_units_pressure";
pub(crate) const UNITS_MASS: &str = "_units_mass";
pub(crate) const UNITS_LOADING: &str = "_units_loading";

pub(crate) const AIF: &str = "_mpif_aif";
pub(crate) const CIF: &str = "_mpif_cif";
