//! Conversion tables from schedaF controlled vocabulary to ontology terms.
//!
//! Lookups never fail: an unknown code yields `None` and the caller emits
//! nothing for that aspect.

use crate::vocab::{crm, Link};

const UNITS: &[(&str, &str)] = &[
    ("mm", "http://qudt.org/vocab/unit#Millimeter"),
    ("cm", "http://qudt.org/vocab/unit#Centimeter"),
    ("m", "http://qudt.org/vocab/unit#Meter"),
];

const PRODUCTION_ROLES: &[(&str, Link)] = &[
    ("editore", crm::P14A_CARRIED_OUT_AS_PUBLISHER_BY),
    ("committente", crm::P14B_CARRIED_OUT_AS_CUSTOMER_BY),
    ("distributore", crm::P14C_CARRIED_OUT_AS_DISTRIBUTOR_BY),
];

/// Static lookup tables consulted by every mapper.
#[derive(Debug, Clone, Copy)]
pub struct ConversionTables {
    units: &'static [(&'static str, &'static str)],
    roles: &'static [(&'static str, Link)],
}

impl Default for ConversionTables {
    fn default() -> Self {
        Self {
            units: UNITS,
            roles: PRODUCTION_ROLES,
        }
    }
}

impl ConversionTables {
    pub fn new() -> Self {
        Self::default()
    }

    /// Unit of measure code (`MISU`) to a QUDT unit IRI.
    pub fn unit_to_ontology_term(&self, code: &str) -> Option<&'static str> {
        let code = code.trim();
        self.units
            .iter()
            .find(|(k, _)| *k == code)
            .map(|(_, term)| *term)
    }

    /// Production role (`PDFR`) to the role-specific `P14` sub-property.
    pub fn role_to_ontology_property(&self, code: &str) -> Option<Link> {
        let code = code.trim();
        self.roles
            .iter()
            .find(|(k, _)| *k == code)
            .map(|(_, link)| *link)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_units_map_to_qudt() {
        let tables = ConversionTables::new();
        assert_eq!(
            tables.unit_to_ontology_term("mm"),
            Some("http://qudt.org/vocab/unit#Millimeter")
        );
        assert_eq!(
            tables.unit_to_ontology_term(" cm "),
            Some("http://qudt.org/vocab/unit#Centimeter")
        );
        assert_eq!(tables.unit_to_ontology_term("inch"), None);
        assert_eq!(tables.unit_to_ontology_term("MM"), None);
    }

    #[test]
    fn roles_map_to_p14_subproperties() {
        let tables = ConversionTables::new();
        let publisher = tables.role_to_ontology_property("editore").expect("editore");
        assert!(publisher.forward.ends_with("P14a_carried_out_as_publisher_by"));
        assert_eq!(publisher.inverse, crm::P14_CARRIED_OUT_BY.inverse);
        assert!(tables.role_to_ontology_property("fotografo").is_none());
    }
}
