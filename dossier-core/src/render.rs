//! Presentation layer: the fixed 14-column view of an [`EnrichmentRecord`]
//!
//! Both output modes (colored terminal table, CSV export) consume the same
//! `fields()` values; only delimiter and decoration differ, so the two
//! renditions are byte-identical field for field.

use crate::records::EnrichmentRecord;

/// Number of output columns
pub const COLUMNS: usize = 14;

/// Canonical header row; consumers parse these labels, do not reword them
pub const HEADERS: [&str; COLUMNS] = [
    "IP",
    "Estado",
    "Pais",
    "Ciudad",
    "ISP",
    "Org Geo",
    "ASN",
    "Lat/Lon",
    "PTR",
    "Registrar",
    "Org WHOIS",
    "Nombre",
    "Creacion",
    "Puertos abiertos",
];

impl EnrichmentRecord {
    /// The record's 14 field values in canonical column order
    pub fn fields(&self) -> [String; COLUMNS] {
        [
            self.ip.clone(),
            self.status.label().to_string(),
            self.geo.country.clone(),
            self.geo.city.clone(),
            self.geo.isp.clone(),
            self.geo.org.clone(),
            self.geo.asn.clone(),
            self.geo.lat_lon.clone(),
            self.ptr.clone(),
            self.registration.registrar.clone(),
            self.registration.organization.clone(),
            self.registration.name.clone(),
            self.registration.creation.clone(),
            self.ports.clone(),
        ]
    }
}

/// Display color for one column, named abstractly so the core stays free
/// of any terminal crate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnColor {
    Plain,
    Cyan,
    Green,
    Yellow,
    Magenta,
    Blue,
    White,
}

/// One entry of the presenter's style table
#[derive(Debug, Clone, Copy)]
pub struct ColumnStyle {
    pub label: &'static str,
    pub color: ColumnColor,
}

/// Default style table: one `(label, color)` pair per column, in column
/// order. Handed explicitly to the presenter; there is no module-level
/// color state.
pub fn default_styles() -> [ColumnStyle; COLUMNS] {
    use ColumnColor::*;
    [
        ColumnStyle { label: HEADERS[0], color: Cyan },
        ColumnStyle { label: HEADERS[1], color: Green },
        ColumnStyle { label: HEADERS[2], color: Yellow },
        ColumnStyle { label: HEADERS[3], color: Yellow },
        ColumnStyle { label: HEADERS[4], color: White },
        ColumnStyle { label: HEADERS[5], color: White },
        ColumnStyle { label: HEADERS[6], color: Blue },
        ColumnStyle { label: HEADERS[7], color: Plain },
        ColumnStyle { label: HEADERS[8], color: Magenta },
        ColumnStyle { label: HEADERS[9], color: Blue },
        ColumnStyle { label: HEADERS[10], color: White },
        ColumnStyle { label: HEADERS[11], color: White },
        ColumnStyle { label: HEADERS[12], color: Plain },
        ColumnStyle { label: HEADERS[13], color: Green },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{GeoRecord, Reachability, ReconciledRegistration};
    use crate::UNKNOWN;

    fn sample_record() -> EnrichmentRecord {
        EnrichmentRecord {
            ip: "93.184.216.34".to_string(),
            status: Reachability::Reachable,
            geo: GeoRecord {
                country: "United States".to_string(),
                region: "California".to_string(),
                city: "Los Angeles".to_string(),
                isp: "EdgeCast".to_string(),
                org: "Verizon Digital Media".to_string(),
                asn: "AS15133".to_string(),
                lat_lon: "34.0522,-118.2437".to_string(),
            },
            ptr: UNKNOWN.to_string(),
            registration: ReconciledRegistration {
                name: "EDGECAST-NETBLK".to_string(),
                organization: UNKNOWN.to_string(),
                creation: "2008-06-02".to_string(),
                registrar: "arin".to_string(),
            },
            ports: "80,443".to_string(),
        }
    }

    #[test]
    fn test_exactly_fourteen_fields_all_non_empty() {
        let fields = sample_record().fields();
        assert_eq!(fields.len(), COLUMNS);
        for field in &fields {
            assert!(!field.is_empty());
        }
    }

    #[test]
    fn test_column_order_matches_headers() {
        let record = sample_record();
        let fields = record.fields();
        assert_eq!(fields[0], record.ip);
        assert_eq!(fields[1], "Conectado");
        assert_eq!(fields[2], record.geo.country);
        assert_eq!(fields[3], record.geo.city);
        assert_eq!(fields[8], record.ptr);
        assert_eq!(fields[9], record.registration.registrar);
        assert_eq!(fields[10], record.registration.organization);
        assert_eq!(fields[11], record.registration.name);
        assert_eq!(fields[13], record.ports);
    }

    #[test]
    fn test_region_is_not_an_output_column() {
        let record = sample_record();
        let fields = record.fields();
        assert!(!fields.contains(&record.geo.region));
    }

    #[test]
    fn test_style_table_covers_every_column_in_order() {
        let styles = default_styles();
        assert_eq!(styles.len(), COLUMNS);
        for (style, header) in styles.iter().zip(HEADERS.iter()) {
            assert_eq!(style.label, *header);
        }
    }
}
