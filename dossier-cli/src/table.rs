//! Terminal presentation
//!
//! Pipe-delimited rows, colored per column through the explicit style
//! table. Plain mode produces exactly the same bytes minus decoration, so
//! the field values stay identical to the CSV export.

use colored::{Color, Colorize};

use dossier_core::{ColumnColor, ColumnStyle, EnrichmentRecord, HEADERS};

const DELIMITER: &str = " | ";

fn terminal_color(color: ColumnColor) -> Option<Color> {
    match color {
        ColumnColor::Plain => None,
        ColumnColor::Cyan => Some(Color::Cyan),
        ColumnColor::Green => Some(Color::Green),
        ColumnColor::Yellow => Some(Color::Yellow),
        ColumnColor::Magenta => Some(Color::Magenta),
        ColumnColor::Blue => Some(Color::Blue),
        ColumnColor::White => Some(Color::White),
    }
}

fn paint(field: &str, style: &ColumnStyle, colored: bool) -> String {
    if !colored {
        return field.to_string();
    }
    match terminal_color(style.color) {
        Some(color) => field.color(color).to_string(),
        None => field.to_string(),
    }
}

fn render_row(fields: &[String], styles: &[ColumnStyle], colored: bool) -> String {
    fields
        .iter()
        .zip(styles)
        .map(|(field, style)| paint(field, style, colored))
        .collect::<Vec<_>>()
        .join(DELIMITER)
}

/// Print header and one row per record to the terminal
pub fn print_table(records: &[EnrichmentRecord], styles: &[ColumnStyle], colored: bool) {
    let header = HEADERS.join(DELIMITER);
    if colored {
        println!("{}", header.bold());
    } else {
        println!("{}", header);
    }
    for record in records {
        println!("{}", render_row(&record.fields(), styles, colored));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dossier_core::{
        default_styles, GeoRecord, Reachability, ReconciledRegistration, UNKNOWN,
    };

    fn sample_record() -> EnrichmentRecord {
        EnrichmentRecord {
            ip: "1.1.1.1".to_string(),
            status: Reachability::Reachable,
            geo: GeoRecord::unknown(),
            ptr: "one.one.one.one".to_string(),
            registration: ReconciledRegistration {
                name: UNKNOWN.to_string(),
                organization: "APNIC".to_string(),
                creation: UNKNOWN.to_string(),
                registrar: "apnic".to_string(),
            },
            ports: "53,443".to_string(),
        }
    }

    #[test]
    fn test_plain_row_is_undecorated_join() {
        let record = sample_record();
        let fields = record.fields();
        let row = render_row(&fields, &default_styles(), false);
        assert_eq!(row, fields.join(" | "));
    }

    #[test]
    fn test_colored_row_keeps_field_text() {
        let record = sample_record();
        let row = render_row(&record.fields(), &default_styles(), true);
        assert!(row.contains("1.1.1.1"));
        assert!(row.contains("one.one.one.one"));
        assert!(row.contains("53,443"));
    }
}
