//! Registration reconciler
//!
//! Merges the WHOIS and RDAP extractions into one fully-populated record.
//! Precedence is asymmetric: WHOIS wins for name, creation and registrar;
//! RDAP wins for organization. The ordering is a data table rather than
//! conditional chains, so the one reversed field is a table entry and not
//! a special case.

use crate::records::{ReconciledRegistration, RegistrationRecord};
use crate::{is_unknown, UNKNOWN};

/// The two registration data sources, in no particular order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Whois,
    Rdap,
}

/// The four merged fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Name,
    Organization,
    Creation,
    Registrar,
}

/// Field precedence: ordered list of sources to try per field.
/// Organization is the deliberate outlier (RDAP first).
const PRECEDENCE: [(Field, [Source; 2]); 4] = [
    (Field::Name, [Source::Whois, Source::Rdap]),
    (Field::Creation, [Source::Whois, Source::Rdap]),
    (Field::Registrar, [Source::Whois, Source::Rdap]),
    (Field::Organization, [Source::Rdap, Source::Whois]),
];

fn field_of(record: &RegistrationRecord, field: Field) -> Option<&str> {
    match field {
        Field::Name => record.name.as_deref(),
        Field::Organization => record.organization.as_deref(),
        Field::Creation => record.creation.as_deref(),
        Field::Registrar => record.registrar.as_deref(),
    }
}

/// First candidate that is present, non-blank after trimming and not the
/// sentinel; otherwise the sentinel itself.
fn pick(
    field: Field,
    order: &[Source; 2],
    whois: &RegistrationRecord,
    rdap: &RegistrationRecord,
) -> String {
    for source in order {
        let record = match source {
            Source::Whois => whois,
            Source::Rdap => rdap,
        };
        if let Some(value) = field_of(record, field) {
            if !is_unknown(value) {
                return value.trim().to_string();
            }
        }
    }
    UNKNOWN.to_string()
}

/// Merge the two source records under the precedence table.
///
/// Argument order matters and mirrors the table: `whois` is the preferred
/// source for every field except organization.
pub fn reconcile(whois: &RegistrationRecord, rdap: &RegistrationRecord) -> ReconciledRegistration {
    let mut merged = ReconciledRegistration {
        name: UNKNOWN.to_string(),
        organization: UNKNOWN.to_string(),
        creation: UNKNOWN.to_string(),
        registrar: UNKNOWN.to_string(),
    };
    for (field, order) in &PRECEDENCE {
        let value = pick(*field, order, whois, rdap);
        match field {
            Field::Name => merged.name = value,
            Field::Organization => merged.organization = value,
            Field::Creation => merged.creation = value,
            Field::Registrar => merged.registrar = value,
        }
    }
    merged
}
