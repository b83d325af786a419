use crate::catalog::FieldCatalog;
use crate::models::{
    AddressInput, ClientAttributes, Demographic, EmailInput, FieldDefinition, FieldStyle,
    PhoneInput, TypedAttribute,
};
use crate::values::{FieldValue, FixedField, ValueStore};

/// Builds the mutation payload from the current values and catalog.
///
/// Pure: equal snapshots produce byte-identical payloads, since dynamic
/// entries iterate in name order and every branch is deterministic.
/// Entries the catalog cannot explain (no definition under that name, a
/// value shape contradicting the style, an unparseable decimal) are
/// dropped with a warning rather than corrupting the payload.
pub fn serialize_attributes(values: &ValueStore, catalog: &FieldCatalog) -> ClientAttributes {
    let demographic = Demographic {
        first_name: owned(values, FixedField::FirstName),
        last_name: owned(values, FixedField::LastName),
    };

    let phones = values.fixed(FixedField::PhoneNumber).map(|number| {
        vec![PhoneInput {
            number: number.to_string(),
        }]
    });

    let emails = values.fixed(FixedField::Email).map(|address| {
        vec![EmailInput {
            address: address.to_string(),
        }]
    });

    let addresses = build_address(values).map(|address| vec![address]);

    let attributes = build_field_attributes(values, catalog);
    let field_attributes = if attributes.is_empty() {
        None
    } else {
        Some(attributes)
    };

    ClientAttributes {
        demographic,
        phones,
        emails,
        addresses,
        field_attributes,
    }
}

fn owned(values: &ValueStore, field: FixedField) -> Option<String> {
    values.fixed(field).map(str::to_string)
}

/// One address element iff any part was entered; absent parts stay null.
fn build_address(values: &ValueStore) -> Option<AddressInput> {
    let line_one = owned(values, FixedField::Address);
    let city = owned(values, FixedField::City);
    let state_id = owned(values, FixedField::State);
    let zipcode = owned(values, FixedField::Zipcode);

    if line_one.is_none() && city.is_none() && state_id.is_none() && zipcode.is_none() {
        return None;
    }

    Some(AddressInput {
        line_one,
        city,
        state_id,
        zipcode,
    })
}

fn build_field_attributes(values: &ValueStore, catalog: &FieldCatalog) -> Vec<TypedAttribute> {
    let mut attributes = Vec::new();

    for (name, value) in values.dynamic_entries() {
        // Fixed-field names are reserved; they never serialize as attributes.
        if FixedField::is_reserved(name) {
            continue;
        }

        let definition = match catalog.find_by_name(name) {
            Some(definition) => definition,
            None => {
                tracing::warn!("Dropping value for '{}': no such field in the catalog", name);
                continue;
            }
        };

        if let Some(attribute) = typed_attribute(definition, value) {
            attributes.push(attribute);
        }
    }

    attributes
}

/// Fills exactly one value slot per the owning style. Returns None when
/// the held value cannot be reconciled with the style.
fn typed_attribute(definition: &FieldDefinition, value: &FieldValue) -> Option<TypedAttribute> {
    let mut attribute = TypedAttribute::empty(definition.id);

    match (&definition.style, value) {
        (FieldStyle::Checkbox, FieldValue::Bool(checked)) => {
            attribute.boolean_value = Some(*checked);
        }
        (FieldStyle::Decimal, FieldValue::Decimal(raw)) => match parse_decimal(raw) {
            Some(parsed) => attribute.decimal_value = Some(parsed),
            None => {
                tracing::warn!(
                    "Dropping value for '{}': '{}' is not a decimal",
                    definition.name,
                    raw
                );
                return None;
            }
        },
        (FieldStyle::Text, FieldValue::Text(text))
        | (FieldStyle::Select, FieldValue::Text(text)) => {
            attribute.string_value = Some(text.clone());
        }
        // Unrecognized styles never render, but a value held under one
        // still submits through the string slot.
        (FieldStyle::Other(_), FieldValue::Text(text)) => {
            attribute.string_value = Some(text.clone());
        }
        (style, mismatched) => {
            tracing::warn!(
                "Dropping value for '{}': {:?} does not fit style '{}'",
                definition.name,
                mismatched,
                style
            );
            return None;
        }
    }

    Some(attribute)
}

/// Locale-agnostic float parse; the raw text is trimmed, nothing else.
/// Non-finite results are rejected, since they would serialize as null
/// and break the one-hot shape.
fn parse_decimal(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}
