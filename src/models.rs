use serde::{Deserialize, Serialize};
use serde_json::Value;

// ============ Field Metadata ============

/// Input style of an organization-defined field.
///
/// The derived ordering is the rendering order: wire names ascending
/// (checkbox < decimal < select < text), with unrecognized styles last.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldStyle {
    /// Boolean toggle.
    Checkbox,
    /// Numeric text, parsed to a float at serialization time.
    Decimal,
    /// Single choice from the field's configured options.
    Select,
    /// Free text.
    Text,
    /// Any style this build does not recognize. Kept selectable but never rendered.
    #[serde(untagged)]
    Other(String),
}

impl FieldStyle {
    /// Wire name of the style.
    pub fn as_str(&self) -> &str {
        match self {
            FieldStyle::Checkbox => "checkbox",
            FieldStyle::Decimal => "decimal",
            FieldStyle::Select => "select",
            FieldStyle::Text => "text",
            FieldStyle::Other(s) => s,
        }
    }
}

impl std::fmt::Display for FieldStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One choice of a select field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectOption {
    /// Unique identifier of the option.
    pub id: i64,
    /// Display name; also the value submitted when chosen.
    pub name: String,
}

/// Describes one dynamic field an organization has defined for its clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDefinition {
    /// Unique identifier of the field.
    pub id: i64,
    /// Display name, unique within a catalog.
    pub name: String,
    /// Input style; decides widget, layout and serialized slot.
    pub style: FieldStyle,
    /// Choices for select fields; empty for every other style.
    #[serde(default)]
    pub select_options: Vec<SelectOption>,
}

/// Administrative subdivision entry offered by the address state picker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateEntry {
    /// Identifier submitted as `stateId`.
    pub id: String,
    /// Display name.
    pub name: String,
}

// ============ Mutation Input ============

/// Name portion of the client payload; always present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Demographic {
    /// First name; null when not captured.
    pub first_name: Option<String>,
    /// Last name; null when not captured.
    pub last_name: Option<String>,
}

/// Phone list element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhoneInput {
    /// Raw phone number as entered.
    pub number: String,
}

/// Email list element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmailInput {
    /// Email address as entered.
    pub address: String,
}

/// Address list element. Partial addresses are sent as-is, with
/// absent parts serialized as explicit nulls.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressInput {
    /// Street line.
    pub line_one: Option<String>,
    /// City name.
    pub city: Option<String>,
    /// Identifier of a `StateEntry`.
    pub state_id: Option<String>,
    /// Postal code.
    pub zipcode: Option<String>,
}

/// One-hot typed value of a dynamic field.
///
/// Exactly one of the three value slots is non-null, chosen by the owning
/// field's style: checkbox fills `boolean_value`, decimal fills
/// `decimal_value`, everything else fills `string_value`. All three slots
/// are always serialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypedAttribute {
    /// Identifier of the owning `FieldDefinition`.
    pub field_id: i64,
    /// Populated for checkbox fields.
    pub boolean_value: Option<bool>,
    /// Populated for decimal fields.
    pub decimal_value: Option<f64>,
    /// Populated for text and select fields (and unrecognized styles).
    pub string_value: Option<String>,
}

impl TypedAttribute {
    /// Attribute with every value slot null; the serializer fills one.
    pub fn empty(field_id: i64) -> Self {
        TypedAttribute {
            field_id,
            boolean_value: None,
            decimal_value: None,
            string_value: None,
        }
    }
}

/// Input payload of the client creation mutation.
///
/// Optional members are omitted entirely when absent, never sent as
/// empty arrays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientAttributes {
    /// Always present, even with both names null.
    pub demographic: Demographic,
    /// Single-element list iff a phone number was entered.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phones: Option<Vec<PhoneInput>>,
    /// Single-element list iff an email was entered.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emails: Option<Vec<EmailInput>>,
    /// Single-element list iff any address part was entered.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub addresses: Option<Vec<AddressInput>>,
    /// Typed dynamic-field values; absent when nothing was emitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_attributes: Option<Vec<TypedAttribute>>,
}

// ============ Mutation Result ============

/// Field metadata echoed back inside a persisted attribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldEcho {
    /// Identifier of the field.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Style, as stored server-side.
    pub style: FieldStyle,
}

/// Persisted dynamic-field value echoed in the created record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldAttributeRecord {
    /// Server-assigned identifier of the attribute row.
    pub id: i64,
    /// Stored value rendered as a string.
    #[serde(default)]
    pub value: String,
    /// Owning field's metadata, kept for display.
    pub field: FieldEcho,
}

/// Address echoed in the created record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressRecord {
    /// Street line.
    #[serde(default)]
    pub line_one: Option<String>,
    /// Second street line; never submitted by this form but persisted upstream.
    #[serde(default)]
    pub line_two: Option<String>,
    /// City name.
    #[serde(default)]
    pub city: Option<String>,
    /// Resolved subdivision echo.
    #[serde(default)]
    pub state: Option<StateEntry>,
    /// Postal code.
    #[serde(default)]
    pub zipcode: Option<String>,
}

/// Email echoed in the created record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmailRecord {
    /// Stored address.
    #[serde(default)]
    pub address: String,
}

/// Phone echoed in the created record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhoneRecord {
    /// Stored number.
    #[serde(default)]
    pub number: String,
}

/// Server-confirmed client, appended to the session result list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientRecord {
    /// Server-assigned identifier.
    pub id: i64,
    /// Names as persisted.
    #[serde(default)]
    pub demographic: Demographic,
    /// Persisted addresses; the form submits at most one.
    #[serde(default)]
    pub addresses: Vec<AddressRecord>,
    /// Persisted emails.
    #[serde(default)]
    pub emails: Vec<EmailRecord>,
    /// Persisted phones.
    #[serde(default)]
    pub phones: Vec<PhoneRecord>,
    /// Persisted dynamic-field values with metadata echoes.
    #[serde(default)]
    pub field_attributes: Vec<FieldAttributeRecord>,
}

/// Decoded envelope of one `createClient` call.
///
/// `errors` and `resource` are independent signals; a response may carry
/// both, and callers must handle each on its own.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MutationResult {
    /// Server-reported domain errors; shape is backend-defined.
    #[serde(default)]
    pub errors: Value,
    /// Created record, when the server produced one.
    #[serde(default)]
    pub resource: Option<ClientRecord>,
}

impl MutationResult {
    /// Whether the server reported any domain errors.
    ///
    /// Detection only, no structured parsing: strings, arrays and maps
    /// count when non-empty; null, booleans and numbers never count.
    pub fn has_errors(&self) -> bool {
        match &self.errors {
            Value::Null | Value::Bool(_) | Value::Number(_) => false,
            Value::String(s) => !s.is_empty(),
            Value::Array(items) => !items.is_empty(),
            Value::Object(map) => !map.is_empty(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_style_decodes_known_and_unknown() {
        let known: FieldStyle = serde_json::from_value(json!("checkbox")).unwrap();
        assert_eq!(known, FieldStyle::Checkbox);

        let unknown: FieldStyle = serde_json::from_value(json!("signature")).unwrap();
        assert_eq!(unknown, FieldStyle::Other("signature".to_string()));
    }

    #[test]
    fn test_style_order_matches_wire_names() {
        let mut styles = vec![
            FieldStyle::Text,
            FieldStyle::Other("zzz".to_string()),
            FieldStyle::Checkbox,
            FieldStyle::Select,
            FieldStyle::Decimal,
        ];
        styles.sort();
        assert_eq!(
            styles,
            vec![
                FieldStyle::Checkbox,
                FieldStyle::Decimal,
                FieldStyle::Select,
                FieldStyle::Text,
                FieldStyle::Other("zzz".to_string()),
            ]
        );
    }

    #[test]
    fn test_typed_attribute_serializes_all_slots() {
        let attr = TypedAttribute {
            boolean_value: Some(true),
            ..TypedAttribute::empty(7)
        };
        let encoded = serde_json::to_value(&attr).unwrap();
        assert_eq!(
            encoded,
            json!({"fieldId": 7, "booleanValue": true, "decimalValue": null, "stringValue": null})
        );
    }

    #[test]
    fn test_absent_members_are_omitted() {
        let attrs = ClientAttributes {
            demographic: Demographic {
                first_name: Some("Ann".to_string()),
                last_name: Some("Lee".to_string()),
            },
            phones: None,
            emails: None,
            addresses: None,
            field_attributes: None,
        };
        let encoded = serde_json::to_string(&attrs).unwrap();
        assert_eq!(encoded, r#"{"demographic":{"firstName":"Ann","lastName":"Lee"}}"#);
    }

    #[test]
    fn test_has_errors_detects_non_emptiness_only() {
        let with = |errors: Value| MutationResult {
            errors,
            resource: None,
        };
        assert!(!with(Value::Null).has_errors());
        assert!(!with(json!(0)).has_errors());
        assert!(!with(json!(false)).has_errors());
        assert!(!with(json!("")).has_errors());
        assert!(!with(json!([])).has_errors());
        assert!(!with(json!({})).has_errors());
        assert!(with(json!("boom")).has_errors());
        assert!(with(json!(["name is taken"])).has_errors());
        assert!(with(json!({"base": ["invalid"]})).has_errors());
    }

    #[test]
    fn test_client_record_tolerates_sparse_echo() {
        let record: ClientRecord = serde_json::from_value(json!({"id": 41})).unwrap();
        assert!(record.addresses.is_empty());
        assert!(record.field_attributes.is_empty());
        assert_eq!(record.demographic, Demographic::default());
    }
}
