/// Property-based tests using proptest
/// Tests payload and rendering invariants that should hold for all inputs
use client_intake::catalog::FieldCatalog;
use client_intake::models::{FieldDefinition, FieldStyle};
use client_intake::render::{render, WidgetKind};
use client_intake::selection::ActiveSelection;
use client_intake::serializer::serialize_attributes;
use client_intake::values::{FieldValue, FixedField, ValueStore};
use proptest::prelude::*;

/// Helper to build a catalog holding a single field
fn single_field(id: i64, name: &str, style: FieldStyle) -> FieldCatalog {
    FieldCatalog::new(vec![FieldDefinition {
        id,
        name: name.to_string(),
        style,
        select_options: Vec::new(),
    }])
}

fn style_from_index(index: usize) -> FieldStyle {
    match index {
        0 => FieldStyle::Checkbox,
        1 => FieldStyle::Decimal,
        2 => FieldStyle::Select,
        3 => FieldStyle::Text,
        _ => FieldStyle::Other("custom".to_string()),
    }
}

/// Rank of a widget in the render order, mirroring the style order
fn widget_rank(widget: &WidgetKind) -> usize {
    match widget {
        WidgetKind::BooleanToggle => 0,
        WidgetKind::NumericText => 1,
        WidgetKind::SingleChoice { .. } => 2,
        WidgetKind::FreeText => 3,
    }
}

// Property: every emitted attribute fills exactly one value slot
proptest! {
    #[test]
    fn checkbox_values_fill_only_the_boolean_slot(checked in proptest::bool::ANY, id in 1i64..10_000) {
        let catalog = single_field(id, "Flag", FieldStyle::Checkbox);
        let mut values = ValueStore::new();
        values.set_dynamic("Flag", FieldValue::Bool(checked));

        let attributes = serialize_attributes(&values, &catalog).field_attributes.unwrap();
        prop_assert_eq!(attributes.len(), 1);
        prop_assert_eq!(attributes[0].field_id, id);
        prop_assert_eq!(attributes[0].boolean_value, Some(checked));
        prop_assert!(attributes[0].decimal_value.is_none());
        prop_assert!(attributes[0].string_value.is_none());
    }

    #[test]
    fn decimal_values_fill_only_the_decimal_slot(whole in -1_000_000i64..1_000_000, frac in 0u32..100) {
        let raw = format!("{}.{:02}", whole, frac);
        let catalog = single_field(8, "Budget", FieldStyle::Decimal);
        let mut values = ValueStore::new();
        values.set_dynamic("Budget", FieldValue::Decimal(raw.clone()));

        let attributes = serialize_attributes(&values, &catalog).field_attributes.unwrap();
        prop_assert_eq!(attributes.len(), 1);
        prop_assert_eq!(attributes[0].decimal_value, Some(raw.parse::<f64>().unwrap()));
        prop_assert!(attributes[0].boolean_value.is_none());
        prop_assert!(attributes[0].string_value.is_none());
    }

    #[test]
    fn text_values_fill_only_the_string_slot(text in "[A-Za-z0-9][A-Za-z0-9 ]{0,30}") {
        let catalog = single_field(10, "Notes", FieldStyle::Text);
        let mut values = ValueStore::new();
        values.set_dynamic("Notes", FieldValue::Text(text.clone()));

        let attributes = serialize_attributes(&values, &catalog).field_attributes.unwrap();
        prop_assert_eq!(attributes.len(), 1);
        prop_assert_eq!(attributes[0].string_value.clone(), Some(text));
        prop_assert!(attributes[0].boolean_value.is_none());
        prop_assert!(attributes[0].decimal_value.is_none());
    }
}

// Property: equal value snapshots serialize to identical bytes
proptest! {
    #[test]
    fn payload_bytes_ignore_insertion_order(names in prop::collection::btree_set("[A-Z][a-z]{2,8}", 1..6)) {
        let names: Vec<String> = names.into_iter().collect();
        let catalog = FieldCatalog::new(
            names
                .iter()
                .enumerate()
                .map(|(i, name)| FieldDefinition {
                    id: i as i64 + 1,
                    name: name.clone(),
                    style: FieldStyle::Text,
                    select_options: Vec::new(),
                })
                .collect(),
        );

        let mut forward = ValueStore::new();
        for (i, name) in names.iter().enumerate() {
            forward.set_dynamic(name.clone(), FieldValue::Text(format!("value {}", i)));
        }
        let mut reverse = ValueStore::new();
        for (i, name) in names.iter().enumerate().rev() {
            reverse.set_dynamic(name.clone(), FieldValue::Text(format!("value {}", i)));
        }

        let a = serde_json::to_string(&serialize_attributes(&forward, &catalog)).unwrap();
        let b = serde_json::to_string(&serialize_attributes(&reverse, &catalog)).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn reserialization_is_byte_stable(first in "[A-Za-z ]{0,10}", city in "[A-Za-z ]{0,10}") {
        let mut values = ValueStore::new();
        values.set_fixed(FixedField::FirstName, first);
        values.set_fixed(FixedField::City, city);

        let catalog = FieldCatalog::default();
        let a = serde_json::to_string(&serialize_attributes(&values, &catalog)).unwrap();
        let b = serde_json::to_string(&serialize_attributes(&values, &catalog)).unwrap();
        prop_assert_eq!(a, b);
    }
}

// Property: serialization never panics, whatever was entered
proptest! {
    #[test]
    fn serialization_never_panics(name in "\\PC*", text in "\\PC*") {
        let catalog = single_field(1, "Notes", FieldStyle::Text);
        let mut values = ValueStore::new();
        values.set_dynamic(name, FieldValue::Text(text));
        let _ = serialize_attributes(&values, &catalog);
    }

    #[test]
    fn decimal_entry_never_panics(raw in "\\PC*") {
        let catalog = single_field(8, "Budget", FieldStyle::Decimal);
        let mut values = ValueStore::new();
        values.set_dynamic("Budget", FieldValue::Decimal(raw));
        let _ = serialize_attributes(&values, &catalog);
    }
}

// Property: rendering depends on selection membership, not presentation order
proptest! {
    #[test]
    fn render_ignores_selection_presentation_order(
        style_indexes in prop::collection::vec(0usize..5, 1..8)
    ) {
        let fields: Vec<FieldDefinition> = style_indexes
            .iter()
            .enumerate()
            .map(|(i, index)| FieldDefinition {
                id: i as i64 + 1,
                name: format!("Field{}", i),
                style: style_from_index(*index),
                select_options: Vec::new(),
            })
            .collect();
        let names: Vec<String> = fields.iter().map(|f| f.name.clone()).collect();
        let catalog = FieldCatalog::new(fields);

        let mut forward = ActiveSelection::new();
        forward.replace(names.clone());
        let mut backward = ActiveSelection::new();
        backward.replace(names.into_iter().rev());

        prop_assert_eq!(render(&forward, &catalog), render(&backward, &catalog));
    }

    #[test]
    fn render_orders_units_by_style(
        style_indexes in prop::collection::vec(0usize..5, 1..8)
    ) {
        let fields: Vec<FieldDefinition> = style_indexes
            .iter()
            .enumerate()
            .map(|(i, index)| FieldDefinition {
                id: i as i64 + 1,
                name: format!("Field{}", i),
                style: style_from_index(*index),
                select_options: Vec::new(),
            })
            .collect();
        let names: Vec<String> = fields.iter().map(|f| f.name.clone()).collect();
        let catalog = FieldCatalog::new(fields);

        let mut selection = ActiveSelection::new();
        selection.replace(names);
        let units = render(&selection, &catalog);

        for pair in units.windows(2) {
            prop_assert!(widget_rank(&pair[0].widget) <= widget_rank(&pair[1].widget));
        }

        // Unrecognized styles are the only selected fields that drop out.
        let known = style_indexes.iter().filter(|index| **index < 4).count();
        prop_assert_eq!(units.len(), known);
    }
}

// Property: whitespace-only input is a removal, never a stored value
proptest! {
    #[test]
    fn whitespace_only_input_clears_entries(pad in "[ \t]{0,6}") {
        let mut values = ValueStore::new();
        values.set_dynamic("Notes", FieldValue::Text("kept".to_string()));
        values.set_dynamic("Notes", FieldValue::Text(pad.clone()));
        prop_assert!(values.dynamic("Notes").is_none());

        values.set_fixed(FixedField::Email, "ann@example.com");
        values.set_fixed(FixedField::Email, pad);
        prop_assert!(values.fixed(FixedField::Email).is_none());
    }
}
