use crate::catalog::FieldCatalog;
use crate::models::{FieldDefinition, FieldStyle, SelectOption};
use crate::selection::ActiveSelection;
use crate::values::{FixedField, ValueStore};

/// Widget an activated field renders as.
#[derive(Debug, Clone, PartialEq)]
pub enum WidgetKind {
    /// On/off toggle.
    BooleanToggle,
    /// Free-form text input.
    FreeText,
    /// Text input restricted to numeric entry.
    NumericText,
    /// Single choice among the field's configured options.
    SingleChoice { options: Vec<SelectOption> },
}

/// Horizontal share a unit occupies in the form grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutWeight {
    /// Toggle-sized column.
    Narrow,
    /// Input-sized column.
    Wide,
}

impl LayoutWeight {
    /// Grid share in the form the host stylesheet expects.
    pub fn percent(&self) -> &'static str {
        match self {
            LayoutWeight::Narrow => "20%",
            LayoutWeight::Wide => "50%",
        }
    }
}

/// One renderable unit of the dynamic sub-form.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderUnit {
    /// Identifier of the rendered field.
    pub field_id: i64,
    /// Field name; also the `ValueStore` key the widget writes to.
    pub name: String,
    /// Input affordance to present.
    pub widget: WidgetKind,
    /// Column share.
    pub layout: LayoutWeight,
    /// Whether the input layer must demand a value once activated.
    pub required: bool,
}

/// Derives the renderable list for the current selection.
///
/// Pure and total: filters the catalog to selected names (keeping
/// catalog order), stable-sorts by style ascending, then maps each
/// definition to its widget. Unrecognized styles yield no unit but never
/// fail the derivation. Callers re-run this on every selection change;
/// the output depends only on the arguments, so equal inputs render an
/// identical sequence no matter how the selection set iterates.
pub fn render(selection: &ActiveSelection, catalog: &FieldCatalog) -> Vec<RenderUnit> {
    let mut chosen: Vec<&FieldDefinition> = catalog
        .iter()
        .filter(|field| selection.contains(&field.name))
        .collect();
    chosen.sort_by(|a, b| a.style.cmp(&b.style));

    chosen.into_iter().filter_map(unit_for).collect()
}

fn unit_for(field: &FieldDefinition) -> Option<RenderUnit> {
    let (widget, layout, required) = match &field.style {
        FieldStyle::Checkbox => (WidgetKind::BooleanToggle, LayoutWeight::Narrow, false),
        FieldStyle::Decimal => (WidgetKind::NumericText, LayoutWeight::Wide, true),
        FieldStyle::Select => (
            WidgetKind::SingleChoice {
                options: field.select_options.clone(),
            },
            LayoutWeight::Wide,
            false,
        ),
        FieldStyle::Text => (WidgetKind::FreeText, LayoutWeight::Wide, true),
        FieldStyle::Other(style) => {
            tracing::debug!("Skipping field '{}': unrecognized style '{}'", field.name, style);
            return None;
        }
    };

    Some(RenderUnit {
        field_id: field.id,
        name: field.name.clone(),
        widget,
        layout,
        required,
    })
}

/// Names of required inputs still blank: the two required fixed fields
/// first, then required dynamic units in render order. The input layer
/// consults this before enabling submit; submission itself never
/// validates.
pub fn missing_required(values: &ValueStore, units: &[RenderUnit]) -> Vec<String> {
    let mut missing = Vec::new();
    for field in [FixedField::FirstName, FixedField::LastName] {
        if values.fixed(field).is_none() {
            missing.push(field.name().to_string());
        }
    }
    // The store never keeps blank entries, so absence means blank.
    for unit in units.iter().filter(|u| u.required) {
        if values.dynamic(&unit.name).is_none() {
            missing.push(unit.name.clone());
        }
    }
    missing
}
