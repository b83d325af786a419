use std::collections::BTreeMap;

/// The fixed client fields every form carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FixedField {
    /// First name (required at the input layer).
    FirstName,
    /// Last name (required at the input layer).
    LastName,
    /// Phone number.
    PhoneNumber,
    /// Email address.
    Email,
    /// Street line of the address.
    Address,
    /// City of the address.
    City,
    /// Selected subdivision id of the address.
    State,
    /// Postal code of the address.
    Zipcode,
}

impl FixedField {
    /// Every fixed field, in form order.
    pub const ALL: [FixedField; 8] = [
        FixedField::FirstName,
        FixedField::LastName,
        FixedField::PhoneNumber,
        FixedField::Email,
        FixedField::Address,
        FixedField::City,
        FixedField::State,
        FixedField::Zipcode,
    ];

    /// Canonical key of the field. These names are reserved: a dynamic
    /// entry under one of them is never serialized as an attribute.
    pub fn name(&self) -> &'static str {
        match self {
            FixedField::FirstName => "firstName",
            FixedField::LastName => "lastName",
            FixedField::PhoneNumber => "phoneNumber",
            FixedField::Email => "email",
            FixedField::Address => "address",
            FixedField::City => "city",
            FixedField::State => "state",
            FixedField::Zipcode => "zipcode",
        }
    }

    /// Whether `name` collides with a fixed-field key.
    pub fn is_reserved(name: &str) -> bool {
        FixedField::ALL.iter().any(|f| f.name() == name)
    }
}

/// Raw value of one activated dynamic field.
///
/// The variant is chosen by the widget that produced it: toggles push
/// `Bool`, numeric inputs push `Decimal` (raw text, parsed at
/// serialization time), text and select widgets push `Text`.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Checkbox state. `false` is a real value, not an empty one.
    Bool(bool),
    /// Numeric text pending a float parse.
    Decimal(String),
    /// Free text or a selected option's name.
    Text(String),
}

impl FieldValue {
    /// Whether the value counts as blank (nothing entered).
    pub fn is_blank(&self) -> bool {
        match self {
            FieldValue::Bool(_) => false,
            FieldValue::Decimal(s) | FieldValue::Text(s) => blank(s),
        }
    }
}

/// Current value of every fixed field and every touched dynamic field.
///
/// Dynamic entries live in a `BTreeMap` so iteration (and therefore the
/// serialized attribute order) is deterministic for a given state.
/// Setting a blank value removes the entry: a field touched and then
/// cleared is indistinguishable from one never touched.
#[derive(Debug, Clone, Default)]
pub struct ValueStore {
    first_name: Option<String>,
    last_name: Option<String>,
    phone_number: Option<String>,
    email: Option<String>,
    address: Option<String>,
    city: Option<String>,
    state: Option<String>,
    zipcode: Option<String>,
    dynamic: BTreeMap<String, FieldValue>,
}

impl ValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a fixed field from raw input. Blank input clears the field.
    pub fn set_fixed(&mut self, field: FixedField, value: impl Into<String>) {
        let value = value.into();
        let normalized = if blank(&value) { None } else { Some(value) };
        *self.fixed_slot(field) = normalized;
    }

    /// Current value of a fixed field, if any.
    pub fn fixed(&self, field: FixedField) -> Option<&str> {
        match field {
            FixedField::FirstName => self.first_name.as_deref(),
            FixedField::LastName => self.last_name.as_deref(),
            FixedField::PhoneNumber => self.phone_number.as_deref(),
            FixedField::Email => self.email.as_deref(),
            FixedField::Address => self.address.as_deref(),
            FixedField::City => self.city.as_deref(),
            FixedField::State => self.state.as_deref(),
            FixedField::Zipcode => self.zipcode.as_deref(),
        }
    }

    /// Sets a dynamic field from widget input. A blank value removes
    /// the entry instead of storing it.
    pub fn set_dynamic(&mut self, name: impl Into<String>, value: FieldValue) {
        let name = name.into();
        if value.is_blank() {
            self.dynamic.remove(&name);
        } else {
            self.dynamic.insert(name, value);
        }
    }

    /// Removes a dynamic entry outright.
    pub fn clear_dynamic(&mut self, name: &str) {
        self.dynamic.remove(name);
    }

    /// Current value of a dynamic field, if any.
    pub fn dynamic(&self, name: &str) -> Option<&FieldValue> {
        self.dynamic.get(name)
    }

    /// All dynamic entries in name order.
    pub fn dynamic_entries(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.dynamic.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Whether any dynamic field currently holds a value.
    pub fn has_dynamic_values(&self) -> bool {
        !self.dynamic.is_empty()
    }

    fn fixed_slot(&mut self, field: FixedField) -> &mut Option<String> {
        match field {
            FixedField::FirstName => &mut self.first_name,
            FixedField::LastName => &mut self.last_name,
            FixedField::PhoneNumber => &mut self.phone_number,
            FixedField::Email => &mut self.email,
            FixedField::Address => &mut self.address,
            FixedField::City => &mut self.city,
            FixedField::State => &mut self.state,
            FixedField::Zipcode => &mut self.zipcode,
        }
    }
}

/// Blank means empty or whitespace-only.
fn blank(s: &str) -> bool {
    s.trim().is_empty()
}
