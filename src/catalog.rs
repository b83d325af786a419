use chrono::{DateTime, Utc};

use crate::models::{FieldDefinition, StateEntry};

/// Ordered catalog of dynamic field definitions, as fetched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldCatalog {
    fields: Vec<FieldDefinition>,
}

impl FieldCatalog {
    pub fn new(fields: Vec<FieldDefinition>) -> Self {
        FieldCatalog { fields }
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Definitions in fetch order.
    pub fn iter(&self) -> impl Iterator<Item = &FieldDefinition> {
        self.fields.iter()
    }

    /// First definition carrying the given name. Names are unique per
    /// catalog upstream; on a malformed catalog the first match wins.
    pub fn find_by_name(&self, name: &str) -> Option<&FieldDefinition> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// Token tying one refresh to the epoch that started it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshTicket {
    epoch: u64,
}

/// Session store for the field catalog and the subdivision reference list.
///
/// Fetches are keyed by the session credential: every credential change
/// begins a new refresh that supersedes any still in flight. The guard is
/// an epoch ticket. `begin_refresh` bumps the epoch and hands out a
/// ticket; `install` applies a fetched snapshot only while its ticket is
/// current. A superseded fetch is discarded wholesale, never merged, so
/// the held snapshot is always the latest refresh that completed.
#[derive(Debug, Default)]
pub struct FieldMetadataStore {
    epoch: u64,
    catalog: FieldCatalog,
    states: Vec<StateEntry>,
    fetched_at: Option<DateTime<Utc>>,
}

impl FieldMetadataStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a refresh, invalidating every ticket handed out before.
    pub fn begin_refresh(&mut self) -> RefreshTicket {
        self.epoch += 1;
        RefreshTicket { epoch: self.epoch }
    }

    /// Installs a fetched snapshot. Returns false (and keeps the held
    /// snapshot) when the ticket was superseded by a newer refresh.
    pub fn install(
        &mut self,
        ticket: RefreshTicket,
        fields: Vec<FieldDefinition>,
        states: Vec<StateEntry>,
    ) -> bool {
        if ticket.epoch != self.epoch {
            tracing::warn!(
                "Discarding stale metadata fetch: ticket epoch {} superseded by {}",
                ticket.epoch,
                self.epoch
            );
            return false;
        }

        tracing::debug!(
            "Installing metadata snapshot: {} fields, {} states",
            fields.len(),
            states.len()
        );
        self.catalog = FieldCatalog::new(fields);
        self.states = states;
        self.fetched_at = Some(Utc::now());
        true
    }

    pub fn catalog(&self) -> &FieldCatalog {
        &self.catalog
    }

    /// Subdivision entries for the address sub-form; empty when the
    /// reference list is unavailable, which disables the state picker.
    pub fn states(&self) -> &[StateEntry] {
        &self.states
    }

    /// Whether any dynamic fields exist to offer for selection.
    pub fn has_fields(&self) -> bool {
        !self.catalog.is_empty()
    }

    pub fn has_states(&self) -> bool {
        !self.states.is_empty()
    }

    /// When the held snapshot was installed, if one ever was.
    pub fn fetched_at(&self) -> Option<DateTime<Utc>> {
        self.fetched_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FieldStyle;

    fn field(id: i64, name: &str, style: FieldStyle) -> FieldDefinition {
        FieldDefinition {
            id,
            name: name.to_string(),
            style,
            select_options: Vec::new(),
        }
    }

    #[test]
    fn test_install_replaces_snapshot_wholesale() {
        let mut store = FieldMetadataStore::new();

        let first = store.begin_refresh();
        assert!(store.install(first, vec![field(1, "VIP", FieldStyle::Checkbox)], vec![]));
        assert_eq!(store.catalog().len(), 1);

        let second = store.begin_refresh();
        assert!(store.install(second, vec![field(2, "Budget", FieldStyle::Decimal)], vec![]));
        assert_eq!(store.catalog().len(), 1);
        assert!(store.catalog().find_by_name("VIP").is_none());
        assert!(store.catalog().find_by_name("Budget").is_some());
    }

    #[test]
    fn test_stale_ticket_installs_nothing() {
        let mut store = FieldMetadataStore::new();

        let slow = store.begin_refresh();
        let fast = store.begin_refresh();
        assert!(store.install(fast, vec![field(2, "Budget", FieldStyle::Decimal)], vec![]));

        // The superseded fetch resolves late; its snapshot must not land.
        assert!(!store.install(slow, vec![field(1, "VIP", FieldStyle::Checkbox)], vec![]));
        assert!(store.catalog().find_by_name("Budget").is_some());
        assert!(store.catalog().find_by_name("VIP").is_none());
    }

    #[test]
    fn test_find_by_name_takes_first_match() {
        let catalog = FieldCatalog::new(vec![
            field(1, "Zone", FieldStyle::Text),
            field(2, "Zone", FieldStyle::Select),
        ]);
        assert_eq!(catalog.find_by_name("Zone").map(|f| f.id), Some(1));
    }

    #[test]
    fn test_empty_install_marks_fetch_time() {
        let mut store = FieldMetadataStore::new();
        assert!(store.fetched_at().is_none());

        let ticket = store.begin_refresh();
        assert!(store.install(ticket, vec![], vec![]));
        assert!(store.fetched_at().is_some());
        assert!(!store.has_fields());
        assert!(!store.has_states());
    }
}
