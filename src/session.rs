use crate::catalog::FieldMetadataStore;
use crate::config::{Config, Environment};
use crate::errors::IntakeError;
use crate::graphql_client::{GraphqlClient, RemoteCall};
use crate::models::ClientRecord;
use crate::render::{self, RenderUnit};
use crate::selection::ActiveSelection;
use crate::serializer::serialize_attributes;
use crate::services::{ClientApi, CLIENT_ENTITY};
use crate::values::{FieldValue, FixedField, ValueStore};
use std::sync::Arc;
use uuid::Uuid;

/// Hook fired when the server reports domain errors for a submission.
pub type ErrorHook = Box<dyn FnMut() + Send>;

/// What one submission produced.
#[derive(Debug)]
pub struct SubmitOutcome {
    /// Whether the server reported domain errors. The failure hook has
    /// already fired when this is true.
    pub server_errors: bool,
    /// Index into `clients()` of the appended record, when the response
    /// carried a resource. Both signals may be set at once.
    pub created: Option<usize>,
}

/// One client-creation form session.
///
/// Owns every piece of session state: the metadata snapshot, the active
/// selection, the value store, the result list and the failure hook.
/// Exclusive ownership is the concurrency model: mutating calls and
/// `submit` borrow the session mutably, so a second submission or a
/// value edit cannot interleave with one in flight. Construction is the
/// mount boundary and dropping the session is the teardown; values,
/// selection and results reset only there.
pub struct FormSession {
    id: Uuid,
    api: ClientApi,
    environment: Environment,
    metadata: FieldMetadataStore,
    selection: ActiveSelection,
    values: ValueStore,
    clients: Vec<ClientRecord>,
    on_error: Option<ErrorHook>,
}

impl FormSession {
    /// Creates a session speaking through the given transport.
    pub fn new(remote: Arc<dyn RemoteCall>, environment: Environment) -> Self {
        let id = Uuid::new_v4();
        tracing::debug!("Starting intake session {}", id);

        Self {
            id,
            api: ClientApi::new(remote),
            environment,
            metadata: FieldMetadataStore::new(),
            selection: ActiveSelection::new(),
            values: ValueStore::new(),
            clients: Vec::new(),
            on_error: None,
        }
    }

    /// Creates a session with the bundled reqwest transport.
    pub fn from_config(config: &Config) -> Result<Self, IntakeError> {
        let remote = GraphqlClient::new(config)?;
        Ok(Self::new(Arc::new(remote), config.environment))
    }

    /// Registers the hook fired on server-reported domain errors.
    pub fn set_error_hook(&mut self, hook: impl FnMut() + Send + 'static) {
        self.on_error = Some(Box::new(hook));
    }

    /// Fetches the subdivision list and the field catalog, superseding
    /// any refresh still in flight. Each fetch failure is swallowed into
    /// an empty list with a warning, so the fixed form stays usable
    /// without dynamic fields or the state picker. Returns whether the
    /// snapshot installed (a superseded refresh installs nothing).
    pub async fn reload_metadata(&mut self) -> bool {
        tracing::debug!("Refreshing metadata (session {})", self.id);
        let ticket = self.metadata.begin_refresh();

        let states = match self.api.states().await {
            Ok(states) => states,
            Err(e) => {
                tracing::warn!("States fetch failed, state selection disabled: {}", e);
                Vec::new()
            }
        };

        let fields = match self.api.field_catalog(CLIENT_ENTITY).await {
            Ok(fields) => fields,
            Err(e) => {
                tracing::warn!("Field catalog fetch failed, dynamic fields unavailable: {}", e);
                Vec::new()
            }
        };

        self.metadata.install(ticket, fields, states)
    }

    /// Swaps the transport after a credential change and refreshes the
    /// metadata through it. Values, selection and results survive; a
    /// remount is the only reset boundary.
    pub async fn change_remote(&mut self, remote: Arc<dyn RemoteCall>) -> bool {
        self.api = ClientApi::new(remote);
        self.reload_metadata().await
    }

    /// Replaces the active selection with the exact set chosen and
    /// returns the re-derived render list.
    pub fn replace_selection<I, S>(&mut self, names: I) -> Vec<RenderUnit>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selection.replace(names);
        self.render()
    }

    /// Derives the renderable list for the current selection.
    pub fn render(&self) -> Vec<RenderUnit> {
        render::render(&self.selection, self.metadata.catalog())
    }

    /// Pushes a fixed-field edit. Blank input clears the field.
    pub fn set_fixed(&mut self, field: FixedField, value: impl Into<String>) {
        self.values.set_fixed(field, value);
    }

    /// Pushes a dynamic-field edit. Blank values remove the entry.
    pub fn set_dynamic(&mut self, name: impl Into<String>, value: FieldValue) {
        self.values.set_dynamic(name, value);
    }

    /// Names of required inputs still blank; consulted by the input
    /// layer before enabling submit.
    pub fn missing_required(&self) -> Vec<String> {
        render::missing_required(&self.values, &self.render())
    }

    /// Serializes the current values and submits one creation request.
    ///
    /// A transport-level failure propagates as `Err` with no state
    /// change and no hook fired; callers guard that gap themselves. On a
    /// response, the two signals are handled independently: non-empty
    /// `errors` fires the failure hook, and a present `resource` is
    /// appended to the result list regardless (never deduplicated).
    pub async fn submit(&mut self) -> Result<SubmitOutcome, IntakeError> {
        let attributes = serialize_attributes(&self.values, self.metadata.catalog());
        tracing::info!("Submitting client creation (session {})", self.id);

        let result = self.api.create_client(&attributes).await?;

        let server_errors = result.has_errors();
        if server_errors {
            tracing::warn!(
                "Server reported errors (session {}): {}",
                self.id,
                result.errors
            );
            if let Some(hook) = self.on_error.as_mut() {
                hook();
            }
        }

        let created = result.resource.map(|resource| {
            tracing::info!("✓ Client {} created", resource.id);
            self.clients.push(resource);
            self.clients.len() - 1
        });

        Ok(SubmitOutcome {
            server_errors,
            created,
        })
    }

    /// Session identifier carried in logs.
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn metadata(&self) -> &FieldMetadataStore {
        &self.metadata
    }

    pub fn selection(&self) -> &ActiveSelection {
        &self.selection
    }

    pub fn values(&self) -> &ValueStore {
        &self.values
    }

    /// Clients created this session, in creation order.
    pub fn clients(&self) -> &[ClientRecord] {
        &self.clients
    }

    /// Portal link for a created client.
    pub fn client_url(&self, record: &ClientRecord) -> String {
        self.environment.client_url(record.id)
    }
}
