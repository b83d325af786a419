use crate::errors::{IntakeError, ResultExt};
use crate::graphql_client::{GraphqlRequest, RemoteCall};
use crate::models::{ClientAttributes, FieldDefinition, MutationResult, StateEntry};
use serde_json::json;
use std::sync::Arc;

/// Entity kind whose dynamic fields the client form consumes.
pub const CLIENT_ENTITY: &str = "Client";

/// Ordered field descriptors for an entity kind.
pub const FIELDS_QUERY: &str = r#"
  query FieldsList($entityType: String!) {
    fields(entityType: $entityType) {
      id
      name
      style
      selectOptions {
        id
        name
      }
    }
  }
"#;

/// Reference list of address subdivisions.
pub const STATES_QUERY: &str = r#"
  query StatesList {
    states {
      id
      name
    }
  }
"#;

/// Client creation. The resource selection mirrors everything the result
/// list displays, including the field metadata echoes.
pub const CREATE_CLIENT_MUTATION: &str = r#"
  mutation CreateClient($attributes: ClientInput!) {
    createClient(attributes: $attributes) {
      errors
      resource {
        id
        addresses {
          lineOne
          lineTwo
          city
          state {
            id
            name
          }
          zipcode
        }
        demographic {
          firstName
          lastName
        }
        emails {
          address
        }
        fieldAttributes {
          id
          value
          field {
            id
            name
            style
          }
        }
        phones {
          number
        }
      }
    }
  }
"#;

/// Typed operations of the intake GraphQL API.
///
/// Thin layer over the transport seam: owns the operation documents and
/// decodes their data documents. Catalog and states decoding tolerate an
/// absent member (an empty result is not an error); client creation
/// preserves both response signals for the coordinator.
pub struct ClientApi {
    remote: Arc<dyn RemoteCall>,
}

impl ClientApi {
    pub fn new(remote: Arc<dyn RemoteCall>) -> Self {
        Self { remote }
    }

    /// Fetch the ordered field catalog for an entity kind.
    pub async fn field_catalog(
        &self,
        entity_type: &str,
    ) -> Result<Vec<FieldDefinition>, IntakeError> {
        let request = GraphqlRequest::new(FIELDS_QUERY, json!({ "entityType": entity_type }));
        let data = self.remote.execute(request).await?;

        let fields: Vec<FieldDefinition> = match data.get("fields") {
            Some(value) if !value.is_null() => {
                serde_json::from_value(value.clone()).context("Bad fields payload")?
            }
            _ => Vec::new(),
        };

        tracing::info!(
            "Fetched {} field descriptors for '{}'",
            fields.len(),
            entity_type
        );
        Ok(fields)
    }

    /// Fetch the address-subdivision reference list.
    pub async fn states(&self) -> Result<Vec<StateEntry>, IntakeError> {
        let request = GraphqlRequest::new(STATES_QUERY, json!({}));
        let data = self.remote.execute(request).await?;

        let states: Vec<StateEntry> = match data.get("states") {
            Some(value) if !value.is_null() => {
                serde_json::from_value(value.clone()).context("Bad states payload")?
            }
            _ => Vec::new(),
        };

        tracing::info!("Fetched {} subdivision entries", states.len());
        Ok(states)
    }

    /// Create a client from serialized attributes.
    pub async fn create_client(
        &self,
        attributes: &ClientAttributes,
    ) -> Result<MutationResult, IntakeError> {
        let request =
            GraphqlRequest::new(CREATE_CLIENT_MUTATION, json!({ "attributes": attributes }));
        let data = self.remote.execute(request).await?;

        let payload = data
            .get("createClient")
            .cloned()
            .ok_or_else(|| IntakeError::Decode("Response missing 'createClient'".to_string()))?;

        serde_json::from_value(payload).context("Bad createClient payload")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::Value;

    struct CannedRemote {
        data: Value,
    }

    #[async_trait]
    impl RemoteCall for CannedRemote {
        async fn execute(&self, _request: GraphqlRequest) -> Result<Value, IntakeError> {
            Ok(self.data.clone())
        }
    }

    fn api(data: Value) -> ClientApi {
        ClientApi::new(Arc::new(CannedRemote { data }))
    }

    #[tokio::test]
    async fn test_absent_fields_member_is_an_empty_catalog() {
        let fields = api(json!({})).field_catalog(CLIENT_ENTITY).await.unwrap();
        assert!(fields.is_empty());

        let fields = api(json!({ "fields": null }))
            .field_catalog(CLIENT_ENTITY)
            .await
            .unwrap();
        assert!(fields.is_empty());
    }

    #[tokio::test]
    async fn test_field_catalog_decodes_descriptors() {
        let data = json!({
            "fields": [
                {"id": 7, "name": "VIP", "style": "checkbox"},
                {"id": 9, "name": "Zone", "style": "select",
                 "selectOptions": [{"id": 1, "name": "North"}]}
            ]
        });
        let fields = api(data).field_catalog(CLIENT_ENTITY).await.unwrap();
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[1].select_options.len(), 1);
    }

    #[tokio::test]
    async fn test_create_client_keeps_both_signals() {
        let data = json!({
            "createClient": {
                "errors": {"base": ["suspicious"]},
                "resource": {"id": 12}
            }
        });
        let result = api(data).create_client(&blank_attributes()).await.unwrap();
        assert!(result.has_errors());
        assert_eq!(result.resource.map(|r| r.id), Some(12));
    }

    #[tokio::test]
    async fn test_create_client_requires_the_operation_member() {
        let err = api(json!({}))
            .create_client(&blank_attributes())
            .await
            .unwrap_err();
        assert!(matches!(err, IntakeError::Decode(_)));
    }

    fn blank_attributes() -> ClientAttributes {
        ClientAttributes {
            demographic: Default::default(),
            phones: None,
            emails: None,
            addresses: None,
            field_attributes: None,
        }
    }
}
