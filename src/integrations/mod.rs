//! External service integrations.

pub mod graphql_client {
    pub use crate::graphql_client::*;
}

pub mod services {
    pub use crate::services::*;
}
