// Domain-layer modules and shared errors/models
pub mod catalog {
    pub use crate::catalog::*;
}

pub mod values {
    pub use crate::values::*;
}

pub mod serializer {
    pub use crate::serializer::*;
}

pub mod models {
    pub use crate::models::*;
}

pub mod errors {
    pub use crate::errors::*;
}
