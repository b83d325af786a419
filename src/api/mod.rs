// Thin namespace wrapper for the form-facing surface
pub mod session {
    pub use crate::session::*;
}

pub mod render {
    pub use crate::render::*;
}

pub mod selection {
    pub use crate::selection::*;
}
