//! State Management Layer
//!
//! Pure, synchronous view state. Controllers own these values and feed them
//! with data fetched by the service layer:
//!
//! ```text
//! UI Action → Controller → BackendApi call → State update → Renderer reads derived view
//! ```

mod paginated_view;
mod wizard;

pub use paginated_view::*;
pub use wizard::*;
