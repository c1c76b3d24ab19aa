pub mod components;
pub mod config;
pub mod contracts;
pub mod error;
pub mod id;
pub mod metrics;
pub mod observer;
pub mod prelude;
pub mod style;
pub mod surface;
pub mod theme;

pub use components::{
    FocusState, Lifecycle, SharedTextarea, Textarea, TextareaField, auto_shared_textarea,
    shared_textarea,
};
pub use config::{ConfigField, SurfaceAttributes, TextareaConfig};
pub use error::ObserveError;
