pub mod ports;
pub mod registry;

pub use registry::{Template, TemplateRegistry};
