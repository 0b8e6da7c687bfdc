pub mod portfolio;
pub mod template;
