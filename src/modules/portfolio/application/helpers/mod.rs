pub mod subdomain;

pub use subdomain::{SubdomainMatch, SubdomainPolicy};
