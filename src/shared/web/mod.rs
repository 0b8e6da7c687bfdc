pub mod html_response;
pub mod markup;

pub use html_response::HtmlResponse;
