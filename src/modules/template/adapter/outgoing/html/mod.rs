mod classic;
mod components;
mod dock;
mod split;

pub use classic::ClassicRenderer;
pub use dock::DockRenderer;
pub use split::SplitRenderer;
