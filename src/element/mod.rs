mod content;
mod node;

pub use content::Content;
pub use node::Element;

pub(crate) use node::generate_id;
