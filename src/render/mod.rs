//! HTML escaping and BBCode rendering.

pub mod bbcode;
pub mod html;

pub use bbcode::render_bbcode;
pub use html::escape_html;
