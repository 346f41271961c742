pub mod aggregate;
pub mod exec;
pub mod parse;
pub mod render;

pub use aggregate::{aggregate, sort_contributions};
pub use exec::exec;
pub use parse::{LineParser, LineShape};
pub use render::{render, render_markdown, render_plain};
