//! Static site generation: page construction, assets, and file output.

pub mod assets;
pub mod generator;
pub mod pages;

pub use generator::generate_site;
