pub mod element;

pub use element::{Concept, Element};
