pub mod element_id;

pub use element_id::ElementId;
