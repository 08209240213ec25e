//! HTTP handler functions, grouped per resource.

pub mod items;
