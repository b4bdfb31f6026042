//! Client-side state modules provided to components through Leptos context.

pub mod consultation;
