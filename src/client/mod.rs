//! Display client: fetches the summaries once and renders them as
//! expandable cards.

pub mod fetch;
pub mod render;
pub mod view;
pub mod viewer;
