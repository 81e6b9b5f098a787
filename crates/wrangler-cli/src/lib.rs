//! CLI library components for the event wrangler.

pub mod logging;
pub mod pipeline;
