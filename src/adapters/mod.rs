// Adapters layer: concrete implementations for external systems (the page
// message channel; config lives under src/config).

pub mod channel;
