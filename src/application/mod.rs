// Application layer - Use cases and viewport state
pub mod kpi_service;
pub mod series_store;
pub mod trend_service;
pub mod viewport;
