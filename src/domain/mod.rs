// Domain layer - Core value types and calendar arithmetic
pub mod gesture;
pub mod kpi;
pub mod reading;
pub mod trend;
pub mod window;
