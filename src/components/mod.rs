// Export components
pub mod day_preparation;

// Re-export the day preparation handle
pub use day_preparation::DayPreparationHandle;
