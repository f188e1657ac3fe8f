pub mod engine;
pub mod estimator;
pub mod moisture;
pub mod planner;

pub use crate::domain::model::{
    DailyForecastEntry, FieldGeometry, GrowthStage, IrrigationAdvice, MoistureReading,
    MoistureStatus, SoilProfile, WeatherSample,
};
pub use crate::domain::ports::{CatalogProvider, Storage};
pub use crate::utils::error::Result;
