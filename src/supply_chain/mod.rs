//! Supply chain dashboard reports built on [`ReportBuilder`](crate::ReportBuilder).

mod data;
mod predict;
mod report;

pub use data::{KpiMetric, PredictiveInsights, ShipmentState, ShipmentStatus, Supplier, SupplyChainData};
pub use predict::{
    InventoryForecastModel, Predictors, ReliabilityCategory, ShipmentDelayModel,
    SupplierReliabilityModel, DEFAULT_FORECAST_DAYS,
};
pub use report::{render_many, SupplyChainReport};
