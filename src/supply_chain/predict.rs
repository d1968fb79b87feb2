//! Interfaces to the prediction models behind the "Predictive Insights" section.
//!
//! The models themselves live outside this crate. Callers construct them and
//! hand them to [`Predictors`]; nothing here loads or trains a model.

use super::data::{PredictiveInsights, ShipmentState, ShipmentStatus, Supplier};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Default forecast horizon in days.
pub const DEFAULT_FORECAST_DAYS: u32 = 7;

/// Class predicted for a supplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReliabilityCategory {
    /// Expected to deliver on time
    Reliable,
    /// Should be reviewed
    AtRisk,
}

impl ReliabilityCategory {
    /// Map a classifier label (1 = reliable) to a category.
    pub fn from_class(label: i64) -> Self {
        if label > 0 {
            ReliabilityCategory::Reliable
        } else {
            ReliabilityCategory::AtRisk
        }
    }
}

/// Classifies suppliers from their order history.
pub trait SupplierReliabilityModel: Send + Sync {
    /// Predict the category for a supplier with the given lead time (days),
    /// unit cost and number of completed orders.
    fn predict(&self, lead_time: f64, cost: f64, past_orders: u32) -> Result<ReliabilityCategory>;
}

/// Forecasts inventory demand.
pub trait InventoryForecastModel: Send + Sync {
    /// Demand for each of the next `horizon_days` days.
    fn forecast(&self, horizon_days: u32) -> Result<Vec<f64>>;
}

/// Flags shipments likely to be delayed.
pub trait ShipmentDelayModel: Send + Sync {
    /// Whether a shipment with the given accumulated delay (days) will be late.
    fn predict(&self, delay_time: f64) -> Result<bool>;
}

/// The three collaborating models, injected by the caller.
#[derive(Clone)]
pub struct Predictors {
    supplier: Arc<dyn SupplierReliabilityModel>,
    inventory: Arc<dyn InventoryForecastModel>,
    shipment: Arc<dyn ShipmentDelayModel>,
    horizon_days: u32,
}

impl Predictors {
    /// Bundle the models.
    pub fn new(
        supplier: Arc<dyn SupplierReliabilityModel>,
        inventory: Arc<dyn InventoryForecastModel>,
        shipment: Arc<dyn ShipmentDelayModel>,
    ) -> Self {
        Self {
            supplier,
            inventory,
            shipment,
            horizon_days: DEFAULT_FORECAST_DAYS,
        }
    }

    /// Set the forecast horizon.
    pub fn with_horizon(mut self, days: u32) -> Self {
        self.horizon_days = days;
        self
    }

    /// Forecast horizon in days.
    pub fn horizon_days(&self) -> u32 {
        self.horizon_days
    }

    /// Run every model and phrase the results as report content.
    ///
    /// Delivered shipments are never flagged. Any model error aborts the
    /// whole call.
    pub fn insights(
        &self,
        suppliers: &[Supplier],
        shipments: &[ShipmentStatus],
    ) -> Result<PredictiveInsights> {
        let inventory_forecast = self.inventory.forecast(self.horizon_days)?;

        let mut shipment_delays = Vec::new();
        for shipment in shipments {
            if shipment.status == ShipmentState::Delivered {
                continue;
            }
            let delay = f64::from(shipment.delay.unwrap_or(0));
            if self.shipment.predict(delay)? {
                shipment_delays.push(format!("{} (High risk of delay)", shipment.short_route()));
            }
        }

        let mut supplier_alerts = Vec::new();
        for supplier in suppliers {
            let category = self.supplier.predict(
                f64::from(supplier.lead_time),
                supplier.cost_per_unit,
                supplier.past_orders,
            )?;
            if category == ReliabilityCategory::AtRisk {
                supplier_alerts.push(format!(
                    "{} ({} reliability) flagged for review.",
                    supplier.name,
                    supplier.reliability_label()
                ));
            }
        }

        log::debug!(
            "Predicted {} forecast days, {} delays, {} supplier alerts",
            inventory_forecast.len(),
            shipment_delays.len(),
            supplier_alerts.len()
        );

        Ok(PredictiveInsights {
            inventory_forecast,
            shipment_delays,
            supplier_alerts,
        })
    }
}

impl fmt::Debug for Predictors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Predictors")
            .field("horizon_days", &self.horizon_days)
            .finish_non_exhaustive()
    }
}
