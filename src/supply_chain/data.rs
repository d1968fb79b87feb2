//! Supply chain figures fed into the report.
//!
//! Field names serialize in camelCase so dashboard exports load directly.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A supplier and its observed performance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Supplier {
    /// Supplier identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Reliability as a fraction (0.0-1.0)
    pub reliability: f64,
    /// Lead time in days
    pub lead_time: u32,
    /// Cost per unit in dollars
    pub cost_per_unit: f64,
    /// Location, e.g. "Munich, Germany"
    pub location: String,
    /// Number of completed orders, used by reliability prediction
    #[serde(default)]
    pub past_orders: u32,
}

impl Supplier {
    /// Reliability as a percentage with one decimal, e.g. "95.0%".
    pub fn reliability_label(&self) -> String {
        format!("{:.1}%", self.reliability * 100.0)
    }

    /// Cells of the supplier performance table:
    /// name, location, reliability, lead time, cost per unit.
    pub fn table_row(&self) -> [String; 5] {
        [
            self.name.clone(),
            self.location.clone(),
            self.reliability_label(),
            format!("{} days", self.lead_time),
            format_dollars(self.cost_per_unit),
        ]
    }
}

/// Shipment lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShipmentState {
    /// On the way
    InTransit,
    /// Arrived
    Delivered,
    /// Behind schedule
    Delayed,
}

impl fmt::Display for ShipmentState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ShipmentState::InTransit => "In-transit",
            ShipmentState::Delivered => "Delivered",
            ShipmentState::Delayed => "Delayed",
        };
        f.write_str(label)
    }
}

/// Tracking record for one shipment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipmentStatus {
    /// Shipment identifier
    pub id: String,
    /// Origin location
    pub origin: String,
    /// Destination location
    pub destination: String,
    /// Current state
    pub status: ShipmentState,
    /// Estimated arrival date
    pub estimated_arrival: String,
    /// Actual arrival date, once delivered
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_arrival: Option<String>,
    /// Delay in days
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delay: Option<u32>,
}

impl ShipmentStatus {
    /// "origin -> destination" with full locations.
    pub fn route(&self) -> String {
        format!("{} -> {}", self.origin, self.destination)
    }

    /// "origin -> destination" using only the city part of each location.
    pub fn short_route(&self) -> String {
        format!("{} -> {}", city(&self.origin), city(&self.destination))
    }

    /// Estimated arrival, annotated with the delay for delayed shipments.
    pub fn eta_label(&self) -> String {
        match (self.status, self.delay) {
            (ShipmentState::Delayed, Some(days)) if days > 0 => format!(
                "{} (Delayed by {} {})",
                self.estimated_arrival,
                days,
                if days == 1 { "day" } else { "days" }
            ),
            _ => self.estimated_arrival.clone(),
        }
    }

    /// Cells of the shipment tracking table: route, status, ETA.
    pub fn table_row(&self) -> [String; 3] {
        [self.route(), self.status.to_string(), self.eta_label()]
    }
}

/// A headline KPI with an optional trend annotation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KpiMetric {
    /// Label, e.g. "Inventory Turnover"
    pub label: String,
    /// Formatted value, e.g. "5.21"
    pub value: String,
    /// Trend annotation, e.g. "(-6.7%)"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trend: Option<String>,
}

impl KpiMetric {
    /// Create a metric.
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            trend: None,
        }
    }

    /// Attach a trend annotation.
    pub fn with_trend(mut self, trend: impl Into<String>) -> Self {
        self.trend = Some(trend.into());
        self
    }
}

/// Pre-computed predictions shown in the "Predictive Insights" section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictiveInsights {
    /// Forecast demand per day, starting tomorrow
    #[serde(default)]
    pub inventory_forecast: Vec<f64>,
    /// Routes at risk of delay, already phrased for the report
    #[serde(default)]
    pub shipment_delays: Vec<String>,
    /// Supplier alerts, already phrased for the report
    #[serde(default)]
    pub supplier_alerts: Vec<String>,
}

impl PredictiveInsights {
    /// Whether there is nothing to report.
    pub fn is_empty(&self) -> bool {
        self.inventory_forecast.is_empty()
            && self.shipment_delays.is_empty()
            && self.supplier_alerts.is_empty()
    }

    /// Forecast values joined with commas, rounded to whole units.
    pub fn forecast_line(&self) -> String {
        self.inventory_forecast
            .iter()
            .map(|v| format!("{:.0}", v))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Everything one report is drawn from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplyChainData {
    /// Introductory paragraph
    pub overview: String,
    /// Headline KPIs
    #[serde(default)]
    pub metrics: Vec<KpiMetric>,
    /// Supplier performance
    #[serde(default)]
    pub suppliers: Vec<Supplier>,
    /// Shipment tracking
    #[serde(default)]
    pub shipments: Vec<ShipmentStatus>,
    /// Predictions
    #[serde(default)]
    pub insights: PredictiveInsights,
}

impl SupplyChainData {
    /// The fixed figures of the reference dashboard report.
    pub fn sample() -> Self {
        let supplier = |id: &str, name: &str, location: &str, reliability: f64, lead_time: u32, cost: f64| Supplier {
            id: id.to_string(),
            name: name.to_string(),
            reliability,
            lead_time,
            cost_per_unit: cost,
            location: location.to_string(),
            past_orders: 0,
        };
        let shipment = |id: &str,
                        origin: &str,
                        destination: &str,
                        status: ShipmentState,
                        eta: &str,
                        delay: Option<u32>| {
            ShipmentStatus {
                id: id.to_string(),
                origin: origin.to_string(),
                destination: destination.to_string(),
                status,
                estimated_arrival: eta.to_string(),
                actual_arrival: None,
                delay,
            }
        };

        Self {
            overview: "This report summarizes key performance metrics, predictive insights, \
                       and supply chain optimization data for the observed period. \
                       It combines AI-powered forecasts with real-time data to assist \
                       decision-makers in improving efficiency."
                .to_string(),
            metrics: vec![
                KpiMetric::new("Order Fulfillment Rate", "91.3%").with_trend("(+5.9%)"),
                KpiMetric::new("Inventory Turnover", "5.21").with_trend("(-6.7%)"),
                KpiMetric::new("Supplier Reliability", "91.2%").with_trend("(+3.2%)"),
                KpiMetric::new("Cost Efficiency", "87.1%").with_trend("(-6.7%)"),
            ],
            suppliers: vec![
                supplier("1", "TechComponents Inc", "San Francisco, CA", 0.95, 5, 120.0),
                supplier("2", "Global Parts Ltd", "Shanghai, China", 0.88, 8, 95.0),
                supplier("3", "EuroSupply GmbH", "Munich, Germany", 0.92, 7, 110.0),
                supplier("4", "Pacific Logistics", "Singapore", 0.89, 6, 105.0),
            ],
            shipments: vec![
                shipment(
                    "1",
                    "San Francisco, CA",
                    "Austin, TX",
                    ShipmentState::InTransit,
                    "2024-03-25",
                    None,
                ),
                shipment(
                    "2",
                    "Shanghai, China",
                    "Los Angeles, CA",
                    ShipmentState::Delayed,
                    "2024-03-22",
                    Some(2),
                ),
                shipment(
                    "3",
                    "Munich, Germany",
                    "Paris, France",
                    ShipmentState::Delivered,
                    "2024-03-20",
                    None,
                ),
            ],
            insights: PredictiveInsights {
                inventory_forecast: vec![450.0, 460.0, 475.0, 480.0, 490.0, 500.0, 520.0],
                shipment_delays: vec!["Shanghai -> Los Angeles (High risk of delay)".to_string()],
                supplier_alerts: vec![
                    "Global Parts Ltd (88.0% reliability) flagged for review.".to_string(),
                ],
            },
        }
    }
}

/// "$120" for whole amounts, "$95.50" otherwise.
fn format_dollars(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("${:.0}", amount)
    } else {
        format!("${:.2}", amount)
    }
}

/// The part of a location before the first comma.
fn city(location: &str) -> &str {
    location.split(',').next().unwrap_or(location).trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supplier_row() {
        let data = SupplyChainData::sample();
        assert_eq!(
            data.suppliers[1].table_row(),
            [
                "Global Parts Ltd".to_string(),
                "Shanghai, China".to_string(),
                "88.0%".to_string(),
                "8 days".to_string(),
                "$95".to_string(),
            ]
        );
    }

    #[test]
    fn test_dashboard_supplier_json() {
        let json = r#"{
            "id": "1",
            "name": "TechComponents Inc",
            "reliability": 0.95,
            "leadTime": 5,
            "costPerUnit": 120,
            "location": "San Francisco, CA"
        }"#;
        let supplier: Supplier = serde_json::from_str(json).unwrap();
        assert_eq!(supplier.past_orders, 0);
        assert_eq!(supplier.table_row()[2], "95.0%");
        assert_eq!(supplier, SupplyChainData::sample().suppliers[0]);
    }

    #[test]
    fn test_shipment_row() {
        let data = SupplyChainData::sample();
        let delayed = &data.shipments[1];
        assert_eq!(delayed.route(), "Shanghai, China -> Los Angeles, CA");
        assert_eq!(delayed.short_route(), "Shanghai -> Los Angeles");
        assert_eq!(delayed.eta_label(), "2024-03-22 (Delayed by 2 days)");
        assert_eq!(data.shipments[0].table_row()[1], "In-transit");
    }

    #[test]
    fn test_format_dollars() {
        assert_eq!(format_dollars(120.0), "$120");
        assert_eq!(format_dollars(95.5), "$95.50");
    }

    #[test]
    fn test_forecast_line() {
        let insights = SupplyChainData::sample().insights;
        assert_eq!(insights.forecast_line(), "450, 460, 475, 480, 490, 500, 520");
        assert!(!insights.is_empty());
        assert!(PredictiveInsights::default().is_empty());
    }

    #[test]
    fn test_camel_case_json() {
        let json = r#"{
            "id": "s1",
            "origin": "Shanghai, China",
            "destination": "Los Angeles, CA",
            "status": "in-transit",
            "estimatedArrival": "2024-03-22"
        }"#;
        let shipment: ShipmentStatus = serde_json::from_str(json).unwrap();
        assert_eq!(shipment.status, ShipmentState::InTransit);
        assert_eq!(shipment.delay, None);

        let supplier = serde_json::to_string(&SupplyChainData::sample().suppliers[0]).unwrap();
        assert!(supplier.contains("\"leadTime\":5"));
        assert!(supplier.contains("\"costPerUnit\":120.0"));
    }

    #[test]
    fn test_sample_round_trips_through_json() {
        let data = SupplyChainData::sample();
        let json = serde_json::to_string(&data).unwrap();
        let back: SupplyChainData = serde_json::from_str(&json).unwrap();
        assert_eq!(back, data);
    }
}
