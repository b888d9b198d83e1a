//! Hedged vs. unhedged outcome for a single lot.
//!
//!   hedged_revenue   = lock_price      * quantity
//!   unhedged_revenue = predicted_price * quantity
//!   cost basis       = current_price   * quantity
//!   difference       = unhedged_profit - hedged_profit
//!                    = (predicted_price - lock_price) * quantity
//!
//! Pure arithmetic. Sign and magnitude of inputs are not checked; the only
//! validation is that the form supplied both numbers.

use crate::errors::DashboardResult;
use crate::form::{FormNumber, RequiredFields};
use crate::market::forecast::CommodityQuote;
use crate::market::Commodity;

/// Raw simulator form.
#[derive(Debug, Clone, Default, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationRequest {
    pub commodity: Option<String>,
    pub quantity: Option<FormNumber>,
    pub lock_price: Option<FormNumber>,
}

/// Validated simulator input.
#[derive(Debug, Clone, Copy)]
pub struct SimulationInput {
    pub commodity: Commodity,
    pub quantity: f64,
    pub lock_price: f64,
}

impl SimulationInput {
    pub fn from_request(req: &SimulationRequest) -> DashboardResult<Self> {
        let commodity = match req.commodity.as_deref().map(str::trim) {
            Some(s) if !s.is_empty() => s.parse::<Commodity>()?,
            _ => Commodity::default(),
        };

        let mut fields = RequiredFields::new("missing inputs");
        let quantity = fields.number("quantity", req.quantity.as_ref())?;
        let lock_price = fields.number("lockPrice", req.lock_price.as_ref())?;
        fields.finish()?;

        Ok(Self {
            commodity,
            quantity,
            lock_price,
        })
    }
}

/// The five derived numbers. Stack-allocated.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HedgeOutcome {
    pub hedged_revenue: f64,
    pub unhedged_revenue: f64,
    pub hedged_profit: f64,
    pub unhedged_profit: f64,
    pub difference: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum Scenario {
    Hedged,
    Unhedged,
}

#[derive(Debug, Clone, Copy, serde::Serialize)]
pub struct ScenarioRow {
    pub scenario: Scenario,
    pub revenue: f64,
    pub profit: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    /// Prediction above the lock price: staying open pays if it holds
    StayUnhedged,
    /// Locking protects against the price falling short of the prediction
    Hedge,
}

impl Recommendation {
    pub fn from_difference(difference: f64) -> Self {
        if difference > 0.0 {
            Self::StayUnhedged
        } else {
            Self::Hedge
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::StayUnhedged => "Unhedged strategy yields better returns if prediction holds",
            Self::Hedge => "Hedged strategy protects against price drops",
        }
    }
}

#[derive(Debug, Clone, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationResult {
    pub commodity: Commodity,
    pub name: &'static str,
    pub quantity: f64,
    pub locked_price: f64,
    pub current_price: f64,
    pub predicted_price: f64,
    #[serde(flatten)]
    pub outcome: HedgeOutcome,
    pub comparison: [ScenarioRow; 2],
    pub recommendation: Recommendation,
    pub message: &'static str,
}

/// Compute the outcome from raw prices. Pure function.
#[inline]
pub fn compute_outcome(quantity: f64, lock_price: f64, current_price: f64, predicted_price: f64) -> HedgeOutcome {
    let hedged_revenue = lock_price * quantity;
    let unhedged_revenue = predicted_price * quantity;
    let cost_basis = current_price * quantity;
    let hedged_profit = hedged_revenue - cost_basis;
    let unhedged_profit = unhedged_revenue - cost_basis;

    HedgeOutcome {
        hedged_revenue,
        unhedged_revenue,
        hedged_profit,
        unhedged_profit,
        difference: unhedged_profit - hedged_profit,
    }
}

/// Run a simulation against the commodity's reference quote.
pub fn simulate(quote: &CommodityQuote, input: &SimulationInput) -> SimulationResult {
    let outcome = compute_outcome(
        input.quantity,
        input.lock_price,
        quote.current_price,
        quote.predicted_price,
    );
    let recommendation = Recommendation::from_difference(outcome.difference);

    SimulationResult {
        commodity: quote.commodity,
        name: quote.name,
        quantity: input.quantity,
        locked_price: input.lock_price,
        current_price: quote.current_price,
        predicted_price: quote.predicted_price,
        outcome,
        comparison: [
            ScenarioRow {
                scenario: Scenario::Hedged,
                revenue: outcome.hedged_revenue,
                profit: outcome.hedged_profit,
            },
            ScenarioRow {
                scenario: Scenario::Unhedged,
                revenue: outcome.unhedged_revenue,
                profit: outcome.unhedged_profit,
            },
        ],
        recommendation,
        message: recommendation.message(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::DashboardError;
    use crate::market::forecast;

    fn request(quantity: Option<FormNumber>, lock_price: Option<FormNumber>) -> SimulationRequest {
        SimulationRequest {
            commodity: Some("mustard".into()),
            quantity,
            lock_price,
        }
    }

    #[test]
    fn test_mustard_worked_example() {
        let o = compute_outcome(100.0, 5600.0, 5650.0, 5820.0);
        assert_eq!(o.hedged_revenue, 560_000.0);
        assert_eq!(o.hedged_profit, -5_000.0);
        assert_eq!(o.unhedged_revenue, 582_000.0);
        assert_eq!(o.unhedged_profit, 17_000.0);
        assert_eq!(o.difference, 22_000.0);
    }

    #[test]
    fn test_difference_is_price_gap_times_quantity() {
        let cases = [
            (100.0, 5600.0, 5650.0, 5820.0),
            (37.5, 4300.0, 4280.0, 4450.0),
            (1.0, 7000.0, 6850.0, 6920.0),
            (250.0, 6120.0, 6120.0, 6280.0),
            (0.25, 5000.0, 0.0, 5100.0),
        ];
        for (q, lock, current, predicted) in cases {
            let o = compute_outcome(q, lock, current, predicted);
            let expected = (predicted - lock) * q;
            assert!(
                (o.difference - expected).abs() < 1e-6,
                "q={q} lock={lock}: {} != {expected}",
                o.difference
            );
        }
    }

    #[test]
    fn test_lock_at_prediction_is_neutral() {
        let o = compute_outcome(80.0, 6280.0, 6120.0, 6280.0);
        assert_eq!(o.difference, 0.0);
        assert_eq!(o.hedged_profit, o.unhedged_profit);
        assert_eq!(Recommendation::from_difference(o.difference), Recommendation::Hedge);
    }

    #[test]
    fn test_simulate_uses_reference_quote() {
        let quote = forecast::quote(Commodity::Mustard);
        let input = SimulationInput::from_request(&request(
            Some(FormNumber::from("100")),
            Some(FormNumber::from(5600.0)),
        ))
        .unwrap();
        let result = simulate(&quote, &input);
        assert_eq!(result.outcome.difference, 22_000.0);
        assert_eq!(result.recommendation, Recommendation::StayUnhedged);
        assert_eq!(result.comparison[0].scenario, Scenario::Hedged);
        assert_eq!(result.comparison[1].revenue, 582_000.0);
    }

    #[test]
    fn test_lock_above_prediction_recommends_hedge() {
        let quote = forecast::quote(Commodity::Sunflower);
        let input = SimulationInput {
            commodity: Commodity::Sunflower,
            quantity: 10.0,
            lock_price: 7000.0,
        };
        let result = simulate(&quote, &input);
        assert_eq!(result.outcome.difference, -800.0);
        assert_eq!(result.recommendation, Recommendation::Hedge);
    }

    #[test]
    fn test_missing_inputs_rejected() {
        let err = SimulationInput::from_request(&request(Some(FormNumber::from("100")), None)).unwrap_err();
        assert!(matches!(err, DashboardError::Validation(_)));
        assert!(err.to_string().contains("lockPrice"));

        let err = SimulationInput::from_request(&request(Some(FormNumber::from("")), Some(FormNumber::from("")))).unwrap_err();
        assert_eq!(err.to_string(), "missing inputs: quantity, lockPrice");
    }

    #[test]
    fn test_negative_quantity_passes_through() {
        let input = SimulationInput::from_request(&request(
            Some(FormNumber::from(-10.0)),
            Some(FormNumber::from(5600.0)),
        ))
        .unwrap();
        assert_eq!(input.quantity, -10.0);
    }

    #[test]
    fn test_commodity_defaults_and_unknown_rejected() {
        let mut req = request(Some(FormNumber::from(1.0)), Some(FormNumber::from(1.0)));
        req.commodity = None;
        assert_eq!(SimulationInput::from_request(&req).unwrap().commodity, Commodity::Mustard);

        req.commodity = Some("palm".into());
        assert!(matches!(
            SimulationInput::from_request(&req),
            Err(DashboardError::UnknownCommodity(_))
        ));
    }
}
