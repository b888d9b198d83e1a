use super::{percent_change, Commodity};

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Medium => write!(f, "medium"),
            Self::High => write!(f, "high"),
        }
    }
}

/// One week of the four-week forecast horizon with its confidence band.
#[derive(Debug, Clone, Copy, serde::Serialize)]
pub struct ForecastWeek {
    pub label: &'static str,
    /// Observed price, only known for the first week
    pub actual: Option<f64>,
    pub predicted: f64,
    pub lower: f64,
    pub upper: f64,
}

#[derive(Debug, Clone, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Forecast {
    pub commodity: Commodity,
    pub name: &'static str,
    pub current: f64,
    pub predicted: f64,
    pub range: [f64; 2],
    pub risk: RiskLevel,
    /// Percent
    pub confidence: u8,
    pub expected_change_pct: f64,
    pub weeks: [ForecastWeek; 4],
}

/// Reference pair the hedging simulator prices against.
#[derive(Debug, Clone, Copy, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommodityQuote {
    pub commodity: Commodity,
    pub name: &'static str,
    pub current_price: f64,
    pub predicted_price: f64,
}

struct ForecastRow {
    current: f64,
    predicted: f64,
    range: [f64; 2],
    risk: RiskLevel,
    confidence: u8,
    // (predicted, lower, upper) per week
    bands: [(f64, f64, f64); 4],
}

const WEEK_LABELS: [&str; 4] = ["Week 1", "Week 2", "Week 3", "Week 4"];

fn row(commodity: Commodity) -> ForecastRow {
    match commodity {
        Commodity::Mustard => ForecastRow {
            current: 5650.0,
            predicted: 5820.0,
            range: [5550.0, 6100.0],
            risk: RiskLevel::Medium,
            confidence: 78,
            bands: [
                (5680.0, 5600.0, 5760.0),
                (5720.0, 5620.0, 5820.0),
                (5780.0, 5640.0, 5920.0),
                (5820.0, 5550.0, 6100.0),
            ],
        },
        Commodity::Soybean => ForecastRow {
            current: 4280.0,
            predicted: 4450.0,
            range: [4200.0, 4700.0],
            risk: RiskLevel::High,
            confidence: 65,
            bands: [
                (4300.0, 4200.0, 4400.0),
                (4350.0, 4220.0, 4480.0),
                (4400.0, 4240.0, 4560.0),
                (4450.0, 4200.0, 4700.0),
            ],
        },
        Commodity::Groundnut => ForecastRow {
            current: 6120.0,
            predicted: 6280.0,
            range: [6050.0, 6510.0],
            risk: RiskLevel::Low,
            confidence: 85,
            bands: [
                (6150.0, 6080.0, 6220.0),
                (6190.0, 6100.0, 6280.0),
                (6230.0, 6120.0, 6340.0),
                (6280.0, 6050.0, 6510.0),
            ],
        },
        Commodity::Sunflower => ForecastRow {
            current: 6850.0,
            predicted: 6920.0,
            range: [6720.0, 7120.0],
            risk: RiskLevel::Medium,
            confidence: 72,
            bands: [
                (6870.0, 6790.0, 6950.0),
                (6890.0, 6780.0, 7000.0),
                (6910.0, 6760.0, 7060.0),
                (6920.0, 6720.0, 7120.0),
            ],
        },
    }
}

pub fn forecast(commodity: Commodity) -> Forecast {
    let r = row(commodity);
    let weeks = std::array::from_fn(|i| {
        let (predicted, lower, upper) = r.bands[i];
        ForecastWeek {
            label: WEEK_LABELS[i],
            actual: (i == 0).then_some(r.current),
            predicted,
            lower,
            upper,
        }
    });

    Forecast {
        commodity,
        name: commodity.label(),
        current: r.current,
        predicted: r.predicted,
        range: r.range,
        risk: r.risk,
        confidence: r.confidence,
        expected_change_pct: percent_change(r.current, r.predicted),
        weeks,
    }
}

pub fn quote(commodity: Commodity) -> CommodityQuote {
    let r = row(commodity);
    CommodityQuote {
        commodity,
        name: commodity.label(),
        current_price: r.current,
        predicted_price: r.predicted,
    }
}

pub fn all_quotes() -> Vec<CommodityQuote> {
    Commodity::ALL.into_iter().map(quote).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mustard_quote_matches_forecast() {
        let q = quote(Commodity::Mustard);
        assert_eq!(q.current_price, 5650.0);
        assert_eq!(q.predicted_price, 5820.0);
        let f = forecast(Commodity::Mustard);
        assert_eq!(f.predicted, q.predicted_price);
        assert_eq!(f.expected_change_pct, 3.0);
    }

    #[test]
    fn test_bands_contain_prediction() {
        for c in Commodity::ALL {
            let f = forecast(c);
            for w in f.weeks.iter() {
                assert!(
                    w.lower <= w.predicted && w.predicted <= w.upper,
                    "{c} {} band [{}, {}] excludes {}",
                    w.label, w.lower, w.upper, w.predicted
                );
            }
            assert_eq!(f.weeks[3].predicted, f.predicted, "{c} horizon should end at predicted");
        }
    }

    #[test]
    fn test_only_first_week_observed() {
        let f = forecast(Commodity::Soybean);
        assert_eq!(f.weeks[0].actual, Some(4280.0));
        assert!(f.weeks[1..].iter().all(|w| w.actual.is_none()));
        assert_eq!(f.risk, RiskLevel::High);
    }

    #[test]
    fn test_all_quotes_in_enum_order() {
        let quotes = all_quotes();
        let names: Vec<_> = quotes.iter().map(|q| q.name).collect();
        assert_eq!(names, vec!["Mustard", "Soybean", "Groundnut", "Sunflower"]);
    }
}
