pub mod forecast;
pub mod quotes;

use crate::errors::DashboardError;

pub const PRICE_UNIT: &str = "₹/quintal";

/// The four oilseeds covered by the dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Commodity {
    #[default]
    Mustard,
    Soybean,
    Groundnut,
    Sunflower,
}

impl Commodity {
    pub const ALL: [Commodity; 4] = [
        Commodity::Mustard,
        Commodity::Soybean,
        Commodity::Groundnut,
        Commodity::Sunflower,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            Self::Mustard => "mustard",
            Self::Soybean => "soybean",
            Self::Groundnut => "groundnut",
            Self::Sunflower => "sunflower",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Mustard => "Mustard",
            Self::Soybean => "Soybean",
            Self::Groundnut => "Groundnut",
            Self::Sunflower => "Sunflower",
        }
    }
}

impl std::fmt::Display for Commodity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.slug())
    }
}

impl std::str::FromStr for Commodity {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.slug().eq_ignore_ascii_case(needle))
            .ok_or_else(|| DashboardError::UnknownCommodity(needle.to_string()))
    }
}

/// Round to one decimal place, the precision every percentage is reported at.
#[inline]
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Percentage change from `from` to `to`, one decimal. Zero base yields 0.
#[inline]
pub fn percent_change(from: f64, to: f64) -> f64 {
    if from == 0.0 {
        return 0.0;
    }
    round1((to - from) / from * 100.0)
}

/// Rupee amount with Indian digit grouping (`12,34,567`). Whole amounts
/// drop the fraction, others keep two places.
pub fn format_inr(value: f64) -> String {
    let cents = (value.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let frac = cents % 100;

    let grouped = if whole.len() <= 3 {
        whole
    } else {
        let (head, tail) = whole.split_at(whole.len() - 3);
        let mut parts: Vec<&str> = Vec::new();
        let mut end = head.len();
        while end > 2 {
            parts.push(&head[end - 2..end]);
            end -= 2;
        }
        parts.push(&head[..end]);
        parts.reverse();
        format!("{},{}", parts.join(","), tail)
    };

    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
    if frac == 0 {
        format!("{sign}₹{grouped}")
    } else {
        format!("{sign}₹{grouped}.{frac:02}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("Mustard".parse::<Commodity>().unwrap(), Commodity::Mustard);
        assert_eq!(" soybean ".parse::<Commodity>().unwrap(), Commodity::Soybean);
        assert!(matches!(
            "palm".parse::<Commodity>(),
            Err(DashboardError::UnknownCommodity(_))
        ));
    }

    #[test]
    fn test_slug_roundtrips_through_serde() {
        let json = serde_json::to_string(&Commodity::Groundnut).unwrap();
        assert_eq!(json, "\"groundnut\"");
    }

    #[test]
    fn test_percent_change() {
        // mustard forecast: 5650 -> 5820
        assert_eq!(percent_change(5650.0, 5820.0), 3.0);
        assert_eq!(percent_change(4280.0, 4450.0), 4.0);
        assert_eq!(percent_change(100.0, 90.0), -10.0);
        assert_eq!(percent_change(0.0, 50.0), 0.0);
    }

    #[test]
    fn test_format_inr_grouping() {
        assert_eq!(format_inr(950.0), "₹950");
        assert_eq!(format_inr(5600.0), "₹5,600");
        assert_eq!(format_inr(560000.0), "₹5,60,000");
        assert_eq!(format_inr(12345678.0), "₹1,23,45,678");
        assert_eq!(format_inr(-5000.0), "-₹5,000");
        assert_eq!(format_inr(1234.5), "₹1,234.50");
    }
}
