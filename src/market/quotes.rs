//! Dashboard reference data: quote cards, price series, volume,
//! volatility, spread and activity tables. Everything here is static; views are assembled on
//! request and never mutated.

use super::{percent_change, Commodity, PRICE_UNIT};

/// One dashboard card.
#[derive(Debug, Clone, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketQuote {
    pub commodity: Commodity,
    pub name: &'static str,
    pub price: f64,
    /// Day-on-day change in percent
    pub change: f64,
    pub unit: &'static str,
    pub sparkline: [f64; 6],
    /// Change across the whole sparkline window
    pub window_change: f64,
}

/// A row of a per-commodity chart, keyed by a date or week label.
#[derive(Debug, Clone, Copy, serde::Serialize)]
pub struct SeriesRow {
    pub label: &'static str,
    pub mustard: f64,
    pub soybean: f64,
    pub groundnut: f64,
    pub sunflower: f64,
}

impl SeriesRow {
    const fn new(label: &'static str, v: [f64; 4]) -> Self {
        Self {
            label,
            mustard: v[0],
            soybean: v[1],
            groundnut: v[2],
            sunflower: v[3],
        }
    }
}

#[derive(Debug, Clone, Copy, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VolatilityRow {
    pub commodity: Commodity,
    /// Percent
    pub volatility: f64,
    pub avg_price: f64,
    pub price_range: f64,
}

#[derive(Debug, Clone, Copy, serde::Serialize)]
pub struct MarketShare {
    pub commodity: Commodity,
    /// Percent of traded volume
    pub value: f64,
}

/// Weekly high/low across all four oilseeds, with the cross-commodity average.
#[derive(Debug, Clone, Copy, serde::Serialize)]
pub struct PriceSpread {
    pub week: &'static str,
    pub high: f64,
    pub low: f64,
    pub avg: f64,
}

#[derive(Debug, Clone, Copy, serde::Serialize)]
pub struct TradingDay {
    pub day: &'static str,
    pub transactions: u32,
    /// Quintals
    pub volume: f64,
}

/// One axis of the market performance radar. Scores out of `full_mark`.
#[derive(Debug, Clone, Copy, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceMetric {
    pub metric: &'static str,
    pub value: u8,
    pub full_mark: u8,
}

#[derive(Debug, Clone, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub quotes: Vec<MarketQuote>,
    pub spot: &'static [SeriesRow],
    pub futures: &'static [SeriesRow],
    pub volume: &'static [SeriesRow],
    pub volatility: &'static [VolatilityRow],
    pub market_share: &'static [MarketShare],
    pub price_spread: &'static [PriceSpread],
    pub trading_activity: &'static [TradingDay],
    pub performance: &'static [PerformanceMetric],
}

// (commodity, price, day change %, sparkline)
const CARDS: [(Commodity, f64, f64, [f64; 6]); 4] = [
    (Commodity::Mustard, 5650.0, 2.3, [5500.0, 5520.0, 5480.0, 5600.0, 5580.0, 5650.0]),
    (Commodity::Soybean, 4280.0, -1.2, [4350.0, 4340.0, 4300.0, 4290.0, 4300.0, 4280.0]),
    (Commodity::Groundnut, 6120.0, 3.5, [5900.0, 5950.0, 6000.0, 6080.0, 6100.0, 6120.0]),
    (Commodity::Sunflower, 6850.0, -0.8, [6900.0, 6880.0, 6870.0, 6860.0, 6840.0, 6850.0]),
];

pub static SPOT: [SeriesRow; 25] = [
    SeriesRow::new("Jan 1", [5500.0, 4200.0, 6000.0, 6900.0]),
    SeriesRow::new("Jan 2", [5560.0, 4190.0, 6080.0, 6920.0]),
    SeriesRow::new("Jan 3", [5520.0, 4210.0, 6030.0, 6960.0]),
    SeriesRow::new("Jan 4", [5630.0, 4180.0, 6120.0, 7000.0]),
    SeriesRow::new("Jan 5", [5690.0, 4155.0, 6060.0, 6940.0]),
    SeriesRow::new("Jan 6", [5740.0, 4130.0, 6130.0, 7020.0]),
    SeriesRow::new("Jan 7", [5660.0, 4170.0, 6100.0, 6980.0]),
    SeriesRow::new("Jan 8", [5790.0, 4120.0, 6190.0, 7070.0]),
    SeriesRow::new("Jan 9", [5850.0, 4090.0, 6250.0, 7050.0]),
    SeriesRow::new("Jan 10", [5780.0, 4140.0, 6160.0, 7090.0]),
    SeriesRow::new("Jan 11", [5920.0, 4110.0, 6300.0, 7130.0]),
    SeriesRow::new("Jan 12", [5960.0, 4090.0, 6280.0, 7100.0]),
    SeriesRow::new("Jan 13", [5890.0, 4100.0, 6330.0, 7160.0]),
    SeriesRow::new("Jan 14", [6030.0, 4060.0, 6370.0, 7190.0]),
    SeriesRow::new("Jan 15", [6080.0, 4040.0, 6420.0, 7220.0]),
    SeriesRow::new("Jan 16", [6000.0, 4065.0, 6340.0, 7170.0]),
    SeriesRow::new("Jan 17", [6120.0, 4010.0, 6460.0, 7240.0]),
    SeriesRow::new("Jan 18", [6180.0, 3985.0, 6520.0, 7300.0]),
    SeriesRow::new("Jan 19", [6100.0, 4020.0, 6440.0, 7280.0]),
    SeriesRow::new("Jan 20", [6220.0, 3970.0, 6550.0, 7350.0]),
    SeriesRow::new("Jan 21", [6280.0, 3945.0, 6610.0, 7420.0]),
    SeriesRow::new("Jan 22", [6200.0, 3980.0, 6530.0, 7390.0]),
    SeriesRow::new("Jan 23", [6330.0, 3930.0, 6660.0, 7460.0]),
    SeriesRow::new("Jan 24", [6400.0, 3890.0, 6720.0, 7510.0]),
    SeriesRow::new("Jan 25", [6520.0, 3870.0, 6770.0, 7530.0]),
];

pub static FUTURES: [SeriesRow; 25] = [
    SeriesRow::new("Feb 1", [6400.0, 3920.0, 6600.0, 7350.0]),
    SeriesRow::new("Feb 2", [6480.0, 3895.0, 6690.0, 7390.0]),
    SeriesRow::new("Feb 3", [6430.0, 3950.0, 6620.0, 7340.0]),
    SeriesRow::new("Feb 4", [6530.0, 3880.0, 6720.0, 7420.0]),
    SeriesRow::new("Feb 5", [6580.0, 3860.0, 6760.0, 7450.0]),
    SeriesRow::new("Feb 6", [6500.0, 3880.0, 6690.0, 7420.0]),
    SeriesRow::new("Feb 7", [6630.0, 3850.0, 6820.0, 7480.0]),
    SeriesRow::new("Feb 8", [6700.0, 3830.0, 6900.0, 7530.0]),
    SeriesRow::new("Feb 9", [6650.0, 3845.0, 6850.0, 7510.0]),
    SeriesRow::new("Feb 10", [6750.0, 3810.0, 6930.0, 7560.0]),
    SeriesRow::new("Feb 11", [6820.0, 3790.0, 6980.0, 7600.0]),
    SeriesRow::new("Feb 12", [6760.0, 3820.0, 6920.0, 7570.0]),
    SeriesRow::new("Feb 13", [6890.0, 3770.0, 7050.0, 7650.0]),
    SeriesRow::new("Feb 14", [6970.0, 3750.0, 7100.0, 7700.0]),
    SeriesRow::new("Feb 15", [6920.0, 3760.0, 7040.0, 7670.0]),
    SeriesRow::new("Feb 16", [7050.0, 3730.0, 7160.0, 7730.0]),
    SeriesRow::new("Feb 17", [7130.0, 3700.0, 7230.0, 7790.0]),
    SeriesRow::new("Feb 18", [7070.0, 3720.0, 7180.0, 7760.0]),
    SeriesRow::new("Feb 19", [7190.0, 3680.0, 7290.0, 7810.0]),
    SeriesRow::new("Feb 20", [7250.0, 3660.0, 7350.0, 7870.0]),
    SeriesRow::new("Feb 21", [7180.0, 3680.0, 7280.0, 7830.0]),
    SeriesRow::new("Feb 22", [7300.0, 3640.0, 7400.0, 7910.0]),
    SeriesRow::new("Feb 23", [7400.0, 3620.0, 7500.0, 7960.0]),
    SeriesRow::new("Feb 24", [7350.0, 3650.0, 7450.0, 7940.0]),
    SeriesRow::new("Feb 25", [7450.0, 3600.0, 7550.0, 8010.0]),
];

/// Weekly traded volume in quintals
pub static VOLUME: [SeriesRow; 6] = [
    SeriesRow::new("Jan 1", [1200.0, 2100.0, 850.0, 950.0]),
    SeriesRow::new("Jan 8", [1350.0, 2250.0, 920.0, 1020.0]),
    SeriesRow::new("Jan 15", [1180.0, 2050.0, 890.0, 980.0]),
    SeriesRow::new("Jan 22", [1520.0, 2400.0, 1100.0, 1150.0]),
    SeriesRow::new("Jan 29", [1450.0, 2300.0, 980.0, 1080.0]),
    SeriesRow::new("Feb 5", [1680.0, 2550.0, 1200.0, 1250.0]),
];

pub static VOLATILITY: [VolatilityRow; 4] = [
    VolatilityRow { commodity: Commodity::Mustard, volatility: 3.2, avg_price: 5565.0, price_range: 170.0 },
    VolatilityRow { commodity: Commodity::Soybean, volatility: 2.8, avg_price: 4295.0, price_range: 120.0 },
    VolatilityRow { commodity: Commodity::Groundnut, volatility: 4.1, avg_price: 6008.0, price_range: 220.0 },
    VolatilityRow { commodity: Commodity::Sunflower, volatility: 1.9, avg_price: 6867.0, price_range: 60.0 },
];

pub static MARKET_SHARE: [MarketShare; 4] = [
    MarketShare { commodity: Commodity::Soybean, value: 42.0 },
    MarketShare { commodity: Commodity::Mustard, value: 28.0 },
    MarketShare { commodity: Commodity::Groundnut, value: 18.0 },
    MarketShare { commodity: Commodity::Sunflower, value: 12.0 },
];

pub static PRICE_SPREAD: [PriceSpread; 5] = [
    PriceSpread { week: "Week 1", high: 6950.0, low: 4280.0, avg: 5650.0 },
    PriceSpread { week: "Week 2", high: 6920.0, low: 4260.0, avg: 5625.0 },
    PriceSpread { week: "Week 3", high: 6900.0, low: 4300.0, avg: 5663.0 },
    PriceSpread { week: "Week 4", high: 6880.0, low: 4270.0, avg: 5708.0 },
    PriceSpread { week: "Week 5", high: 6860.0, low: 4280.0, avg: 5718.0 },
];

pub static TRADING_ACTIVITY: [TradingDay; 6] = [
    TradingDay { day: "Mon", transactions: 145, volume: 8500.0 },
    TradingDay { day: "Tue", transactions: 168, volume: 9200.0 },
    TradingDay { day: "Wed", transactions: 142, volume: 8100.0 },
    TradingDay { day: "Thu", transactions: 189, volume: 10500.0 },
    TradingDay { day: "Fri", transactions: 203, volume: 11200.0 },
    TradingDay { day: "Sat", transactions: 95, volume: 5400.0 },
];

const fn metric(metric: &'static str, value: u8) -> PerformanceMetric {
    PerformanceMetric { metric, value, full_mark: 100 }
}

pub static PERFORMANCE: [PerformanceMetric; 5] = [
    metric("Price Stability", 78),
    metric("Liquidity", 85),
    metric("Volume", 72),
    metric("Market Depth", 68),
    metric("Volatility Control", 81),
];

pub fn market_quotes() -> Vec<MarketQuote> {
    CARDS
        .iter()
        .map(|&(commodity, price, change, sparkline)| MarketQuote {
            commodity,
            name: commodity.label(),
            price,
            change,
            unit: PRICE_UNIT,
            sparkline,
            window_change: percent_change(sparkline[0], sparkline[5]),
        })
        .collect()
}

pub fn dashboard_view() -> DashboardView {
    DashboardView {
        quotes: market_quotes(),
        spot: &SPOT,
        futures: &FUTURES,
        volume: &VOLUME,
        volatility: &VOLATILITY,
        market_share: &MARKET_SHARE,
        price_spread: &PRICE_SPREAD,
        trading_activity: &TRADING_ACTIVITY,
        performance: &PERFORMANCE,
    }
}
