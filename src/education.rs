//! Static training content for the education page.

#[derive(Debug, Clone, Copy, serde::Serialize)]
pub struct Topic {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Debug, Clone, Copy, serde::Serialize)]
pub struct Section {
    pub title: &'static str,
    pub topics: &'static [Topic],
}

#[derive(Debug, Clone, Copy, serde::Serialize)]
pub struct Practice {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationContent {
    pub sections: &'static [Section],
    pub best_practices: &'static [Practice],
    pub disclaimers: &'static [Practice],
}

const fn topic(question: &'static str, answer: &'static str) -> Topic {
    Topic { question, answer }
}

const fn practice(title: &'static str, description: &'static str) -> Practice {
    Practice { title, description }
}

static SECTIONS: [Section; 4] = [
    Section {
        title: "Hedging 101",
        topics: &[
            topic(
                "What is Hedging?",
                "Hedging is a risk management strategy used to protect against unfavorable price movements. For farmers, it means locking in a selling price before harvest to avoid losses if market prices drop.",
            ),
            topic(
                "How Do Futures Work?",
                "Futures contracts allow you to agree on a price today for delivery in the future. Example: if you lock mustard at ₹5,500/quintal and prices drop to ₹5,200, you still get ₹5,500.",
            ),
            topic(
                "Why Does It Matter?",
                "Oilseed prices fluctuate due to weather, demand and global markets. Hedging stabilises income and helps plan finances, reducing the risk of selling at a loss.",
            ),
        ],
    },
    Section {
        title: "Forecasting Basics",
        topics: &[
            topic(
                "What is the Price Forecast?",
                "The forecast page shows a four-week price outlook for each oilseed with a confidence band. The bands on this platform are illustrative reference figures, not the output of a live model.",
            ),
            topic(
                "Understanding Confidence Bands",
                "The shaded area around a prediction is the likely price range. Wider bands mean more uncertainty, narrower bands a more confident outlook. Use the width to judge risk.",
            ),
            topic(
                "How to Use Forecasts?",
                "If the outlook points down, consider hedging. If it points up with low risk, you might skip hedging. Always compare hedged and unhedged scenarios in the simulator first.",
            ),
        ],
    },
    Section {
        title: "Digital Contracts",
        topics: &[
            topic(
                "What Does the Contract Form Do?",
                "It records the agreed commodity, quantity, price and expiry between a buyer and an FPO so both sides see the same terms.",
            ),
            topic(
                "What is the Contract Reference?",
                "Each contract gets a random reference code for lookup. It is a simulation label: it is not a cryptographic hash and nothing is written to a blockchain.",
            ),
            topic(
                "Are Contracts Stored?",
                "Contracts are kept in server memory only and are cleared when the service restarts.",
            ),
        ],
    },
    Section {
        title: "Reading Your History",
        topics: &[
            topic(
                "What is Net P&L?",
                "The profit or loss recorded for each past decision, summed over time in the cumulative chart and per month in the monthly breakdown.",
            ),
            topic(
                "What is the Win Rate?",
                "The share of past decisions that ended in profit. A decision that broke even counts as a loss.",
            ),
        ],
    },
];

static BEST_PRACTICES: [Practice; 4] = [
    practice("Monitor Forecasts Weekly", "Check predictions regularly to spot trend changes early"),
    practice("Diversify Hedging", "Don't hedge 100% - keep some unhedged for upside potential"),
    practice("Understand Risk Levels", "High risk = consider hedging. Low risk = may skip hedging"),
    practice("Keep Contract References", "Save the reference of every contract you agree to"),
];

static DISCLAIMERS: [Practice; 4] = [
    practice("Simulation Only", "This platform does not execute real trades or handle money"),
    practice("Educational Purpose", "Forecasts are for learning and strategy testing, not financial advice"),
    practice("No Guarantees", "Predictions are estimates - actual prices may vary"),
    practice("Consult Experts", "For real hedging decisions, consult licensed commodity brokers or financial advisors"),
];

pub fn content() -> EducationContent {
    EducationContent {
        sections: &SECTIONS,
        best_practices: &BEST_PRACTICES,
        disclaimers: &DISCLAIMERS,
    }
}
