//! Fixed reference tables backing the generators.
//!
//! Everything here is static data: the product catalog with its
//! category assignments, the per-category price and margin bands, and the
//! 50-entry stock catalog. The generators only ever read these tables, so
//! they are plain consts rather than anything loaded at runtime.

/// Product category, the key for the price and margin bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Computers,
    Peripherals,
    MobileDevices,
    AudioVideo,
    Networking,
    Storage,
    Accessories,
    Wearables,
    Furniture,
    OfficeEquipment,
}

impl Category {
    /// Display name used for the `Category` column.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Computers => "Computers",
            Self::Peripherals => "Peripherals",
            Self::MobileDevices => "Mobile Devices",
            Self::AudioVideo => "Audio/Video",
            Self::Networking => "Networking",
            Self::Storage => "Storage",
            Self::Accessories => "Accessories",
            Self::Wearables => "Wearables",
            Self::Furniture => "Furniture",
            Self::OfficeEquipment => "Office Equipment",
        }
    }

    /// Unit-price band in dollars. Peripherals, accessories and office
    /// equipment share the low-end band, so there are 8 distinct ranges.
    #[must_use]
    pub const fn price_range(self) -> (f64, f64) {
        match self {
            Self::Computers => (500.0, 2000.0),
            Self::MobileDevices => (200.0, 1200.0),
            Self::AudioVideo => (50.0, 500.0),
            Self::Networking => (100.0, 400.0),
            Self::Storage => (80.0, 300.0),
            Self::Wearables => (100.0, 600.0),
            Self::Furniture => (200.0, 800.0),
            Self::Peripherals | Self::Accessories | Self::OfficeEquipment => (20.0, 200.0),
        }
    }

    /// Profit-margin band as a fraction of revenue, in 3 tiers: hardware
    /// runs thin, audio and wearables mid, everything else high.
    #[must_use]
    pub const fn margin_range(self) -> (f64, f64) {
        match self {
            Self::Computers | Self::MobileDevices => (0.15, 0.35),
            Self::AudioVideo | Self::Wearables => (0.25, 0.45),
            Self::Peripherals
            | Self::Networking
            | Self::Storage
            | Self::Accessories
            | Self::Furniture
            | Self::OfficeEquipment => (0.30, 0.60),
        }
    }
}

/// Product catalog with each product's fixed category.
pub const PRODUCTS: [(&str, Category); 20] = [
    ("Laptop Pro", Category::Computers),
    ("Desktop Elite", Category::Computers),
    ("Monitor 4K", Category::Peripherals),
    ("Wireless Mouse", Category::Peripherals),
    ("Mechanical Keyboard", Category::Peripherals),
    ("Tablet Air", Category::MobileDevices),
    ("Smartphone X", Category::MobileDevices),
    ("Headphones Premium", Category::AudioVideo),
    ("Webcam HD", Category::AudioVideo),
    ("Speaker Set", Category::AudioVideo),
    ("Router WiFi 6", Category::Networking),
    ("External SSD", Category::Storage),
    ("USB Hub", Category::Accessories),
    ("Cable HDMI", Category::Accessories),
    ("Power Bank", Category::Accessories),
    ("Smart Watch", Category::Wearables),
    ("Fitness Tracker", Category::Wearables),
    ("Gaming Chair", Category::Furniture),
    ("Desk Lamp LED", Category::Furniture),
    ("Document Scanner", Category::OfficeEquipment),
];

pub const REGIONS: [&str; 5] = ["North", "South", "East", "West", "Central"];

pub const SALES_REPS: [&str; 10] = [
    "Alice Johnson",
    "Bob Smith",
    "Carol Davis",
    "David Wilson",
    "Emma Brown",
    "Frank Miller",
    "Grace Lee",
    "Henry Taylor",
    "Iris Chen",
    "Jack Anderson",
];

/// Order quantities and their sampling weights. The weights sum to 1.0 and
/// skew heavily towards small orders.
pub const QUANTITY_CHOICES: [u32; 7] = [1, 2, 3, 4, 5, 10, 20];
pub const QUANTITY_WEIGHTS: [f64; 7] = [0.40, 0.25, 0.15, 0.10, 0.05, 0.03, 0.02];

/// One entry in the fixed stock catalog.
#[derive(Debug, Clone, Copy)]
pub struct Listing {
    pub symbol: &'static str,
    pub company: &'static str,
    pub sector: &'static str,
    /// Reference price the snapshot fields are derived from, in dollars.
    pub base_price: f64,
}

const fn listing(
    symbol: &'static str,
    company: &'static str,
    sector: &'static str,
    base_price: f64,
) -> Listing {
    Listing {
        symbol,
        company,
        sector,
        base_price,
    }
}

/// The 50 stocks the finance generator draws from, in catalog order.
/// Requests for more than 50 records truncate to this table.
pub const STOCKS: [Listing; 50] = [
    listing("AAPL", "Apple Inc.", "Technology", 150.0),
    listing("GOOGL", "Alphabet Inc.", "Technology", 2800.0),
    listing("MSFT", "Microsoft Corp.", "Technology", 300.0),
    listing("AMZN", "Amazon.com Inc.", "Consumer Discretionary", 3200.0),
    listing("TSLA", "Tesla Inc.", "Consumer Discretionary", 200.0),
    listing("META", "Meta Platforms", "Technology", 320.0),
    listing("NVDA", "NVIDIA Corp.", "Technology", 450.0),
    listing("NFLX", "Netflix Inc.", "Communication Services", 400.0),
    listing("ADBE", "Adobe Inc.", "Technology", 500.0),
    listing("CRM", "Salesforce Inc.", "Technology", 180.0),
    listing("ORCL", "Oracle Corp.", "Technology", 80.0),
    listing("IBM", "IBM Corp.", "Technology", 130.0),
    listing("INTC", "Intel Corp.", "Technology", 50.0),
    listing("AMD", "AMD Inc.", "Technology", 90.0),
    listing("QCOM", "Qualcomm Inc.", "Technology", 150.0),
    listing("UBER", "Uber Technologies", "Technology", 40.0),
    listing("LYFT", "Lyft Inc.", "Technology", 15.0),
    listing("SNAP", "Snap Inc.", "Communication Services", 25.0),
    listing("TWTR", "Twitter Inc.", "Communication Services", 45.0),
    listing("SQ", "Block Inc.", "Financial Services", 80.0),
    listing("PYPL", "PayPal Holdings", "Financial Services", 90.0),
    listing("V", "Visa Inc.", "Financial Services", 220.0),
    listing("MA", "Mastercard Inc.", "Financial Services", 350.0),
    listing("JPM", "JPMorgan Chase", "Financial Services", 140.0),
    listing("GS", "Goldman Sachs", "Financial Services", 350.0),
    listing("MS", "Morgan Stanley", "Financial Services", 85.0),
    listing("BAC", "Bank of America", "Financial Services", 35.0),
    listing("WFC", "Wells Fargo", "Financial Services", 45.0),
    listing("C", "Citigroup Inc.", "Financial Services", 50.0),
    listing("AXP", "American Express", "Financial Services", 160.0),
    listing("KO", "Coca-Cola Co.", "Consumer Staples", 60.0),
    listing("PEP", "PepsiCo Inc.", "Consumer Staples", 170.0),
    listing("MCD", "McDonald's Corp.", "Consumer Discretionary", 250.0),
    listing("SBUX", "Starbucks Corp.", "Consumer Discretionary", 100.0),
    listing("NKE", "Nike Inc.", "Consumer Discretionary", 120.0),
    listing("DIS", "Walt Disney Co.", "Communication Services", 100.0),
    listing("CMCSA", "Comcast Corp.", "Communication Services", 45.0),
    listing("VZ", "Verizon Comm.", "Communication Services", 40.0),
    listing("T", "AT&T Inc.", "Communication Services", 20.0),
    listing("TMUS", "T-Mobile US", "Communication Services", 120.0),
    listing("JNJ", "Johnson & Johnson", "Healthcare", 170.0),
    listing("PFE", "Pfizer Inc.", "Healthcare", 50.0),
    listing("MRK", "Merck & Co.", "Healthcare", 90.0),
    listing("ABBV", "AbbVie Inc.", "Healthcare", 140.0),
    listing("BMY", "Bristol Myers", "Healthcare", 65.0),
    listing("LLY", "Eli Lilly", "Healthcare", 310.0),
    listing("UNH", "UnitedHealth", "Healthcare", 480.0),
    listing("CVS", "CVS Health", "Healthcare", 95.0),
    listing("WMT", "Walmart Inc.", "Consumer Staples", 150.0),
    listing("TGT", "Target Corp.", "Consumer Discretionary", 220.0),
];
