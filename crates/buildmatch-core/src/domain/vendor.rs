//! Vendor Entity and Vendor Sources
//!
//! Vendor listings are produced per service category by a `VendorSource`.
//! `MockVendorSource` stands in for a real matching service: three categories
//! have curated listings, every other label gets five synthetic vendors whose
//! attributes are a pure function of the label.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use super::entity::Entity;

/// Number of vendors listed per category
pub const VENDORS_PER_CATEGORY: usize = 5;

/// Locations assigned to generated vendors, by listing index
const GENERATED_LOCATIONS: [&str; VENDORS_PER_CATEGORY] =
    ["Downtown", "North District", "South Area", "East Side", "West End"];

/// A service provider listed under one category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vendor {
    pub id: String,
    pub name: String,
    /// 0.0 - 5.0
    pub rating: f64,
    pub reviews: u32,
    pub location: String,
    pub specialty: String,
    /// Price band label, e.g. "$2,000 - $5,000"
    pub avg_price: String,
    /// Delivery estimate label, e.g. "2-6 weeks"
    pub delivery_time: String,
    pub verified: bool,
}

impl Entity for Vendor {
    type Id = String;

    fn id(&self) -> Self::Id {
        self.id.clone()
    }
}

/// Anything that can list vendors for a service category.
///
/// Swap `MockVendorSource` for a search-backed implementation without
/// touching the wizard or ticket logic.
pub trait VendorSource: Send + Sync {
    /// All vendors listed for a category, in display order
    fn vendors_for(&self, category: &str) -> Vec<Vendor>;

    /// Look up one vendor of a category by ID
    fn find(&self, category: &str, vendor_id: &str) -> Option<Vendor> {
        self.vendors_for(category)
            .into_iter()
            .find(|v| v.id == vendor_id)
    }
}

/// Deterministic stand-in vendor source
#[derive(Debug, Clone, Copy, Default)]
pub struct MockVendorSource;

impl VendorSource for MockVendorSource {
    fn vendors_for(&self, category: &str) -> Vec<Vendor> {
        curated_vendors(category).unwrap_or_else(|| generate_vendors(category))
    }
}

/// Seed derived from a category label: sum of its UTF-16 code units
pub fn category_seed(label: &str) -> u64 {
    label.encode_utf16().map(u64::from).sum()
}

/// Lowercase the label and turn every whitespace run into '-'.
/// Edge whitespace is kept, so `" Lawyer"` slugs to `-lawyer`.
fn slug(label: &str) -> String {
    static WHITESPACE: OnceLock<Regex> = OnceLock::new();
    let whitespace = WHITESPACE.get_or_init(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));
    whitespace.replace_all(&label.to_lowercase(), "-").into_owned()
}

/// Generate the synthetic listing for a non-curated category.
///
/// Total over any text input; the same label always yields identical output.
pub fn generate_vendors(label: &str) -> Vec<Vendor> {
    let seed = category_seed(label);
    let slug = slug(label);

    (0..VENDORS_PER_CATEGORY)
        .map(|i| {
            let vendor_seed = seed + i as u64;
            Vendor {
                id: format!("{}-{}", slug, i + 1),
                name: format!("{} Pro {}", label, i + 1),
                rating: 4.5 + (vendor_seed % 4) as f64 * 0.1,
                reviews: 50 + (vendor_seed % 150) as u32,
                location: GENERATED_LOCATIONS[i].to_string(),
                specialty: format!("{} Services", label),
                avg_price: "$2,000 - $5,000".to_string(),
                delivery_time: "2-6 weeks".to_string(),
                verified: (vendor_seed % 10) > 3,
            }
        })
        .collect()
}

/// Categories with hand-picked listings
pub const CURATED_CATEGORIES: [&str; 3] = ["Real Estate", "Architecture Firm", "Construction"];

/// (id, name, rating, reviews, location, specialty, avg_price, delivery_time, verified)
type VendorRow = (&'static str, &'static str, f64, u32, &'static str, &'static str, &'static str, &'static str, bool);

const REAL_ESTATE: [VendorRow; VENDORS_PER_CATEGORY] = [
    ("1", "Prime Properties Group", 4.8, 127, "Downtown", "Land Development", "$2,500 - $5,000", "2-4 weeks", true),
    ("2", "BuildLand Solutions", 4.6, 89, "North District", "Residential Plots", "$3,000 - $6,000", "1-3 weeks", true),
    ("3", "Metro Land Advisors", 4.7, 203, "City Center", "Zoning & Permits", "$1,800 - $4,000", "3-6 weeks", false),
    ("4", "Urban Development Co", 4.5, 156, "East Side", "Commercial Land", "$4,000 - $8,000", "2-5 weeks", true),
    ("5", "Green Acres Realty", 4.9, 78, "Suburbs", "Eco-Friendly Lots", "$2,200 - $4,500", "1-4 weeks", true),
];

const ARCHITECTURE: [VendorRow; VENDORS_PER_CATEGORY] = [
    ("6", "Modern Design Studio", 4.9, 67, "Design District", "Contemporary Homes", "$15,000 - $30,000", "6-12 weeks", true),
    ("7", "Heritage Architects", 4.7, 134, "Historic Quarter", "Traditional Style", "$12,000 - $25,000", "8-14 weeks", true),
    ("8", "Eco Architecture Lab", 4.8, 92, "Green Valley", "Sustainable Design", "$18,000 - $35,000", "10-16 weeks", true),
    ("9", "Urban Planning Co", 4.6, 178, "Business District", "Multi-Family Units", "$20,000 - $40,000", "8-15 weeks", false),
    ("10", "Innovative Spaces", 4.8, 89, "Tech Hub", "Smart Homes", "$16,000 - $32,000", "7-13 weeks", true),
];

const CONSTRUCTION: [VendorRow; VENDORS_PER_CATEGORY] = [
    ("11", "Elite Builders Inc", 4.7, 234, "Industrial Zone", "Custom Homes", "$200 - $350/sqft", "16-24 weeks", true),
    ("12", "Precision Construction", 4.8, 189, "North Side", "High-End Residential", "$250 - $400/sqft", "18-26 weeks", true),
    ("13", "Rapid Build Solutions", 4.5, 298, "South District", "Fast Construction", "$180 - $280/sqft", "12-18 weeks", true),
    ("14", "Heritage Builders", 4.6, 167, "Old Town", "Traditional Methods", "$220 - $320/sqft", "20-28 weeks", false),
    ("15", "Green Build Co", 4.9, 145, "Eco District", "Sustainable Building", "$240 - $380/sqft", "18-25 weeks", true),
];

/// Fixed listing for a curated category, `None` for everything else
pub fn curated_vendors(category: &str) -> Option<Vec<Vendor>> {
    let rows = match category {
        "Real Estate" => &REAL_ESTATE,
        "Architecture Firm" => &ARCHITECTURE,
        "Construction" => &CONSTRUCTION,
        _ => return None,
    };

    Some(
        rows.iter()
            .map(|&(id, name, rating, reviews, location, specialty, avg_price, delivery_time, verified)| Vendor {
                id: id.to_string(),
                name: name.to_string(),
                rating,
                reviews,
                location: location.to_string(),
                specialty: specialty.to_string(),
                avg_price: avg_price.to_string(),
                delivery_time: delivery_time.to_string(),
                verified,
            })
            .collect(),
    )
}
