//! Per-store metrics derived from one sales row. Everything here is pure.

use std::fmt;

use sales_report_parser::{columns, StoreRecord};

use crate::error::ParseError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Product {
    Product1,
    Product2,
    Product3,
    Other,
}

impl Product {
    /// Fixed iteration order. Ties in every ranking go to the earlier entry.
    pub const ALL: [Product; 4] = [
        Product::Product1,
        Product::Product2,
        Product::Product3,
        Product::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Product::Product1 => "Product 1",
            Product::Product2 => "Product 2",
            Product::Product3 => "Product 3",
            Product::Other => "Other",
        }
    }

    pub fn column(&self) -> &'static str {
        match self {
            Product::Product1 => columns::PRODUCT_1,
            Product::Product2 => columns::PRODUCT_2,
            Product::Product3 => columns::PRODUCT_3,
            Product::Other => columns::OTHER_PRODUCT,
        }
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Female,
    Male,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Female => "Female",
            Gender::Male => "Male",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Percentage share per product, in [`Product::ALL`] order. Shares are not
/// normalised and need not sum to 100.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProductShareSet {
    shares: [f64; 4],
}

impl ProductShareSet {
    pub fn new(product_1: f64, product_2: f64, product_3: f64, other: f64) -> Self {
        Self {
            shares: [product_1, product_2, product_3, other],
        }
    }

    pub fn from_record(record: &StoreRecord) -> Result<Self, ParseError> {
        let mut shares = [0.0; 4];
        for (slot, product) in shares.iter_mut().zip(Product::ALL) {
            *slot = parse_share(record, product.column())?;
        }
        Ok(Self { shares })
    }

    pub fn share(&self, product: Product) -> f64 {
        self.shares[product as usize]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Product, f64)> + '_ {
        Product::ALL.into_iter().zip(self.shares)
    }

    /// Smallest share; the earliest product wins a tie.
    pub fn weakest(&self) -> Product {
        self.pick(|candidate, current| candidate < current)
    }

    /// Largest share; the earliest product wins a tie.
    pub fn strongest(&self) -> Product {
        self.pick(|candidate, current| candidate > current)
    }

    fn pick(&self, replaces: impl Fn(f64, f64) -> bool) -> Product {
        self.iter()
            .skip(1)
            .fold((Product::Product1, self.shares[0]), |current, candidate| {
                if replaces(candidate.1, current.1) {
                    candidate
                } else {
                    current
                }
            })
            .0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReportMetrics {
    pub shares: ProductShareSet,
    pub female_share: f64,
    pub male_share: f64,
    pub discount_share: f64,
    pub weakest_product: Product,
    pub focus_gender: Gender,
    pub discount_effective: bool,
    pub best_product_female: Product,
    pub best_product_male: Product,
}

impl ReportMetrics {
    pub fn discount_verdict(&self) -> &'static str {
        if self.discount_effective {
            "Yes"
        } else {
            "Not Significantly"
        }
    }
}

const FEMALE_FOCUS_THRESHOLD: f64 = 50.0;
const DISCOUNT_EFFECTIVE_THRESHOLD: f64 = 10.0;

pub fn derive_metrics(record: &StoreRecord) -> Result<ReportMetrics, ParseError> {
    let female_share = parse_share(record, columns::FEMALE_BUYERS)?;
    let discount_share = parse_share(record, columns::DISCOUNT_OFFERED)?;
    let shares = ProductShareSet::from_record(record)?;
    Ok(metrics_from_shares(shares, female_share, discount_share))
}

pub fn metrics_from_shares(
    shares: ProductShareSet,
    female_share: f64,
    discount_share: f64,
) -> ReportMetrics {
    let male_share = 100.0 - female_share;
    let focus_gender = if female_share > FEMALE_FOCUS_THRESHOLD {
        Gender::Female
    } else {
        Gender::Male
    };

    // Scaling every share by the same gender share never changes the ranking,
    // so both genders get the plain top seller.
    let best = shares.strongest();

    ReportMetrics {
        shares,
        female_share,
        male_share,
        discount_share,
        weakest_product: shares.weakest(),
        focus_gender,
        discount_effective: discount_share > DISCOUNT_EFFECTIVE_THRESHOLD,
        best_product_female: best,
        best_product_male: best,
    }
}

/// Reads a percentage column: trimmed, one trailing `%` allowed, within 0-100.
pub fn parse_share(record: &StoreRecord, field: &'static str) -> Result<f64, ParseError> {
    let raw = record.get(field).ok_or(ParseError::MissingField { field })?;
    parse_percentage(field, raw)
}

pub fn parse_percentage(field: &'static str, raw: &str) -> Result<f64, ParseError> {
    let trimmed = raw.trim();
    let digits = trimmed.strip_suffix('%').unwrap_or(trimmed).trim_end();
    if digits.is_empty() {
        return Err(ParseError::MissingField { field });
    }

    let value = digits.parse::<f64>().map_err(|_| ParseError::NotNumeric {
        field,
        value: raw.to_string(),
    })?;

    if !value.is_finite() || !(0.0..=100.0).contains(&value) {
        return Err(ParseError::OutOfRange { field, value });
    }
    Ok(value)
}
