use serde::{Deserialize, Serialize};

use crate::content::models::{Property, PropertyStatus, PropertyType};

/// The five independently adjustable listing constraints. An unset field
/// applies no constraint; a property must satisfy every set field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FilterCriteria {
    pub property_type: Option<PropertyType>,
    pub status: Option<PropertyStatus>,
    pub min_price: Option<u64>,
    pub max_price: Option<u64>,
    pub min_bedrooms: Option<u32>,
}

impl FilterCriteria {
    pub fn unconstrained() -> Self {
        Self::default()
    }

    pub fn is_unconstrained(&self) -> bool {
        *self == Self::default()
    }

    /// Conjunction of the five predicates; unset constraints pass.
    pub fn matches(&self, property: &Property) -> bool {
        let meta = &property.metadata;

        if let Some(property_type) = self.property_type {
            if meta.property_type.key != property_type {
                return false;
            }
        }
        if let Some(status) = self.status {
            if meta.status.key != status {
                return false;
            }
        }
        if let Some(min_price) = self.min_price {
            if meta.price < min_price {
                return false;
            }
        }
        if let Some(max_price) = self.max_price {
            if meta.price > max_price {
                return false;
            }
        }
        if let Some(min_bedrooms) = self.min_bedrooms {
            if meta.bedrooms < min_bedrooms {
                return false;
            }
        }

        true
    }
}

/// Raw filter text as it arrives from a query string or form. Parsing is
/// lenient: empty and unparseable inputs both mean "no constraint", and the
/// selects accept the `all` sentinel.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawFilterInput {
    #[serde(default, rename = "type")]
    pub property_type: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub min_price: Option<String>,
    #[serde(default)]
    pub max_price: Option<String>,
    #[serde(default)]
    pub min_bedrooms: Option<String>,
}

impl RawFilterInput {
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            property_type: parse_select(&self.property_type, PropertyType::from_key),
            status: parse_select(&self.status, PropertyStatus::from_key),
            min_price: parse_number(&self.min_price),
            max_price: parse_number(&self.max_price),
            min_bedrooms: parse_number(&self.min_bedrooms),
        }
    }
}

fn parse_select<T>(raw: &Option<String>, from_key: impl Fn(&str) -> Option<T>) -> Option<T> {
    let raw = raw.as_deref().map(str::trim)?;
    if raw.is_empty() || raw.eq_ignore_ascii_case("all") {
        return None;
    }
    from_key(raw)
}

fn parse_number<T: std::str::FromStr>(raw: &Option<String>) -> Option<T> {
    raw.as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .and_then(|value| value.parse().ok())
}

/// Filter state over an already-fetched listing page: one atomic criteria
/// swap, one atomic clear, and a synchronous recomputation over the input.
#[derive(Debug, Clone, Default)]
pub struct PropertyFilter {
    criteria: FilterCriteria,
}

impl PropertyFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_criteria(criteria: FilterCriteria) -> Self {
        Self { criteria }
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Replace all five criteria at once.
    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
    }

    /// Reset every criterion to unconstrained in one step.
    pub fn clear(&mut self) {
        self.criteria = FilterCriteria::unconstrained();
    }

    /// Matching subsequence of `properties`, input order preserved.
    pub fn apply<'a>(&self, properties: &'a [Property]) -> Vec<&'a Property> {
        properties
            .iter()
            .filter(|property| self.criteria.matches(property))
            .collect()
    }
}
