//! Closed enumeration of the product feed fields.
//!
//! Each variant maps to exactly one canonical tag name in the output XML.
//! Column names coming from the source table are matched against these
//! names exactly (case-sensitive).

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// A field accepted by the product feed schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedField {
    // Required
    Availability,
    Brand,
    Condition,
    Description,
    Gtin,
    Id,
    ImageLink,
    Link,
    Mpn,
    Price,
    Title,

    // Optional
    AdditionalImageLink,
    AgeGroup,
    Color,
    ExpirationDate,
    Gender,
    GoogleProductCategory,
    ItemGroupId,
    Material,
    Pattern,
    ProductType,
    SalePrice,
    SalePriceEffectiveDate,
    Shipping,
    ShippingWeight,
    ShippingSize,
}

impl FeedField {
    /// Fields that count toward the required-field tally, in catalog order.
    pub const REQUIRED: [FeedField; 11] = [
        FeedField::Availability,
        FeedField::Brand,
        FeedField::Condition,
        FeedField::Description,
        FeedField::Gtin,
        FeedField::Id,
        FeedField::ImageLink,
        FeedField::Link,
        FeedField::Mpn,
        FeedField::Price,
        FeedField::Title,
    ];

    /// Fields that are accepted but never counted, in catalog order.
    pub const OPTIONAL: [FeedField; 15] = [
        FeedField::AdditionalImageLink,
        FeedField::AgeGroup,
        FeedField::Color,
        FeedField::ExpirationDate,
        FeedField::Gender,
        FeedField::GoogleProductCategory,
        FeedField::ItemGroupId,
        FeedField::Material,
        FeedField::Pattern,
        FeedField::ProductType,
        FeedField::SalePrice,
        FeedField::SalePriceEffectiveDate,
        FeedField::Shipping,
        FeedField::ShippingWeight,
        FeedField::ShippingSize,
    ];

    /// Returns the canonical tag name used in the output XML.
    pub fn as_str(&self) -> &'static str {
        match self {
            FeedField::Availability => "availability",
            FeedField::Brand => "brand",
            FeedField::Condition => "condition",
            FeedField::Description => "description",
            FeedField::Gtin => "gtin",
            FeedField::Id => "id",
            FeedField::ImageLink => "image_link",
            FeedField::Link => "link",
            FeedField::Mpn => "mpn",
            FeedField::Price => "price",
            FeedField::Title => "title",
            FeedField::AdditionalImageLink => "additional_image_link",
            FeedField::AgeGroup => "age_group",
            FeedField::Color => "color",
            FeedField::ExpirationDate => "expiration_date",
            FeedField::Gender => "gender",
            FeedField::GoogleProductCategory => "google_product_category",
            FeedField::ItemGroupId => "item_group_id",
            FeedField::Material => "material",
            FeedField::Pattern => "pattern",
            FeedField::ProductType => "product_type",
            FeedField::SalePrice => "sale_price",
            FeedField::SalePriceEffectiveDate => "sale_price_effective_date",
            FeedField::Shipping => "shipping",
            FeedField::ShippingWeight => "shipping_weight",
            FeedField::ShippingSize => "shipping_size",
        }
    }

    /// Looks up a field by its exact column name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::REQUIRED
            .iter()
            .chain(Self::OPTIONAL.iter())
            .copied()
            .find(|field| field.as_str() == name)
    }

    /// Returns true if this field counts toward the required-field tally.
    pub fn is_required(&self) -> bool {
        Self::REQUIRED.contains(self)
    }

    /// Returns the closed value set for enumerated fields.
    pub fn allowed_values(&self) -> Option<&'static [&'static str]> {
        match self {
            FeedField::Availability => Some(crate::catalog::AVAILABILITY_VALUES),
            FeedField::Condition => Some(crate::catalog::CONDITION_VALUES),
            _ => None,
        }
    }
}

impl fmt::Display for FeedField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FeedField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| format!("unknown feed field: {s}"))
    }
}
