// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Fixed, read-only catalog of island objects plus the enumerated checkout
//! option sets (payment commitments, shipping methods).
//!
//! The catalog is compiled in. It is validated exactly once, on first access,
//! with assertions: a broken catalog is a build defect, not a runtime
//! condition callers could recover from.

use std::collections::BTreeSet;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

mod seeds;

/// Length of every catalog item code (e.g. `"A3F9Z1"`).
pub const ITEM_ID_LEN: usize = 6;

/// Closed set of object categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObjectCategory {
    /// Generic movable object.
    #[serde(rename = "tárgy")]
    Object,
    /// Built structure.
    #[serde(rename = "építmény")]
    Structure,
    /// Waste or debris.
    #[serde(rename = "hulladék")]
    Waste,
}

impl ObjectCategory {
    /// All categories in display order.
    pub const ALL: [Self; 3] = [Self::Object, Self::Structure, Self::Waste];

    /// Hungarian display label (same as the wire value).
    pub const fn label(self) -> &'static str {
        match self {
            Self::Object => "tárgy",
            Self::Structure => "építmény",
            Self::Waste => "hulladék",
        }
    }
}

/// Percentage offsets on the stylized map, both in `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapPosition {
    /// Horizontal offset (percent of map width).
    pub x: f64,
    /// Vertical offset (percent of map height).
    pub y: f64,
}

impl MapPosition {
    fn in_range(self) -> bool {
        (0.0..=100.0).contains(&self.x) && (0.0..=100.0).contains(&self.y)
    }
}

/// Physical dimensions, display only.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dimensions {
    /// Width in centimetres.
    pub width_cm: f64,
    /// Height in centimetres.
    pub height_cm: f64,
    /// Depth in centimetres.
    pub depth_cm: f64,
}

/// One sellable object on the island.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    /// Six-character alphanumeric code, unique within the catalog.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// Category.
    pub category: ObjectCategory,
    /// Position on the stylized map.
    pub location: MapPosition,
    /// Fictional cost value.
    pub cost: u64,
    /// Free-text unit for `cost` (not a currency code).
    pub cost_unit: String,
    /// Colour description.
    pub color: String,
    /// Material description.
    pub material: String,
    /// Physical dimensions.
    pub dimensions: Dimensions,
    /// Weight in kilograms.
    pub weight_kg: f64,
    /// Image path relative to the site root.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_path: Option<String>,
}

/// Ordered, validated list of catalog items.
#[derive(Debug, Clone)]
pub struct Catalog {
    items: Vec<CatalogItem>,
}

impl Catalog {
    /// Build a catalog from `items`, asserting it is well formed.
    ///
    /// # Panics
    ///
    /// Panics if two items share an id, an id is not six uppercase ASCII
    /// alphanumerics, or a map coordinate falls outside `[0, 100]`.
    pub fn new(items: Vec<CatalogItem>) -> Self {
        let mut seen = BTreeSet::new();
        for item in &items {
            assert!(
                is_item_code(&item.id),
                "catalog item id {:?} is not a {ITEM_ID_LEN}-char uppercase alphanumeric code",
                item.id
            );
            assert!(
                seen.insert(item.id.as_str()),
                "duplicate catalog item id {:?}",
                item.id
            );
            assert!(
                item.location.in_range(),
                "catalog item {:?} has map position {:?} outside [0, 100]",
                item.id,
                item.location
            );
        }
        Self { items }
    }

    /// The compiled-in Papsziget catalog.
    pub fn builtin() -> &'static Self {
        static BUILTIN: OnceLock<Catalog> = OnceLock::new();
        BUILTIN.get_or_init(|| {
            let items = seeds::SEEDS.iter().map(seeds::Seed::to_item).collect();
            Self::new(items)
        })
    }

    /// All items in catalog order.
    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    /// Look up an item by id.
    pub fn get(&self, id: &str) -> Option<&CatalogItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Items of one category, in catalog order.
    pub fn by_category(&self, category: ObjectCategory) -> impl Iterator<Item = &CatalogItem> {
        self.items
            .iter()
            .filter(move |item| item.category == category)
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// `true` when the catalog holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

fn is_item_code(id: &str) -> bool {
    id.len() == ITEM_ID_LEN && id.bytes().all(is_code_byte)
}

fn is_code_byte(b: u8) -> bool {
    b.is_ascii_uppercase() || b.is_ascii_digit()
}

/// Non-monetary commitment accepted in place of payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentCommitment {
    /// Collect and remove household trash.
    Trash,
    /// Plant native trees.
    Trees,
    /// Remove construction waste.
    ConstructionWaste,
}

/// Ways the buyer may take objects off the island.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShippingMethod {
    /// Buyer collects in person.
    SelfPickup,
    /// Buyer arranges a water taxi.
    WaterTaxi,
    /// Local delivery agency.
    DeliveryAgency,
}

/// Display record for one selectable checkout option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OptionInfo<T> {
    /// Option identity.
    pub id: T,
    /// Short Hungarian label.
    pub label: &'static str,
    /// Hungarian description.
    pub description: &'static str,
}

/// Payment commitments in display order.
pub const PAYMENT_OPTIONS: [OptionInfo<PaymentCommitment>; 3] = [
    OptionInfo {
        id: PaymentCommitment::Trash,
        label: "Szemét elszállítása",
        description: "Vállalom, hogy legalább 5 kilogramm hulladékot gyűjtök és elszállítok a \
            szigetről.",
    },
    OptionInfo {
        id: PaymentCommitment::Trees,
        label: "Faültetés",
        description: "Vállalom, hogy legalább 1 őshonos fát ültetek a kijelölt területen.",
    },
    OptionInfo {
        id: PaymentCommitment::ConstructionWaste,
        label: "Építési hulladék elszállítása",
        description: "Vállalom, hogy legalább 100 kilogramm építési hulladékot elszállítom a \
            szigetről.",
    },
];

/// Shipping methods in display order.
pub const SHIPPING_OPTIONS: [OptionInfo<ShippingMethod>; 3] = [
    OptionInfo {
        id: ShippingMethod::SelfPickup,
        label: "Személyes átvétel",
        description: "Saját magam viszem el a tárgyakat a Papszigetről.",
    },
    OptionInfo {
        id: ShippingMethod::WaterTaxi,
        label: "Vízi taxi",
        description: "Hajóval viszem el a tárgyakat, saját szervezésben.",
    },
    OptionInfo {
        id: ShippingMethod::DeliveryAgency,
        label: "Futárszolgálat",
        description: "Helyi szállítócég segítségével juttatom el a tárgyakat a választott címre.",
    },
];

/// Display record for a payment commitment.
pub fn payment_option(id: PaymentCommitment) -> &'static OptionInfo<PaymentCommitment> {
    match id {
        PaymentCommitment::Trash => &PAYMENT_OPTIONS[0],
        PaymentCommitment::Trees => &PAYMENT_OPTIONS[1],
        PaymentCommitment::ConstructionWaste => &PAYMENT_OPTIONS[2],
    }
}

/// Display record for a shipping method.
pub fn shipping_option(id: ShippingMethod) -> &'static OptionInfo<ShippingMethod> {
    match id {
        ShippingMethod::SelfPickup => &SHIPPING_OPTIONS[0],
        ShippingMethod::WaterTaxi => &SHIPPING_OPTIONS[1],
        ShippingMethod::DeliveryAgency => &SHIPPING_OPTIONS[2],
    }
}
