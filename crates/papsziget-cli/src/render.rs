// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Text rendering of catalog, cart and checkout views.

use comfy_table::{presets::UTF8_FULL, Table};
use papsziget_app_core::checkout::CheckoutSummary;
use papsziget_app_core::{CatalogItem, ThemeMode, WebshopState};

const NOT_GIVEN: &str = "nincs megadva";
const NOT_SELECTED: &str = "nincs kiválasztva";

/// Group thousands with `.` (`11350` → `11.350`).
pub(crate) fn format_hu_number(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i).is_multiple_of(3) {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

fn cost(item: &CatalogItem) -> String {
    format!("{} {}", format_hu_number(item.cost), item.cost_unit)
}

pub(crate) fn catalog_table<'a>(items: impl IntoIterator<Item = &'a CatalogItem>) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Kód", "Név", "Kategória", "Ár", "Hely (x, y)"]);
    for item in items {
        table.add_row(vec![
            item.id.clone(),
            item.name.clone(),
            item.category.label().to_owned(),
            cost(item),
            format!("{}, {}", item.location.x, item.location.y),
        ]);
    }
    table
}

pub(crate) fn item_detail(item: &CatalogItem) -> String {
    let d = item.dimensions;
    let material = if item.material.is_empty() {
        "-"
    } else {
        item.material.as_str()
    };
    let size = format!("{} × {} × {}", d.width_cm, d.height_cm, d.depth_cm);
    let mut lines = vec![
        format!("{} ({})", item.name, item.id),
        item.description.clone(),
        format!("Kategória: {}", item.category.label()),
        format!("Ár: {}", cost(item)),
        format!("Szín: {}", item.color),
        format!("Anyag: {material}"),
        format!("Méret: {size} cm"),
        format!("Tömeg: {} kg", item.weight_kg),
        format!("Hely a térképen: {}, {}", item.location.x, item.location.y),
    ];
    if let Some(image) = &item.image_path {
        lines.push(format!("Kép: {image}"));
    }
    lines.join("\n")
}

pub(crate) fn cart_view(state: &WebshopState) -> String {
    if state.cart.is_empty() {
        return "A kosár üres.".to_owned();
    }
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Kód", "Név", "Db", "Ár"]);
    for line in &state.cart {
        table.add_row(vec![
            line.object.id.clone(),
            line.object.name.clone(),
            line.quantity.to_string(),
            cost(&line.object),
        ]);
    }
    format!(
        "{table}\nÖsszesen: {} Ft ({} db)",
        format_hu_number(state.cart_total()),
        state.item_count()
    )
}

pub(crate) fn theme_label(mode: ThemeMode) -> &'static str {
    match mode {
        ThemeMode::Light => "Világos mód",
        ThemeMode::Dark => "Sötét mód",
    }
}

pub(crate) fn summary_view(summary: &CheckoutSummary) -> String {
    let or = |v: &Option<String>| v.as_deref().unwrap_or(NOT_GIVEN).to_owned();
    let shipping = summary.shipping_label.unwrap_or(NOT_SELECTED);
    let payment = summary.payment_label.unwrap_or(NOT_SELECTED);
    [
        "Összegzés".to_owned(),
        format!("Név: {}", or(&summary.full_name)),
        format!("E-mail: {}", or(&summary.email)),
        format!("Megjegyzés: {}", or(&summary.notes)),
        format!("Szállítási cím: {}", or(&summary.shipping_address)),
        format!("Szállítás módja: {shipping}"),
        format!("Fizetés módja: {payment}"),
        format!("Tárgyak: {} db", summary.item_count),
        format!("Összesen: {} Ft", format_hu_number(summary.total_cost)),
    ]
    .join("\n")
}
