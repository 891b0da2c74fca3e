use super::matching::pick_row;
use super::response::HardwareMatch;
use crate::domain::common::{resolve_name, EntityId};
use crate::projections::p902_hardware_prices::dto::HardwarePriceDto;
use crate::shared::catalog::Catalog;

/// Тип фурнитуры, если в форме ничего не выбрано
pub const DEFAULT_HARDWARE_TYPE: &str = "Standard";

/// Название типа фурнитуры: выбранное в справочнике, иначе "Standard"
pub fn resolve_hardware_type_name(hardware_type_id: Option<&EntityId>, catalog: &Catalog) -> String {
    resolve_name(&catalog.hardware_types, hardware_type_id)
        .filter(|name| !name.is_empty())
        .unwrap_or(DEFAULT_HARDWARE_TYPE)
        .to_string()
}

/// Цена фурнитуры по (тип, покрытие)
///
/// Количество: явно заданное в форме, иначе из строки прайса, иначе 1.
pub fn match_hardware_price(
    finish_id: Option<&EntityId>,
    hardware_type_name: &str,
    requested_quantity: Option<u32>,
    catalog: &Catalog,
    prices: &[HardwarePriceDto],
) -> HardwareMatch {
    let finish_name = resolve_name(&catalog.finishes, finish_id).map(str::to_string);
    let search_key = format!(
        "{} / {}",
        hardware_type_name,
        finish_name.as_deref().unwrap_or("?")
    );

    let row = finish_name.as_deref().and_then(|finish| {
        pick_row(
            prices.iter().filter(|p| p.matches(hardware_type_name, finish)),
            |p: &HardwarePriceDto| p.effective_unit_price(),
            |p: &HardwarePriceDto| &p.id,
        )
    });

    let explicit = requested_quantity.filter(|q| *q > 0);
    let quantity = explicit
        .or_else(|| row.and_then(|r| r.quantity).filter(|q| *q > 0))
        .unwrap_or(1);

    match row {
        Some(row) => {
            let unit_price = row.effective_unit_price();
            HardwareMatch {
                matched: true,
                hardware_type_name: hardware_type_name.to_string(),
                finish_name,
                search_key,
                unit_price: Some(unit_price),
                quantity,
                price: unit_price * quantity as f64,
            }
        }
        None => HardwareMatch {
            matched: false,
            hardware_type_name: hardware_type_name.to_string(),
            finish_name,
            search_key,
            unit_price: None,
            quantity,
            price: 0.0,
        },
    }
}
