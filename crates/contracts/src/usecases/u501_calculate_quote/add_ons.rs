use super::matching::pick_row;
use super::response::AddOnMatch;
use crate::projections::p904_addon_prices::dto::AddOnPriceDto;
use crate::shared::lenient::non_negative;
use std::collections::BTreeMap;

/// Дополнения с количеством > 0, цена ищется по точному названию
pub fn match_add_ons(quantities: &BTreeMap<String, u32>, prices: &[AddOnPriceDto]) -> Vec<AddOnMatch> {
    quantities
        .iter()
        .filter(|(_, quantity)| **quantity > 0)
        .map(|(name, quantity)| {
            let row = pick_row(
                prices.iter().filter(|p| &p.name == name),
                |p: &AddOnPriceDto| p.price,
                |p: &AddOnPriceDto| &p.id,
            );
            match row {
                Some(row) => {
                    let unit_price = non_negative(row.price);
                    AddOnMatch {
                        name: name.clone(),
                        matched: true,
                        unit_price,
                        quantity: *quantity,
                        price: unit_price * *quantity as f64,
                    }
                }
                None => AddOnMatch {
                    name: name.clone(),
                    matched: false,
                    unit_price: 0.0,
                    quantity: *quantity,
                    price: 0.0,
                },
            }
        })
        .collect()
}

/// Сумма дополнений; неизвестные названия дают 0
pub fn sum_add_ons(quantities: &BTreeMap<String, u32>, prices: &[AddOnPriceDto]) -> f64 {
    total_price(&match_add_ons(quantities, prices))
}

pub(crate) fn total_price(matches: &[AddOnMatch]) -> f64 {
    matches.iter().map(|m| m.price).sum()
}
