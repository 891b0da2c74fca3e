use crate::domain::common::EntityId;
use std::cmp::Ordering;

/// Выбрать строку прайса среди подходящих по ключу
///
/// Результат не зависит от порядка строк: при дублях берётся самая низкая
/// цена, при равной цене меньший id.
pub(crate) fn pick_row<'a, T, I, P, K>(rows: I, price: P, id: K) -> Option<&'a T>
where
    I: Iterator<Item = &'a T>,
    P: Fn(&T) -> f64,
    K: Fn(&T) -> &EntityId,
{
    rows.min_by(|a, b| match price(*a).total_cmp(&price(*b)) {
        Ordering::Equal => id(*a).cmp(id(*b)),
        other => other,
    })
}
