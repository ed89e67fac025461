//! # Pricing
//!
//! Derives an order's `total_bill` from its lines and a catalog snapshot.
//! The function is pure; callers decide what an unresolved reference means:
//! create and replace refuse the order, patch prices what it can.
//! A total that does not fit in a [`Decimal`] is refused by every caller.

use crate::model::{CartLine, MenuItem, MenuItemId};
use rust_decimal::Decimal;
use thiserror::Error;

/// The running total left the range of [`Decimal`] while pricing this line's menu item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Order total overflowed at menu item {0}")]
pub struct TotalOverflow(pub MenuItemId);

/// Result of pricing a list of cart lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricingOutcome {
    /// Σ price × quantity over the lines whose menu item was found.
    pub total: Decimal,
    /// The first line, in sequence order, whose menu item is not in the catalog.
    pub first_unresolved: Option<MenuItemId>,
}

impl PricingOutcome {
    /// The total, or the first unresolved id when any line could not be priced.
    pub fn strict(self) -> Result<Decimal, MenuItemId> {
        match self.first_unresolved {
            Some(id) => Err(id),
            None => Ok(self.total),
        }
    }
}

/// Prices `items` against `catalog`.
///
/// Lines are visited in order; each is matched to the catalog entry with the same id.
/// Unmatched lines add nothing to the total.
pub fn compute_total(
    items: &[CartLine],
    catalog: &[MenuItem],
) -> Result<PricingOutcome, TotalOverflow> {
    let mut total = Decimal::ZERO;
    let mut first_unresolved = None;

    for line in items {
        match catalog.iter().find(|item| item.id == line.menu_item_id) {
            Some(item) => {
                total = item
                    .price
                    .checked_mul(Decimal::from(line.quantity))
                    .and_then(|subtotal| total.checked_add(subtotal))
                    .ok_or(TotalOverflow(item.id))?;
            }
            None => {
                first_unresolved.get_or_insert(line.menu_item_id);
            }
        }
    }

    Ok(PricingOutcome {
        total,
        first_unresolved,
    })
}
