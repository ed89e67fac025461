//! The house menu the catalog starts with.

use crate::model::MenuItem;
use rust_decimal::Decimal;

const HOUSE_MENU: [(u32, &str, i64); 15] = [
    (1, "Adobo", 350),
    (2, "Sinigang", 385),
    (3, "Lechon", 525),
    (4, "Pancit", 290),
    (5, "Kare-Kare", 450),
    (6, "Halo-Halo", 250),
    (7, "Lumpia", 190),
    (8, "Chicken Inasal", 325),
    (9, "Bibingka", 175),
    (10, "Tocino", 275),
    (11, "Longganisa", 225),
    (12, "Laing", 275),
    (13, "Bicol Express", 340),
    (14, "Sisig", 365),
    (15, "Dinuguan", 330),
];

/// The fifteen dishes served on a fresh start, ids 1 to 15, prices in pesos.
pub fn house_menu() -> Vec<MenuItem> {
    HOUSE_MENU
        .iter()
        .map(|&(id, name, pesos)| MenuItem::new(id, name, Decimal::new(pesos * 100, 2)))
        .collect()
}
