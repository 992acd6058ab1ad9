/// Sum the four weight categories in kilograms. The 2-number and 5-number
/// weights are only ever used through this sum.
pub fn sum_weight_categories(wheat_kg: f64, cut_kg: f64, cat2_kg: f64, cat5_kg: f64) -> f64 {
    wheat_kg + cut_kg + (cat2_kg + cat5_kg)
}

/// Total price of the new bags on the invoice.
pub fn bag_total(quantity: u32, amount: f64) -> f64 {
    f64::from(quantity) * amount
}

/// Grand total: weight price plus bag price.
pub fn grand_total(total_weight_kg: f64, price_per_kg: f64, total_bag_price: f64) -> f64 {
    total_weight_kg * price_per_kg + total_bag_price
}
