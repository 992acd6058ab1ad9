use super::DeriveError;

/// One maund is fixed at 20 kilograms throughout the system.
pub const KG_PER_MAUND: f64 = 20.0;

/// Rendering of a zero weight; also the form default for maund fields.
pub const ZERO_MAUND: &str = "૦ મણ";

const MAUND: &str = "મણ";
const KILO: &str = "કિલો";

const GUJARATI_DIGITS: [char; 10] = ['૦', '૧', '૨', '૩', '૪', '૫', '૬', '૭', '૮', '૯'];

/// Split a kilogram weight into whole maund units and the kilogram remainder.
pub fn kg_to_maund(kg: f64) -> Result<(u64, f64), DeriveError> {
    if kg < 0.0 {
        return Err(DeriveError::Negative { field: "kg" });
    }
    Ok(((kg / KG_PER_MAUND).floor() as u64, kg % KG_PER_MAUND))
}

/// Render an integer with Gujarati digits, place order preserved, no grouping.
pub fn gujarati_numerals(n: u64) -> String {
    n.to_string()
        .chars()
        .map(|digit| GUJARATI_DIGITS[digit as usize - '0' as usize])
        .collect()
}

/// Render a kilogram weight as localized maund text, e.g. 45 kg -> "૨ મણ ૫ કિલો".
///
/// The remainder is shown in whole kilograms. Display only; the kilogram
/// value stays authoritative and this string is never parsed back.
pub fn format_maund(kg: f64) -> Result<String, DeriveError> {
    let (maund, remainder) = kg_to_maund(kg)?;
    let remainder = remainder.floor() as u64;

    let mut out = String::new();
    if maund > 0 {
        out.push_str(&gujarati_numerals(maund));
        out.push(' ');
        out.push_str(MAUND);
    }
    if remainder > 0 {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(&gujarati_numerals(remainder));
        out.push(' ');
        out.push_str(KILO);
    }
    if out.is_empty() {
        out.push_str(ZERO_MAUND);
    }
    Ok(out)
}
