pub mod numbering;
pub mod totals;
pub mod units;

pub use numbering::{next_invoice_number, FIRST_INVOICE_NUMBER};
pub use units::{format_maund, kg_to_maund, ZERO_MAUND};

use thiserror::Error;

/// Rejected raw input. Empty fields are fine and compute as zero; only
/// genuinely malformed numeric text and negative quantities are errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DeriveError {
    #[error("Field '{field}' is not a valid number: '{raw}'")]
    InvalidNumeric { field: &'static str, raw: String },
    #[error("Field '{field}' cannot be negative")]
    Negative { field: &'static str },
}

/// Raw numeric form fields exactly as the client submits them (free text
/// during editing, so every field is a string).
#[derive(Debug, Clone, Copy)]
pub struct RawFields<'a> {
    pub wheat_weight_kg: &'a str,
    pub cut_pieces: &'a str,
    pub number2: &'a str,
    pub number5: &'a str,
    pub bag_quantity: &'a str,
    pub price_per_kg: &'a str,
    pub bag_amount: &'a str,
}

/// Numeric view of a form, every quantity validated non-negative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Figures {
    pub wheat_weight_kg: f64,
    pub cut_pieces: f64,
    pub number2: f64,
    pub number5: f64,
    pub bag_quantity: u32,
    pub price_per_kg: f64,
    pub bag_amount: f64,
}

impl Figures {
    /// Submission-time parse: empty counts as zero, malformed text and
    /// negative quantities are rejected.
    pub fn strict(raw: &RawFields<'_>) -> Result<Self, DeriveError> {
        Ok(Self {
            wheat_weight_kg: parse_decimal("wheatWeightKg", raw.wheat_weight_kg)?,
            cut_pieces: parse_decimal("cutPieces", raw.cut_pieces)?,
            number2: parse_decimal("number2", raw.number2)?,
            number5: parse_decimal("number5", raw.number5)?,
            bag_quantity: parse_count("bagQuantity", raw.bag_quantity)?,
            price_per_kg: parse_decimal("pricePerKg", raw.price_per_kg)?,
            bag_amount: parse_decimal("bagAmount", raw.bag_amount)?,
        })
    }

    /// Editing-time parse: malformed text computes as zero so the form can
    /// keep deriving on every keystroke. Negative quantities are still
    /// rejected rather than clamped.
    pub fn lenient(raw: &RawFields<'_>) -> Result<Self, DeriveError> {
        Ok(Self {
            wheat_weight_kg: parse_decimal_lenient("wheatWeightKg", raw.wheat_weight_kg)?,
            cut_pieces: parse_decimal_lenient("cutPieces", raw.cut_pieces)?,
            number2: parse_decimal_lenient("number2", raw.number2)?,
            number5: parse_decimal_lenient("number5", raw.number5)?,
            bag_quantity: parse_count_lenient("bagQuantity", raw.bag_quantity)?,
            price_per_kg: parse_decimal_lenient("pricePerKg", raw.price_per_kg)?,
            bag_amount: parse_decimal_lenient("bagAmount", raw.bag_amount)?,
        })
    }
}

/// Every derived invoice field, recomputed in full from the raw figures.
#[derive(Debug, Clone, PartialEq)]
pub struct Derived {
    pub wheat_weight_maund: String,
    pub total_weight_kg: f64,
    pub total_weight_maund: String,
    pub total_bag_price: f64,
    pub total_amount: f64,
}

/// Full derivation pipeline. Derived fields are never mutated piecemeal;
/// any change to a contributing input goes through here again.
pub fn derive(figures: &Figures) -> Result<Derived, DeriveError> {
    let total_weight_kg = totals::sum_weight_categories(
        figures.wheat_weight_kg,
        figures.cut_pieces,
        figures.number2,
        figures.number5,
    );
    let total_bag_price = totals::bag_total(figures.bag_quantity, figures.bag_amount);

    Ok(Derived {
        wheat_weight_maund: units::format_maund(figures.wheat_weight_kg)?,
        total_weight_maund: units::format_maund(total_weight_kg)?,
        total_amount: totals::grand_total(total_weight_kg, figures.price_per_kg, total_bag_price),
        total_weight_kg,
        total_bag_price,
    })
}

fn parse_decimal(field: &'static str, raw: &str) -> Result<f64, DeriveError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }
    let value: f64 = trimmed.parse().map_err(|_| DeriveError::InvalidNumeric {
        field,
        raw: raw.to_string(),
    })?;
    if !value.is_finite() {
        return Err(DeriveError::InvalidNumeric {
            field,
            raw: raw.to_string(),
        });
    }
    if value < 0.0 {
        return Err(DeriveError::Negative { field });
    }
    Ok(value)
}

fn parse_decimal_lenient(field: &'static str, raw: &str) -> Result<f64, DeriveError> {
    let value = raw.trim().parse::<f64>().unwrap_or(0.0);
    if !value.is_finite() {
        return Ok(0.0);
    }
    if value < 0.0 {
        return Err(DeriveError::Negative { field });
    }
    Ok(value)
}

fn parse_count(field: &'static str, raw: &str) -> Result<u32, DeriveError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }
    match trimmed.parse::<i64>() {
        Ok(n) if n < 0 => Err(DeriveError::Negative { field }),
        Ok(n) => u32::try_from(n).map_err(|_| DeriveError::InvalidNumeric {
            field,
            raw: raw.to_string(),
        }),
        Err(_) => Err(DeriveError::InvalidNumeric {
            field,
            raw: raw.to_string(),
        }),
    }
}

fn parse_count_lenient(field: &'static str, raw: &str) -> Result<u32, DeriveError> {
    match raw.trim().parse::<i64>() {
        Ok(n) if n < 0 => Err(DeriveError::Negative { field }),
        Ok(n) => Ok(u32::try_from(n).unwrap_or(0)),
        Err(_) => Ok(0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> RawFields<'static> {
        RawFields {
            wheat_weight_kg: "40",
            cut_pieces: "3",
            number2: "1",
            number5: "1",
            bag_quantity: "3",
            price_per_kg: "20",
            bag_amount: "50",
        }
    }

    #[test]
    fn strict_parse_accepts_well_formed_fields() {
        let figures = Figures::strict(&form()).unwrap();
        assert_eq!(figures.wheat_weight_kg, 40.0);
        assert_eq!(figures.bag_quantity, 3);
    }

    #[test]
    fn strict_parse_treats_empty_as_zero() {
        let mut raw = form();
        raw.wheat_weight_kg = "";
        raw.bag_quantity = "  ";
        let figures = Figures::strict(&raw).unwrap();
        assert_eq!(figures.wheat_weight_kg, 0.0);
        assert_eq!(figures.bag_quantity, 0);
    }

    #[test]
    fn strict_parse_rejects_malformed_text() {
        let mut raw = form();
        raw.price_per_kg = "abc";
        assert_eq!(
            Figures::strict(&raw),
            Err(DeriveError::InvalidNumeric {
                field: "pricePerKg",
                raw: "abc".to_string(),
            })
        );
    }

    #[test]
    fn strict_parse_rejects_negative_quantities() {
        let mut raw = form();
        raw.cut_pieces = "-2";
        assert_eq!(
            Figures::strict(&raw),
            Err(DeriveError::Negative { field: "cutPieces" })
        );
    }

    #[test]
    fn strict_parse_rejects_fractional_bag_count() {
        let mut raw = form();
        raw.bag_quantity = "2.5";
        assert!(matches!(
            Figures::strict(&raw),
            Err(DeriveError::InvalidNumeric { field: "bagQuantity", .. })
        ));
    }

    #[test]
    fn strict_parse_rejects_non_finite_input() {
        let mut raw = form();
        raw.bag_amount = "inf";
        assert!(matches!(
            Figures::strict(&raw),
            Err(DeriveError::InvalidNumeric { field: "bagAmount", .. })
        ));
    }

    #[test]
    fn lenient_parse_treats_malformed_as_zero() {
        let mut raw = form();
        raw.wheat_weight_kg = "abc";
        raw.bag_quantity = "lots";
        let figures = Figures::lenient(&raw).unwrap();
        assert_eq!(figures.wheat_weight_kg, 0.0);
        assert_eq!(figures.bag_quantity, 0);
    }

    #[test]
    fn lenient_parse_still_rejects_negatives() {
        let mut raw = form();
        raw.number5 = "-1";
        assert_eq!(
            Figures::lenient(&raw),
            Err(DeriveError::Negative { field: "number5" })
        );
    }

    #[test]
    fn derive_computes_every_field() {
        let derived = derive(&Figures::strict(&form()).unwrap()).unwrap();
        assert_eq!(derived.wheat_weight_maund, "૨ મણ");
        assert_eq!(derived.total_weight_kg, 45.0);
        assert_eq!(derived.total_weight_maund, "૨ મણ ૫ કિલો");
        assert_eq!(derived.total_bag_price, 150.0);
        assert_eq!(derived.total_amount, 45.0 * 20.0 + 150.0);
    }

    #[test]
    fn derive_of_empty_form_is_the_zero_invoice() {
        let raw = RawFields {
            wheat_weight_kg: "",
            cut_pieces: "",
            number2: "",
            number5: "",
            bag_quantity: "",
            price_per_kg: "",
            bag_amount: "",
        };
        let derived = derive(&Figures::strict(&raw).unwrap()).unwrap();
        assert_eq!(derived.total_weight_kg, 0.0);
        assert_eq!(derived.total_weight_maund, ZERO_MAUND);
        assert_eq!(derived.total_bag_price, 0.0);
        assert_eq!(derived.total_amount, 0.0);
    }

    #[test]
    fn derivation_is_idempotent() {
        let figures = Figures::strict(&form()).unwrap();
        assert_eq!(derive(&figures).unwrap(), derive(&figures).unwrap());
    }
}
