/// Prefix shared by every invoice number.
pub const INVOICE_PREFIX: &str = "INV-";

/// Number allocated when no invoice exists yet.
pub const FIRST_INVOICE_NUMBER: &str = "INV-001";

/// Numeric suffix of a well-formed invoice number; `None` for anything else.
pub fn invoice_suffix(number: &str) -> Option<u64> {
    number.strip_prefix(INVOICE_PREFIX)?.parse().ok()
}

/// Propose the next invoice number from the persisted set.
///
/// Entries that do not match the `INV-nnn` pattern are ignored. The suffix is
/// zero-padded to three digits and widens naturally past 999. This is only a
/// proposal; the unique constraint at write time closes the allocation race.
pub fn next_invoice_number<'a, I>(existing: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    match existing.into_iter().filter_map(invoice_suffix).max() {
        None => FIRST_INVOICE_NUMBER.to_string(),
        Some(max) => format!("{INVOICE_PREFIX}{:03}", max + 1),
    }
}
