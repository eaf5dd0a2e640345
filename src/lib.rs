#![no_std]

pub mod field;
pub use field::{Field, Shift};

use core::str::FromStr;

/// A field identifier with no entry in the display table.
#[derive(Debug, PartialEq, Eq)]
pub struct UnknownField<'a>(pub &'a str);

/// Looks up the documentation-table notation for a raw field identifier.
///
/// Callers rendering encodings with identifiers outside the table get
/// [`UnknownField`] and decide the fallback themselves.
pub fn display_name_of(ident: &str) -> Result<&'static str, UnknownField<'_>> {
    Field::from_str(ident)
        .map(Field::display_name)
        .map_err(|_| UnknownField(ident))
}

/// Looks up the recorded left shift for a raw field identifier.
///
/// `None` is the common case and covers both identifiers outside the table
/// and fields with no shift entry. A returned `0` marks an ambiguous shift
/// ([`Shift::Ambiguous`]), not a shift of zero bits; use [`Field::shift`] for
/// the distinction.
pub fn shift_amount_of(ident: &str) -> Option<u8> {
    Field::from_str(ident).ok()?.shift().map(Shift::amount)
}
