//! Identifier quoting.
//!
//! Table and field names are wrapped in backticks. The only exception is the
//! bare `*` wildcard, which passes through untouched. Names are not validated
//! or escaped beyond that.

/// The wildcard token that is never quoted.
pub const WILDCARD: &str = "*";

/// Quote a single identifier.
///
/// # Example
/// ```
/// use sqlporter::ident::quote_ident;
///
/// assert_eq!(quote_ident("users"), "`users`");
/// assert_eq!(quote_ident("*"), "*");
/// ```
pub fn quote_ident(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 2);
    write_ident(name, &mut out);
    out
}

/// Quote each identifier and join them with commas.
pub fn quote_list<S: AsRef<str>>(names: &[S]) -> String {
    let mut out = String::new();
    for (i, name) in names.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        write_ident(name.as_ref(), &mut out);
    }
    out
}

pub(crate) fn write_ident(name: &str, out: &mut String) {
    if name == WILDCARD {
        out.push_str(name);
        return;
    }
    out.push('`');
    out.push_str(name);
    out.push('`');
}
