/// Upper-cases the first character of `s`, leaving the rest untouched.
///
/// Case mapping is Unicode-aware, so a single character may expand
/// (`"ßx"` becomes `"SSx"`). Characters without an upper-case form (digits,
/// symbols) are kept as they are.
pub fn ucfirst(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(s.len());
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
            out
        }
        None => String::new(),
    }
}
