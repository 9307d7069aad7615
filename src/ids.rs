//! Fresh Item Ids
//!
//! Browser-side id generation: epoch milliseconds plus a random tail,
//! base 36. Unique within a list is all that is required; the pure state
//! modules take ids as parameters so tests can supply fixed ones.

/// Generate a fresh item id
pub fn fresh_id() -> String {
    let millis = js_sys::Date::now() as u64;
    let tail = (js_sys::Math::random() * 36f64.powi(6)) as u64;
    format!("{}-{}", to_base36(millis), to_base36(tail))
}

fn to_base36(mut n: u64) -> String {
    const DIGITS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if n == 0 {
        return "0".to_string();
    }
    let mut out = Vec::new();
    while n > 0 {
        out.push(DIGITS[(n % 36) as usize]);
        n /= 36;
    }
    out.reverse();
    String::from_utf8(out).unwrap_or_default()
}
