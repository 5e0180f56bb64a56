//! Browser-style number text.
//!
//! `to_fixed` and `to_exponential` round the exact decimal value of the
//! `f64` half away from zero, the way `Number.prototype.toFixed` and
//! `toExponential` do. Rust's `{:.N}` rounds ties to even, which differs
//! on values such as `0.25` or `1.0625`.

// Every finite f64 has at most 1074 fraction digits.
const EXACT: usize = 1100;

/// Fixed-point text with `digits` fraction digits: `0.3`, `-2.5`, `0.0`.
/// Negative zero prints without a sign.
pub fn to_fixed(x: f64, digits: usize) -> String {
    if let Some(s) = non_finite(x) {
        return s;
    }
    let (int, frac) = exact_digits(x.abs());
    let mut ds: Vec<u8> = int.iter().chain(frac.iter().take(digits)).copied().collect();
    // zero padding past the exact expansion
    ds.resize(int.len() + digits, 0);
    if frac.get(digits).copied().unwrap_or(0) >= 5 && round_up(&mut ds) {
        ds.insert(0, 1);
    }

    let split = ds.len() - digits;
    let mut out = String::with_capacity(ds.len() + 2);
    if x < 0.0 {
        out.push('-');
    }
    push_digits(&mut out, &ds[..split]);
    if digits > 0 {
        out.push('.');
        push_digits(&mut out, &ds[split..]);
    }
    out
}

/// Scientific notation with `digits` fraction digits and an always-signed
/// exponent: `5.619e-2`, `8.990e+9`. Non-finite values spell out as
/// `Infinity`, `-Infinity` and `NaN`.
pub fn to_exponential(x: f64, digits: usize) -> String {
    if let Some(s) = non_finite(x) {
        return s;
    }
    if x == 0.0 {
        return format!("{}e+0", to_fixed(0.0, digits));
    }

    let (int, frac) = exact_digits(x.abs());
    let all: Vec<u8> = int.iter().chain(frac.iter()).copied().collect();
    let lead = all.iter().position(|&d| d != 0).unwrap_or(0);
    let mut exp = int.len() as i64 - 1 - lead as i64;

    let mut sig: Vec<u8> = all[lead..].iter().take(digits + 1).copied().collect();
    sig.resize(digits + 1, 0);
    if all.get(lead + digits + 1).copied().unwrap_or(0) >= 5 && round_up(&mut sig) {
        // 9.999 -> 10.00: keep the digit count, shift the exponent
        sig.insert(0, 1);
        sig.pop();
        exp += 1;
    }

    let mut out = String::with_capacity(digits + 8);
    if x < 0.0 {
        out.push('-');
    }
    push_digits(&mut out, &sig[..1]);
    if digits > 0 {
        out.push('.');
        push_digits(&mut out, &sig[1..]);
    }
    out.push('e');
    out.push(if exp < 0 { '-' } else { '+' });
    out.push_str(&exp.abs().to_string());
    out
}

fn non_finite(x: f64) -> Option<String> {
    if x.is_nan() {
        Some("NaN".into())
    } else if x.is_infinite() {
        Some(if x > 0.0 { "Infinity" } else { "-Infinity" }.into())
    } else {
        None
    }
}

/// Integer and fraction digits (0..=9) of the exact value of `x >= 0`.
fn exact_digits(x: f64) -> (Vec<u8>, Vec<u8>) {
    let s = format!("{:.*}", EXACT, x);
    let (int, frac) = s.split_once('.').unwrap_or((s.as_str(), ""));
    let digits = |part: &str| part.bytes().map(|b| b - b'0').collect::<Vec<_>>();
    (digits(int), digits(frac))
}

/// Add one unit in the last place. Returns the carry out of the top digit.
fn round_up(ds: &mut [u8]) -> bool {
    for d in ds.iter_mut().rev() {
        if *d == 9 {
            *d = 0;
        } else {
            *d += 1;
            return false;
        }
    }
    true
}

fn push_digits(out: &mut String, ds: &[u8]) {
    out.extend(ds.iter().map(|&d| char::from(b'0' + d)));
}
