//! Number formatting for TikZ coordinates and tick labels.

/// Coordinate with six decimals, the precision used for every TikZ point.
pub fn coord(value: f64) -> String {
    format!("{:.6}", value)
}

/// A `(x, y)` TikZ coordinate.
pub fn point(x: f64, y: f64) -> String {
    format!("({}, {})", coord(x), coord(y))
}

/// Shortest general form with six significant digits, as printf `%g`.
///
/// Scientific notation is used when the decimal exponent is below -4 or at
/// least 6; trailing zeros are dropped in both forms.
pub fn format_g(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    // Round to six significant digits first; the exponent can shift (9.999999 -> 1e1)
    let sci = format!("{:.5e}", value);
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return sci;
    };
    let exp: i32 = exp.parse().unwrap_or(0);

    if !(-4..6).contains(&exp) {
        let mantissa = trim_zeros(mantissa);
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", mantissa, sign, exp.abs())
    } else {
        let decimals = (5 - exp) as usize;
        trim_zeros(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn trim_zeros(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}
