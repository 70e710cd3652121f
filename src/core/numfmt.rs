//! Numeric formatting for LaTeX output
//!
//! Converts scalar values to fixed-point or scientific-notation strings
//! with a requested number of significant digits. The scientific form can
//! be wrapped as siunitx `\num{...}` markup for direct LaTeX inclusion.
//!
//! NaN formats as the empty string under every notation, so missing values
//! vanish from rendered output instead of producing `NaN` text.

use crate::data::constants::DEFAULT_SIG;
use crate::utils::error::{EmitError, EmitResult};

/// A notation choice that can be stored and applied later
///
/// Used by table options to carry per-column formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberFormat {
    /// Fixed-point with the given significant digits
    Fixed(u32),
    /// Scientific notation wrapped as `\num{...}`
    Scientific(u32),
    /// Scientific notation in plain text, e.g. `1.23e+04`
    ScientificPlain(u32),
}

impl NumberFormat {
    /// Format a value under this notation
    pub fn apply(&self, x: f64) -> EmitResult<String> {
        match self {
            NumberFormat::Fixed(sig) => fixed(x, *sig),
            NumberFormat::Scientific(sig) => scientific(x, *sig, true),
            NumberFormat::ScientificPlain(sig) => scientific(x, *sig, false),
        }
    }
}

impl Default for NumberFormat {
    fn default() -> Self {
        NumberFormat::Fixed(DEFAULT_SIG)
    }
}

fn check_sig(sig: u32) -> EmitResult<()> {
    if sig == 0 {
        return Err(EmitError::invalid(
            "significant digit count must be positive",
        ));
    }
    Ok(())
}

/// Round a finite non-zero value to `sig` significant digits
fn round_sig(x: f64, sig: u32) -> f64 {
    let exp = x.abs().log10().floor() as i32;
    let factor = 10f64.powi(sig as i32 - 1 - exp);
    (x * factor).round() / factor
}

/// Format `x` in fixed-point notation with `sig` significant digits
///
/// The output never contains an exponent marker. Values whose magnitude
/// exceeds `sig` digits are rounded to the kept digits and printed without
/// decimals. NaN formats as the empty string.
///
/// # Errors
///
/// Fails with [`EmitError::InvalidArgument`] when `sig` is zero.
pub fn fixed(x: f64, sig: u32) -> EmitResult<String> {
    check_sig(sig)?;

    if x.is_nan() {
        return Ok(String::new());
    }
    if x.is_infinite() {
        return Ok(x.to_string());
    }
    if x == 0.0 {
        return Ok(format!("{:.*}", (sig - 1) as usize, 0.0));
    }

    // Round first, then derive the decimal count from the rounded value so
    // carries across a decade (0.999 -> 1.0) keep the digit count right.
    let rounded = round_sig(x, sig);
    let decimals = if rounded == 0.0 {
        (sig - 1) as usize
    } else {
        let exp = rounded.abs().log10().floor() as i32;
        (sig as i32 - 1 - exp).max(0) as usize
    };

    Ok(format!("{:.*}", decimals, rounded))
}

/// Format `x` in scientific notation with `sig` significant digits
///
/// With `tex` set the result is wrapped as `\num{...}` for siunitx; the
/// document is expected to load that package. Otherwise the plain exponent
/// form is returned, e.g. `1.23e+04`. NaN formats as the empty string.
///
/// # Errors
///
/// Fails with [`EmitError::InvalidArgument`] when `sig` is zero.
pub fn scientific(x: f64, sig: u32, tex: bool) -> EmitResult<String> {
    check_sig(sig)?;

    if x.is_nan() {
        return Ok(String::new());
    }

    let plain = scientific_plain(x, sig);
    if tex {
        Ok(format!("\\num{{{}}}", plain))
    } else {
        Ok(plain)
    }
}

fn scientific_plain(x: f64, sig: u32) -> String {
    let decimals = (sig - 1) as usize;

    if x.is_infinite() {
        return x.to_string();
    }
    if x == 0.0 {
        return format!("{:.*}e+00", decimals, 0.0);
    }

    let mut exp = x.abs().log10().floor() as i32;
    let mut mantissa = x / 10f64.powi(exp);

    // Rounding the mantissa can carry into the next decade (9.99 -> 10.0)
    let factor = 10f64.powi(decimals as i32);
    mantissa = (mantissa * factor).round() / factor;
    if mantissa.abs() >= 10.0 {
        mantissa /= 10.0;
        exp += 1;
    }

    let sign = if exp < 0 { '-' } else { '+' };
    format!("{:.*}e{}{:02}", decimals, mantissa, sign, exp.abs())
}
