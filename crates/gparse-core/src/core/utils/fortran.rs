use std::num::ParseFloatError;

/// Parses a number printed in Fortran double-precision notation.
///
/// Gaussian writes post-Hartree-Fock energies with a `D` exponent marker
/// (e.g. `-0.12345D+03`). The marker is swapped for `E` before parsing, so plain
/// scientific and decimal notation are accepted as well.
///
/// # Errors
///
/// Returns the underlying [`ParseFloatError`] if the token is not a number.
pub fn fortran_double(token: &str) -> Result<f64, ParseFloatError> {
    token.trim().replace(['D', 'd'], "E").parse()
}
