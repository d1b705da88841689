//! Pure check-digit verification for the CPF taxpayer identifier.
//!
//! The single public function operates on the raw field value: formatting
//! characters (`.` and `-`, or anything else that is not an ASCII digit) are
//! stripped before verification, so both `"11144477735"` and
//! `"111.444.777-35"` are accepted forms of the same identifier.  The digits
//! are collected into a fixed buffer; no heap allocation takes place.
//!
//! # Algorithm
//!
//! A CPF is 11 digits.  Digits 1–9 are the registration number; digits 10 and
//! 11 are check digits.  The check digit at 1-indexed position `p` is verified
//! by weighting each of the preceding `p - 1` digits with a descending weight
//! starting at `p` and ending at 2, then computing
//! `expected = 11 - (sum mod 11)`.  When `sum mod 11` is 0 or 1 the expected
//! value is 11 or 10, which can never equal a single digit, so the comparison
//! fails — there is no truncation to 0.
//!
//! The ten repeated-digit sequences (`"00000000000"` through
//! `"99999999999"`) satisfy the weighted sums but are reserved and always
//! rejected first.

/// Verifies a CPF string, ignoring non-digit formatting characters.
///
/// Returns `false` for any input whose cleaned form is not exactly 11 digits,
/// for the repeated-digit sequences, and for any identifier whose check
/// digits do not verify.
///
/// # Examples
///
/// ```
/// use cadastro_core::check_digits::cpf;
///
/// // A known-valid CPF, bare and formatted.
/// assert!(cpf("11144477735"));
/// assert!(cpf("111.444.777-35"));
///
/// // Repeated-digit sequences are reserved.
/// assert!(!cpf("11111111111"));
///
/// // Corrupting a digit breaks the check.
/// assert!(!cpf("11144477734"));
/// ```
pub fn cpf(raw: &str) -> bool {
    let mut digits = [0u8; 11];
    let mut len = 0usize;
    for byte in raw.as_bytes() {
        if byte.is_ascii_digit() {
            if len == 11 {
                return false;
            }
            digits[len] = byte - b'0';
            len += 1;
        }
    }
    if len != 11 {
        return false;
    }
    if is_repeated_sequence(&digits) {
        return false;
    }
    verify_from(&digits, 10)
}

/// Returns `true` when all 11 digits are identical (a reserved sequence).
fn is_repeated_sequence(digits: &[u8; 11]) -> bool {
    digits.iter().all(|&d| d == digits[0])
}

/// Verifies the check digit at 1-indexed `position`, then recurses to the
/// next position.  Position 12 is the base case: both check digits verified.
fn verify_from(digits: &[u8; 11], position: usize) -> bool {
    if position >= 12 {
        return true;
    }

    let mut sum: u32 = 0;
    for (i, &digit) in digits[..position - 1].iter().enumerate() {
        let weight = (position - i) as u32;
        sum += u32::from(digit) * weight;
    }

    let expected = 11 - sum % 11;
    if expected != u32::from(digits[position - 1]) {
        return false;
    }
    verify_from(digits, position + 1)
}
