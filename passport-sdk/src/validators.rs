//! Customer field validators.
//!
//! Pure predicates with no side effects. Formatting characters are
//! tolerated where Brazilian users commonly type them (`(11) 98765-4321`,
//! `111.444.777-35`, `11.222.333/0001-81`).

use validator::ValidateEmail;

/// Check that `email` has the `local@domain.tld` shape.
///
/// The address must pass the HTML5 email check and its domain must have at
/// least two non-empty labels.
pub fn validate_email(email: &str) -> bool {
    let has_tld = email.rsplit_once('@').is_some_and(|(_, domain)| {
        domain.contains('.') && domain.split('.').all(|label| !label.is_empty())
    });
    has_tld && email.validate_email()
}

/// Check that `phone` is a Brazilian phone number.
///
/// Accepts area code + number (10 or 11 digits), optionally prefixed by the
/// `55` country code, with `+ ( ) - .` and spaces as formatting.
pub fn validate_phone(phone: &str) -> bool {
    if !phone
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '(' | ')' | '-' | '.' | ' '))
    {
        return false;
    }
    let digits = only_digits(phone);
    match digits.len() {
        10 | 11 => true,
        12 | 13 => digits.starts_with(&[5, 5]),
        _ => false,
    }
}

/// Check that `document` is a valid CPF (11 digits) or CNPJ (14 digits).
///
/// Both are verified through their two mod-11 check digits. Documents made
/// of a single repeated digit pass the arithmetic but are rejected.
pub fn validate_document(document: &str) -> bool {
    if !document
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | '/' | ' '))
    {
        return false;
    }
    let digits = only_digits(document);
    if digits.windows(2).all(|w| w[0] == w[1]) {
        return false;
    }
    match digits.len() {
        11 => is_valid_cpf(&digits),
        14 => is_valid_cnpj(&digits),
        _ => false,
    }
}

const CNPJ_FIRST_WEIGHTS: [u32; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];
const CNPJ_SECOND_WEIGHTS: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

fn only_digits(s: &str) -> Vec<u32> {
    s.chars().filter_map(|c| c.to_digit(10)).collect()
}

/// Mod-11 check digit over `digits` with the given weights.
fn check_digit(digits: &[u32], weights: impl Iterator<Item = u32>) -> u32 {
    let sum: u32 = digits.iter().zip(weights).map(|(d, w)| d * w).sum();
    match sum % 11 {
        0 | 1 => 0,
        r => 11 - r,
    }
}

fn is_valid_cpf(digits: &[u32]) -> bool {
    let first = check_digit(&digits[..9], (2..=10).rev());
    let second = check_digit(&digits[..10], (2..=11).rev());
    digits[9] == first && digits[10] == second
}

fn is_valid_cnpj(digits: &[u32]) -> bool {
    let first = check_digit(&digits[..12], CNPJ_FIRST_WEIGHTS.into_iter());
    let second = check_digit(&digits[..13], CNPJ_SECOND_WEIGHTS.into_iter());
    digits[12] == first && digits[13] == second
}
