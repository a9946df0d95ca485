//! CPF (Brazilian national identifier) validation.

/// Check that `cpf` is 11 ASCII digits whose last two digits match the
/// mod-11 check digits of the first nine.
pub fn validate_cpf(cpf: &str) -> bool {
    if cpf.len() != 11 || !cpf.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }

    let digits: Vec<u32> = cpf.bytes().map(|b| u32::from(b - b'0')).collect();
    let body = &digits[..9];

    // Weights 10..=2 over the body.
    let first_sum: u32 = body
        .iter()
        .zip((2..=10).rev())
        .map(|(d, w)| d * w)
        .sum();
    let first = check_digit(first_sum);

    // Weights 11..=3 over the body, then the first check digit weighted by 2.
    // Equivalent to the 10..=2 weighting plus the plain digit sum.
    let plain_sum: u32 = body.iter().sum();
    let second = check_digit(first_sum + plain_sum + first * 2);

    first == digits[9] && second == digits[10]
}

fn check_digit(sum: u32) -> u32 {
    match sum % 11 {
        0 | 1 => 0,
        r => 11 - r,
    }
}
