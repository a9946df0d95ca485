//! CPF checksum property tests.

use agenda_core::validate_cpf;
use proptest::prelude::*;

const VALID: &str = "57219947038";

/// Build a valid CPF from any nine-digit body.
fn with_check_digits(body: &[u32]) -> String {
    let first_sum: u32 = body.iter().zip((2..=10).rev()).map(|(d, w)| d * w).sum();
    let first = match first_sum % 11 {
        r if r < 2 => 0,
        r => 11 - r,
    };
    let second_sum: u32 =
        body.iter().zip((3..=11).rev()).map(|(d, w)| d * w).sum::<u32>() + first * 2;
    let second = match second_sum % 11 {
        r if r < 2 => 0,
        r => 11 - r,
    };
    body.iter()
        .chain([first, second].iter())
        .map(|d| char::from_digit(*d, 10).unwrap())
        .collect()
}

#[test]
fn test_known_valid_cpf() {
    assert!(validate_cpf(VALID));
}

#[test]
fn test_each_check_digit_rejects_corruption() {
    // 10th digit
    assert!(!validate_cpf("57219947018"));
    // 11th digit
    assert!(!validate_cpf("57219947030"));
}

proptest! {
    #[test]
    fn prop_generated_cpfs_validate(body in prop::collection::vec(0u32..10, 9)) {
        prop_assert!(validate_cpf(&with_check_digits(&body)));
    }

    #[test]
    fn prop_single_digit_change_rejected(pos in 0usize..11, bump in 1u32..10) {
        let mut digits: Vec<u32> = VALID.chars().map(|c| c.to_digit(10).unwrap()).collect();
        digits[pos] = (digits[pos] + bump) % 10;
        let corrupted: String = digits
            .iter()
            .map(|d| char::from_digit(*d, 10).unwrap())
            .collect();
        prop_assert!(!validate_cpf(&corrupted));
    }

    #[test]
    fn prop_non_digits_rejected(s in "[0-9]{5}[a-z./-][0-9]{5}") {
        prop_assert!(!validate_cpf(&s));
    }
}
