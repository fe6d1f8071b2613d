use num_bigint::BigInt;
use rand::seq::SliceRandom;
use rand::Rng;

use recover::{shamir, vandermonde, Point, TestCase};

/// Exact Horner evaluation, used to fabricate consistent shares.
fn evaluate(coeffs: &[BigInt], x: &BigInt) -> BigInt {
    let mut acc = BigInt::from(0);
    for coeff in coeffs.iter().rev() {
        acc = acc * x + coeff;
    }
    acc
}

#[test]
fn json_workflow_recovers_the_secret() {
    // Shares of f(x) = x^2 + 3 in mixed bases; n = 4, k = 3.
    let document = r#"{
        "keys": { "n": 4, "k": 3 },
        "1": { "base": "10", "value": "4" },
        "2": { "base": "2", "value": "111" },
        "3": { "base": "10", "value": "12" },
        "6": { "base": "4", "value": "213" }
    }"#;

    let case = TestCase::from_json(document).unwrap();
    let points = case.points().unwrap();
    let secret = vandermonde::cross_checked_secret(&points, case.k()).unwrap();
    assert_eq!(secret, BigInt::from(3));
}

#[test]
fn json_workflow_with_large_base36_values() {
    // f(x) = 10^40 * x + 12345, y values encoded in base 36 and 16.
    let y1: BigInt = BigInt::from(10).pow(40) + 12345;
    let y2: BigInt = BigInt::from(10).pow(40) * 2 + 12345;
    let document = format!(
        r#"{{
            "keys": {{ "n": 2, "k": 2 }},
            "1": {{ "base": "36", "value": "{}" }},
            "2": {{ "base": "16", "value": "{}" }}
        }}"#,
        y1.to_str_radix(36),
        y2.to_str_radix(16)
    );

    let case = TestCase::from_json(&document).unwrap();
    let points = case.points().unwrap();
    let secret = vandermonde::cross_checked_secret(&points, case.k()).unwrap();
    assert_eq!(secret, BigInt::from(12345));
}

#[test]
fn both_paths_agree_on_random_polynomials() {
    let mut rng = rand::rng();

    for _ in 0..50 {
        let k = rng.random_range(1..=6);
        let coeffs: Vec<BigInt> = (0..k)
            .map(|_| BigInt::from(rng.random_range(-1_000_000i64..=1_000_000)))
            .collect();

        let mut xs: Vec<i64> = (-20..=20).filter(|&x| x != 0).collect();
        xs.shuffle(&mut rng);
        let points: Vec<Point> = xs[..k]
            .iter()
            .map(|&x| {
                let x = BigInt::from(x);
                let y = evaluate(&coeffs, &x);
                Point::new(x, y)
            })
            .collect();

        let expected = coeffs[0].clone();
        assert_eq!(
            shamir::reconstruct_secret(&points, k).unwrap(),
            expected
        );
        assert_eq!(
            vandermonde::solve_constant_term(&points).unwrap(),
            expected
        );
    }
}

#[test]
fn any_threshold_subset_recovers_the_same_secret() {
    // f(x) = 9x^3 - 4x^2 + 11, sampled at five positions.
    let coeffs: Vec<BigInt> = [11, 0, -4, 9].map(BigInt::from).into();
    let all: Vec<Point> = [2i64, 5, 7, 11, 13]
        .iter()
        .map(|&x| {
            let x = BigInt::from(x);
            let y = evaluate(&coeffs, &x);
            Point::new(x, y)
        })
        .collect();

    for skip in 0..2 {
        let subset: Vec<Point> = all.iter().skip(skip).take(4).cloned().collect();
        let secret = vandermonde::cross_checked_secret(&subset, 4).unwrap();
        assert_eq!(secret, BigInt::from(11));
    }
}

#[test]
fn corrupt_share_fails_instead_of_truncating() {
    // f(x) = x^2 + 1 with the first share off by one; with x = 1, 2, 4 the
    // perturbed system has constant term 11/3.
    let points = vec![
        Point::new(1, 3),
        Point::new(2, 5),
        Point::new(4, 17),
    ];
    assert!(shamir::reconstruct_secret(&points, 3).is_err());
    assert!(vandermonde::solve_constant_term(&points).is_err());
}
