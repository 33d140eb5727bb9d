use super::{
    ComparisonVector, compare, consistency_index, mean_absolute_error, pearson,
    rank_first_match, root_mean_square_error, spearman,
};
use crate::model::ValidationError;
use crate::model::grades::{AgreementLevel, DimensionAgreement};

fn approx(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() < tol
}

#[test]
fn test_identical_vectors_agree_perfectly() {
    let v = ComparisonVector::new([3.0, 4.0, 5.0]).unwrap();
    let report = compare(&v, &v);
    assert!(approx(report.pearson, 1.0, 1e-12));
    assert!(approx(report.spearman, 1.0, 1e-12));
    assert_eq!(report.mae, 0.0);
    assert_eq!(report.rmse, 0.0);
    assert_eq!(report.consistency_index, 1.0);
    assert_eq!(report.agreement, AgreementLevel::Excellent);
}

#[test]
fn test_constant_vector_has_zero_correlation() {
    let human = ComparisonVector::new([3.0, 3.0, 3.0]).unwrap();
    let ai = ComparisonVector::new([1.0, 2.0, 5.0]).unwrap();
    let report = compare(&human, &ai);
    assert_eq!(report.pearson, 0.0);
    assert_eq!(report.spearman, 0.0);
    assert_eq!(report.agreement, AgreementLevel::Poor);
}

#[test]
fn test_error_measures() {
    let x = [4.0, 3.0, 5.0];
    let y = [3.0, 3.0, 4.0];
    assert!(approx(mean_absolute_error(&x, &y), 0.667, 1e-3));
    assert!(approx(root_mean_square_error(&x, &y), 0.816, 1e-3));
    assert!(approx(consistency_index(&x, &y), 0.867, 1e-3));
}

#[test]
fn test_pearson_sign() {
    assert!(approx(pearson(&[1.0, 2.0, 3.0], &[3.0, 2.0, 1.0]), -1.0, 1e-12));
    assert_eq!(pearson(&[], &[]), 0.0);
}

#[test]
fn test_ties_take_first_match_rank() {
    assert_eq!(rank_first_match(&[2.0, 2.0, 1.0]), vec![2.0, 2.0, 1.0]);
    assert_eq!(rank_first_match(&[4.0, 1.0, 3.0]), vec![3.0, 1.0, 2.0]);
    // ranks [2,2,1] vs [1,2,3]
    assert!(approx(spearman(&[2.0, 2.0, 1.0], &[1.0, 2.0, 3.0]), -0.866, 1e-3));
}

#[test]
fn test_per_dimension_rows() {
    let human = ComparisonVector::new([4.0, 3.0, 5.0]).unwrap();
    let ai = ComparisonVector::new([3.5, 4.0, 3.0]).unwrap();
    let report = compare(&human, &ai);

    let rows: Vec<(f64, DimensionAgreement)> = report
        .dimensions
        .iter()
        .map(|d| (d.difference, d.agreement))
        .collect();
    assert_eq!(
        rows,
        vec![
            (0.5, DimensionAgreement::Good),
            (-1.0, DimensionAgreement::Moderate),
            (2.0, DimensionAgreement::Poor),
        ]
    );
}

#[test]
fn test_vector_parse() {
    let v = ComparisonVector::parse("3.5, 4,2.25").unwrap();
    assert_eq!(v.values(), &[3.5, 4.0, 2.25]);

    assert!(matches!(
        ComparisonVector::parse("3,4"),
        Err(ValidationError::MalformedVector(_))
    ));
    assert!(matches!(
        ComparisonVector::parse("3,four,2"),
        Err(ValidationError::MalformedVector(_))
    ));
    assert!(matches!(
        ComparisonVector::parse("3,4,7"),
        Err(ValidationError::OutOfRange { .. })
    ));
    assert!(matches!(
        ComparisonVector::new([f64::INFINITY, 1.0, 1.0]),
        Err(ValidationError::NotFinite { .. })
    ));
}
