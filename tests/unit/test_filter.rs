use eboekhouden_client::error::AppError;
use eboekhouden_client::model::filter::{DateFilter, DateFilterOperator};

fn single_bound_operators() -> Vec<DateFilterOperator> {
    DateFilterOperator::ALL
        .into_iter()
        .filter(|op| *op != DateFilterOperator::Range)
        .collect()
}

#[test]
fn test_missing_operator_names_parameter() {
    let err = DateFilter::new("date", None, Some("2024-01-01"), None).unwrap_err();
    match err {
        AppError::Configuration(msg) => assert!(msg.contains("date"), "{msg}"),
        other => panic!("Unexpected error: {other:?}"),
    }
}

#[test]
fn test_missing_operator_is_checked_before_bounds() {
    let err = DateFilter::new("invoiceDate", None, None, None).unwrap_err();
    match err {
        AppError::Configuration(msg) => {
            assert!(msg.contains("Operator is required"), "{msg}");
            assert!(msg.contains("invoiceDate"), "{msg}");
        }
        other => panic!("Unexpected error: {other:?}"),
    }
}

#[test]
fn test_single_bound_operators_require_start() {
    for op in single_bound_operators() {
        let err = DateFilter::new("date", Some(op), None, Some("2024-12-31")).unwrap_err();
        match err {
            AppError::Configuration(msg) => assert!(msg.contains(op.as_str()), "{msg}"),
            other => panic!("Unexpected error for {op}: {other:?}"),
        }
    }
}

#[test]
fn test_range_requires_both_bounds() {
    let cases = [
        (None, None),
        (Some("2024-01-01"), None),
        (None, Some("2024-12-31")),
        (Some(""), Some("2024-12-31")),
    ];
    for (start, end) in cases {
        let result = DateFilter::new("date", Some(DateFilterOperator::Range), start, end);
        assert!(
            matches!(result, Err(AppError::Configuration(_))),
            "start={start:?} end={end:?}"
        );
    }
}

#[test]
fn test_single_bound_output_format() {
    let expected = [
        (DateFilterOperator::Eq, "date[eq]"),
        (DateFilterOperator::NotEq, "date[not_eq]"),
        (DateFilterOperator::Gt, "date[gt]"),
        (DateFilterOperator::Gte, "date[gte]"),
        (DateFilterOperator::Lt, "date[lt]"),
        (DateFilterOperator::Lte, "date[lte]"),
    ];
    for (op, key) in expected {
        let filter = DateFilter::on("date", op, "2024-06-30").unwrap();
        assert_eq!(filter.query_pair(), (key.to_string(), "2024-06-30".to_string()));
    }
}

#[test]
fn test_range_output_format() {
    let filter = DateFilter::range("date", "2024-01-01", "2024-12-31").unwrap();
    assert_eq!(
        filter.query_pair(),
        (
            "date[range]".to_string(),
            "2024-01-01,2024-12-31".to_string()
        )
    );
}

#[test]
fn test_custom_parameter_name() {
    let filter = DateFilter::on("modifiedDate", DateFilterOperator::Gt, "2024-03-01").unwrap();
    assert_eq!(filter.query_pair().0, "modifiedDate[gt]");
    assert_eq!(filter.parameter(), "modifiedDate");
}

#[test]
fn test_on_rejects_range() {
    let result = DateFilter::on("date", DateFilterOperator::Range, "2024-01-01");
    assert!(matches!(result, Err(AppError::Configuration(_))));
}
