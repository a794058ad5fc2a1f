use chunkly::{
    dispatch, dispatch_codes, ArithmeticKind, ChunklyError, NumericTag, NumericValue,
};

#[test]
fn test_float_add() {
    let op = dispatch(ArithmeticKind::Add, NumericTag::F32);
    let sum = op
        .apply(NumericValue::F32(4.5), NumericValue::F32(2.5))
        .unwrap();
    assert_eq!(sum, NumericValue::F32(7.0));
}

#[test]
fn test_int_subtract() {
    let op = dispatch(ArithmeticKind::Subtract, NumericTag::I32);
    let difference = op
        .apply(NumericValue::I32(7), NumericValue::I32(2))
        .unwrap();
    assert_eq!(difference, NumericValue::I32(5));
}

#[test]
fn test_int_multiply() {
    let op = dispatch(ArithmeticKind::Multiply, NumericTag::I32);
    let product = op
        .apply(NumericValue::I32(4), NumericValue::I32(2))
        .unwrap();
    assert_eq!(product, NumericValue::I32(8));
}

#[test]
fn test_float_divide() {
    let op = dispatch(ArithmeticKind::Divide, NumericTag::F32);
    let quotient = op
        .apply(NumericValue::F32(10.0), NumericValue::F32(5.0))
        .unwrap();
    assert_eq!(quotient, NumericValue::F32(2.0));
}

#[test]
fn test_float_divide_by_zero_is_recoverable_nan() {
    let op = dispatch(ArithmeticKind::Divide, NumericTag::F32);
    let quotient = op
        .apply(NumericValue::F32(10.0), NumericValue::F32(0.0))
        .unwrap();
    match quotient {
        NumericValue::F32(value) => assert!(value.is_nan()),
        other => panic!("expected a float result, got {:?}", other),
    }
}

#[test]
fn test_int_divide_by_zero_is_a_hard_failure() {
    let op = dispatch(ArithmeticKind::Divide, NumericTag::I32);
    let error = op
        .apply(NumericValue::I32(10), NumericValue::I32(0))
        .unwrap_err();
    assert_eq!(error, ChunklyError::DivisionByZero { numerator: 10 });
}

#[test]
fn test_every_registered_pair_resolves() {
    for kind_code in 0..4 {
        for tag_code in 0..2 {
            assert!(
                dispatch_codes(kind_code, tag_code).is_ok(),
                "kind {} / tag {} failed to resolve",
                kind_code,
                tag_code
            );
        }
    }
}

#[test]
fn test_unregistered_tag_fails_without_computation() {
    let error = dispatch_codes(ArithmeticKind::Add.code(), 42).unwrap_err();
    assert_eq!(error, ChunklyError::UnsupportedType { code: 42 });
}

#[test]
fn test_unregistered_kind_fails() {
    let error = dispatch_codes(42, NumericTag::F32.code()).unwrap_err();
    assert_eq!(error, ChunklyError::UnsupportedOperation { code: 42 });
}

#[test]
fn test_tag_codes_match_the_registered_order() {
    assert_eq!(NumericTag::from_code(0).unwrap(), NumericTag::F32);
    assert_eq!(NumericTag::from_code(1).unwrap(), NumericTag::I32);
    assert_eq!(ArithmeticKind::from_code(3).unwrap(), ArithmeticKind::Divide);
}
