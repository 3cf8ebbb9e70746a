// ABOUTME: Integration tests for visceral fat, BMI and body fat interpretations
// ABOUTME: Covers every threshold boundary, age brackets and the BMI formula
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use bioscan::errors::ErrorCode;
use bioscan::intelligence::{
    bmi_interpretation, body_fat_interpretation, calculate_bmi, visceral_fat_interpretation,
    BmiClass, BodyFatClass, ColorToken, VisceralFatClass,
};

mod common;

// ============================================================================
// VISCERAL FAT
// ============================================================================

#[test]
fn test_visceral_fat_nine_is_normal_ten_is_high() {
    common::init_test_logging();
    let nine = visceral_fat_interpretation(9.0).unwrap();
    let ten = visceral_fat_interpretation(10.0).unwrap();

    assert_eq!(nine.level, VisceralFatClass::Normal);
    assert_eq!(nine.color, ColorToken::Green);
    assert_eq!(ten.level, VisceralFatClass::High);
    assert_eq!(ten.label, "Alto");
}

#[test]
fn test_visceral_fat_very_high_above_fourteen() {
    assert_eq!(
        visceral_fat_interpretation(14.0).unwrap().level,
        VisceralFatClass::High
    );
    let fractional = visceral_fat_interpretation(14.5).unwrap();
    assert_eq!(fractional.level, VisceralFatClass::VeryHigh);
    assert_eq!(fractional.color, ColorToken::Red);
    assert_eq!(
        visceral_fat_interpretation(15.0).unwrap().level,
        VisceralFatClass::VeryHigh
    );
}

#[test]
fn test_visceral_fat_rejects_nan() {
    let err = visceral_fat_interpretation(f64::NAN).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
}

// ============================================================================
// BMI
// ============================================================================

#[test]
fn test_bmi_class_boundaries() {
    let cases = [
        (18.4, BmiClass::Underweight),
        (18.5, BmiClass::Normal),
        (24.9, BmiClass::Normal),
        (25.0, BmiClass::Overweight),
        (29.9, BmiClass::Overweight),
        (30.0, BmiClass::ObesityI),
        (35.0, BmiClass::ObesityII),
        (40.0, BmiClass::ObesityIII),
        (55.0, BmiClass::ObesityIII),
    ];
    for (bmi, expected) in cases {
        assert_eq!(bmi_interpretation(bmi).unwrap().level, expected, "BMI {bmi}");
    }
}

#[test]
fn test_bmi_labels() {
    let overweight = bmi_interpretation(25.3).unwrap();
    assert_eq!(overweight.label, "Sobrepeso");
    assert_eq!(overweight.color, ColorToken::Yellow);
}

#[test]
fn test_calculate_bmi() {
    let bmi = calculate_bmi(81.0, 1.8).unwrap();
    assert!((bmi - 25.0).abs() < 1e-9);
}

#[test]
fn test_calculate_bmi_rejects_bad_input() {
    assert_eq!(
        calculate_bmi(80.0, 0.0).unwrap_err().code,
        ErrorCode::ValueOutOfRange
    );
    assert_eq!(
        calculate_bmi(-80.0, 1.8).unwrap_err().code,
        ErrorCode::ValueOutOfRange
    );
    assert_eq!(
        calculate_bmi(f64::NAN, 1.8).unwrap_err().code,
        ErrorCode::InvalidInput
    );
}

// ============================================================================
// BODY FAT PERCENTAGE
// ============================================================================

#[test]
fn test_body_fat_bands_middle_age() {
    let cases = [
        (15.9, BodyFatClass::Athletic),
        (16.0, BodyFatClass::Normal),
        (17.3, BodyFatClass::Normal),
        (23.0, BodyFatClass::AboveIdeal),
        (27.0, BodyFatClass::High),
        (32.0, BodyFatClass::VeryHigh),
    ];
    for (percent, expected) in cases {
        assert_eq!(
            body_fat_interpretation(percent, 44).unwrap().level,
            expected,
            "{percent}%"
        );
    }
}

#[test]
fn test_body_fat_bands_depend_on_age() {
    // 22 % is above ideal under 40, normal from 40 to 59 and at 60+
    assert_eq!(
        body_fat_interpretation(22.0, 30).unwrap().level,
        BodyFatClass::AboveIdeal
    );
    assert_eq!(
        body_fat_interpretation(22.0, 50).unwrap().level,
        BodyFatClass::Normal
    );
    assert_eq!(
        body_fat_interpretation(16.5, 65).unwrap().level,
        BodyFatClass::Athletic
    );
}
