// ABOUTME: Fixed-threshold interpretations for visceral fat, BMI and body fat percentage
// ABOUTME: Label, color token and description lookups plus the BMI formula
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use bioscan_core::constants::age_bands::{MIDDLE_AGE_START, SENIOR_AGE_START};
use bioscan_core::constants::{bmi, body_fat, visceral_fat};
use bioscan_core::errors::{require_finite, AppError, AppResult};
use serde::Serialize;

/// Color token consumed by the UI theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorToken {
    /// Favorable
    Green,
    /// Lean / informational
    Blue,
    /// Attention
    Yellow,
    /// Elevated
    Orange,
    /// Critical
    Red,
}

/// Interpretation of one value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Interpretation<L> {
    /// Machine-readable level
    pub level: L,
    /// Display label
    pub label: &'static str,
    /// Color token
    pub color: ColorToken,
    /// Explanatory sentence
    pub description: &'static str,
}

/// Visceral fat classes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VisceralFatClass {
    /// 9 or lower
    Normal,
    /// Above 9 up to 14
    High,
    /// Above 14
    VeryHigh,
}

/// WHO body mass index classes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiClass {
    /// Below 18.5
    Underweight,
    /// 18.5 to below 25
    Normal,
    /// 25 to below 30
    Overweight,
    /// 30 to below 35
    ObesityI,
    /// 35 to below 40
    ObesityII,
    /// 40 and above
    ObesityIII,
}

/// Body fat percentage classes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyFatClass {
    /// Below the athletic cut
    Athletic,
    /// Below the normal cut
    Normal,
    /// Below the "above ideal" cut
    AboveIdeal,
    /// Below the high cut
    High,
    /// At or above the high cut
    VeryHigh,
}

/// Interpret a visceral fat level
///
/// # Errors
///
/// Returns `InvalidInput` when `level` is not finite
pub fn visceral_fat_interpretation(level: f64) -> AppResult<Interpretation<VisceralFatClass>> {
    require_finite("visceral_fat_level", level)?;

    Ok(if level <= visceral_fat::NORMAL_MAX {
        Interpretation {
            level: VisceralFatClass::Normal,
            label: "Normal",
            color: ColorToken::Green,
            description: "Gordura visceral em nível saudável",
        }
    } else if level <= visceral_fat::HIGH_MAX {
        Interpretation {
            level: VisceralFatClass::High,
            label: "Alto",
            color: ColorToken::Orange,
            description: "Gordura visceral elevada, atenção à alimentação e atividade física",
        }
    } else {
        Interpretation {
            level: VisceralFatClass::VeryHigh,
            label: "Muito alto",
            color: ColorToken::Red,
            description: "Gordura visceral muito elevada, procure acompanhamento profissional",
        }
    })
}

/// Interpret a body mass index
///
/// # Errors
///
/// Returns `InvalidInput` when `value` is not finite
pub fn bmi_interpretation(value: f64) -> AppResult<Interpretation<BmiClass>> {
    require_finite("bmi", value)?;

    let (level, label, color, description) = if value < bmi::UNDERWEIGHT_BELOW {
        (
            BmiClass::Underweight,
            "Abaixo do peso",
            ColorToken::Blue,
            "Peso abaixo do recomendado para a altura",
        )
    } else if value < bmi::NORMAL_BELOW {
        (
            BmiClass::Normal,
            "Peso normal",
            ColorToken::Green,
            "Peso adequado para a altura",
        )
    } else if value < bmi::OVERWEIGHT_BELOW {
        (
            BmiClass::Overweight,
            "Sobrepeso",
            ColorToken::Yellow,
            "Peso acima do recomendado para a altura",
        )
    } else if value < bmi::OBESITY_I_BELOW {
        (
            BmiClass::ObesityI,
            "Obesidade grau I",
            ColorToken::Orange,
            "Obesidade leve",
        )
    } else if value < bmi::OBESITY_II_BELOW {
        (
            BmiClass::ObesityII,
            "Obesidade grau II",
            ColorToken::Red,
            "Obesidade moderada",
        )
    } else {
        (
            BmiClass::ObesityIII,
            "Obesidade grau III",
            ColorToken::Red,
            "Obesidade grave",
        )
    };

    Ok(Interpretation {
        level,
        label,
        color,
        description,
    })
}

/// Interpret a body fat percentage for an age
///
/// # Errors
///
/// Returns `InvalidInput` when `percent` is not finite
pub fn body_fat_interpretation(percent: f64, age: u32) -> AppResult<Interpretation<BodyFatClass>> {
    require_finite("body_fat_percent", percent)?;

    let [athletic, normal, above, high] = if age < MIDDLE_AGE_START {
        body_fat::UNDER_40
    } else if age < SENIOR_AGE_START {
        body_fat::FROM_40_TO_59
    } else {
        body_fat::SIXTY_PLUS
    };

    Ok(if percent < athletic {
        Interpretation {
            level: BodyFatClass::Athletic,
            label: "Atlético",
            color: ColorToken::Blue,
            description: "Percentual de gordura de atleta",
        }
    } else if percent < normal {
        Interpretation {
            level: BodyFatClass::Normal,
            label: "Normal",
            color: ColorToken::Green,
            description: "Percentual de gordura saudável para a idade",
        }
    } else if percent < above {
        Interpretation {
            level: BodyFatClass::AboveIdeal,
            label: "Acima do ideal",
            color: ColorToken::Yellow,
            description: "Percentual de gordura um pouco acima do ideal",
        }
    } else if percent < high {
        Interpretation {
            level: BodyFatClass::High,
            label: "Alto",
            color: ColorToken::Orange,
            description: "Percentual de gordura elevado",
        }
    } else {
        Interpretation {
            level: BodyFatClass::VeryHigh,
            label: "Muito alto",
            color: ColorToken::Red,
            description: "Percentual de gordura muito elevado",
        }
    })
}

/// Body mass index from weight and height
///
/// Formula: `BMI = weight_kg / height_m²`
///
/// # Errors
///
/// Returns `InvalidInput` for non-finite inputs and `ValueOutOfRange` when
/// weight or height is not positive
pub fn calculate_bmi(weight_kg: f64, height_m: f64) -> AppResult<f64> {
    require_finite("weight_kg", weight_kg)?;
    require_finite("height_m", height_m)?;

    if weight_kg <= 0.0 {
        return Err(AppError::out_of_range("weight_kg", "Weight must be positive"));
    }
    if height_m <= 0.0 {
        return Err(AppError::out_of_range("height_m", "Height must be positive"));
    }

    Ok(weight_kg / (height_m * height_m))
}
