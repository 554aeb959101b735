// Result panel helpers: how far the form is filled in, and which band a prediction lands in.

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub const LOW_CEILING: f64 = 20.0;
    pub const MEDIUM_CEILING: f64 = 50.0;

    pub fn from_prediction(prediction: f64) -> RiskLevel {
        if prediction < RiskLevel::LOW_CEILING {
            RiskLevel::Low
        } else if prediction < RiskLevel::MEDIUM_CEILING {
            RiskLevel::Medium
        } else {
            RiskLevel::High
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RiskLevel::Low => "Low Risk",
            RiskLevel::Medium => "Medium Risk",
            RiskLevel::High => "High Risk",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            RiskLevel::Low => {
                "Your heart disease risk appears to be low. Continue maintaining healthy habits!"
            }
            RiskLevel::Medium => {
                "Your heart disease risk is moderate. Consider lifestyle changes to improve heart health."
            }
            RiskLevel::High => {
                "Your heart disease risk is high. Please consult with a healthcare provider soon."
            }
        }
    }

    /// Class appended to the gauge element.
    pub fn css_class(self) -> &'static str {
        match self {
            RiskLevel::Low => "low-risk",
            RiskLevel::Medium => "medium-risk",
            RiskLevel::High => "high-risk",
        }
    }
}

#[wasm_bindgen]
pub fn risk_level(prediction: f64) -> RiskLevel {
    RiskLevel::from_prediction(prediction)
}

#[wasm_bindgen]
pub fn risk_label(prediction: f64) -> String {
    RiskLevel::from_prediction(prediction).label().to_owned()
}

#[wasm_bindgen]
pub fn risk_message(prediction: f64) -> String {
    RiskLevel::from_prediction(prediction).message().to_owned()
}

#[wasm_bindgen]
pub fn risk_class(prediction: f64) -> String {
    RiskLevel::from_prediction(prediction).css_class().to_owned()
}

/// Height of the gauge fill, in percent.
#[wasm_bindgen]
pub fn gauge_fill_percent(prediction: f64) -> f64 {
    if prediction.is_nan() {
        0.0
    } else {
        prediction.max(0.0).min(100.0)
    }
}

#[wasm_bindgen]
pub fn form_progress_percent(filled: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    let filled = filled.min(total);
    (filled as f64 / total as f64 * 100.0).round() as u32
}
