use serde::Serialize;

/// Presentation band for the 0-100 display score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl ScoreBand {
    pub fn from_display(display: f64) -> Self {
        if display >= 90.0 {
            ScoreBand::Excellent
        } else if display >= 80.0 {
            ScoreBand::Good
        } else if display >= 60.0 {
            ScoreBand::Fair
        } else {
            ScoreBand::Poor
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ScoreBand::Excellent => "excellent",
            ScoreBand::Good => "good",
            ScoreBand::Fair => "fair",
            ScoreBand::Poor => "poor",
        }
    }
}

/// Six-level grade of a raw 0-5 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Grade {
    Excellent,
    #[serde(rename = "Very Good")]
    VeryGood,
    Good,
    Fair,
    Poor,
    #[serde(rename = "Very Poor")]
    VeryPoor,
}

impl Grade {
    pub fn from_score(score: f64) -> Self {
        if score >= 4.5 {
            Grade::Excellent
        } else if score >= 4.0 {
            Grade::VeryGood
        } else if score >= 3.5 {
            Grade::Good
        } else if score >= 3.0 {
            Grade::Fair
        } else if score >= 2.0 {
            Grade::Poor
        } else {
            Grade::VeryPoor
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Grade::Excellent => "Excellent",
            Grade::VeryGood => "Very Good",
            Grade::Good => "Good",
            Grade::Fair => "Fair",
            Grade::Poor => "Poor",
            Grade::VeryPoor => "Very Poor",
        }
    }
}

/// Agreement implied by a correlation coefficient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AgreementLevel {
    Excellent,
    Good,
    Moderate,
    Weak,
    Poor,
}

impl AgreementLevel {
    pub fn from_correlation(r: f64) -> Self {
        if r >= 0.8 {
            AgreementLevel::Excellent
        } else if r >= 0.6 {
            AgreementLevel::Good
        } else if r >= 0.4 {
            AgreementLevel::Moderate
        } else if r >= 0.2 {
            AgreementLevel::Weak
        } else {
            AgreementLevel::Poor
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            AgreementLevel::Excellent => "Excellent",
            AgreementLevel::Good => "Good",
            AgreementLevel::Moderate => "Moderate",
            AgreementLevel::Weak => "Weak",
            AgreementLevel::Poor => "Poor",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            AgreementLevel::Excellent => "Excellent agreement between human and AI assessments",
            AgreementLevel::Good => "Good agreement with minor variations",
            AgreementLevel::Moderate => "Moderate agreement with some differences",
            AgreementLevel::Weak => "Weak agreement with notable differences",
            AgreementLevel::Poor => "Poor agreement with significant differences",
        }
    }
}

/// Agreement on a single dimension, judged by absolute difference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DimensionAgreement {
    Good,
    Moderate,
    Poor,
}

impl DimensionAgreement {
    pub fn from_difference(diff: f64) -> Self {
        let abs = diff.abs();
        if abs <= 0.5 {
            DimensionAgreement::Good
        } else if abs <= 1.0 {
            DimensionAgreement::Moderate
        } else {
            DimensionAgreement::Poor
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            DimensionAgreement::Good => "Good",
            DimensionAgreement::Moderate => "Moderate",
            DimensionAgreement::Poor => "Poor",
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/grades.rs"]
mod tests;
