//! Published SCORE2, SCORE2-OP and SCORE2-Diabetes constants.
//!
//! Every value here encodes the published clinical model and must stay
//! bit-for-bit identical to the source publications.

use crate::model::profile::{RiskRegion, Sex};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SexSpecific<T> {
    pub male: T,
    pub female: T,
}

impl<T> SexSpecific<T> {
    pub fn get(&self, sex: Sex) -> &T {
        match sex {
            Sex::Male => &self.male,
            Sex::Female => &self.female,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalibrationScale {
    pub scale1: f64,
    pub scale2: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalibrationTable {
    pub low: SexSpecific<CalibrationScale>,
    pub moderate: SexSpecific<CalibrationScale>,
    pub high: SexSpecific<CalibrationScale>,
    pub very_high: SexSpecific<CalibrationScale>,
}

impl CalibrationTable {
    pub fn scale(&self, region: RiskRegion, sex: Sex) -> CalibrationScale {
        let by_sex = match region {
            RiskRegion::Low => &self.low,
            RiskRegion::Moderate => &self.moderate,
            RiskRegion::High => &self.high,
            RiskRegion::VeryHigh => &self.very_high,
        };
        *by_sex.get(sex)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Score2Coefficients {
    pub age: f64,
    pub smoking: f64,
    pub sbp: f64,
    pub tchol: f64,
    pub hdl: f64,
    pub smoking_age: f64,
    pub sbp_age: f64,
    pub tchol_age: f64,
    pub hdl_age: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Score2OpCoefficients {
    pub age: f64,
    pub diabetes: f64,
    pub smoking: f64,
    pub sbp: f64,
    pub tchol: f64,
    pub hdl: f64,
    pub diabetes_age: f64,
    pub smoking_age: f64,
    pub sbp_age: f64,
    pub tchol_age: f64,
    pub hdl_age: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Score2DiabetesCoefficients {
    pub age: f64,
    pub smoking: f64,
    pub sbp: f64,
    pub diabetes: f64,
    pub tchol: f64,
    pub hdl: f64,
    pub smoking_age: f64,
    pub sbp_age: f64,
    pub diabetes_age: f64,
    pub tchol_age: f64,
    pub hdl_age: f64,
    pub age_at_diabetes_diagnosis: f64,
    pub hba1c: f64,
    pub egfr: f64,
    pub egfr2: f64,
    pub hba1c_age: f64,
    pub egfr_age: f64,
}

#[derive(Debug, Clone, Copy)]
pub struct Score2Params {
    pub coefficients: SexSpecific<Score2Coefficients>,
    pub baseline_survival: SexSpecific<f64>,
    pub calibration: &'static CalibrationTable,
}

#[derive(Debug, Clone, Copy)]
pub struct Score2OpParams {
    pub coefficients: SexSpecific<Score2OpCoefficients>,
    pub baseline_survival: SexSpecific<f64>,
    pub mean_linear_predictor: SexSpecific<f64>,
    pub calibration: &'static CalibrationTable,
}

#[derive(Debug, Clone, Copy)]
pub struct Score2DiabetesParams {
    pub coefficients: SexSpecific<Score2DiabetesCoefficients>,
    pub baseline_survival: SexSpecific<f64>,
    pub calibration: &'static CalibrationTable,
}

const fn scale(scale1: f64, scale2: f64) -> CalibrationScale {
    CalibrationScale { scale1, scale2 }
}

pub static SCORE2_CALIBRATION: CalibrationTable = CalibrationTable {
    low: SexSpecific {
        male: scale(-0.5699, 0.7476),
        female: scale(-0.7380, 0.7019),
    },
    moderate: SexSpecific {
        male: scale(-0.1565, 0.8009),
        female: scale(-0.3143, 0.7701),
    },
    high: SexSpecific {
        male: scale(0.3207, 0.9360),
        female: scale(0.5710, 0.9369),
    },
    very_high: SexSpecific {
        male: scale(0.5836, 0.8294),
        female: scale(0.9412, 0.8329),
    },
};

pub static SCORE2_OP_CALIBRATION: CalibrationTable = CalibrationTable {
    low: SexSpecific {
        male: scale(-0.34, 1.19),
        female: scale(-0.52, 1.01),
    },
    moderate: SexSpecific {
        male: scale(0.01, 1.25),
        female: scale(-0.10, 1.10),
    },
    high: SexSpecific {
        male: scale(0.08, 1.15),
        female: scale(0.38, 1.09),
    },
    very_high: SexSpecific {
        male: scale(0.05, 0.70),
        female: scale(0.38, 0.69),
    },
};

pub static SCORE2: Score2Params = Score2Params {
    coefficients: SexSpecific {
        male: Score2Coefficients {
            age: 0.3742,
            smoking: 0.6012,
            sbp: 0.2777,
            tchol: 0.1458,
            hdl: -0.2698,
            smoking_age: -0.0755,
            sbp_age: -0.0255,
            tchol_age: -0.0281,
            hdl_age: 0.0426,
        },
        female: Score2Coefficients {
            age: 0.4648,
            smoking: 0.7744,
            sbp: 0.3131,
            tchol: 0.1002,
            hdl: -0.2606,
            smoking_age: -0.1088,
            sbp_age: -0.0277,
            tchol_age: -0.0226,
            hdl_age: 0.0613,
        },
    },
    baseline_survival: SexSpecific {
        male: 0.9605,
        female: 0.9776,
    },
    calibration: &SCORE2_CALIBRATION,
};

pub static SCORE2_OP: Score2OpParams = Score2OpParams {
    coefficients: SexSpecific {
        male: Score2OpCoefficients {
            age: 0.0634,
            diabetes: 0.4245,
            smoking: 0.3524,
            sbp: 0.0094,
            tchol: 0.0850,
            hdl: -0.3564,
            diabetes_age: -0.0174,
            smoking_age: -0.0247,
            sbp_age: -0.0005,
            tchol_age: 0.0073,
            hdl_age: 0.0091,
        },
        female: Score2OpCoefficients {
            age: 0.0789,
            diabetes: 0.6010,
            smoking: 0.4921,
            sbp: 0.0102,
            tchol: 0.0605,
            hdl: -0.3040,
            diabetes_age: -0.0107,
            smoking_age: -0.0255,
            sbp_age: -0.0004,
            tchol_age: -0.0009,
            hdl_age: 0.0154,
        },
    },
    baseline_survival: SexSpecific {
        male: 0.7576,
        female: 0.8082,
    },
    mean_linear_predictor: SexSpecific {
        male: 0.0929,
        female: 0.2290,
    },
    calibration: &SCORE2_OP_CALIBRATION,
};

/// SCORE2-Diabetes shares SCORE2's baseline survival and calibration table.
pub static SCORE2_DIABETES: Score2DiabetesParams = Score2DiabetesParams {
    coefficients: SexSpecific {
        male: Score2DiabetesCoefficients {
            age: 0.5368,
            smoking: 0.4774,
            sbp: 0.1322,
            diabetes: 0.6457,
            tchol: 0.1102,
            hdl: -0.1087,
            smoking_age: -0.0672,
            sbp_age: -0.0268,
            diabetes_age: -0.0983,
            tchol_age: -0.0181,
            hdl_age: 0.0095,
            age_at_diabetes_diagnosis: -0.0998,
            hba1c: 0.0955,
            egfr: -0.0591,
            egfr2: 0.0058,
            hba1c_age: -0.0134,
            egfr_age: 0.0115,
        },
        female: Score2DiabetesCoefficients {
            age: 0.6624,
            smoking: 0.6139,
            sbp: 0.1421,
            diabetes: 0.8096,
            tchol: 0.1127,
            hdl: -0.1568,
            smoking_age: -0.1122,
            sbp_age: -0.0167,
            diabetes_age: -0.1272,
            tchol_age: -0.0200,
            hdl_age: 0.0186,
            age_at_diabetes_diagnosis: -0.1180,
            hba1c: 0.1173,
            egfr: -0.0640,
            egfr2: 0.0062,
            hba1c_age: -0.0196,
            egfr_age: 0.0169,
        },
    },
    baseline_survival: SexSpecific {
        male: 0.9605,
        female: 0.9776,
    },
    calibration: &SCORE2_CALIBRATION,
};

#[cfg(test)]
#[path = "../../tests/src_inline/model/coefficients.rs"]
mod tests;
