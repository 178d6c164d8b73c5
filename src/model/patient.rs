use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Biomarker {
    Lactate,
    Albumin,
    Crp,
    Nlr,
    Pct,
    Apache,
}

pub fn biomarker_order() -> &'static [Biomarker] {
    &[
        Biomarker::Lactate,
        Biomarker::Albumin,
        Biomarker::Crp,
        Biomarker::Nlr,
        Biomarker::Pct,
        Biomarker::Apache,
    ]
}

impl Biomarker {
    /// Wire key used by the prediction endpoint.
    pub fn key(self) -> &'static str {
        match self {
            Self::Lactate => "Lactate",
            Self::Albumin => "Albumin",
            Self::Crp => "CRP",
            Self::Nlr => "NLR",
            Self::Pct => "PCT",
            Self::Apache => "APACHE",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Lactate => "Lactate (0hr)",
            Self::Albumin => "Albumin (0hr)",
            Self::Crp => "CRP (0hr)",
            Self::Nlr => "NLR (0hr)",
            Self::Pct => "PCT (0hr)",
            Self::Apache => "APACHE II Score",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            Self::Lactate => "mmol/L",
            Self::Albumin => "g/dL",
            Self::Crp => "mg/L",
            Self::Nlr => "Neutrophil-Lymphocyte Ratio",
            Self::Pct => "ng/mL",
            Self::Apache => "0-71",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        biomarker_order().iter().copied().find(|b| b.key() == key)
    }
}

/// Request body of `POST /predict`.
///
/// Values are forwarded as typed: an empty string asks the service to impute.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientInput {
    #[serde(rename = "Lactate")]
    pub lactate: String,
    #[serde(rename = "Albumin")]
    pub albumin: String,
    #[serde(rename = "CRP")]
    pub crp: String,
    #[serde(rename = "NLR")]
    pub nlr: String,
    #[serde(rename = "PCT")]
    pub pct: String,
    #[serde(rename = "APACHE")]
    pub apache: String,
}

impl PatientInput {
    pub fn get(&self, field: Biomarker) -> &str {
        match field {
            Biomarker::Lactate => &self.lactate,
            Biomarker::Albumin => &self.albumin,
            Biomarker::Crp => &self.crp,
            Biomarker::Nlr => &self.nlr,
            Biomarker::Pct => &self.pct,
            Biomarker::Apache => &self.apache,
        }
    }

    pub fn set(&mut self, field: Biomarker, value: impl Into<String>) {
        let slot = match field {
            Biomarker::Lactate => &mut self.lactate,
            Biomarker::Albumin => &mut self.albumin,
            Biomarker::Crp => &mut self.crp,
            Biomarker::Nlr => &mut self.nlr,
            Biomarker::Pct => &mut self.pct,
            Biomarker::Apache => &mut self.apache,
        };
        *slot = value.into();
    }

    pub fn missing(&self) -> Vec<Biomarker> {
        biomarker_order()
            .iter()
            .copied()
            .filter(|b| self.get(*b).is_empty())
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/patient.rs"]
mod tests;
