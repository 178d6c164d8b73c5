pub mod analysis;
pub mod contract;
pub mod ordered;
pub mod patient;
pub mod prediction;
pub mod risk;

pub use analysis::{AnalysisResult, Correlation, CorrelationPair, ModelMetrics, ModelReport, RocData};
pub use contract::{ContractIssue, check_analysis, check_prediction};
pub use ordered::OrderedMap;
pub use patient::{Biomarker, PatientInput};
pub use prediction::{CalculatedFeature, CalculatedFeatures, IndividualModel, PredictionResult};
pub use risk::{Outcome, RiskColor};
