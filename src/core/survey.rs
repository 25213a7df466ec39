use serde::{Deserialize, Serialize};

/// Five-point agreement scale shared by every ordinal question, lowest first
pub const LIKERT_SCALE: [&str; 5] = [
    "Strongly Disagree",
    "Disagree",
    "Neutral",
    "Agree",
    "Strongly Agree",
];

const AGE_BRACKETS: [&str; 6] = ["Under 25", "25-34", "35-44", "45-54", "55-64", "65 and above"];
const GENDERS: [&str; 3] = ["Male", "Female", "Other"];
const ETHNICITIES: [&str; 5] = ["Asian", "Black", "Hispanic", "White", "Other"];
const DEPARTMENTS: [&str; 5] = ["HR", "IT", "Finance", "Marketing", "Other"];

/// Label of the control that submits a survey for scoring
pub const PREDICT_TRIGGER_LABEL: &str = "Predict Job Satisfaction";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionKind {
    Ordinal,
    Categorical,
}

/// The fixed survey, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Question {
    WorkLifeBalance,
    ManagementSupport,
    TeamCollaboration,
    WorkloadFairness,
    CareerDevelopmentOpportunities,
    WorkplaceInclusivity,
    CompanyCommunication,
    CompensationSatisfaction,
    JobSecurity,
    AgeBracket,
    Gender,
    Ethnicity,
    Department,
}

impl Question {
    pub const ALL: [Question; 13] = [
        Question::WorkLifeBalance,
        Question::ManagementSupport,
        Question::TeamCollaboration,
        Question::WorkloadFairness,
        Question::CareerDevelopmentOpportunities,
        Question::WorkplaceInclusivity,
        Question::CompanyCommunication,
        Question::CompensationSatisfaction,
        Question::JobSecurity,
        Question::AgeBracket,
        Question::Gender,
        Question::Ethnicity,
        Question::Department,
    ];

    /// Display name, also the column prefix used by the trained model
    pub fn name(&self) -> &'static str {
        match self {
            Question::WorkLifeBalance => "Work-Life Balance",
            Question::ManagementSupport => "Management Support",
            Question::TeamCollaboration => "Team Collaboration",
            Question::WorkloadFairness => "Workload Fairness",
            Question::CareerDevelopmentOpportunities => "Career Development Opportunities",
            Question::WorkplaceInclusivity => "Workplace Inclusivity",
            Question::CompanyCommunication => "Company Communication",
            Question::CompensationSatisfaction => "Compensation Satisfaction",
            Question::JobSecurity => "Job Security",
            Question::AgeBracket => "Age Bracket",
            Question::Gender => "Gender",
            Question::Ethnicity => "Ethnicity",
            Question::Department => "Department",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|q| q.name() == name)
    }

    pub fn kind(&self) -> QuestionKind {
        match self {
            Question::AgeBracket
            | Question::Gender
            | Question::Ethnicity
            | Question::Department => QuestionKind::Categorical,
            _ => QuestionKind::Ordinal,
        }
    }

    /// Declared options. For categorical questions the first entry is the
    /// baseline category and never gets its own column.
    pub fn options(&self) -> &'static [&'static str] {
        match self {
            Question::AgeBracket => &AGE_BRACKETS,
            Question::Gender => &GENDERS,
            Question::Ethnicity => &ETHNICITIES,
            Question::Department => &DEPARTMENTS,
            _ => &LIKERT_SCALE,
        }
    }

    pub fn ordinal() -> impl Iterator<Item = Question> {
        Self::ALL.into_iter().filter(|q| q.kind() == QuestionKind::Ordinal)
    }

    pub fn categorical() -> impl Iterator<Item = Question> {
        Self::ALL.into_iter().filter(|q| q.kind() == QuestionKind::Categorical)
    }
}

impl std::fmt::Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Map an agreement answer to 1 (Strongly Disagree) through 5 (Strongly Agree)
#[inline]
pub fn likert_score(option: &str) -> Option<u8> {
    LIKERT_SCALE
        .iter()
        .position(|o| *o == option)
        .map(|idx| idx as u8 + 1)
}

/// Column name of a one-hot indicator: `<FieldName>_<OptionValue>`
#[inline]
pub fn indicator_column(question: Question, option: &str) -> String {
    format!("{}_{}", question.name(), option)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_survey_shape() {
        assert_eq!(Question::ordinal().count(), 9);
        assert_eq!(Question::categorical().count(), 4);
    }

    #[test]
    fn test_name_roundtrip() {
        for q in Question::ALL {
            assert_eq!(Question::from_name(q.name()), Some(q));
        }
        assert_eq!(Question::from_name("Salary"), None);
        assert_eq!(Question::from_name("work-life balance"), None);
    }

    #[test]
    fn test_likert_score() {
        assert_eq!(likert_score("Strongly Disagree"), Some(1));
        assert_eq!(likert_score("Neutral"), Some(3));
        assert_eq!(likert_score("Strongly Agree"), Some(5));
        assert_eq!(likert_score("Somewhat Agree"), None);
    }

    #[test]
    fn test_baselines() {
        assert_eq!(Question::AgeBracket.options()[0], "Under 25");
        assert_eq!(Question::Gender.options()[0], "Male");
        assert_eq!(Question::Ethnicity.options()[0], "Asian");
        assert_eq!(Question::Department.options()[0], "HR");
    }

    #[test]
    fn test_indicator_column() {
        assert_eq!(indicator_column(Question::AgeBracket, "25-34"), "Age Bracket_25-34");
    }
}
