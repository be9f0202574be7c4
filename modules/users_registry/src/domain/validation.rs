//! Field rules for user payloads and the minimum-age rule.
//!
//! Both checks are pure: "today" and the age threshold are passed in.

use std::fmt;

use chrono::{Months, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::contract::model::UserDraft;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^.+@.+\..+$").expect("email regex is valid"));

/// Which set of rules a payload is checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationProfile {
    /// Create and full replace: every required field must be present.
    Full,
    /// Partial update: only the format of present values is checked.
    Partial,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Email,
    FirstName,
    LastName,
    BirthDate,
    Address,
    PhoneNumber,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Value must be present.
    NotNull,
    /// A present text value must contain a non-whitespace character.
    NotBlank,
    /// A present, non-empty text value must look like an email address.
    EmailFormat,
    /// A present date must be strictly before today.
    Past,
}

type RuleTable = &'static [(Field, &'static [Rule])];

const FULL_RULES: RuleTable = &[
    (Field::Email, &[Rule::NotNull, Rule::NotBlank, Rule::EmailFormat]),
    (Field::FirstName, &[Rule::NotNull, Rule::NotBlank]),
    (Field::LastName, &[Rule::NotNull, Rule::NotBlank]),
    (Field::BirthDate, &[Rule::NotNull, Rule::Past]),
    (Field::Address, &[Rule::NotBlank]),
    (Field::PhoneNumber, &[Rule::NotBlank]),
];

const PARTIAL_RULES: RuleTable = &[
    (Field::Email, &[Rule::EmailFormat]),
    (Field::BirthDate, &[Rule::Past]),
];

impl ValidationProfile {
    pub fn rules(self) -> RuleTable {
        match self {
            ValidationProfile::Full => FULL_RULES,
            ValidationProfile::Partial => PARTIAL_RULES,
        }
    }
}

impl Field {
    /// Name used in error messages.
    pub fn label(self) -> &'static str {
        match self {
            Field::Email => "Email",
            Field::FirstName => "FirstName",
            Field::LastName => "LastName",
            Field::BirthDate => "BirthDate",
            Field::Address => "Address",
            Field::PhoneNumber => "PhoneNumber",
        }
    }
}

/// A single failed rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub rule: Rule,
}

impl FieldError {
    pub fn new(field: Field, rule: Rule) -> Self {
        Self { field, rule }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = self.field.label();
        match self.rule {
            Rule::NotNull => write!(f, "{label} may not be null"),
            Rule::NotBlank => write!(f, "{label} may have at least 1 symbol"),
            Rule::EmailFormat => write!(f, "{label} is not valid"),
            Rule::Past => write!(f, "{label} may not be in future"),
        }
    }
}

enum Value<'a> {
    Text(Option<&'a str>),
    Date(Option<NaiveDate>),
}

impl Value<'_> {
    fn is_present(&self) -> bool {
        match self {
            Value::Text(v) => v.is_some(),
            Value::Date(v) => v.is_some(),
        }
    }
}

fn value_of(draft: &UserDraft, field: Field) -> Value<'_> {
    match field {
        Field::Email => Value::Text(draft.email.as_deref()),
        Field::FirstName => Value::Text(draft.first_name.as_deref()),
        Field::LastName => Value::Text(draft.last_name.as_deref()),
        Field::BirthDate => Value::Date(draft.birth_date),
        Field::Address => Value::Text(draft.address.as_deref()),
        Field::PhoneNumber => Value::Text(draft.phone_number.as_deref()),
    }
}

fn passes(rule: Rule, value: &Value<'_>, today: NaiveDate) -> bool {
    match (rule, value) {
        (Rule::NotNull, v) => v.is_present(),
        (Rule::NotBlank, Value::Text(Some(s))) => !s.trim().is_empty(),
        (Rule::EmailFormat, Value::Text(Some(s))) => s.is_empty() || EMAIL_RE.is_match(s),
        (Rule::Past, Value::Date(Some(d))) => *d < today,
        // rules only judge values of their own kind; absence is NotNull's job
        _ => true,
    }
}

/// Check `draft` against the rules of `profile`. An empty result means valid.
///
/// Errors are reported in rule-table order, so messages are stable.
pub fn validate(draft: &UserDraft, profile: ValidationProfile, today: NaiveDate) -> Vec<FieldError> {
    let mut errors = Vec::new();
    for &(field, rules) in profile.rules() {
        let value = value_of(draft, field);
        for &rule in rules {
            if !passes(rule, &value, today) {
                errors.push(FieldError::new(field, rule));
            }
        }
    }
    errors
}

/// True unless `birth_date + min_age_years` falls after `today`.
///
/// A Feb 29 birthday reaches its anniversary on Feb 28 of non-leap years.
pub fn is_adult(birth_date: NaiveDate, min_age_years: u32, today: NaiveDate) -> bool {
    birth_date
        .checked_add_months(Months::new(min_age_years.saturating_mul(12)))
        .is_some_and(|threshold| threshold <= today)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn today() -> NaiveDate {
        d(2024, 1, 1)
    }

    fn valid_draft() -> UserDraft {
        UserDraft {
            email: Some("a@b.com".into()),
            first_name: Some("A".into()),
            last_name: Some("B".into()),
            birth_date: Some(d(2000, 1, 1)),
            address: Some("X".into()),
            phone_number: Some("Y".into()),
        }
    }

    fn messages(errors: &[FieldError]) -> Vec<String> {
        errors.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn valid_draft_has_no_errors() {
        assert!(validate(&valid_draft(), ValidationProfile::Full, today()).is_empty());
        assert!(validate(&valid_draft(), ValidationProfile::Partial, today()).is_empty());
    }

    #[test]
    fn full_reports_every_missing_required_field() {
        let errors = validate(&UserDraft::default(), ValidationProfile::Full, today());
        assert_eq!(
            messages(&errors),
            vec![
                "Email may not be null",
                "FirstName may not be null",
                "LastName may not be null",
                "BirthDate may not be null",
            ]
        );
    }

    #[test]
    fn full_allows_absent_optional_fields() {
        let draft = UserDraft {
            address: None,
            phone_number: None,
            ..valid_draft()
        };
        assert!(validate(&draft, ValidationProfile::Full, today()).is_empty());
    }

    #[test]
    fn full_rejects_blank_text() {
        let draft = UserDraft {
            first_name: Some("   ".into()),
            address: Some("".into()),
            phone_number: Some(" ".into()),
            ..valid_draft()
        };
        assert_eq!(
            messages(&validate(&draft, ValidationProfile::Full, today())),
            vec![
                "FirstName may have at least 1 symbol",
                "Address may have at least 1 symbol",
                "PhoneNumber may have at least 1 symbol",
            ]
        );
    }

    #[test]
    fn empty_email_is_blank_not_malformed() {
        let draft = UserDraft {
            email: Some(String::new()),
            ..valid_draft()
        };
        assert_eq!(
            messages(&validate(&draft, ValidationProfile::Full, today())),
            vec!["Email may have at least 1 symbol"]
        );
    }

    #[test]
    fn malformed_email_is_reported_by_both_profiles() {
        for bad in ["plainaddress", "a@b", "@b.com", "a@.", " "] {
            let draft = UserDraft {
                email: Some(bad.into()),
                ..valid_draft()
            };
            let full = messages(&validate(&draft, ValidationProfile::Full, today()));
            assert!(full.contains(&"Email is not valid".to_string()), "{bad}");
            let partial = messages(&validate(&draft, ValidationProfile::Partial, today()));
            assert_eq!(partial, vec!["Email is not valid"], "{bad}");
        }
    }

    #[test]
    fn birth_date_must_be_strictly_past() {
        for date in [today(), d(2030, 5, 5)] {
            let draft = UserDraft {
                birth_date: Some(date),
                ..valid_draft()
            };
            assert_eq!(
                messages(&validate(&draft, ValidationProfile::Full, today())),
                vec!["BirthDate may not be in future"]
            );
            assert_eq!(
                messages(&validate(&draft, ValidationProfile::Partial, today())),
                vec!["BirthDate may not be in future"]
            );
        }

        let yesterday = UserDraft {
            birth_date: Some(d(2023, 12, 31)),
            ..valid_draft()
        };
        assert!(validate(&yesterday, ValidationProfile::Full, today()).is_empty());
    }

    #[test]
    fn partial_ignores_presence_and_blankness() {
        let draft = UserDraft {
            first_name: Some(String::new()),
            ..Default::default()
        };
        assert!(validate(&draft, ValidationProfile::Partial, today()).is_empty());
    }

    #[test]
    fn adult_on_exact_anniversary() {
        assert!(is_adult(d(2006, 1, 1), 18, today()));
        assert!(!is_adult(d(2006, 1, 2), 18, today()));
        assert!(is_adult(d(1990, 6, 15), 18, today()));
        assert!(!is_adult(d(2010, 1, 1), 18, today()));
    }

    #[test]
    fn zero_min_age_accepts_any_past_date() {
        assert!(is_adult(d(2023, 12, 31), 0, today()));
        assert!(is_adult(today(), 0, today()));
    }

    #[test]
    fn leap_day_birthday_rolls_to_feb_28() {
        let birth = d(2004, 2, 29);
        assert!(!is_adult(birth, 18, d(2022, 2, 27)));
        assert!(is_adult(birth, 18, d(2022, 2, 28)));
    }

    #[test]
    fn overflowing_threshold_is_not_adult() {
        assert!(!is_adult(d(2000, 1, 1), u32::MAX, today()));
    }
}
