//! Validation of deserialized request data.
//!
//! The actual rules are evaluated by a [`ValidationEngine`]; this module only
//! collects its violations and turns a non-empty list into a
//! [`ValidationError`]. [`DeriveEngine`] plugs in the `validator` crate.

use crate::error::ValidationError;
use serde::Serialize;
use std::slice;
use tracing::debug;
use validator::{Validate, ValidationErrors, ValidationErrorsKind};

/// One broken constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Violation {
    property_path: String,
    message: String,
    code: String,
}

impl Violation {
    pub fn new(property_path: impl Into<String>, message: impl Into<String>, code: impl Into<String>) -> Self {
        Self { property_path: property_path.into(), message: message.into(), code: code.into() }
    }

    pub fn property_path(&self) -> &str {
        &self.property_path
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn code(&self) -> &str {
        &self.code
    }
}

/// All violations found in one validation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ViolationList {
    violations: Vec<Violation>,
}

impl ViolationList {
    pub fn new(violations: Vec<Violation>) -> Self {
        Self { violations }
    }

    pub fn len(&self) -> usize {
        self.violations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, Violation> {
        self.violations.iter()
    }

    pub fn push(&mut self, violation: Violation) {
        self.violations.push(violation);
    }

    fn prefixed(self, prefix: &str) -> impl Iterator<Item = Violation> {
        self.violations.into_iter().map(move |mut violation| {
            violation.property_path = join_path(prefix, &violation.property_path);
            violation
        })
    }
}

impl From<&ValidationErrors> for ViolationList {
    fn from(errors: &ValidationErrors) -> Self {
        let mut violations = Vec::new();
        collect("", errors, &mut violations);
        // the engine reports fields in hash order
        violations.sort_by(|a, b| a.property_path.cmp(&b.property_path));
        Self { violations }
    }
}

impl<'a> IntoIterator for &'a ViolationList {
    type Item = &'a Violation;
    type IntoIter = slice::Iter<'a, Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn collect(prefix: &str, errors: &ValidationErrors, violations: &mut Vec<Violation>) {
    for (field, kind) in errors.errors() {
        let path = join_path(prefix, field);
        match kind {
            ValidationErrorsKind::Field(errors) => {
                for error in errors {
                    let message = error.message.as_ref().map_or_else(|| error.code.to_string(), ToString::to_string);
                    violations.push(Violation::new(path.clone(), message, error.code.to_string()));
                }
            }
            ValidationErrorsKind::Struct(nested) => collect(&path, nested, violations),
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    collect(&format!("{path}[{index}]"), nested, violations);
                }
            }
        }
    }
}

fn join_path(prefix: &str, path: &str) -> String {
    match (prefix.is_empty(), path.is_empty() || path.starts_with('[')) {
        (true, _) => path.to_owned(),
        (false, true) => format!("{prefix}{path}"),
        (false, false) => format!("{prefix}.{path}"),
    }
}

/// The external engine evaluating the constraints of `T`.
pub trait ValidationEngine<T: ?Sized> {
    fn validate(&self, data: &T) -> ViolationList;
}

/// Validates any type deriving [`validator::Validate`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DeriveEngine;

impl<T: Validate> ValidationEngine<T> for DeriveEngine {
    fn validate(&self, data: &T) -> ViolationList {
        match data.validate() {
            Ok(()) => ViolationList::default(),
            Err(errors) => ViolationList::from(&errors),
        }
    }
}

/// Runs an engine and fails when it reports anything.
#[derive(Debug, Clone, Default)]
pub struct Validator<E = DeriveEngine> {
    engine: E,
}

impl<E> Validator<E> {
    pub fn new(engine: E) -> Self {
        Self { engine }
    }

    /// Fails with [`ValidationError::ValidationFailed`] carrying every violation the engine found.
    pub fn validate<T: ?Sized>(&self, data: &T) -> Result<(), ValidationError>
    where
        E: ValidationEngine<T>,
    {
        check(self.engine.validate(data))
    }

    /// Validates each item, collecting the violations of all of them before failing.
    ///
    /// Property paths are prefixed with the item index, e.g. `[1].weight`.
    pub fn validate_all<T>(&self, items: &[T]) -> Result<(), ValidationError>
    where
        E: ValidationEngine<T>,
    {
        let mut violations = ViolationList::default();
        for (index, item) in items.iter().enumerate() {
            violations.violations.extend(self.engine.validate(item).prefixed(&format!("[{index}]")));
        }
        check(violations)
    }
}

fn check(violations: ViolationList) -> Result<(), ValidationError> {
    if violations.is_empty() {
        return Ok(());
    }

    debug!(count = violations.len(), "validation failed");
    Err(ValidationError::failed(violations))
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::mock;
    use mockall::predicate::always;

    #[derive(Debug, Validate)]
    struct Candy {
        #[validate(range(min = 1, message = "weight must be positive"))]
        weight: i32,
        #[validate(length(min = 1))]
        name: String,
    }

    #[derive(Debug, Validate)]
    struct CandyBox {
        #[validate(nested)]
        candy: Candy,
        #[validate(nested)]
        extras: Vec<Candy>,
    }

    mock! {
        Engine {}

        impl ValidationEngine<Candy> for Engine {
            fn validate(&self, data: &Candy) -> ViolationList;
        }
    }

    fn candy(weight: i32, name: &str) -> Candy {
        Candy { weight, name: name.into() }
    }

    #[test]
    fn valid_data_passes() {
        let validator = Validator::<DeriveEngine>::default();

        assert!(validator.validate(&candy(100, "Bonbon")).is_ok());
    }

    #[test]
    fn collects_all_violations() {
        let validator = Validator::new(DeriveEngine);

        let error = validator.validate(&candy(-1, "")).unwrap_err();
        let violations: Vec<_> =
            error.violations().iter().map(|v| (v.property_path(), v.message(), v.code())).collect();

        assert_eq!(violations, [("name", "length", "length"), ("weight", "weight must be positive", "range")]);
    }

    #[test]
    fn nested_property_paths() {
        let validator = Validator::new(DeriveEngine);
        let data = CandyBox { candy: candy(0, "Bonbon"), extras: vec![candy(1, "Gum"), candy(1, "")] };

        let error = validator.validate(&data).unwrap_err();
        let paths: Vec<_> = error.violations().iter().map(Violation::property_path).collect();

        assert_eq!(paths, ["candy.weight", "extras[1].name"]);
    }

    #[test]
    fn validate_all_prefixes_index() {
        let validator = Validator::new(DeriveEngine);

        let error = validator.validate_all(&[candy(1, "Gum"), candy(0, "Bonbon"), candy(2, "")]).unwrap_err();
        let paths: Vec<_> = error.violations().iter().map(Violation::property_path).collect();

        assert_eq!(paths, ["[1].weight", "[2].name"]);
        assert!(validator.validate_all::<Candy>(&[]).is_ok());
    }

    #[test]
    fn engine_result_decides() {
        let mut engine = MockEngine::new();
        engine
            .expect_validate()
            .with(always())
            .times(1)
            .returning(|_| ViolationList::new(vec![Violation::new("weight", "test", "positive")]));
        let validator = Validator::new(engine);

        let error = validator.validate(&candy(100, "Bonbon")).unwrap_err();

        assert_eq!(error.violations().len(), 1);
        assert_eq!(error.status_code(), http::StatusCode::BAD_REQUEST);
    }

    #[test]
    fn empty_engine_result_passes() {
        let mut engine = MockEngine::new();
        engine.expect_validate().times(1).returning(|_| ViolationList::default());

        assert!(Validator::new(engine).validate(&candy(-5, "")).is_ok());
    }

    #[test]
    fn serializes_camel_case() {
        let violations = ViolationList::new(vec![Violation::new("weight", "must be positive", "range")]);

        assert_eq!(
            serde_json::to_string(&violations).unwrap(),
            r#"{"violations":[{"propertyPath":"weight","message":"must be positive","code":"range"}]}"#
        );
    }
}
