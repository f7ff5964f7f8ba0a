//! Validation rules for single form fields.

/// The value carried by a single form field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Free-text input.
    Text(String),
    /// Numeric input, already parsed.
    Number(f64),
}

/// Constraint set for one field's value.
///
/// Constraints left unset, or not applicable to the value's type, pass.
#[derive(Debug, Clone)]
pub struct ValidationRule {
    /// The value under validation.
    pub value: FieldValue,
    /// Reject values whose trimmed string form is empty.
    pub required: bool,
    /// Minimum length for text values (inclusive).
    pub min_length: Option<usize>,
    /// Maximum length for text values (inclusive).
    pub max_length: Option<usize>,
    /// Minimum for numeric values (inclusive).
    pub min: Option<f64>,
    /// Maximum for numeric values (inclusive).
    pub max: Option<f64>,
}

impl ValidationRule {
    /// Creates a rule for a text value with no constraints set.
    pub fn text(value: impl Into<String>) -> Self {
        Self::new(FieldValue::Text(value.into()))
    }

    /// Creates a rule for a numeric value with no constraints set.
    pub fn number(value: f64) -> Self {
        Self::new(FieldValue::Number(value))
    }

    fn new(value: FieldValue) -> Self {
        Self {
            value,
            required: false,
            min_length: None,
            max_length: None,
            min: None,
            max: None,
        }
    }

    /// Requires the value's trimmed string form to be non-empty.
    pub fn with_required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Sets the minimum text length (inclusive).
    pub fn with_min_length(mut self, length: usize) -> Self {
        self.min_length = Some(length);
        self
    }

    /// Sets the maximum text length (inclusive).
    pub fn with_max_length(mut self, length: usize) -> Self {
        self.max_length = Some(length);
        self
    }

    /// Sets the minimum numeric bound (inclusive).
    pub fn with_min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    /// Sets the maximum numeric bound (inclusive).
    pub fn with_max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    /// Returns true if every applicable constraint passes.
    pub fn is_valid(&self) -> bool {
        validate(self)
    }
}

/// Checks a value against its rule.
///
/// All applicable constraints must pass. Deterministic, side-effect
/// free, and total: no input panics.
pub fn validate(rule: &ValidationRule) -> bool {
    if rule.required {
        let empty = match &rule.value {
            FieldValue::Text(s) => s.trim().is_empty(),
            FieldValue::Number(n) => n.to_string().trim().is_empty(),
        };
        if empty {
            return false;
        }
    }

    if let FieldValue::Text(s) = &rule.value {
        let length = s.chars().count();

        if let Some(min_length) = rule.min_length {
            if length < min_length {
                return false;
            }
        }

        if let Some(max_length) = rule.max_length {
            if length > max_length {
                return false;
            }
        }
    }

    if let FieldValue::Number(n) = rule.value {
        // NaN satisfies no bound.
        if n.is_nan() && (rule.min.is_some() || rule.max.is_some()) {
            return false;
        }

        if let Some(min) = rule.min {
            if n < min {
                return false;
            }
        }

        if let Some(max) = rule.max {
            if n > max {
                return false;
            }
        }
    }

    true
}
