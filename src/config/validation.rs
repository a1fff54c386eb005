use super::*;

impl KvConfig {
    /// Get a value and check it with `validator`; `valid_values` describes
    /// what would have been accepted.
    pub fn get_validated<T, F>(&self, path: &str, validator: F, valid_values: &str) -> Result<T, KvError>
    where
        T: for<'a> TryFrom<&'a Property, Error = KvError>,
        F: FnOnce(&T) -> bool,
    {
        let typed_value: T = self.get(path)?;

        if !validator(&typed_value) {
            return Err(KvError::ValidationError {
                message: format!("Invalid value for `{}`. Expected: {}", path, valid_values),
                hint: Some(format!("Valid values are: {}", valid_values)),
                code: 450,
            });
        }

        Ok(typed_value)
    }

    /// Get a string value and check it is one of `allowed_values`, ignoring case.
    pub fn get_string_enum(&self, path: &str, allowed_values: &[&str]) -> Result<String, KvError> {
        let value: String = self.get(path)?;
        let lower_value = value.to_lowercase();

        if !allowed_values.iter().any(|v| v.to_lowercase() == lower_value) {
            return Err(KvError::ValidationError {
                message: format!("Invalid value '{}' for `{}`", value, path),
                hint: Some(format!("Expected one of: {}", allowed_values.join(", "))),
                code: 451,
            });
        }

        Ok(value)
    }
}
