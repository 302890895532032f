use super::PreValidate;

///
/// Trim
///

#[derive(Clone, Copy, Debug, Default)]
pub struct Trim;

impl PreValidate<String> for Trim {
    fn pre_validate(&self, value: String) -> String {
        let trimmed = value.trim();

        if trimmed.len() == value.len() {
            value
        } else {
            trimmed.to_owned()
        }
    }
}

///
/// Lowercase
///

#[derive(Clone, Copy, Debug, Default)]
pub struct Lowercase;

impl PreValidate<String> for Lowercase {
    fn pre_validate(&self, value: String) -> String {
        value.to_lowercase()
    }
}

///
/// Uppercase
///

#[derive(Clone, Copy, Debug, Default)]
pub struct Uppercase;

impl PreValidate<String> for Uppercase {
    fn pre_validate(&self, value: String) -> String {
        value.to_uppercase()
    }
}

///
/// Truncate
/// Keeps at most `max_chars` characters; never splits a char.
///

#[derive(Clone, Copy, Debug)]
pub struct Truncate {
    max_chars: usize,
}

impl Truncate {
    #[must_use]
    pub const fn new(max_chars: usize) -> Self {
        Self { max_chars }
    }
}

impl PreValidate<String> for Truncate {
    fn pre_validate(&self, mut value: String) -> String {
        if let Some((idx, _)) = value.char_indices().nth(self.max_chars) {
            value.truncate(idx);
        }

        value
    }
}

///
/// TESTS
///
