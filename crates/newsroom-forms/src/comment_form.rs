//! Comment form
//!
//! A single required `text` field, cleaned through the [`ContentFilter`].

use crate::field::{FieldError, FieldResult};
use crate::filter::ContentFilter;
use std::collections::HashMap;

/// Form-level errors
#[derive(Debug, thiserror::Error)]
pub enum FormError {
	#[error("Field error in {field}: {error}")]
	Field { field: String, error: FieldError },
	#[error("Form is not bound")]
	Unbound,
}

pub type FormResult<T> = Result<T, FormError>;

/// Form used to create and edit comments.
///
/// # Examples
///
/// ```
/// use newsroom_forms::{CommentForm, ContentFilter, WARNING};
/// use std::collections::HashMap;
///
/// let filter = ContentFilter::default();
///
/// let mut form = CommentForm::new();
/// form.bind(HashMap::from([("text".to_string(), "Новый текст".to_string())]));
/// assert!(form.is_valid(&filter));
/// assert_eq!(form.cleaned_text(), Some("Новый текст"));
///
/// let mut form = CommentForm::new();
/// form.bind(HashMap::from([("text".to_string(), "редиска".to_string())]));
/// assert!(!form.is_valid(&filter));
/// assert_eq!(form.field_errors("text"), [WARNING.to_string()]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentForm {
	data: HashMap<String, String>,
	initial: Option<String>,
	errors: HashMap<String, Vec<String>>,
	cleaned_text: Option<String>,
	is_bound: bool,
}

impl CommentForm {
	pub const TEXT_FIELD: &'static str = "text";

	/// Create a new unbound form
	pub fn new() -> Self {
		Self::default()
	}

	/// Create an unbound form prefilled with existing text (edit page)
	pub fn with_initial(text: impl Into<String>) -> Self {
		Self {
			initial: Some(text.into()),
			..Self::default()
		}
	}

	/// Bind submitted data for validation
	pub fn bind(&mut self, data: HashMap<String, String>) {
		self.data = data;
		self.errors.clear();
		self.cleaned_text = None;
		self.is_bound = true;
	}

	pub fn is_bound(&self) -> bool {
		self.is_bound
	}

	/// Validate the bound data. Unbound forms are never valid.
	pub fn is_valid(&mut self, filter: &ContentFilter) -> bool {
		if !self.is_bound {
			return false;
		}

		self.errors.clear();
		self.cleaned_text = None;

		match self.clean_text(filter) {
			Ok(text) => {
				self.cleaned_text = Some(text);
				true
			}
			Err(e) => {
				self.add_error(Self::TEXT_FIELD, &e);
				false
			}
		}
	}

	fn clean_text(&self, filter: &ContentFilter) -> FieldResult<String> {
		let text = self
			.data
			.get(Self::TEXT_FIELD)
			.map(|t| t.trim())
			.unwrap_or_default();
		if text.is_empty() {
			return Err(FieldError::Required(Self::TEXT_FIELD.to_string()));
		}
		filter.validate(text)?;
		Ok(text.to_string())
	}

	fn add_error(&mut self, field: &str, error: &FieldError) {
		self.errors
			.entry(field.to_string())
			.or_default()
			.push(error.to_string());
	}

	pub fn errors(&self) -> &HashMap<String, Vec<String>> {
		&self.errors
	}

	/// Messages attached to `field`, empty when it validated.
	pub fn field_errors(&self, field: &str) -> &[String] {
		self.errors.get(field).map(Vec::as_slice).unwrap_or(&[])
	}

	/// Text that passed validation
	pub fn cleaned_text(&self) -> Option<&str> {
		self.cleaned_text.as_deref()
	}

	/// Validated text, or the first field error.
	pub fn into_cleaned_text(self) -> FormResult<String> {
		if !self.is_bound {
			return Err(FormError::Unbound);
		}
		match self.cleaned_text {
			Some(text) => Ok(text),
			None => {
				let message = self
					.field_errors(Self::TEXT_FIELD)
					.first()
					.cloned()
					.unwrap_or_default();
				Err(FormError::Field {
					field: Self::TEXT_FIELD.to_string(),
					error: FieldError::Validation(message),
				})
			}
		}
	}

	/// Value shown in the text widget: submitted data when bound, otherwise
	/// the initial text.
	pub fn value(&self) -> Option<&str> {
		if self.is_bound {
			self.data.get(Self::TEXT_FIELD).map(String::as_str)
		} else {
			self.initial.as_deref()
		}
	}
}
