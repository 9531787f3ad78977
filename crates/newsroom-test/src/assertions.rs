//! Response and form assertions

use http::StatusCode;
use newsroom_forms::CommentForm;
use newsroom_views::Response;

/// Assert that the response has the given status
#[track_caller]
pub fn assert_status(response: &Response, expected: StatusCode) {
	assert_eq!(
		response.status, expected,
		"Expected status {}, got {}",
		expected, response.status
	);
}

/// Assert that the response is a 302 redirect to `expected_url`
///
/// # Examples
///
/// ```
/// use newsroom_test::assertions::assert_redirects;
/// use newsroom_views::Response;
///
/// let response = Response::redirect("/news/1/#comments");
/// assert_redirects(&response, "/news/1/#comments");
/// ```
#[track_caller]
pub fn assert_redirects(response: &Response, expected_url: &str) {
	assert_status(response, StatusCode::FOUND);
	assert_eq!(
		response.location(),
		Some(expected_url),
		"Expected redirect to '{}', got {:?}",
		expected_url,
		response.location()
	);
}

/// Assert that `field` of a bound form carries exactly `error`
#[track_caller]
pub fn assert_form_error(form: &CommentForm, field: &str, error: &str) {
	assert!(form.is_bound(), "Expected a bound form");
	assert_eq!(
		form.field_errors(field),
		[error.to_string()],
		"Unexpected errors for field '{}'",
		field
	);
}
