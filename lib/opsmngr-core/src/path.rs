//! Path templating and base-URL composition.
//!
//! Operation paths are written as templates with named placeholders
//! (`groups/{groupId}/clusters`); [`Template`] substitutes percent-encoded
//! values for the placeholders. [`compose_base`] normalizes the configured
//! base URL and appends the versioned path segment exactly once.

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use url::Url;

use crate::{Error, Result};

/// Characters escaped when substituting a value into a path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'#')
    .add(b'?')
    .add(b'{')
    .add(b'}')
    .add(b'/')
    .add(b'%');

/// A relative path template with named `{placeholder}` segments.
///
/// # Example
///
/// ```
/// use opsmngr_core::Template;
///
/// let path = Template::new("groups/{groupId}/clusters")
///     .bind("groupId", "abc123")
///     .render()
///     .unwrap();
/// assert_eq!(path, "groups/abc123/clusters");
/// ```
#[derive(Debug, Clone)]
pub struct Template<'a> {
    template: &'a str,
    bindings: Vec<(&'a str, String)>,
}

impl<'a> Template<'a> {
    /// Creates a template from a relative path pattern.
    #[must_use]
    pub const fn new(template: &'a str) -> Self {
        Self {
            template,
            bindings: Vec::new(),
        }
    }

    /// Binds a value to a named placeholder.
    #[must_use]
    pub fn bind(mut self, name: &'a str, value: impl std::fmt::Display) -> Self {
        self.bindings.push((name, value.to_string()));
        self
    }

    /// Substitute every placeholder, percent-encoding the bound values.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPath`] naming the first placeholder without a
    /// bound value, or an unterminated `{`.
    pub fn render(&self) -> Result<String> {
        let mut out = String::with_capacity(self.template.len());
        let mut rest = self.template;

        while let Some((head, tail)) = rest.split_once('{') {
            out.push_str(head);
            let Some((name, after)) = tail.split_once('}') else {
                return Err(Error::invalid_path(
                    self.template,
                    "unterminated placeholder",
                ));
            };
            let Some((_, value)) = self.bindings.iter().find(|(n, _)| *n == name) else {
                return Err(Error::invalid_path(
                    self.template,
                    format!("no value for placeholder '{name}'"),
                ));
            };
            out.extend(utf8_percent_encode(value, PATH_SEGMENT));
            rest = after;
        }
        out.push_str(rest);
        Ok(out)
    }
}

/// Normalize a base URL and append the versioned path segment.
///
/// The base's path is trailing-slash-normalized so that joining any relative
/// operation path yields the host and version segment exactly once.
///
/// # Errors
///
/// Returns [`Error::InvalidBaseUrl`] when `base` is unparseable or cannot
/// serve as a base (e.g. `mailto:`).
pub fn compose_base(base: &str, version: &str) -> Result<Url> {
    let mut url =
        Url::parse(base).map_err(|e| Error::invalid_base_url(format!("'{base}': {e}")))?;
    if url.cannot_be_a_base() {
        return Err(Error::invalid_base_url(format!(
            "'{base}': cannot be used as a base URL"
        )));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }

    let segment = version.trim_matches('/');
    if segment.is_empty() {
        return Ok(url);
    }
    url.join(&format!("{segment}/"))
        .map_err(|e| Error::invalid_base_url(format!("'{base}': {e}")))
}

/// Resolve a relative operation path against a composed base URL.
///
/// A leading `/` on `path` is ignored so operation paths stay relative to the
/// versioned base rather than the host root.
///
/// # Errors
///
/// Returns [`Error::InvalidPath`] if the joined result is not a valid URL.
pub fn join(base: &Url, path: &str) -> Result<Url> {
    base.join(path.trim_start_matches('/'))
        .map_err(|e| Error::invalid_path(path, e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_substitutes_placeholders() {
        let path = Template::new("groups/{groupId}/clusters")
            .bind("groupId", "abc123")
            .render()
            .expect("render");
        assert_eq!(path, "groups/abc123/clusters");
    }

    #[test]
    fn render_multiple_placeholders() {
        let path = Template::new("groups/{groupId}/clusters/{clusterId}")
            .bind("groupId", "g1")
            .bind("clusterId", "c1")
            .render()
            .expect("render");
        assert_eq!(path, "groups/g1/clusters/c1");
    }

    #[test]
    fn render_percent_encodes_values() {
        let path = Template::new("groups/byName/{groupName}")
            .bind("groupName", "dev team/eu")
            .render()
            .expect("render");
        assert_eq!(path, "groups/byName/dev%20team%2Feu");
    }

    #[test]
    fn render_fails_on_unbound_placeholder() {
        let err = Template::new("groups/{groupId}/clusters")
            .render()
            .expect_err("unbound");
        let msg = err.to_string();
        assert!(msg.contains("groupId"), "expected placeholder in: {msg}");
        assert!(matches!(err, Error::InvalidPath { .. }));
    }

    #[test]
    fn render_fails_on_unterminated_placeholder() {
        let err = Template::new("groups/{groupId")
            .bind("groupId", "g1")
            .render()
            .expect_err("unterminated");
        assert!(matches!(err, Error::InvalidPath { .. }));
    }

    #[test]
    fn compose_base_appends_version_once() {
        let base = compose_base("https://ops.example.com/", "api/public/v1.0").expect("compose");
        assert_eq!(base.as_str(), "https://ops.example.com/api/public/v1.0/");
    }

    #[test]
    fn compose_base_normalizes_missing_trailing_slash() {
        let base = compose_base("https://ops.example.com", "api/public/v1.0").expect("compose");
        assert_eq!(base.as_str(), "https://ops.example.com/api/public/v1.0/");
    }

    #[test]
    fn compose_base_keeps_path_prefix() {
        let base = compose_base("https://ops.example.com/mms", "api/public/v1.0").expect("compose");
        assert_eq!(
            base.as_str(),
            "https://ops.example.com/mms/api/public/v1.0/"
        );
    }

    #[test]
    fn compose_base_rejects_relative() {
        let err = compose_base("ops.example.com", "api/public/v1.0").expect_err("relative");
        assert!(matches!(err, Error::InvalidBaseUrl(_)));
    }

    #[test]
    fn compose_base_rejects_cannot_be_a_base() {
        let err = compose_base("mailto:ops@example.com", "api/public/v1.0").expect_err("opaque");
        assert!(matches!(err, Error::InvalidBaseUrl(_)));
    }

    #[test]
    fn join_resolves_spec_example() {
        let base = compose_base("https://ops.example.com/", "api/public/v1.0").expect("compose");
        let path = Template::new("groups/{groupId}/clusters")
            .bind("groupId", "abc123")
            .render()
            .expect("render");

        let url = join(&base, &path).expect("join");
        assert_eq!(
            url.as_str(),
            "https://ops.example.com/api/public/v1.0/groups/abc123/clusters"
        );
    }

    #[test]
    fn join_does_not_duplicate_version_segment() {
        let base = compose_base("https://ops.example.com/", "api/public/v1.0").expect("compose");

        // Joining never mutates the base; repeated calls give identical URLs.
        let first = join(&base, "orgs").expect("join");
        let second = join(&base, "orgs").expect("join");
        assert_eq!(first, second);
        assert_eq!(
            first.as_str(),
            "https://ops.example.com/api/public/v1.0/orgs"
        );
        assert_eq!(first.as_str().matches("api/public/v1.0").count(), 1);
    }

    #[test]
    fn join_ignores_leading_slash() {
        let base = compose_base("https://ops.example.com/", "api/public/v1.0").expect("compose");
        let url = join(&base, "/orgs").expect("join");
        assert_eq!(
            url.as_str(),
            "https://ops.example.com/api/public/v1.0/orgs"
        );
    }
}
