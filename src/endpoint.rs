//! Data-driven endpoint descriptors.
//!
//! Every API operation is a constant [`Endpoint`] (HTTP method + path
//! template) plus a call into one generic URL-assembly routine. Path
//! arguments replace `{}` placeholders verbatim; query pairs are appended
//! unconditionally and keep their declaration order.

use reqwest::Method;

/// One remote operation: method plus a path template with positional `{}`
/// placeholders, rooted at the API host.
pub(crate) struct Endpoint {
    pub method: Method,
    pub path: &'static str,
}

impl Endpoint {
    pub(crate) const fn new(method: Method, path: &'static str) -> Self {
        Self { method, path }
    }

    /// Assembles the fully-qualified URL.
    ///
    /// `path_args` fill the template's placeholders in order and are inserted
    /// verbatim; callers are responsible for passing valid identifiers.
    /// Every query pair is serialized even when its value is empty
    /// (`offset=` stays in the URL), with values percent-encoded.
    pub(crate) fn url(&self, base: &str, path_args: &[&str], query: &[(&str, String)]) -> String {
        let mut url = String::with_capacity(base.len() + self.path.len() + 32);
        url.push_str(base);

        let mut args = path_args.iter();
        let mut rest = self.path;
        while let Some(pos) = rest.find("{}") {
            url.push_str(&rest[..pos]);
            // a template with more placeholders than arguments is a
            // programming error inside this crate
            url.push_str(args.next().unwrap_or(&""));
            rest = &rest[pos + 2..];
        }
        url.push_str(rest);

        for (i, (key, value)) in query.iter().enumerate() {
            url.push(if i == 0 { '?' } else { '&' });
            url.push_str(key);
            url.push('=');
            url.push_str(&urlencoding::encode(value));
        }

        url
    }
}
