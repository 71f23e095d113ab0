use crate::compat::{String, ToString};
use crate::percent_encode::{
    percent_encode_fragment_into, percent_encode_path_into, percent_encode_query_into,
    percent_encode_userinfo_into,
};
use crate::url_components::UrlComponents;

/// Assemble a URL string from its components.
///
/// Output shape: `scheme:` `//user:pass@host:port` `/path` `?query` `#fragment`,
/// each part emitted only when its component is present (the query only when
/// non-empty). The authority needs a host: user, pass and port alone are not
/// written. Bytes that would be re-read as a different component are
/// percent-encoded.
pub fn build_url(components: &UrlComponents) -> String {
    let mut buffer = String::with_capacity(estimate_len(components));

    let scheme = components.scheme.as_deref().filter(|s| !s.is_empty());
    if let Some(scheme) = scheme {
        buffer.push_str(scheme);
        buffer.push(':');
    }

    let has_authority = components.has_authority();
    if has_authority {
        buffer.push_str("//");
        if components.user.is_some() || components.pass.is_some() {
            percent_encode_userinfo_into(&mut buffer, components.user.as_deref().unwrap_or(""));
            if let Some(pass) = components.pass.as_deref() {
                buffer.push(':');
                percent_encode_userinfo_into(&mut buffer, pass);
            }
            buffer.push('@');
        }
        if let Some(host) = components.host.as_deref() {
            buffer.push_str(host);
        }
        if let Some(port) = components.port {
            buffer.push(':');
            buffer.push_str(&port.to_string());
        }
    }

    if let Some(path) = components.path.as_deref().filter(|p| !p.is_empty()) {
        if has_authority {
            if !path.starts_with('/') {
                buffer.push('/');
            }
        } else if path.starts_with("//") {
            // Would otherwise re-read as an authority
            buffer.push_str("/.");
        } else if scheme.is_none() && first_segment_has_colon(path) {
            // Would otherwise re-read as `scheme:` or `host:port`
            buffer.push_str("./");
        }
        percent_encode_path_into(&mut buffer, path);
    }

    if let Some(query) = components.query.as_deref().filter(|q| !q.is_empty()) {
        buffer.push('?');
        percent_encode_query_into(&mut buffer, query);
    }

    if let Some(fragment) = components.fragment.as_deref() {
        buffer.push('#');
        percent_encode_fragment_into(&mut buffer, fragment);
    }

    buffer
}

fn first_segment_has_colon(path: &str) -> bool {
    let end = memchr::memchr(b'/', path.as_bytes()).unwrap_or(path.len());
    memchr::memchr(b':', &path.as_bytes()[..end]).is_some()
}

fn estimate_len(components: &UrlComponents) -> usize {
    [
        &components.scheme,
        &components.user,
        &components.pass,
        &components.host,
        &components.path,
        &components.query,
        &components.fragment,
    ]
    .into_iter()
    .map(|part| part.as_deref().map_or(0, str::len) + 3)
    .sum::<usize>()
        + 6
}
