use crate::character_sets::{has_forbidden_host_byte, is_c0_control_or_del, is_valid_scheme};
use crate::compat::{String, ToString};
use crate::error::{ParseError, Result};
use crate::helpers::{prune_fragment, prune_query, split_at_slash, trim_control_and_space};
use crate::url_components::UrlComponents;

/// Split a URL string into its named components.
///
/// Relative references are accepted: every component is optional.
/// Only structurally broken input is rejected.
pub fn parse_components(input: &str) -> Result<UrlComponents> {
    let input = trim_control_and_space(input);
    if input.bytes().any(is_c0_control_or_del) {
        return Err(ParseError::InvalidUrl);
    }

    let mut components = UrlComponents::new();

    let (rest, fragment) = prune_fragment(input);
    components.fragment = fragment.map(ToString::to_string);

    let (rest, query) = prune_query(rest);
    components.query = query.map(ToString::to_string);

    let rest = match split_scheme(rest)? {
        SchemeSplit::Scheme(scheme, after) => {
            components.scheme = Some(scheme.to_string());
            after
        }
        SchemeSplit::HostPort(host, port, path) => {
            components.host = Some(host.to_string());
            components.set_port(port);
            path
        }
        SchemeSplit::None => rest,
    };

    let path = match rest.strip_prefix("//") {
        Some(after) => {
            let (authority, path) = split_at_slash(after);
            parse_authority(authority, &mut components)?;
            path
        }
        None => rest,
    };

    if !path.is_empty() {
        components.path = Some(path.to_string());
    }

    Ok(components)
}

enum SchemeSplit<'a> {
    /// `scheme:rest`
    Scheme(&'a str, &'a str),
    /// `host:port[/path]` written without `//`
    HostPort(&'a str, u16, &'a str),
    None,
}

fn split_scheme(input: &str) -> Result<SchemeSplit<'_>> {
    let Some(colon) = memchr::memchr(b':', input.as_bytes()) else {
        return Ok(SchemeSplit::None);
    };
    let candidate = &input[..colon];
    let after = &input[colon + 1..];

    if candidate.is_empty() {
        return Err(ParseError::InvalidScheme);
    }
    // A slash before the colon makes this a relative path such as `/a:b`
    if candidate.contains('/') || !is_valid_scheme(candidate) {
        return Ok(SchemeSplit::None);
    }

    if !after.starts_with("//") {
        let (port, path) = split_at_slash(after);
        if let Some(port) = parse_port(port) {
            return Ok(SchemeSplit::HostPort(candidate, port, path));
        }
    }

    Ok(SchemeSplit::Scheme(candidate, after))
}

fn parse_authority(authority: &str, components: &mut UrlComponents) -> Result<()> {
    let (userinfo, host_port) = match memchr::memrchr(b'@', authority.as_bytes()) {
        Some(at) => (Some(&authority[..at]), &authority[at + 1..]),
        None => (None, authority),
    };

    if let Some(userinfo) = userinfo {
        match userinfo.split_once(':') {
            Some((user, pass)) => {
                components.user = Some(user.to_string());
                components.pass = Some(pass.to_string());
            }
            None => components.user = Some(userinfo.to_string()),
        }
    }

    let (host, port) = split_host_port(host_port)?;

    let explicit_port = match port {
        Some(port) if !port.is_empty() => {
            components.set_port(parse_port(port).ok_or(ParseError::InvalidPort)?);
            true
        }
        _ => false,
    };

    if host.is_empty() && (userinfo.is_some() || explicit_port) {
        return Err(ParseError::InvalidHost);
    }
    if has_forbidden_host_byte(host) {
        return Err(ParseError::InvalidHost);
    }

    // Kept even when empty so `file:///path` keeps its authority marker
    components.host = Some(String::from(host));
    Ok(())
}

/// Decimal port in `0..=65535`, no sign
fn parse_port(port: &str) -> Option<u16> {
    if port.is_empty() || !port.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    port.parse().ok()
}

/// Parse host string into hostname and optional port parts.
fn split_host_port(host: &str) -> Result<(&str, Option<&str>)> {
    if host.starts_with('[') {
        // IPv6 address
        let bracket_end = host.find(']').ok_or(ParseError::InvalidIpv6)?;
        let ipv6_part = &host[..=bracket_end];
        let port_part = &host[bracket_end + 1..];
        if port_part.is_empty() {
            return Ok((ipv6_part, None));
        }
        return port_part
            .strip_prefix(':')
            .map(|port| (ipv6_part, Some(port)))
            .ok_or(ParseError::InvalidHost);
    }

    // Regular host or IPv4
    Ok(match host.rfind(':') {
        Some(colon_pos) => (&host[..colon_pos], Some(&host[colon_pos + 1..])),
        None => (host, None),
    })
}
