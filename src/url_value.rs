use crate::codec::{StandardCodec, UrlCodec};
use crate::compat::{String, ToString};
use crate::error::{ParseError, Result};
use crate::query_map::QueryMap;
use crate::url_components::UrlComponents;

/// Immutable URL value.
///
/// Holds the parsed components and, separately, an ordered map of query
/// parameters. Every `with_*` method returns a new value and leaves the
/// receiver untouched. Getters never fail: absent components read as `""`
/// (or `0` for the port).
///
/// # Examples
///
/// ```
/// use urlvalue::UrlValue;
///
/// let url: UrlValue = UrlValue::from_string("http://localhost/wp-json/v2/?foo=bar")?;
/// let moved = url.with_host("foobar").with_port(8080);
///
/// assert_eq!(url.host(), "localhost");
/// assert_eq!(moved.to_string(), "http://foobar:8080/wp-json/v2/?foo=bar");
/// # Ok::<(), urlvalue::ParseError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UrlValue<C = StandardCodec> {
    /// Never carries a `query`; that lives in `query` below
    components: UrlComponents,
    query: QueryMap,
    codec: C,
}

impl<C: UrlCodec + Default> UrlValue<C> {
    /// Parse a URL string with the default codec.
    ///
    /// # Errors
    ///
    /// Returns the codec's [`ParseError`] unchanged when `input` cannot be split.
    pub fn from_string(input: &str) -> Result<Self> {
        Self::from_string_with(input, C::default())
    }

    /// Build from raw components. A `query` entry is split off into the query map.
    pub fn from_components(components: UrlComponents) -> Self {
        Self::assemble(components, C::default())
    }
}

impl<C: UrlCodec> UrlValue<C> {
    /// Parse a URL string with the given codec.
    ///
    /// # Errors
    ///
    /// Returns the codec's [`ParseError`] unchanged when `input` cannot be split.
    pub fn from_string_with(input: &str, codec: C) -> Result<Self> {
        match codec.parse_url(input) {
            Ok(components) => Ok(Self::assemble(components, codec)),
            Err(err) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(input, error = %err, "failed to parse url");
                Err(err)
            }
        }
    }

    /// Build from raw components with the given codec.
    pub fn from_components_with(components: UrlComponents, codec: C) -> Self {
        Self::assemble(components, codec)
    }
}

impl<C> UrlValue<C> {
    /// Single construction path: moves `query` out of the components and
    /// drops a `Some(0)` port.
    fn assemble(mut components: UrlComponents, codec: C) -> Self {
        components.port = components.port.filter(|&port| port != 0);
        let query = components
            .query
            .take()
            .map(|query| QueryMap::parse(&query))
            .unwrap_or_default();
        Self {
            components,
            query,
            codec,
        }
    }

    pub fn scheme(&self) -> &str {
        self.components.scheme.as_deref().unwrap_or("")
    }

    pub fn user(&self) -> &str {
        self.components.user.as_deref().unwrap_or("")
    }

    pub fn pass(&self) -> &str {
        self.components.pass.as_deref().unwrap_or("")
    }

    pub fn host(&self) -> &str {
        self.components.host.as_deref().unwrap_or("")
    }

    /// Explicit port, or `0` when none is set.
    pub fn port(&self) -> u16 {
        self.components.port.unwrap_or(0)
    }

    pub fn path(&self) -> &str {
        self.components.path.as_deref().unwrap_or("")
    }

    /// Query string without the leading `?`, rebuilt from the query map.
    pub fn query(&self) -> String {
        self.query.serialize()
    }

    /// Value of a query parameter.
    ///
    /// Absent keys, bare flags and empty values all read as `""`; use
    /// [`query_parameters`](Self::query_parameters) to tell them apart.
    pub fn query_parameter(&self, key: &str) -> &str {
        self.query.get(key).flatten().unwrap_or("")
    }

    pub fn has_query_parameter(&self, key: &str) -> bool {
        self.query.contains_key(key)
    }

    pub fn query_parameters(&self) -> &QueryMap {
        &self.query
    }

    pub fn fragment(&self) -> &str {
        self.components.fragment.as_deref().unwrap_or("")
    }

    /// Components without the query.
    pub fn components(&self) -> &UrlComponents {
        &self.components
    }

    pub fn codec(&self) -> &C {
        &self.codec
    }
}

impl<C: Clone> UrlValue<C> {
    /// Copy with edited components. The live query map carries over as-is,
    /// so earlier `with_query_parameter` calls survive.
    fn with_components(&self, edit: impl FnOnce(&mut UrlComponents)) -> Self {
        let mut components = self.components.clone();
        edit(&mut components);
        Self {
            components,
            query: self.query.clone(),
            codec: self.codec.clone(),
        }
    }

    /// Copy with an edited query map.
    fn with_query_map(&self, edit: impl FnOnce(&mut QueryMap)) -> Self {
        let mut query = self.query.clone();
        edit(&mut query);
        Self {
            components: self.components.clone(),
            query,
            codec: self.codec.clone(),
        }
    }

    #[must_use]
    pub fn with_scheme(&self, scheme: &str) -> Self {
        let scheme = scheme.trim_matches([':', '/']);
        self.with_components(|c| c.scheme = Some(scheme.to_string()))
    }

    /// Set user and password. An empty `user` removes both.
    #[must_use]
    pub fn with_user_info(&self, user: &str, pass: Option<&str>) -> Self {
        self.with_components(|c| {
            if user.is_empty() {
                c.user = None;
                c.pass = None;
            } else {
                c.user = Some(user.to_string());
                c.pass = pass.map(ToString::to_string);
            }
        })
    }

    #[must_use]
    pub fn with_host(&self, host: &str) -> Self {
        self.with_components(|c| c.host = Some(host.to_string()))
    }

    /// Set the port. `0` removes it, leaving the scheme's implicit port.
    #[must_use]
    pub fn with_port(&self, port: u16) -> Self {
        self.with_components(|c| c.set_port(port))
    }

    #[must_use]
    pub fn with_path(&self, path: &str) -> Self {
        self.with_components(|c| c.path = Some(path.to_string()))
    }

    /// Replace the whole query by re-parsing `query` (without the leading `?`).
    #[must_use]
    pub fn with_query(&self, query: &str) -> Self {
        let mut components = self.components.clone();
        components.query = Some(query.to_string());
        Self::assemble(components, self.codec.clone())
    }

    /// Set one query parameter; `None` makes it a bare flag.
    /// An existing key keeps its position, a new key goes last.
    #[must_use]
    pub fn with_query_parameter(&self, key: &str, value: Option<&str>) -> Self {
        self.with_query_map(|query| query.insert(key, value))
    }

    /// Drop one query parameter. Missing keys are not an error.
    #[must_use]
    pub fn without_query_parameter(&self, key: &str) -> Self {
        self.with_query_map(|query| {
            query.remove(key);
        })
    }

    /// Set the fragment. An empty string removes it.
    #[must_use]
    pub fn with_fragment(&self, fragment: &str) -> Self {
        self.with_components(|c| {
            c.fragment = (!fragment.is_empty()).then(|| fragment.to_string());
        })
    }
}

impl<C: UrlCodec> core::fmt::Display for UrlValue<C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut components = self.components.clone();
        components.query = Some(self.query.serialize());
        f.write_str(&self.codec.build_url(&components))
    }
}

impl<C: UrlCodec + Default> core::str::FromStr for UrlValue<C> {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_string(s)
    }
}

impl<C: UrlCodec + Default> TryFrom<&str> for UrlValue<C> {
    type Error = ParseError;

    fn try_from(s: &str) -> Result<Self> {
        Self::from_string(s)
    }
}
