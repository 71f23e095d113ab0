/// Loader for the JSON component test table
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
#[serde(untagged)]
pub enum Entry {
    /// A parse test case
    Case(ComponentCase),
    /// A comment line (string)
    Comment(String),
}

#[derive(Debug, Deserialize, Clone)]
pub struct ComponentCase {
    pub input: String,
    #[serde(default)]
    pub scheme: String,
    #[serde(default)]
    pub user: String,
    #[serde(default)]
    pub pass: String,
    #[serde(default)]
    pub host: String,
    #[serde(default)]
    pub port: u16,
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub fragment: String,
    /// Serialized form; defaults to `input`
    #[serde(default)]
    pub href: Option<String>,
    /// Expected `ParseError` variant name
    #[serde(default)]
    pub failure: Option<String>,
}

impl ComponentCase {
    pub fn expected(&self, field: &str) -> String {
        match field {
            "scheme" => self.scheme.clone(),
            "user" => self.user.clone(),
            "pass" => self.pass.clone(),
            "host" => self.host.clone(),
            "port" => self.port.to_string(),
            "path" => self.path.clone(),
            "query" => self.query.clone(),
            "fragment" => self.fragment.clone(),
            "href" => self.href.clone().unwrap_or_else(|| self.input.clone()),
            _ => String::new(),
        }
    }
}

pub fn load_cases() -> Vec<ComponentCase> {
    let data = include_str!("components.json");
    let entries: Vec<Entry> =
        serde_json::from_str(data).expect("Failed to parse component test data");
    entries
        .into_iter()
        .filter_map(|entry| match entry {
            Entry::Case(case) => Some(case),
            Entry::Comment(_) => None,
        })
        .collect()
}
