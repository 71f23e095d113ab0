use urlvalue::{QueryMap, UrlValue};

fn main() {
    let url: UrlValue = "https://example.com/search?q=rust&page=1&debug"
        .parse()
        .expect("Failed to parse URL");

    println!("q = {}", url.query_parameter("q")); // rust
    println!("debug present: {}", url.has_query_parameter("debug")); // true

    let next = url
        .with_query_parameter("page", Some("2"))
        .with_query_parameter("sort", Some("stars"))
        .without_query_parameter("debug");
    println!("Next page: {next}"); // https://example.com/search?q=rust&page=2&sort=stars

    // Iterate in insertion order; bare flags have no value
    for (key, value) in url.query_parameters().iter() {
        match value {
            Some(value) => println!("{key} = {value}"),
            None => println!("{key} (flag)"),
        }
    }

    let params = QueryMap::parse("a=1&b&a=3");
    println!("Deduplicated: {params}"); // a=3&b
}
