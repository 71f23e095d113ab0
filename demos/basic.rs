use urlvalue::UrlValue;

fn main() {
    // Parse a simple URL
    let url: UrlValue = UrlValue::from_string("http://localhost/wp-json/v2/?foo=bar")
        .expect("Failed to parse URL");

    println!("URL: {url}"); // http://localhost/wp-json/v2/?foo=bar
    println!("Scheme: {}", url.scheme()); // http
    println!("Host: {}", url.host()); // localhost
    println!("Port: {}", url.port()); // 0
    println!("Path: {}", url.path()); // /wp-json/v2/
    println!("Query: {}", url.query()); // foo=bar

    // Derive a new URL; the original is unchanged
    let moved = url
        .with_scheme("https://")
        .with_host("foobar")
        .with_path("/wp-json/v2/reactr-bg")
        .with_port(8443);

    println!("Moved: {moved}"); // https://foobar:8443/wp-json/v2/reactr-bg?foo=bar
    println!("Original: {url}"); // http://localhost/wp-json/v2/?foo=bar
}
