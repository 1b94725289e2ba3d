use super::is_valid_image_url;

#[test]
fn accepts_http_and_https_urls() {
    assert!(is_valid_image_url("https://img.example/iron.png"));
    assert!(is_valid_image_url("http://img.example/iron.png"));
    assert!(is_valid_image_url("https://img.example"));
}

#[test]
fn rejects_non_urls() {
    assert!(!is_valid_image_url(""));
    assert!(!is_valid_image_url("iron.png"));
    assert!(!is_valid_image_url("/static/iron.png"));
    assert!(!is_valid_image_url("ftp://img.example/iron.png"));
}

#[test]
fn rejects_scheme_without_host() {
    assert!(!is_valid_image_url("https://"));
    assert!(!is_valid_image_url("https:///path"));
}
