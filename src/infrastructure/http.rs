pub mod yahoo_chart_client;

pub use yahoo_chart_client::*;

use std::collections::BTreeMap;

/// Утилиты для HTTP запросов
pub struct HttpUtils;

impl HttpUtils {
    pub fn is_success_status(status: u16) -> bool {
        (200..300).contains(&status)
    }

    /// Query parameters are appended in key order so URLs are stable.
    pub fn build_url_with_params(base_url: &str, params: &BTreeMap<&str, String>) -> String {
        if params.is_empty() {
            return base_url.to_string();
        }

        let query_string: String = params
            .iter()
            .map(|(key, value)| format!("{}={}", Self::url_encode(key), Self::url_encode(value)))
            .collect::<Vec<_>>()
            .join("&");

        format!("{}?{}", base_url, query_string)
    }

    /// Percent-encode everything outside the RFC 3986 unreserved set.
    pub fn url_encode(input: &str) -> String {
        let mut encoded = String::with_capacity(input.len());
        for byte in input.bytes() {
            match byte {
                b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                    encoded.push(byte as char)
                }
                _ => encoded.push_str(&format!("%{:02X}", byte)),
            }
        }
        encoded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_building() {
        let mut params = BTreeMap::new();
        params.insert("range", "1d".to_string());
        params.insert("interval", "1m".to_string());

        let url = HttpUtils::build_url_with_params("https://api.example.com/data", &params);
        assert_eq!(url, "https://api.example.com/data?interval=1m&range=1d");
    }

    #[test]
    fn test_url_encoding() {
        assert_eq!(HttpUtils::url_encode("hello world"), "hello%20world");
        assert_eq!(HttpUtils::url_encode("a&b=c"), "a%26b%3Dc");
        assert_eq!(HttpUtils::url_encode("^GSPC"), "%5EGSPC");
        assert_eq!(HttpUtils::url_encode("BRK-B"), "BRK-B");
    }

    #[test]
    fn success_range() {
        assert!(HttpUtils::is_success_status(204));
        assert!(!HttpUtils::is_success_status(404));
    }
}
