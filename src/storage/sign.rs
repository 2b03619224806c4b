use sha1::{Digest, Sha1};

/// Sign an upload request: SHA-1 hex digest of the parameters sorted by key
/// (`k=v` joined with `&`) with the API secret appended.
///
/// The file payload, `api_key`, and the resource type (part of the URL) are
/// excluded from the signature by the provider's signing rules.
pub(crate) fn sign_request(params: &[(&str, String)], api_secret: &str) -> String {
    let mut sorted: Vec<&(&str, String)> = params.iter().collect();
    sorted.sort_by(|a, b| a.0.cmp(b.0));

    let to_sign = sorted
        .iter()
        .map(|(key, value)| format!("{}={}", key, value))
        .collect::<Vec<_>>()
        .join("&");

    let mut hasher = Sha1::new();
    hasher.update(to_sign.as_bytes());
    hasher.update(api_secret.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_signature() {
        let params = [
            ("fetch_format", "auto".to_string()),
            ("folder", "chat_app_images".to_string()),
            ("quality", "auto".to_string()),
            ("timestamp", "1700000000".to_string()),
        ];
        assert_eq!(
            sign_request(&params, "secret123"),
            "ddda1600504d0cb8d0865bfc0c9b05883133389d"
        );
    }

    #[test]
    fn test_parameters_sorted_before_signing() {
        let unsorted = [
            ("timestamp", "1".to_string()),
            ("folder", "chat_app_documents".to_string()),
        ];
        let sorted = [
            ("folder", "chat_app_documents".to_string()),
            ("timestamp", "1".to_string()),
        ];
        assert_eq!(sign_request(&unsorted, "abc"), sign_request(&sorted, "abc"));
        assert_eq!(
            sign_request(&sorted, "abc"),
            "162b157a061c36137353030156458a075cc6913c"
        );
    }

    #[test]
    fn test_secret_changes_signature() {
        let params = [("timestamp", "1".to_string())];
        assert_ne!(sign_request(&params, "a"), sign_request(&params, "b"));
    }
}
