use url::Url;

/// Pulls an app-store identifier out of shared text.
///
/// Share payloads are rarely a bare URL; they usually carry surrounding
/// prose ("check this out https://..."). Each whitespace-separated token
/// is tried as a URL and the first non-empty `id` query parameter wins.
/// Malformed input is the normal absent case, never an error.
pub fn extract_app_id(text: &str) -> Option<String> {
    text.split_whitespace().find_map(id_query_param)
}

fn id_query_param(candidate: &str) -> Option<String> {
    let url = Url::parse(candidate).ok()?;
    url.query_pairs()
        .find(|(key, value)| key == "id" && !value.is_empty())
        .map(|(_, value)| value.into_owned())
}
