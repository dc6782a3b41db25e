const SUFFIX_ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz0123456789";

/// Builds a username that will not collide with earlier signups
///
/// The result is `<prefix>.<8 lowercase alphanumerics>`.
///
/// ```
/// use user_api_client::utils::id::unique_username;
/// let name = unique_username("qa");
/// assert!(name.starts_with("qa."));
/// ```
pub fn unique_username(prefix: &str) -> String {
    let alphabet: Vec<char> = SUFFIX_ALPHABET.chars().collect();
    format!("{}.{}", prefix, nanoid::nanoid!(8, &alphabet))
}

/// Builds a throwaway email address for `username` under `domain`
pub fn unique_email(username: &str, domain: &str) -> String {
    format!("{username}@{domain}")
}
