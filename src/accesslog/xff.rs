//! `X-Forwarded-For` origin extraction and IP normalisation.
//!
//! A proxy chain leaves the client's address buried in a comma-separated
//! XFF header, often padded with addresses from the RFC-reserved
//! documentation ranges that test rigs and broken proxies emit. The
//! heuristic here tokenizes the header, skips candidates in the reserved
//! ranges, and falls back to the first token when nothing looks real.
//!
//! The IPv6 reserved check matches only the literal `2001:0db8` prefix up
//! to the second colon; case variants and `2001:db8` (no leading zero) are
//! not matched. Known limitation, kept narrow on purpose.

use crate::WeblogError;

/// IPv4 documentation/test prefixes (everything before the last octet).
const RESERVED_IPV4_PREFIXES: [&str; 3] = ["192.0.2", "198.51.100", "203.0.113"];

/// IPv6 documentation prefix, compared against the text up to the second colon.
const RESERVED_IPV6_PREFIX: &str = "2001:0db8";

/// XFF values that mean "no header present".
const ABSENT_XFF: [&str; 2] = ["", "-"];

/// Tokenize an XFF header into candidate IP strings.
///
/// The whole field is lower-cased and stripped of whitespace, then split on
/// `,`. Empty pieces are preserved as empty strings.
///
/// # Examples
///
/// ```
/// use weblog::accesslog::xff::tokenise;
///
/// assert_eq!(tokenise("10.0.0.1, 2001:DB8::1"), ["10.0.0.1", "2001:db8::1"]);
/// assert_eq!(tokenise(""), [""]);
/// ```
pub fn tokenise(xff: &str) -> Vec<String> {
    let cleaned: String = xff
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();
    cleaned.split(',').map(str::to_string).collect()
}

/// Classify a candidate token as a real address or a reserved test address.
///
/// IPv4-shaped candidates (containing `.`) are reserved when the text before
/// the last `.` equals one of the RFC documentation prefixes; anything else
/// dotted counts as real, even when it is not four octets. IPv6-shaped
/// candidates (two or more `:`) are reserved when the text up to the second
/// `:` equals `2001:0db8`. Everything else is not real.
///
/// # Examples
///
/// ```
/// use weblog::accesslog::xff::is_real_ip;
///
/// assert!(is_real_ip("8.8.8.8"));
/// assert!(!is_real_ip("192.0.2.77"));
/// assert!(is_real_ip("2001:4860:4860::8888"));
/// assert!(!is_real_ip("2001:0db8:abcd::1"));
/// assert!(!is_real_ip("unknown"));
/// ```
pub fn is_real_ip(candidate: &str) -> bool {
    if let Some(last_dot) = candidate.rfind('.') {
        return !RESERVED_IPV4_PREFIXES.contains(&&candidate[..last_dot]);
    }

    if let Some(first_colon) = candidate.find(':') {
        if let Some(offset) = candidate[first_colon + 1..].find(':') {
            let second_colon = first_colon + 1 + offset;
            return &candidate[..second_colon] != RESERVED_IPV6_PREFIX;
        }
    }

    false
}

/// Extract the best-guess client origin from an XFF header.
///
/// A single-token header is returned unconditionally, reserved or not.
/// Otherwise the first token classified real wins; if none qualify, the
/// first token is returned. Linear scan, first match.
///
/// # Examples
///
/// ```
/// use weblog::accesslog::xff::extract_origin;
///
/// assert_eq!(extract_origin("192.0.2.5, 8.8.8.8"), "8.8.8.8");
/// assert_eq!(extract_origin("192.0.2.5"), "192.0.2.5");
/// ```
pub fn extract_origin(xff: &str) -> String {
    let mut tokens = tokenise(xff);
    if tokens.len() == 1 {
        return tokens.remove(0);
    }

    match tokens.iter().position(|t| is_real_ip(t)) {
        Some(i) => tokens.swap_remove(i),
        None => tokens.remove(0),
    }
}

/// Convert four decimal octet strings to the numeric form of an IPv4
/// address (`o0·2^24 + o1·2^16 + o2·2^8 + o3`).
///
/// A parse failure in **any** octet yields 0 for the whole conversion.
/// Octet values are not range-checked: values above 255 multiply straight
/// through, which can carry the result past the 32-bit range — hence the
/// `u64` return.
///
/// # Examples
///
/// ```
/// use weblog::accesslog::xff::ipv4_to_numeric;
///
/// assert_eq!(
///     ipv4_to_numeric(&["192".into(), "168".into(), "1".into(), "1".into()]),
///     3232235777
/// );
/// assert_eq!(
///     ipv4_to_numeric(&["a".into(), "1".into(), "1".into(), "1".into()]),
///     0
/// );
/// ```
pub fn ipv4_to_numeric(octets: &[String; 4]) -> u64 {
    let mut parsed = [0u64; 4];
    for (slot, octet) in parsed.iter_mut().zip(octets) {
        match octet.parse::<u64>() {
            Ok(v) => *slot = v,
            Err(_) => return 0,
        }
    }
    parsed[0] * 16_777_216 + parsed[1] * 65_536 + parsed[2] * 256 + parsed[3]
}

/// Merge IP addresses with their paired `X-Forwarded-For` headers.
///
/// Rows whose XFF value is neither empty nor `"-"` get their IP replaced by
/// [`extract_origin`] of the header; other rows keep the original IP. The
/// two inputs must have the same length or the call fails with
/// [`WeblogError::LengthMismatch`] before any row is processed.
///
/// The result is a best-effort heuristic; no validation is performed on the
/// extracted strings.
///
/// # Examples
///
/// ```
/// use weblog::accesslog::xff::normalise_ips;
///
/// let ips = vec!["10.0.0.1".to_string(), "10.0.0.2".to_string()];
/// let xffs = vec!["-".to_string(), "192.0.2.4, 8.8.4.4".to_string()];
/// let out = normalise_ips(&ips, &xffs).unwrap();
/// assert_eq!(out, ["10.0.0.1", "8.8.4.4"]);
/// ```
pub fn normalise_ips(ips: &[String], xffs: &[String]) -> Result<Vec<String>, WeblogError> {
    if ips.len() != xffs.len() {
        return Err(WeblogError::LengthMismatch(format!(
            "{} IP addresses vs {} X-Forwarded-For values",
            ips.len(),
            xffs.len()
        )));
    }

    let mut output = Vec::with_capacity(ips.len());
    for (ip, xff) in ips.iter().zip(xffs) {
        if ABSENT_XFF.contains(&xff.as_str()) {
            output.push(ip.clone());
        } else {
            output.push(extract_origin(xff));
        }
    }
    Ok(output)
}
