//! Hostname validation for rule targets
//!
//! Rules only evaluate targets that are either well-formed hostnames or
//! IPv4 literals. Labels follow the usual LDH rules: ASCII letters, digits
//! and hyphens, at most 63 bytes, no leading or trailing hyphen.

use crate::error::{Error, Result};
use once_cell::sync::Lazy;
use regex::Regex;

const MAX_NAME_LEN: usize = 255;
const MAX_LABEL_LEN: usize = 63;

// Stricter than the matcher's grammar: at most one leading zero per octet
const TARGET_OCTET: &str = r"([0-9]{1,2}|1[0-9][0-9]|2[0-4][0-9]|25[0-5])";

static TARGET_IPV4_RE: Lazy<Regex> = Lazy::new(|| {
    let pattern = format!(r"^{TARGET_OCTET}\.{TARGET_OCTET}\.{TARGET_OCTET}\.{TARGET_OCTET}$");
    Regex::new(&pattern).expect("target IPv4 pattern is a valid regex")
});

/// Check that `name` is a well-formed hostname.
///
/// An empty name is accepted. The top-level label may not start with a
/// digit, so IPv4 literals are rejected here; see [`is_valid_target`].
pub fn check_domain(name: &str) -> Result<()> {
    if name.is_empty() {
        return Ok(());
    }
    if name.len() > MAX_NAME_LEN {
        return Err(Error::invalid_domain(
            name,
            format!("name length is {}, can't exceed {MAX_NAME_LEN}", name.len()),
        ));
    }

    let bytes = name.as_bytes();
    let mut start = 0;
    for (i, &b) in bytes.iter().enumerate() {
        if b == b'.' {
            let label = &name[start..i];
            if label.is_empty() {
                return Err(Error::invalid_domain(
                    name,
                    format!("invalid character '.' at offset {i}: label can't begin with a period"),
                ));
            }
            check_label(name, label, start, "label")?;
            start = i + 1;
            continue;
        }
        if !(b.is_ascii_alphanumeric() || b == b'-') {
            // Every byte before `i` is ASCII, so `i` is a char boundary
            let c = name[i..].chars().next().unwrap_or(char::REPLACEMENT_CHARACTER);
            return Err(Error::invalid_domain(
                name,
                format!("invalid character '{c}' at offset {i}"),
            ));
        }
    }

    let tld = &name[start..];
    if tld.is_empty() {
        return Err(Error::invalid_domain(
            name,
            "missing top level domain, domain can't end with a period",
        ));
    }
    check_label(name, tld, start, "top level domain")?;
    if tld.as_bytes()[0].is_ascii_digit() {
        return Err(Error::invalid_domain(
            name,
            format!("top level domain '{tld}' at offset {start} begins with a digit"),
        ));
    }

    Ok(())
}

fn check_label(name: &str, label: &str, offset: usize, kind: &str) -> Result<()> {
    if label.len() > MAX_LABEL_LEN {
        return Err(Error::invalid_domain(
            name,
            format!("byte length of {kind} '{label}' is {}, can't exceed {MAX_LABEL_LEN}", label.len()),
        ));
    }
    if label.starts_with('-') {
        return Err(Error::invalid_domain(
            name,
            format!("{kind} '{label}' at offset {offset} begins with a hyphen"),
        ));
    }
    if label.ends_with('-') {
        return Err(Error::invalid_domain(
            name,
            format!("{kind} '{label}' at offset {offset} ends with a hyphen"),
        ));
    }
    Ok(())
}

/// Check if `input` is a hostname or an IPv4 literal.
///
/// Octets may carry one leading zero (`"01.2.3.4"`) but not two
/// (`"001.2.3.4"`, `"010.1.1.1"`), even though the matcher itself would
/// classify those as addresses.
pub fn is_valid_target(input: &str) -> bool {
    check_domain(input).is_ok() || TARGET_IPV4_RE.is_match(input)
}
