use crate::error::{Result, ScanError};

/// Build the ordered list of ports to probe.
///
/// - `explicit`: comma separated list such as `"22, 80,443"`. When present and
///   non-blank it wins over the range; order and duplicates are preserved.
/// - otherwise the inclusive range `start..=end` is returned.
///
/// Port 0 is accepted and probed as given.
pub fn build_ports(explicit: Option<&str>, start: u16, end: u16) -> Result<Vec<u16>> {
    match explicit {
        Some(list) if !list.trim().is_empty() => parse_port_list(list),
        _ => port_range(start, end),
    }
}

/// Parse a comma separated port list, failing on the first bad token.
pub fn parse_port_list(list: &str) -> Result<Vec<u16>> {
    list.split(',')
        .map(str::trim)
        .map(|token| {
            token.parse::<u16>().map_err(|_| ScanError::InvalidPort {
                token: token.to_string(),
            })
        })
        .collect()
}

/// Inclusive ascending range of ports.
pub fn port_range(start: u16, end: u16) -> Result<Vec<u16>> {
    if start > end {
        return Err(ScanError::InvalidRange { start, end });
    }
    Ok((start..=end).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_list_keeps_order_and_duplicates() {
        let ports = build_ports(Some("80,80,22"), 1, 1024).unwrap();
        assert_eq!(ports, vec![80, 80, 22]);
    }

    #[test]
    fn explicit_list_trims_whitespace() {
        let ports = build_ports(Some(" 443 ,  8080,22 "), 1, 2).unwrap();
        assert_eq!(ports, vec![443, 8080, 22]);
    }

    #[test]
    fn blank_list_falls_back_to_range() {
        let ports = build_ports(Some("   "), 20, 22).unwrap();
        assert_eq!(ports, vec![20, 21, 22]);
    }

    #[test]
    fn bad_token_is_named_in_error() {
        let err = build_ports(Some("22,http,80"), 1, 2).unwrap_err();
        match err {
            ScanError::InvalidPort { token } => assert_eq!(token, "http"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn empty_token_is_invalid() {
        assert!(matches!(
            parse_port_list("22,,80"),
            Err(ScanError::InvalidPort { token }) if token.is_empty()
        ));
    }

    #[test]
    fn out_of_u16_range_is_invalid() {
        assert!(matches!(
            parse_port_list("70000"),
            Err(ScanError::InvalidPort { .. })
        ));
    }

    #[test]
    fn range_is_inclusive_and_gapless() {
        let ports = port_range(1000, 1009).unwrap();
        assert_eq!(ports.len(), 10);
        assert!(ports.windows(2).all(|w| w[1] == w[0] + 1));
        assert_eq!(ports.first(), Some(&1000));
        assert_eq!(ports.last(), Some(&1009));
    }

    #[test]
    fn single_port_range() {
        assert_eq!(port_range(65535, 65535).unwrap(), vec![65535]);
    }

    #[test]
    fn reversed_range_errors() {
        assert!(matches!(
            port_range(100, 10),
            Err(ScanError::InvalidRange { start: 100, end: 10 })
        ));
    }
}
