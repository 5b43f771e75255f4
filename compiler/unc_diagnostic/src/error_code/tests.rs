use super::*;

#[test]
fn test_error_code_display() {
    assert_eq!(ErrorCode::U1001.to_string(), "U1001");
    assert_eq!(ErrorCode::U3001.as_str(), "U3001");
}

#[test]
fn test_only_unmatched_brace_is_fatal() {
    assert!(ErrorCode::U2001.is_fatal());
    for code in [
        ErrorCode::U0001,
        ErrorCode::U0002,
        ErrorCode::U1001,
        ErrorCode::U1003,
        ErrorCode::U1006,
        ErrorCode::U3001,
    ] {
        assert!(!code.is_fatal(), "{code}");
    }
}

#[test]
fn test_phase_ranges() {
    assert!(ErrorCode::U0001.is_lexer_error());
    assert!(!ErrorCode::U0001.is_resolver_error());
    assert!(ErrorCode::U1004.is_resolver_error());
    assert!(ErrorCode::U2001.is_resolver_error());
    assert!(!ErrorCode::U3001.is_lexer_error());
    assert!(!ErrorCode::U3001.is_resolver_error());
}
