use super::*;

#[test]
fn exit_codes_are_distinct() {
    assert_eq!(EXIT_SUCCESS, 0);
    assert_eq!(EXIT_LIMIT_EXCEEDED, 1);
    assert_eq!(EXIT_CONFIG_ERROR, 2);
}
