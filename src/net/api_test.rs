use super::*;

#[test]
fn users_endpoint_is_the_collection_path() {
    assert_eq!(users_endpoint(), "/users");
}
