use super::*;

#[test]
fn validate_sign_up_input_trims_name_and_email() {
    let registration =
        validate_sign_up_input("  Alice  ", " alice@example.com ", "hunter2").unwrap();
    assert_eq!(registration.name, "Alice");
    assert_eq!(registration.email, "alice@example.com");
    assert_eq!(registration.password, "hunter2");
}

#[test]
fn validate_sign_up_input_requires_every_field() {
    assert_eq!(
        validate_sign_up_input("", "alice@example.com", "hunter2"),
        Err("Enter name, email, and password.")
    );
    assert_eq!(
        validate_sign_up_input("Alice", "   ", "hunter2"),
        Err("Enter name, email, and password.")
    );
    assert_eq!(
        validate_sign_up_input("Alice", "alice@example.com", ""),
        Err("Enter name, email, and password.")
    );
}

#[test]
fn validate_sign_up_input_preserves_password_whitespace() {
    let registration = validate_sign_up_input("Alice", "alice@example.com", " p w ").unwrap();
    assert_eq!(registration.password, " p w ");
}
