use super::*;

// =============================================================
// Role
// =============================================================

#[test]
fn role_from_known_strings() {
    assert_eq!(Role::from("Coach".to_owned()), Role::Coach);
    assert_eq!(Role::from("Athlete".to_owned()), Role::Athlete);
}

#[test]
fn role_match_is_case_sensitive() {
    assert_eq!(Role::from("coach".to_owned()), Role::Other("coach".to_owned()));
    assert!(!Role::from("COACH".to_owned()).is_coach());
}

#[test]
fn role_other_keeps_raw_value_on_the_wire() {
    let role = Role::Other("Nutritionist".to_owned());
    assert_eq!(serde_json::to_value(&role).unwrap(), serde_json::json!("Nutritionist"));
}

// =============================================================
// User
// =============================================================

#[test]
fn user_deserializes_from_login_payload() {
    let user: User = serde_json::from_value(serde_json::json!({
        "id": "u-1",
        "name": "Marcus",
        "email": "marcus@gym.com",
        "role": "Coach"
    }))
    .unwrap();
    assert_eq!(user.id, "u-1");
    assert!(user.role.is_coach());
}

#[test]
fn user_accepts_numeric_id() {
    let user: User = serde_json::from_value(serde_json::json!({
        "id": 42,
        "name": "Ana",
        "email": "ana@gym.com",
        "role": "Athlete"
    }))
    .unwrap();
    assert_eq!(user.id, "42");
    assert_eq!(user.role, Role::Athlete);
}

#[test]
fn user_rejects_boolean_id() {
    let result = serde_json::from_value::<User>(serde_json::json!({
        "id": true,
        "name": "Ana",
        "email": "ana@gym.com",
        "role": "Athlete"
    }));
    assert!(result.is_err());
}

#[test]
fn user_requires_role() {
    let result = serde_json::from_value::<User>(serde_json::json!({
        "id": "u-1",
        "name": "Ana",
        "email": "ana@gym.com"
    }));
    assert!(result.is_err());
}

// =============================================================
// Response bodies
// =============================================================

#[test]
fn login_response_converts_into_session() {
    let resp: LoginResponse = serde_json::from_value(serde_json::json!({
        "jwt": "tok-abc",
        "user": { "id": "u-1", "name": "Ana", "email": "ana@gym.com", "role": "Athlete" }
    }))
    .unwrap();
    let session = Session::from(resp);
    assert_eq!(session.token, "tok-abc");
    assert_eq!(session.user.name, "Ana");
}

#[test]
fn register_response_message_is_optional() {
    let resp: RegisterResponse = serde_json::from_str("{}").unwrap();
    assert_eq!(resp.message, None);
}

#[test]
fn error_body_ignores_unknown_fields() {
    let body: ErrorBody = serde_json::from_str(r#"{"message":"Email ya registrado","code":11000}"#).unwrap();
    assert_eq!(body.message.as_deref(), Some("Email ya registrado"));
}

#[test]
fn registration_serializes_all_fields() {
    let reg = Registration {
        name: "Marcus Vicius".to_owned(),
        email: "m@gym.com".to_owned(),
        password: "secret1".to_owned(),
    };
    assert_eq!(
        serde_json::to_value(&reg).unwrap(),
        serde_json::json!({ "name": "Marcus Vicius", "email": "m@gym.com", "password": "secret1" })
    );
}
