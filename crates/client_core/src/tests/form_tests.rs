use super::*;

fn form(id: &str, name: &str, surname: &str, age: &str) -> FormState {
    FormState {
        id: id.to_string(),
        name: name.to_string(),
        surname: surname.to_string(),
        age: age.to_string(),
    }
}

#[test]
fn set_writes_only_the_named_field() {
    let mut state = form("1", "Ann", "Lee", "30");
    state.set(FormField::Surname, "Park".to_string());
    assert_eq!(state, form("1", "Ann", "Park", "30"));
    assert_eq!(state.value(FormField::Surname), "Park");
}

#[test]
fn set_keeps_raw_text_without_validation() {
    let mut state = FormState::default();
    state.set(FormField::Age, "thirty".to_string());
    state.set(FormField::Id, " -4 ".to_string());
    assert_eq!(state.age, "thirty");
    assert_eq!(state.id, " -4 ");
}

#[test]
fn create_request_omits_id_and_parses_age() {
    let request = form("", "Ann", "Lee", "30")
        .create_request()
        .expect("valid");
    assert_eq!(
        request,
        NewUser {
            name: "Ann".to_string(),
            surname: "Lee".to_string(),
            age: 30,
        }
    );
}

#[test]
fn create_request_rejects_non_numeric_age() {
    for age in ["thirty", "", "   ", "-", "abc30", ".5"] {
        let err = form("", "Ann", "Lee", age)
            .create_request()
            .expect_err("must reject");
        assert_eq!(
            err,
            ValidationError::InvalidAge {
                value: age.to_string()
            }
        );
    }
}

#[test]
fn numbers_are_read_from_their_leading_digits() {
    assert_eq!(form("", "", "", "30abc").parsed_age(), Ok(30));
    assert_eq!(form("", "", "", "3.5").parsed_age(), Ok(3));
    assert_eq!(form("", "", "", "  7 ").parsed_age(), Ok(7));
    assert_eq!(form("", "", "", "+12years").parsed_age(), Ok(12));
    assert_eq!(form("7abc", "", "", "").parsed_id(), Ok(UserId(7)));
    assert_eq!(form("1.0", "", "", "").parsed_id(), Ok(UserId(1)));
}

#[test]
fn create_sends_the_leading_integer_of_the_age() {
    let request = form("7abc", "Ann", "Lee", "30abc")
        .create_request()
        .expect("leading digits are enough");
    assert_eq!(request.age, 30);
}

#[test]
fn update_targets_the_leading_integer_of_the_id() {
    let (id, update) = form("7abc", "Ann", "Lee", "3.5")
        .update_request()
        .expect("leading digits are enough");
    assert_eq!(id, UserId(7));
    assert_eq!(update.id, Some(UserId(7)));
    assert_eq!(update.age, 3);
}

#[test]
fn out_of_range_numbers_are_rejected() {
    assert!(form("", "", "", "99999999999999999999").parsed_age().is_err());
}

#[test]
fn age_tolerates_surrounding_whitespace_and_sign() {
    assert_eq!(form("", "", "", " 42 ").parsed_age(), Ok(42));
    assert_eq!(form("", "", "", "-3").parsed_age(), Ok(-3));
}

#[test]
fn update_request_carries_parsed_id_in_body() {
    let (id, update) = form("7", "Ann", "Lee", "31")
        .update_request()
        .expect("valid");
    assert_eq!(id, UserId(7));
    assert_eq!(update.id, Some(UserId(7)));
    assert_eq!(update.age, 31);
}

#[test]
fn update_request_rejects_bad_ids() {
    for id in ["abc", "", "0", "-1", "x1", "0.9"] {
        let err = form(id, "Ann", "Lee", "30")
            .update_request()
            .expect_err("must reject");
        assert_eq!(
            err,
            ValidationError::InvalidId {
                value: id.to_string()
            }
        );
    }
}

#[test]
fn update_request_checks_age_before_id() {
    let err = form("abc", "Ann", "Lee", "old")
        .update_request()
        .expect_err("must reject");
    assert!(matches!(err, ValidationError::InvalidAge { .. }));
}

#[test]
fn delete_target_is_the_raw_id_text() {
    assert_eq!(form("abc", "", "", "").delete_target(), "abc");
    assert_eq!(form(" 5", "", "", "").delete_target(), " 5");
}

#[test]
fn fields_parse_from_their_keys() {
    assert_eq!("surname".parse::<FormField>(), Ok(FormField::Surname));
    assert_eq!("ID".parse::<FormField>(), Ok(FormField::Id));
    assert!("email".parse::<FormField>().is_err());
    let labels: Vec<&str> = FormField::ALL.iter().map(|f| f.label()).collect();
    assert_eq!(labels, ["ID", "Name", "Surname", "Age"]);
}
