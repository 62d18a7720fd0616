use webservices_consumer::{is_number, is_numeric, Movie, Value};

#[test]
fn test_non_text_values_are_never_numeric() {
    let values = [
        Value::from(42i64),
        Value::from(3.5),
        Value::Number(f64::NAN),
        Value::from(true),
        Value::Absent,
        Value::from(serde_json::json!({ "id": "1" })),
        Value::from(serde_json::json!(["1"])),
    ];
    for value in &values {
        assert!(!is_numeric(value), "{:?} should not be numeric", value);
    }
}

#[test]
fn test_whitespace_strings_are_not_numeric() {
    let mut candidates = vec![String::new()];
    for a in [' ', '\t', '\n'] {
        candidates.push(a.to_string());
        for b in [' ', '\t', '\n'] {
            candidates.push(format!("{}{}", a, b));
            for c in [' ', '\t', '\n'] {
                candidates.push(format!("{}{}{}", a, b, c));
            }
        }
    }
    for s in candidates {
        assert!(!is_numeric(&Value::from(s.as_str())), "{:?}", s);
    }
}

#[test]
fn test_number_literals_are_numeric() {
    for sign in ["", "+", "-"] {
        for body in ["0", "7", "123", "12.5", ".5", "5.", "12.5e3", "1E-7", "6.02e+23"] {
            let literal = format!("{}{}", sign, body);
            assert!(is_numeric(&Value::from(literal.as_str())), "{:?}", literal);
        }
    }
}

#[test]
fn test_trailing_garbage_is_not_numeric() {
    for s in ["42kg", "12px", "1.5.", "3e4x", "7 8", "0.1%"] {
        assert!(!is_numeric(&Value::from(s)), "{:?}", s);
    }
}

#[test]
fn test_documented_scenarios() {
    assert!(is_numeric(&Value::from("123")));
    assert!(is_numeric(&Value::from("12.5e3")));
    assert!(!is_numeric(&Value::from("   ")));
    assert!(!is_numeric(&Value::from("")));
    assert!(!is_numeric(&Value::from("12px")));
    assert!(!is_numeric(&Value::from(42i64)));

    assert!(is_number(&Value::from(5i64)));
    assert!(!is_number(&Value::from("5")));
    let zero = 0.0_f64;
    assert!(is_number(&Value::from(zero / zero)));
}

#[test]
fn test_minimal_movie_is_valid() {
    let movie: Movie = serde_json::from_value(serde_json::json!({
        "title": "Dune",
        "id": 438631,
        "liked": true
    }))
    .unwrap();
    assert_eq!(movie.id, 438631);
    assert!(movie.runtime.is_none() && movie.genre_ids.is_none());
}
