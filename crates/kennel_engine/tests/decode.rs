use kennel_core::Classification;
use kennel_engine::{decode_images, decode_listing, ApiError};
use pretty_assertions::assert_eq;

#[test]
fn listing_success_builds_taxonomy() {
    let text = r#"{
        "status": "success",
        "message": {
            "akita": [],
            "bulldog": ["boston", "english", "french"]
        }
    }"#;

    let breeds = decode_listing(text).expect("listing decodes");

    assert_eq!(breeds.len(), 2);
    assert!(breeds.contains("akita"));
    assert!(breeds.contains("bulldog"));

    let probe = breeds
        .classify(&[Classification {
            class_name: "English bulldog".to_string(),
            probability: 0.7,
        }])
        .expect("resolves");
    assert_eq!(probe.breed, "bulldog");
    assert_eq!(probe.sub_breed.as_deref(), Some("english"));
}

#[test]
fn error_status_passes_the_message_through_verbatim() {
    let text = r#"{
        "status": "error",
        "message": "Breed not found (master breed does not exist)"
    }"#;

    assert_eq!(
        decode_listing(text),
        Err(ApiError::Service(
            "Breed not found (master breed does not exist)".to_string()
        ))
    );
}

#[test]
fn error_status_with_structured_message_is_still_a_service_error() {
    let text = r#"{"status": "error", "message": {"code": 404}}"#;

    assert_eq!(
        decode_listing(text),
        Err(ApiError::Service(r#"{"code":404}"#.to_string()))
    );
}

#[test]
fn unknown_status_is_a_protocol_error() {
    let text = r#"{"status": "partial", "message": {}}"#;

    assert_eq!(
        decode_listing(text),
        Err(ApiError::Decode("unknown status \"partial\"".to_string()))
    );
}

#[test]
fn malformed_json_is_a_decode_error() {
    assert!(matches!(
        decode_listing("{not json"),
        Err(ApiError::Decode(_))
    ));
}

#[test]
fn success_without_a_message_is_a_decode_error() {
    assert!(matches!(
        decode_listing(r#"{"status": "success"}"#),
        Err(ApiError::Decode(_))
    ));
}

#[test]
fn listing_with_the_wrong_message_shape_is_a_decode_error() {
    let text = r#"{"status": "success", "message": ["akita", "bulldog"]}"#;

    assert!(matches!(decode_listing(text), Err(ApiError::Decode(_))));
}

#[test]
fn images_success_decodes_url_list() {
    let text = r#"{
        "status": "success",
        "message": [
            "https://images.dog.ceo/breeds/akita/1.jpg",
            "https://images.dog.ceo/breeds/akita/2.jpg"
        ]
    }"#;

    assert_eq!(
        decode_images(text),
        Ok(vec![
            "https://images.dog.ceo/breeds/akita/1.jpg".to_string(),
            "https://images.dog.ceo/breeds/akita/2.jpg".to_string(),
        ])
    );
}

#[test]
fn images_error_status_is_a_service_error() {
    let text = r#"{"status": "error", "message": "no pictures"}"#;

    assert_eq!(
        decode_images(text),
        Err(ApiError::Service("no pictures".to_string()))
    );
}
