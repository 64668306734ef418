use sycx::application::services::{IntakeValidator, ValidationError};
use sycx::domain::ContentType;

#[test]
fn given_pdf_without_depth_when_validating_then_uses_default_depth() {
    let validator = IntakeValidator::default();

    let upload = validator.validate(Some("report.pdf"), None, true).unwrap();

    assert_eq!(upload.extension, "pdf");
    assert_eq!(upload.content_type, ContentType::Pdf);
    assert_eq!(upload.depth.value(), 2.0);
}

#[test]
fn given_mixed_case_extension_when_validating_then_extension_is_lower_cased() {
    let validator = IntakeValidator::default();

    let upload = validator.validate(Some("Notes.MD"), Some(0.0), true).unwrap();

    assert_eq!(upload.extension, "md");
    assert_eq!(upload.content_type, ContentType::Markdown);
}

#[test]
fn given_no_payload_when_validating_then_returns_no_file() {
    let validator = IntakeValidator::default();

    let result = validator.validate(Some("report.pdf"), None, false);

    assert_eq!(result, Err(ValidationError::NoFile));
}

#[test]
fn given_blank_filename_when_validating_then_returns_empty_filename() {
    let validator = IntakeValidator::default();

    assert_eq!(
        validator.validate(None, None, true),
        Err(ValidationError::EmptyFilename)
    );
    assert_eq!(
        validator.validate(Some("   "), None, true),
        Err(ValidationError::EmptyFilename)
    );
}

#[test]
fn given_executable_when_validating_then_error_lists_allowed_types_sorted() {
    let validator = IntakeValidator::default();

    let err = validator
        .validate(Some("malware.exe"), None, true)
        .unwrap_err();

    let ValidationError::UnsupportedType { extension, allowed } = &err else {
        panic!("expected unsupported type, got {err:?}");
    };
    assert_eq!(extension.as_deref(), Some("exe"));
    assert_eq!(
        allowed,
        &vec![
            "doc", "docx", "jpeg", "jpg", "md", "pdf", "png", "ppt", "pptx", "txt", "xls",
            "xlsx"
        ]
    );
    assert!(err.to_string().starts_with("Unsupported file type. Allowed types: doc, docx"));
}

#[test]
fn given_filename_without_extension_when_validating_then_returns_unsupported_type() {
    let validator = IntakeValidator::default();

    let err = validator.validate(Some("README"), None, true).unwrap_err();

    assert!(matches!(
        err,
        ValidationError::UnsupportedType {
            extension: None,
            ..
        }
    ));
}

#[test]
fn given_depth_outside_range_when_validating_then_returns_depth_error() {
    let validator = IntakeValidator::default();

    assert_eq!(
        validator.validate(Some("a.txt"), Some(4.5), true),
        Err(ValidationError::DepthOutOfRange(4.5))
    );
    assert!(matches!(
        validator.validate(Some("a.txt"), Some(f64::NAN), true),
        Err(ValidationError::DepthOutOfRange(_))
    ));
}

#[test]
fn given_unsupported_type_and_bad_depth_when_validating_then_type_is_reported_first() {
    let validator = IntakeValidator::default();

    let err = validator
        .validate(Some("clip.mp4"), Some(9.0), true)
        .unwrap_err();

    assert!(matches!(err, ValidationError::UnsupportedType { .. }));
}

#[test]
fn given_operator_extension_when_validating_then_is_accepted_as_text() {
    let validator = IntakeValidator::new([".CSV"]);

    let upload = validator.validate(Some("data.csv"), None, true).unwrap();

    assert_eq!(upload.content_type, ContentType::Text);
    assert!(validator.allowed_extensions().contains(&"csv".to_string()));
}

#[test]
fn given_raw_depth_values_when_parsing_then_blank_means_absent() {
    assert_eq!(IntakeValidator::parse_depth(None), Ok(None));
    assert_eq!(IntakeValidator::parse_depth(Some("  ")), Ok(None));
    assert_eq!(IntakeValidator::parse_depth(Some("3.5")), Ok(Some(3.5)));
    assert_eq!(
        IntakeValidator::parse_depth(Some("deep")),
        Err(ValidationError::InvalidDepth("deep".to_string()))
    );
}

#[test]
fn given_depth_just_above_max_when_parsing_and_validating_then_is_rejected() {
    let validator = IntakeValidator::default();

    let parsed = IntakeValidator::parse_depth(Some("4.0000001")).unwrap();
    let result = validator.validate(Some("a.pdf"), parsed, true);

    assert!(matches!(result, Err(ValidationError::DepthOutOfRange(v)) if v > 4.0));
}
