// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use cascade_core::{CascadeError, IntoCascadeError, ResultExt, SubjectError};
use std::io;

#[test]
fn test_constructors_and_display() -> anyhow::Result<()> {
    // Arrange
    let stream = CascadeError::stream_error("source broke");
    let timeout = CascadeError::timeout_error("no event within 100ms");

    // Act & Assert
    assert_eq!(stream.to_string(), "Stream processing error: source broke");
    assert_eq!(timeout.to_string(), "Timeout error: no event within 100ms");
    assert!(timeout.is_timeout());
    assert!(!stream.is_timeout());

    Ok(())
}

#[test]
fn test_into_cascade_error_with_and_without_context() -> anyhow::Result<()> {
    // Arrange
    let io_error = || io::Error::new(io::ErrorKind::Other, "disk");

    // Act
    let wrapped = io_error().into_cascade();
    let contextual = io_error().into_cascade_error("loading");

    // Assert
    assert!(matches!(wrapped, CascadeError::UserError(_)));
    assert!(
        matches!(contextual, CascadeError::StreamProcessingError { ref context } if context == "loading: disk")
    );

    Ok(())
}

#[test]
fn test_result_context_and_subject_error_conversion() -> anyhow::Result<()> {
    // Arrange
    let result: Result<(), SubjectError> = Err(SubjectError::Closed);

    // Act
    let error = result.context("pushing value").unwrap_err();

    // Assert
    assert_eq!(error.to_string(), "Stream processing error: Subject is closed");

    Ok(())
}

#[test]
fn test_clone_keeps_user_error_message() -> anyhow::Result<()> {
    // Arrange
    let original = CascadeError::user_error(io::Error::new(io::ErrorKind::Other, "disk"));

    // Act
    let cloned = original.clone();

    // Assert
    assert_eq!(cloned.to_string(), "Stream processing error: User error: disk");

    Ok(())
}

#[test]
fn test_errors_compare_by_variant_and_message() -> anyhow::Result<()> {
    // Arrange
    let stream = CascadeError::stream_error("late");
    let timeout = CascadeError::timeout_error("late");

    // Act & Assert
    assert_eq!(stream, CascadeError::stream_error("late"));
    assert_ne!(stream, timeout);
    assert_ne!(stream, CascadeError::stream_error("early"));

    Ok(())
}
