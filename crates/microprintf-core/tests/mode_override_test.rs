//! Process-wide mode override. Kept in its own test binary so the global
//! mode change cannot leak into other suites.

use microprintf_core::{
    Config, FormatError, FormatMode, format_mode, format_to_buffer, set_format_mode,
};

#[test]
fn override_changes_entry_point_behavior() {
    set_format_mode(FormatMode::Strict);
    assert_eq!(format_mode(), FormatMode::Strict);
    assert!(Config::default().mode.is_strict());

    let mut buf = [0u8; 16];
    assert_eq!(
        format_to_buffer(&mut buf, "50%", &[]),
        Err(FormatError::DanglingPercent { offset: 3 })
    );
    assert_eq!(&buf[..3], b"50\0");

    set_format_mode(FormatMode::Permissive);
    assert_eq!(format_mode(), FormatMode::Permissive);
    assert_eq!(format_to_buffer(&mut buf, "50%", &[]), Ok(3));
    assert_eq!(&buf[..4], b"50%\0");
}
