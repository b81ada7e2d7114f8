//! Integration Tests für die Farb-Policy
//!
//! Laufen auf dem Host (x86_64), ohne Hardware

use presence_core::types::{DIM_GRAY, GREEN, PURPLE, RED, WHITE, YELLOW};
use presence_core::{StatusCode, color_for};
use proptest::prelude::*;
use rgb::RGB8;

#[test]
fn test_table() {
    let table = [
        (StatusCode::Available, RGB8 { r: 0, g: 255, b: 0 }),
        (StatusCode::Busy, RGB8 { r: 255, g: 0, b: 0 }),
        (StatusCode::Away, RGB8 { r: 255, g: 255, b: 0 }),
        (StatusCode::BeRightBack, RGB8 { r: 255, g: 255, b: 0 }),
        (StatusCode::DoNotDisturb, RGB8 { r: 128, g: 0, b: 128 }),
        (StatusCode::Focusing, RGB8 { r: 128, g: 0, b: 128 }),
        (StatusCode::Presenting, RGB8 { r: 255, g: 0, b: 0 }),
        (StatusCode::InAMeeting, RGB8 { r: 255, g: 0, b: 0 }),
        (StatusCode::InACall, RGB8 { r: 255, g: 0, b: 0 }),
        (StatusCode::Offline, RGB8 { r: 50, g: 50, b: 50 }),
        (StatusCode::Unknown, RGB8 { r: 255, g: 255, b: 255 }),
    ];
    for (status, color) in table {
        assert_eq!(color_for(status), color, "{status:?}");
    }
}

#[test]
fn test_wire_bytes_match_host_publisher() {
    let names = [
        "Available",
        "Busy",
        "Away",
        "BeRightBack",
        "DoNotDisturb",
        "Focusing",
        "Presenting",
        "InAMeeting",
        "InACall",
        "Offline",
        "Unknown",
    ];
    for (code, name) in names.iter().enumerate() {
        let status = StatusCode::try_from(*name).unwrap();
        assert_eq!(status.code() as usize, code);
    }
}

#[test]
fn test_only_known_colors_are_produced() {
    for byte in 0..=u8::MAX {
        let color = color_for(StatusCode::from(byte));
        assert!([GREEN, RED, YELLOW, PURPLE, DIM_GRAY, WHITE].contains(&color));
    }
}

proptest! {
    #[test]
    fn unmapped_bytes_render_as_unknown(byte in 11u8..=255) {
        prop_assert_eq!(color_for(StatusCode::from(byte)), color_for(StatusCode::Unknown));
    }
}
