// Author: Dustin Pilgrim
// License: MIT

#[cfg(test)]
use super::*;
use indexmap::IndexMap;

use crate::error::ParseError;

const MUSIC_CONFIG: &str = r#"
// background music selection
"MusicConf"
{
    "Base"      "music.sp_a2_intro"
    "Volume"    "0.75"
    "Loop"      "1"
    "Tracks"
    {
        "Track" "sound/music/portal2_a.wav"
        "Track" "sound/music/portal2_b.wav"
    }
    "Channels"
    {
        "Speed" "100"
        "Tbeam" "music.tbeam"
    }
}
"#;

#[test]
fn test_config_from_string() {
    let config = KvConfig::from_str(MUSIC_CONFIG).expect("Failed to parse config");

    let base: String = config.get("MusicConf\"Base").expect("Failed to get base");
    assert_eq!(base, "music.sp_a2_intro");

    let volume: f64 = config.get("musicconf\"volume").expect("Failed to get volume");
    assert_eq!(volume, 0.75);

    let looping: bool = config.get("MusicConf\"Loop").expect("Failed to get loop");
    assert!(looping);

    let tracks: Vec<String> = config.get("MusicConf\"Tracks").expect("Failed to get tracks");
    assert_eq!(tracks.len(), 2);

    let channels: IndexMap<String, String> =
        config.get("MusicConf\"Channels").expect("Failed to get channels");
    assert_eq!(channels.get("Tbeam").map(String::as_str), Some("music.tbeam"));

    assert!(config.has("MusicConf\"Base"));
    assert!(!config.has("MusicConf\"Nonexistent"));

    let keys = config.get_keys("MusicConf").expect("Failed to get keys");
    assert_eq!(keys, vec!["Base", "Volume", "Loop", "Tracks", "Channels"]);
    assert_eq!(config.get_keys("").unwrap(), vec!["MusicConf"]);
}

#[test]
fn test_get_all_keeps_every_value() {
    let config = KvConfig::from_str(MUSIC_CONFIG).unwrap();
    let tracks: Vec<String> = config.get_all("MusicConf\"Tracks\"Track").unwrap();
    assert_eq!(
        tracks,
        vec!["sound/music/portal2_a.wav", "sound/music/portal2_b.wav"]
    );

    let single: String = config.get("MusicConf\"Tracks\"Track").unwrap();
    assert_eq!(single, "sound/music/portal2_b.wav");

    let none: Vec<String> = config.get_all("Nope").unwrap();
    assert!(none.is_empty());
}

#[test]
fn test_optional_and_default() {
    let config = KvConfig::from_str(MUSIC_CONFIG).unwrap();

    assert_eq!(config.get_optional::<u32>("MusicConf\"Channels\"Speed"), Ok(Some(100)));
    assert_eq!(config.get_optional::<u32>("MusicConf\"Missing"), Ok(None));
    assert!(config.get_optional::<u32>("MusicConf\"Base").is_err());

    assert_eq!(config.get_or("MusicConf\"Missing", 42u32), 42);
    assert_eq!(config.get_or("MusicConf\"Channels\"Speed", 42u32), 100);
}

#[test]
fn test_missing_path_error() {
    let config = KvConfig::from_str(MUSIC_CONFIG).unwrap();
    let err = config.get::<String>("MusicConf\"Nope").unwrap_err();
    assert_eq!(
        err,
        KvError::PathNotFound {
            path: "MusicConf\"Nope".into()
        }
    );
    assert_eq!(err.code(), 304);
}

#[test]
fn test_get_keys_on_leaf_fails() {
    let config = KvConfig::from_str(MUSIC_CONFIG).unwrap();
    assert_eq!(
        config.get_keys("MusicConf\"Base"),
        Err(KvError::NotABlock {
            name: "Base".into()
        })
    );
}

#[test]
fn test_set_replaces_last_leaf() {
    let mut config = KvConfig::from_str("a { v 1 v 2 }").unwrap();
    config.set("A\"V", "3").unwrap();

    let values: Vec<String> = config.get_all("a\"v").unwrap();
    assert_eq!(values, vec!["1", "3"]);
}

#[test]
fn test_set_creates_missing_blocks() {
    let mut config = KvConfig::default();
    config.set("Music\"Channels\"Speed", "200").unwrap();
    config.set("Music\"Volume", "1").unwrap();

    assert_eq!(
        config.forest(),
        &[Property::block(
            "Music",
            vec![
                Property::block("Channels", vec![Property::leaf("Speed", "200")]),
                Property::leaf("Volume", "1"),
            ],
        )]
    );
    assert_eq!(config.get::<u32>("music\"channels\"speed"), Ok(200));
}

#[test]
fn test_set_refuses_to_flatten_block() {
    let mut config = KvConfig::from_str(MUSIC_CONFIG).unwrap();
    assert_eq!(
        config.set("MusicConf\"Tracks", "x"),
        Err(KvError::NotALeaf {
            name: "Tracks".into()
        })
    );
    assert!(matches!(config.set("", "x"), Err(KvError::PathNotFound { .. })));
}

#[test]
fn test_remove() {
    let mut config = KvConfig::from_str(MUSIC_CONFIG).unwrap();
    assert_eq!(config.remove("MusicConf\"Tracks\"Track"), 2);
    assert_eq!(config.get::<Vec<String>>("MusicConf\"Tracks"), Ok(vec![]));
    assert_eq!(config.remove("MusicConf\"Tracks\"Track"), 0);
    assert_eq!(config.remove("musicconf"), 1);
    assert!(config.forest().is_empty());
    assert_eq!(config.remove(""), 0);
}

#[test]
fn test_string_enum_validation() {
    let config = KvConfig::from_str("Style { Mode Clean }").unwrap();

    let mode = config
        .get_string_enum("Style\"Mode", &["clean", "overgrown"])
        .expect("Failed to validate mode");
    assert_eq!(mode, "Clean");

    let err = config
        .get_string_enum("Style\"Mode", &["bts"])
        .unwrap_err();
    assert_eq!(err.code(), 451);
}

#[test]
fn test_validated_value() {
    let config = KvConfig::from_str(MUSIC_CONFIG).unwrap();

    let speed: u32 = config
        .get_validated("MusicConf\"Channels\"Speed", |s: &u32| *s <= 100, "0-100")
        .unwrap();
    assert_eq!(speed, 100);

    let err = config
        .get_validated("MusicConf\"Volume", |v: &f64| *v > 1.0, "above 1")
        .unwrap_err();
    assert!(matches!(err, KvError::ValidationError { code: 450, .. }));
}

#[test]
fn test_parse_error_surfaces_through_config() {
    let err = KvConfig::from_lines(["MusicConf", "{"]).unwrap_err();
    assert_eq!(err.line(), Some(2));
    assert!(matches!(err, KvError::Parse(ParseError::UnterminatedBlock { line: 2 })));
}

#[test]
fn test_to_lines_round_trip() {
    let config = KvConfig::from_str(MUSIC_CONFIG).unwrap();
    let again = KvConfig::from_lines(config.to_lines()).unwrap();
    assert_eq!(again, config);
    assert_eq!(config.find_all("MusicConf\"Tracks\"Track").len(), 2);
}

#[test]
fn test_custom_options() {
    let options = ParseOptions::default().with_max_depth(1);
    assert!(KvConfig::from_lines_with(["a { b c }"], &options).is_ok());
    assert!(KvConfig::from_lines_with(["a { b { c d } }"], &options).is_err());
}

#[test]
fn test_set_through_leaf_fails() {
    let mut config = KvConfig::from_str("Music 1").unwrap();
    assert_eq!(
        config.set("Music\"Volume", "0.5"),
        Err(KvError::NotABlock {
            name: "Music".into()
        })
    );
    assert_eq!(config.forest(), &[Property::leaf("Music", "1")]);

    // The last definition decides, even when an earlier block exists.
    let mut config = KvConfig::from_str("Music { Volume 1 } music off").unwrap();
    assert!(matches!(
        config.set("Music\"Volume", "0.5"),
        Err(KvError::NotABlock { .. })
    ));
    assert_eq!(config.forest().len(), 2);
}
