#![forbid(unsafe_code)]
use std::fs;
use tempfile::tempdir;
use workday_calendar::{
    config::{export_config_json, load_config_from_file},
    io, ClosingType, DateInterval, EngineConfig, EntryError, MissingField, WorkdayEngine,
    WorkingDays,
};

#[test]
fn config_file_roundtrip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");
    let config = EngineConfig {
        working_days: WorkingDays::new([1, 2, 3]).unwrap(),
        calculate_easter: false,
        timezone: chrono_tz::Europe::Rome,
        ..EngineConfig::default()
    };
    export_config_json(&path, &config).unwrap();

    let loaded = load_config_from_file(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn config_file_with_bad_format_is_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, r#"{"output_format": "%Y-%"}"#).unwrap();
    assert!(load_config_from_file(&path).is_err());

    fs::write(&path, r#"{"working_days": [1, 8]}"#).unwrap();
    assert!(load_config_from_file(&path).is_err());
}

#[test]
fn closures_csv_feeds_the_engine() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("closures.csv");
    fs::write(
        &path,
        "date,event,options\n\
         2021-01-18,Strike!,\"{\"\"id\"\": 345, \"\"htmlClass\"\": \"\"green\"\"}\"\n\
         2021-01-25,,\n\
         2021-01-29,Inventory\n",
    )
    .unwrap();

    let closures = io::import_closures_csv(&path).unwrap();
    assert_eq!(closures.len(), 3);
    assert!(closures[1].event.is_none());
    assert!(closures[2].options.is_none());

    let mut engine = WorkdayEngine::new("2021-01-01", "2021-01-31").unwrap();
    engine.set_custom_closures(closures);

    assert_eq!(engine.workday_count(), 17);
    let strike = engine
        .calendar()
        .values()
        .find(|e| e.event == "Strike!")
        .unwrap();
    assert_eq!(strike.kind, ClosingType::Custom);
    let options = strike.options.as_ref().unwrap();
    assert_eq!(options["id"], 345);
    assert_eq!(engine.diagnostics(), &[EntryError::MalformedCustomClosure {
        index: 1,
        field: MissingField::Event
    }]);
}

#[test]
fn closures_csv_with_broken_options_fails() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("closures.csv");
    fs::write(&path, "date,event,options\n2021-01-18,Strike!,{not json\n").unwrap();
    assert!(io::import_closures_csv(&path).is_err());
}

#[test]
fn calendar_csv_output() {
    let engine = WorkdayEngine::new("2021-01-01", "2021-01-31").unwrap();
    let mut buf = Vec::new();
    io::write_calendar_csv(&mut buf, engine.calendar()).unwrap();
    let out = String::from_utf8(buf).unwrap();

    insta::assert_snapshot!(out, @r###"
    timestamp,date,event,type,options
    1609459200,2021-01-01,New Year,public,"{""htmlClass"":""blue""}"
    1609891200,2021-01-06,Epiphany,public,
    "###);
}

#[test]
fn calendar_json_export() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("calendar.json");
    let interval = DateInterval::parse("2021-04-01", "2021-04-30").unwrap();
    let engine = WorkdayEngine::with_config(
        interval,
        EngineConfig {
            working_days: WorkingDays::all(),
            ..EngineConfig::default()
        },
    )
    .unwrap();
    io::export_calendar_json(&path, engine.calendar()).unwrap();

    let value: serde_json::Value = serde_json::from_slice(&fs::read(&path).unwrap()).unwrap();
    let entries = value.as_array().unwrap();
    let names: Vec<_> = entries.iter().map(|e| e["event"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["Easter", "Easter Monday", "Liberation Day"]);
    assert_eq!(entries[0]["type"], "public");
    assert_eq!(entries[0]["date"], "2021-04-04");
}
