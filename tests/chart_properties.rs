use tessitura::{
    build_table, octave_markers, project, try_build_table,
    chart::{ChartConfig, ChartData},
    instruments::{Category, InstrumentSpec, RangeError, Rgb, TABLE},
};

#[test]
fn reference_pitch_lands_on_key_49() {
    assert_eq!(project(440.0), 49.0);
    assert_eq!(project(880.0) - project(440.0), 12.0);
    assert!(project(880.0) > project(440.0) && project(440.0) > project(220.0));
}

#[test]
fn table_is_deterministic() {
    assert_eq!(build_table(), build_table());
    assert_eq!(ChartData::default(), ChartData::default());
}

#[test]
fn every_range_is_ordered() {
    let table = build_table();
    assert_eq!(table.len(), 15);
    for range in &table {
        assert!(range.freq_min > 0.0);
        assert!(range.freq_min < range.freq_max, "{}", range.name);
        assert!(range.y_min < range.y_max, "{}", range.name);
    }
}

#[test]
fn violin_covers_four_octaves() {
    let table = build_table();
    let violin = table.iter().find(|r| r.name == "Violín").unwrap();
    assert_eq!((violin.freq_min, violin.freq_max), (196.0, 3136.0));
    assert!((project(3136.0) - project(196.0) - 48.0).abs() < 1e-9);
    assert!((violin.y_max - violin.y_min - 48.0).abs() < 1e-9);
}

#[test]
fn nine_octave_markers_by_default() {
    let markers = octave_markers(-1, 7);
    assert_eq!(markers.len(), 9);
    for (marker, e) in markers.iter().zip(-1..=7) {
        assert_eq!(marker.frequency, 440.0 * 2f64.powi(e));
        assert_eq!(marker.position, project(marker.frequency));
    }
    assert!(markers.windows(2).all(|w| w[0].position < w[1].position));
}

#[test]
fn chart_follows_table_order() {
    let chart = ChartData::from_config(ChartConfig::default());
    let names: Vec<_> = chart.bars.iter().map(|bar| bar.label.as_str()).collect();
    let expected: Vec<_> = TABLE.iter().map(|spec| spec.name).collect();
    assert_eq!(names, expected);
}

#[test]
fn hover_text_for_every_bar() {
    let chart = ChartData::default();
    for bar in &chart.bars {
        let [name, category, notes, frequencies] = bar.hover.lines();
        assert_eq!(name, bar.label);
        assert!(category.starts_with("Tipo: "));
        assert!(notes.starts_with("Rango: "));
        assert!(frequencies.starts_with("Frecuencia: ") && frequencies.ends_with(" Hz"));
    }
}

#[test]
fn external_rows_are_validated() {
    let row = |name, freq_min, freq_max| InstrumentSpec {
        name,
        freq_min,
        freq_max,
        note_min: "C4",
        note_max: "C5",
        category: Category::Voice,
        color: Rgb::from_u32(0x336699),
    };

    let table = try_build_table(&[row("Soprano", 262.0, 1047.0), row("Bajo", 82.0, 330.0)]).unwrap();
    assert_eq!(table.len(), 2);
    assert_eq!(table[1].name, "Bajo");

    let err = try_build_table(&[row("Soprano", 262.0, 1047.0), row("Roto", 500.0, 400.0)])
        .unwrap_err();
    assert!(matches!(err, RangeError::Inverted { ref name, .. } if name == "Roto"));

    let err = try_build_table(&[row("Mudo", 0.0, 400.0)]).unwrap_err();
    assert!(matches!(err, RangeError::Frequency { ref name, .. } if name == "Mudo"));
}
