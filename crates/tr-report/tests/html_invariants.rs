//! HTML report invariant tests.
//!
//! These tests render a complete report through the public API and validate
//! the markup without a browser:
//! - Document skeleton and Bootstrap classes present
//! - Opening and closing tags balance
//! - Caller text is always escaped
//! - Map links route to the user's provider with stable coordinates
//! - Labels and numbers follow the request locale

use chrono::{TimeZone, Utc};
use regex::Regex;
use tr_common::{Device, DeviceId, MapType, Report, ReportType, SpeedUnit, User, UserSettings};
use tr_report::{
    CellStyle, HtmlSink, InMemoryDirectory, ReportBody, ReportContext, ReportSession, Result,
    StaticCatalog, TableStyle,
};

/// One stop per device, rendered as a panel with a summary table.
struct StopsBody;

impl ReportBody for StopsBody {
    fn generate(&self, session: &mut ReportSession<'_>, report: &Report) -> Result<()> {
        session.h1(&report.name)?;
        for device in session.devices(report)? {
            session.panel_start()?;
            session.panel_heading_start()?;
            session.bold(&device.name)?;
            session.panel_heading_end()?;
            session.panel_body_start()?;

            session.table_start(Some(TableStyle::hover()))?;
            session.table_head_start()?;
            session.table_row_start()?;
            for key in ["position", "duration", "speed", "distance"] {
                session.table_head_cell_start(None)?;
                let label = session.message(key);
                session.text(&label)?;
                session.table_head_cell_end()?;
            }
            session.table_row_end()?;
            session.table_head_end()?;

            session.table_body_start()?;
            session.table_row_start()?;
            session.table_cell_start(None)?;
            session.map_link(52.520007, 13.404954)?;
            session.table_cell_end()?;
            let duration = session.format_duration(3_723_000);
            session.table_cell(&duration)?;
            let speed = session.format_speed(10.0);
            session.table_cell(&speed)?;
            let distance = session.format_distance(1234.5);
            session.table_cell(&distance)?;
            session.table_row_end()?;
            session.table_row_start()?;
            session.table_cell_start(Some(CellStyle::colspan(4)))?;
            let note = session.message("noData");
            session.text(&note)?;
            session.table_cell_end()?;
            session.table_row_end()?;
            session.table_body_end()?;
            session.table_end()?;

            session.panel_body_end()?;
            session.panel_end()?;
        }
        Ok(())
    }
}

fn test_report(name: &str) -> Report {
    Report::new(
        7,
        name,
        ReportType::DrivesAndStops,
        Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap(),
        Utc.with_ymd_and_hms(2024, 3, 2, 0, 0, 0).unwrap(),
    )
    .with_devices([DeviceId(1), DeviceId(2), DeviceId(404)])
}

fn render(user: &User, locale: &str, report: &Report) -> String {
    let catalog = StaticCatalog::bundled().unwrap();
    let directory = InMemoryDirectory::new(
        vec![
            Device::new(1, "imei-1", "Van <1>"),
            Device::new(2, "imei-2", "Hidden van"),
        ],
        user.clone(),
    );
    let ctx = ReportContext::new(user, &catalog, &directory).with_locale(locale);
    let mut sink = HtmlSink::new(Vec::new());
    ReportSession::new(ctx, &mut sink)
        .generate(report, &StopsBody)
        .unwrap();
    String::from_utf8(sink.into_inner()).unwrap()
}

fn driver(speed_unit: SpeedUnit, map_type: MapType) -> User {
    User::new(5, "driver").with_device(DeviceId(1)).with_settings(
        UserSettings::default()
            .with_speed_unit(speed_unit)
            .with_map_type(map_type)
            .with_zoom_level(15),
    )
}

// ============================================================================
// HTML Structure Tests
// ============================================================================

mod structure {
    use super::*;

    #[test]
    fn test_document_skeleton() {
        let html = render(
            &driver(SpeedUnit::KilometersPerHour, MapType::Osm),
            "en",
            &test_report("Stops"),
        );

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"charset="UTF-8""#));
        assert!(html.contains(r#"name="viewport""#));
        assert!(html.contains("<title>Stops</title>"));
        assert!(html.contains(r#"<div class="container">"#));
        assert!(html.trim_end().ends_with("</html>"));
    }

    #[test]
    fn test_tags_are_balanced() {
        let html = render(
            &driver(SpeedUnit::KilometersPerHour, MapType::Osm),
            "en",
            &test_report("Stops"),
        );

        for tag in ["table", "thead", "tbody", "tr", "th", "td", "div", "a", "strong", "h1"] {
            let open = Regex::new(&format!(r"<{}[\s>]", tag)).unwrap();
            let close = format!("</{}>", tag);
            assert_eq!(
                open.find_iter(&html).count(),
                html.matches(&close).count(),
                "unbalanced <{}>",
                tag
            );
        }
    }

    #[test]
    fn test_bootstrap_classes() {
        let html = render(
            &driver(SpeedUnit::KilometersPerHour, MapType::Osm),
            "en",
            &test_report("Stops"),
        );

        assert!(html.contains(r#"<table class="table table-hover">"#));
        assert!(html.contains(r#"<div class="panel panel-default">"#));
        assert!(html.contains(r#"<div class="panel-heading">"#));
        assert!(html.contains(r#"<td colspan="4">"#));
    }
}

// ============================================================================
// Content Safety Tests
// ============================================================================

mod safety {
    use super::*;

    #[test]
    fn test_caller_text_is_escaped() {
        let html = render(
            &driver(SpeedUnit::KilometersPerHour, MapType::Osm),
            "en",
            &test_report("<script>alert(1)</script>"),
        );

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("<strong>Van &lt;1&gt;</strong>"));
    }

    #[test]
    fn test_only_authorized_devices_rendered() {
        let html = render(
            &driver(SpeedUnit::KilometersPerHour, MapType::Osm),
            "en",
            &test_report("Stops"),
        );

        assert!(!html.contains("Hidden van"));
        assert_eq!(html.matches(r#"<div class="panel panel-default">"#).count(), 1);
    }
}

// ============================================================================
// Map Link Tests
// ============================================================================

mod links {
    use super::*;

    #[test]
    fn test_openstreetmap_link() {
        let html = render(
            &driver(SpeedUnit::KilometersPerHour, MapType::Osm),
            "de",
            &test_report("Stops"),
        );

        let expected = concat!(
            r#"<a href="http://www.openstreetmap.org/?mlat=52.520007&amp;mlon=13.404954"#,
            r##"#map=15/52.520007/13.404954" target="_blank">52.520007 °, 13.404954 °</a>"##
        );
        assert!(html.contains(expected), "missing OSM link in:\n{}", html);
    }

    #[test]
    fn test_google_link() {
        let html = render(
            &driver(SpeedUnit::KilometersPerHour, MapType::GoogleNormal),
            "en",
            &test_report("Stops"),
        );

        assert!(html.contains(
            r#"<a href="https://maps.google.com/maps?q=52.520007,13.404954&amp;t=m" target="_blank">"#
        ));
    }

    #[test]
    fn test_every_link_opens_new_context() {
        let html = render(
            &driver(SpeedUnit::Knots, MapType::Osm),
            "en",
            &test_report("Stops"),
        );

        let anchor = Regex::new(r#"<a href="[^"]+" target="([^"]+)">"#).unwrap();
        let targets: Vec<_> = anchor
            .captures_iter(&html)
            .map(|caps| caps[1].to_string())
            .collect();
        assert!(!targets.is_empty());
        assert!(targets.iter().all(|target| target == "_blank"));
    }
}

// ============================================================================
// Localization Tests
// ============================================================================

mod locale {
    use super::*;

    #[test]
    fn test_english_labels_and_units() {
        let html = render(
            &driver(SpeedUnit::KilometersPerHour, MapType::Osm),
            "en",
            &test_report("Stops"),
        );

        assert!(html.contains("<th>Duration</th>"));
        assert!(html.contains("<td>1h 2min 3s </td>"));
        assert!(html.contains("<td>18.52 km/h</td>"));
        assert!(html.contains("<td>1,234.5 km</td>"));
        assert!(html.contains("No data"));
    }

    #[test]
    fn test_german_labels_and_separators() {
        let html = render(
            &driver(SpeedUnit::KilometersPerHour, MapType::Osm),
            "de_DE",
            &test_report("Stops"),
        );

        assert!(html.contains("<th>Dauer</th>"));
        assert!(html.contains("<td>1Std 2Min 3Sek </td>"));
        assert!(html.contains("<td>18,52 km/h</td>"));
        assert!(html.contains("<td>1.234,5 km</td>"));
        assert!(html.contains("Keine Daten"));
    }

    #[test]
    fn test_unknown_locale_falls_back_to_english() {
        let html = render(
            &driver(SpeedUnit::Knots, MapType::Osm),
            "xx",
            &test_report("Stops"),
        );

        assert!(html.contains("<th>Speed</th>"));
        assert!(html.contains("<td>10 kn</td>"));
        assert!(html.contains("<td>666.58 nmi</td>"));
    }
}
