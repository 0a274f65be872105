// SPDX-License-Identifier: MIT OR Apache-2.0
//! End-to-end: a request handler collects exceptions and returns one report.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::thread;

use ogc_ows::{ReportBuilder, ReportFormat};
use ogc_wms130::{
    ExceptionCode, WmsException, invalid_crs_for_layer, invalid_format, invalid_point,
    layer_not_defined_by_name, layer_not_queryable_by_name, report, report_builder,
    style_not_defined, style_not_defined_for_layer,
};

// ── A toy GetFeatureInfo validator ──────────────────────────────────────

struct Catalog {
    layers: BTreeMap<&'static str, Layer>,
    formats: &'static [&'static str],
}

struct Layer {
    crs: &'static [&'static str],
    styles: &'static [&'static str],
    queryable: bool,
}

fn catalog() -> Catalog {
    let mut layers = BTreeMap::new();
    layers.insert(
        "roads",
        Layer {
            crs: &["EPSG:4326", "EPSG:28992"],
            styles: &["default", "thin"],
            queryable: false,
        },
    );
    layers.insert(
        "rivers",
        Layer {
            crs: &["EPSG:4326"],
            styles: &["default"],
            queryable: true,
        },
    );
    Catalog {
        layers,
        formats: &["image/png", "image/jpeg"],
    }
}

fn validate(cat: &Catalog, params: &BTreeMap<&'static str, &'static str>) -> Vec<WmsException> {
    let mut errs = Vec::new();
    let get = |k: &str| params.get(k).copied().unwrap_or_default();

    let format = get("FORMAT");
    if !cat.formats.contains(&format) {
        errs.push(invalid_format(format));
    }

    let layers: Vec<&str> = get("LAYERS").split(',').collect();
    let styles: Vec<&str> = get("STYLES").split(',').collect();
    if styles.len() != layers.len() {
        errs.push(style_not_defined());
    }

    let crs = get("CRS");
    for (idx, name) in layers.iter().enumerate() {
        let Some(layer) = cat.layers.get(name) else {
            errs.push(layer_not_defined_by_name(name));
            continue;
        };
        if !layer.crs.contains(&crs) {
            errs.push(invalid_crs_for_layer(crs, name));
        }
        if let Some(style) = styles.get(idx) {
            if !style.is_empty() && !layer.styles.contains(style) {
                errs.push(style_not_defined_for_layer(style, name));
            }
        }
        if !layer.queryable {
            errs.push(layer_not_queryable_by_name(name));
        }
    }

    let (i, j) = (get("I"), get("J"));
    if i.parse::<u32>().is_err() || j.parse::<u32>().is_err() {
        errs.push(invalid_point(i, j));
    }
    errs
}

fn params(pairs: &[(&'static str, &'static str)]) -> BTreeMap<&'static str, &'static str> {
    pairs.iter().copied().collect()
}

// ── Tests ───────────────────────────────────────────────────────────────

#[test]
fn valid_request_collects_nothing() {
    let p = params(&[
        ("FORMAT", "image/png"),
        ("LAYERS", "rivers"),
        ("STYLES", ""),
        ("CRS", "EPSG:4326"),
        ("I", "10"),
        ("J", "20"),
    ]);
    assert!(validate(&catalog(), &p).is_empty());
}

#[test]
fn faulty_request_renders_every_violation_in_order() {
    let p = params(&[
        ("FORMAT", "image/bmp"),
        ("LAYERS", "roads,lakes"),
        ("STYLES", "bold,"),
        ("CRS", "EPSG:3857"),
        ("I", "ten"),
        ("J", "-1"),
    ]);
    let errs = validate(&catalog(), &p);
    let codes: Vec<ExceptionCode> = errs.iter().map(|e| e.code()).collect();
    assert_eq!(
        codes,
        vec![
            ExceptionCode::InvalidFormat,
            ExceptionCode::InvalidCrs,
            ExceptionCode::StyleNotDefined,
            ExceptionCode::LayerNotQueryable,
            ExceptionCode::LayerNotDefined,
            ExceptionCode::InvalidPoint,
        ]
    );

    let xml = String::from_utf8(report(errs)).unwrap();
    assert_eq!(xml.matches("<ServiceException ").count(), 6);
    assert!(xml.contains("The format: image/bmp, is a invalid image format"));
    assert!(xml.contains("The CRS: EPSG:3857 is not known by the layer: roads"));
    assert!(xml.contains("The style: bold is not known by the server for the layer: roads"));
    assert!(xml.contains(r#"locator="roads""#));
    assert!(xml.contains("The layer: lakes is not known by the server"));
    assert!(xml.contains("given: ten for I and -1 for J"));

    let format_pos = xml.find("InvalidFormat").unwrap();
    let point_pos = xml.find("InvalidPoint").unwrap();
    assert!(format_pos < point_pos);
}

#[test]
fn style_count_mismatch_uses_generic_text() {
    let p = params(&[
        ("FORMAT", "image/png"),
        ("LAYERS", "rivers,roads"),
        ("STYLES", "default"),
        ("CRS", "EPSG:4326"),
        ("I", "1"),
        ("J", "1"),
    ]);
    let errs = validate(&catalog(), &p);
    assert_eq!(errs[0], style_not_defined());
}

#[test]
fn handlers_share_one_builder_across_threads() {
    let builder: Arc<ReportBuilder> = Arc::new(report_builder());
    let handles: Vec<_> = (0..8)
        .map(|n| {
            let builder = Arc::clone(&builder);
            thread::spawn(move || {
                let layer = format!("layer-{n}");
                let errs = vec![layer_not_defined_by_name(&layer); n];
                let body = builder.build(errs);
                (n, layer, String::from_utf8(body).unwrap())
            })
        })
        .collect();

    for h in handles {
        let (n, layer, xml) = h.join().unwrap();
        assert_eq!(xml.matches("<ServiceException ").count(), n);
        if n > 0 {
            assert!(xml.contains(&layer));
        }
    }
}

#[test]
fn same_violations_render_identically_in_every_format() {
    let errs = || vec![invalid_format("image/bmp"), layer_not_queryable_by_name("roads")];
    for format in ReportFormat::ALL {
        let a = report_builder().render(errs(), *format).unwrap();
        let b = report_builder().render(errs(), *format).unwrap();
        assert_eq!(a, b, "{format} rendering must be deterministic");
    }
}
