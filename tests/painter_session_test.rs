//! End-to-end tests for the drawing session.

use ascii_painter::canvas::{Point, BLANK};
use ascii_painter::{Command, Outcome, PainterConfig, PainterError, Session};

const EXAMPLE_INPUT: &str = "C 20 4\nL 1 2 6 2\nL 6 3 6 4\nR 16 1 20 3\nB 10 3 o\n";

fn frame(rows: &[&str]) -> String {
    let width = rows[0].chars().count();
    let border = "-".repeat(width + 2);
    let mut out = format!("{border}\n");
    for row in rows {
        out.push_str(&format!("|{row}|\n"));
    }
    out.push_str(&format!("{border}\n"));
    out
}

// ==================== Worked Example ====================

#[test]
fn test_worked_example_frames() {
    let mut session = Session::default();
    let report = session.run(EXAMPLE_INPUT);

    assert!(report.is_success(), "failures: {:?}", report.failures);
    assert_eq!(
        report.frames,
        vec![
            frame(&[
                "                    ",
                "                    ",
                "                    ",
                "                    ",
            ]),
            frame(&[
                "                    ",
                "xxxxxx              ",
                "                    ",
                "                    ",
            ]),
            frame(&[
                "                    ",
                "xxxxxx              ",
                "     x              ",
                "     x              ",
            ]),
            frame(&[
                "               xxxxx",
                "xxxxxx         x   x",
                "     x         xxxxx",
                "     x              ",
            ]),
            frame(&[
                "oooooooooooooooxxxxx",
                "xxxxxxooooooooox   x",
                "     xoooooooooxxxxx",
                "     xoooooooooooooo",
            ]),
        ]
    );
    assert_eq!(session.history(), report.frames.as_slice());
}

#[test]
fn test_compact_syntax_matches_spaced_syntax() {
    let compact = "C20 4\nL1 2 6 2\nL6 3 6 4\nR16 1 20 3\nB10 3 o\n";
    let spaced = Session::default().run(EXAMPLE_INPUT).output();
    let packed = Session::default().run(compact).output();
    assert_eq!(spaced, packed);
}

// ==================== Drawing Properties ====================

#[test]
fn test_rectangle_on_blank_canvas() {
    let mut session = Session::default();
    session.run("C 20 4\nR 1 1 5 4");
    let canvas = session.canvas().expect("canvas should exist");
    assert_eq!(canvas.row_string(1).unwrap(), "xxxxx               ");
    assert_eq!(canvas.row_string(2).unwrap(), "x   x               ");
    assert_eq!(canvas.row_string(3).unwrap(), "x   x               ");
    assert_eq!(canvas.row_string(4).unwrap(), "xxxxx               ");
}

#[test]
fn test_nested_fill_keeps_border() {
    let mut session = Session::default();
    let report = session.run("C 10 6\nR 1 1 10 6\nR 3 2 8 5\nB 5 3 o");
    assert!(report.is_success());

    let canvas = session.canvas().expect("canvas should exist");
    assert_eq!(canvas.row_string(1).unwrap(), "xxxxxxxxxx");
    assert_eq!(canvas.row_string(2).unwrap(), "x xxxxxx x");
    assert_eq!(canvas.row_string(3).unwrap(), "x xoooox x");
    assert_eq!(canvas.row_string(4).unwrap(), "x xoooox x");
    assert_eq!(canvas.row_string(5).unwrap(), "x xxxxxx x");
    assert_eq!(canvas.count('o'), 8);
}

#[test]
fn test_same_colour_fill_is_noop() {
    let mut session = Session::default();
    session.execute(Command::NewCanvas { width: 6, height: 6 }).unwrap();
    let before = session.canvas().cloned();

    let outcome = session
        .execute(Command::Fill {
            seed: Point::new(2, 2),
            color: BLANK,
        })
        .unwrap();

    assert!(matches!(outcome, Outcome::Filled(ref r) if r.is_empty()));
    assert_eq!(session.canvas().cloned(), before);
}

#[test]
fn test_fill_seed_out_of_bounds_leaves_canvas() {
    let mut session = Session::default();
    session.run("C 5 5\nL 1 1 5 1");
    let before = session.canvas().cloned();

    let err = session.dispatch_line("B 6 6 o").unwrap_err();
    assert!(matches!(err, PainterError::OutOfBounds { x: 6, y: 6, .. }));
    assert_eq!(session.canvas().cloned(), before);
}

#[test]
fn test_reversed_line_endpoints() {
    let mut forward = Session::default();
    let mut reversed = Session::default();
    forward.run("C 10 10\nL 1 1 5 1\nL 3 2 3 9");
    reversed.run("C 10 10\nL 5 1 1 1\nL 3 9 3 2");
    assert_eq!(forward.canvas(), reversed.canvas());
}

// ==================== Error Handling ====================

#[test]
fn test_error_kinds_per_line() {
    let mut session = Session::default();
    let report = session.run("B 1 1 o\nC 0 4\nC 4 4\nL 1 1 3 3\nR 1 1 9 9\nZ 1\n");

    let kinds: Vec<_> = report
        .failures
        .iter()
        .map(|f| (f.line_no, std::mem::discriminant(&f.error)))
        .collect();
    assert_eq!(
        kinds,
        vec![
            (1, std::mem::discriminant(&PainterError::NoCanvas)),
            (2, std::mem::discriminant(&PainterError::InvalidDimension { width: 0, height: 0 })),
            (
                4,
                std::mem::discriminant(&PainterError::UnsupportedGeometry {
                    from: Point::default(),
                    to: Point::default(),
                })
            ),
            (
                5,
                std::mem::discriminant(&PainterError::OutOfBounds {
                    x: 0,
                    y: 0,
                    width: 0,
                    height: 0,
                })
            ),
            (6, std::mem::discriminant(&PainterError::parse("", ""))),
        ]
    );
    assert!(report.failures.iter().all(|f| f.error.is_recoverable()));
    assert_eq!(report.frames.len(), 1);
}

#[test]
fn test_custom_glyphs_from_config() {
    let config = PainterConfig::from_toml(
        "brush = \"#\"\nbackground = \".\"\nhorizontal_border = \"=\"\nvertical_border = \"!\"\n",
    )
    .unwrap();
    let mut session = Session::new(config);
    let report = session.run("C 3 2\nL 1 1 3 1");
    assert_eq!(report.frames.last().unwrap(), "=====\n!###!\n!...!\n=====\n");
}
