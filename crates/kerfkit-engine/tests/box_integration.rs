//! Integration tests composing whole boxes out of walls

use anyhow::Result;
use kerfkit_engine::bolts::Bolts;
use kerfkit_engine::{Canvas, CanvasConfig, WallOpts};

fn canvas() -> Result<Canvas> {
    Ok(Canvas::new(CanvasConfig {
        thickness: 3.0,
        burn: 0.05,
        ..CanvasConfig::default()
    })?)
}

/// Lay out all six walls of a closed 100 x 60 x 40 finger jointed box.
fn closed_box(c: &mut Canvas) -> Result<()> {
    let (x, y, h) = (100.0, 60.0, 40.0);
    c.rectangular_wall(
        x,
        h,
        "FFFF",
        WallOpts {
            move_dir: "right",
            ..WallOpts::default()
        },
    )?;
    c.rectangular_wall(
        y,
        h,
        "FfFf",
        WallOpts {
            move_dir: "up",
            ..WallOpts::default()
        },
    )?;
    c.rectangular_wall(y, h, "FfFf", WallOpts::default())?;
    c.rectangular_wall(
        x,
        h,
        "FFFF",
        WallOpts {
            move_dir: "left up",
            ..WallOpts::default()
        },
    )?;
    c.rectangular_wall(
        x,
        y,
        "ffff",
        WallOpts {
            move_dir: "right",
            ..WallOpts::default()
        },
    )?;
    c.rectangular_wall(x, y, "ffff", WallOpts::default())?;
    Ok(())
}

#[test]
fn test_closed_box_layout() -> Result<()> {
    let mut c = canvas()?;
    closed_box(&mut c)?;
    let b = c.surface().bounds().unwrap();
    // six walls side by side cover well over a single wall's footprint
    assert!(b.width() > 200.0);
    assert!(b.height() > 100.0);
    Ok(())
}

#[test]
fn test_layout_is_deterministic() -> Result<()> {
    let mut a = canvas()?;
    closed_box(&mut a)?;
    let mut b = canvas()?;
    closed_box(&mut b)?;
    assert_eq!(a.surface(), b.surface());
    assert_eq!(
        a.surface().svg_path_data(),
        b.surface().svg_path_data()
    );
    Ok(())
}

#[test]
fn test_svg_document_roundtrip() -> Result<()> {
    let mut c = canvas()?;
    closed_box(&mut c)?;
    let svg = c.into_surface().to_svg_document();
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("box.svg");
    std::fs::write(&path, &svg)?;
    let read_back = std::fs::read_to_string(&path)?;
    assert!(read_back.starts_with("<?xml"));
    assert!(read_back.contains("<svg"));
    assert!(read_back.contains("<path"));
    Ok(())
}

#[test]
fn test_divider_holes_inside_the_wall() -> Result<()> {
    // a middle divider needs a finger hole row across the bottom wall
    let mut c = canvas()?;
    let mut cb = |c: &mut Canvas, side: usize| -> kerfkit_core::Result<()> {
        if side == 0 {
            c.finger_holes_at(0.0, 30.0, 100.0, 0.0, None)?;
        }
        Ok(())
    };
    c.rectangular_wall(
        100.0,
        60.0,
        "ffff",
        WallOpts {
            callback: Some(&mut cb),
            ..WallOpts::default()
        },
    )?;
    let with_holes = c.surface().commands().len();

    let mut plain = canvas()?;
    plain.rectangular_wall(100.0, 60.0, "ffff", WallOpts::default())?;
    assert!(with_holes > plain.surface().commands().len());
    Ok(())
}

#[test]
fn test_bed_bolted_sides() -> Result<()> {
    let bolts = Bolts::new(2);
    let mut c = canvas()?;
    c.rectangular_wall(
        100.0,
        60.0,
        "eeee",
        WallOpts {
            bed_bolts: &[Some(&bolts), None, Some(&bolts), None],
            ..WallOpts::default()
        },
    )?;
    let bolted = c.surface().commands().len();

    let mut plain = canvas()?;
    plain.rectangular_wall(100.0, 60.0, "eeee", WallOpts::default())?;
    // two sides carry two T slots each
    assert!(bolted > plain.surface().commands().len() + 2 * 2 * 10);
    Ok(())
}

#[test]
fn test_only_reserves_space_for_later() -> Result<()> {
    let mut c = canvas()?;
    c.rectangular_wall(
        100.0,
        60.0,
        "eeee",
        WallOpts {
            move_dir: "up only",
            ..WallOpts::default()
        },
    )?;
    // nothing drawn yet, only layout moves
    assert!(c
        .surface()
        .commands()
        .iter()
        .all(|cmd| matches!(cmd, kerfkit_core::PathCommand::MoveTo(_))));
    c.rectangular_wall(100.0, 60.0, "eeee", WallOpts::default())?;
    let b = c.surface().bounds().unwrap();
    // the drawn wall sits above the reserved strip
    assert!(b.min.y > 60.0);
    Ok(())
}

#[test]
fn test_rounded_box_pair() -> Result<()> {
    // plate plus matching wrap-around band, the classic rounded box
    let mut c = canvas()?;
    c.rounded_plate(
        60.0,
        40.0,
        10.0,
        'f',
        WallOpts {
            move_dir: "right",
            ..WallOpts::default()
        },
    )?;
    c.surrounding_wall(60.0, 40.0, 10.0, 30.0, 'F', 'e', WallOpts::default())?;
    assert!(c.surface().bounds().is_some());
    Ok(())
}
