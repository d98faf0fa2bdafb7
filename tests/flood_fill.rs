use pixel_sketch::{CellPos, Color, Grid, RecordingSink, flood_fill};

const RED: Color = Color::from_rgb(255, 0, 0);
const GREEN: Color = Color::from_rgb(0, 255, 0);
const BLUE: Color = Color::from_rgb(0, 0, 255);

// Builds a grid from rows of single-letter color codes
fn grid_from(rows: &[&str]) -> Grid {
    let mut grid = Grid::new(rows.len(), Color::WHITE);
    for (row, line) in rows.iter().enumerate() {
        for (col, code) in line.chars().enumerate() {
            let color = match code {
                'R' => RED,
                'G' => GREEN,
                'B' => BLUE,
                'K' => Color::BLACK,
                _ => Color::WHITE,
            };
            grid.set(CellPos::new(row, col), color).unwrap();
        }
    }
    grid
}

#[test]
fn test_fill_uniform_grid() {
    let mut grid = Grid::new(3, Color::WHITE);
    let mut sink = RecordingSink::new();

    let painted = flood_fill(&mut grid, CellPos::new(1, 1), Color::WHITE, RED, &mut sink).unwrap();

    assert_eq!(painted, 9);
    assert_eq!(grid.count(RED), 9);
    assert_eq!(sink.painted().len(), 9);
}

#[test]
fn test_fill_stops_at_other_colors() {
    let mut grid = grid_from(&["BBB", "WWW", "WWW"]);
    let mut sink = RecordingSink::new();

    let painted =
        flood_fill(&mut grid, CellPos::new(2, 1), Color::WHITE, GREEN, &mut sink).unwrap();

    assert_eq!(painted, 6);
    assert_eq!(grid, grid_from(&["BBB", "GGG", "GGG"]));
}

#[test]
fn test_fill_respects_connectivity() {
    // The white cell in the top-right corner only touches the region diagonally
    let mut grid = grid_from(&[
        "WWKW",
        "WWWK",
        "KKKK",
        "WWWW",
    ]);
    let mut sink = RecordingSink::new();

    flood_fill(&mut grid, CellPos::new(0, 0), Color::WHITE, RED, &mut sink).unwrap();

    assert_eq!(
        grid,
        grid_from(&[
            "RRKW",
            "RRRK",
            "KKKK",
            "WWWW",
        ])
    );
}

#[test]
fn test_fill_follows_winding_path() {
    let mut grid = grid_from(&[
        "WKWWW",
        "WKWKW",
        "WKWKW",
        "WKWKW",
        "WWWKW",
    ]);
    let mut sink = RecordingSink::new();

    let painted = flood_fill(&mut grid, CellPos::new(0, 0), Color::WHITE, BLUE, &mut sink).unwrap();

    assert_eq!(painted, 17);
    assert_eq!(grid.count(Color::WHITE), 0);
}

#[test]
fn test_fill_is_idempotent() {
    let mut once = grid_from(&["WKW", "WKW", "WWK"]);
    let mut sink = RecordingSink::new();
    flood_fill(&mut once, CellPos::new(0, 0), Color::WHITE, RED, &mut sink).unwrap();

    let mut twice = once.clone();
    sink.clear();
    let painted = flood_fill(&mut twice, CellPos::new(0, 0), Color::WHITE, RED, &mut sink).unwrap();

    assert_eq!(painted, 0);
    assert!(sink.commands().is_empty());
    assert_eq!(once, twice);
}

#[test]
fn test_fill_same_color_is_noop() {
    let mut grid = Grid::new(16, RED);
    let mut sink = RecordingSink::new();

    let painted = flood_fill(&mut grid, CellPos::new(3, 3), RED, RED, &mut sink).unwrap();

    assert_eq!(painted, 0);
    assert!(sink.commands().is_empty());
    assert_eq!(grid.count(RED), 256);
}
