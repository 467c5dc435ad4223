//! PNG snapshot export
//!
//! Rasterizes the allocation summary to a small dashboard image: a
//! stacked budget bar (main / skill / remaining) and one multiplier
//! bar per slot, over a caller-supplied background color. Filenames
//! are date-stamped so repeated exports sort chronologically.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use image::{Rgb, RgbImage};

use crate::session::Summary;

const WIDTH: u32 = 480;
const HEIGHT: u32 = 220;
const MARGIN: u32 = 20;

const MAIN_COLOR: Rgb<u8> = Rgb([245, 158, 11]);
const SKILL_COLOR: Rgb<u8> = Rgb([96, 165, 250]);
const REMAINING_COLOR: Rgb<u8> = Rgb([214, 211, 209]);
const OVERSPENT_COLOR: Rgb<u8> = Rgb([239, 68, 68]);

/// Rendering options
#[derive(Debug, Clone, Copy)]
pub struct SnapshotStyle {
    /// Background color (r, g, b)
    pub background: (u8, u8, u8),
}

impl Default for SnapshotStyle {
    fn default() -> Self {
        // Matches the app's light slate backdrop
        Self {
            background: (248, 250, 252),
        }
    }
}

/// Export error types
#[derive(Debug, Clone)]
pub enum ExportError {
    IoError(String),
}

impl std::fmt::Display for ExportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportError::IoError(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for ExportError {}

/// Date-stamped snapshot filename
pub fn snapshot_filename(date: NaiveDate) -> String {
    format!("shardplan-{}.png", date.format("%Y-%m-%d"))
}

/// Render and write today's snapshot into `dir`, returning its path
pub fn export_snapshot(
    summary: &Summary,
    dir: &Path,
    style: &SnapshotStyle,
) -> Result<PathBuf, ExportError> {
    let img = render(summary, style);
    std::fs::create_dir_all(dir).map_err(|e| ExportError::IoError(e.to_string()))?;
    let path = dir.join(snapshot_filename(chrono::Local::now().date_naive()));
    img.save(&path)
        .map_err(|e| ExportError::IoError(e.to_string()))?;
    log::info!("Snapshot exported to {:?}", path);
    Ok(path)
}

/// Pure rendering step, separated for tests
pub fn render(summary: &Summary, style: &SnapshotStyle) -> RgbImage {
    let (r, g, b) = style.background;
    let mut img = RgbImage::from_pixel(WIDTH, HEIGHT, Rgb([r, g, b]));

    draw_budget_bar(&mut img, summary);
    draw_multiplier_rows(&mut img, summary);
    img
}

fn draw_budget_bar(img: &mut RgbImage, summary: &Summary) {
    let bar_width = WIDTH - 2 * MARGIN;
    let report = &summary.budget;
    fill_rect(img, MARGIN, MARGIN, bar_width, 28, REMAINING_COLOR);

    if report.pool == 0 {
        return;
    }
    let scale = |value: u32| (u64::from(value) * u64::from(bar_width) / u64::from(report.pool)) as u32;
    let main_w = scale(report.consumed_main).min(bar_width);
    let skill_w = scale(report.consumed_skill).min(bar_width - main_w);
    fill_rect(img, MARGIN, MARGIN, main_w, 28, MAIN_COLOR);
    fill_rect(img, MARGIN + main_w, MARGIN, skill_w, 28, SKILL_COLOR);
    if report.overspent() {
        // Thin warning strip under the bar
        fill_rect(img, MARGIN, MARGIN + 30, bar_width, 4, OVERSPENT_COLOR);
    }
}

fn draw_multiplier_rows(img: &mut RgbImage, summary: &Summary) {
    let bar_width = WIDTH - 2 * MARGIN - 28;
    let max_mult = summary
        .skills
        .iter()
        .map(|s| s.multiplier)
        .chain([summary.main.multiplier])
        .max()
        .unwrap_or(0)
        .max(1);

    let rows: [(Rgb<u8>, u32); 4] = [
        (MAIN_COLOR, summary.main.multiplier),
        (SKILL_COLOR, summary.skills[0].multiplier),
        (SKILL_COLOR, summary.skills[1].multiplier),
        (SKILL_COLOR, summary.skills[2].multiplier),
    ];
    for (i, (color, mult)) in rows.into_iter().enumerate() {
        let y = 70 + i as u32 * 32;
        fill_rect(img, MARGIN, y, 16, 16, color);
        let w = (u64::from(mult) * u64::from(bar_width) / u64::from(max_mult)) as u32;
        fill_rect(img, MARGIN + 28, y, w, 16, color);
    }
}

fn fill_rect(img: &mut RgbImage, x: u32, y: u32, w: u32, h: u32, color: Rgb<u8>) {
    for dy in 0..h {
        for dx in 0..w {
            let (px, py) = (x + dx, y + dy);
            if px < img.width() && py < img.height() {
                img.put_pixel(px, py, color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{default_characters, DataManager};
    use crate::session::Planner;

    fn summary() -> Summary {
        Planner::new(DataManager {
            characters: default_characters(),
        })
        .summarize()
    }

    #[test]
    fn test_filename_is_date_stamped() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 26).unwrap();
        assert_eq!(snapshot_filename(date), "shardplan-2026-08-26.png");
    }

    #[test]
    fn test_render_fills_background() {
        let style = SnapshotStyle {
            background: (1, 2, 3),
        };
        let img = render(&summary(), &style);
        assert_eq!(img.dimensions(), (WIDTH, HEIGHT));
        assert_eq!(*img.get_pixel(0, 0), Rgb([1, 2, 3]));
        assert_eq!(*img.get_pixel(WIDTH - 1, HEIGHT - 1), Rgb([1, 2, 3]));
    }

    #[test]
    fn test_export_writes_png() {
        let dir = std::env::temp_dir().join(format!("shardplan-export-{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        let path = export_snapshot(&summary(), &dir, &SnapshotStyle::default()).unwrap();
        assert!(path.exists());
        assert_eq!(path.extension().and_then(|e| e.to_str()), Some("png"));
    }
}
