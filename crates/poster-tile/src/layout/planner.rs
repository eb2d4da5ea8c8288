//! Sheet count, rotation and scale selection

use log::{debug, info, warn};

use crate::constants::{MAX_SCALE, MIN_SCALE, POSTER_FILL_FACTOR};
use crate::types::{Margin, PageBox, Result, SizeRequest, TileError};

use super::LayoutPlan;

/// Sheet counts (columns, rows) for one orientation.
///
/// Counts stay floating point until the sheet limit has been checked, so
/// absurd poster sizes end in an error instead of integer overflow.
type Counts = (f64, f64);

fn sheet_count(length: f64, per_sheet: f64) -> f64 {
    (length / per_sheet).ceil()
}

fn area((cols, rows): Counts) -> f64 {
    cols * rows
}

/// Compute the tiling of `image` onto sheets of `media`.
///
/// The orientation needing fewer sheets wins; on a tie the sheets are used
/// upright.
pub fn plan(
    image: &PageBox,
    media: &PageBox,
    cut_margin: &Margin,
    white_margin: &Margin,
    request: &SizeRequest,
    max_sheets: usize,
) -> Result<LayoutPlan> {
    if image.width() <= 0.0 || image.height() <= 0.0 {
        return Err(TileError::InvalidImage {
            width: image.width(),
            height: image.height(),
        });
    }

    let drawable_width = media.width() - 2.0 * cut_margin.x;
    let drawable_height = media.height() - 2.0 * cut_margin.y;

    let (upright, turned) = match *request {
        SizeRequest::Scale(scale) => {
            if !(MIN_SCALE..=MAX_SCALE).contains(&scale) {
                return Err(TileError::InvalidScale(scale));
            }
            let width = image.width() * scale + 2.0 * white_margin.x;
            let height = image.height() * scale + 2.0 * white_margin.y;
            (
                (
                    sheet_count(width, drawable_width),
                    sheet_count(height, drawable_height),
                ),
                (
                    sheet_count(width, drawable_height),
                    sheet_count(height, drawable_width),
                ),
            )
        }
        SizeRequest::Poster(poster) => {
            let poster = normalize_poster(&poster, image)?;
            let width = POSTER_FILL_FACTOR * poster.width();
            let height = POSTER_FILL_FACTOR * poster.height();
            (
                (
                    sheet_count(width, media.width()),
                    sheet_count(height, media.height()),
                ),
                (
                    sheet_count(width, media.height()),
                    sheet_count(height, media.width()),
                ),
            )
        }
    };

    let rotate = area(upright) > area(turned);
    let (cols, rows) = if rotate { turned } else { upright };

    info!(
        "Deciding for {} column{} and {} row{} of {} pages.",
        cols,
        if cols == 1.0 { "" } else { "s" },
        rows,
        if rows == 1.0 { "" } else { "s" },
        if rotate { "landscape" } else { "portrait" }
    );

    // NaN counts fail the comparison and are refused too
    if !(area((cols, rows)) <= max_sheets as f64) {
        return Err(TileError::TooManySheets {
            cols: cols as usize,
            rows: rows as usize,
            limit: max_sheets,
        });
    }
    let (cols, rows) = (cols as usize, rows as usize);

    let mut plan = LayoutPlan {
        rows,
        cols,
        rotate,
        scale: 1.0,
        image: *image,
        poster: PageBox::default(),
        drawable_width,
        drawable_height,
    };
    let (area_width, area_height) = plan.area_size();

    let scale = match *request {
        SizeRequest::Scale(scale) => scale,
        SizeRequest::Poster(_) => {
            let scale_x = (area_width - 2.0 * white_margin.x) / image.width();
            let scale_y = (area_height - 2.0 * white_margin.y) / image.height();
            let scale = scale_x.min(scale_y);
            if scale.is_nan() || scale <= 0.0 {
                return Err(TileError::InvalidScale(scale));
            }
            info!("Deciding for a scale factor of {}", scale);
            scale
        }
    };

    let content_width = image.width() * scale;
    let content_height = image.height() * scale;
    let left = (area_width - content_width) / 2.0;
    let bottom = (area_height - content_height) / 2.0;

    plan.scale = scale;
    plan.poster = PageBox::new(left, bottom, left + content_width, bottom + content_height);

    debug!(
        "Output image is: [{},{},{},{}]",
        plan.poster.left, plan.poster.bottom, plan.poster.right, plan.poster.top
    );

    Ok(plan)
}

/// Bring a requested poster box to the origin and into the orientation of
/// the image.
fn normalize_poster(poster: &PageBox, image: &PageBox) -> Result<PageBox> {
    let mut poster = *poster;

    if poster.left != 0.0 || poster.bottom != 0.0 {
        warn!("Poster lower-left coordinates are assumed 0!");
        poster = PageBox::from_size(poster.width(), poster.height());
    }

    if poster.width() <= 0.0 || poster.height() <= 0.0 {
        return Err(TileError::InvalidPoster {
            width: poster.width(),
            height: poster.height(),
        });
    }

    // landscape spec, change to portrait for now
    if poster.is_landscape() {
        poster = poster.swapped();
    }
    // landscape image makes a landscape poster
    if image.is_landscape() {
        poster = poster.swapped();
    }

    Ok(poster)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_poster_origin_is_dropped() {
        let image = PageBox::from_size(595.0, 842.0);
        let poster = normalize_poster(&PageBox::new(10.0, 10.0, 210.0, 310.0), &image).unwrap();
        assert_eq!(poster, PageBox::from_size(200.0, 300.0));
    }

    #[test]
    fn test_poster_follows_image_orientation() {
        let portrait = PageBox::from_size(100.0, 200.0);
        let landscape = PageBox::from_size(200.0, 100.0);
        let poster = PageBox::from_size(400.0, 300.0);

        assert_eq!(
            normalize_poster(&poster, &portrait).unwrap(),
            PageBox::from_size(300.0, 400.0)
        );
        assert_eq!(
            normalize_poster(&poster, &landscape).unwrap(),
            PageBox::from_size(400.0, 300.0)
        );
    }

    #[test]
    fn test_counts_of_huge_lengths_stay_finite_or_infinite() {
        let counts = (sheet_count(1.0e300, 1.0), sheet_count(f64::MAX, 0.5));
        assert!(area(counts).is_infinite());
        assert_eq!(area((sheet_count(1190.0, 595.0), sheet_count(1684.0, 842.0))), 4.0);
    }

    #[test]
    fn test_empty_poster_is_rejected() {
        let image = PageBox::from_size(100.0, 100.0);
        assert!(matches!(
            normalize_poster(&PageBox::from_size(0.0, 100.0), &image),
            Err(TileError::InvalidPoster { .. })
        ));
    }
}
