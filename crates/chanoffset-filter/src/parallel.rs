//! Tiled multi-threaded rendering
//!
//! Stands in for a host tile scheduler: the destination is cut into
//! horizontal bands that own disjoint rows, and each band renders its part
//! of the window on the rayon pool. Source and mask are shared read-only.

use crate::abort::AbortSignal;
use crate::error::FilterResult;
use crate::processor::{OffsetProcessor, RenderOutcome};
use crate::render::{OffsetFilter, Prepared, RenderArguments};
use chanoffset_core::{ImageViewMut, Rect, Sample};
use rayon::prelude::*;

/// Rows per band used by [`OffsetFilter::render_parallel`]
pub const DEFAULT_BAND_ROWS: usize = 32;

impl OffsetFilter {
    /// Render one window, processing bands of `rows_per_band` rows in
    /// parallel.
    ///
    /// Produces the same pixels as [`OffsetFilter::render`]. Validation and
    /// errors are identical. If the signal fires, bands already running
    /// stop at their next row and the outcome is
    /// [`RenderOutcome::Aborted`].
    pub fn render_tiled<S: AbortSignal + Sync + ?Sized>(
        &self,
        args: RenderArguments<'_>,
        abort: &S,
        rows_per_band: usize,
    ) -> FilterResult<RenderOutcome> {
        let window = args.render_window;
        let outcome = match self.prepare(args)? {
            Prepared::U8(dst, p) => render_bands(dst, &p, window, abort, rows_per_band),
            Prepared::U16(dst, p) => render_bands(dst, &p, window, abort, rows_per_band),
            Prepared::F32(dst, p) => render_bands(dst, &p, window, abort, rows_per_band),
        };
        Ok(outcome)
    }

    /// [`OffsetFilter::render_tiled`] with [`DEFAULT_BAND_ROWS`]
    pub fn render_parallel<S: AbortSignal + Sync + ?Sized>(
        &self,
        args: RenderArguments<'_>,
        abort: &S,
    ) -> FilterResult<RenderOutcome> {
        self.render_tiled(args, abort, DEFAULT_BAND_ROWS)
    }
}

fn render_bands<T: Sample, S: AbortSignal + Sync + ?Sized>(
    dst: ImageViewMut<'_, T>,
    processor: &OffsetProcessor<'_, T>,
    window: Rect,
    abort: &S,
    rows_per_band: usize,
) -> RenderOutcome {
    if window.is_empty() {
        return RenderOutcome::Completed;
    }
    // Rows outside the window are never written, so leave them out of the bands
    let (_, rest) = dst.split_at_row(window.y1);
    let (rows, _) = rest.split_at_row(window.y2);

    rows.into_row_bands(rows_per_band)
        .into_par_iter()
        .map(|mut band| {
            let band_window = Rect::new_unchecked(
                window.x1,
                band.bounds().y1,
                window.x2,
                band.bounds().y2,
            );
            processor.process(&mut band, band_window, abort)
        })
        .reduce(|| RenderOutcome::Completed, RenderOutcome::merge)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::abort::NeverAbort;
    use crate::params::Params;
    use crate::values::RgbaValues;
    use chanoffset_core::{Components, Image};
    use std::sync::atomic::AtomicBool;

    fn filter() -> OffsetFilter {
        OffsetFilter::new(Params {
            value: RgbaValues::new(0.1, -0.2, 0.3, 0.0),
            ..Params::default()
        })
    }

    #[test]
    fn test_tiled_matches_sequential() {
        let mut src = Image::<u8>::from_size(7, 23, Components::Rgba).unwrap();
        for (i, v) in src.data_mut().iter_mut().enumerate() {
            *v = (i * 37 % 256) as u8;
        }
        let window = Rect::new(1, 2, 6, 21).unwrap();

        let mut seq = Image::<u8>::from_size(7, 23, Components::Rgba).unwrap();
        let args = RenderArguments::new(window, Some(src.view().into()), seq.view_mut().into());
        assert_eq!(filter().render(args, &NeverAbort).unwrap(), RenderOutcome::Completed);

        for rows in [1, 4, 5, 64] {
            let mut par = Image::<u8>::from_size(7, 23, Components::Rgba).unwrap();
            let args = RenderArguments::new(window, Some(src.view().into()), par.view_mut().into());
            assert_eq!(
                filter().render_tiled(args, &NeverAbort, rows).unwrap(),
                RenderOutcome::Completed
            );
            assert_eq!(par, seq, "rows per band {rows}");
        }
    }

    #[test]
    fn test_tiled_huge_band_height() {
        let src = Image::<u8>::from_size(3, 5, Components::Rgb).unwrap();
        let mut seq = Image::<u8>::from_size(3, 5, Components::Rgb).unwrap();
        let args = RenderArguments::new(Rect::from_size(3, 5), Some(src.view().into()), seq.view_mut().into());
        assert_eq!(filter().render(args, &NeverAbort).unwrap(), RenderOutcome::Completed);

        for rows in [i32::MAX as usize + 1, usize::MAX] {
            let mut par = Image::<u8>::from_size(3, 5, Components::Rgb).unwrap();
            let args = RenderArguments::new(Rect::from_size(3, 5), Some(src.view().into()), par.view_mut().into());
            assert_eq!(
                filter().render_tiled(args, &NeverAbort, rows).unwrap(),
                RenderOutcome::Completed
            );
            assert_eq!(par, seq, "rows per band {rows}");
        }
    }

    #[test]
    fn test_tiled_abort() {
        let src = Image::<f32>::from_size(4, 8, Components::Rgb).unwrap();
        let mut dst = Image::<f32>::from_size(4, 8, Components::Rgb).unwrap();
        dst.fill(&[-1.0, -1.0, -1.0]).unwrap();
        let aborted = AtomicBool::new(true);
        let args = RenderArguments::new(Rect::from_size(4, 8), Some(src.view().into()), dst.view_mut().into());

        let outcome = filter().render_parallel(args, &aborted).unwrap();
        assert_eq!(outcome, RenderOutcome::Aborted);
        assert!(dst.data().iter().all(|&v| v == -1.0));
    }

    #[test]
    fn test_tiled_empty_window() {
        let mut dst = Image::<u16>::from_size(4, 4, Components::Alpha).unwrap();
        let args = RenderArguments::new(Rect::new(2, 2, 2, 4).unwrap(), None, dst.view_mut().into());
        assert_eq!(
            filter().render_tiled(args, &NeverAbort, 2).unwrap(),
            RenderOutcome::Completed
        );
    }
}
