//! Shape rasterizers.
//!
//! Every primitive is turned into horizontal [`Span`]s pushed into a
//! [`Spans`] collector. The collector clips spans to the canvas while
//! remembering the unclipped [`Extent`] of the shape, which is what the
//! reject policy is checked against. Nothing here touches the canvas.
//!
//! Circles and triangle fills follow the classic Adafruit GFX algorithms
//! used by the M5Stack display library. Intermediate products are widened
//! to `i128`, so any `i32` input is safe.

use std::ops::RangeInclusive;

/// Inclusive run of pixels `x0..=x1` on row `y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub y: i64,
    pub x0: i64,
    pub x1: i64,
}

/// Bounding box of everything a shape would draw, before clipping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Extent {
    pub min_x: i64,
    pub min_y: i64,
    pub max_x: i64,
    pub max_y: i64,
}

impl Extent {
    const fn union(self, other: Self) -> Self {
        Self {
            min_x: if self.min_x < other.min_x { self.min_x } else { other.min_x },
            min_y: if self.min_y < other.min_y { self.min_y } else { other.min_y },
            max_x: if self.max_x > other.max_x { self.max_x } else { other.max_x },
            max_y: if self.max_y > other.max_y { self.max_y } else { other.max_y },
        }
    }

    /// A point of the extent that lies outside of a `width`×`height`
    /// canvas, or `None` if the extent fits.
    pub const fn outside(&self, width: i64, height: i64) -> Option<(i64, i64)> {
        let x = if self.min_x < 0 {
            self.min_x
        } else if self.max_x >= width {
            self.max_x
        } else {
            self.min_x
        };
        let y = if self.min_y < 0 {
            self.min_y
        } else if self.max_y >= height {
            self.max_y
        } else {
            self.min_y
        };
        if x < 0 || x >= width || y < 0 || y >= height {
            Some((x, y))
        } else {
            None
        }
    }
}

/// Collects clipped spans of a shape.
pub struct Spans {
    width: i64,
    height: i64,
    spans: Vec<Span>,
    extent: Option<Extent>,
}

impl Spans {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: i64::from(width),
            height: i64::from(height),
            spans: Vec::new(),
            extent: None,
        }
    }

    /// Add a run of pixels. The ends may come in any order.
    pub fn push(&mut self, y: i64, x0: i64, x1: i64) {
        let (x0, x1) = if x0 <= x1 { (x0, x1) } else { (x1, x0) };
        self.cover(Extent {
            min_x: x0,
            min_y: y,
            max_x: x1,
            max_y: y,
        });
        if y < 0 || y >= self.height || x1 < 0 || x0 >= self.width {
            return;
        }
        self.spans.push(Span {
            y,
            x0: x0.max(0),
            x1: x1.min(self.width - 1),
        });
    }

    pub fn pixel(&mut self, x: i64, y: i64) {
        self.push(y, x, x);
    }

    /// Account for pixels that are drawn without pushing spans for them.
    ///
    /// Used by the shapes that skip work outside of the canvas.
    fn cover(&mut self, extent: Extent) {
        self.extent = Some(match self.extent {
            Some(old) => old.union(extent),
            None => extent,
        });
    }

    /// True if nothing of `extent` lands on the canvas.
    const fn misses(&self, extent: Extent) -> bool {
        extent.max_x < 0 || extent.min_x >= self.width || extent.max_y < 0 || extent.min_y >= self.height
    }

    /// Rows of `y0..=y1` that are inside of the canvas.
    fn visible_rows(&self, y0: i64, y1: i64) -> RangeInclusive<i64> {
        y0.max(0)..=y1.min(self.height - 1)
    }

    pub const fn extent(&self) -> Option<Extent> {
        self.extent
    }

    pub fn spans(&self) -> &[Span] {
        &self.spans
    }
}

/// Straight line with both endpoints included.
///
/// Pixels are computed directly from the step index instead of
/// incrementally, so only the part of the line that crosses the canvas is
/// walked. The pattern matches Bresenham with halves rounded away from the
/// start point.
pub fn line(out: &mut Spans, x0: i64, y0: i64, x1: i64, y1: i64) {
    out.cover(Extent {
        min_x: x0.min(x1),
        min_y: y0.min(y1),
        max_x: x0.max(x1),
        max_y: y0.max(y1),
    });
    if y0 == y1 {
        out.push(y0, x0, x1);
        return;
    }
    let dx = (x1 - x0).abs();
    let dy = (y1 - y0).abs();
    let sx = if x1 < x0 { -1 } else { 1 };
    let sy = if y1 < y0 { -1 } else { 1 };

    if dx < dy {
        // Steep: exactly one pixel per row.
        for j in visible_steps(y0, sy, dy, out.height) {
            out.pixel(x0 + sx * round_div(j, dx, dy), y0 + sy * j);
        }
        return;
    }

    // Shallow: pixels of the same row are merged into one span.
    let mut run: Option<(i64, i64, i64)> = None;
    for i in visible_steps(x0, sx, dx, out.width) {
        let x = x0 + sx * i;
        let y = y0 + sy * round_div(i, dy, dx);
        run = match run {
            Some((row, start, _)) if row == y => Some((row, start, x)),
            Some((row, start, end)) => {
                out.push(row, start, end);
                Some((y, x, x))
            }
            None => Some((y, x, x)),
        };
    }
    if let Some((row, start, end)) = run {
        out.push(row, start, end);
    }
}

/// Steps `i` in `0..=n` for which `start + dir * i` is in `0..limit`.
fn visible_steps(start: i64, dir: i64, n: i64, limit: i64) -> RangeInclusive<i64> {
    if dir > 0 {
        0_i64.max(-start)..=n.min(limit - 1 - start)
    } else {
        0_i64.max(start - (limit - 1))..=n.min(start)
    }
}

/// `i * num / den` rounded half up. Requires `0 <= i <= den` and `den > 0`.
#[allow(clippy::cast_possible_truncation)]
fn round_div(i: i64, num: i64, den: i64) -> i64 {
    let (i, num, den) = (i128::from(i), i128::from(num), i128::from(den));
    // The result never exceeds `num`, so it fits back into i64.
    ((2 * i * num + den) / (2 * den)) as i64
}

/// X of the edge from (x, y) with slope `dx / dy` at row `y + t`,
/// truncated toward zero.
#[allow(clippy::cast_possible_truncation)]
fn edge_x(x: i64, dx: i64, t: i64, dy: i64) -> i64 {
    let offset = i128::from(dx) * i128::from(t) / i128::from(dy);
    x + offset as i64
}

/// Outline of the `w`×`h` rectangle at (x, y). Expects positive sizes.
pub fn rect_outline(out: &mut Spans, x: i64, y: i64, w: i64, h: i64) {
    let right = x + w - 1;
    let bottom = y + h - 1;
    out.cover(Extent {
        min_x: x,
        min_y: y,
        max_x: right,
        max_y: bottom,
    });
    out.push(y, x, right);
    if h == 1 {
        return;
    }
    out.push(bottom, x, right);
    for row in out.visible_rows(y + 1, bottom - 1) {
        out.push(row, x, x);
        out.push(row, right, right);
    }
}

/// Solid `w`×`h` rectangle at (x, y). Expects positive sizes.
pub fn rect_fill(out: &mut Spans, x: i64, y: i64, w: i64, h: i64) {
    let right = x + w - 1;
    let bottom = y + h - 1;
    out.cover(Extent {
        min_x: x,
        min_y: y,
        max_x: right,
        max_y: bottom,
    });
    for row in out.visible_rows(y, bottom) {
        out.push(row, x, right);
    }
}

/// Number of steps the midpoint walk makes for radius `r`.
///
/// The walk continues from step `x` while `x < y`, and `y` never grows, so
/// the steps that continue form a prefix.
fn octant_steps(r: i64) -> i64 {
    let last = last_true(0, r, |x| x < if x == 0 { r } else { octant_y(r, x) });
    last + 1
}

/// Row of the midpoint walk at step `x`, for `1 <= x <= octant_steps(r)`.
///
/// Before step `x` the walk sits on the row nearest to the circle at column
/// `x - 1`. The decision variable then tells if step `x` moves one row in.
#[allow(clippy::cast_possible_truncation)]
fn octant_y(r: i64, x: i64) -> i64 {
    let (r, p) = (i128::from(r), i128::from(x - 1));
    let y = ((4 * (r * r - p * p)).isqrt() + 1) / 2;
    let f = p * p + 2 * p + 1 + y * y - y - r * r;
    // 0 <= y <= r, so it fits back into i64.
    (if f >= 0 { y - 1 } else { y }) as i64
}

/// Largest `m` in `lo..=hi` with `pred(m)`. Expects `pred(lo)` and `pred`
/// to turn false at most once.
fn last_true(mut lo: i64, mut hi: i64, pred: impl Fn(i64) -> bool) -> i64 {
    while lo < hi {
        let mid = lo + (hi - lo + 1) / 2;
        if pred(mid) {
            lo = mid;
        } else {
            hi = mid - 1;
        }
    }
    lo
}

/// Union of the ranges in ascending order, without overlaps.
fn merge(mut ranges: Vec<RangeInclusive<i64>>) -> Vec<RangeInclusive<i64>> {
    ranges.retain(|r| !r.is_empty());
    ranges.sort_unstable_by_key(|r| *r.start());
    let mut out: Vec<RangeInclusive<i64>> = Vec::with_capacity(ranges.len());
    for range in ranges {
        match out.last_mut() {
            Some(last) if *range.start() <= *last.end() + 1 => {
                if range.end() > last.end() {
                    *last = *last.start()..=*range.end();
                }
            }
            _ => out.push(range),
        }
    }
    out
}

/// Offsets `0..=n` that land inside of `0..limit` when added to or
/// subtracted from `c`.
fn mirrored_steps(c: i64, n: i64, limit: i64) -> [RangeInclusive<i64>; 2] {
    [visible_steps(c, 1, n, limit), visible_steps(c, -1, n, limit)]
}

const fn circle_box(cx: i64, cy: i64, r: i64) -> Extent {
    Extent {
        min_x: cx - r,
        min_y: cy - r,
        max_x: cx + r,
        max_y: cy + r,
    }
}

/// Outline of the circle of radius `r` centered at (cx, cy). Expects `r > 0`.
///
/// Only the octant steps whose column or row offset reaches the canvas are
/// computed, so the work depends on the canvas size and not on `r`.
pub fn circle_outline(out: &mut Spans, cx: i64, cy: i64, r: i64) {
    let bbox = circle_box(cx, cy, r);
    out.cover(bbox);
    out.pixel(cx, cy + r);
    out.pixel(cx, cy - r);
    out.pixel(cx + r, cy);
    out.pixel(cx - r, cy);
    if out.misses(bbox) {
        return;
    }
    let n = octant_steps(r);
    let mut steps = mirrored_steps(cx, n, out.width).to_vec();
    steps.extend(mirrored_steps(cy, n, out.height));
    for x in merge(steps).into_iter().flatten().filter(|&x| x > 0) {
        let y = octant_y(r, x);
        out.pixel(cx + x, cy + y);
        out.pixel(cx - x, cy + y);
        out.pixel(cx + x, cy - y);
        out.pixel(cx - x, cy - y);
        out.pixel(cx + y, cy + x);
        out.pixel(cx - y, cy + x);
        out.pixel(cx + y, cy - x);
        out.pixel(cx - y, cy - x);
    }
}

/// Solid circle. Every row spans exactly between the outline's pixels.
pub fn circle_fill(out: &mut Spans, cx: i64, cy: i64, r: i64) {
    let bbox = circle_box(cx, cy, r);
    out.cover(bbox);
    if out.misses(bbox) {
        return;
    }
    let n = octant_steps(r);
    for k in merge(mirrored_steps(cy, r, out.height).to_vec()).into_iter().flatten() {
        let Some(half) = half_width(r, n, k) else {
            continue;
        };
        out.push(cy + k, cx - half, cx + half);
        if k != 0 {
            out.push(cy - k, cx - half, cx + half);
        }
    }
}

/// Half width of the filled row `k` rows away from the center, or `None`
/// if the walk never reaches that row.
fn half_width(r: i64, n: i64, k: i64) -> Option<i64> {
    let mut half = None;
    if k == 0 {
        half = Some(r);
    }
    if k == r {
        half = half.max(Some(0));
    }
    // Step k spans row k out to its y.
    if (1..=n).contains(&k) {
        half = half.max(Some(octant_y(r, k)));
    }
    // Steps on row k span it out to their x. The last one is the widest.
    let last = last_true(0, n, |x| x == 0 || octant_y(r, x) >= k);
    if last > 0 && octant_y(r, last) == k {
        half = half.max(Some(last));
    }
    half
}

/// Edges v0→v1, v1→v2, v2→v0, in this order.
pub fn triangle_outline(out: &mut Spans, v: [(i64, i64); 3]) {
    let [(x0, y0), (x1, y1), (x2, y2)] = v;
    line(out, x0, y0, x1, y1);
    line(out, x1, y1, x2, y2);
    line(out, x2, y2, x0, y0);
}

/// Scanline triangle fill.
///
/// The edges are rasterized on top of the scanlines so that the fill
/// always covers the outline of the same triangle.
pub fn triangle_fill(out: &mut Spans, v: [(i64, i64); 3]) {
    let mut pts = v;
    pts.sort_by_key(|&(_, y)| y);
    let [(x0, y0), (x1, y1), (x2, y2)] = pts;

    if y0 == y2 {
        let a = x0.min(x1).min(x2);
        let b = x0.max(x1).max(x2);
        out.push(y0, a, b);
        return;
    }

    let dx01 = x1 - x0;
    let dy01 = y1 - y0;
    let dx02 = x2 - x0;
    let dy02 = y2 - y0;
    let dx12 = x2 - x1;
    let dy12 = y2 - y1;

    // The upper part includes row y1 only when the lower part is flat.
    let last = if y1 == y2 { y1 } else { y1 - 1 };
    for y in out.visible_rows(y0, last) {
        let a = edge_x(x0, dx01, y - y0, dy01);
        let b = edge_x(x0, dx02, y - y0, dy02);
        out.push(y, a, b);
    }
    for y in out.visible_rows(last + 1, y2) {
        let a = edge_x(x1, dx12, y - y1, dy12);
        let b = edge_x(x0, dx02, y - y0, dy02);
        out.push(y, a, b);
    }

    triangle_outline(out, v);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    fn points(spans: &Spans) -> HashSet<(i64, i64)> {
        let mut set = HashSet::new();
        for span in spans.spans() {
            for x in span.x0..=span.x1 {
                set.insert((x, span.y));
            }
        }
        set
    }

    #[test]
    fn test_push_clips() {
        let mut s = Spans::new(10, 5);
        s.push(2, 8, -3);
        s.push(-1, 0, 3);
        s.push(4, 12, 20);
        assert_eq!(s.spans(), &[Span { y: 2, x0: 0, x1: 8 }]);
        let ext = s.extent().unwrap();
        assert_eq!(
            ext,
            Extent {
                min_x: -3,
                min_y: -1,
                max_x: 20,
                max_y: 4
            }
        );
        assert_eq!(ext.outside(10, 5), Some((-3, -1)));
    }

    #[test]
    fn test_extent_outside() {
        let inside = Extent {
            min_x: 0,
            min_y: 0,
            max_x: 9,
            max_y: 4,
        };
        assert_eq!(inside.outside(10, 5), None);
        let right = Extent { max_x: 10, ..inside };
        assert_eq!(right.outside(10, 5), Some((10, 0)));
        let below = Extent { max_y: 7, ..inside };
        assert_eq!(below.outside(10, 5), Some((0, 7)));
    }

    #[test]
    fn test_line_horizontal_and_vertical() {
        let mut s = Spans::new(20, 20);
        line(&mut s, 5, 3, 1, 3);
        assert_eq!(s.spans(), &[Span { y: 3, x0: 1, x1: 5 }]);

        let mut s = Spans::new(20, 20);
        line(&mut s, 2, 1, 2, 4);
        let pts = points(&s);
        assert_eq!(pts.len(), 4);
        for y in 1..=4 {
            assert!(pts.contains(&(2, y)));
        }
    }

    #[test]
    fn test_line_diagonal() {
        let mut s = Spans::new(20, 20);
        line(&mut s, 0, 0, 4, 4);
        let pts = points(&s);
        let exp: HashSet<_> = (0..=4).map(|i| (i, i)).collect();
        assert_eq!(pts, exp);
    }

    #[test]
    fn test_line_shallow_merges_runs() {
        let mut s = Spans::new(20, 20);
        line(&mut s, 0, 0, 9, 1);
        assert_eq!(s.spans().len(), 2);
        let pts = points(&s);
        assert_eq!(pts.len(), 10);
        assert!(pts.contains(&(0, 0)));
        assert!(pts.contains(&(9, 1)));
    }

    #[test]
    fn test_rect_outline() {
        let mut s = Spans::new(20, 20);
        rect_outline(&mut s, 2, 3, 4, 3);
        let pts = points(&s);
        // 4 on top, 4 on bottom, 2 on the middle row
        assert_eq!(pts.len(), 10);
        assert!(pts.contains(&(2, 3)));
        assert!(pts.contains(&(5, 5)));
        assert!(!pts.contains(&(3, 4)));
    }

    #[test]
    fn test_rect_outline_matches_fill_bbox() {
        let mut outline = Spans::new(50, 50);
        rect_outline(&mut outline, 10, 10, 7, 5);
        let mut fill = Spans::new(50, 50);
        rect_fill(&mut fill, 10, 10, 7, 5);
        assert_eq!(outline.extent(), fill.extent());
        let filled = points(&fill);
        assert_eq!(filled.len(), 35);
        assert!(points(&outline).is_subset(&filled));
    }

    #[test]
    fn test_rect_fill_huge_is_clipped() {
        let mut s = Spans::new(8, 8);
        rect_fill(&mut s, -1_000_000, -1_000_000, 3_000_000, 3_000_000);
        assert_eq!(s.spans().len(), 8);
        assert_eq!(points(&s).len(), 64);
    }

    #[test]
    fn test_circle_outline() {
        let mut s = Spans::new(100, 100);
        circle_outline(&mut s, 50, 50, 10);
        let pts = points(&s);
        assert!(pts.contains(&(50, 60)));
        assert!(pts.contains(&(50, 40)));
        assert!(pts.contains(&(60, 50)));
        assert!(pts.contains(&(40, 50)));
        assert!(!pts.contains(&(50, 50)));
        // symmetric
        for &(x, y) in &pts {
            assert!(pts.contains(&(100 - x, y)));
            assert!(pts.contains(&(x, 100 - y)));
        }
    }

    #[test]
    fn test_circle_fill_covers_outline() {
        let mut outline = Spans::new(200, 200);
        circle_outline(&mut outline, 100, 100, 50);
        let mut fill = Spans::new(200, 200);
        circle_fill(&mut fill, 100, 100, 50);
        let filled = points(&fill);
        assert!(filled.contains(&(100, 100)));
        assert!(points(&outline).is_subset(&filled));
        assert_eq!(outline.extent(), fill.extent());
    }

    /// Step by step midpoint walk of one octant.
    fn walk(r: i64) -> Vec<(i64, i64)> {
        let mut steps = Vec::new();
        let mut f = 1 - r;
        let mut dd_f_x = 1;
        let mut dd_f_y = -2 * r;
        let (mut x, mut y) = (0, r);
        while x < y {
            if f >= 0 {
                y -= 1;
                dd_f_y += 2;
                f += dd_f_y;
            }
            x += 1;
            dd_f_x += 2;
            f += dd_f_x;
            steps.push((x, y));
        }
        steps
    }

    fn walk_outline(out: &mut Spans, cx: i64, cy: i64, r: i64) {
        out.pixel(cx, cy + r);
        out.pixel(cx, cy - r);
        out.pixel(cx + r, cy);
        out.pixel(cx - r, cy);
        for (x, y) in walk(r) {
            for (dx, dy) in [(x, y), (y, x)] {
                out.pixel(cx + dx, cy + dy);
                out.pixel(cx - dx, cy + dy);
                out.pixel(cx + dx, cy - dy);
                out.pixel(cx - dx, cy - dy);
            }
        }
    }

    fn walk_fill(out: &mut Spans, cx: i64, cy: i64, r: i64) {
        out.push(cy, cx - r, cx + r);
        out.pixel(cx, cy + r);
        out.pixel(cx, cy - r);
        for (x, y) in walk(r) {
            out.push(cy + y, cx - x, cx + x);
            out.push(cy - y, cx - x, cx + x);
            out.push(cy + x, cx - y, cx + y);
            out.push(cy - x, cx - y, cx + y);
        }
    }

    #[test]
    fn test_octant_matches_walk() {
        for r in (1..=300).chain([4_095, 65_537, 1_000_003]) {
            let steps = walk(r);
            assert_eq!(octant_steps(r), i64::try_from(steps.len()).unwrap(), "r={r}");
            for &(x, y) in steps.iter().step_by(97).chain(steps.last()) {
                assert_eq!(octant_y(r, x), y, "r={r} x={x}");
            }
        }
    }

    #[test]
    fn test_circles_match_walk_when_clipped() {
        let centers = [-45, -12, -3, 0, 7, 11, 16, 22, 30, 61];
        for r in 1..=40 {
            for cx in centers {
                for cy in centers {
                    let mut got = Spans::new(23, 17);
                    circle_outline(&mut got, cx, cy, r);
                    let mut exp = Spans::new(23, 17);
                    walk_outline(&mut exp, cx, cy, r);
                    assert_eq!(points(&got), points(&exp), "outline ({cx}, {cy}) r={r}");
                    assert_eq!(got.extent(), exp.extent());

                    let mut got = Spans::new(23, 17);
                    circle_fill(&mut got, cx, cy, r);
                    let mut exp = Spans::new(23, 17);
                    walk_fill(&mut exp, cx, cy, r);
                    assert_eq!(points(&got), points(&exp), "fill ({cx}, {cy}) r={r}");
                    assert_eq!(got.extent(), exp.extent());
                }
            }
        }
    }

    #[test]
    fn test_circle_huge_radius() {
        let r = i64::from(i32::MAX);
        let mut fill = Spans::new(16, 16);
        circle_fill(&mut fill, 8, 8, r);
        assert_eq!(points(&fill).len(), 256);
        assert_eq!(fill.spans().len(), 16);

        let mut outline = Spans::new(16, 16);
        circle_outline(&mut outline, 8, 8, r);
        assert!(outline.spans().is_empty());
        assert_eq!(outline.extent(), Some(circle_box(8, 8, r)));

        // only the bottom of the circle touches the canvas
        let r = 100_000_000;
        let mut fill = Spans::new(16, 16);
        circle_fill(&mut fill, 8, 3 - r, r);
        let mut outline = Spans::new(16, 16);
        circle_outline(&mut outline, 8, 3 - r, r);
        let filled = points(&fill);
        assert!(filled.contains(&(8, 3)));
        assert!(filled.contains(&(0, 0)));
        assert!(!filled.contains(&(8, 4)));
        assert!(points(&outline).contains(&(8, 3)));
        assert!(points(&outline).is_subset(&filled));

        let mut away = Spans::new(16, 16);
        circle_fill(&mut away, i64::from(i32::MIN), 0, r);
        circle_outline(&mut away, i64::from(i32::MAX), 0, r);
        assert!(away.spans().is_empty());
        assert!(away.extent().unwrap().outside(16, 16).is_some());
    }

    #[test]
    fn test_triangle_outline_vertices() {
        let mut s = Spans::new(200, 200);
        triangle_outline(&mut s, [(30, 30), (180, 100), (80, 150)]);
        let pts = points(&s);
        assert!(pts.contains(&(30, 30)));
        assert!(pts.contains(&(180, 100)));
        assert!(pts.contains(&(80, 150)));
        // interior stays empty
        assert!(!pts.contains(&(100, 100)));
    }

    #[test]
    fn test_triangle_fill_covers_outline() {
        let tri = [(30, 30), (180, 100), (80, 150)];
        let mut outline = Spans::new(200, 200);
        triangle_outline(&mut outline, tri);
        let mut fill = Spans::new(200, 200);
        triangle_fill(&mut fill, tri);
        let filled = points(&fill);
        assert!(filled.contains(&(100, 100)));
        assert!(points(&outline).is_subset(&filled));
        assert!(!filled.contains(&(31, 149)));
    }

    #[test]
    fn test_triangle_fill_flat() {
        let mut s = Spans::new(50, 50);
        triangle_fill(&mut s, [(10, 5), (3, 5), (7, 5)]);
        assert_eq!(s.spans(), &[Span { y: 5, x0: 3, x1: 10 }]);

        let mut s = Spans::new(50, 50);
        triangle_fill(&mut s, [(0, 0), (10, 10), (0, 10)]);
        let pts = points(&s);
        for x in 0..=10 {
            assert!(pts.contains(&(x, 10)), "bottom row misses x={x}");
        }
    }

    #[test]
    fn test_triangle_fill_extreme_coordinates() {
        let mut s = Spans::new(16, 16);
        let big = i64::from(i32::MAX);
        let small = i64::from(i32::MIN);
        triangle_fill(&mut s, [(small, small), (big, 0), (0, 15)]);
        assert!(s.extent().unwrap().outside(16, 16).is_some());
        for span in s.spans() {
            assert!(span.x0 >= 0 && span.x1 < 16);
            assert!(span.y >= 0 && span.y < 16);
        }
    }
}
