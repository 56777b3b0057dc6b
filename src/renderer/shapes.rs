//! Rasterisation for 2D primitives
//!
//! Integer-only so the same code runs on the badge and in tests.

/// Horizontal spans `(y, x_start, x_end)` covering a filled circle
pub fn filled_circle_spans(cx: i32, cy: i32, radius: i32) -> impl Iterator<Item = (i32, i32, i32)> {
    let r = radius.max(0);
    (-r..=r).map(move |dy| {
        // Widest dx with dx² + dy² <= r²
        let mut dx = r;
        while dx * dx + dy * dy > r * r {
            dx -= 1;
        }
        (cy + dy, cx - dx, cx + dx)
    })
}

/// Points on a circle outline (midpoint algorithm)
pub fn circle_outline(cx: i32, cy: i32, radius: i32) -> Vec<(i32, i32)> {
    let mut points = Vec::new();
    if radius <= 0 {
        points.push((cx, cy));
        return points;
    }

    let mut x = radius;
    let mut y = 0;
    let mut err = 1 - radius;
    while x >= y {
        for (px, py) in [
            (x, y),
            (y, x),
            (-y, x),
            (-x, y),
            (-x, -y),
            (-y, -x),
            (y, -x),
            (x, -y),
        ] {
            let p = (cx + px, cy + py);
            if !points.contains(&p) {
                points.push(p);
            }
        }
        y += 1;
        if err < 0 {
            err += 2 * y + 1;
        } else {
            x -= 1;
            err += 2 * (y - x) + 1;
        }
    }
    points
}

/// Points on a line segment, endpoints included (Bresenham)
pub fn line_points(x0: i32, y0: i32, x1: i32, y1: i32) -> Vec<(i32, i32)> {
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };

    let mut points = Vec::with_capacity((dx.max(-dy) + 1) as usize);
    let (mut x, mut y) = (x0, y0);
    let mut err = dx + dy;
    loop {
        points.push((x, y));
        if x == x1 && y == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
    points
}
