//! Natural cubic spline through a series of points, flattened to a polyline
//! so it can be drawn as an ordinary plot line.

/// Sample a natural cubic spline through `points`.
///
/// Each coordinate is splined independently over the point index, giving one
/// cubic Bézier segment between consecutive points; every segment is sampled
/// at `samples_per_segment` steps. The output starts at the first point and
/// passes through every input point. Fewer than three points are returned as
/// straight segments.
pub fn natural_curve(points: &[[f64; 2]], samples_per_segment: usize) -> Vec<[f64; 2]> {
    if points.len() < 3 {
        return points.to_vec();
    }
    let samples = samples_per_segment.max(1);

    let xs: Vec<f64> = points.iter().map(|p| p[0]).collect();
    let ys: Vec<f64> = points.iter().map(|p| p[1]).collect();
    let (x1, x2) = control_points(&xs);
    let (y1, y2) = control_points(&ys);

    let mut out = Vec::with_capacity((points.len() - 1) * samples + 1);
    out.push(points[0]);
    for i in 0..points.len() - 1 {
        let p0 = points[i];
        let p3 = points[i + 1];
        let c1 = [x1[i], y1[i]];
        let c2 = [x2[i], y2[i]];
        for s in 1..=samples {
            let t = s as f64 / samples as f64;
            out.push(cubic_bezier(p0, c1, c2, p3, t));
        }
    }
    out
}

/// First and second Bézier control points of each segment, solving the
/// tridiagonal system for zero second derivative at both ends.
fn control_points(x: &[f64]) -> (Vec<f64>, Vec<f64>) {
    let n = x.len() - 1;
    let mut a = vec![0.0; n];
    let mut b = vec![0.0; n];
    let mut r = vec![0.0; n];

    a[0] = 0.0;
    b[0] = 2.0;
    r[0] = x[0] + 2.0 * x[1];
    for i in 1..n - 1 {
        a[i] = 1.0;
        b[i] = 4.0;
        r[i] = 4.0 * x[i] + 2.0 * x[i + 1];
    }
    a[n - 1] = 2.0;
    b[n - 1] = 7.0;
    r[n - 1] = 8.0 * x[n - 1] + x[n];

    for i in 1..n {
        let m = a[i] / b[i - 1];
        b[i] -= m;
        r[i] -= m * r[i - 1];
    }

    a[n - 1] = r[n - 1] / b[n - 1];
    for i in (0..n - 1).rev() {
        a[i] = (r[i] - a[i + 1]) / b[i];
    }

    b[n - 1] = (x[n] + a[n - 1]) / 2.0;
    for i in 0..n - 1 {
        b[i] = 2.0 * x[i + 1] - a[i + 1];
    }

    (a, b)
}

fn cubic_bezier(p0: [f64; 2], c1: [f64; 2], c2: [f64; 2], p3: [f64; 2], t: f64) -> [f64; 2] {
    let u = 1.0 - t;
    let w0 = u * u * u;
    let w1 = 3.0 * u * u * t;
    let w2 = 3.0 * u * t * t;
    let w3 = t * t * t;
    [
        w0 * p0[0] + w1 * c1[0] + w2 * c2[0] + w3 * p3[0],
        w0 * p0[1] + w1 * c1[1] + w2 * c2[1] + w3 * p3[1],
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: [f64; 2], b: [f64; 2]) -> bool {
        (a[0] - b[0]).abs() < 1e-9 && (a[1] - b[1]).abs() < 1e-9
    }

    #[test]
    fn test_short_inputs_pass_through() {
        assert!(natural_curve(&[], 8).is_empty());
        assert_eq!(natural_curve(&[[1.0, 2.0]], 8), vec![[1.0, 2.0]]);
        assert_eq!(
            natural_curve(&[[0.0, 0.0], [1.0, 5.0]], 8),
            vec![[0.0, 0.0], [1.0, 5.0]]
        );
    }

    #[test]
    fn test_curve_hits_every_point() {
        let points = [[0.0, 3.0], [1.0, 9.0], [2.0, 1.0], [3.0, 4.0], [4.0, 4.0]];
        let samples = 6;
        let curve = natural_curve(&points, samples);

        assert_eq!(curve.len(), (points.len() - 1) * samples + 1);
        for (i, p) in points.iter().enumerate() {
            assert!(close(curve[i * samples], *p), "point {i} missed");
        }
    }

    #[test]
    fn test_collinear_points_stay_on_the_line() {
        let points = [[0.0, 0.0], [1.0, 2.0], [2.0, 4.0], [3.0, 6.0]];
        for p in natural_curve(&points, 10) {
            assert!((p[1] - 2.0 * p[0]).abs() < 1e-9);
        }
    }

    #[test]
    fn test_three_points() {
        let points = [[0.0, 0.0], [1.0, 1.0], [2.0, 0.0]];
        let curve = natural_curve(&points, 4);
        assert!(close(curve[0], points[0]));
        assert!(close(curve[4], points[1]));
        assert!(close(curve[8], points[2]));
        // bends upward between the ends
        assert!(curve[2][1] > 0.5);
    }
}
