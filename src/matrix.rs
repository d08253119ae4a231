use std::f32::consts::PI;

/*
    every matrix is a list of rows
    points are stored as rows [x, y, z, 1] and are transformed as p' = p * m
    so the translation of a transformation lives in row 3
*/
pub type Matrix = [[f32; 4]; 4];

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Rotation {
    X,
    Y,
    Z,
}

pub fn identity() -> Matrix {
    [
        [1.0, 0.0, 0.0, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]
}

/// Applies `a` to every row of `b` in place.
///
/// `b` can be an edge list or another transformation. When `b` is the running
/// transformation, the result applies the old `b` first and `a` last.
pub fn multiply(a: &Matrix, b: &mut [[f32; 4]]) {
    for row in b.iter_mut() {
        let original = *row;

        for (column, value) in row.iter_mut().enumerate() {
            *value = original[0] * a[0][column]
                + original[1] * a[1][column]
                + original[2] * a[2][column]
                + original[3] * a[3][column];
        }
    }
}

pub fn dilation(sx: f32, sy: f32, sz: f32) -> Matrix {
    let mut m = identity();
    m[0][0] = sx;
    m[1][1] = sy;
    m[2][2] = sz;
    m
}

pub fn translation(tx: f32, ty: f32, tz: f32) -> Matrix {
    let mut m = identity();
    m[3][0] = tx;
    m[3][1] = ty;
    m[3][2] = tz;
    m
}

pub fn rotation(axis: Rotation, degrees: f32) -> Matrix {
    let radians = degrees * PI / 180.0;
    let (sin, cos) = radians.sin_cos();

    // the two axes that aren't the axis of rotation
    let (a, b) = match axis {
        Rotation::X => (1, 2),
        Rotation::Y => (0, 2),
        Rotation::Z => (0, 1),
    };

    let mut m = identity();
    m[a][a] = cos;
    m[b][a] = -sin;
    m[a][b] = sin;
    m[b][b] = cos;
    m
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    fn transform_point(m: &Matrix, x: f32, y: f32, z: f32) -> [f32; 4] {
        let mut points = vec![[x, y, z, 1.0]];
        multiply(m, &mut points);
        points[0]
    }

    fn assert_close(actual: [f32; 4], expected: [f32; 4]) {
        for i in 0..4 {
            assert!(
                (actual[i] - expected[i]).abs() < EPSILON,
                "expected {:?} but got {:?}", expected, actual
            );
        }
    }

    #[test]
    fn identity_leaves_points_alone() {
        assert_close(transform_point(&identity(), 3.5, -2.0, 7.0), [3.5, -2.0, 7.0, 1.0]);
    }

    #[test]
    fn dilation_sets_the_diagonal() {
        let m = dilation(2.0, 3.0, 4.0);
        assert_eq!(m[0][0], 2.0);
        assert_eq!(m[1][1], 3.0);
        assert_eq!(m[2][2], 4.0);
        assert_eq!(m[3][3], 1.0);
        assert_close(transform_point(&m, 1.0, 1.0, 1.0), [2.0, 3.0, 4.0, 1.0]);
    }

    #[test]
    fn translation_lives_in_the_bottom_row() {
        let m = translation(5.0, 6.0, 7.0);
        assert_eq!(m[3], [5.0, 6.0, 7.0, 1.0]);
        assert_eq!(m[0][3], 0.0);
        assert_close(transform_point(&m, 1.0, 1.0, 1.0), [6.0, 7.0, 8.0, 1.0]);
    }

    #[test]
    fn rotating_z_by_90_maps_x_onto_y() {
        assert_close(transform_point(&rotation(Rotation::Z, 90.0), 1.0, 0.0, 0.0), [0.0, 1.0, 0.0, 1.0]);
    }

    #[test]
    fn rotating_x_by_90_maps_y_onto_z() {
        assert_close(transform_point(&rotation(Rotation::X, 90.0), 0.0, 1.0, 0.0), [0.0, 0.0, 1.0, 1.0]);
    }

    #[test]
    fn rotating_y_by_90_maps_x_onto_z() {
        assert_close(transform_point(&rotation(Rotation::Y, 90.0), 1.0, 0.0, 0.0), [0.0, 0.0, 1.0, 1.0]);
    }

    #[test]
    fn rotation_entries_follow_the_axis() {
        let m = rotation(Rotation::Y, 30.0);
        let (sin, cos) = (30.0_f32 * PI / 180.0).sin_cos();
        assert_eq!(m[0][0], cos);
        assert_eq!(m[2][0], -sin);
        assert_eq!(m[0][2], sin);
        assert_eq!(m[2][2], cos);
        assert_eq!(m[1][1], 1.0);
    }

    #[test]
    fn zero_degree_rotations_are_identity() {
        for axis in [Rotation::X, Rotation::Y, Rotation::Z] {
            assert_eq!(rotation(axis, 0.0), identity());
        }
    }

    #[test]
    fn composing_applies_the_newest_transformation_last() {
        let mut transform = identity();
        multiply(&translation(1.0, 0.0, 0.0), &mut transform);
        multiply(&dilation(2.0, 2.0, 2.0), &mut transform);

        // translate then scale, written out by hand
        let expected: Matrix = [
            [2.0, 0.0, 0.0, 0.0],
            [0.0, 2.0, 0.0, 0.0],
            [0.0, 0.0, 2.0, 0.0],
            [2.0, 0.0, 0.0, 1.0],
        ];
        assert_eq!(transform, expected);
        assert_close(transform_point(&transform, 0.0, 0.0, 0.0), [2.0, 0.0, 0.0, 1.0]);
    }
}
