use super::Picture;

pub type EdgeList = Vec<[f32; 4]>;

pub fn add_point(m: &mut EdgeList, x: f32, y: f32, z: f32) {
    m.push([x, y, z, 1.0]);
}

pub fn add_edge(m: &mut EdgeList, x0: f32, y0: f32, z0: f32, x1: f32, y1: f32, z1: f32) {
    add_point(m, x0, y0, z0);
    add_point(m, x1, y1, z1);
}

// pixels are integers so every coordinate is truncated toward zero right before drawing
pub fn to_pixel_coordinates(m: &EdgeList) -> Vec<[isize; 3]> {
    m.iter()
        .map(|point| [point[0] as isize, point[1] as isize, point[2] as isize])
        .collect()
}

pub fn render_edges(m: &EdgeList, picture: &mut Picture, color: &(usize, usize, usize)) {
    let points = to_pixel_coordinates(m);

    // a trailing point without a partner is never drawn
    for edge in points.chunks_exact(2) {
        picture.draw_line(edge[0][0], edge[0][1], edge[1][0], edge[1][1], color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{BLUE, WHITE};

    #[test]
    fn edges_are_stored_as_homogeneous_pairs() {
        let mut edges: EdgeList = vec![];
        add_edge(&mut edges, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0);
        add_edge(&mut edges, 0.0, 0.0, 0.0, 1.0, 1.0, 1.0);

        assert_eq!(edges.len(), 4);
        assert_eq!(edges[0], [1.0, 2.0, 3.0, 1.0]);
        assert_eq!(edges[1], [4.0, 5.0, 6.0, 1.0]);
        assert_eq!(edges[3], [1.0, 1.0, 1.0, 1.0]);
    }

    #[test]
    fn coordinates_truncate_toward_zero() {
        let mut edges: EdgeList = vec![];
        add_point(&mut edges, 1.9, -1.9, 0.5);

        assert_eq!(to_pixel_coordinates(&edges), vec![[1, -1, 0]]);
    }

    #[test]
    fn truncation_does_not_touch_the_edge_list() {
        let mut edges: EdgeList = vec![];
        add_edge(&mut edges, 0.5, 0.5, 0.5, 2.75, 2.75, 2.75);
        let mut picture = Picture::new(5, 5, 255, &WHITE);
        render_edges(&edges, &mut picture, &BLUE);

        assert_eq!(edges[1], [2.75, 2.75, 2.75, 1.0]);
    }

    #[test]
    fn every_edge_is_drawn() {
        let mut edges: EdgeList = vec![];
        add_edge(&mut edges, 0.0, 0.0, 0.0, 4.9, 0.0, 0.0);
        add_edge(&mut edges, 0.0, 4.0, 0.0, 0.0, 2.0, 0.0);

        let mut picture = Picture::new(5, 5, 255, &WHITE);
        render_edges(&edges, &mut picture, &BLUE);

        for x in 0..5 {
            assert_eq!(picture.get_pixel(x, 0), Some((0, 0, 255)));
        }
        for y in 2..5 {
            assert_eq!(picture.get_pixel(0, y), Some((0, 0, 255)));
        }
        assert_eq!(picture.get_pixel(1, 1), Some((255, 255, 255)));
    }
}
