//! # Primitive Shape Generation
//!
//! This module contains the parametric shape generators. Each shape walks a
//! regular `(outer, inner)` parameter grid, so all of them share the same
//! triangulation helper; only the vertex math differs.

use super::{GeometryError, MeshData};
use log::debug;
use std::f32::consts::{PI, TAU};

/// Which way around a grid cell the first triangle turns
///
/// The correct choice depends on whether `d(outer) x d(inner)` points along
/// the surface normal or against it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Winding {
    /// Cell is split as `(a, c, d)` and `(a, d, b)`.
    OuterFirst,
    /// Cell is split as `(a, b, d)` and `(a, d, c)`.
    InnerFirst,
}

/// Generate a tessellated quad lying in the XZ plane
///
/// # Arguments
/// * `width` - Extent along X
/// * `height` - Extent along Z
/// * `horizontal_split_count` - Number of vertex columns along X
/// * `vertical_split_count` - Number of vertex rows along Z
///
/// The quad spans `[0, width] x [0, height]` with every normal pointing up
/// (+Y). Split counts below 2 are raised to 2, so `(0, 0)` produces the plain
/// quad made of two triangles.
pub fn generate_quad(
    width: f32,
    height: f32,
    horizontal_split_count: u32,
    vertical_split_count: u32,
) -> Result<MeshData, GeometryError> {
    require_non_negative("width", width)?;
    require_non_negative("height", height)?;

    let columns = horizontal_split_count.max(2);
    let rows = vertical_split_count.max(2);
    let vertex_count = grid_vertex_count(u64::from(columns), u64::from(rows))?;
    let column_edges = columns - 1;
    let row_edges = rows - 1;

    let mut data = MeshData::with_capacity(
        vertex_count,
        2 * column_edges as usize * row_edges as usize,
    );

    for x in 0..columns {
        let u = x as f32 / column_edges as f32;
        for z in 0..rows {
            let v = z as f32 / row_edges as f32;
            data.push_vertex(
                [u * width, 0.0, v * height],
                [u, v],
                [0.0, 0.0, 1.0],
                [1.0, 0.0, 0.0],
            );
        }
    }

    // +X x +Z points down, so turn towards +Z first.
    data.indices = grid_triangles(column_edges, row_edges, Winding::InnerFirst);

    debug!(
        "Generated quad {}x{}: {} vertices, {} triangles",
        width,
        height,
        data.vertex_count(),
        data.triangle_count()
    );
    Ok(data)
}

/// Generate a UV sphere centered at the origin
///
/// # Arguments
/// * `radius` - Sphere radius
/// * `longitude_split_count` - Extra splits around the Y axis
/// * `latitude_split_count` - Extra splits from pole to pole
///
/// Position for longitude `theta` and latitude `phi` is
/// `(r sin(theta) sin(phi), -r cos(phi), r cos(theta) sin(phi))`. The poles are
/// ordinary grid rows; their triangles are degenerate but valid.
pub fn generate_sphere(
    radius: f32,
    longitude_split_count: u32,
    latitude_split_count: u32,
) -> Result<MeshData, GeometryError> {
    require_non_negative("radius", radius)?;

    let longitude_edges = u64::from(longitude_split_count) + 1;
    let latitude_edges = u64::from(latitude_split_count) + 1;
    let vertex_count = grid_vertex_count(longitude_edges + 1, latitude_edges + 1)?;
    let longitude_edges = longitude_edges as u32;
    let latitude_edges = latitude_edges as u32;

    let d_theta = TAU / longitude_edges as f32;
    let d_phi = PI / latitude_edges as f32;

    let mut data = MeshData::with_capacity(
        vertex_count,
        2 * longitude_edges as usize * latitude_edges as usize,
    );

    for i in 0..=longitude_edges {
        let (sin_theta, cos_theta) = (i as f32 * d_theta).sin_cos();

        for j in 0..=latitude_edges {
            let (sin_phi, cos_phi) = (j as f32 * d_phi).sin_cos();

            data.push_vertex(
                [
                    radius * sin_theta * sin_phi,
                    -radius * cos_phi,
                    radius * cos_theta * sin_phi,
                ],
                [
                    i as f32 / longitude_edges as f32,
                    j as f32 / latitude_edges as f32,
                ],
                [cos_theta, 0.0, -sin_theta],
                [sin_theta * cos_phi, sin_phi, cos_theta * cos_phi],
            );
        }
    }

    data.indices = grid_triangles(longitude_edges, latitude_edges, Winding::OuterFirst);

    debug!(
        "Generated sphere r={}: {} vertices, {} triangles",
        radius,
        data.vertex_count(),
        data.triangle_count()
    );
    Ok(data)
}

/// Generate a torus lying around the Y axis
///
/// # Arguments
/// * `major_radius` - Distance from the Y axis to the center of the tube
/// * `minor_radius` - Radius of the tube
/// * `major_split_count` - Extra splits around the ring
/// * `minor_split_count` - Extra splits around the tube
///
/// Position for tube angle `theta` and ring angle `phi` is
/// `((R + r cos(theta)) cos(phi), -r sin(theta), (R + r cos(theta)) sin(phi))`.
pub fn generate_torus(
    major_radius: f32,
    minor_radius: f32,
    major_split_count: u32,
    minor_split_count: u32,
) -> Result<MeshData, GeometryError> {
    require_non_negative("major_radius", major_radius)?;
    require_non_negative("minor_radius", minor_radius)?;

    let tube_edges = u64::from(minor_split_count) + 1;
    let ring_edges = u64::from(major_split_count) + 1;
    let vertex_count = grid_vertex_count(tube_edges + 1, ring_edges + 1)?;
    let tube_edges = tube_edges as u32;
    let ring_edges = ring_edges as u32;

    let d_theta = TAU / tube_edges as f32;
    let d_phi = TAU / ring_edges as f32;

    let mut data =
        MeshData::with_capacity(vertex_count, 2 * tube_edges as usize * ring_edges as usize);

    for i in 0..=tube_edges {
        let (sin_theta, cos_theta) = (i as f32 * d_theta).sin_cos();
        let distance_to_axis = major_radius + minor_radius * cos_theta;

        for j in 0..=ring_edges {
            let (sin_phi, cos_phi) = (j as f32 * d_phi).sin_cos();

            data.push_vertex(
                [
                    distance_to_axis * cos_phi,
                    -minor_radius * sin_theta,
                    distance_to_axis * sin_phi,
                ],
                [j as f32 / ring_edges as f32, i as f32 / tube_edges as f32],
                [sin_theta * cos_phi, cos_theta, sin_theta * sin_phi],
                [-sin_phi, 0.0, cos_phi],
            );
        }
    }

    // d/dtheta runs against the stored tangent, so the outer x inner turn is inward.
    data.indices = grid_triangles(tube_edges, ring_edges, Winding::InnerFirst);

    debug!(
        "Generated torus R={} r={}: {} vertices, {} triangles",
        major_radius,
        minor_radius,
        data.vertex_count(),
        data.triangle_count()
    );
    Ok(data)
}

/// Generate a flat annulus in the XY plane facing +Z
///
/// # Arguments
/// * `radius` - Distance from the center to the middle of the band
/// * `spread_length` - Width of the band
/// * `split_count` - Extra splits around the circle
/// * `spread_split_count` - Extra splits across the band
///
/// Vertices cover radial distances `[radius - spread/2, radius + spread/2]`.
/// A band wider than the ring's diameter is rejected.
pub fn generate_circle_ring(
    radius: f32,
    spread_length: f32,
    split_count: u32,
    spread_split_count: u32,
) -> Result<MeshData, GeometryError> {
    require_non_negative("radius", radius)?;
    require_non_negative("spread_length", spread_length)?;

    let spread_start = radius - 0.5 * spread_length;
    if spread_start < 0.0 {
        return Err(GeometryError::InvalidArgument {
            name: "spread_length",
            value: spread_length,
            reason: "band is wider than the ring's diameter",
        });
    }

    let slice_edges = u64::from(split_count) + 1;
    let spread_edges = u64::from(spread_split_count) + 1;
    let vertex_count = grid_vertex_count(slice_edges + 1, spread_edges + 1)?;
    let slice_edges = slice_edges as u32;
    let spread_edges = spread_edges as u32;

    let d_theta = TAU / slice_edges as f32;

    let mut data = MeshData::with_capacity(
        vertex_count,
        2 * slice_edges as usize * spread_edges as usize,
    );

    for i in 0..=slice_edges {
        let (sin_theta, cos_theta) = (i as f32 * d_theta).sin_cos();

        for j in 0..=spread_edges {
            let across = j as f32 / spread_edges as f32;
            let distance_to_centre = spread_start + across * spread_length;

            data.push_vertex(
                [
                    distance_to_centre * cos_theta,
                    distance_to_centre * sin_theta,
                    0.0,
                ],
                [across, i as f32 / slice_edges as f32],
                [cos_theta, sin_theta, 0.0],
                [-sin_theta, cos_theta, 0.0],
            );
        }
    }

    data.indices = grid_triangles(slice_edges, spread_edges, Winding::InnerFirst);

    debug!(
        "Generated circle ring r={} spread={}: {} vertices, {} triangles",
        radius,
        spread_length,
        data.vertex_count(),
        data.triangle_count()
    );
    Ok(data)
}

/// Two triangles for every cell of an `outer_edges x inner_edges` grid whose
/// vertices are stored outer-major (`index = i * (inner_edges + 1) + j`).
fn grid_triangles(outer_edges: u32, inner_edges: u32, winding: Winding) -> Vec<[u32; 3]> {
    let stride = inner_edges + 1;
    let mut indices = Vec::with_capacity(2 * outer_edges as usize * inner_edges as usize);

    for i in 0..outer_edges {
        for j in 0..inner_edges {
            let a = i * stride + j;
            let b = a + 1;
            let c = a + stride;
            let d = c + 1;

            match winding {
                Winding::OuterFirst => {
                    indices.push([a, c, d]);
                    indices.push([a, d, b]);
                }
                Winding::InnerFirst => {
                    indices.push([a, b, d]);
                    indices.push([a, d, c]);
                }
            }
        }
    }

    indices
}

fn grid_vertex_count(outer_vertices: u64, inner_vertices: u64) -> Result<usize, GeometryError> {
    let count = outer_vertices.saturating_mul(inner_vertices);
    if count > u64::from(u32::MAX) {
        return Err(GeometryError::TooManyVertices(count));
    }
    Ok(count as usize)
}

fn require_non_negative(name: &'static str, value: f32) -> Result<(), GeometryError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(GeometryError::InvalidArgument {
            name,
            value,
            reason: "must be finite and non-negative",
        })
    }
}
