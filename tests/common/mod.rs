// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use incomplete_tetrahedra::EdgeSet;

/// Build a mask from vertex pairs, panicking on an invalid pair.
pub fn mask(pairs: &[(u8, u8)]) -> EdgeSet {
    EdgeSet::from_pairs(pairs).unwrap_or_else(|| panic!("invalid edge in {:?}", pairs))
}

/// Masks of the records, in order.
pub fn masks_of(records: &[incomplete_tetrahedra::ClassifiedSubset]) -> Vec<u8> {
    records.iter().map(|r| r.mask.bits()).collect()
}

/// Vertex coordinates of a tetrahedron inscribed in the cube [-1, 1]^3.
pub const TETRAHEDRON: [[i32; 3]; 4] = [[1, 1, 1], [1, -1, -1], [-1, 1, -1], [-1, -1, 1]];

/// A 3x3 integer matrix.
pub type Matrix = [[i32; 3]; 3];

pub fn determinant(m: &Matrix) -> i32 {
    m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
        - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
        + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
}

pub fn transform(m: &Matrix, p: &[i32; 3]) -> [i32; 3] {
    let mut out = [0; 3];
    for (i, row) in m.iter().enumerate() {
        out[i] = row[0] * p[0] + row[1] * p[1] + row[2] * p[2];
    }
    out
}

/// All 24 proper rotations of the cube, as signed permutation matrices with determinant 1.
pub fn cube_rotations() -> Vec<Matrix> {
    let perms = [[0, 1, 2], [0, 2, 1], [1, 0, 2], [1, 2, 0], [2, 0, 1], [2, 1, 0]];
    let mut out = Vec::new();
    for perm in perms {
        for signs in 0..8 {
            let mut m = [[0; 3]; 3];
            for row in 0..3 {
                m[row][perm[row]] = if (signs >> row) & 1 == 1 { -1 } else { 1 };
            }
            if determinant(&m) == 1 {
                out.push(m);
            }
        }
    }
    out
}

/// Vertex permutations induced by the cube rotations that map the tetrahedron onto itself.
pub fn geometric_vertex_permutations() -> Vec<[u8; 4]> {
    let mut out = Vec::new();
    for m in cube_rotations() {
        let images: Option<Vec<u8>> = TETRAHEDRON
            .iter()
            .map(|v| {
                let image = transform(&m, v);
                TETRAHEDRON.iter().position(|w| *w == image).map(|i| i as u8)
            })
            .collect();
        if let Some(images) = images {
            out.push([images[0], images[1], images[2], images[3]]);
        }
    }
    out
}
