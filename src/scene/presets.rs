//! Ready-made scenes
//!
//! Every 4D preset has a translation at the root so the whole scene can be
//! moved with [`set_translation`](crate::types::SdfNode::set_translation).
//! The shapes themselves sit under an identity transform that can be
//! retargeted with [`set_transform`](crate::types::SdfNode::set_transform).

use glam::{Mat4, Vec3, Vec4};

use crate::types::{SdfMetadata, SdfNode, SdfTree};

fn movable(node: SdfNode<Vec4>) -> SdfNode<Vec4> {
    node.transform(Mat4::IDENTITY).translate(Vec4::ZERO)
}

/// A 3x3x3x3 lattice of hyperspheres (radius 7, spacing 17)
pub fn hypercube_spheres() -> SdfTree<Vec4> {
    let lattice = SdfNode::hypersphere(7.0)
        .translate(Vec4::ZERO)
        .repeat_finite(Vec4::splat(17.0), Vec4::ONE);

    SdfTree::with_metadata(movable(lattice), SdfMetadata::named("hypercube spheres"))
}

/// A hypercube (half extent 14) standing above a long floor slab
pub fn hypercube_with_floor() -> SdfTree<Vec4> {
    let floor = SdfNode::cuboid(Vec4::new(40.0, 2.0, 400.0, 10.0))
        .translate(Vec4::new(0.0, -30.0, 100.0, 0.0));
    let scene = movable(SdfNode::hypercube(14.0)).union(floor);

    SdfTree::with_metadata(
        scene.translate(Vec4::ZERO),
        SdfMetadata::named("hypercube with floor"),
    )
}

/// A single hypersphere of radius 50
pub fn hypersphere() -> SdfTree<Vec4> {
    SdfTree::with_metadata(
        movable(SdfNode::hypersphere(50.0)),
        SdfMetadata::named("hypersphere"),
    )
}

/// 3D test scene: a rotated cube smoothly merged with a sphere
pub fn playground_3d() -> SdfTree<Vec3> {
    let rotation = Mat4::from_axis_angle(Vec3::ONE.normalize(), 90f32.to_radians());
    let cube = SdfNode::cube(20.0).transform(rotation);
    let ball = SdfNode::sphere(30.0).translate(Vec3::new(-30.0, 0.0, 20.0));

    SdfTree::with_metadata(cube.smooth_union(ball, 10.0), SdfMetadata::named("playground"))
}
