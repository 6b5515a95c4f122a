//! Render meshes of sliced pieces.

pub use self::mesh_builder::{build_mesh, BuiltMesh, Triangulation};
pub use self::mesh_data::{MeshData, VERTEX_COLOR};
pub use self::sprite_uv_mapping::{RenderSortKey, SpriteFlags, SpriteUvMapping};

mod mesh_builder;
mod mesh_data;
mod sprite_uv_mapping;
