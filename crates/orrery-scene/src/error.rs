use orrery_mesh::MeshError;
use orrery_query::QueryError;

/// Errors raised while building or querying a scene.
#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    #[error("body '{name}': {source}")]
    Mesh {
        name: String,
        #[source]
        source: MeshError,
    },

    #[error(transparent)]
    Query(#[from] QueryError),

    #[error("body '{name}': {reason}")]
    InvalidOrbit { name: String, reason: &'static str },

    #[error("duplicate body name '{0}'")]
    DuplicateBody(String),
}
