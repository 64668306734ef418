mod local_store;
mod object_artifact_store;
mod store_factory;

pub use local_store::LocalArtifactStore;
pub use object_artifact_store::ObjectArtifactStore;
pub use store_factory::ArtifactStoreFactory;
